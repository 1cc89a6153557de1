//! Diagnostic log entries recorded by the application and surfaced to
//! administrators.

pub mod model;
pub mod service;
pub mod store;

pub use model::{DiagnosticLog, LogLevel};
pub use service::{LogService, LogServiceTrait};
pub use store::LogStore;
