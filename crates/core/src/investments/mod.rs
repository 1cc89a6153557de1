//! Investment bookkeeping and portfolio valuation.
//!
//! This module provides:
//! - [`model`] - Investment records, creation input, and summary types
//! - [`store`] - The storage trait implemented by the storage crate
//! - [`service`] - CRUD plus the quote/rate-backed portfolio summary

pub mod model;
pub mod service;
pub mod store;


pub use model::{
    Investment, InvestmentKind, NewInvestment, PortfolioSummary, PositionValuation,
};
pub use service::{InvestmentService, InvestmentServiceTrait};
pub use store::InvestmentStore;
