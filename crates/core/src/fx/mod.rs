//! Currency conversion-rate lookups.
//!
//! One cache entry per base currency (`currencyRates:<BASE>`, 1 hour TTL)
//! holding the whole target-currency table.

pub mod service;

pub use service::{RateService, RateServiceTrait};
