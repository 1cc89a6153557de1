//! Data models for quotes, conversion rates and symbol search.

mod quote;
mod rates;
mod search;

pub use quote::{QuoteRecord, DEFAULT_QUOTE_CURRENCY};
pub use rates::RateTable;
pub use search::SymbolMatch;
