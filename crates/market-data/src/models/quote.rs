use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency assumed when the upstream omits one.
pub const DEFAULT_QUOTE_CURRENCY: &str = "USD";

/// A priced symbol snapshot.
///
/// Created by a successful upstream fetch and treated as read-only
/// afterwards; the cache stores the serialized form verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Symbol/ticker (e.g., "AAPL", "BTC-USD")
    pub symbol: String,

    /// Quote currency (e.g., "USD", "EUR")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Latest price in the quote currency
    pub price: Decimal,

    /// Timestamp the upstream attached to the price
    pub timestamp: DateTime<Utc>,
}

fn default_currency() -> String {
    DEFAULT_QUOTE_CURRENCY.to_string()
}

impl QuoteRecord {
    /// Create a record with the default currency and the current timestamp.
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            currency: DEFAULT_QUOTE_CURRENCY.to_string(),
            price,
            timestamp: Utc::now(),
        }
    }

    /// Set the quote currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the quote timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
