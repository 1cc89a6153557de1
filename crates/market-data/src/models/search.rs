//! Search result models for symbol lookup.

use serde::{Deserialize, Serialize};

/// Result from a ticker/symbol search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
    /// Symbol/ticker (e.g., "AAPL", "SHOP.TO")
    pub symbol: String,

    /// Short display name (e.g., "Apple Inc")
    pub name: String,

    /// Exchange name or MIC (e.g., "NASDAQ", "XNAS")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Asset type (e.g., "stock", "etf", "crypto")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_kind: Option<String>,

    /// Currency for the symbol (e.g., "USD", "CAD")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl SymbolMatch {
    /// Create a new match with required fields.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            exchange: None,
            asset_kind: None,
            currency: None,
        }
    }

    /// Set the exchange.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Set the asset type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.asset_kind = Some(kind.into());
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}
