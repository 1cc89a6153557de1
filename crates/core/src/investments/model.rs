use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::errors::ValidationError;

/// Broad asset class of an investment. Only market-priced kinds are
/// re-valued from live quotes; everything else is carried at cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentKind {
    Stock,
    Crypto,
    Cash,
    RealEstate,
    Other,
}

impl InvestmentKind {
    /// Whether positions of this kind are valued from live quotes.
    pub fn is_market_priced(&self) -> bool {
        matches!(self, InvestmentKind::Stock | InvestmentKind::Crypto)
    }
}

/// A single holding owned by one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_email: String,
    /// Ticker used for quote lookups. Optional for kinds that have no
    /// market listing (cash, real estate).
    pub symbol: Option<String>,
    pub name: String,
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    /// Acquisition price per unit, in `currency`.
    pub unit_cost: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Client input for creating an investment. Identity and ownership
/// fields are assigned by the service, never by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(default)]
    pub symbol: Option<String>,
    pub name: String,
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
}

impl NewInvestment {
    /// Check the input before it is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Quantity must be greater than zero".to_string(),
            ));
        }
        if self.unit_cost < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Unit cost cannot be negative".to_string(),
            ));
        }
        if self.kind.is_market_priced() && self.trimmed_symbol().is_none() {
            return Err(ValidationError::MissingField("symbol".to_string()));
        }
        if let Some(currency) = &self.currency {
            let code = currency.trim();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ValidationError::InvalidInput(format!(
                    "Invalid currency code '{currency}'"
                )));
            }
        }
        Ok(())
    }

    /// Build the stored record, assigning id, owner, and timestamps.
    pub fn into_investment(self, user_email: &str) -> Investment {
        let symbol = self.trimmed_symbol();
        let currency = self
            .currency
            .as_deref()
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());
        Investment {
            id: Uuid::new_v4().to_string(),
            user_email: user_email.to_string(),
            symbol,
            name: self.name.trim().to_string(),
            kind: self.kind,
            quantity: self.quantity,
            unit_cost: self.unit_cost,
            currency,
            created_at: Utc::now(),
        }
    }

    fn trimmed_symbol(&self) -> Option<String> {
        self.symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
    }
}

/// One line of a portfolio summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    /// Currency the position was valued in before base conversion.
    pub currency: String,
    /// Quote price when `priced`, acquisition cost otherwise.
    pub unit_price: Decimal,
    /// `quantity * unit_price`, in `currency`.
    pub market_value: Decimal,
    /// Market value converted into the summary base currency.
    pub base_value: Decimal,
    /// Share of the portfolio total, percent with two decimals.
    pub allocation: Decimal,
    /// Whether a live quote was applied. Positions without a usable
    /// quote are carried at cost.
    pub priced: bool,
}

/// Whole-portfolio valuation in a single base currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub base_currency: String,
    pub total_value: Decimal,
    pub positions: Vec<PositionValuation>,
}
