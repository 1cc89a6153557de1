use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fortuneok_market_data::RateTable;

use crate::constants::{ALLOCATION_PRECISION, DEFAULT_BASE_CURRENCY};
use crate::errors::{Error, Result};
use crate::fx::RateServiceTrait;
use crate::investments::model::{
    Investment, NewInvestment, PortfolioSummary, PositionValuation,
};
use crate::investments::store::InvestmentStore;
use crate::quotes::QuoteServiceTrait;

/// Investment operations exposed to the API layer.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    async fn list_investments(&self, user_email: &str) -> Result<Vec<Investment>>;

    /// Validate and persist a new investment for `user_email`.
    async fn create_investment(
        &self,
        user_email: &str,
        input: NewInvestment,
    ) -> Result<Investment>;

    /// Delete one of the user's investments. Ids owned by someone else
    /// are reported as not found rather than forbidden.
    async fn delete_investment(&self, user_email: &str, id: &str) -> Result<()>;

    /// Value the user's portfolio in `base_currency`.
    async fn portfolio_summary(
        &self,
        user_email: &str,
        base_currency: &str,
    ) -> Result<PortfolioSummary>;
}

/// Values portfolios by combining stored positions with live quotes
/// and conversion rates. Quote and rate outages degrade the summary
/// to cost basis instead of failing it.
pub struct InvestmentService {
    store: Arc<dyn InvestmentStore>,
    quotes: Arc<dyn QuoteServiceTrait>,
    rates: Arc<dyn RateServiceTrait>,
}

impl InvestmentService {
    pub fn new(
        store: Arc<dyn InvestmentStore>,
        quotes: Arc<dyn QuoteServiceTrait>,
        rates: Arc<dyn RateServiceTrait>,
    ) -> Self {
        Self {
            store,
            quotes,
            rates,
        }
    }

    /// Tickers to quote: distinct symbols of market-priced positions.
    fn quotable_symbols(investments: &[Investment]) -> Vec<String> {
        investments
            .iter()
            .filter(|inv| inv.kind.is_market_priced())
            .filter_map(|inv| inv.symbol.as_deref())
            .map(|s| s.trim().to_uppercase())
            .collect()
    }

    /// Convert `value` from `currency` into `base`. Falls back to 1:1
    /// when no rate is available so the position still counts toward
    /// the total.
    fn convert_to_base(
        value: Decimal,
        currency: &str,
        base: &str,
        rates: Option<&RateTable>,
    ) -> Decimal {
        if currency.eq_ignore_ascii_case(base) {
            return value;
        }
        let rate = rates.and_then(|table| table.get(&currency.to_lowercase()).copied());
        match rate {
            Some(rate) if !rate.is_zero() => value / rate,
            _ => {
                warn!("No conversion rate from {currency} to {base}, using 1:1");
                value
            }
        }
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn list_investments(&self, user_email: &str) -> Result<Vec<Investment>> {
        self.store.list_for_user(user_email).await
    }

    async fn create_investment(
        &self,
        user_email: &str,
        input: NewInvestment,
    ) -> Result<Investment> {
        input.validate()?;
        self.store.insert(input.into_investment(user_email)).await
    }

    async fn delete_investment(&self, user_email: &str, id: &str) -> Result<()> {
        let not_found = || Error::NotFound(format!("Investment '{id}'"));
        let investment = self.store.get(id).await?.ok_or_else(not_found)?;
        if investment.user_email != user_email {
            return Err(not_found());
        }
        if !self.store.delete(id).await? {
            return Err(not_found());
        }
        Ok(())
    }

    async fn portfolio_summary(
        &self,
        user_email: &str,
        base_currency: &str,
    ) -> Result<PortfolioSummary> {
        let investments = self.store.list_for_user(user_email).await?;

        let base = {
            let trimmed = base_currency.trim().to_uppercase();
            if trimmed.is_empty() {
                DEFAULT_BASE_CURRENCY.to_string()
            } else {
                trimmed
            }
        };

        let symbols = Self::quotable_symbols(&investments);
        let quotes = if symbols.is_empty() {
            HashMap::new()
        } else {
            match self.quotes.get_stock_prices(&symbols).await {
                Ok(quotes) => quotes,
                Err(err) => {
                    warn!("Quote lookup failed, valuing portfolio at cost: {err}");
                    HashMap::new()
                }
            }
        };

        let needs_conversion = investments
            .iter()
            .any(|inv| !inv.currency.eq_ignore_ascii_case(&base))
            || quotes
                .values()
                .any(|quote| !quote.currency.eq_ignore_ascii_case(&base));
        let rates = if needs_conversion {
            self.rates.get_conversion_rates(&base).await
        } else {
            None
        };

        let mut positions: Vec<PositionValuation> = investments
            .into_iter()
            .map(|inv| {
                let quote = inv
                    .kind
                    .is_market_priced()
                    .then(|| inv.symbol.as_deref())
                    .flatten()
                    .and_then(|symbol| quotes.get(&symbol.trim().to_uppercase()));
                let (unit_price, currency, priced) = match quote {
                    Some(quote) => (quote.price, quote.currency.clone(), true),
                    None => (inv.unit_cost, inv.currency.clone(), false),
                };
                let market_value = inv.quantity * unit_price;
                let base_value =
                    Self::convert_to_base(market_value, &currency, &base, rates.as_ref());
                PositionValuation {
                    id: inv.id,
                    name: inv.name,
                    symbol: inv.symbol,
                    kind: inv.kind,
                    quantity: inv.quantity,
                    currency,
                    unit_price,
                    market_value,
                    base_value,
                    allocation: Decimal::ZERO,
                    priced,
                }
            })
            .collect();

        let total_value: Decimal = positions.iter().map(|p| p.base_value).sum();
        if total_value > Decimal::ZERO {
            for position in &mut positions {
                position.allocation = (position.base_value / total_value * dec!(100))
                    .round_dp(ALLOCATION_PRECISION);
            }
        }
        positions.sort_by(|a, b| b.base_value.cmp(&a.base_value));

        Ok(PortfolioSummary {
            base_currency: base,
            total_value,
            positions,
        })
    }
}
