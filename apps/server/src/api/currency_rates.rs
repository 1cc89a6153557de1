use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use fortuneok_core::constants::DEFAULT_BASE_CURRENCY;
use fortuneok_market_data::RateTable;

use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatesQuery {
    base_currency: Option<String>,
}

/// Conversion-rate table for one base currency. Bases the upstream has
/// no table for come back as an empty object, never an error.
async fn get_currency_rates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RatesQuery>,
) -> Json<RateTable> {
    let base = params
        .base_currency
        .as_deref()
        .unwrap_or(DEFAULT_BASE_CURRENCY);
    let rates = state.rate_service.get_conversion_rates(base).await;
    Json(rates.unwrap_or_default())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/currency-rates", get(get_currency_rates))
}
