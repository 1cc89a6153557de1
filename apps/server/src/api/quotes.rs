use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use fortuneok_core::logs::LogLevel;
use fortuneok_market_data::QuoteRecord;

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct QuotesQuery {
    symbols: Option<String>,
}

/// Batch quote lookup over a comma-separated symbol list. Symbols the
/// upstream does not track are omitted from the map; a failed batch is
/// a 500.
async fn get_quotes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuotesQuery>,
) -> ApiResult<Json<HashMap<String, QuoteRecord>>> {
    let symbols: Vec<String> = params
        .symbols
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    match state.quote_service.get_stock_prices(&symbols).await {
        Ok(quotes) => Ok(Json(quotes)),
        Err(err) => {
            // Recording the diagnostic is best-effort.
            let _ = state
                .log_service
                .record(LogLevel::Error, &err.to_string(), Some("quotes"))
                .await;
            Err(err.into())
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quotes", get(get_quotes))
}
