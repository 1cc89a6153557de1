use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use fortuneok_market_data::SymbolMatch;

use crate::main_lib::AppState;

#[derive(Deserialize)]
struct SearchQuery {
    query: Option<String>,
    #[serde(rename = "type")]
    asset_kind: Option<String>,
}

/// Symbol search. The facade absorbs upstream failures into an empty
/// list, so this route always answers 200 with an array.
async fn search_symbols(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<SymbolMatch>> {
    let query = params.query.unwrap_or_default();
    let matches = state
        .symbol_search
        .search_symbols(&query, params.asset_kind.as_deref())
        .await;
    Json(matches)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/symbols/search", get(search_symbols))
}
