use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Extension, Json, Router};
use serde::Deserialize;

use fortuneok_core::constants::DEFAULT_BASE_CURRENCY;
use fortuneok_core::investments::{Investment, NewInvestment, PortfolioSummary};
use fortuneok_core::sessions::SessionUser;

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_investments(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state
        .investment_service
        .list_investments(&user.email)
        .await?;
    Ok(Json(investments))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Json(input): Json<NewInvestment>,
) -> ApiResult<(StatusCode, Json<Investment>)> {
    let created = state
        .investment_service
        .create_investment(&user.email, input)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Deleting another user's investment reports 404, same as an unknown
/// id.
async fn delete_investment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .investment_service
        .delete_investment(&user.email, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryQuery {
    base_currency: Option<String>,
}

async fn investment_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Query(params): Query<SummaryQuery>,
) -> ApiResult<Json<PortfolioSummary>> {
    let base = params
        .base_currency
        .as_deref()
        .unwrap_or(DEFAULT_BASE_CURRENCY);
    let summary = state
        .investment_service
        .portfolio_summary(&user.email, base)
        .await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(list_investments).post(create_investment))
        .route("/investments/summary", get(investment_summary))
        .route("/investments/{id}", delete(delete_investment))
}
