use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use fortuneok_core::logs::DiagnosticLog;

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_logs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<DiagnosticLog>>> {
    Ok(Json(state.log_service.list_logs().await?))
}

async fn delete_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.log_service.delete_log(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkDeleteRequest {
    log_ids: Vec<String>,
}

/// Batch delete; unknown ids are skipped, an empty batch is a 400.
async fn bulk_delete_logs(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BulkDeleteRequest>,
) -> ApiResult<Json<Value>> {
    let deleted = state.log_service.bulk_delete(&body.log_ids).await?;
    Ok(Json(json!({ "deleted": deleted })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/logs", get(list_logs))
        .route("/logs/bulk-delete", post(bulk_delete_logs))
        .route("/logs/{id}", delete(delete_log))
}
