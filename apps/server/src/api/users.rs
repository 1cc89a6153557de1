use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use fortuneok_core::users::{User, UserAssets};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.list_users().await?))
}

async fn get_user_assets(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserAssets>> {
    Ok(Json(state.user_service.get_user_assets(&user_id).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}/assets", get(get_user_assets))
}
