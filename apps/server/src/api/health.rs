use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::main_lib::AppState;

/// Liveness probe; no auth, no dependencies touched.
async fn health() -> Json<&'static str> {
    Json("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
