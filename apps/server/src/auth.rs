use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use fortuneok_core::sessions::SessionUser;

use crate::error::ApiError;
use crate::main_lib::AppState;

/// Resolve the bearer token and stash the session user in request
/// extensions. Rejects with 401 when the header is missing, malformed,
/// or the token is unknown.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return ApiError::unauthorized("Missing bearer token").into_response();
    };
    match state.sessions.resolve(token).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => ApiError::unauthorized("Invalid session token").into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// Admin gate, layered inside [`require_session`]: the authenticated
/// email must appear in the configured allow-list.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(user) = request.extensions().get::<SessionUser>() else {
        return ApiError::unauthorized("Missing bearer token").into_response();
    };
    if !state.admin_emails.iter().any(|email| email == &user.email) {
        return ApiError::forbidden("Admin access required").into_response();
    }
    next.run(request).await
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
