pub mod currency_rates;
pub mod health;
pub mod investments;
pub mod logs;
pub mod quotes;
pub mod symbols;
pub mod users;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::config::Config;
use crate::main_lib::AppState;

/// Assemble the full application router.
///
/// `/api/health` is open; the market-data and investment routes need a
/// session; the log and user routes additionally need an admin email.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let user_routes = Router::new()
        .merge(currency_rates::router())
        .merge(quotes::router())
        .merge(symbols::router())
        .merge(investments::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    // require_session must wrap require_admin so the session user is
    // already in extensions when the admin check runs.
    let admin_routes = Router::new()
        .merge(logs::router())
        .merge(users::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    let api = Router::new()
        .merge(health::router())
        .merge(user_routes)
        .merge(admin_routes);

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);
    if config.cors_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}
