//! Router assembly. Which domain routes exist depends on the process's
//! `ServiceKind`.

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_bearer;
use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::service::ServiceKind;
use crate::state::AppState;

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

fn blockchain_routes() -> Router<AppState> {
    Router::new()
        .route("/blockchain/records", post(handlers::blockchain::record))
        .route(
            "/blockchain/records/order/{order_id}",
            get(handlers::blockchain::by_order),
        )
        .route("/blockchain/verify", post(handlers::blockchain::verify))
}

fn chat_routes() -> Router<AppState> {
    Router::new().route(
        "/chat/history",
        get(handlers::chat::history).post(handlers::chat::append),
    )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::users::me))
        .route(
            "/users/me/profile",
            get(handlers::users::profile).post(handlers::users::create_profile),
        )
        .route(
            "/users/me/addresses",
            get(handlers::users::addresses).post(handlers::users::add_address),
        )
        .route("/users/me/addresses/{id}", get(handlers::users::address))
}

/// Routes nested under `/api` for `service`.
///
/// Every service exposes `/whoami`. Pet and gym have no further routes.
pub(crate) fn api_routes(service: ServiceKind) -> Router<AppState> {
    let mut router = Router::new().route("/whoami", get(handlers::whoami::whoami));

    if service.includes(ServiceKind::User) {
        router = router.merge(user_routes());
    }
    if service.includes(ServiceKind::Blockchain) {
        router = router.merge(blockchain_routes());
    }
    if service.includes(ServiceKind::Chat) {
        router = router.merge(chat_routes());
    }

    router
}

/// `/health` is open; everything under `/api` requires a bearer token.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let service = ctx.service;
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);
    let auth = middleware::from_fn_with_state(Arc::clone(&state), require_bearer);

    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api",
            api_routes(service)
                .route_layer(auth)
                .with_state(state)
                .layer(cors),
        )
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn health_check() -> &'static str {
    "OK"
}
