/// Route table
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// The route table is fixed at startup. The pass-through user endpoint
/// and the auth routes are public; profile routes sit behind the
/// bearer-token middleware.
pub fn create_router(app_state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(api::auth::register))
        .route("/login", post(api::auth::login));

    let profile_routes = Router::new()
        .route(
            "/profile",
            get(api::profile::get_profile)
                .put(api::profile::update_profile)
                .delete(api::profile::delete_profile),
        )
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(api::health::health))
        .route("/user", post(api::users::create_user))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/user", profile_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
