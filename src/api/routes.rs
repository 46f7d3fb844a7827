//! Router configuration for the API.
//!
//! Centralizes route registration, the session/role guard layering, CORS,
//! and the observability middleware.

use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get, routing::post};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::api::middleware::{
    logging_middleware, request_id_middleware, require_admin, require_fleet_access,
    session_middleware,
};
use crate::config::CorsConfig;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Route groups
/// - Public: `/register`, `/login`, `/health`
/// - Admin only: `/drivers`, `/trucks`
/// - Admin or Fleet Manager: `/assignments`
/// - Any valid session: `/logout`
///
/// Guarded groups sit behind `session_middleware`, which resolves the
/// session cookie before the role guards run. Middleware layers apply in
/// reverse order of declaration, so the request ID is assigned before the
/// logging middleware reads it.
pub fn create_router(state: AppState) -> AppResult<Router> {
    let public_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/health", get(handlers::health::health));

    let admin_routes = Router::new()
        .nest("/drivers", handlers::drivers::driver_routes())
        .nest("/trucks", handlers::trucks::truck_routes())
        .layer(middleware::from_fn(require_admin));

    let fleet_routes = Router::new()
        .nest("/assignments", handlers::assignments::assignment_routes())
        .layer(middleware::from_fn(require_fleet_access));

    let session_routes = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .merge(admin_routes)
        .merge(fleet_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    let cors = cors_layer(&state.cors)?;

    Ok(Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state))
}

/// Builds the CORS layer for the single trusted frontend origin.
///
/// Credentials are allowed because the session rides in a cookie, which
/// rules out a wildcard origin.
fn cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| AppError::Configuration {
            key: "cors.allowed_origin".to_string(),
            source: anyhow::anyhow!("Invalid origin '{}': {}", config.allowed_origin, e),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}
