//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the full application: routes plus the
//! tracing, timeout, and CORS layers driven by `ServerConfig`.

pub mod assessment;

pub use assessment::{assessment_routes, AssessmentAppState};

use axum::{routing::get, Router};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

/// Creates the application router with middleware.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCorsOrigin` if a configured origin is
/// not a valid header value.
pub fn build_router(
    state: AssessmentAppState,
    server: &ServerConfig,
    enable_tracing: bool,
) -> Result<Router, ValidationError> {
    let router = Router::new()
        .route("/health", get(assessment::health_check))
        .nest("/api/assessments", assessment_routes(state))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server)?);

    if enable_tracing {
        Ok(router.layer(TraceLayer::new_for_http()))
    } else {
        Ok(router)
    }
}

/// CORS from configured origins; permissive outside production when none
/// are configured, closed in production.
fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, ValidationError> {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        if server.is_production() {
            return Ok(CorsLayer::new());
        }
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let values = origins
        .into_iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ValidationError::InvalidCorsOrigin(origin))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods(Any)
        .allow_headers(Any))
}
