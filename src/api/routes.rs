//! Route configuration.

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, HealthResponse, LinkResponse, MessageResponse, ViewResponse};
use super::static_assets::serve_asset;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Formula 1 Fan Hub",
        version = "0.1.0",
        description = "Static landing page for Formula 1 fans",
        license(name = "MIT")
    ),
    paths(handlers::health, handlers::message, handlers::view_description),
    components(schemas(HealthResponse, MessageResponse, ViewResponse, LinkResponse)),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "view", description = "Landing page content")
    )
)]
pub struct ApiDoc;

/// Create the router with OpenAPI documentation
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::landing_page))
        .route("/health", get(handlers::health))
        .route("/api/message", get(handlers::message))
        .route("/api/view", get(handlers::view_description))
        .route("/assets/{*path}", get(serve_asset))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
