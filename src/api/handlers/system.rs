//! Liveness endpoints.
//!
//! `/api/message` is the path deployment health gates poll before a new
//! release takes traffic; `/health` is the conventional alias.

use axum::Json;
use serde::Serialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::view::TITLE;

/// Liveness report
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Crate version of the running server
    #[schema(example = "0.1.0")]
    pub version: String,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Greeting served to deployment health gates
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "🏎️ Welcome to the Formula 1 Fan Hub")]
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Server is up", body = HealthResponse))
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Deployment health gate
///
/// Answers 200 with the banner greeting once the server accepts requests
#[utoipa::path(
    get,
    path = "/api/message",
    tag = "system",
    responses((status = 200, description = "Server is up", body = MessageResponse))
)]
#[instrument]
pub async fn message() -> Json<MessageResponse> {
    debug!("deployment health gate");
    Json(MessageResponse {
        message: TITLE.to_string(),
    })
}
