//! Landing page handlers.

use axum::Json;
use axum::response::Html;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::view::{F1_URL, LINK_REL, LINK_TARGET, LINK_TEXT, SUBTITLE, TITLE, render_document};

/// Outbound link of the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LinkResponse {
    /// Visible link text
    #[schema(example = "Visit Official F1 Website")]
    pub text: String,
    #[schema(example = "https://www.formula1.com")]
    pub href: String,
    /// Browsing context the link opens in
    #[schema(example = "_blank")]
    pub target: String,
    #[schema(example = "noopener noreferrer")]
    pub rel: String,
}

/// Content of the landing page banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ViewResponse {
    #[schema(example = "🏎️ Welcome to the Formula 1 Fan Hub")]
    pub title: String,
    #[schema(example = "Speed. Strategy. Adrenaline.")]
    pub subtitle: String,
    pub link: LinkResponse,
}

impl ViewResponse {
    /// Content of the `WelcomeView` banner.
    pub fn welcome() -> Self {
        Self {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            link: LinkResponse {
                text: LINK_TEXT.to_string(),
                href: F1_URL.to_string(),
                target: LINK_TARGET.to_string(),
                rel: LINK_REL.to_string(),
            },
        }
    }
}

/// Server-rendered landing page
#[instrument]
pub async fn landing_page() -> Html<String> {
    Html(render_document())
}

/// Describe the landing page content
///
/// Returns the banner texts and link attributes as rendered on `/`
#[utoipa::path(
    get,
    path = "/api/view",
    tag = "view",
    responses(
        (status = 200, description = "Landing page content", body = ViewResponse)
    )
)]
#[instrument]
pub async fn view_description() -> Json<ViewResponse> {
    Json(ViewResponse::welcome())
}
