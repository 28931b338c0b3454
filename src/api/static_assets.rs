//! Embedded static assets.
//!
//! In release mode: Assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from the filesystem (assets/) at runtime.

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.svg"]
#[include = "*.ico"]
#[include = "*.png"]
struct StaticAssets;

/// Serve an embedded asset by its path below `/assets/`.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    // Only plain names below assets/ are looked up
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        debug!(path, "rejected parent path");
        return StatusCode::NOT_FOUND.into_response();
    }

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    // 1 day; assets are not content-hashed
                    (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
                ],
                content.data,
            )
                .into_response()
        }
        None => {
            debug!(path, "asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
