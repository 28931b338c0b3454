//! `fanhub render`: print the landing page without starting a server.

use clap::ValueEnum;

use super::error::CliResult;
use crate::api::ViewResponse;
use crate::view::{render_document, render_fragment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML markup
    Html,
    /// Banner content as pretty-printed JSON
    Json,
}

/// Render the `WelcomeView` banner in the requested format.
///
/// `fragment` drops the document shell and only applies to HTML output.
pub fn render(format: OutputFormat, fragment: bool) -> CliResult<String> {
    let output = match format {
        OutputFormat::Html if fragment => render_fragment(),
        OutputFormat::Html => render_document(),
        OutputFormat::Json => serde_json::to_string_pretty(&ViewResponse::welcome())?,
    };
    Ok(output)
}
