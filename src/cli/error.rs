use miette::Diagnostic;
use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to encode view as JSON")]
    #[diagnostic(code(fanhub::cli::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output")]
    #[diagnostic(
        code(fanhub::cli::io),
        help("Is stdout closed? Try redirecting the output to a file.")
    )]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
