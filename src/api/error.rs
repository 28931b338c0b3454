//! Server error types.

use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind to {addr}")]
    #[diagnostic(
        code(fanhub::api::bind),
        help("Is another process listening on this address? Try a different --port or FANHUB_PORT.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(fanhub::api::serve))]
    Serve(#[source] std::io::Error),

    #[error("Invalid value {value:?} for {var}")]
    #[diagnostic(
        code(fanhub::api::invalid_env),
        help("FANHUB_HOST must be an IP address and FANHUB_PORT a number between 0 and 65535.")
    )]
    InvalidEnv { var: &'static str, value: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
