mod error;
mod handlers;
mod routes;
mod static_assets;

#[cfg(test)]
mod routes_test;

use std::env::VarError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ApiError, ApiResult};
pub use handlers::{HealthResponse, LinkResponse, MessageResponse, ViewResponse};
pub use routes::create_router;

/// Environment variable overriding the bind address
pub const HOST_ENV: &str = "FANHUB_HOST";
/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "FANHUB_PORT";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl Config {
    /// Defaults overridden by `FANHUB_HOST` / `FANHUB_PORT` when set.
    ///
    /// Precedence: builder (CLI flag) > env var > default.
    pub fn new() -> ApiResult<Self> {
        let mut config = Self::default();
        if let Some(host) = from_env(HOST_ENV)? {
            config.host = host;
        }
        if let Some(port) = from_env(PORT_ENV)? {
            config.port = port;
        }
        Ok(config)
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn from_env<T: FromStr>(var: &'static str) -> ApiResult<Option<T>> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidEnv { var, value }),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ApiError::InvalidEnv {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fanhub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the landing page server with the given configuration
pub async fn run(config: Config) -> ApiResult<()> {
    init_tracing();

    let app = create_router().layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("Fan hub listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
