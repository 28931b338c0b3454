pub mod error;
mod render;


use std::io::Write;
use std::net::IpAddr;

use clap::{CommandFactory, Parser, Subcommand};

use crate::api::{self, Config};
use error::CliResult;
pub use render::OutputFormat;

#[derive(Parser)]
#[command(name = "fanhub")]
#[command(author, version, about = "Formula 1 Fan Hub landing page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the landing page over HTTP
    Serve {
        /// Host address to bind to (default: FANHUB_HOST env or 0.0.0.0)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to listen on (default: FANHUB_PORT env or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the rendered landing page to stdout
    Render {
        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,
        /// Emit only the banner markup, without the document shell
        #[arg(long)]
        fragment: bool,
    },
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let mut config = Config::new()?;
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(port) = port {
                config = config.with_port(port);
            }
            api::run(config).await?;
        }
        Some(Commands::Render { format, fragment }) => {
            let output = render::render(format, fragment)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output)?;
        }
        None => {
            // Show help when no command provided
            Cli::command().print_help()?;
        }
    }
    Ok(())
}
