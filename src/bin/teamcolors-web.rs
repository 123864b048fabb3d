//! Team Colors Web Server Binary
//!
//! Serves the school data and the color export over a small REST API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, configured data source)
//! teamcolors-web
//!
//! # Specify port and data file
//! teamcolors-web --port 8080 --data ./schools.json
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use teamcolors::config::Config;
use teamcolors::logging;
use teamcolors::web;

/// Team Colors Web Server - REST API for school colors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// School data source: file path, http(s) URL, or "embedded".
    /// Defaults to the configured source.
    #[arg(short, long, value_name = "SOURCE")]
    data: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_stderr_logging(args.verbose);

    let config = Config::load().unwrap_or_default();
    let source = config.data_source(args.data.as_deref())?;
    info!("Data source: {source}");

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid host or port")?;

    web::run_server(source, addr).await
}
