//! pastebord server entry point
//!
//! Configuration comes from the environment (optionally via a `.env`
//! file): `DATABASE_URL` and `PORT` are required and startup is fatal
//! without them; `LOCAL` selects the local deployment target for the
//! database TLS mode.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pastebord::db::create_pool;
use pastebord::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "pastebord",
    version,
    about = "HTTP persistence service for a shared pastebin"
)]
struct Cli {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT")]
    port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Connect to a local database instead of the hosted one
    #[arg(long)]
    local: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Read .env before clap so env-backed args see its values.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    // The original toggle is presence-based: LOCAL set at all means local.
    let local = args.local || std::env::var_os("LOCAL").is_some();

    let pool = create_pool(&args.database_url, local)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: SocketAddr::from(([0, 0, 0, 0], args.port)),
    };

    tracing::info!("Server is up and running on port {}", args.port);
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
