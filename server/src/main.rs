use anyhow::Result;
use clap::Parser;
use jobmatch_server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

/// Serve job recommendations over HTTP.
#[derive(Parser)]
#[command(name = "jobmatch-server")]
struct ServeArgs {
    /// Job catalog path (.csv, .json, .jsonl, or a directory of them)
    #[arg(long, default_value = "./FullData.csv")]
    catalog: String,
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

impl ServeArgs {
    fn addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = ServeArgs::parse();
    // Index the whole catalog before accepting connections.
    let app = build_app(&args.catalog)?;

    let addr = args.addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, catalog = %args.catalog, "serving profile matches");
    axum::serve(listener, app).await?;
    Ok(())
}
