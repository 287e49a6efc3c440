use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use breach_lookup::{BreachCheckService, BreachLookupClient, TenantGate};
use breach_lookup_http::{AppState, Error, FileConfigProvider, app};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "breach-lookup-http")]
#[command(about = "HTTP front-end for the k-anonymous breached-password checker")]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Path to the JSON file with per-tenant connector settings
    #[arg(short, long)]
    tenants: PathBuf,

    /// Base URL of the breach-data range API
    #[arg(long, default_value = breach_lookup::DEFAULT_RANGE_API_URL)]
    api_url: String,

    /// Per-request deadline for range queries, in seconds
    #[arg(long, default_value_t = breach_lookup::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let provider = Arc::new(FileConfigProvider::load(&args.tenants)?);
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .expect("Failed to create HTTP client");
    let service = BreachCheckService::new(
        TenantGate::new(provider),
        BreachLookupClient::new(http, args.api_url),
    );

    let router = app(AppState { service: Arc::new(service) });

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    tracing::info!(listen = %args.listen, "serving breach checker endpoints");
    axum::serve(listener, router).await?;

    Ok(())
}
