//! Surface figure API server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use figure_api::build_router;
use figure_api::state::{AppState, ServiceConfig, DEFAULT_CHUNK_SIZE};

/// Surface figure API server
#[derive(Parser, Debug)]
#[command(name = "figure-api")]
#[command(about = "Isometric SVG surface figure server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1:26221", env = "FIGURE_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long, env = "FIGURE_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Bytes buffered per streamed response chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, env = "FIGURE_CHUNK_SIZE")]
    chunk_size: usize,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;
    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics exporter initialized");

    let config = ServiceConfig {
        chunk_size: args.chunk_size,
    };
    info!(chunk_size = config.chunk_size, "Starting figure API server");

    let state = Arc::new(AppState::new(config, Some(prometheus_handle)));
    let app = build_router(state);

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
