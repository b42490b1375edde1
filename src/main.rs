use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use binsearch::api::create_router;
use binsearch::config::CONFIG;

/// HTTP API serving traced binary searches and iterative/recursive benchmarks.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Host to bind, overrides BINSEARCH_HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides BINSEARCH_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber (log records are bridged through tracing-log)
    tracing_subscriber::fmt()
        .with_max_level(CONFIG.log_level)
        .with_target(true)
        .init();

    let mut config = (*CONFIG).clone();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let app = create_router(&config)?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("server listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
