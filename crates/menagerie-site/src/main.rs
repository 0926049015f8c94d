//! Menagerie site server binary.

use anyhow::Result;
use menagerie_site::{app, config::SiteConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = SiteConfig::load()?;
    let addr = config.bind_addr()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("menagerie site listening on {addr}");

    axum::serve(listener, app(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {error}");
    }
}
