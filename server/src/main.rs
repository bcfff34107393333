use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_server::config::ServerConfig;
use todo_server::{Database, ItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    let db = Database::open(&config.database)
        .with_context(|| format!("opening database {}", config.database.display()))?;
    let store = ItemStore::new(db);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, todo_server::app(store))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
