use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campaign_common::Config;
use campaign_site::FileStore;
use campaign_web::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("campaign=info".parse()?))
        .init();

    let config = Config::from_env()?;

    let cache = FileStore::new(&config.cache_dir);
    info!(dir = %cache.dir().display(), "Newsletter cache directory");

    let state = Arc::new(AppState::new(&config, Box::new(cache)));
    let app = router(state);

    let addr = config.bind_addr();
    info!("Campaign site starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
