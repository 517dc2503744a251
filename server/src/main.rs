use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use server::api::{self, AppState};
use server::{config, db, store::SqliteStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::loader::load_with_discovery()?;

    let (pool, _db_root) = db::init_pool().await?;
    let store = Arc::new(SqliteStore::new(pool));
    let state = AppState::new(store, config.slugs.clone());

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
            signal.cancel();
        }
    });

    api::server::run(state, &config.server.bind_addr, shutdown).await
}
