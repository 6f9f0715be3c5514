use std::sync::Arc;

use anyhow::Context;

use stockroom_infra::{InventoryConfig, InventoryService};

const ENV_BIND_ADDR: &str = "STOCKROOM_BIND_ADDR";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = InventoryConfig::from_env().context("failed to load configuration")?;
    let bind_addr = std::env::var(ENV_BIND_ADDR).unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let service = Arc::new(InventoryService::in_memory(config));
    let app = stockroom_api::app::build_app(service);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
