use anyhow::Context;

use storefront_catalog::CatalogConfig;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = CatalogConfig::from_env().context("invalid catalog configuration")?;
    let app = storefront_api::app::build_app(&config).context("failed to build app")?;

    let bind = std::env::var("STOREFRONT_BIND")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
