use reading_room::config::{default_catalog, ServerConfig};
use reading_room::ingestion::build_registry;
use reading_room::web::build_router;
use reading_room::web::router::ENDPOINTS;
use reading_room::web::templates::PageRenderer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env()?;

    // 1. Load every document once, before accepting requests:
    let catalog = default_catalog();
    let registry = Arc::new(build_registry(&catalog));
    tracing::info!(
        "Loaded {}/{} documents ({} sentences)",
        registry.len(),
        catalog.len(),
        registry.sentence_count()
    );

    // 2. HTTP Router:
    let pages = PageRenderer::new()
        .map_err(|err| anyhow::anyhow!("Failed to register templates: {}", err))?;
    let pages = Arc::new(pages);
    let app = build_router(registry, pages);

    // 3. Start HTTP server:
    tracing::info!("Server starting on http://{}", config.bind_addr);
    tracing::info!("Available endpoints:");
    for (path, description) in ENDPOINTS {
        tracing::info!("  GET  {:<22} - {}", path, description);
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
