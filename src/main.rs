use anyhow::{Context, Result};
use countboard::api::{
    create_chart_router, create_overview_router, create_page_router, DashboardState,
};
use countboard::config::{self, CountboardConfig};
use countboard::dataset;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

const CONFIG_PATH: &str = "countboard.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "countboard=info".into()),
        )
        .init();

    let config = if Path::new(CONFIG_PATH).exists() {
        config::load_config(CONFIG_PATH)
            .map_err(|e| anyhow::anyhow!("invalid {}: {}", CONFIG_PATH, e))?
    } else {
        warn!("{} not found, using built-in defaults", CONFIG_PATH);
        CountboardConfig::default()
    };

    // The dataset is read exactly once; everything served afterwards is a
    // pure computation over this table.
    let table = dataset::load(Path::new(&config.dataset.path))
        .with_context(|| format!("failed to load counts dataset '{}'", config.dataset.path))?;
    info!(
        rows = table.len(),
        sensors = table.sensors().len(),
        "Dataset resident"
    );

    let state = Arc::new(DashboardState {
        table,
        map: config.map.clone(),
        preview_rows: config.dataset.preview_rows,
    });

    let app = axum::Router::new()
        .merge(create_page_router())
        .merge(create_overview_router(state.clone()))
        .merge(create_chart_router(state))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Countboard serving");

    axum::serve(listener, app).await?;

    Ok(())
}
