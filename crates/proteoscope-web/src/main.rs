//! Proteoscope Web Server
//!
//! Run with: cargo run -p proteoscope-web

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use proteoscope_common::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = std::env::var("PROTEOSCOPE_CONFIG").ok().map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    info!(workbook = %config.dataset.workbook, "Loading dataset...");

    // A missing workbook, sheet or anchor column is fatal here, before the
    // server ever binds.
    let state = proteoscope_web::state::AppState::from_config(&config)?;
    info!(
        genes = state.genes.len(),
        limma = state.expression.records().len(),
        "Dataset loaded"
    );

    // Build router
    let app = proteoscope_web::router::build_router(state);

    // Bind to port
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
