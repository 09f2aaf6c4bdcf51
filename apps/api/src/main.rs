mod config;
mod errors;
mod llm_client;
mod models;
mod pdf_export;
mod render;
mod routes;
mod state;
mod wizard;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::pdf_export::{HttpPdfBackend, PdfExporter};
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::store::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Text-generation client
    let llm = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!(
        "Text generation client initialized (model: {})",
        llm_client::MODEL
    );

    // PDF conversion client
    let pdf = PdfExporter::new(Arc::new(HttpPdfBackend::new(
        config.pdf_api_key.clone(),
        config.pdf_base_url.clone(),
    )));
    info!("PDF export client initialized ({})", config.pdf_base_url);

    // Build app state
    let state = AppState {
        sessions: SessionStore::new(),
        llm,
        pdf,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
