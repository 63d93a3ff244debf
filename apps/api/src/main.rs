mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, GenerationMode};
use crate::generation::ContentOrchestrator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SEO listing API v{}", env!("CARGO_PKG_VERSION"));

    // Fail fast on a mode whose credentials are missing
    config.validate()?;
    match config.generation_mode {
        GenerationMode::Template => info!("Generation mode: template"),
        GenerationMode::OpenAi => info!("Generation mode: openai (model: {})", config.openai_model),
        GenerationMode::Ollama => info!(
            "Generation mode: ollama (model: {}, url: {})",
            config.ollama_model, config.ollama_base_url
        ),
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let orchestrator = ContentOrchestrator::new(config)?;
    let state = AppState::new(orchestrator);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
