//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::GenerationMode;
use crate::errors::AppError;
use crate::models::PropertyInput;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub generation_mode: GenerationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ollama_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ollama_url: Option<String>,
    pub status: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Runs the full seven-section pipeline for one listing. Remote backend failures
/// are absorbed by the template fallback; only configuration and template errors
/// reach the client.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(input): Json<PropertyInput>,
) -> Result<Json<GenerateResponse>, AppError> {
    input.validate()?;
    let content = state.orchestrator.generate_content(&input).await?;
    Ok(Json(GenerateResponse { content }))
}

/// GET /status
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let config = &state.config;
    let mut response = StatusResponse {
        generation_mode: config.generation_mode,
        openai_model: None,
        ollama_model: None,
        ollama_url: None,
        status: "ready",
    };
    match config.generation_mode {
        GenerationMode::Template => {}
        GenerationMode::OpenAi => response.openai_model = Some(config.openai_model.clone()),
        GenerationMode::Ollama => {
            response.ollama_model = Some(config.ollama_model.clone());
            response.ollama_url = Some(config.ollama_base_url.clone());
        }
    }
    Json(response)
}
