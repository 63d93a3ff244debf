//! Content Orchestrator: picks the configured generator, runs the seven sections
//! in order, and falls back to the template generator when a remote backend fails.
//!
//! Flow: validate config → resolve generator → title … call-to-action →
//!       (remote failure? discard everything, rerun with templates) → join with '\n'
//!       → advisory length check.
//!
//! A fallback rerun always starts from scratch: the caller never receives a mix of
//! remote and template fragments.

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::{Config, GenerationMode};
use crate::generation::generator::{GenerationFailure, ListingGenerator, Section};
use crate::generation::limits::check_limits;
use crate::generation::remote::RemoteGenerator;
use crate::generation::template::TemplateGenerator;
use crate::llm_client::{build_http_client, OllamaClient, OpenAiClient};
use crate::models::PropertyInput;

pub struct ContentOrchestrator {
    config: Config,
    http: Client,
    fallback: TemplateGenerator,
}

impl ContentOrchestrator {
    pub fn new(config: Config) -> Result<Self, GenerationFailure> {
        let http = build_http_client(config.llm_timeout).map_err(|e| {
            GenerationFailure::BackendConstruction {
                backend: "http",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            config,
            http,
            fallback: TemplateGenerator,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the generator for the configured mode. Only construction-time
    /// requirements are checked; reachability is discovered on first call.
    pub fn resolve_generator(&self) -> Result<Box<dyn ListingGenerator>, GenerationFailure> {
        let config = &self.config;
        match config.generation_mode {
            GenerationMode::Template => Ok(Box::new(TemplateGenerator)),
            GenerationMode::OpenAi => {
                let client = OpenAiClient::new(
                    self.http.clone(),
                    &config.openai_base_url,
                    &config.openai_api_key,
                    &config.openai_model,
                )
                .map_err(|reason| GenerationFailure::BackendConstruction {
                    backend: "openai",
                    reason,
                })?;
                Ok(Box::new(RemoteGenerator::new(client)))
            }
            GenerationMode::Ollama => {
                let client = OllamaClient::new(
                    self.http.clone(),
                    &config.ollama_base_url,
                    &config.ollama_model,
                )
                .map_err(|reason| GenerationFailure::BackendConstruction {
                    backend: "ollama",
                    reason,
                })?;
                Ok(Box::new(RemoteGenerator::new(client)))
            }
        }
    }

    /// Generates the seven joined fragments for `input`.
    ///
    /// Errors only with `Configuration` (nothing attempted) or with whatever the
    /// template generator raised (nothing left to fall back to).
    pub async fn generate_content(&self, input: &PropertyInput) -> Result<String, GenerationFailure> {
        self.config.validate()?;

        let fragments = match self.resolve_generator() {
            Ok(generator) => generate_with_fallback(generator.as_ref(), &self.fallback, input).await?,
            Err(err) if err.is_recoverable() => {
                warn!(
                    "Warning: {} generation failed ({}), falling back to template mode",
                    self.config.generation_mode, err
                );
                run_sequence(&self.fallback, input).await?
            }
            Err(err) => return Err(err),
        };

        Ok(finish(fragments))
    }
}

/// Runs all seven operations in order, stopping at the first failure.
pub async fn run_sequence(
    generator: &dyn ListingGenerator,
    input: &PropertyInput,
) -> Result<Vec<String>, GenerationFailure> {
    let mut fragments = Vec::with_capacity(Section::ORDER.len());
    for section in Section::ORDER {
        let fragment = generator.generate_section(section, input).await?;
        debug!("{} generated {}", generator.backend(), section.name());
        fragments.push(fragment);
    }
    Ok(fragments)
}

/// Runs `primary`; if it is remote and any section fails, reruns everything with `fallback`.
pub async fn generate_with_fallback(
    primary: &dyn ListingGenerator,
    fallback: &dyn ListingGenerator,
    input: &PropertyInput,
) -> Result<Vec<String>, GenerationFailure> {
    match run_sequence(primary, input).await {
        Ok(fragments) => {
            info!(
                "Generated listing content with {} ({})",
                primary.backend(),
                input.language.code()
            );
            Ok(fragments)
        }
        Err(err) if primary.is_remote() => {
            warn!(
                "Warning: {} generation failed ({}), falling back to {} mode",
                primary.backend(),
                err,
                fallback.backend()
            );
            run_sequence(fallback, input).await
        }
        Err(err) => Err(err),
    }
}

/// Joins fragments in order and logs any length-budget violations. Never alters output.
fn finish(fragments: Vec<String>) -> String {
    let report = check_limits(
        Section::ORDER
            .iter()
            .copied()
            .zip(fragments.iter().map(String::as_str)),
    );
    for violation in &report.violations {
        warn!(
            "Generated {} has {} visible chars (expected {}..={})",
            violation.section.name(),
            violation.length,
            violation.min,
            violation.max
        );
    }
    fragments.join("\n")
}
