//! Generator contract: the seven-section interface every strategy implements.
//!
//! A listing page is always rendered as the same seven HTML fragments, in the
//! same order, whichever backend produced them:
//!
//! 1. `<title>` (≤ 60 visible chars)
//! 2. `<meta name="description" content="...">` (≤ 155 chars)
//! 3. `<h1>`
//! 4. `<section id="description"><p>...</p></section>` (500 – 700 chars)
//! 5. `<ul id="key-features">` with `<li>` items
//! 6. `<section id="neighborhood"><p>...</p></section>`
//! 7. `<p class="call-to-action">`

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::PropertyInput;

/// One of the seven fragments of a generated listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Title,
    MetaDescription,
    H1,
    Description,
    KeyFeatures,
    Neighborhood,
    CallToAction,
}

impl Section {
    /// Output order. The joined content always follows this sequence.
    pub const ORDER: [Section; 7] = [
        Section::Title,
        Section::MetaDescription,
        Section::H1,
        Section::Description,
        Section::KeyFeatures,
        Section::Neighborhood,
        Section::CallToAction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::MetaDescription => "meta_description",
            Section::H1 => "h1",
            Section::Description => "description",
            Section::KeyFeatures => "key_features",
            Section::Neighborhood => "neighborhood",
            Section::CallToAction => "call_to_action",
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationFailure {
    /// A setting the active mode needs is missing. Raised before any generation.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A remote backend could not be instantiated.
    #[error("Failed to initialize {backend} generator: {reason}")]
    BackendConstruction {
        backend: &'static str,
        reason: String,
    },

    /// A single remote call failed (connection, status, timeout, malformed body).
    #[error("{backend} API error: {source}")]
    BackendCall {
        backend: &'static str,
        #[source]
        source: LlmError,
    },

    /// Template rendering failed. There is nothing left to fall back to.
    #[error("Template generation failed: {0}")]
    Template(String),
}

impl GenerationFailure {
    /// Remote failures are recovered by re-running with the template generator.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GenerationFailure::BackendConstruction { .. } | GenerationFailure::BackendCall { .. }
        )
    }
}

pub type SectionResult = Result<String, GenerationFailure>;

/// The seven-operation generation contract.
///
/// Each operation maps the read-only property input to one HTML fragment.
#[async_trait]
pub trait ListingGenerator: Send + Sync {
    async fn generate_title(&self, input: &PropertyInput) -> SectionResult;
    async fn generate_meta_description(&self, input: &PropertyInput) -> SectionResult;
    async fn generate_h1(&self, input: &PropertyInput) -> SectionResult;
    async fn generate_description(&self, input: &PropertyInput) -> SectionResult;
    async fn generate_key_features(&self, input: &PropertyInput) -> SectionResult;
    async fn generate_neighborhood(&self, input: &PropertyInput) -> SectionResult;
    async fn generate_call_to_action(&self, input: &PropertyInput) -> SectionResult;

    /// Backend name for logs ("template", "openai", "ollama").
    fn backend(&self) -> &'static str;

    /// True for network-backed generators; their failures trigger fallback.
    fn is_remote(&self) -> bool;

    async fn generate_section(&self, section: Section, input: &PropertyInput) -> SectionResult {
        match section {
            Section::Title => self.generate_title(input).await,
            Section::MetaDescription => self.generate_meta_description(input).await,
            Section::H1 => self.generate_h1(input).await,
            Section::Description => self.generate_description(input).await,
            Section::KeyFeatures => self.generate_key_features(input).await,
            Section::Neighborhood => self.generate_neighborhood(input).await,
            Section::CallToAction => self.generate_call_to_action(input).await,
        }
    }
}
