//! Template generator: deterministic, offline rendering from per-language phrasebooks.
//!
//! Never touches the network and never fails for a validated `PropertyInput`,
//! which is what makes it the fallback target for the remote generators.
//!
//! Length rules applied here, uniformly for every language:
//! - title truncated to 60 chars, meta description to 155 (word boundary + "...")
//! - description padded with filler sentences up to 500 chars, then truncated to 700
//! - key features capped at 5 items

use async_trait::async_trait;

use crate::generation::formatting::{sanitize_attribute, strip_control_chars, truncate_text};
use crate::generation::generator::{ListingGenerator, SectionResult};
use crate::generation::limits::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, META_DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
use crate::models::{Language, PropertyInput};

mod en;
mod es;
mod pt;

pub const MAX_KEY_FEATURES: usize = 5;

/// Language-specific wording for each section. Implementations return plain
/// text; HTML wrapping and length enforcement happen in this module.
pub(crate) trait Phrasebook: Send + Sync {
    fn title(&self, input: &PropertyInput) -> String;
    fn meta_description(&self, input: &PropertyInput) -> String;
    fn h1(&self, input: &PropertyInput) -> String;
    fn description(&self, input: &PropertyInput) -> String;
    /// Filler sentences appended, in order and cyclically, while the description is short.
    fn description_padding(&self, input: &PropertyInput) -> Vec<String>;
    /// Candidate features in priority order; the renderer keeps the first five.
    fn key_features(&self, input: &PropertyInput) -> Vec<String>;
    /// Hand-written summary for a known neighborhood.
    fn known_neighborhood(&self, neighborhood: &str) -> Option<&'static str>;
    fn generic_neighborhood(&self, input: &PropertyInput) -> String;
    fn call_to_action(&self, input: &PropertyInput) -> String;
}

pub(crate) fn phrasebook(language: Language) -> &'static dyn Phrasebook {
    match language {
        Language::En => &en::English,
        Language::Pt => &pt::Portuguese,
        Language::Es => &es::Spanish,
    }
}

/// "Neighborhood, City", or just the city when no neighborhood was given.
pub(crate) fn place(input: &PropertyInput) -> String {
    let neighborhood = input.location.neighborhood.trim();
    if neighborhood.is_empty() {
        input.location.city.clone()
    } else {
        format!("{}, {}", neighborhood, input.location.city)
    }
}

/// Neighborhood name, or the city when none was given.
pub(crate) fn area_name(input: &PropertyInput) -> &str {
    let neighborhood = input.location.neighborhood.trim();
    if neighborhood.is_empty() {
        &input.location.city
    } else {
        neighborhood
    }
}

pub fn render_title(input: &PropertyInput) -> String {
    let text = phrasebook(input.language).title(input);
    format!("<title>{}</title>", truncate_text(&text, TITLE_MAX_CHARS))
}

pub fn render_meta_description(input: &PropertyInput) -> String {
    let text = phrasebook(input.language).meta_description(input);
    format!(
        r#"<meta name="description" content="{}">"#,
        sanitize_attribute(&truncate_text(&text, META_DESCRIPTION_MAX_CHARS))
    )
}

pub fn render_h1(input: &PropertyInput) -> String {
    format!("<h1>{}</h1>", phrasebook(input.language).h1(input))
}

pub fn render_description(input: &PropertyInput) -> String {
    let book = phrasebook(input.language);
    let text = fit_description(book.description(input), &book.description_padding(input));
    format!(r#"<section id="description"><p>{text}</p></section>"#)
}

/// Pads short text with filler sentences, then truncates long text, so the
/// result always lands in the 500 – 700 character window.
fn fit_description(mut text: String, padding: &[String]) -> String {
    let mut fillers = padding.iter().cycle();
    while text.chars().count() < DESCRIPTION_MIN_CHARS {
        match fillers.next() {
            Some(sentence) => {
                text.push(' ');
                text.push_str(sentence);
            }
            None => break,
        }
    }
    truncate_text(&text, DESCRIPTION_MAX_CHARS)
}

pub fn render_key_features(input: &PropertyInput) -> String {
    let items: String = phrasebook(input.language)
        .key_features(input)
        .into_iter()
        .take(MAX_KEY_FEATURES)
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    format!(r#"<ul id="key-features">{items}</ul>"#)
}

pub fn render_neighborhood(input: &PropertyInput) -> String {
    let book = phrasebook(input.language);
    let text = book
        .known_neighborhood(input.location.neighborhood.trim())
        .map(str::to_string)
        .unwrap_or_else(|| book.generic_neighborhood(input));
    format!(r#"<section id="neighborhood"><p>{text}</p></section>"#)
}

pub fn render_call_to_action(input: &PropertyInput) -> String {
    format!(
        r#"<p class="call-to-action">{}</p>"#,
        phrasebook(input.language).call_to_action(input)
    )
}

/// The offline generator. Stateless; language comes from the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

#[async_trait]
impl ListingGenerator for TemplateGenerator {
    async fn generate_title(&self, input: &PropertyInput) -> SectionResult {
        Ok(strip_control_chars(&render_title(input)))
    }

    async fn generate_meta_description(&self, input: &PropertyInput) -> SectionResult {
        Ok(strip_control_chars(&render_meta_description(input)))
    }

    async fn generate_h1(&self, input: &PropertyInput) -> SectionResult {
        Ok(strip_control_chars(&render_h1(input)))
    }

    async fn generate_description(&self, input: &PropertyInput) -> SectionResult {
        Ok(strip_control_chars(&render_description(input)))
    }

    async fn generate_key_features(&self, input: &PropertyInput) -> SectionResult {
        Ok(strip_control_chars(&render_key_features(input)))
    }

    async fn generate_neighborhood(&self, input: &PropertyInput) -> SectionResult {
        Ok(strip_control_chars(&render_neighborhood(input)))
    }

    async fn generate_call_to_action(&self, input: &PropertyInput) -> SectionResult {
        Ok(strip_control_chars(&render_call_to_action(input)))
    }

    fn backend(&self) -> &'static str {
        "template"
    }

    fn is_remote(&self) -> bool {
        false
    }
}
