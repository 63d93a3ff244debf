//! Remote generator: one implementation of the seven-section contract over any
//! `TextCompletion` transport. Prompt text comes from `generation::prompts`;
//! the response is cleaned and wrapped in the section's HTML.

use async_trait::async_trait;
use tracing::debug;

use crate::generation::formatting::sanitize_attribute;
use crate::generation::generator::{GenerationFailure, ListingGenerator, Section, SectionResult};
use crate::generation::prompts::{build_prompt, max_tokens};
use crate::llm_client::{LlmError, TextCompletion};
use crate::models::PropertyInput;

pub struct RemoteGenerator<C> {
    client: C,
}

impl<C: TextCompletion> RemoteGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    async fn call(&self, section: Section, input: &PropertyInput) -> Result<String, GenerationFailure> {
        let prompt = build_prompt(section, input);
        let raw = self
            .client
            .complete(&prompt, max_tokens(section))
            .await
            .map_err(|source| self.call_failure(source))?;

        let text = strip_quotes(&raw);
        if text.is_empty() {
            return Err(self.call_failure(LlmError::EmptyContent));
        }
        debug!(
            "{} ({}) returned {} chars for {}",
            self.client.backend(),
            self.client.model(),
            text.chars().count(),
            section.name()
        );
        Ok(text.to_string())
    }

    fn call_failure(&self, source: LlmError) -> GenerationFailure {
        GenerationFailure::BackendCall {
            backend: self.client.backend(),
            source,
        }
    }
}

/// Removes whitespace and any surrounding single/double quotes models like to add.
fn strip_quotes(text: &str) -> &str {
    text.trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '“' | '”'))
        .trim()
}

/// One `<li>` per non-empty line, with bullet markers stripped.
fn feature_items(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| matches!(c, '•' | '-' | '*') || c.is_whitespace())
                .trim()
        })
        .filter(|line| !line.is_empty())
        .map(|line| format!("<li>{line}</li>"))
        .collect()
}

#[async_trait]
impl<C: TextCompletion> ListingGenerator for RemoteGenerator<C> {
    async fn generate_title(&self, input: &PropertyInput) -> SectionResult {
        let text = self.call(Section::Title, input).await?;
        Ok(format!("<title>{}</title>", single_line(&text)))
    }

    async fn generate_meta_description(&self, input: &PropertyInput) -> SectionResult {
        let text = self.call(Section::MetaDescription, input).await?;
        Ok(format!(
            r#"<meta name="description" content="{}">"#,
            sanitize_attribute(&single_line(&text))
        ))
    }

    async fn generate_h1(&self, input: &PropertyInput) -> SectionResult {
        let text = self.call(Section::H1, input).await?;
        Ok(format!("<h1>{}</h1>", single_line(&text)))
    }

    async fn generate_description(&self, input: &PropertyInput) -> SectionResult {
        let text = self.call(Section::Description, input).await?;
        Ok(format!(
            r#"<section id="description"><p>{}</p></section>"#,
            single_line(&text)
        ))
    }

    async fn generate_key_features(&self, input: &PropertyInput) -> SectionResult {
        let text = self.call(Section::KeyFeatures, input).await?;
        let items = feature_items(&text);
        if items.is_empty() {
            return Err(self.call_failure(LlmError::EmptyContent));
        }
        Ok(format!(r#"<ul id="key-features">{}</ul>"#, items.concat()))
    }

    async fn generate_neighborhood(&self, input: &PropertyInput) -> SectionResult {
        let text = self.call(Section::Neighborhood, input).await?;
        Ok(format!(
            r#"<section id="neighborhood"><p>{}</p></section>"#,
            single_line(&text)
        ))
    }

    async fn generate_call_to_action(&self, input: &PropertyInput) -> SectionResult {
        let text = self.call(Section::CallToAction, input).await?;
        Ok(format!(
            r#"<p class="call-to-action">{}</p>"#,
            single_line(&text)
        ))
    }

    fn backend(&self) -> &'static str {
        self.client.backend()
    }

    fn is_remote(&self) -> bool {
        true
    }
}

/// Collapses model line breaks so every fragment stays on one output line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::fixtures::lisbon_sale;
    use crate::models::Language;
    use std::sync::Mutex;

    /// Replays canned responses and records the prompts it was sent.
    struct ScriptedClient {
        responses: Mutex<Vec<Result<String, LlmError>>>,
        prompts: Mutex<Vec<(String, u32)>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<String, LlmError>>) -> Self {
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextCompletion for ScriptedClient {
        async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), max_tokens));
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(LlmError::EmptyContent))
        }

        fn backend(&self) -> &'static str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-1"
        }
    }

    fn generator(responses: Vec<Result<String, LlmError>>) -> RemoteGenerator<ScriptedClient> {
        RemoteGenerator::new(ScriptedClient::new(responses))
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("  \"Bright T3 in Lisbon\"\n"), "Bright T3 in Lisbon");
        assert_eq!(strip_quotes("'Chiado charm'"), "Chiado charm");
        assert_eq!(strip_quotes("“Curly”"), "Curly");
        assert_eq!(strip_quotes("No quotes"), "No quotes");
    }

    #[test]
    fn test_feature_items_strip_markers_and_blanks() {
        let items = feature_items("• 120 sqm\n\n- 3 bedrooms\n  * Balcony\n   \n•Elevator");
        assert_eq!(
            items,
            vec![
                "<li>120 sqm</li>",
                "<li>3 bedrooms</li>",
                "<li>Balcony</li>",
                "<li>Elevator</li>"
            ]
        );
    }

    #[tokio::test]
    async fn test_title_wrapped_and_unquoted() {
        let remote = generator(vec![Ok("\"Sunny T3 in Campo de Ourique\"".to_string())]);
        let title = remote.generate_title(&lisbon_sale(Language::En)).await.unwrap();
        assert_eq!(title, "<title>Sunny T3 in Campo de Ourique</title>");
        let prompts = remote.client.prompts.lock().unwrap();
        assert_eq!(prompts[0].1, 50);
        assert!(prompts[0].0.contains("maximum 60 characters"));
    }

    #[tokio::test]
    async fn test_meta_wrapped_in_attribute() {
        let remote = generator(vec![Ok("A \"rare\" T3. Ideal for families.".to_string())]);
        let meta = remote
            .generate_meta_description(&lisbon_sale(Language::En))
            .await
            .unwrap();
        assert_eq!(
            meta,
            r#"<meta name="description" content="A 'rare' T3. Ideal for families.">"#
        );
    }

    #[tokio::test]
    async fn test_key_features_single_line_list() {
        let remote = generator(vec![Ok("• 120 m²\n• Varanda\n• Elevador".to_string())]);
        let list = remote
            .generate_key_features(&lisbon_sale(Language::Pt))
            .await
            .unwrap();
        assert_eq!(
            list,
            r#"<ul id="key-features"><li>120 m²</li><li>Varanda</li><li>Elevador</li></ul>"#
        );
    }

    #[tokio::test]
    async fn test_bullets_only_response_is_malformed() {
        let remote = generator(vec![Ok("•\n-\n".to_string())]);
        let err = remote
            .generate_key_features(&lisbon_sale(Language::En))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationFailure::BackendCall {
                backend: "scripted",
                source: LlmError::EmptyContent
            }
        ));
    }

    #[tokio::test]
    async fn test_quote_only_response_is_empty() {
        let remote = generator(vec![Ok("\"\"".to_string())]);
        let err = remote.generate_h1(&lisbon_sale(Language::En)).await.unwrap_err();
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_backend_call_failure() {
        let remote = generator(vec![Err(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })]);
        let err = remote
            .generate_description(&lisbon_sale(Language::Es))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "scripted API error: API error (status 503): overloaded"
        );
    }

    #[tokio::test]
    async fn test_multiline_description_collapsed() {
        let remote = generator(vec![Ok("Bright flat.\n\nGreat views.".to_string())]);
        let description = remote
            .generate_description(&lisbon_sale(Language::En))
            .await
            .unwrap();
        assert_eq!(
            description,
            r#"<section id="description"><p>Bright flat. Great views.</p></section>"#
        );
    }
}
