use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::generation::GenerationFailure;
use crate::llm_client::{ollama, openai};

/// Which generator serves requests. Resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Template,
    #[serde(rename = "openai")]
    OpenAi,
    Ollama,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Template => "template",
            GenerationMode::OpenAi => "openai",
            GenerationMode::Ollama => "ollama",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(GenerationMode::Template),
            "openai" => Ok(GenerationMode::OpenAi),
            "ollama" => Ok(GenerationMode::Ollama),
            other => anyhow::bail!(
                "GENERATION_MODE must be one of 'template', 'openai', 'ollama' (got '{other}')"
            ),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Constructed once in `main` and handed to the orchestrator; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub generation_mode: GenerationMode,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    /// Bounded wait for each remote call.
    pub llm_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generation_mode: GenerationMode::Template,
            openai_api_key: String::new(),
            openai_model: openai::DEFAULT_MODEL.to_string(),
            openai_base_url: openai::DEFAULT_BASE_URL.to_string(),
            ollama_base_url: ollama::DEFAULT_BASE_URL.to_string(),
            ollama_model: ollama::DEFAULT_MODEL.to_string(),
            llm_timeout: Duration::from_secs(60),
            host: "0.0.0.0".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses configuration from any key lookup. Missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let or_default = |key: &str, default: String| lookup(key).unwrap_or(default);

        let generation_mode = match lookup("GENERATION_MODE") {
            Some(raw) => raw.parse::<GenerationMode>()?,
            None => defaults.generation_mode,
        };

        let llm_timeout = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => defaults.llm_timeout,
        };

        let port = match lookup("API_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("API_PORT must be a valid port number")?,
            None => defaults.port,
        };

        Ok(Config {
            generation_mode,
            openai_api_key: or_default("OPENAI_API_KEY", defaults.openai_api_key),
            openai_model: or_default("OPENAI_MODEL", defaults.openai_model),
            openai_base_url: or_default("OPENAI_BASE_URL", defaults.openai_base_url),
            ollama_base_url: or_default("OLLAMA_BASE_URL", defaults.ollama_base_url),
            ollama_model: or_default("OLLAMA_MODEL", defaults.ollama_model),
            llm_timeout,
            host: or_default("API_HOST", defaults.host),
            port,
            rust_log: or_default("RUST_LOG", defaults.rust_log),
        })
    }

    /// Checks that the settings the active mode needs are present.
    pub fn validate(&self) -> Result<(), GenerationFailure> {
        match self.generation_mode {
            GenerationMode::Template => Ok(()),
            GenerationMode::OpenAi => {
                if self.openai_api_key.trim().is_empty() {
                    return Err(GenerationFailure::Configuration(
                        "OPENAI_API_KEY is required when GENERATION_MODE is 'openai'".to_string(),
                    ));
                }
                Ok(())
            }
            GenerationMode::Ollama => {
                if self.ollama_base_url.trim().is_empty() || self.ollama_model.trim().is_empty() {
                    return Err(GenerationFailure::Configuration(
                        "OLLAMA_BASE_URL and OLLAMA_MODEL are required when GENERATION_MODE is 'ollama'"
                            .to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.generation_mode, GenerationMode::Template);
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
        assert_eq!(config.ollama_model, "llama3.2");
        assert_eq!(config.port, 8000);
        assert_eq!(config.llm_timeout, Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mode_parsing_is_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[("GENERATION_MODE", " OpenAI ")])).unwrap();
        assert_eq!(config.generation_mode, GenerationMode::OpenAi);
    }

    #[test]
    fn test_unknown_mode_is_an_error_not_a_default() {
        let err = Config::from_lookup(lookup_from(&[("GENERATION_MODE", "gemini")])).unwrap_err();
        assert!(err.to_string().contains("gemini"));
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("API_PORT", "eighty")])).is_err());
    }

    #[test]
    fn test_openai_mode_requires_key() {
        let config = Config::from_lookup(lookup_from(&[("GENERATION_MODE", "openai")])).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GenerationFailure::Configuration(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_openai_mode_with_key_is_valid() {
        let config = Config::from_lookup(lookup_from(&[
            ("GENERATION_MODE", "openai"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
        ]))
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.openai_model, "gpt-4o");
    }

    #[test]
    fn test_ollama_mode_requires_model() {
        let config = Config::from_lookup(lookup_from(&[
            ("GENERATION_MODE", "ollama"),
            ("OLLAMA_MODEL", ""),
        ]))
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(GenerationFailure::Configuration(_))
        ));
    }

    #[test]
    fn test_timeout_override() {
        let config = Config::from_lookup(lookup_from(&[("LLM_TIMEOUT_SECS", "5")])).unwrap();
        assert_eq!(config.llm_timeout, Duration::from_secs(5));
    }
}
