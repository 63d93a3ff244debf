// Listing content generation.
// Seven sections, one contract, three backends: templates, OpenAI and Ollama.
// Remote text goes through llm_client; templates never touch the network.

pub mod formatting;
pub mod generator;
pub mod handlers;
pub mod limits;
pub mod orchestrator;
pub mod prompts;
pub mod remote;
pub mod template;

pub use generator::{GenerationFailure, ListingGenerator, Section};
pub use orchestrator::ContentOrchestrator;
