// Cross-cutting prompt fragments shared by every backend.
// Section-specific prompt text lives in generation::prompts.

/// System role sent with chat-style backends.
pub const COPYWRITER_SYSTEM: &str = "You are an expert real estate copywriter and SEO specialist.";
