// Resume analysis: text extraction, the four LLM requests, and keyword normalization.
// All LLM calls go through llm_client's TextGenerator.

pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
