//! OpenAI-compatible provider module
//!
//! Implements the Provider trait over the Chat Completions API. Any endpoint
//! speaking the same wire format works via `OPENAI_BASE_URL`.

mod convert;
mod provider;
mod types;

pub use provider::OpenAiProvider;
pub use types::{OpenAiConfig, OpenAiRequest, OpenAiResponse};
