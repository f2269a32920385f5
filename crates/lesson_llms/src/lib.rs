//! lesson_llms: provider-agnostic completions for the lesson evaluator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Arc<dyn Provider>               │
//! │                     │                        │
//! │          ┌──────────┴──────────┐             │
//! │          ▼                     ▼             │
//! │   ┌─────────────┐      ┌──────────────┐     │
//! │   │   Gemini    │      │ OpenAI-compat │     │
//! │   │  Provider   │      │   Provider    │     │
//! │   └─────────────┘      └──────────────┘     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lesson_llms::{GeminiProvider, GenerateRequest, Message, Provider};
//!
//! # async fn run() -> lesson_llms::Result<()> {
//! let provider = GeminiProvider::from_env()?;
//! let request = GenerateRequest::new(
//!     "gemini-2.5-flash",
//!     vec![Message::system("Grade this."), Message::user("Topic: Cells")],
//! );
//! let response = provider.generate(request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;


// Re-export core abstractions
pub use error::{Error, Result};
pub use provider::Provider;

// Re-export provider implementations
#[cfg(feature = "gemini")]
pub use providers::GeminiProvider;
#[cfg(feature = "openai")]
pub use providers::OpenAiProvider;

// Re-export commonly used types
pub use types::{
    FinishReason, FinishReasonKind, GenerateOptions, GenerateRequest, GenerateResponse, Headers,
    Message, Role, Usage,
};
