//! Lesson grading pipeline.
//!
//! ```text
//! GradeRequest ─▶ prompt ─▶ LlmGateway ─▶ raw text ─▶ extract ─▶ decode
//!                                                         │
//!                       GradedFeedback ◀─ assemble ◀─ adapt
//! ```
//!
//! Unparsable model output degrades to fallback feedback; only a value that
//! cannot be coerced to its schema type fails the request.

pub mod adapt;
pub mod assemble;
pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod grader;
pub mod prompt;

pub use adapt::{adapt, AdaptedMapping, AliasPolicy};
pub use assemble::assemble;
pub use config::{GraderConfig, LlmProvider};
pub use error::{GatewayError, GradeError, Result, SchemaValidationError};
pub use extract::{decode_object, extract_json_object};
pub use gateway::{LlmGateway, ProviderGateway};
pub use grader::Grader;
pub use prompt::{build_prompt, GradingPrompt};
