use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// A text-completion backend.
///
/// Implementations hold their own credentials and HTTP client and are shared
/// behind `Arc<dyn Provider>`; `generate` takes `&self` and keeps no state
/// between calls.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier, e.g. `"gemini"`.
    fn provider_id(&self) -> &str;

    /// Headers sent with every request, merged with per-request extras.
    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers;

    /// One non-streaming completion.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
