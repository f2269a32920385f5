//! The seam between the pipeline and a concrete LLM provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lesson_llms::{GeminiProvider, GenerateRequest, Message, OpenAiProvider, Provider};

use crate::config::{GraderConfig, LlmProvider};
use crate::error::{GatewayError, GradeError};
use crate::prompt::GradingPrompt;

/// Sends one grading prompt and returns the model's raw text.
///
/// Single-shot: no retries. The returned text may be empty; the pipeline
/// decides what that means.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Provider label for logs and spans.
    fn provider_id(&self) -> &str;

    async fn complete(&self, prompt: &GradingPrompt) -> Result<String, GatewayError>;
}

/// [`LlmGateway`] over a `lesson-llms` provider with a per-call timeout.
pub struct ProviderGateway {
    provider: Arc<dyn Provider>,
    model: String,
    timeout: Duration,
    max_tokens: Option<u32>,
}

impl ProviderGateway {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Build the configured provider, reading its credentials from the environment.
    pub fn from_config(config: &GraderConfig) -> Result<Self, GradeError> {
        let provider = create_provider(config.provider)
            .map_err(|e| GradeError::Config(e.to_string()))?;
        let mut gateway = Self::new(
            provider,
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        );
        if let Some(max_tokens) = config.max_tokens {
            gateway = gateway.with_max_tokens(max_tokens);
        }
        Ok(gateway)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_for(&self, prompt: &GradingPrompt) -> GenerateRequest {
        let messages = vec![
            Message::system(prompt.system.clone()),
            Message::user(prompt.user.clone()),
        ];
        let request = GenerateRequest::new(self.model.clone(), messages).with_json_mode(true);
        match self.max_tokens {
            Some(max_tokens) => request.with_max_tokens(max_tokens),
            None => request,
        }
    }
}

fn create_provider(provider: LlmProvider) -> lesson_llms::Result<Arc<dyn Provider>> {
    Ok(match provider {
        LlmProvider::Gemini => Arc::new(GeminiProvider::from_env()?),
        LlmProvider::OpenAI => Arc::new(OpenAiProvider::from_env()?),
    })
}

#[async_trait]
impl LlmGateway for ProviderGateway {
    fn provider_id(&self) -> &str {
        self.provider.provider_id()
    }

    async fn complete(&self, prompt: &GradingPrompt) -> Result<String, GatewayError> {
        let request = self.request_for(prompt);
        let timeout_secs = self.timeout.as_secs();

        let response = match tokio::time::timeout(self.timeout, self.provider.generate(request)).await {
            Err(_) => return Err(GatewayError::Timeout(timeout_secs)),
            Ok(Err(e)) if e.is_timeout() => return Err(GatewayError::Timeout(timeout_secs)),
            Ok(Err(e)) => return Err(GatewayError::Request(e)),
            Ok(Ok(response)) => response,
        };

        tracing::debug!(
            provider = %self.provider.provider_id(),
            model = %self.model,
            finish_reason = ?response.finish_reason.unified,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "LLM completion received"
        );

        Ok(response.text)
    }
}
