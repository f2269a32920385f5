//! End-to-end grading pipeline.

use std::sync::Arc;
use std::time::Instant;

use lesson_core::{GradeRequest, GradedFeedback, Rubric};
use lesson_observability::{grade_span, record_duration, record_error};
use serde_json::Map;
use tracing::Instrument;

use crate::adapt::{adapt, AliasPolicy};
use crate::assemble::assemble;
use crate::config::GraderConfig;
use crate::error::{GatewayError, GradeError, Result};
use crate::extract::{decode_object, extract_json_object};
use crate::gateway::{LlmGateway, ProviderGateway};
use crate::prompt::build_prompt;

/// Grades explanations through an [`LlmGateway`].
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct Grader {
    gateway: Arc<dyn LlmGateway>,
    alias_policy: AliasPolicy,
}

impl Grader {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            alias_policy: AliasPolicy::default(),
        }
    }

    pub fn with_alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.alias_policy = policy;
        self
    }

    /// Grader over the configured provider.
    pub fn from_config(config: &GraderConfig) -> Result<Self> {
        let gateway = ProviderGateway::from_config(config)?;
        tracing::info!(
            provider = %config.provider,
            model = %config.model,
            timeout_secs = config.timeout_secs,
            alias_policy = %config.alias_policy,
            "Grader ready"
        );
        Ok(Self::new(Arc::new(gateway)).with_alias_policy(config.alias_policy))
    }

    pub fn alias_policy(&self) -> AliasPolicy {
        self.alias_policy
    }

    pub fn provider_id(&self) -> &str {
        self.gateway.provider_id()
    }

    /// Validate input, call the model once, and normalize its reply.
    ///
    /// A blank explanation fails with [`GradeError::EmptyInput`] before any
    /// gateway call.
    pub async fn evaluate(&self, topic: &str, explanation: &str) -> Result<GradedFeedback> {
        let request = GradeRequest::new(topic, explanation)?;
        self.grade(&request).await
    }

    /// Grade an already validated request.
    pub async fn grade(&self, request: &GradeRequest) -> Result<GradedFeedback> {
        let span = grade_span!(self.gateway.provider_id(), request.topic());
        async move {
            let start = Instant::now();
            let result = self.run(request).await;
            record_duration("grade.duration_ms", start.elapsed());
            match &result {
                Ok(feedback) => tracing::info!(
                    numerical_grade = feedback.numerical_grade,
                    letter_grade = %feedback.letter_grade,
                    "Evaluation complete"
                ),
                Err(e) => record_error(e),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(&self, request: &GradeRequest) -> Result<GradedFeedback> {
        let prompt = build_prompt(request);
        tracing::debug!(
            explanation_chars = request.explanation().chars().count(),
            "Sending grading prompt"
        );

        let raw = match self.gateway.complete(&prompt).await {
            Ok(raw) => raw,
            Err(GatewayError::Timeout(secs)) => {
                tracing::warn!(timeout_secs = secs, "LLM call timed out");
                return Err(GradeError::UpstreamEmptyResponse);
            }
            Err(e) => return Err(GradeError::Gateway(e)),
        };

        if raw.trim().is_empty() {
            tracing::warn!("LLM returned an empty response");
            return Err(GradeError::UpstreamEmptyResponse);
        }

        self.normalize(&raw)
    }

    /// Turn raw model text into feedback: extract, decode, adapt, assemble.
    ///
    /// Undecodable text yields fallback feedback. A value of the wrong type
    /// fails with [`GradeError::SchemaValidation`] carrying `raw`.
    pub fn normalize(&self, raw: &str) -> Result<GradedFeedback> {
        let candidate = extract_json_object(raw);
        let decoded = decode_object(candidate).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Model output is not a JSON object, using defaults");
            Map::new()
        });
        let adapted = adapt(&decoded, self.alias_policy);
        let feedback = assemble(&adapted).map_err(|source| GradeError::SchemaValidation {
            source,
            raw_response: raw.to_string(),
        })?;
        check_rubric(&feedback);
        Ok(feedback)
    }
}

/// Log when the model's total disagrees with the rubric; never enforced.
fn check_rubric(feedback: &GradedFeedback) {
    let expected = Rubric::weighted_grade(
        feedback.score_content,
        feedback.score_organization,
        feedback.score_mechanics,
    );
    if expected.abs_diff(feedback.numerical_grade) > 1 {
        tracing::debug!(
            expected,
            reported = feedback.numerical_grade,
            "Numerical grade differs from the weighted component scores"
        );
    }
}
