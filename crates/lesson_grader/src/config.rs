//! Grader configuration

use std::str::FromStr;

use lesson_constant::defaults;

use crate::adapt::AliasPolicy;

/// LLM provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    Gemini,
    OpenAI,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "gemini",
            LlmProvider::OpenAI => "openai",
        }
    }

    /// Model used when none is configured.
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => defaults::GEMINI_MODEL,
            LlmProvider::OpenAI => defaults::OPENAI_MODEL,
        }
    }
}

impl FromStr for LlmProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "openai" => Ok(LlmProvider::OpenAI),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Grader configuration
#[derive(Debug, Clone)]
pub struct GraderConfig {
    /// LLM provider
    pub provider: LlmProvider,
    /// Model id sent to the provider
    pub model: String,
    /// Upper bound on one LLM call
    pub timeout_secs: u64,
    /// Completion token cap (None = provider default)
    pub max_tokens: Option<u32>,
    pub alias_policy: AliasPolicy,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GraderConfig {
    pub fn new() -> Self {
        let provider = LlmProvider::default();
        Self {
            provider,
            model: provider.default_model().to_string(),
            timeout_secs: defaults::TIMEOUT_SECS,
            max_tokens: None,
            alias_policy: AliasPolicy::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Switches provider; a model still at the old provider's default follows along.
    pub fn with_provider(mut self, provider: LlmProvider) -> Self {
        if self.model == self.provider.default_model() {
            self.model = provider.default_model().to_string();
        }
        self.provider = provider;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.alias_policy = policy;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GraderConfig::from_env`] over an arbitrary variable source.
    /// Unparsable values are ignored and keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        let provider = match lookup("LESSON_PROVIDER") {
            Some(value) => value.parse::<LlmProvider>().ok(),
            // No explicit provider: infer from whichever API key is set
            None => {
                if lookup("OPENAI_API_KEY").is_some()
                    && lookup("GOOGLE_API_KEY").is_none()
                    && lookup("GEMINI_API_KEY").is_none()
                {
                    Some(LlmProvider::OpenAI)
                } else {
                    None
                }
            }
        };
        if let Some(provider) = provider {
            config = config.with_provider(provider);
        }

        if let Some(model) = lookup("LESSON_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }

        if let Some(val) = lookup("LESSON_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok()) {
            if val > 0 {
                config.timeout_secs = val;
            }
        }

        if let Some(val) = lookup("LESSON_MAX_TOKENS").and_then(|v| v.trim().parse::<u32>().ok()) {
            config.max_tokens = Some(val);
        }

        if let Some(policy) = lookup("LESSON_ALIAS_POLICY").and_then(|v| v.parse::<AliasPolicy>().ok()) {
            config.alias_policy = policy;
        }

        config
    }
}
