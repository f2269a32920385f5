//! Process-wide resources with explicit setup and teardown.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use lesson_constant::{app, defaults};
use lesson_grader::{Grader, GraderConfig, LlmProvider};
use lesson_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Logging plus the configured grader.
pub struct AppContext {
    pub grader: Arc<Grader>,
    pub config: GraderConfig,
}

impl AppContext {
    /// Install logging at `default_log_level` (unless `--verbose` or the
    /// environment says otherwise) and build the grader.
    pub fn init(cli: &Cli, default_log_level: &str) -> Result<Self> {
        init_logging(cli.verbose, default_log_level);
        let config = grader_config(cli)?;
        let grader = Grader::from_config(&config)?;
        Ok(Self {
            grader: Arc::new(grader),
            config,
        })
    }

    /// Flush exported spans.
    pub fn teardown(self) {
        lesson_observability::shutdown();
    }
}

fn init_logging(verbose: bool, default_log_level: &str) {
    let mut config = ObservabilityConfig::from_env()
        .with_version(app::VERSION)
        .with_default_log_level(default_log_level);
    if verbose {
        config = config.with_log_level(defaults::VERBOSE_LOG_LEVEL);
    }
    // A subscriber may already be installed (tests); keep going without ours
    let _ = lesson_observability::init(config);
}

/// Environment first, then command-line overrides.
pub fn grader_config(cli: &Cli) -> Result<GraderConfig> {
    let mut config = GraderConfig::from_env();
    if let Some(name) = &cli.provider {
        let provider = name
            .parse::<LlmProvider>()
            .map_err(|_| anyhow!("Unknown provider '{name}' (expected gemini or openai)"))?;
        config = config.with_provider(provider);
    }
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    if let Some(secs) = cli.timeout {
        if secs == 0 {
            return Err(anyhow!("--timeout must be at least 1 second"));
        }
        config = config.with_timeout_secs(secs);
    }
    Ok(config)
}
