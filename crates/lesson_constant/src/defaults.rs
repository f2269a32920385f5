//! Runtime defaults shared by the grader, the web server and the CLI.

/// Default Gemini model
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Default model for OpenAI-compatible endpoints
pub const OPENAI_MODEL: &str = "gpt-4o-mini";

/// Seconds to wait for one LLM completion before giving up
pub const TIMEOUT_SECS: u64 = 60;

/// Web server bind address
pub const LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Log filter for interactive commands (keeps the console clean)
pub const CLI_LOG_LEVEL: &str = "warn";
/// Log filter for the web server
pub const SERVER_LOG_LEVEL: &str = "info";
/// Log filter with `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";
