//! Application metadata constants

pub const NAME: &str = "lesson-eval";
pub const DISPLAY_NAME: &str = "Lesson Evaluator";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Rubric-based grading of lesson explanations";

/// Directory name for user-level settings (holds the `env` file)
pub const DATA_DIR: &str = ".lesson";
/// Env file name inside DATA_DIR
pub const ENV_FILE: &str = "env";
