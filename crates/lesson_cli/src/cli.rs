//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Grade lesson explanations against a content-first rubric
#[derive(Parser)]
#[command(name = "lesson-eval", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// LLM provider (gemini, openai). Uses LESSON_PROVIDER if not set.
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Model id. Uses LESSON_MODEL if not set.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Seconds to wait for the model. Uses LESSON_TIMEOUT_SECS if not set.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive session: type a topic and an explanation, end with DONE
    Console,
    /// Run the web front-end
    Serve {
        /// Address to bind (default: LESSON_LISTEN_ADDR or 0.0.0.0:8000)
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// Grade one explanation from a file or stdin
    Grade {
        /// Topic of the explanation
        #[arg(short, long, default_value = "")]
        topic: String,
        /// Read the explanation from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
