//! CLI entry point for the lesson evaluator.

mod cli;
mod commands;
mod context;
mod output;

use std::path::Path;

use clap::Parser;
use lesson_constant::app;

use crate::cli::Cli;

/// Nearest `name` in `start` or one of its ancestors.
fn find_upwards(start: &Path, name: &str) -> Option<std::path::PathBuf> {
    start
        .ancestors()
        .take(32)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Load env files before flags are parsed: `~/.lesson/env`, then the nearest
/// project `.env`. Variables already set are never overridden.
fn load_env_files() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(app::DATA_DIR).join(app::ENV_FILE);
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(env_file) = find_upwards(&cwd, ".env") {
            let _ = dotenvy::from_path(&env_file);
        }
    }
}

#[tokio::main]
async fn main() {
    load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
