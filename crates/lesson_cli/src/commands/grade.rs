//! `lesson-eval grade`: one-shot grading from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use lesson_constant::defaults;
use lesson_core::GradeRequest;
use lesson_grader::GradeError;

use crate::cli::Cli;
use crate::context::AppContext;
use crate::output;

pub async fn handle(cli: &Cli, topic: &str, file: Option<&Path>) -> Result<()> {
    let explanation = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read explanation from stdin")?;
            buf
        }
    };

    // Validate before touching credentials or the network
    let request = GradeRequest::new(topic, explanation).map_err(GradeError::from)?;

    let ctx = AppContext::init(cli, defaults::CLI_LOG_LEVEL)?;
    let spinner = output::spinner("Evaluating...");
    let result = ctx.grader.grade(&request).await;
    spinner.finish_and_clear();

    ctx.teardown();
    super::report(result)
}
