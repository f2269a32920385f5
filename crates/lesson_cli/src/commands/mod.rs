//! Command dispatch.

pub mod console;
pub mod grade;
pub mod serve;

use anyhow::{Result, anyhow};
use lesson_core::GradedFeedback;
use lesson_grader::GradeError;

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Console => console::handle(&cli).await,
        Command::Serve { listen } => serve::handle(&cli, listen.clone()).await,
        Command::Grade { topic, file } => grade::handle(&cli, topic, file.as_deref()).await,
    }
}

/// Print feedback, or turn the failure into the command's error.
/// Schema failures include the model's raw text.
fn report(result: std::result::Result<GradedFeedback, GradeError>) -> Result<()> {
    match result {
        Ok(feedback) => {
            output::feedback(&feedback);
            Ok(())
        }
        Err(err) => match err.raw_response() {
            Some(raw) => Err(anyhow!("{err}\nRaw response content: {raw}")),
            None => Err(err.into()),
        },
    }
}
