//! `lesson-eval console`: interactive prompt for one explanation.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use lesson_constant::defaults;

use crate::cli::Cli;
use crate::context::AppContext;
use crate::output;

const TOPIC_PROMPT: &str = "Enter the topic you'll explain: ";
const END_MARKER: &str = "done";

/// What the user typed.
#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    pub topic: String,
    pub explanation: String,
}

/// Read a topic line, then explanation lines until `DONE` (any case) or EOF.
pub fn read_submission<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Submission> {
    write!(out, "{TOPIC_PROMPT}")?;
    out.flush()?;
    let mut topic = String::new();
    input.read_line(&mut topic)?;

    writeln!(
        out,
        "\nBegin explaining your topic. Type 'DONE' on a new line when you are finished.\n"
    )?;
    out.flush()?;

    let mut lines = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\n', '\r']);
        if text.trim().eq_ignore_ascii_case(END_MARKER) {
            break;
        }
        lines.push(text.to_string());
    }

    Ok(Submission {
        topic: topic.trim().to_string(),
        explanation: lines.join("\n"),
    })
}

pub async fn handle(cli: &Cli) -> Result<()> {
    let ctx = AppContext::init(cli, defaults::CLI_LOG_LEVEL)?;

    output::header("Welcome to the content-focused Lesson Evaluator.");
    let submission = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        read_submission(&mut input, &mut out)
    };
    let submission = match submission {
        Ok(submission) => submission,
        Err(e) => {
            ctx.teardown();
            return Err(e.into());
        }
    };

    if submission.explanation.trim().is_empty() {
        output::warning("No explanation provided. Exiting.");
        ctx.teardown();
        return Ok(());
    }

    let spinner = output::spinner("Evaluating your explanation...");
    let result = ctx
        .grader
        .evaluate(&submission.topic, &submission.explanation)
        .await;
    spinner.finish_and_clear();

    ctx.teardown();
    super::report(result)
}
