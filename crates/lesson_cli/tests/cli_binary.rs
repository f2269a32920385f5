//! Process-level checks that never reach a real model.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn lesson_eval(args: &[&str], stdin: &str, envs: &[(&str, &str)]) -> Output {
    lesson_eval_bytes(args, stdin.as_bytes(), envs)
}

fn lesson_eval_bytes(args: &[&str], stdin: &[u8], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lesson-eval"));
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env_remove("LESSON_PROVIDER")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let mut child = cmd.spawn().expect("binary should start");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("stdin write");
    child.wait_with_output().expect("binary should exit")
}

#[test]
fn help_lists_commands() {
    let output = lesson_eval(&["--help"], "", &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["console", "serve", "grade"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn grade_rejects_empty_stdin() {
    let output = lesson_eval(&["grade", "--topic", "Cells"], "  \n\t\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Explanation cannot be empty."), "stderr: {stderr}");
}

#[test]
fn grade_json_error_envelope() {
    let output = lesson_eval(&["--output", "json", "grade"], "", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr.lines().last().unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(line).expect("json error line");
    assert_eq!(value["level"], "error");
    assert_eq!(value["message"], "Explanation cannot be empty.");
}

#[test]
fn grade_without_credentials_reports_config_error() {
    let output = lesson_eval(
        &["grade", "--topic", "Cells", "--provider", "gemini"],
        "Cells are the smallest unit of life.",
        &[],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing API key"), "stderr: {stderr}");
}

#[test]
fn console_blank_explanation_exits_cleanly() {
    let output = lesson_eval(&["console"], "Cells\nDONE\n", &[("GOOGLE_API_KEY", "test-key")]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter the topic you'll explain: "));
    assert!(stdout.contains("No explanation provided. Exiting."));
}

#[test]
fn console_unreadable_input_fails_after_logging_starts() {
    let output = lesson_eval_bytes(
        &["console"],
        b"Cells\n\xff\xfe not utf-8\n",
        &[("GOOGLE_API_KEY", "test-key")],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("valid UTF-8"), "stderr: {stderr}");
}
