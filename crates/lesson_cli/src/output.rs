//! Terminal output helpers: styled text for humans, structured JSON for scripts.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for the component score table
//! - `indicatif` for the grading spinner

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use lesson_core::{GradedFeedback, Rubric};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    println!("{json}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
            data: None,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

// ── Feedback ───────────────────────────────────────────────────────

/// Print graded feedback (JSON mode emits the record under `data`).
pub fn feedback(fb: &GradedFeedback) {
    if is_json() {
        let value = serde_json::to_value(fb).unwrap_or(JsonValue::Null);
        emit_json("data", "feedback", Some(&value));
    } else {
        print!("{}", feedback_text(fb));
    }
}

/// Human-readable feedback report.
pub fn feedback_text(fb: &GradedFeedback) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("===== Lesson Evaluation =====").bold().cyan());
    let _ = writeln!(out, "Topic: {}", fb.topic);
    let _ = writeln!(out, "Numerical Grade: {}/100", style(fb.numerical_grade).bold());
    let _ = writeln!(out, "Letter Grade: {}", style(&fb.letter_grade).bold());
    let _ = writeln!(out, "Calculation: {}", fb.calculation);

    let _ = writeln!(out, "\n{}", style("Component scores (0-100 before weighting):").bold());
    let _ = writeln!(out, "{}", score_table(fb));

    bullet_section(&mut out, "Strengths:", &fb.strengths, None);
    bullet_section(&mut out, "Weaknesses:", &fb.weaknesses, None);
    bullet_section(
        &mut out,
        "Suggestions for Improvement (conceptual/structural):",
        &fb.improvement_suggestions,
        None,
    );
    bullet_section(
        &mut out,
        &format!("Specific mechanics issues (up to {}):", Rubric::MAX_MECHANICS_ISSUES),
        &fb.mechanics_issues,
        Some("None noted"),
    );
    let _ = writeln!(out, "{}", style("===============================").bold().cyan());
    out
}

fn bullet_section(out: &mut String, title: &str, items: &[String], empty: Option<&str>) {
    let _ = writeln!(out, "\n{}", style(title).bold());
    if items.is_empty() {
        if let Some(placeholder) = empty {
            let _ = writeln!(out, " - {placeholder}");
        }
    }
    for item in items {
        let _ = writeln!(out, " - {item}");
    }
}

fn score_table(fb: &GradedFeedback) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        ["Component", "Score", "Weight"]
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(comfy_table::Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    for (name, score, weight) in [
        ("Content", fb.score_content, Rubric::CONTENT),
        ("Organization", fb.score_organization, Rubric::ORGANIZATION),
        ("Mechanics", fb.score_mechanics, Rubric::MECHANICS),
    ] {
        table.add_row(vec![
            Cell::new(name).fg(Color::Green),
            Cell::new(score),
            Cell::new(format!("{weight:.2}")),
        ]);
    }
    table
}

// ── Spinners ───────────────────────────────────────────────────────

/// Spinner on stderr while waiting for the model; hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
