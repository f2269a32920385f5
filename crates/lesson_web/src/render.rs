//! HTML rendering for the single evaluator page.

use std::fmt::Write;

use lesson_constant::app;
use lesson_core::GradedFeedback;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#222}\
textarea{width:100%;min-height:14rem}input[type=text]{width:100%}\
.error{background:#fde8e8;border:1px solid #f5a3a3;padding:.6rem;border-radius:4px}\
.grade{font-size:1.4rem}section{margin-top:1.5rem}";

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full page: form prefilled with `topic`/`explanation`, then an error or feedback block.
pub fn page(
    topic: &str,
    explanation: &str,
    error: Option<&str>,
    feedback: Option<&GradedFeedback>,
) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n",
        title = escape(app::DISPLAY_NAME),
    );

    if let Some(message) = error {
        let _ = writeln!(html, "<p class=\"error\" role=\"alert\">{}</p>", escape(message));
    }

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/evaluate\">\n\
         <label for=\"topic\">Topic</label>\n\
         <input type=\"text\" id=\"topic\" name=\"topic\" value=\"{}\">\n\
         <label for=\"explanation\">Your explanation</label>\n\
         <textarea id=\"explanation\" name=\"explanation\">{}</textarea>\n\
         <button type=\"submit\">Evaluate</button>\n</form>\n",
        escape(topic),
        escape(explanation),
    );

    if let Some(feedback) = feedback {
        feedback_section(&mut html, feedback);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn feedback_section(html: &mut String, fb: &GradedFeedback) {
    let _ = write!(
        html,
        "<section id=\"feedback\">\n<h2>Lesson Evaluation: {topic}</h2>\n\
         <p class=\"grade\">Numerical Grade: <strong>{grade}/100</strong> \
         &middot; Letter Grade: <strong>{letter}</strong></p>\n\
         <p>Calculation: <code>{calculation}</code></p>\n\
         <h3>Component scores (0-100 before weighting)</h3>\n<ul>\n\
         <li>Content: {content}</li>\n<li>Organization: {organization}</li>\n\
         <li>Mechanics: {mechanics}</li>\n</ul>\n",
        topic = escape(&fb.topic),
        grade = fb.numerical_grade,
        letter = escape(&fb.letter_grade),
        calculation = escape(&fb.calculation),
        content = fb.score_content,
        organization = fb.score_organization,
        mechanics = fb.score_mechanics,
    );
    list(html, "Strengths", &fb.strengths, None);
    list(html, "Weaknesses", &fb.weaknesses, None);
    list(
        html,
        "Suggestions for Improvement",
        &fb.improvement_suggestions,
        None,
    );
    list(
        html,
        "Mechanics issues",
        &fb.mechanics_issues,
        Some("None noted"),
    );
    html.push_str("</section>\n");
}

fn list(html: &mut String, heading: &str, items: &[String], empty: Option<&str>) {
    let _ = writeln!(html, "<h3>{}</h3>\n<ul>", escape(heading));
    if items.is_empty() {
        if let Some(placeholder) = empty {
            let _ = writeln!(html, "<li><em>{}</em></li>", escape(placeholder));
        }
    }
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape(item));
    }
    html.push_str("</ul>\n");
}
