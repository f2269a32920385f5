//! Span helpers

/// Create a span with common HTTP request fields
///
/// # Example
///
/// ```rust
/// use lesson_observability::http_request_span;
///
/// let span = http_request_span!("POST", "/evaluate", "req-1");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! http_request_span {
    ($method:expr, $path:expr, $request_id:expr) => {
        tracing::info_span!(
            "http.request",
            http.method = $method,
            http.route = $path,
            http.status_code = tracing::field::Empty,
            request.id = $request_id,
        )
    };
}

/// Create a span around one grading call
///
/// Declares the fields later filled by [`record_duration`] and [`record_error`].
///
/// # Example
///
/// ```rust
/// use lesson_observability::grade_span;
///
/// let span = grade_span!("gemini", "Photosynthesis");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! grade_span {
    ($provider:expr, $topic:expr) => {
        tracing::info_span!(
            "grade.evaluate",
            llm.provider = $provider,
            grade.topic = $topic,
            grade.duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and emit an error event.
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string().as_str());
    tracing::error!(error = %error, "Operation failed");
}

/// Record a duration in milliseconds on the current span.
///
/// ```rust
/// use lesson_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// record_duration("grade.duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
