use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use lesson_grader::{GradeError, Grader};
use lesson_observability::http_request_span;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::render;

const INDEX_PATH: &str = "/";
const EVALUATE_PATH: &str = "/evaluate";
const HEALTHZ_PATH: &str = "/healthz";

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub grader: Arc<Grader>,
}

impl AppState {
    pub fn new(grader: Grader) -> Self {
        Self {
            grader: Arc::new(grader),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct EvaluateForm {
    #[serde(default)]
    topic: String,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = uuid::Uuid::new_v4().to_string();
            http_request_span!(
                request.method().as_str(),
                request.uri().path(),
                request_id.as_str()
            )
        })
        .on_response(
            |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                let status = response.status().as_u16();
                span.record("http.status_code", status);
                let latency_ms = latency.as_millis().min(u128::from(u64::MAX)) as u64;
                tracing::info!(parent: span, status, latency_ms, "request completed");
            },
        );

    Router::new()
        .route(INDEX_PATH, get(index))
        .route(EVALUATE_PATH, post(evaluate))
        .route(HEALTHZ_PATH, get(healthz))
        .layer(trace_layer)
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render::page("", "", None, None))
}

async fn evaluate(
    State(state): State<AppState>,
    Form(form): Form<EvaluateForm>,
) -> impl IntoResponse {
    match state.grader.evaluate(&form.topic, &form.explanation).await {
        Ok(feedback) => (
            StatusCode::OK,
            Html(render::page(&form.topic, &form.explanation, None, Some(&feedback))),
        ),
        Err(err) => {
            if let Some(raw) = err.raw_response() {
                tracing::warn!(error = %err, raw_response = raw, "model output failed validation");
            }
            (
                error_status(&err),
                Html(render::page(
                    &form.topic,
                    &form.explanation,
                    Some(&err.to_string()),
                    None,
                )),
            )
        }
    }
}

/// Input and empty-reply problems re-render the form; upstream faults are 502.
fn error_status(err: &GradeError) -> StatusCode {
    match err {
        GradeError::EmptyInput | GradeError::UpstreamEmptyResponse => StatusCode::OK,
        GradeError::Gateway(_) | GradeError::SchemaValidation { .. } => StatusCode::BAD_GATEWAY,
        GradeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}
