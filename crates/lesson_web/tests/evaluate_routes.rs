use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use lesson_grader::{GatewayError, Grader, GradingPrompt, LlmGateway};
use lesson_web::{AppState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

struct StubGateway {
    reply: Result<String, u64>,
    calls: AtomicUsize,
}

#[async_trait]
impl LlmGateway for StubGateway {
    fn provider_id(&self) -> &str {
        "stub"
    }

    async fn complete(&self, _prompt: &GradingPrompt) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(GatewayError::Timeout)
    }
}

fn app_with(reply: Result<&str, u64>) -> (axum::Router, Arc<StubGateway>) {
    let gateway = Arc::new(StubGateway {
        reply: reply.map(str::to_string),
        calls: AtomicUsize::new(0),
    });
    let state = AppState::new(Grader::new(gateway.clone()));
    (build_router(state), gateway)
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/evaluate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builder should not fail")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body must be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body must be utf-8")
}

const GOOD_REPLY: &str = r#"```json
{"topic": "Photosynthesis", "numerical_grade": 85, "letter_grade": "B",
 "score_content": 86, "score_organization": 78, "score_mechanics": 92,
 "calculation": "0.8*86 + 0.15*78 + 0.05*92 = 85",
 "strengths": ["Covers light reactions"], "weaknesses": ["Thin on the Calvin cycle"],
 "improvement_suggestions": ["Add an example", "Define terms", "Order the stages"],
 "mechanics_issues": []}
```"#;

#[tokio::test]
async fn index_serves_form() {
    let (app, _) = app_with(Ok(GOOD_REPLY));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("index handler should respond");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");
    let html = body_text(response).await;
    assert!(html.contains("<form method=\"post\" action=\"/evaluate\">"));
}

#[tokio::test]
async fn healthz_returns_ok_json() {
    let (app, _) = app_with(Ok(GOOD_REPLY));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .expect("healthz handler should respond");

    assert_eq!(response.status(), StatusCode::OK);
    let value: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(value, json!({ "status": "ok" }));
}

#[tokio::test]
async fn evaluate_renders_feedback() {
    let (app, gateway) = app_with(Ok(GOOD_REPLY));
    let response = app
        .oneshot(form_request("topic=Photosynthesis&explanation=Plants+make+sugar"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Lesson Evaluation: Photosynthesis"));
    assert!(html.contains("85/100"));
    assert!(html.contains("<li>Covers light reactions</li>"));
    assert!(html.contains("None noted"));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_explanation_rerenders_form_without_llm_call() {
    let (app, gateway) = app_with(Ok(GOOD_REPLY));
    let response = app
        .oneshot(form_request("topic=Cells&explanation=+++"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Explanation cannot be empty."));
    assert!(html.contains("value=\"Cells\""));
    assert!(!html.contains("id=\"feedback\""));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_fields_count_as_blank() {
    let (app, gateway) = app_with(Ok(GOOD_REPLY));
    let response = app.oneshot(form_request("topic=Cells")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Explanation cannot be empty."));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_llm_reply_shows_message() {
    let (app, _) = app_with(Ok("   "));
    let response = app
        .oneshot(form_request("topic=Cells&explanation=Cells+divide"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Empty response from LLM."));
}

#[tokio::test]
async fn timeout_shows_empty_response_message() {
    let (app, _) = app_with(Err(60));
    let response = app
        .oneshot(form_request("topic=Cells&explanation=Cells+divide"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Empty response from LLM."));
}

#[tokio::test]
async fn schema_error_is_bad_gateway() {
    let (app, _) = app_with(Ok(r#"{"numerical_grade": "great"}"#));
    let response = app
        .oneshot(form_request("topic=Cells&explanation=Cells+divide"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Error parsing response"));
    assert!(html.contains("numerical_grade"));
}
