//! Conversion between unified types and OpenAI types

use super::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse, OpenAiResponseFormat};
use crate::error::{Error, Result};
use crate::types::{
    FinishReason, FinishReasonKind, GenerateRequest, GenerateResponse, Message, Role, Usage,
};

/// Convert unified request to OpenAI request
pub fn to_openai_request(req: &GenerateRequest) -> OpenAiRequest {
    OpenAiRequest {
        model: req.model.clone(),
        messages: req.messages.iter().map(to_openai_message).collect(),
        temperature: req.options.temperature,
        max_tokens: req.options.max_tokens,
        response_format: req.options.json_mode.then(|| OpenAiResponseFormat {
            type_: "json_object".to_string(),
        }),
    }
}

fn to_openai_message(msg: &Message) -> OpenAiMessage {
    let role = match msg.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    OpenAiMessage {
        role: role.to_string(),
        content: Some(msg.content.clone()),
    }
}

/// Convert OpenAI response to unified response
pub fn from_openai_response(resp: OpenAiResponse) -> Result<GenerateResponse> {
    let choice = resp
        .choices
        .first()
        .ok_or_else(|| Error::invalid_response("No choices in OpenAI response"))?;

    let usage = resp
        .usage
        .as_ref()
        .map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(GenerateResponse {
        text: choice.message.content.clone().unwrap_or_default(),
        finish_reason: parse_finish_reason(&choice.finish_reason),
        usage,
        model: resp.model.clone(),
    })
}

/// Parse OpenAI finish reason to unified finish reason
pub fn parse_finish_reason(reason: &Option<String>) -> FinishReason {
    match reason.as_deref() {
        Some("stop") => FinishReason::with_raw(FinishReasonKind::Stop, "stop"),
        Some("length") => FinishReason::with_raw(FinishReasonKind::Length, "length"),
        Some("content_filter") => {
            FinishReason::with_raw(FinishReasonKind::ContentFilter, "content_filter")
        }
        Some(raw) => FinishReason::with_raw(FinishReasonKind::Other, raw),
        None => FinishReason::other(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finish_reason() {
        assert_eq!(
            parse_finish_reason(&Some("stop".to_string())).unified,
            FinishReasonKind::Stop
        );
        assert_eq!(
            parse_finish_reason(&Some("length".to_string())).unified,
            FinishReasonKind::Length
        );
        assert_eq!(parse_finish_reason(&None).unified, FinishReasonKind::Other);
    }

    #[test]
    fn test_json_mode_sets_response_format() {
        let req = GenerateRequest::new(
            "gpt-4o-mini",
            vec![Message::system("rubric"), Message::user("Topic: Cells")],
        )
        .with_json_mode(true);
        let body = serde_json::to_value(to_openai_request(&req)).unwrap();
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Topic: Cells");
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_missing_content_is_empty_text() {
        let resp: OpenAiResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "stop"}]}"#,
        )
        .unwrap();
        let out = from_openai_response(resp).unwrap();
        assert_eq!(out.text, "");
    }

    #[test]
    fn test_no_choices_is_invalid() {
        let resp: OpenAiResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            from_openai_response(resp),
            Err(Error::InvalidResponse(_))
        ));
    }
}
