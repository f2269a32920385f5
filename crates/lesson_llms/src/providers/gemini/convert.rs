//! Conversion between unified types and Gemini types

use super::types::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};
use crate::types::{
    FinishReason, FinishReasonKind, GenerateRequest, GenerateResponse, Role, Usage,
};

/// Convert unified request to Gemini request.
///
/// System messages become `systemInstruction`; assistant turns use the `model` role.
pub fn to_gemini_request(req: &GenerateRequest) -> GeminiRequest {
    let contents = req
        .messages
        .iter()
        .filter(|m| m.role != Role::System)
        .map(|m| GeminiContent {
            role: Some(
                match m.role {
                    Role::Assistant => "model",
                    _ => "user",
                }
                .to_string(),
            ),
            parts: vec![GeminiPart {
                text: Some(m.content.clone()),
            }],
        })
        .collect();

    let system_instruction = req.system_prompt().map(|text| GeminiContent {
        role: None,
        parts: vec![GeminiPart { text: Some(text) }],
    });

    let opts = &req.options;
    let generation_config = if opts.max_tokens.is_some() || opts.temperature.is_some() || opts.json_mode
    {
        Some(GeminiGenerationConfig {
            max_output_tokens: opts.max_tokens,
            temperature: opts.temperature,
            response_mime_type: opts.json_mode.then(|| "application/json".to_string()),
        })
    } else {
        None
    };

    GeminiRequest {
        contents,
        system_instruction,
        generation_config,
    }
}

/// Convert Gemini response to unified response.
///
/// Text is the concatenation of the first candidate's text parts. A response
/// without candidates (blocked prompt) yields empty text.
pub fn from_gemini_response(resp: GeminiResponse) -> GenerateResponse {
    let usage = resp
        .usage_metadata
        .as_ref()
        .map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        })
        .unwrap_or_default();

    let Some(candidate) = resp.candidates.first() else {
        let finish_reason = resp
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
            .map(|raw| FinishReason::with_raw(FinishReasonKind::ContentFilter, raw))
            .unwrap_or_else(FinishReason::other);
        return GenerateResponse {
            text: String::new(),
            finish_reason,
            usage,
            model: resp.model_version,
        };
    };

    let text: String = candidate
        .content
        .as_ref()
        .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
        .unwrap_or_default();

    GenerateResponse {
        text,
        finish_reason: parse_finish_reason(&candidate.finish_reason),
        usage,
        model: resp.model_version.clone(),
    }
}

/// Parse Gemini finish reason to unified finish reason
pub fn parse_finish_reason(reason: &Option<String>) -> FinishReason {
    match reason.as_deref() {
        Some("STOP") => FinishReason::with_raw(FinishReasonKind::Stop, "STOP"),
        Some("MAX_TOKENS") => FinishReason::with_raw(FinishReasonKind::Length, "MAX_TOKENS"),
        Some(raw @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII")) => {
            FinishReason::with_raw(FinishReasonKind::ContentFilter, raw)
        }
        Some(raw) => FinishReason::with_raw(FinishReasonKind::Other, raw),
        None => FinishReason::other(),
    }
}
