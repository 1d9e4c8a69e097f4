use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::config::CONFIG;
use crate::utils::http::get_http_client;

const GEMINI_CALL_TIMEOUT_SECS: u64 = 90;

/// The two quality tiers the app uses: fast for analysis and the safety
/// audit, pro for the creative embellishment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Fast,
    Pro,
}

impl ModelTier {
    fn model_name(self) -> &'static str {
        match self {
            ModelTier::Fast => &CONFIG.gemini_model,
            ModelTier::Pro => &CONFIG.gemini_pro_model,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InlineImage<'a> {
    pub bytes: &'a [u8],
    pub mime_type: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct GeminiRequest<'a> {
    pub tier: ModelTier,
    pub prompt: &'a str,
    pub image: Option<InlineImage<'a>>,
    /// Ask for `application/json` output so the response parses as a
    /// structured object.
    pub json_response: bool,
    /// Enables high-effort thinking; only meaningful on the pro tier.
    pub deep_thinking: bool,
}

impl<'a> GeminiRequest<'a> {
    pub fn text(tier: ModelTier, prompt: &'a str) -> Self {
        GeminiRequest {
            tier,
            prompt,
            image: None,
            json_response: false,
            deep_thinking: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini request failed: {0}")]
    Transport(String),
    #[error("Gemini request failed with status {status}: {detail}")]
    Status { status: StatusCode, detail: String },
    #[error("Gemini response contained no text")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

fn redact_api_key(text: &str) -> String {
    let key = CONFIG.gemini_api_key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(message) = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .or_else(|| value.get("message").and_then(|v| v.as_str()))
        {
            return message.to_string();
        }
        return truncate_for_log(&value.to_string(), 2000);
    }

    truncate_for_log(trimmed, 2000)
}

fn build_payload(request: &GeminiRequest<'_>) -> Value {
    let mut parts = Vec::new();
    if let Some(image) = request.image {
        parts.push(json!({
            "inlineData": {
                "mimeType": image.mime_type,
                "data": general_purpose::STANDARD.encode(image.bytes)
            }
        }));
    }
    parts.push(json!({ "text": request.prompt }));

    let mut generation_config = Map::new();
    generation_config.insert("temperature".to_string(), json!(CONFIG.gemini_temperature));
    generation_config.insert("topK".to_string(), json!(CONFIG.gemini_top_k));
    generation_config.insert("topP".to_string(), json!(CONFIG.gemini_top_p));
    generation_config.insert(
        "maxOutputTokens".to_string(),
        json!(CONFIG.gemini_max_output_tokens),
    );
    if request.json_response {
        generation_config.insert("responseMimeType".to_string(), json!("application/json"));
    }
    if request.deep_thinking {
        generation_config.insert(
            "thinkingConfig".to_string(),
            json!({ "thinkingLevel": "HIGH" }),
        );
    }

    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": Value::Object(generation_config),
    })
}

fn extract_text(response: GeminiResponse) -> Option<String> {
    let mut text_parts = Vec::new();
    for candidate in response.candidates.unwrap_or_default() {
        if let Some(content) = candidate.content {
            for part in content.parts.unwrap_or_default() {
                if let Some(text) = part.text {
                    if !text.trim().is_empty() {
                        text_parts.push(text);
                    }
                }
            }
        }
    }
    if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join("\n"))
    }
}

/// Issues a single generateContent call and returns the response text.
/// No retry: the callers recover by falling back to their pre-call state.
pub async fn generate_text(request: &GeminiRequest<'_>) -> Result<String, GeminiError> {
    let model = request.tier.model_name();
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        model, CONFIG.gemini_api_key
    );
    let payload = build_payload(request);

    debug!(
        target: "llm.gemini",
        model = model,
        json_response = request.json_response,
        deep_thinking = request.deep_thinking,
        has_image = request.image.is_some(),
        prompt = %truncate_for_log(request.prompt, 200)
    );

    let response = get_http_client()
        .post(&url)
        .timeout(Duration::from_secs(GEMINI_CALL_TIMEOUT_SECS))
        .json(&payload)
        .send()
        .await
        .map_err(|err| GeminiError::Transport(redact_api_key(&err.to_string())))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(GeminiError::Status {
            status,
            detail: redact_api_key(&summarize_error_body(&body)),
        });
    }

    let parsed = response
        .json::<GeminiResponse>()
        .await
        .map_err(|err| GeminiError::Transport(redact_api_key(&err.to_string())))?;

    let text = extract_text(parsed).ok_or(GeminiError::EmptyResponse)?;
    debug!(target: "llm.gemini", model = model, response = %truncate_for_log(&text, 200));
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_inline_image_before_the_instruction_text() {
        let bytes = [0x89u8, 0x50, 0x4e, 0x47];
        let request = GeminiRequest {
            tier: ModelTier::Fast,
            prompt: "describe this",
            image: Some(InlineImage {
                bytes: &bytes,
                mime_type: "image/png",
            }),
            json_response: true,
            deep_thinking: false,
        };
        let payload = build_payload(&request);
        let parts = payload
            .pointer("/contents/0/parts")
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].get("inlineData").is_some());
        assert_eq!(parts[1]["text"], "describe this");
        assert_eq!(
            payload
                .pointer("/generationConfig/responseMimeType")
                .unwrap(),
            "application/json"
        );
        assert!(payload
            .pointer("/generationConfig/thinkingConfig")
            .is_none());
    }

    #[test]
    fn deep_thinking_adds_the_thinking_config() {
        let request = GeminiRequest {
            deep_thinking: true,
            ..GeminiRequest::text(ModelTier::Pro, "embellish")
        };
        let payload = build_payload(&request);
        assert_eq!(
            payload
                .pointer("/generationConfig/thinkingConfig/thinkingLevel")
                .unwrap(),
            "HIGH"
        );
        assert!(payload
            .pointer("/generationConfig/responseMimeType")
            .is_none());
    }

    #[test]
    fn extract_text_joins_non_empty_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "one" }, { "text": "  " }, { "text": "two" }] }
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).as_deref(), Some("one\ntwo"));
    }

    #[test]
    fn extract_text_reports_empty_responses() {
        let response: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(extract_text(response).is_none());
    }

    #[test]
    fn error_body_summary_prefers_the_api_message() {
        let body = r#"{"error": {"code": 429, "message": "quota exhausted"}}"#;
        assert_eq!(summarize_error_body(body), "quota exhausted");
        assert_eq!(summarize_error_body("  "), "empty response body");
        assert_eq!(summarize_error_body("plain failure"), "plain failure");
    }
}
