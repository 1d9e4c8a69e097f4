//! Two-stage prompt refinement: a pro-tier embellish-and-sanitize pass
//! followed by a fast-tier safety audit of its output. The stages are a
//! fixed pair; the audit exists because the embellishment alone is not
//! reliably compliant with the content rules it is given.

use std::future::Future;

use serde::Deserialize;
use tracing::warn;

use crate::assembler::{AssembledPrompt, DEFAULT_NEGATIVE_PROMPT};
use crate::config::{EMBELLISH_PROMPT, SAFETY_AUDIT_PROMPT};
use crate::llm::gemini::GeminiError;
use crate::llm::{generate_text, GeminiRequest, ModelTier};

/// The prompt pair that is displayed and recorded to history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResult {
    pub main_text: String,
    pub negative_text: String,
    /// False when refinement was disabled or degraded to the raw base
    /// prompt, so the caller can surface that.
    pub refined: bool,
}

impl GeneratedResult {
    fn unrefined(base: &AssembledPrompt) -> Self {
        GeneratedResult {
            main_text: base.main_text.clone(),
            negative_text: base.negative_text.clone(),
            refined: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RefinementResponse {
    prompt: Option<String>,
    negative: Option<String>,
}

/// Models sometimes wrap structured output in a markdown fence even when
/// asked for raw JSON.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

/// Interprets the stage-1 response. A response that fails to parse as the
/// expected structure is treated as the refined main prompt verbatim, and
/// the default negative prompt is kept.
fn parse_embellishment(raw: &str, base_main: &str) -> (String, String) {
    match serde_json::from_str::<RefinementResponse>(strip_code_fences(raw)) {
        Ok(parsed) => {
            let main = parsed
                .prompt
                .filter(|prompt| !prompt.trim().is_empty())
                .unwrap_or_else(|| base_main.to_string());
            let negative = parsed
                .negative
                .filter(|negative| !negative.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NEGATIVE_PROMPT.to_string());
            (main, negative)
        }
        Err(err) => {
            warn!("Embellishment response was not the expected JSON shape: {err}");
            let trimmed = raw.trim();
            let main = if trimmed.is_empty() {
                base_main.to_string()
            } else {
                trimmed.to_string()
            };
            (main, DEFAULT_NEGATIVE_PROMPT.to_string())
        }
    }
}

/// The pipeline core, generic over the two calls so failures can be
/// injected in tests. A transport failure at either stage falls back to
/// the unrefined base prompt and the default negative prompt.
async fn run_pipeline<F1, Fut1, F2, Fut2>(
    base: &AssembledPrompt,
    embellish: F1,
    audit: F2,
) -> GeneratedResult
where
    F1: FnOnce(String) -> Fut1,
    Fut1: Future<Output = Result<String, GeminiError>>,
    F2: FnOnce(String) -> Fut2,
    Fut2: Future<Output = Result<String, GeminiError>>,
{
    let stage1 = match embellish(base.main_text.clone()).await {
        Ok(text) => text,
        Err(err) => {
            warn!("Embellishment call failed, keeping the base prompt: {err}");
            return GeneratedResult::unrefined(base);
        }
    };
    let (refined_main, refined_negative) = parse_embellishment(&stage1, &base.main_text);

    let audited = match audit(refined_main.clone()).await {
        Ok(text) => text,
        Err(err) => {
            warn!("Safety audit call failed, keeping the base prompt: {err}");
            return GeneratedResult::unrefined(base);
        }
    };
    let audited = audited.trim();
    let main_text = if audited.is_empty() {
        refined_main
    } else {
        audited.to_string()
    };

    GeneratedResult {
        main_text,
        negative_text: refined_negative,
        refined: true,
    }
}

/// Refines an assembled prompt through the external service. With
/// `enabled = false` this is the identity on the base prompt and issues
/// no network calls.
pub async fn refine(base: &AssembledPrompt, enabled: bool) -> GeneratedResult {
    if !enabled {
        return GeneratedResult::unrefined(base);
    }

    run_pipeline(
        base,
        |main| async move {
            let instruction = EMBELLISH_PROMPT.replace("{base_prompt}", &main);
            let request = GeminiRequest {
                json_response: true,
                deep_thinking: true,
                ..GeminiRequest::text(ModelTier::Pro, &instruction)
            };
            generate_text(&request).await
        },
        |main| async move {
            let instruction = SAFETY_AUDIT_PROMPT.replace("{prompt}", &main);
            generate_text(&GeminiRequest::text(ModelTier::Fast, &instruction)).await
        },
    )
    .await
}
