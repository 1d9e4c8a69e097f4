//! Best-effort extraction of a scene description (and gear guesses) from
//! an uploaded photograph. Nothing here is required for generation; every
//! failure path yields an empty analysis instead of an error.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::Category;
use crate::config::IMAGE_ANALYSIS_PROMPT;
use crate::llm::{generate_text, GeminiRequest, InlineImage, ModelTier};
use crate::refine::strip_code_fences;
use crate::selection::SelectionState;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageAnalysis {
    pub subject: Option<String>,
    pub suggested_body_id: Option<String>,
    pub suggested_lens_id: Option<String>,
    pub suggested_style_id: Option<String>,
    pub suggested_shot_size_id: Option<String>,
}

impl ImageAnalysis {
    pub fn is_empty(&self) -> bool {
        *self == ImageAnalysis::default()
    }

    /// Merges the analysis into a selection. Suggested ids that the
    /// catalog does not know are discarded silently.
    pub fn apply_to(&self, selection: &mut SelectionState) {
        if let Some(subject) = &self.subject {
            if !subject.trim().is_empty() {
                selection.subject = subject.trim().to_string();
            }
        }
        let suggestions = [
            (Category::Body, &self.suggested_body_id),
            (Category::Lens, &self.suggested_lens_id),
            (Category::LightingStyle, &self.suggested_style_id),
            (Category::ShotSize, &self.suggested_shot_size_id),
        ];
        for (category, id) in suggestions {
            if let Some(id) = id {
                if !selection.select(category, id) {
                    debug!(
                        "Discarding suggested {} id not in catalog: {}",
                        category.label(),
                        id
                    );
                }
            }
        }
    }
}

/// Sniffs an image MIME type from the leading bytes. HEIC files need a
/// dedicated check because `infer` misreads some ftyp brands.
pub fn detect_mime_type(data: &[u8]) -> Option<String> {
    if data.len() > 12 {
        let ftyp = &data[4..12];
        if ftyp.starts_with(b"ftyp") {
            let brand = &ftyp[4..8];
            if brand == b"heic" || brand == b"heif" || brand == b"hevc" {
                return Some("image/heic".to_string());
            }
        }
    }

    infer::get(data).map(|kind| kind.mime_type().to_string())
}

fn parse_analysis(raw: &str) -> ImageAnalysis {
    match serde_json::from_str::<ImageAnalysis>(strip_code_fences(raw)) {
        Ok(analysis) => analysis,
        Err(err) => {
            warn!("Image analysis response was not the expected JSON shape: {err}");
            ImageAnalysis::default()
        }
    }
}

/// Sends the image to the fast tier with the analysis instruction. The
/// suggested ids are raw model output; validate them against the catalog
/// at apply time.
pub async fn analyze(image_bytes: &[u8], mime_type: &str) -> ImageAnalysis {
    let request = GeminiRequest {
        image: Some(InlineImage {
            bytes: image_bytes,
            mime_type,
        }),
        json_response: true,
        ..GeminiRequest::text(ModelTier::Fast, IMAGE_ANALYSIS_PROMPT)
    };

    match generate_text(&request).await {
        Ok(text) => parse_analysis(&text),
        Err(err) => {
            warn!("Image analysis call failed: {err}");
            ImageAnalysis::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn parses_the_documented_response_shape() {
        let raw = r#"{
            "subject": "a weathered fishing boat at dawn",
            "suggestedBodyId": "leica-m11",
            "suggestedLensId": "35mm-f14",
            "suggestedStyleId": "golden-hour",
            "suggestedShotSizeId": "wide-shot"
        }"#;
        let analysis = parse_analysis(raw);
        assert_eq!(
            analysis.subject.as_deref(),
            Some("a weathered fishing boat at dawn")
        );
        assert_eq!(analysis.suggested_body_id.as_deref(), Some("leica-m11"));
    }

    #[test]
    fn garbage_responses_produce_an_empty_analysis() {
        assert!(parse_analysis("not json at all").is_empty());
        assert!(parse_analysis("").is_empty());
    }

    #[test]
    fn partial_responses_keep_what_parsed() {
        let analysis = parse_analysis(r#"{"subject": "a lighthouse"}"#);
        assert_eq!(analysis.subject.as_deref(), Some("a lighthouse"));
        assert!(analysis.suggested_lens_id.is_none());
    }

    #[test]
    fn apply_discards_ids_missing_from_the_catalog() {
        let analysis = ImageAnalysis {
            subject: Some("a market street".to_string()),
            suggested_body_id: Some("kodak-brownie".to_string()),
            suggested_lens_id: Some("85mm-f12".to_string()),
            suggested_style_id: None,
            suggested_shot_size_id: Some("closeup".to_string()),
        };
        let mut selection = SelectionState::default();
        analysis.apply_to(&mut selection);
        assert_eq!(selection.subject, "a market street");
        assert_eq!(selection.body, catalog::default_record(Category::Body).id);
        assert_eq!(selection.lens, "85mm-f12");
        assert_eq!(selection.shot_size, "closeup");
    }

    #[test]
    fn apply_keeps_the_existing_subject_when_none_is_suggested() {
        let mut selection = SelectionState {
            subject: "already set".to_string(),
            ..SelectionState::default()
        };
        ImageAnalysis::default().apply_to(&mut selection);
        assert_eq!(selection.subject, "already set");
    }

    #[test]
    fn detects_common_image_formats() {
        let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0, 0];
        assert_eq!(detect_mime_type(&png).as_deref(), Some("image/png"));

        let mut heic = vec![0u8; 4];
        heic.extend_from_slice(b"ftypheic");
        heic.extend_from_slice(&[0u8; 8]);
        assert_eq!(detect_mime_type(&heic).as_deref(), Some("image/heic"));

        assert_eq!(detect_mime_type(&[0u8; 4]), None);
    }
}
