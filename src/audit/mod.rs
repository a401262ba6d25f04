//! Audit pipeline: validate the request, call Gemini once per source,
//! decode and sanitize the answers, then fold both sources into a verdict.

pub mod decode;

use chrono::Utc;

use crate::error::{AuditError, Stage};
use crate::llm::{extract_json_object, image_prompt, text_prompt, GeminiClient};
use crate::models::{AuditRequest, AxisAssessment, ImageAnalysis, RiskAxis, RiskReport};
use crate::sanitize::{sanitize_assessment, sanitize_flag};
use crate::scoring::overall_verdict;

/// Reject requests with nothing to audit or no target market. Creative
/// content is checked before the country so the user fixes the bigger
/// gap first.
pub fn validate_request(request: &AuditRequest) -> Result<(), AuditError> {
    if request.caption.is_empty() && request.images.is_empty() {
        return Err(AuditError::MissingCreative);
    }
    if request.country.is_empty() {
        return Err(AuditError::MissingCountry);
    }
    Ok(())
}

/// Fully safe stand-in used when the request carries no key visuals.
pub fn no_image_analysis(country: &str) -> ImageAnalysis {
    ImageAnalysis {
        country: country.to_string(),
        core_dimensions: RiskAxis::ALL
            .iter()
            .map(|axis| AxisAssessment::no_image_for(*axis))
            .collect(),
        image_feedback: Vec::new(),
    }
}

/// Turn the raw model answers into the final report.
///
/// `image_raw` is `None` when no image call was made; the image side is
/// then synthesized as fully safe. Pure so it can be exercised against
/// captured model output without a network.
pub fn assemble_report(
    request: &AuditRequest,
    text_raw: &str,
    image_raw: Option<&str>,
) -> Result<RiskReport, AuditError> {
    let text_map = extract_json_object(text_raw).ok_or_else(|| AuditError::ModelJson {
        stage: Stage::Text,
        raw: text_raw.to_string(),
    })?;
    let mut text_risk = decode::decode_text_analysis(&text_map);

    let mut image_risk = match image_raw {
        Some(raw) => {
            let image_map = extract_json_object(raw).ok_or_else(|| AuditError::ModelJson {
                stage: Stage::Image,
                raw: raw.to_string(),
            })?;
            decode::decode_image_analysis(&image_map)
        }
        None => no_image_analysis(&request.country),
    };

    for assessment in &mut text_risk.core_dimensions {
        sanitize_assessment(assessment);
    }
    for flag in &mut text_risk.text_feedback.flags {
        sanitize_flag(flag);
    }
    for assessment in &mut image_risk.core_dimensions {
        sanitize_assessment(assessment);
    }

    let overall = overall_verdict(&text_risk, &image_risk);

    Ok(RiskReport {
        text_risk,
        image_risk,
        overall,
        analyzed_at: Utc::now().to_rfc3339(),
    })
}

/// Runs the two model calls for one request against a borrowed client.
pub struct Auditor<'a> {
    client: &'a GeminiClient,
}

impl<'a> Auditor<'a> {
    pub fn new(client: &'a GeminiClient) -> Self {
        Self { client }
    }

    /// Execute the full audit: caption assessment always, key-visual
    /// assessment only when images were provided.
    pub async fn run(&self, request: &AuditRequest) -> Result<RiskReport, AuditError> {
        validate_request(request)?;

        let text_raw = self
            .client
            .generate_text(&text_prompt(request))
            .await
            .map_err(|cause| AuditError::ModelCall {
                stage: Stage::Text,
                cause,
            })?;

        let key_visuals = request.key_visuals();
        let image_raw = if key_visuals.is_empty() {
            None
        } else {
            let raw = self
                .client
                .generate_with_images(&image_prompt(request), key_visuals)
                .await
                .map_err(|cause| AuditError::ModelCall {
                    stage: Stage::Image,
                    cause,
                })?;
            Some(raw)
        };

        assemble_report(request, &text_raw, image_raw.as_deref())
    }
}
