//! Audit pipeline integration tests
//!
//! Exercises report assembly against captured model answers:
//! - Happy path: decode, sanitize, aggregate and timestamp a full report
//! - No-image requests synthesize a fully safe image side
//! - Unparseable model output surfaces the raw reply
//! - Input validation order and messages
//! - Exported JSON keeps the wire shape downstream tools consume

mod common;

use common::{image_answer_with_hotspots, request, text_answer_risky};
use redflag::sanitize::NO_RISK_FALLBACK;
use redflag::{assemble_report, AuditError, RiskLevel, Stage, WorstSource};
use serial_test::serial;

/// Full bundle from both captured answers: the caption's Cultural 8 beats
/// the visuals' Cultural 12 and drives the verdict.
#[test]
fn test_full_report_from_captured_answers() {
    let request = request("대한민국", "꼰대 감성 탈출! 지금 시작하세요", 1);
    let report = assemble_report(
        &request,
        &text_answer_risky(),
        Some(&image_answer_with_hotspots()),
    )
    .unwrap();

    assert_eq!(report.text_risk.country, "대한민국");
    assert_eq!(report.text_risk.core_dimensions.len(), 4);
    assert_eq!(report.image_risk.core_dimensions.len(), 4);

    assert_eq!(report.overall.level, RiskLevel::Risky);
    assert_eq!(report.overall.worst_axis, "Cultural");
    assert_eq!(report.overall.worst_src, WorstSource::Text);
    assert_eq!(report.overall.worst_score, 8);
    assert_eq!(report.overall.bg, "#F59E0B");
    assert_eq!(report.overall.emoji, "⚠️");
    assert_eq!(
        report.overall.summary,
        "Cultural 측면에서 (텍스트 내) 유의미한 리스크가 있습니다."
    );

    assert!(report.analyzed_at.contains('T'));
}

/// The enumeration glyph is stripped and the conversion-rate line is
/// dropped from the Cultural rationale before anything else sees it.
#[test]
fn test_report_rationale_is_sanitized() {
    let request = request("대한민국", "꼰대 감성 탈출!", 0);
    let report = assemble_report(&request, &text_answer_risky(), None).unwrap();

    let cultural = &report.text_risk.core_dimensions[1];
    assert_eq!(cultural.score, 8);
    assert_eq!(
        cultural.rationale,
        vec!["특정 세대를 비하하는 속어가 포함되어 있습니다.".to_string()]
    );
}

/// A flag whose commentary is all performance talk keeps its span but
/// ends up with the fallback comment in both lists.
#[test]
fn test_report_flags_are_sanitized() {
    let request = request("대한민국", "꼰대 감성 탈출!", 0);
    let report = assemble_report(&request, &text_answer_risky(), None).unwrap();

    let flags = &report.text_risk.text_feedback.flags;
    assert_eq!(flags.len(), 2);
    assert_eq!(flags[0].span, "꼰대 감성 탈출");
    assert!(flags[0].issues[0].contains("세대 갈등"));
    assert_eq!(flags[1].issues, vec![NO_RISK_FALLBACK.to_string()]);
    assert_eq!(flags[1].edits, vec![NO_RISK_FALLBACK.to_string()]);
}

/// Without images the image side is synthesized as fully safe, so the
/// caption side always carries the verdict.
#[test]
fn test_no_image_request_synthesizes_safe_image_side() {
    let request = request("대한민국", "꼰대 감성 탈출!", 0);
    let report = assemble_report(&request, &text_answer_risky(), None).unwrap();

    assert_eq!(report.image_risk.country, "대한민국");
    assert_eq!(report.image_risk.core_dimensions.len(), 4);
    assert!(report
        .image_risk
        .core_dimensions
        .iter()
        .all(|d| d.score == 25));
    assert!(report.image_risk.core_dimensions[0].rationale[0].starts_with("이미지 미제공"));
    assert!(report.image_risk.image_feedback.is_empty());
    assert_eq!(report.overall.worst_src, WorstSource::Text);
}

/// A refusal instead of JSON fails the matching stage and keeps the raw
/// reply for display.
#[test]
fn test_unparseable_image_answer_keeps_raw_reply() {
    let request = request("대한민국", "캡션", 1);
    let refusal = "죄송하지만 해당 요청은 평가할 수 없습니다.";
    let err = assemble_report(&request, &text_answer_risky(), Some(refusal)).unwrap_err();

    match err {
        AuditError::ModelJson { stage, raw } => {
            assert_eq!(stage, Stage::Image);
            assert_eq!(raw, refusal);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Creative content is validated before the country, and both messages
/// are user-facing Korean.
#[test]
fn test_validation_order_and_messages() {
    let neither = request("", "", 0);
    let err = redflag::validate_request(&neither).unwrap_err();
    assert!(matches!(err, AuditError::MissingCreative));
    assert_eq!(err.to_string(), "텍스트 또는 이미지를 최소 1개 이상 제공하세요.");

    let no_country = request("", "캡션만 있음", 0);
    let err = redflag::validate_request(&no_country).unwrap_err();
    assert!(matches!(err, AuditError::MissingCountry));
    assert_eq!(err.to_string(), "대상 국가/지역을 입력하세요.");

    let image_only = request("대한민국", "", 2);
    assert!(redflag::validate_request(&image_only).is_ok());
}

/// The exported bundle keeps the wire field names: `name`/`why`/`edits`
/// on axes, Korean labels for levels, sources and severities.
#[test]
fn test_export_bundle_wire_shape() {
    let request = request("대한민국", "꼰대 감성 탈출!", 1);
    let report = assemble_report(
        &request,
        &text_answer_risky(),
        Some(&image_answer_with_hotspots()),
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overall"]["level"], "위험");
    assert_eq!(json["overall"]["worst_src"], "텍스트");
    assert_eq!(json["text_risk"]["core_dimensions"][0]["name"], "Political");
    assert!(json["text_risk"]["core_dimensions"][1]["why"].is_array());

    let hotspot = &json["image_risk"]["image_feedback"][0]["hotspots"][0];
    assert_eq!(hotspot["shape"], "circle");
    assert_eq!(hotspot["severity"], "위험");
    assert_eq!(hotspot["cx"], 0.52);
}

/// Client construction reads GEMINI_API_KEY; serialized because the
/// process environment is shared across tests.
#[test]
#[serial]
fn test_client_requires_api_key() {
    std::env::remove_var("GEMINI_API_KEY");
    let err = match redflag::GeminiClient::new() {
        Ok(_) => panic!("client construction must fail without a key"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    std::env::set_var("GEMINI_API_KEY", "AIzaSyB0123456789abcdefghijklmnopqrstuvw");
    assert!(redflag::GeminiClient::new().is_ok());
    assert!(redflag::utils::get_and_validate_api_key().is_ok());
    std::env::remove_var("GEMINI_API_KEY");
}
