//! Rendered report integration tests
//!
//! Runs captured model answers through assembly and the HTML renderer:
//! - Near-duplicate hotspots merge into one drawn shape
//! - Severity drives the overlay CSS class
//! - Model notes lose their enumeration glyphs
//! - Flagged caption fragments are wrapped and merged
//! - Out-of-range feedback entries draw nothing

mod common;

use common::{image_answer_with_hotspots, request, text_answer_risky};
use redflag::{assemble_report, render_report_html};

#[test]
fn test_overlay_merges_near_duplicate_circles() {
    let request = request("대한민국", "꼰대 감성 탈출! 지금 시작하세요", 1);
    let report = assemble_report(
        &request,
        &text_answer_risky(),
        Some(&image_answer_with_hotspots()),
    )
    .unwrap();
    let html = render_report_html(&report, &request).unwrap();

    // Two overlapping circles collapse into the larger-area one; the rect
    // stays separate.
    assert_eq!(html.matches("<circle class=").count(), 1);
    assert_eq!(html.matches("<rect class=").count(), 1);
    assert!(html.contains("<circle class=\"kv-hot warn\" cx=\"520.0\" cy=\"480.0\" r=\"100.0\">"));
    assert!(html.contains("<rect class=\"kv-hot caution\" x=\"100.0\" y=\"100.0\" width=\"200.0\" height=\"150.0\">"));
    assert!(html.contains("<title>손동작</title>"));
}

#[test]
fn test_overlay_notes_lose_enumeration_glyphs() {
    let request = request("대한민국", "꼰대 감성 탈출!", 1);
    let report = assemble_report(
        &request,
        &text_answer_risky(),
        Some(&image_answer_with_hotspots()),
    )
    .unwrap();
    let html = render_report_html(&report, &request).unwrap();

    assert!(html.contains("<div class='anno'><b>중앙 인물의 손동작을 확인하세요.</b></div>"));
    assert!(!html.contains('②'));
}

#[test]
fn test_caption_flag_and_quoted_fragment_merge_into_one_span() {
    let request = request("대한민국", "꼰대 감성 탈출! 지금 시작하세요", 0);
    let report = assemble_report(&request, &text_answer_risky(), None).unwrap();
    let html = render_report_html(&report, &request).unwrap();

    // The span "꼰대 감성 탈출" already covers the quoted "꼰대" from the
    // issue text, so exactly one highlight remains.
    assert_eq!(html.matches("<span class='caption-flag'>").count(), 1);
    assert!(html.contains("<span class='caption-flag'>꼰대 감성 탈출</span>"));
    assert!(html.contains("caption-strong"));
}

#[test]
fn test_out_of_range_feedback_draws_nothing() {
    let request = request("대한민국", "꼰대 감성 탈출!", 1);
    let mut report = assemble_report(
        &request,
        &text_answer_risky(),
        Some(&image_answer_with_hotspots()),
    )
    .unwrap();
    report.image_risk.image_feedback[0].index = 5;

    let html = render_report_html(&report, &request).unwrap();
    assert!(!html.contains("<div class=\"kv-wrap\">"));
    assert!(!html.contains("Risk Overlay"));
    assert!(!html.contains("<circle class="));
}

#[test]
fn test_page_carries_both_score_sections() {
    let request = request("대한민국", "꼰대 감성 탈출!", 1);
    let report = assemble_report(
        &request,
        &text_answer_risky(),
        Some(&image_answer_with_hotspots()),
    )
    .unwrap();
    let html = render_report_html(&report, &request).unwrap();

    // One legend per source section.
    assert_eq!(html.matches("위험 (6~10)").count(), 2);
    // Caption side Cultural 8, visual side Cultural 12.
    assert!(html.contains("8/25"));
    assert!(html.contains("12/25"));
    assert!(html.contains("Key Visual 세부 평가 내용"));
    assert!(html.contains("카피라이트(캡션) 세부 평가 내용"));
}
