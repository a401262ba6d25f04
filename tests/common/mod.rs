//! Common test helpers for integration tests
//!
//! Provides request builders and canned Gemini answers so the pipeline
//! and report tests run without any network access. The answers mimic
//! real model output, markdown fences and chatter included.

use redflag::models::{AuditRequest, ImageInput};

/// Build a request with `image_count` one-pixel PNG attachments.
pub fn request(country: &str, caption: &str, image_count: usize) -> AuditRequest {
    let mut request = AuditRequest::new(country);
    request.caption = caption.to_string();
    for _ in 0..image_count {
        request
            .images
            .push(ImageInput::new("image/png", vec![0x89, 0x50, 0x4E, 0x47]));
    }
    request
}

/// Caption-side answer with a risky Cultural axis (score 8), one
/// enumeration glyph, one performance-marketing line and two flags, the
/// second of which survives only as the fallback comment.
pub fn text_answer_risky() -> String {
    r#"```json
{
  "country": "대한민국",
  "core_dimensions": [
    {"name": "Political", "score": 22, "why": ["정치적 언급이 없습니다."], "edits": ["유지 권장"], "checks": ["—"]},
    {"name": "Cultural", "score": 8, "why": ["① 특정 세대를 비하하는 속어가 포함되어 있습니다.", "전환율 개선에는 도움이 됩니다."], "edits": ["속어를 중립적 표현으로 교체하세요."], "checks": ["현지 검수자 확인"]},
    {"name": "Environmental", "score": 24, "why": ["환경 관련 언급이 없습니다."], "edits": ["유지 권장"], "checks": ["—"]},
    {"name": "Social", "score": 14, "why": ["외모 평가로 읽힐 수 있는 문구가 있습니다."], "edits": ["문구를 완화하세요."], "checks": ["소비자 반응 모니터링"]}
  ],
  "text_feedback": {
    "flags": [
      {"span": "꼰대 감성 탈출", "issues": ["“꼰대” 표현이 세대 갈등을 자극할 수 있습니다."], "edits": ["중립적인 표현으로 교체하세요."]},
      {"span": "", "issues": ["CTR 상승이 기대됩니다."], "edits": []}
    ]
  }
}
```"#
        .to_string()
}

/// Key-visual answer: all axes safer than the caption side, one feedback
/// entry with two near-duplicate circles and one distinct rect.
pub fn image_answer_with_hotspots() -> String {
    r#"Here is the assessment:
{
  "country": "대한민국",
  "core_dimensions": [
    {"name": "Political", "score": 21, "why": ["국기나 정치 상징이 보이지 않습니다."], "edits": ["유지 권장"], "checks": ["—"]},
    {"name": "Cultural", "score": 12, "why": ["손동작이 일부 문화권에서 모욕적으로 읽힐 수 있습니다."], "edits": ["손동작이 덜 부각되도록 크롭을 조정하세요."], "checks": ["현지 검수"]},
    {"name": "Environmental", "score": 23, "why": ["환경 논란 요소가 없습니다."], "edits": ["유지 권장"], "checks": ["—"]},
    {"name": "Social", "score": 19, "why": ["연출이 무난합니다."], "edits": ["유지 권장"], "checks": ["—"]}
  ],
  "image_feedback": [
    {
      "index": 1,
      "notes": "② 중앙 인물의 손동작을 확인하세요.",
      "hotspots": [
        {"shape": "circle", "cx": 0.52, "cy": 0.48, "r": 0.1, "label": "손동작", "severity": "위험", "risks": ["모욕적 제스처로 오인될 수 있음"], "suggested_edits": ["크롭 조정"]},
        {"shape": "circle", "cx": 0.5, "cy": 0.5, "label": "손동작", "severity": "위험", "risks": ["모욕적 제스처로 오인될 수 있음"], "suggested_edits": ["블러 처리"]},
        {"shape": "rect", "x": 0.1, "y": 0.1, "w": 0.2, "h": 0.15, "label": "배경 문구", "severity": "주의", "risks": ["민감한 배경 텍스트가 보입니다."], "suggested_edits": ["배경 텍스트를 제거하세요."]}
      ]
    }
  ]
}"#
    .to_string()
}
