use crate::models::{AxisAssessment, CaptionFlag};
use crate::sanitize::normalize::strip_enumeration_glyphs;

/// Performance-marketing vocabulary that must never surface in risk
/// feedback. Entries are stored lowercase; matching is substring based
/// over the lowercased line.
pub const PERFORMANCE_KEYWORDS: [&str; 31] = [
    "전환",
    "전환율",
    "컨버전",
    "conversion",
    "cvr",
    "구매율",
    "매출",
    "revenue",
    "roas",
    "cpa",
    "cac",
    "클릭",
    "클릭률",
    "ctr",
    "도달",
    "노출수",
    "impression",
    "reach",
    "브랜딩",
    "브랜드 리프트",
    "성과",
    "퍼포먼스",
    "효율",
    "효과",
    "전략적",
    "성장률",
    "kpi",
    "트래픽",
    "세션",
    "리텐션",
    "재방문",
];

/// Shown whenever the filter strips every line of a list, so feedback
/// sections never render empty.
pub const NO_RISK_FALLBACK: &str =
    "해당 항목은 성과·효율과 무관하게, 현재 기준에서 뚜렷한 논란·문제 소지가 확인되지 않습니다.";

pub fn is_performance_line(line: &str) -> bool {
    let low = line.to_lowercase();
    PERFORMANCE_KEYWORDS.iter().any(|kw| low.contains(kw))
}

/// Clean each line, drop performance-marketing mentions, and fall back to
/// the canned no-risk comment when nothing survives.
pub fn sanitize_lines(lines: &[String]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for line in lines {
        let cleaned = strip_enumeration_glyphs(line);
        if cleaned.is_empty() {
            continue;
        }
        if is_performance_line(&cleaned) {
            continue;
        }
        kept.push(cleaned);
    }
    if kept.is_empty() {
        kept.push(NO_RISK_FALLBACK.to_string());
    }
    kept
}

/// Run the line filter over every feedback list of an axis assessment.
pub fn sanitize_assessment(assessment: &mut AxisAssessment) {
    assessment.rationale = sanitize_lines(&assessment.rationale);
    assessment.mitigations = sanitize_lines(&assessment.mitigations);
    assessment.checks = sanitize_lines(&assessment.checks);
}

/// Caption flags keep their span verbatim; only the commentary is filtered.
pub fn sanitize_flag(flag: &mut CaptionFlag) {
    flag.issues = sanitize_lines(&flag.issues);
    flag.edits = sanitize_lines(&flag.edits);
}
