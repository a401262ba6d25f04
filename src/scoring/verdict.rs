use crate::models::{AxisAssessment, ImageAnalysis, OverallVerdict, TextAnalysis, WorstSource};
use crate::scoring::levels::{level_of, RiskLevel, SCORE_MAX};

/// Pick the lowest-scoring axis. Ties go to the earliest entry, and an
/// empty list reads as a fully safe source (no axis name, top score).
pub fn worst_axis(dims: &[AxisAssessment]) -> (String, i64) {
    match dims.iter().min_by_key(|d| d.score) {
        Some(worst) => (worst.axis.as_str().to_string(), worst.score),
        None => (String::new(), SCORE_MAX),
    }
}

/// Fold both sources into the banner verdict. The text source wins score
/// ties so caption problems surface ahead of visual ones.
pub fn overall_verdict(text: &TextAnalysis, image: &ImageAnalysis) -> OverallVerdict {
    let (t_axis, t_score) = worst_axis(&text.core_dimensions);
    let (i_axis, i_score) = worst_axis(&image.core_dimensions);

    let (worst_src, axis, score) = if t_score <= i_score {
        (WorstSource::Text, t_axis, t_score)
    } else {
        (WorstSource::Image, i_axis, i_score)
    };

    let level = level_of(score);
    let (emoji, summary) = match level {
        RiskLevel::VeryRisky => (
            "🛑",
            format!(
                "{} 측면에서 ({} 내) 매우 큰 리스크가 있습니다.",
                axis,
                worst_src.label()
            ),
        ),
        RiskLevel::Risky => (
            "⚠️",
            format!(
                "{} 측면에서 ({} 내) 유의미한 리스크가 있습니다.",
                axis,
                worst_src.label()
            ),
        ),
        RiskLevel::Caution => (
            "⚠️",
            format!(
                "{} 측면에서 ({} 내) 주의 신호가 있습니다.",
                axis,
                worst_src.label()
            ),
        ),
        RiskLevel::Safe => (
            "✅",
            "전반적으로 안전 수준입니다. 최소 안전 점수 16점 이상.".to_string(),
        ),
        RiskLevel::VerySafe => (
            "✅",
            "전반적으로 매우 안전합니다. 모든 축이 21점 이상.".to_string(),
        ),
    };

    OverallVerdict {
        level,
        worst_axis: axis,
        worst_src,
        worst_score: score,
        bg: level.color().to_string(),
        emoji: emoji.to_string(),
        summary,
    }
}
