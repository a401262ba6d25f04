use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskAxis {
    Political,
    Cultural,
    Environmental,
    Social,
}

impl RiskAxis {
    /// Fixed evaluation order used by prompts, tiles, and normalization.
    pub const ALL: [RiskAxis; 4] = [
        RiskAxis::Political,
        RiskAxis::Cultural,
        RiskAxis::Environmental,
        RiskAxis::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAxis::Political => "Political",
            RiskAxis::Cultural => "Cultural",
            RiskAxis::Environmental => "Environmental",
            RiskAxis::Social => "Social",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Political" => Some(RiskAxis::Political),
            "Cultural" => Some(RiskAxis::Cultural),
            "Environmental" => Some(RiskAxis::Environmental),
            "Social" => Some(RiskAxis::Social),
            _ => None,
        }
    }
}

/// Safety assessment for one risk axis of one source (caption or key visuals).
///
/// Scores run 0..=25, higher is safer. Wire names follow the model contract
/// (`name`/`why`/`edits`/`checks`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisAssessment {
    #[serde(rename = "name")]
    pub axis: RiskAxis,
    pub score: i64,
    #[serde(rename = "why")]
    pub rationale: Vec<String>,
    #[serde(rename = "edits")]
    pub mitigations: Vec<String>,
    pub checks: Vec<String>,
}

impl AxisAssessment {
    pub fn new(
        axis: RiskAxis,
        score: i64,
        rationale: Vec<String>,
        mitigations: Vec<String>,
        checks: Vec<String>,
    ) -> Self {
        Self {
            axis,
            score,
            rationale,
            mitigations,
            checks,
        }
    }

    /// Safe placeholder for an axis the model response left out entirely.
    pub fn default_for(axis: RiskAxis) -> Self {
        Self::new(
            axis,
            25,
            vec![format!(
                "{} 축: 현재 기준에서 뚜렷한 논란·문제 소지가 확인되지 않습니다.",
                axis.as_str()
            )],
            vec!["유지 권장".to_string()],
            vec!["—".to_string()],
        )
    }

    /// Safe placeholder used when no key visual was provided at all.
    pub fn no_image_for(axis: RiskAxis) -> Self {
        Self::new(
            axis,
            25,
            vec!["이미지 미제공 — 해당 축에서 뚜렷한 논란·문제 소지가 확인되지 않습니다.".to_string()],
            vec!["유지 권장".to_string()],
            vec!["—".to_string()],
        )
    }
}
