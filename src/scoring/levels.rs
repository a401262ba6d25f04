use serde::{Deserialize, Serialize};

/// Maximum (safest) score on every axis.
pub const SCORE_MAX: i64 = 25;

/// Display color for level labels outside the scale.
pub const NEUTRAL_COLOR: &str = "#6B7280";

/// Safety level bands over the 0..=25 score scale, safest first.
pub const BANDS: [(i64, i64, RiskLevel); 5] = [
    (21, 25, RiskLevel::VerySafe),
    (16, 20, RiskLevel::Safe),
    (11, 15, RiskLevel::Caution),
    (6, 10, RiskLevel::Risky),
    (0, 5, RiskLevel::VeryRisky),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    #[serde(rename = "매우 안전")]
    VerySafe,
    #[serde(rename = "안전")]
    Safe,
    #[serde(rename = "주의")]
    Caution,
    #[serde(rename = "위험")]
    Risky,
    #[serde(rename = "매우 위험")]
    VeryRisky,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VerySafe => "매우 안전",
            RiskLevel::Safe => "안전",
            RiskLevel::Caution => "주의",
            RiskLevel::Risky => "위험",
            RiskLevel::VeryRisky => "매우 위험",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "매우 안전" => Some(RiskLevel::VerySafe),
            "안전" => Some(RiskLevel::Safe),
            "주의" => Some(RiskLevel::Caution),
            "위험" => Some(RiskLevel::Risky),
            "매우 위험" => Some(RiskLevel::VeryRisky),
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::VerySafe => "#16A34A",
            RiskLevel::Safe => "#65A30D",
            RiskLevel::Caution => "#D97706",
            RiskLevel::Risky => "#F59E0B",
            RiskLevel::VeryRisky => "#FF1F1F",
        }
    }

    /// 0 for very safe up to 4 for very risky.
    pub fn severity_rank(&self) -> i32 {
        match self {
            RiskLevel::VerySafe => 0,
            RiskLevel::Safe => 1,
            RiskLevel::Caution => 2,
            RiskLevel::Risky => 3,
            RiskLevel::VeryRisky => 4,
        }
    }
}

/// Classify a raw score. The classifier owns the clamp: callers may pass
/// anything and out-of-range inputs snap to the nearest band edge.
pub fn level_of(score: i64) -> RiskLevel {
    let s = score.clamp(0, SCORE_MAX);
    for (lo, hi, level) in BANDS {
        if lo <= s && s <= hi {
            return level;
        }
    }
    RiskLevel::VeryRisky
}

pub fn level_color(score: i64) -> &'static str {
    level_of(score).color()
}

/// Palette lookup over raw level labels; unrecognized labels get neutral gray.
pub fn color_for_label(label: &str) -> &'static str {
    RiskLevel::from_str(label)
        .map(|level| level.color())
        .unwrap_or(NEUTRAL_COLOR)
}
