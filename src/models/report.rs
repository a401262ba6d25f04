use serde::{Deserialize, Serialize};

use super::assessment::AxisAssessment;
use super::caption::TextFeedback;
use super::hotspot::Hotspot;
use crate::scoring::RiskLevel;

/// Caption-side analysis as returned by the model, post sanitization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextAnalysis {
    pub country: String,
    pub core_dimensions: Vec<AxisAssessment>,
    pub text_feedback: TextFeedback,
}

/// Key-visual-side analysis. `image_feedback` entries reference uploads by
/// 1-based index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageAnalysis {
    pub country: String,
    pub core_dimensions: Vec<AxisAssessment>,
    pub image_feedback: Vec<ImageFeedback>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageFeedback {
    pub index: i64,
    pub notes: String,
    pub hotspots: Vec<Hotspot>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorstSource {
    #[serde(rename = "텍스트")]
    Text,
    #[serde(rename = "이미지")]
    Image,
}

impl WorstSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorstSource::Text => "text",
            WorstSource::Image => "image",
        }
    }

    /// Display label used inside verdict summaries.
    pub fn label(&self) -> &'static str {
        match self {
            WorstSource::Text => "텍스트",
            WorstSource::Image => "이미지",
        }
    }
}

/// Final verdict derived from the worst axis across both sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverallVerdict {
    pub level: RiskLevel,
    pub worst_axis: String,
    pub worst_src: WorstSource,
    pub worst_score: i64,
    pub bg: String,
    pub emoji: String,
    pub summary: String,
}

/// The exported result bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskReport {
    pub text_risk: TextAnalysis,
    pub image_risk: ImageAnalysis,
    pub overall: OverallVerdict,
    pub analyzed_at: String,
}
