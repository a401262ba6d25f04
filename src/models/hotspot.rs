use serde::{Deserialize, Serialize};

/// Hotspot geometry in normalized image coordinates (0..=1 on both axes).
///
/// The circle radius stays optional because the two consumers disagree on its
/// default: bounding-box math assumes 0.1, the SVG renderer draws 0.08.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum HotspotGeometry {
    Circle {
        cx: f64,
        cy: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        r: Option<f64>,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HotspotSeverity {
    #[serde(rename = "매우 위험")]
    VeryRisky,
    #[serde(rename = "위험")]
    Risky,
    #[serde(rename = "주의")]
    Caution,
}

impl HotspotSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotspotSeverity::VeryRisky => "매우 위험",
            HotspotSeverity::Risky => "위험",
            HotspotSeverity::Caution => "주의",
        }
    }

    /// Accepts the Korean labels the prompt asks for plus the English
    /// spellings models occasionally substitute.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "매우 위험" => Some(HotspotSeverity::VeryRisky),
            "위험" | "Risk" => Some(HotspotSeverity::Risky),
            "주의" | "Caution" => Some(HotspotSeverity::Caution),
            _ => None,
        }
    }

    /// Overlay CSS modifier; very risky keeps the default red styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            HotspotSeverity::VeryRisky => "",
            HotspotSeverity::Risky => "warn",
            HotspotSeverity::Caution => "caution",
        }
    }
}

/// A model-reported image region carrying risk annotations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotspot {
    #[serde(flatten)]
    pub geometry: HotspotGeometry,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<HotspotSeverity>,
    pub risks: Vec<String>,
    pub suggested_edits: Vec<String>,
}

impl Hotspot {
    /// True when at least one non-empty risk line is attached.
    pub fn has_risks(&self) -> bool {
        self.risks.iter().any(|r| !r.is_empty())
    }

    pub fn css_class(&self) -> &'static str {
        self.severity.map(|s| s.css_class()).unwrap_or("")
    }
}
