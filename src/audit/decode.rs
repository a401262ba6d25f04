//! Tolerant decoding of model JSON
//!
//! The model answers with loosely-shaped JSON. Every field is pulled out
//! permissively: wrong types fall back to defaults, unknown axis names
//! are dropped, and a usable four-axis list is reconstructed whenever at
//! least one axis survives.

use serde_json::{Map, Value};

use crate::models::{
    AxisAssessment, CaptionFlag, Hotspot, HotspotGeometry, HotspotSeverity, ImageAnalysis,
    ImageFeedback, RiskAxis, TextAnalysis, TextFeedback,
};
use crate::scoring::SCORE_MAX;

pub fn decode_text_analysis(map: &Map<String, Value>) -> TextAnalysis {
    let flags = map
        .get("text_feedback")
        .and_then(Value::as_object)
        .and_then(|feedback| feedback.get("flags"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(decode_flag)
                .collect()
        })
        .unwrap_or_default();

    TextAnalysis {
        country: string_field(map, "country"),
        core_dimensions: decode_axis_list(map.get("core_dimensions")),
        text_feedback: TextFeedback { flags },
    }
}

pub fn decode_image_analysis(map: &Map<String, Value>) -> ImageAnalysis {
    let image_feedback = map
        .get("image_feedback")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(decode_feedback_item)
                .collect()
        })
        .unwrap_or_default();

    ImageAnalysis {
        country: string_field(map, "country"),
        core_dimensions: decode_axis_list(map.get("core_dimensions")),
        image_feedback,
    }
}

/// Decode the per-axis list into exactly-one-entry-per-axis form. Unknown
/// axis names are dropped and duplicates resolve last-wins. When at least
/// one axis decodes, the other axes are filled with safe defaults in enum
/// order; when nothing decodes the list stays empty so the aggregator
/// sees a fully safe source.
fn decode_axis_list(value: Option<&Value>) -> Vec<AxisAssessment> {
    let items = match value.and_then(Value::as_array) {
        Some(items) => items,
        None => return Vec::new(),
    };

    let mut by_axis: [Option<AxisAssessment>; 4] = [None, None, None, None];
    let mut any = false;
    for item in items {
        let map = match item.as_object() {
            Some(map) => map,
            None => continue,
        };
        if let Some(assessment) = decode_axis(map) {
            let slot = RiskAxis::ALL
                .iter()
                .position(|axis| *axis == assessment.axis)
                .unwrap_or(0);
            by_axis[slot] = Some(assessment);
            any = true;
        }
    }

    if !any {
        return Vec::new();
    }

    RiskAxis::ALL
        .iter()
        .zip(by_axis)
        .map(|(axis, decoded)| decoded.unwrap_or_else(|| AxisAssessment::default_for(*axis)))
        .collect()
}

fn decode_axis(map: &Map<String, Value>) -> Option<AxisAssessment> {
    let name = string_field(map, "name");
    let axis = RiskAxis::from_str(name.trim())?;
    Some(AxisAssessment {
        axis,
        score: int_field(map, "score", SCORE_MAX),
        rationale: lines_field(map, "why"),
        mitigations: lines_field(map, "edits"),
        checks: lines_field(map, "checks"),
    })
}

fn decode_flag(map: &Map<String, Value>) -> CaptionFlag {
    CaptionFlag {
        span: string_field(map, "span"),
        issues: lines_field(map, "issues"),
        edits: lines_field(map, "edits"),
    }
}

fn decode_feedback_item(map: &Map<String, Value>) -> ImageFeedback {
    let hotspots = map
        .get("hotspots")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(decode_hotspot)
                .collect()
        })
        .unwrap_or_default();

    ImageFeedback {
        index: int_field(map, "index", 1),
        notes: string_field(map, "notes"),
        hotspots,
    }
}

/// Anything that does not explicitly say "rect" draws as a circle, the
/// shape the model is prompted toward.
fn decode_hotspot(map: &Map<String, Value>) -> Hotspot {
    let shape = string_field(map, "shape");
    let geometry = if shape.to_lowercase() == "rect" {
        HotspotGeometry::Rect {
            x: float_field(map, "x", 0.0),
            y: float_field(map, "y", 0.0),
            w: float_field(map, "w", 0.0),
            h: float_field(map, "h", 0.0),
        }
    } else {
        HotspotGeometry::Circle {
            cx: float_field(map, "cx", 0.5),
            cy: float_field(map, "cy", 0.5),
            r: opt_float_field(map, "r"),
        }
    };

    Hotspot {
        geometry,
        label: string_field(map, "label"),
        severity: HotspotSeverity::from_str(string_field(map, "severity").trim()),
        risks: lines_field(map, "risks"),
        suggested_edits: lines_field(map, "suggested_edits"),
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn lines_field(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn int_field(map: &Map<String, Value>, key: &str, default: i64) -> i64 {
    match map.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

fn float_field(map: &Map<String, Value>, key: &str, default: f64) -> f64 {
    opt_float_field(map, key).unwrap_or(default)
}

fn opt_float_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
