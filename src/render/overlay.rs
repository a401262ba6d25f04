//! Key visual overlays
//!
//! Draws merged hotspots as an SVG layer over each uploaded image. The
//! SVG uses a fixed 1000x1000 viewBox stretched over the image, so all
//! normalized coordinates scale by 1000 at draw time.

use crate::geometry::dedupe_hotspots;
use crate::models::{Hotspot, HotspotGeometry, ImageFeedback, ImageInput, MAX_KEY_VISUALS};
use crate::render::escape::attr_esc;
use crate::sanitize::strip_enumeration_glyphs;

/// Fill opacity for hotspot shapes.
pub const DEFAULT_OVERLAY_ALPHA: f64 = 0.20;

/// Radius for circles drawn without one. Intentionally tighter than the
/// bounding-box default so undersized circles do not dominate the image.
pub const CIRCLE_RENDER_RADIUS_DEFAULT: f64 = 0.08;

/// One rendered overlay: the composed HTML plus the cleaned model notes
/// that accompany it.
#[derive(Debug, Clone)]
pub struct ImageOverlay {
    pub index: i64,
    pub html: String,
    pub notes: String,
}

/// Build overlays for every feedback entry that points at a real image
/// and still has risk-bearing hotspots after merging.
pub fn build_overlays(feedback: &[ImageFeedback], images: &[ImageInput]) -> Vec<ImageOverlay> {
    let mut overlays = Vec::new();
    for item in feedback.iter().take(MAX_KEY_VISUALS) {
        let notes = strip_enumeration_glyphs(item.notes.trim());
        let flagged: Vec<Hotspot> = dedupe_hotspots(&item.hotspots)
            .into_iter()
            .filter(|h| h.has_risks())
            .collect();

        let in_range = item.index >= 1 && (item.index as usize) <= images.len();
        if !in_range || flagged.is_empty() {
            continue;
        }
        let img_src = images[item.index as usize - 1].data_uri();
        overlays.push(ImageOverlay {
            index: item.index,
            html: overlay_html(&img_src, &flagged, DEFAULT_OVERLAY_ALPHA),
            notes,
        });
    }
    overlays
}

/// Compose the image, the hotspot SVG and the corner badge into one block.
pub fn overlay_html(img_src: &str, hotspots: &[Hotspot], alpha: f64) -> String {
    let alpha = alpha.clamp(0.05, 0.9);

    let mut shapes = String::new();
    for spot in hotspots {
        let label = strip_enumeration_glyphs(&spot.label);
        let class = spot.css_class();
        match &spot.geometry {
            HotspotGeometry::Rect { x, y, w, h } => {
                shapes.push_str(&format!(
                    "<rect class=\"kv-hot {}\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\"><title>{}</title></rect>",
                    class,
                    x * 1000.0,
                    y * 1000.0,
                    w * 1000.0,
                    h * 1000.0,
                    attr_esc(&label)
                ));
            }
            HotspotGeometry::Circle { cx, cy, r } => {
                let r = r.unwrap_or(CIRCLE_RENDER_RADIUS_DEFAULT);
                shapes.push_str(&format!(
                    "<circle class=\"kv-hot {}\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"><title>{}</title></circle>",
                    class,
                    cx * 1000.0,
                    cy * 1000.0,
                    r * 1000.0,
                    attr_esc(&label)
                ));
            }
        }
    }

    let svg = format!(
        "<svg class=\"kv-svg\" viewBox=\"0 0 1000 1000\" preserveAspectRatio=\"none\" style=\"--alpha:{}\">\
        <defs>\
        <filter id=\"kv-glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
        <feGaussianBlur stdDeviation=\"6\" result=\"coloredBlur\"/>\
        <feMerge><feMergeNode in=\"coloredBlur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\
        </filter>\
        </defs>\
        {}\
        </svg>",
        alpha, shapes
    );

    format!(
        "<div class=\"kv-wrap\">\
        <img src=\"{}\" class=\"kv-img\"/>\
        {}\
        <div class=\"kv-badge\">Risk Overlay</div>\
        </div>",
        img_src, svg
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HotspotSeverity;

    fn risky_circle(cx: f64, cy: f64, r: Option<f64>) -> Hotspot {
        Hotspot {
            geometry: HotspotGeometry::Circle { cx, cy, r },
            label: "국기 노출".to_string(),
            severity: Some(HotspotSeverity::Risky),
            risks: vec!["정치적 상징".to_string()],
            suggested_edits: vec!["배경 교체".to_string()],
        }
    }

    fn png_image() -> ImageInput {
        ImageInput::new("image/png", vec![0x89, 0x50, 0x4E, 0x47])
    }

    #[test]
    fn test_rect_shape_is_scaled_and_formatted() {
        let spot = Hotspot {
            geometry: HotspotGeometry::Rect {
                x: 0.1,
                y: 0.25,
                w: 0.5,
                h: 0.2,
            },
            label: String::new(),
            severity: None,
            risks: vec!["로고".to_string()],
            suggested_edits: Vec::new(),
        };
        let html = overlay_html("data:image/png;base64,AAAA", &[spot], 0.20);
        assert!(html.contains(
            "<rect class=\"kv-hot \" x=\"100.0\" y=\"250.0\" width=\"500.0\" height=\"200.0\">"
        ));
    }

    #[test]
    fn test_circle_default_radius_is_render_default() {
        let html = overlay_html(
            "data:image/png;base64,AAAA",
            &[risky_circle(0.5, 0.5, None)],
            0.20,
        );
        assert!(html.contains("cx=\"500.0\" cy=\"500.0\" r=\"80.0\""));
    }

    #[test]
    fn test_severity_maps_to_css_class() {
        let html = overlay_html(
            "data:image/png;base64,AAAA",
            &[risky_circle(0.5, 0.5, Some(0.1))],
            0.20,
        );
        assert!(html.contains("class=\"kv-hot warn\""));
    }

    #[test]
    fn test_label_is_attribute_escaped() {
        let mut spot = risky_circle(0.5, 0.5, Some(0.1));
        spot.label = "\"브랜드\" 로고 & 마크".to_string();
        let html = overlay_html("data:image/png;base64,AAAA", &[spot], 0.20);
        assert!(html.contains("<title>&quot;브랜드&quot; 로고 &amp; 마크</title>"));
    }

    #[test]
    fn test_alpha_is_clamped() {
        let html = overlay_html("x", &[], 5.0);
        assert!(html.contains("--alpha:0.9"));
        let html = overlay_html("x", &[], 0.0);
        assert!(html.contains("--alpha:0.05"));
    }

    #[test]
    fn test_overlay_contains_badge_and_glow() {
        let html = overlay_html("x", &[], 0.20);
        assert!(html.contains("Risk Overlay"));
        assert!(html.contains("kv-glow"));
        assert!(html.contains("viewBox=\"0 0 1000 1000\""));
    }

    #[test]
    fn test_build_overlays_skips_out_of_range_index() {
        let feedback = vec![ImageFeedback {
            index: 2,
            notes: String::new(),
            hotspots: vec![risky_circle(0.5, 0.5, Some(0.1))],
        }];
        let overlays = build_overlays(&feedback, &[png_image()]);
        assert!(overlays.is_empty());
    }

    #[test]
    fn test_build_overlays_skips_riskless_hotspots() {
        let mut spot = risky_circle(0.5, 0.5, Some(0.1));
        spot.risks = vec![String::new()];
        let feedback = vec![ImageFeedback {
            index: 1,
            notes: "참고".to_string(),
            hotspots: vec![spot],
        }];
        let overlays = build_overlays(&feedback, &[png_image()]);
        assert!(overlays.is_empty());
    }

    #[test]
    fn test_build_overlays_cleans_notes() {
        let feedback = vec![ImageFeedback {
            index: 1,
            notes: " ① 우상단  국기 ".to_string(),
            hotspots: vec![risky_circle(0.5, 0.5, Some(0.1))],
        }];
        let overlays = build_overlays(&feedback, &[png_image()]);
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].index, 1);
        assert_eq!(overlays[0].notes, "우상단 국기");
        assert!(overlays[0].html.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_build_overlays_caps_feedback_entries() {
        // Four entries all pointing at the first image; only three render.
        let feedback: Vec<ImageFeedback> = (0..4)
            .map(|_| ImageFeedback {
                index: 1,
                notes: String::new(),
                hotspots: vec![risky_circle(0.5, 0.5, Some(0.1))],
            })
            .collect();
        let overlays = build_overlays(&feedback, &[png_image()]);
        assert_eq!(overlays.len(), 3);
    }
}
