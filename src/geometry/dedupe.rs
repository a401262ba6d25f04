use std::cmp::Ordering;

use crate::geometry::bbox::BBox;
use crate::models::{Hotspot, HotspotGeometry};

/// Overlap above this IoU means two hotspots describe the same region.
pub const IOU_MERGE_THRESHOLD: f64 = 0.55;

/// Bounding-box centers closer than this merge even without much overlap.
pub const CENTER_MERGE_THRESHOLD: f64 = 0.12;

/// Hard cap on hotspots per image after merging.
pub const MAX_HOTSPOTS: usize = 12;

/// Collapse near-duplicate hotspots. Larger regions are processed first so
/// small fragments fold into them; every candidate is compared against the
/// running kept list and merged into the first match, otherwise clamped
/// into the unit square and kept. The cap applies only after every
/// candidate has been seen, so late duplicates still enrich early entries.
pub fn dedupe_hotspots(hotspots: &[Hotspot]) -> Vec<Hotspot> {
    let mut sorted: Vec<Hotspot> = hotspots.to_vec();
    sorted.sort_by(|a, b| {
        let area_a = BBox::of(&a.geometry).area();
        let area_b = BBox::of(&b.geometry).area();
        area_b.partial_cmp(&area_a).unwrap_or(Ordering::Equal)
    });

    let mut kept: Vec<Hotspot> = Vec::new();
    for candidate in sorted {
        let bbox = BBox::of(&candidate.geometry);
        let target = kept.iter().position(|existing| {
            let kept_bbox = BBox::of(&existing.geometry);
            bbox.iou(&kept_bbox) > IOU_MERGE_THRESHOLD
                || bbox.center_distance(&kept_bbox) < CENTER_MERGE_THRESHOLD
        });
        match target {
            Some(i) => merge_into(&mut kept[i], candidate),
            None => {
                let mut clamped = candidate;
                clamp_geometry(&mut clamped.geometry);
                kept.push(clamped);
            }
        }
    }

    kept.truncate(MAX_HOTSPOTS);
    kept
}

/// Fold `incoming` into `existing`. The existing entry keeps its geometry,
/// label and severity; line lists become ordered unions.
fn merge_into(existing: &mut Hotspot, incoming: Hotspot) {
    existing.risks = union_lines(&existing.risks, &incoming.risks);
    existing.suggested_edits = union_lines(&existing.suggested_edits, &incoming.suggested_edits);
    if existing.label.is_empty() && !incoming.label.is_empty() {
        existing.label = incoming.label;
    }
    if existing.severity.is_none() {
        existing.severity = incoming.severity;
    }
}

/// First-seen union preserving order, duplicates within either side included.
fn union_lines(a: &[String], b: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in a.iter().chain(b.iter()) {
        if !out.iter().any(|seen| seen == line) {
            out.push(line.clone());
        }
    }
    out
}

fn clamp_geometry(geometry: &mut HotspotGeometry) {
    match geometry {
        HotspotGeometry::Circle { cx, cy, r } => {
            *cx = cx.clamp(0.0, 1.0);
            *cy = cy.clamp(0.0, 1.0);
            if let Some(r) = r {
                *r = r.clamp(0.0, 1.0);
            }
        }
        HotspotGeometry::Rect { x, y, w, h } => {
            *x = x.clamp(0.0, 1.0);
            *y = y.clamp(0.0, 1.0);
            *w = w.clamp(0.0, 1.0);
            *h = h.clamp(0.0, 1.0);
        }
    }
}
