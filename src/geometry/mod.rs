// Hotspot geometry: bounding boxes and near-duplicate merging

pub mod bbox;
pub mod dedupe;

pub use bbox::{BBox, CIRCLE_BBOX_RADIUS_DEFAULT};
pub use dedupe::{
    dedupe_hotspots, CENTER_MERGE_THRESHOLD, IOU_MERGE_THRESHOLD, MAX_HOTSPOTS,
};
