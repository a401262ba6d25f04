use crate::models::HotspotGeometry;

/// Radius assumed for circles that arrive without one when computing
/// bounding boxes. Rendering uses a smaller default on purpose, so the
/// missing value must stay missing until draw time.
pub const CIRCLE_BBOX_RADIUS_DEFAULT: f64 = 0.1;

/// Axis-aligned bounding box in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    pub fn of(geometry: &HotspotGeometry) -> Self {
        match geometry {
            HotspotGeometry::Circle { cx, cy, r } => {
                let r = r.unwrap_or(CIRCLE_BBOX_RADIUS_DEFAULT);
                BBox {
                    x0: cx - r,
                    y0: cy - r,
                    x1: cx + r,
                    y1: cy + r,
                }
            }
            HotspotGeometry::Rect { x, y, w, h } => BBox {
                x0: *x,
                y0: *y,
                x1: x + w,
                y1: y + h,
            },
        }
    }

    pub fn area(&self) -> f64 {
        (self.x1 - self.x0).max(0.0) * (self.y1 - self.y0).max(0.0)
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Intersection over union; degenerate pairs (zero union) score 0.
    pub fn iou(&self, other: &BBox) -> f64 {
        let ix0 = self.x0.max(other.x0);
        let iy0 = self.y0.max(other.y0);
        let ix1 = self.x1.min(other.x1);
        let iy1 = self.y1.min(other.y1);
        let iw = (ix1 - ix0).max(0.0);
        let ih = (iy1 - iy0).max(0.0);
        let inter = iw * ih;
        let union = self.area() + other.area() - inter;
        if union > 0.0 {
            inter / union
        } else {
            0.0
        }
    }

    pub fn center_distance(&self, other: &BBox) -> f64 {
        let (cx1, cy1) = self.center();
        let (cx2, cy2) = other.center();
        (cx1 - cx2).hypot(cy1 - cy2)
    }
}
