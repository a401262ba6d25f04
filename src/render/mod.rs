// HTML report rendering: overlays, tiles and the standalone page

pub mod document;
pub mod escape;
pub mod overlay;
pub mod tiles;

pub use document::{render_report_html, PAGE_CSS};
pub use escape::{attr_esc, esc};
pub use overlay::{
    build_overlays, overlay_html, ImageOverlay, CIRCLE_RENDER_RADIUS_DEFAULT,
    DEFAULT_OVERLAY_ALPHA,
};
pub use tiles::{axis_tiles_html, banner_html, legend_html, status_chip_html};
