// Redflag data models

pub mod assessment;
pub mod caption;
pub mod hotspot;
pub mod report;
pub mod request;

// Re-exports for convenience
pub use assessment::{AxisAssessment, RiskAxis};
pub use caption::{CaptionFlag, TextFeedback};
pub use hotspot::{Hotspot, HotspotGeometry, HotspotSeverity};
pub use report::{
    ImageAnalysis, ImageFeedback, OverallVerdict, RiskReport, TextAnalysis, WorstSource,
};
pub use request::{AuditRequest, ImageInput, MAX_KEY_VISUALS};
