// Redflag - controversy risk auditor for marketing creative
// Module re-exports

pub mod models;
pub mod error;
pub mod sanitize;
pub mod scoring;
pub mod geometry;
pub mod highlight;
pub mod llm;
pub mod render;
pub mod audit;
pub mod utils;

// Re-export commonly used types
pub use models::{
    AuditRequest, AxisAssessment, CaptionFlag, Hotspot, HotspotGeometry, HotspotSeverity,
    ImageAnalysis, ImageFeedback, ImageInput, OverallVerdict, RiskAxis, RiskReport, TextAnalysis,
    WorstSource, MAX_KEY_VISUALS,
};

pub use audit::{assemble_report, no_image_analysis, validate_request, Auditor};
pub use error::{AuditError, Stage};
pub use llm::{GeminiClient, GEMINI_MODEL};
pub use render::render_report_html;
pub use scoring::{level_of, overall_verdict, worst_axis, RiskLevel, SCORE_MAX};
