// Model output cleanup: glyph stripping and the performance-keyword filter

pub mod normalize;
pub mod policy;

pub use normalize::strip_enumeration_glyphs;
pub use policy::{
    is_performance_line, sanitize_assessment, sanitize_flag, sanitize_lines, NO_RISK_FALLBACK,
    PERFORMANCE_KEYWORDS,
};
