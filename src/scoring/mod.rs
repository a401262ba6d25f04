// Score classification and cross-source aggregation

pub mod levels;
pub mod verdict;

pub use levels::{color_for_label, level_color, level_of, RiskLevel, BANDS, NEUTRAL_COLOR, SCORE_MAX};
pub use verdict::{overall_verdict, worst_axis};
