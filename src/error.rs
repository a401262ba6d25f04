//! Audit error types
//!
//! Error messages stay in Korean because they surface directly to the
//! reviewer running the audit, matching the report language.

use std::fmt;

/// Which model call a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Text,
    Image,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Text => "텍스트 Risk 평가",
            Stage::Image => "이미지 Risk 평가",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("텍스트 또는 이미지를 최소 1개 이상 제공하세요.")]
    MissingCreative,

    #[error("대상 국가/지역을 입력하세요.")]
    MissingCountry,

    #[error("{stage} — Gemini 호출 실패: {cause}")]
    ModelCall { stage: Stage, cause: anyhow::Error },

    #[error("{stage} — LLM JSON 파싱 실패")]
    ModelJson { stage: Stage, raw: String },
}

impl AuditError {
    /// The raw model reply behind a parse failure, kept so callers can
    /// show exactly what the model said.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            AuditError::ModelJson { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
