use serde::{Deserialize, Serialize};

/// One flagged portion of the caption with the issues behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CaptionFlag {
    pub span: String,
    pub issues: Vec<String>,
    pub edits: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextFeedback {
    pub flags: Vec<CaptionFlag>,
}
