use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// At most this many key visuals are sent for assessment; extras are ignored.
pub const MAX_KEY_VISUALS: usize = 3;

/// An uploaded key visual held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageInput {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Load an image file, deriving the MIME type from its extension.
    ///
    /// # Errors
    /// Returns an error for unsupported extensions or unreadable files.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        let mime = match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            _ => {
                return Err(anyhow!(
                    "unsupported image type (expected png/jpg/jpeg/webp): {}",
                    path.display()
                ))
            }
        };
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read image {}", path.display()))?;
        Ok(Self::new(mime, data))
    }

    pub fn base64_data(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// `data:` URI used to embed the image in rendered reports.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data())
    }
}

/// One audit request: target market, optional sector, caption, key visuals.
#[derive(Debug, Clone, Default)]
pub struct AuditRequest {
    pub country: String,
    pub sector: String,
    pub caption: String,
    pub images: Vec<ImageInput>,
}

impl AuditRequest {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Default::default()
        }
    }

    /// The images actually assessed, capped at [`MAX_KEY_VISUALS`].
    pub fn key_visuals(&self) -> &[ImageInput] {
        let n = self.images.len().min(MAX_KEY_VISUALS);
        &self.images[..n]
    }
}
