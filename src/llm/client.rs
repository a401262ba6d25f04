//! Gemini API client
//!
//! Minimal REST client for the generateContent endpoint, with image
//! support via inline base64 parts.
//!
//! API specifics:
//! - Auth via `?key=API_KEY` query parameter (not header-based)
//! - Model: gemini-2.5-flash, pinned
//! - Responses forced to JSON via generationConfig.responseMimeType
//! - Thinking disabled (thinkingBudget 0) to keep latency flat

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

use crate::models::ImageInput;

/// Model used for every audit call.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Request body for generateContent
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    /// Conversation turns; audits always send a single user turn
    pub contents: Vec<Content>,
    /// Decoding controls
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// One conversation turn
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// "user" or "model"
    pub role: String,
    /// Prompt text and inline images
    pub parts: Vec<Part>,
}

/// A single content part; exactly one field is set
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: String) -> Self {
        Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data,
            }),
        }
    }
}

/// Base64-encoded image payload
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64 image bytes
    pub data: String,
}

/// Decoding configuration
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    pub response_modalities: Vec<String>,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "thinkingConfig")]
    pub thinking_config: ThinkingConfig,
}

/// Thinking budget control (0 disables thinking)
#[derive(Debug, Clone, Serialize)]
pub struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    pub thinking_budget: i32,
}

/// Response from generateContent; only the text path is read
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

/// Gemini API client
/// Handles all communication with the generateContent endpoint
pub struct GeminiClient {
    /// API key for authentication
    api_key: String,
    /// HTTP client (reused across requests)
    http_client: Client,
    /// API base URL
    api_base: String,
}

impl GeminiClient {
    /// Create new Gemini client from GEMINI_API_KEY environment variable
    ///
    /// # Errors
    /// Returns error if GEMINI_API_KEY is not set
    pub fn new() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable not set")?;

        Self::validate_api_key(&api_key)?;

        Ok(Self {
            api_key,
            http_client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Create client with custom API key (for testing)
    pub fn with_key(api_key: String) -> Result<Self> {
        Self::validate_api_key(&api_key)?;

        Ok(Self {
            api_key,
            http_client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Create client with custom API base URL (for testing/staging)
    pub fn with_url(api_key: String, api_base: String) -> Result<Self> {
        Self::validate_api_key(&api_key)?;

        Ok(Self {
            api_key,
            http_client: Client::new(),
            api_base,
        })
    }

    /// Validate API key format
    fn validate_api_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(anyhow!("API key cannot be empty"));
        }
        if key.len() < 20 {
            return Err(anyhow!("API key appears invalid (too short)"));
        }
        Ok(())
    }

    /// Run a text-only prompt
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.generate(prompt, &[]).await
    }

    /// Run a prompt with inline images attached after the text part
    pub async fn generate_with_images(
        &self,
        prompt: &str,
        images: &[ImageInput],
    ) -> Result<String> {
        self.generate(prompt, images).await
    }

    /// Call the generateContent endpoint and return the concatenated
    /// candidate text, trimmed
    async fn generate(&self, prompt: &str, images: &[ImageInput]) -> Result<String> {
        let request = Self::build_request(prompt, images);

        let response = self
            .http_client
            .post(self.endpoint_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            return Err(anyhow!("Gemini API error ({}): {}", status, response_text));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&response_text)
            .context("Failed to parse Gemini API response")?;

        Ok(Self::extract_text(&gemini_response))
    }

    /// Build the request body: one user turn with the prompt first and
    /// images in upload order after it
    fn build_request(prompt: &str, images: &[ImageInput]) -> GeminiRequest {
        let mut parts = vec![Part::text(prompt)];
        for image in images {
            parts.push(Part::inline_data(&image.mime_type, image.base64_data()));
        }

        GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string()],
                response_mime_type: "application/json".to_string(),
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, GEMINI_MODEL, self.api_key
        )
    }

    /// Concatenate the text parts of the first candidate
    fn extract_text(response: &GeminiResponse) -> String {
        let candidate = match response.candidates.first() {
            Some(candidate) => candidate,
            None => return String::new(),
        };
        let mut text = String::new();
        for part in &candidate.content.parts {
            text.push_str(&part.text);
        }
        text.trim().to_string()
    }
}
