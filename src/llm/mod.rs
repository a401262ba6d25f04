// Gemini access: client, prompts and raw-output JSON extraction

pub mod client;
pub mod extract;
pub mod prompts;

pub use client::{GeminiClient, GEMINI_MODEL};
pub use extract::extract_json_object;
pub use prompts::{
    image_context, image_prompt, text_context, text_prompt, IMAGE_RISK_PROMPT, TEXT_RISK_PROMPT,
};
