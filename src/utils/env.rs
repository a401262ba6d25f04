//! Environment configuration
//!
//! The only required setting is GEMINI_API_KEY, read from the process
//! environment or an optional .env file.

use anyhow::{anyhow, Context, Result};
use std::env;

/// Load variables from a .env file if one exists. Missing files are fine;
/// the environment may already carry everything needed.
pub fn load_env() -> Result<()> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Get GEMINI_API_KEY from environment
///
/// # Errors
/// Returns error if GEMINI_API_KEY environment variable is not set
pub fn get_gemini_key() -> Result<String> {
    env::var("GEMINI_API_KEY").context(
        "GEMINI_API_KEY environment variable not set. Please set it in .env or your environment.",
    )
}

/// Cheap shape check before any network call: non-empty and at least
/// 20 characters. Google API keys are around 39.
pub fn validate_api_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(anyhow!("API key cannot be empty"));
    }
    if key.len() < 20 {
        return Err(anyhow!(
            "API key appears invalid (too short). Expected >= 20 characters, got {}",
            key.len()
        ));
    }
    Ok(())
}

/// Fetch and validate GEMINI_API_KEY in one step.
pub fn get_and_validate_api_key() -> Result<String> {
    let key = get_gemini_key()?;
    validate_api_key(&key)?;
    Ok(key)
}
