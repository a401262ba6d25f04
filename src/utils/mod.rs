//! Shared utilities
//!
//! Environment configuration for the Gemini credentials.

pub mod env;

pub use env::{get_and_validate_api_key, get_gemini_key, load_env, validate_api_key};
