use std::env;

use tracing::warn;

/// Environment variables checked for a Gemini credential, in order.
/// The first non-empty value wins.
const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Application configuration loaded from environment variables.
///
/// A missing API key is a supported state, not an error: the service then
/// runs in demo mode and never calls the model.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub gemini_model: String,

    // Web server
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.trim().is_empty());

        if api_key.is_none() {
            warn!("No Gemini API key found - running in demo mode");
        }

        Self {
            api_key,
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT must be a number"),
        }
    }

    /// A config with no credential, for tests and local demo runs.
    pub fn demo() -> Self {
        Self {
            api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}
