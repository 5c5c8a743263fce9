mod client;
pub(crate) mod types;

pub use types::GenerationConfig;

use anyhow::{anyhow, Result};

use client::GeminiClient;
use types::*;

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
    base_url: Option<String>,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow!("GEMINI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// Send a single-turn prompt and return the model's raw text.
    pub async fn generate_text(&self, prompt: &str, config: GenerationConfig) -> Result<String> {
        let request = GenerateRequest::new()
            .content(Content::user(prompt))
            .generation_config(config);

        let response = self.client().generate(&self.model, &request).await?;

        response
            .text()
            .ok_or_else(|| anyhow!("No text in Gemini response"))
    }
}
