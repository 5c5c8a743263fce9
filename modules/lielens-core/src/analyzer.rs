//! Owns the model call, response parsing, and the demo fallback.

use ai_client::util::{strip_code_blocks, truncate_chars};
use ai_client::{Gemini, GenerationConfig};
use chrono::Utc;
use tracing::{error, info, warn};

use lielens_common::{Config, LieLensError};

use crate::demo;
use crate::prompt::analysis_prompt;
use crate::report::{AnalysisMetadata, AnalysisReport};

/// Fixed sampling parameters. Low temperature keeps the structured output
/// stable enough to parse.
const GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.1,
    top_p: 0.8,
    top_k: 40,
    max_output_tokens: 4000,
};

enum Mode {
    Gemini(Gemini),
    Demo,
}

/// Analysis client, constructed once at startup. The Configured/Unconfigured
/// decision is made here and never revisited; handlers receive the analyzer
/// as an explicit value, so both states are testable without touching the
/// environment.
pub struct Analyzer {
    mode: Mode,
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        let mode = match config.api_key.as_deref() {
            Some(key) => {
                info!(model = config.gemini_model, "Gemini API configured");
                Mode::Gemini(Gemini::new(key, &config.gemini_model))
            }
            None => {
                warn!("Gemini API key not found - running in demo mode");
                Mode::Demo
            }
        };
        Self { mode }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.mode, Mode::Gemini(_))
    }

    /// Analyze resolved content. In demo mode this never performs network
    /// I/O. One attempt only; failures are surfaced, not retried.
    pub async fn analyze(
        &self,
        content: &str,
        source_type: &str,
    ) -> Result<AnalysisReport, LieLensError> {
        let gemini = match &self.mode {
            Mode::Demo => return Ok(demo::demo_report()),
            Mode::Gemini(gemini) => gemini,
        };

        let prompt = analysis_prompt(content, source_type);

        let raw = gemini
            .generate_text(&prompt, GENERATION)
            .await
            .map_err(|e| LieLensError::Analysis(e.to_string()))?;

        let mut report = parse_report(&raw)?;

        report.metadata = Some(AnalysisMetadata {
            analysis_timestamp: Utc::now(),
            model_used: gemini.model().to_string(),
            content_length: content.chars().count(),
            source_type: source_type.to_string(),
        });

        Ok(report)
    }
}

/// Strip an optional surrounding code fence and parse the remainder into a
/// typed report. The raw response never leaves this function except as a
/// truncated log line.
pub(crate) fn parse_report(raw: &str) -> Result<AnalysisReport, LieLensError> {
    let cleaned = strip_code_blocks(raw);
    serde_json::from_str(cleaned).map_err(|e| {
        error!(
            raw_response = truncate_chars(raw, 500),
            "Model response is not valid report JSON"
        );
        LieLensError::ResponseFormat(e.to_string())
    })
}
