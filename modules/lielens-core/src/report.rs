//! The analysis verdict returned to clients.
//!
//! Field names and enum values are a wire contract shared with the prompt
//! template: the model is instructed to return exactly this shape, and
//! deserializing into these types is what validates it. A response missing a
//! required field or using an unknown enum value fails to parse and is
//! surfaced as a response-format error, never passed through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredibilityRating {
    Reliable,
    Questionable,
    Unreliable,
    Fabricated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManipulationType {
    Emotional,
    Logical,
    Social,
    Authority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareDecision {
    SafeToShare,
    ShareWithContext,
    AvoidSharing,
    DoNotShare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextAvailability {
    Full,
    Partial,
    Limited,
    Insufficient,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub primary_concern: String,
    pub credibility_rating: CredibilityRating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedTactic {
    pub tactic_name: String,
    pub description: String,
    pub example_from_content: String,
    pub manipulation_type: ManipulationType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveBias {
    pub bias_name: String,
    pub explanation: String,
    pub how_its_exploited: String,
    pub resistance_tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckFlag {
    pub claim: String,
    pub flag_reason: String,
    pub verification_suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalInsights {
    pub why_convincing: String,
    pub target_audience: String,
    pub psychological_appeal: String,
    pub critical_questions: Vec<String>,
    pub verification_steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub immediate_action: String,
    pub further_research: Vec<String>,
    pub share_decision: ShareDecision,
    pub learning_opportunity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceMetrics {
    pub analysis_confidence: u8,
    pub data_completeness: u8,
    pub context_availability: ContextAvailability,
}

/// Run metadata injected after a successful analysis. Never expected from
/// the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub analysis_timestamp: DateTime<Utc>,
    pub model_used: String,
    pub content_length: usize,
    pub source_type: String,
}

/// Where the analyzed content came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceInfo {
    Url {
        original_url: String,
        fetched_successfully: bool,
    },
    DirectText {
        content_type: String,
    },
}

impl SourceInfo {
    pub fn url(original_url: impl Into<String>) -> Self {
        Self::Url {
            original_url: original_url.into(),
            fetched_successfully: true,
        }
    }

    pub fn direct_text() -> Self {
        Self::DirectText {
            content_type: "direct_text".to_string(),
        }
    }

    /// The source-type label fed to the prompt and metadata.
    pub fn source_type(&self) -> &'static str {
        match self {
            Self::Url { .. } => "url",
            Self::DirectText { .. } => "text",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_summary: AnalysisSummary,
    pub detected_tactics: Vec<DetectedTactic>,
    pub cognitive_biases: Vec<CognitiveBias>,
    pub fact_check_flags: Vec<FactCheckFlag>,
    pub educational_insights: EducationalInsights,
    pub recommendations: Recommendations,
    pub confidence_metrics: ConfidenceMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_info: Option<SourceInfo>,
}
