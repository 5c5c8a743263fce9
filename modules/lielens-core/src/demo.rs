//! Canned verdict served when no model credential is configured.

use chrono::Utc;

use crate::report::*;

pub const DEMO_MODEL_NAME: &str = "demo-mode";

/// Fixed report with zeroed confidence. Every top-level key of a real
/// report is present; only the values signal degraded operation.
pub fn demo_report() -> AnalysisReport {
    AnalysisReport {
        analysis_summary: AnalysisSummary {
            risk_level: RiskLevel::Medium,
            risk_score: 65,
            primary_concern: "Demo mode - Limited analysis available".to_string(),
            credibility_rating: CredibilityRating::Questionable,
        },
        detected_tactics: vec![DetectedTactic {
            tactic_name: "Demo Analysis".to_string(),
            description: "This is a demonstration response".to_string(),
            example_from_content: "Sample content".to_string(),
            manipulation_type: ManipulationType::Emotional,
        }],
        cognitive_biases: vec![CognitiveBias {
            bias_name: "Demo Bias".to_string(),
            explanation: "This is a sample analysis".to_string(),
            how_its_exploited: "Demo content".to_string(),
            resistance_tip: "Set up a Gemini API key for full analysis".to_string(),
        }],
        fact_check_flags: Vec::new(),
        educational_insights: EducationalInsights {
            why_convincing: "Demo mode active".to_string(),
            target_audience: "Developers testing the system".to_string(),
            psychological_appeal: "Shows system functionality".to_string(),
            critical_questions: vec!["Is the API key configured?".to_string()],
            verification_steps: vec!["Configure a Gemini API key".to_string()],
        },
        recommendations: Recommendations {
            immediate_action: "Configure production API access".to_string(),
            further_research: vec!["Set up Google Cloud credentials".to_string()],
            share_decision: ShareDecision::SafeToShare,
            learning_opportunity: "Understanding system architecture".to_string(),
        },
        confidence_metrics: ConfidenceMetrics {
            analysis_confidence: 0,
            data_completeness: 0,
            context_availability: ContextAvailability::Insufficient,
        },
        metadata: Some(AnalysisMetadata {
            analysis_timestamp: Utc::now(),
            model_used: DEMO_MODEL_NAME.to_string(),
            content_length: 0,
            source_type: "demo".to_string(),
        }),
        source_info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_report_signals_degraded_operation() {
        let report = demo_report();
        assert_eq!(report.confidence_metrics.analysis_confidence, 0);
        assert_eq!(report.confidence_metrics.data_completeness, 0);
        assert_eq!(report.metadata.unwrap().model_used, DEMO_MODEL_NAME);
    }

    #[test]
    fn demo_report_serializes_with_all_top_level_keys() {
        let value = serde_json::to_value(demo_report()).unwrap();
        for key in [
            "analysis_summary",
            "detected_tactics",
            "cognitive_biases",
            "fact_check_flags",
            "educational_insights",
            "recommendations",
            "confidence_metrics",
            "metadata",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
