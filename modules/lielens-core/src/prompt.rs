//! The instruction template sent to the model.
//!
//! The JSON schema described here is a contract with `report`: the parser
//! deserializes exactly the shape this prompt demands. Changing one without
//! the other breaks the pipeline.

/// Analytical framework and output schema. Kept as one fixed block so the
/// rendered prompt is deterministic.
const ANALYSIS_FRAMEWORK: &str = r#"ANALYSIS FRAMEWORK:
Perform comprehensive analysis across these dimensions:

1. CREDIBILITY ASSESSMENT
- Factual accuracy and verifiability
- Missing context or cherry-picked data
- Source credibility and methodology

2. PSYCHOLOGICAL MANIPULATION DETECTION
- Emotional triggers (fear, anger, outrage, false hope)
- Social proof manipulation (bandwagon, false consensus)
- Authority manipulation (false expertise, appeal to authority)
- Urgency/scarcity tactics ("act now", "exclusive information")

3. COGNITIVE BIAS EXPLOITATION
- Confirmation bias (reinforces existing beliefs)
- Availability heuristic (vivid stories over data)
- Anchoring bias (misleading initial framing)
- In-group bias (us vs. them narratives)

4. LINGUISTIC ANALYSIS
- Loaded language and emotional triggers
- Vague claims without evidence
- Logical fallacies and reasoning errors
- Overall tone and intent

5. EDUCATIONAL COACHING
- Explain WHY someone might find this convincing
- Teach about specific biases being targeted
- Provide actionable evaluation tips
- Suggest verification strategies

CRITICAL: Respond ONLY with valid JSON in this exact format:

{
  "analysis_summary": {
    "risk_level": "LOW|MEDIUM|HIGH|CRITICAL",
    "risk_score": 0-100,
    "primary_concern": "string",
    "credibility_rating": "RELIABLE|QUESTIONABLE|UNRELIABLE|FABRICATED"
  },
  "detected_tactics": [
    {
      "tactic_name": "string",
      "description": "string",
      "example_from_content": "string",
      "manipulation_type": "EMOTIONAL|LOGICAL|SOCIAL|AUTHORITY"
    }
  ],
  "cognitive_biases": [
    {
      "bias_name": "string",
      "explanation": "string",
      "how_its_exploited": "string",
      "resistance_tip": "string"
    }
  ],
  "fact_check_flags": [
    {
      "claim": "string",
      "flag_reason": "string",
      "verification_suggestion": "string"
    }
  ],
  "educational_insights": {
    "why_convincing": "string",
    "target_audience": "string",
    "psychological_appeal": "string",
    "critical_questions": ["string1", "string2"],
    "verification_steps": ["string1", "string2"]
  },
  "recommendations": {
    "immediate_action": "string",
    "further_research": ["string1", "string2"],
    "share_decision": "SAFE_TO_SHARE|SHARE_WITH_CONTEXT|AVOID_SHARING|DO_NOT_SHARE",
    "learning_opportunity": "string"
  },
  "confidence_metrics": {
    "analysis_confidence": 0-100,
    "data_completeness": 0-100,
    "context_availability": "FULL|PARTIAL|LIMITED|INSUFFICIENT"
  }
}"#;

/// Render the full analysis prompt around the resolved content.
/// Pure and deterministic; no I/O.
pub fn analysis_prompt(content: &str, source_type: &str) -> String {
    format!(
        r#"You are the "Mindful Compass" - an advanced AI system that analyzes content for misinformation and educates users about psychological manipulation tactics.

Your mission: Don't just detect falsehoods, but EDUCATE users about WHY they might be susceptible and HOW the content manipulates them.

CONTENT TO ANALYZE:
{content}

SOURCE TYPE: {source_type}

{ANALYSIS_FRAMEWORK}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_content_verbatim() {
        let prompt = analysis_prompt("Miracle cure doctors hate!", "text");
        assert!(prompt.contains("Miracle cure doctors hate!"));
        assert!(prompt.contains("SOURCE TYPE: text"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = analysis_prompt("same content", "url");
        let b = analysis_prompt("same content", "url");
        assert_eq!(a, b);
    }

    #[test]
    fn prompt_describes_the_output_contract() {
        let prompt = analysis_prompt("anything", "text");
        for field in [
            "analysis_summary",
            "detected_tactics",
            "cognitive_biases",
            "fact_check_flags",
            "educational_insights",
            "recommendations",
            "confidence_metrics",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(prompt.contains("LOW|MEDIUM|HIGH|CRITICAL"));
        assert!(prompt.contains("Respond ONLY with valid JSON"));
    }
}
