//! Record shapes for one analysis round-trip.

use serde::{Deserialize, Serialize};

/// Message carried by records whose reply could not be used at all.
pub const ANALYSIS_ERROR_MESSAGE: &str = "Error analyzing content.";

/// Inbound analysis request body.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze. Must be non-blank; the handler rejects it otherwise.
    pub text: String,
}

/// Categorical judgment of the analyzed text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Likely written by a person.
    Human,
    /// Likely machine-generated.
    #[serde(rename = "AI-Like")]
    AiLike,
    /// Indeterminate mix of both.
    #[default]
    Hybrid,
}

impl Verdict {
    /// Map a remote verdict string, case-insensitively.
    ///
    /// Unrecognized values fall back to [`Verdict::Hybrid`]; the remote model
    /// is not trusted to respect the enumeration.
    #[must_use]
    pub fn from_remote(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "human" => Self::Human,
            "ai-like" | "ai_like" | "ailike" => Self::AiLike,
            _ => Self::Hybrid,
        }
    }
}

/// Overall tone of the analyzed text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ToneType {
    /// Hedged, exploratory phrasing.
    Speculative,
    /// Assertive, factual phrasing.
    Declarative,
    /// No dominant tone.
    #[default]
    Mixed,
}

impl ToneType {
    /// Map a remote tone string, case-insensitively.
    ///
    /// Unrecognized values fall back to [`ToneType::Mixed`].
    #[must_use]
    pub fn from_remote(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "speculative" => Self::Speculative,
            "declarative" => Self::Declarative,
            _ => Self::Mixed,
        }
    }
}

/// How the record was recovered from the remote reply.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryStatus {
    /// The reply parsed against the expected schema.
    Parsed,
    /// The reply did not parse; its text is preserved verbatim.
    RawFallback,
    /// There was no usable reply at all.
    #[default]
    Error,
}

/// Result record returned to the page.
///
/// Every field is always present: records constructed on the fallback paths
/// carry documented defaults, never holes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// How likely the text is machine-generated, 0-100.
    pub ai_likelihood_score: u8,
    /// Richness of entities and intent, 0-100.
    pub semantic_depth_score: u8,
    /// Categorical judgment.
    pub verdict: Verdict,
    /// Model-written suggestions, or the raw reply on fallback.
    pub improvement_suggestions: String,
    /// Share of subjective phrasing, 0-100.
    pub subjectivity_ratio: u8,
    /// Verb variety, 0-10.
    pub verb_diversity_score: u8,
    /// Uncommon named entities found in the text, in reply order.
    pub rare_named_entities: Vec<String>,
    /// Overall tone.
    pub tone_type: ToneType,
    /// How trustworthy this record is.
    pub recovery_status: RecoveryStatus,
}

impl AnalysisResult {
    /// Default-valued record for a missing or unusable reply.
    #[must_use]
    pub fn error_fallback() -> Self {
        Self {
            improvement_suggestions: ANALYSIS_ERROR_MESSAGE.to_string(),
            ..Self::default()
        }
    }

    /// Degraded record preserving an unparseable reply verbatim.
    #[must_use]
    pub fn raw_fallback(reply: impl Into<String>) -> Self {
        Self {
            improvement_suggestions: reply.into(),
            recovery_status: RecoveryStatus::RawFallback,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_fallback_is_fully_populated() {
        let result = AnalysisResult::error_fallback();
        assert_eq!(result.ai_likelihood_score, 0);
        assert_eq!(result.semantic_depth_score, 0);
        assert_eq!(result.verdict, Verdict::Hybrid);
        assert_eq!(result.improvement_suggestions, ANALYSIS_ERROR_MESSAGE);
        assert_eq!(result.subjectivity_ratio, 0);
        assert_eq!(result.verb_diversity_score, 0);
        assert!(result.rare_named_entities.is_empty());
        assert_eq!(result.tone_type, ToneType::Mixed);
        assert_eq!(result.recovery_status, RecoveryStatus::Error);
    }

    #[test]
    fn test_raw_fallback_preserves_reply() {
        let result = AnalysisResult::raw_fallback("some unparsed blob");
        assert_eq!(result.improvement_suggestions, "some unparsed blob");
        assert_eq!(result.recovery_status, RecoveryStatus::RawFallback);
        assert_eq!(result.ai_likelihood_score, 0);
    }

    #[test]
    fn test_verdict_from_remote() {
        assert_eq!(Verdict::from_remote("Human"), Verdict::Human);
        assert_eq!(Verdict::from_remote(" ai-like "), Verdict::AiLike);
        assert_eq!(Verdict::from_remote("AI_LIKE"), Verdict::AiLike);
        assert_eq!(Verdict::from_remote("Hybrid"), Verdict::Hybrid);
        assert_eq!(Verdict::from_remote("Robotic"), Verdict::Hybrid);
    }

    #[test]
    fn test_tone_from_remote() {
        assert_eq!(ToneType::from_remote("speculative"), ToneType::Speculative);
        assert_eq!(ToneType::from_remote("DECLARATIVE"), ToneType::Declarative);
        assert_eq!(ToneType::from_remote("ominous"), ToneType::Mixed);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_string(&AnalysisResult::default()).unwrap_or_default();
        assert!(json.contains("\"aiLikelihoodScore\":0"));
        assert!(json.contains("\"semanticDepthScore\":0"));
        assert!(json.contains("\"verdict\":\"Hybrid\""));
        assert!(json.contains("\"rareNamedEntities\":[]"));
        assert!(json.contains("\"toneType\":\"Mixed\""));
        assert!(json.contains("\"recoveryStatus\":\"error\""));
    }

    #[test]
    fn test_recovery_status_wire_strings() {
        let parsed = serde_json::to_string(&RecoveryStatus::Parsed).unwrap_or_default();
        let fallback = serde_json::to_string(&RecoveryStatus::RawFallback).unwrap_or_default();
        assert_eq!(parsed, "\"parsed\"");
        assert_eq!(fallback, "\"raw-fallback\"");
    }
}
