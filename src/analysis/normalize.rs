//! Best-effort recovery of result records from free-form model replies.
//!
//! The remote reply crosses a trust boundary: it is expected to be JSON per
//! the prompted schema but frequently arrives fenced, wrapped in prose, out
//! of range, or not JSON at all. Recovery degrades instead of failing, in
//! order: parsed record, raw-fallback record carrying the cleaned text,
//! default error record.

use serde::Deserialize;

use super::result::{AnalysisResult, RecoveryStatus, ToneType, Verdict};

/// Upper bound for percentage-style scores.
const SCORE_MAX: u8 = 100;
/// Upper bound for the verb diversity score.
const VERB_DIVERSITY_MAX: u8 = 10;

/// Wire shape of the remote model's reply.
///
/// `ai_likeness_score` and `semantic_depth_score` are mandatory; a reply
/// missing either is treated as unparsed. Numbers are accepted as floats
/// since remote models do not reliably emit integers.
#[derive(Debug, Deserialize)]
struct RemoteAnalysis {
    ai_likeness_score: f64,
    semantic_depth_score: f64,
    #[serde(default)]
    verdict: Option<String>,
    #[serde(default)]
    improvement_suggestions: Option<String>,
    #[serde(default)]
    subjectivity_ratio: Option<f64>,
    #[serde(default)]
    verb_diversity_score: Option<f64>,
    #[serde(default)]
    rare_named_entities: Option<Vec<String>>,
    #[serde(default)]
    tone_type: Option<String>,
}

/// Recover an [`AnalysisResult`] from the raw completion reply.
///
/// Total function: no input can make it fail or panic. `None` and blank
/// replies yield the default error record; anything that will not parse
/// yields a raw-fallback record preserving the cleaned reply verbatim.
#[must_use]
pub fn normalize(raw_reply: Option<&str>) -> AnalysisResult {
    let Some(reply) = raw_reply else {
        return AnalysisResult::error_fallback();
    };
    if reply.trim().is_empty() {
        return AnalysisResult::error_fallback();
    }

    let cleaned = strip_code_fence(reply);
    parse_first_fragment(cleaned).map_or_else(|| AnalysisResult::raw_fallback(cleaned), from_remote)
}

/// Strip a surrounding triple-backtick fence, with or without a language tag.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // The opening fence line may carry a language tag; drop that line.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse the first top-level JSON object in `text`.
///
/// Leading prose is skipped and anything after the object closes is ignored;
/// only the first parseable fragment counts.
fn parse_first_fragment(text: &str) -> Option<RemoteAnalysis> {
    for (start, _) in text.char_indices().filter(|&(_, c)| c == '{') {
        let mut stream =
            serde_json::Deserializer::from_str(&text[start..]).into_iter::<RemoteAnalysis>();
        if let Some(Ok(remote)) = stream.next() {
            return Some(remote);
        }
    }
    None
}

/// Map the wire record into a result, clamping and defaulting every field.
fn from_remote(remote: RemoteAnalysis) -> AnalysisResult {
    AnalysisResult {
        ai_likelihood_score: clamp_score(remote.ai_likeness_score, SCORE_MAX),
        semantic_depth_score: clamp_score(remote.semantic_depth_score, SCORE_MAX),
        verdict: remote
            .verdict
            .as_deref()
            .map_or_else(Verdict::default, Verdict::from_remote),
        improvement_suggestions: remote.improvement_suggestions.unwrap_or_default(),
        subjectivity_ratio: remote
            .subjectivity_ratio
            .map_or(0, |v| clamp_score(v, SCORE_MAX)),
        verb_diversity_score: remote
            .verb_diversity_score
            .map_or(0, |v| clamp_score(v, VERB_DIVERSITY_MAX)),
        rare_named_entities: remote.rare_named_entities.unwrap_or_default(),
        tone_type: remote
            .tone_type
            .as_deref()
            .map_or_else(ToneType::default, ToneType::from_remote),
        recovery_status: RecoveryStatus::Parsed,
    }
}

/// Clamp a remote numeric field into `[0, max]`. Out-of-range values are
/// clamped, never rejected.
fn clamp_score(value: f64, max: u8) -> u8 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= f64::from(max) {
        max
    } else {
        rounded as u8
    }
}
