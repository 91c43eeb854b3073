//! Prompt construction for the remote analysis model.

/// System prompt framing the analyst role.
pub const ANALYST_SYSTEM_PROMPT: &str = "You are a semantic AI content detector. \
You score how likely a text is machine-generated and how semantically rich it is. \
You reply with a single JSON object and nothing else: no prose, no code fences.";

/// Delimiter quoting the text under analysis.
///
/// Chosen to be very unlikely inside ordinary prose. Input that itself
/// contains the marker may confuse the model; that limitation is documented,
/// not escaped.
const TEXT_DELIMITER: &str = "\"\"\"";

/// Expected reply schema, spelled out field by field.
const OUTPUT_SCHEMA: &str = r#"{
  "ai_likeness_score": <integer 0-100>,
  "semantic_depth_score": <integer 0-100>,
  "verdict": "Human" | "AI-Like" | "Hybrid",
  "improvement_suggestions": <string>,
  "subjectivity_ratio": <integer 0-100>,
  "verb_diversity_score": <integer 0-10>,
  "rare_named_entities": [<string>, ...],
  "tone_type": "Speculative" | "Declarative" | "Mixed"
}"#;

/// Build the instruction prompt for one analysis.
///
/// Pure and deterministic: identical input yields an identical prompt, and
/// `text` is embedded verbatim between the delimiter lines. The caller is
/// responsible for rejecting blank input first.
#[must_use]
pub fn build_analysis_prompt(text: &str) -> String {
    let mut out = String::with_capacity(OUTPUT_SCHEMA.len() + text.len() + 256);

    out.push_str("Analyze the text quoted between the ");
    out.push_str(TEXT_DELIMITER);
    out.push_str(" markers. Respond with exactly one JSON object matching this schema, every field present:\n");
    out.push_str(OUTPUT_SCHEMA);
    out.push_str("\n\n");
    out.push_str(TEXT_DELIMITER);
    out.push('\n');
    out.push_str(text);
    out.push('\n');
    out.push_str(TEXT_DELIMITER);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let text = "Quartz gemsbok vexed a zany lumberjack.";
        let prompt = build_analysis_prompt(text);
        let quoted = format!("{TEXT_DELIMITER}\n{text}\n{TEXT_DELIMITER}");
        assert!(prompt.contains(&quoted));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let text = "Same text, same prompt.";
        assert_eq!(build_analysis_prompt(text), build_analysis_prompt(text));
    }

    #[test]
    fn test_prompt_names_every_schema_field() {
        let prompt = build_analysis_prompt("anything");
        for field in [
            "ai_likeness_score",
            "semantic_depth_score",
            "verdict",
            "improvement_suggestions",
            "subjectivity_ratio",
            "verb_diversity_score",
            "rare_named_entities",
            "tone_type",
        ] {
            assert!(prompt.contains(field), "schema field missing: {field}");
        }
    }

    #[test]
    fn test_prompt_names_enumerations_and_ranges() {
        let prompt = build_analysis_prompt("anything");
        assert!(prompt.contains("\"Human\" | \"AI-Like\" | \"Hybrid\""));
        assert!(prompt.contains("\"Speculative\" | \"Declarative\" | \"Mixed\""));
        assert!(prompt.contains("0-100"));
        assert!(prompt.contains("0-10"));
    }

    #[test]
    fn test_prompt_handles_multiline_text() {
        let text = "first line\nsecond line\n\nfourth line";
        let prompt = build_analysis_prompt(text);
        assert!(prompt.contains(text));
    }
}
