// Unit tests for HistoryBytes

use historybytes::core::{
    decode_heuristic, decode_strict, fallback_result, normalize, ParseFailure,
    adaptation_prompt, grading_prompt, research_prompt, AUDIENCE_BANDS,
};
use historybytes::models::QuizResult;

#[test]
fn test_normalize_round_trip() {
    let raw = r#"{"is_correct": true, "feedback": "x", "correct_definition": "y"}"#;

    assert_eq!(
        normalize(raw, "anything"),
        QuizResult {
            is_correct: true,
            feedback: "x".to_string(),
            correct_definition: "y".to_string(),
        }
    );
}

#[test]
fn test_normalize_ignores_extra_fields() {
    let raw = r#"{"is_correct": false, "feedback": "f", "correct_definition": "d", "confidence": 0.4}"#;
    let result = normalize(raw, "word");

    assert!(!result.is_correct);
    assert_eq!(result.feedback, "f");
}

#[test]
fn test_normalize_surrounding_prose() {
    let raw = "Sure! Here is the grade.\n{\"is_correct\": true, \"feedback\": \"That's right!\", \"correct_definition\": \"Definition of tariff: a tax on imports\"}\nHope that helps.";
    let result = normalize(raw, "tariff");

    assert!(result.is_correct);
    assert_eq!(result.correct_definition, "Definition of tariff: a tax on imports");
}

#[test]
fn test_normalize_not_quite_prose() {
    let result = normalize("Not quite, that's wrong", "levy");

    assert!(!result.is_correct);
    assert!(result.feedback.starts_with("Not quite. "));
}

#[test]
fn test_normalize_thats_right_prose() {
    let result = normalize("That's right, nice job!", "levy");

    assert!(result.is_correct);
    assert!(result.feedback.starts_with("That's right! "));
}

#[test]
fn test_heuristic_is_case_insensitive() {
    assert!(decode_heuristic("THAT'S RIGHT", "w").is_correct);
    assert!(decode_heuristic("You are Correct.", "w").is_correct);
    assert!(!decode_heuristic("Try again later", "w").is_correct);
}

#[test]
fn test_truncated_json_uses_heuristic() {
    let raw = r#"{"is_correct": true, "feedback": "That's right! The colonists"#;

    assert!(matches!(decode_strict(raw), Err(ParseFailure::Syntax(_))));
    let result = normalize(raw, "boycott");
    assert!(result.is_correct);
    assert!(result.correct_definition.contains("boycott"));
}

#[test]
fn test_null_field_uses_fallback_result() {
    let raw = r#"{"is_correct": true, "feedback": null, "correct_definition": "d"}"#;

    assert_eq!(decode_strict(raw), Err(ParseFailure::InvalidField("feedback")));
    assert_eq!(normalize(raw, "charter"), fallback_result("charter"));
}

#[test]
fn test_fallback_result_shape() {
    let result = fallback_result("charter");

    assert!(!result.is_correct);
    assert!(result.feedback.contains("Please try again"));
    assert_eq!(
        result.correct_definition,
        "The word 'charter' is an important vocabulary term in this historical context."
    );
}

#[test]
fn test_prompts_are_deterministic() {
    assert_eq!(research_prompt("Rome"), research_prompt("Rome"));
    assert_eq!(
        adaptation_prompt("s", "Adult", Some("w")),
        adaptation_prompt("s", "Adult", Some("w"))
    );
    assert_eq!(grading_prompt("d", "w", "c"), grading_prompt("d", "w", "c"));
}

#[test]
fn test_adaptation_prompt_embeds_summary_and_bands() {
    let prompt = adaptation_prompt("Caesar crossed the Rubicon.", "13-18", None);

    assert!(prompt.contains("Caesar crossed the Rubicon."));
    assert_eq!(AUDIENCE_BANDS.len(), 4);
    assert!(AUDIENCE_BANDS.iter().all(|(band, _)| prompt.contains(band)));
}

#[test]
fn test_research_prompt_has_no_audience() {
    let prompt = research_prompt("The Magna Carta");

    assert!(prompt.contains("The Magna Carta"));
    assert!(!prompt.contains("13-18"));
}
