use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const TOPIC_EMPTY: &str = "Topic cannot be empty";
pub const AGE_GROUP_EMPTY: &str = "Age group cannot be empty";
pub const USER_DEFINITION_EMPTY: &str = "User definition cannot be empty";
pub const VOCABULARY_WORD_EMPTY: &str = "Vocabulary word cannot be empty";
pub const HISTORICAL_CONTEXT_EMPTY: &str = "Historical context cannot be empty";

/// Request to generate an age-adapted summary
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SummaryRequest {
    #[validate(custom(function = "topic_present"))]
    pub topic: String,
    #[validate(custom(function = "age_group_present"))]
    #[serde(rename = "ageGroup", alias = "age_group")]
    pub age_group: String,
}

impl SummaryRequest {
    /// Field messages in the order they are reported
    pub const FIELD_ORDER: &'static [&'static str] = &[TOPIC_EMPTY, AGE_GROUP_EMPTY];
}

/// Request to grade a student's definition of a vocabulary word
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(custom(function = "user_definition_present"))]
    pub user_definition: String,
    #[validate(custom(function = "vocabulary_word_present"))]
    pub vocabulary_word: String,
    #[validate(custom(function = "historical_context_present"))]
    pub historical_context: String,
}

impl QuizRequest {
    pub const FIELD_ORDER: &'static [&'static str] = &[
        USER_DEFINITION_EMPTY,
        VOCABULARY_WORD_EMPTY,
        HISTORICAL_CONTEXT_EMPTY,
    ];
}

/// Password check request
///
/// The password is compared verbatim, so it is deliberately not validated.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub password: String,
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest").field("password", &"<redacted>").finish()
    }
}

fn require_text(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed(message));
        return Err(err);
    }
    Ok(())
}

fn topic_present(value: &str) -> Result<(), ValidationError> {
    require_text(value, TOPIC_EMPTY)
}

fn age_group_present(value: &str) -> Result<(), ValidationError> {
    require_text(value, AGE_GROUP_EMPTY)
}

fn user_definition_present(value: &str) -> Result<(), ValidationError> {
    require_text(value, USER_DEFINITION_EMPTY)
}

fn vocabulary_word_present(value: &str) -> Result<(), ValidationError> {
    require_text(value, VOCABULARY_WORD_EMPTY)
}

fn historical_context_present(value: &str) -> Result<(), ValidationError> {
    require_text(value, HISTORICAL_CONTEXT_EMPTY)
}

/// Pick the message of the first failing field according to `field_order`
pub fn first_failure(errors: &ValidationErrors, field_order: &[&'static str]) -> String {
    let messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .collect();

    field_order
        .iter()
        .find(|expected| messages.iter().any(|m| m == *expected))
        .map(|m| m.to_string())
        .or_else(|| messages.into_iter().next())
        .unwrap_or_else(|| "Invalid request".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(topic: &str, age_group: &str) -> SummaryRequest {
        SummaryRequest {
            topic: topic.to_string(),
            age_group: age_group.to_string(),
        }
    }

    #[test]
    fn test_summary_request_valid() {
        assert!(summary("The Boston Tea Party", "9-12").validate().is_ok());
    }

    #[test]
    fn test_whitespace_topic_is_blank() {
        let errors = summary("  \t ", "9-12").validate().unwrap_err();
        assert_eq!(first_failure(&errors, SummaryRequest::FIELD_ORDER), TOPIC_EMPTY);
    }

    #[test]
    fn test_topic_reported_before_age_group() {
        let errors = summary("", " ").validate().unwrap_err();
        assert_eq!(first_failure(&errors, SummaryRequest::FIELD_ORDER), TOPIC_EMPTY);
    }

    #[test]
    fn test_quiz_request_reports_context() {
        let request = QuizRequest {
            user_definition: "to be angry".to_string(),
            vocabulary_word: "grievance".to_string(),
            historical_context: "\n".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            first_failure(&errors, QuizRequest::FIELD_ORDER),
            HISTORICAL_CONTEXT_EMPTY
        );
    }

    #[test]
    fn test_age_group_accepts_camel_case() {
        let request: SummaryRequest =
            serde_json::from_str(r#"{"topic": "Rome", "ageGroup": "Adult"}"#).unwrap();
        assert_eq!(request.age_group, "Adult");
    }

    #[test]
    fn test_auth_request_debug_hides_password() {
        let request = AuthRequest { password: "hunter2".to_string() };
        assert!(!format!("{:?}", request).contains("hunter2"));
    }
}
