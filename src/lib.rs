//! HistoryBytes - age-adapted history summaries and vocabulary quiz grading
//!
//! This library wires prompt templates, the Gemini model gateway and the
//! Airtable vocabulary store behind a small actix-web API.

pub mod config;
pub mod core;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::grading::normalize;
pub use error::ApiError;
pub use models::{QuizRequest, QuizResult, SummaryRequest, SummaryResponse};
pub use routes::{configure_routes, AppState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let result = normalize(r#"{"is_correct": false, "feedback": "a", "correct_definition": "b"}"#, "word");
        assert!(!result.is_correct);
    }
}
