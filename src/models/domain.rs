use serde::{Deserialize, Serialize};

/// Graded quiz answer returned to the student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub is_correct: bool,
    pub feedback: String,
    pub correct_definition: String,
}
