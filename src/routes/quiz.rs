use super::AppState;
use crate::core::grading::normalize;
use crate::core::prompts::grading_prompt;
use crate::error::ApiError;
use crate::models::requests::first_failure;
use crate::models::QuizRequest;
use actix_web::{web, HttpResponse};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/grade-quiz", web::post().to(grade_quiz));
}

/// Grade a vocabulary definition
///
/// POST /grade-quiz
///
/// Request body:
/// ```json
/// {
///   "user_definition": "string",
///   "vocabulary_word": "string",
///   "historical_context": "string"
/// }
/// ```
async fn grade_quiz(
    state: web::Data<AppState>,
    req: web::Json<QuizRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(first_failure(&errors, QuizRequest::FIELD_ORDER)));
    }

    let prompt = grading_prompt(&req.user_definition, &req.vocabulary_word, &req.historical_context);
    let reply = state.gateway.generate(&prompt).await?;

    let result = normalize(&reply, &req.vocabulary_word);

    tracing::info!("Graded quiz for word {}: correct={}", req.vocabulary_word, result.is_correct);

    Ok(HttpResponse::Ok().json(result))
}
