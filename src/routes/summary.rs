use super::AppState;
use crate::core::prompts::{adaptation_prompt, research_prompt};
use crate::error::ApiError;
use crate::models::requests::first_failure;
use crate::models::{SummaryRequest, SummaryResponse};
use actix_web::{web, HttpResponse};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate-summary", web::post().to(generate_summary));
}

/// Generate an age-adapted summary
///
/// POST /generate-summary
///
/// Request body:
/// ```json
/// {
///   "topic": "string",
///   "ageGroup": "string"
/// }
/// ```
///
/// The vocabulary lookup is best effort: without a word the summary is still
/// produced and `vocabulary_word` is left out of the response.
async fn generate_summary(
    state: web::Data<AppState>,
    req: web::Json<SummaryRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(first_failure(&errors, SummaryRequest::FIELD_ORDER)));
    }

    let vocabulary_word = state.vocabulary.lookup(&req.age_group).await;

    tracing::info!(
        "Generating summary for age group {} (vocabulary word: {})",
        req.age_group,
        vocabulary_word.is_some()
    );

    let research = state.gateway.generate(&research_prompt(&req.topic)).await?;
    if research.trim().is_empty() {
        return Err(ApiError::Upstream("Researcher agent failed to produce summary.".to_string()));
    }

    let prompt = adaptation_prompt(&research, &req.age_group, vocabulary_word.as_deref());
    let adapted = state.gateway.generate(&prompt).await?;
    if adapted.trim().is_empty() {
        return Err(ApiError::Upstream("Writer agent failed to produce final summary.".to_string()));
    }

    Ok(HttpResponse::Ok().json(SummaryResponse {
        response: adapted,
        vocabulary_word,
    }))
}
