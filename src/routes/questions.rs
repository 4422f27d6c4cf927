use crate::core::sampler::{get_question_subset, SamplerError};
use crate::models::{ErrorResponse, QuestionsQuery, QuestionsResponse};
use crate::routes::submissions::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure question routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/questions", web::get().to(get_questions));
}

/// Random question subset for rendering a new survey form
///
/// GET /api/v1/questions?minCount={min}&maxCount={max}
///
/// Bounds default to the configured draw range when omitted. Each call
/// independently reshuffles the catalog; no state is retained between calls.
async fn get_questions(
    state: web::Data<AppState>,
    query: web::Query<QuestionsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for questions request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let (default_min, default_max) = state.question_bounds;
    let min_count = query.min_count.map(|n| n as usize).unwrap_or(default_min);
    let max_count = query.max_count.map(|n| n as usize).unwrap_or(default_max);

    let catalog = state.engine.preset().catalog;

    match get_question_subset(catalog, min_count, max_count) {
        Ok(questions) => {
            tracing::debug!(
                "Sampled {} of {} questions ({}..={})",
                questions.len(),
                catalog.len(),
                min_count,
                max_count
            );

            let count = questions.len();
            HttpResponse::Ok().json(QuestionsResponse { questions, count })
        }
        Err(e @ SamplerError::InvalidBounds { .. }) => {
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid question bounds".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}
