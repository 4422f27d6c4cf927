use crate::core::ScoringEngine;
use crate::models::{
    CreateSubmissionRequest, DeleteSubmissionResponse, ErrorResponse, HealthResponse,
    ListSubmissionsQuery, ListSubmissionsResponse, SubmissionResponse,
};
use crate::services::PostgresClient;
use crate::tips::tips_for;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub engine: ScoringEngine,
    /// Inclusive (min, max) draw range for the question subset endpoint.
    pub question_bounds: (usize, usize),
}

/// Configure all submission-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/submissions", web::post().to(create_submission))
        .route("/submissions", web::get().to(list_submissions))
        .route("/submissions/{id}", web::get().to(get_submission))
        .route("/submissions/{id}", web::delete().to(delete_submission));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score and persist a survey submission
///
/// POST /api/v1/submissions
///
/// Request body: `userId` plus any subset of the survey answer fields.
/// Scoring is total: unanswered categories score 0.0 and unrecognized answer
/// tokens fall back to per-table defaults, so this endpoint never rejects a
/// survey for its content.
async fn create_submission(
    state: web::Data<AppState>,
    req: web::Json<CreateSubmissionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_submission request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let result = state.engine.compute_score(&req.answers);
    let tips = tips_for(&result);

    tracing::info!(
        "Scored submission for user {}: total {}, impact {}",
        req.user_id,
        result.total_score,
        result.impact_category
    );

    match state
        .postgres
        .insert_submission(&req.user_id, &req.answers, &result)
        .await
    {
        Ok(submission) => HttpResponse::Ok().json(SubmissionResponse {
            id: submission.id,
            user_id: submission.user_id,
            scores: submission.scores,
            total_score: submission.total_score,
            impact_category: submission.impact_category,
            tips,
            created_at: submission.created_at,
        }),
        Err(e) => {
            tracing::error!("Failed to store submission for {}: {}", req.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store submission".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List a user's submissions
///
/// GET /api/v1/submissions?userId={userId}&limit={limit}
async fn list_submissions(
    state: web::Data<AppState>,
    query: web::Query<ListSubmissionsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit at 200 to prevent excessive queries
    let limit = query.limit.clamp(1, 200);

    match state.postgres.list_submissions(&query.user_id, limit).await {
        Ok(submissions) => {
            let count = submissions.len();
            HttpResponse::Ok().json(ListSubmissionsResponse { submissions, count })
        }
        Err(e) => {
            tracing::error!("Failed to list submissions for {}: {}", query.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list submissions".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch one submission by id
///
/// GET /api/v1/submissions/{id}
async fn get_submission(
    state: web::Data<AppState>,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.postgres.get_submission(id).await {
        Ok(Some(submission)) => HttpResponse::Ok().json(submission),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Submission not found".to_string(),
            message: format!("No submission with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch submission {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch submission".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Delete a submission
///
/// DELETE /api/v1/submissions/{id}
async fn delete_submission(
    state: web::Data<AppState>,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.postgres.delete_submission(id).await {
        Ok(deleted) => {
            if !deleted {
                return HttpResponse::NotFound().json(ErrorResponse {
                    error: "Submission not found".to_string(),
                    message: format!("No submission with id {}", id),
                    status_code: 404,
                });
            }

            tracing::debug!("Deleted submission {}", id);
            HttpResponse::Ok().json(DeleteSubmissionResponse { success: true })
        }
        Err(e) => {
            tracing::error!("Failed to delete submission {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to delete submission".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
