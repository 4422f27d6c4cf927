use crate::models::SurveyResponse;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score and persist a survey submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(flatten)]
    pub answers: SurveyResponse,
}

/// Query parameters for listing a user's submissions
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListSubmissionsQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Query parameters for the random question subset endpoint.
///
/// Bounds are optional; when omitted the preset's configured draw range is
/// used. Negative bounds are rejected here, before they reach the sampler.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuestionsQuery {
    #[validate(range(min = 0))]
    #[serde(default, alias = "min_count", rename = "minCount")]
    pub min_count: Option<i64>,
    #[validate(range(min = 0))]
    #[serde(default, alias = "max_count", rename = "maxCount")]
    pub max_count: Option<i64>,
}
