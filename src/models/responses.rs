use crate::core::QuestionDefinition;
use crate::models::domain::Submission;
use crate::tips::Tip;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for a scored submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: uuid::Uuid,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub scores: BTreeMap<String, f64>,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "impactCategory")]
    pub impact_category: String,
    pub tips: Vec<Tip>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Response for listing submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSubmissionsResponse {
    pub submissions: Vec<Submission>,
    pub count: usize,
}

/// Response carrying a sampled question subset
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<&'static QuestionDefinition>,
    pub count: usize,
}

/// Response for a submission delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSubmissionResponse {
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
