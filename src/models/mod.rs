// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ScoreResult, Submission, SurveyField, SurveyResponse};
pub use requests::{CreateSubmissionRequest, ListSubmissionsQuery, QuestionsQuery};
pub use responses::{
    DeleteSubmissionResponse, ErrorResponse, HealthResponse, ListSubmissionsResponse,
    QuestionsResponse, SubmissionResponse,
};
