//! Giki Score - Carbon impact scoring service for the GikiZero platform
//!
//! This library provides the carbon footprint calculator behind GikiZero's
//! lifestyle surveys. It scores survey answers against data-driven lookup
//! tables, classifies the total into an impact category, and samples random
//! question subsets so every rendered survey is a little different.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod tips;

// Re-export commonly used types
pub use core::{
    sampler::{get_question_subset, sample_questions, SamplerError},
    ScoringEngine, CARBON, ENVIRONMENTAL,
};
pub use models::{ScoreResult, Submission, SurveyResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let result = ScoringEngine::carbon().compute_score(&SurveyResponse::default());
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.impact_category, "Low");
    }
}
