// Core scoring exports
pub mod catalog;
pub mod sampler;
pub mod scoring;
pub mod tables;

pub use catalog::{InputKind, QuestionDefinition, QuestionOption};
pub use sampler::{get_question_subset, sample_questions, SamplerError};
pub use scoring::ScoringEngine;
pub use tables::{preset_by_name, ScoreTable, ScoringPreset, Thresholds, CARBON, ENVIRONMENTAL};
