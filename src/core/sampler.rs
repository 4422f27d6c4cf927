use crate::core::catalog::QuestionDefinition;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Errors from the question sampler.
///
/// Misconfigured bounds fail fast rather than being silently clamped; that is
/// the only failure mode, every other input degrades gracefully.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    #[error("invalid question bounds: min_count {min_count} > max_count {max_count}")]
    InvalidBounds { min_count: usize, max_count: usize },
}

/// Draw a random subset of the question catalog.
///
/// The catalog is shuffled with an unbiased Fisher-Yates shuffle, the subset
/// size is drawn uniformly from `[min_count, max_count]` inclusive, and the
/// first `min(n, catalog.len())` questions of the permutation are returned.
/// Each call reshuffles independently; no state is retained between calls.
pub fn sample_questions<'a, R: Rng + ?Sized>(
    catalog: &'a [QuestionDefinition],
    min_count: usize,
    max_count: usize,
    rng: &mut R,
) -> Result<Vec<&'a QuestionDefinition>, SamplerError> {
    if min_count > max_count {
        return Err(SamplerError::InvalidBounds {
            min_count,
            max_count,
        });
    }

    let mut deck: Vec<&QuestionDefinition> = catalog.iter().collect();
    deck.shuffle(rng);

    let n = rng.gen_range(min_count..=max_count);
    deck.truncate(n.min(catalog.len()));

    Ok(deck)
}

/// Sampler seam for callers without their own RNG. Uses the thread-local
/// generator, so concurrent calls need no coordination.
pub fn get_question_subset(
    catalog: &'static [QuestionDefinition],
    min_count: usize,
    max_count: usize,
) -> Result<Vec<&'static QuestionDefinition>, SamplerError> {
    sample_questions(catalog, min_count, max_count, &mut rand::thread_rng())
}
