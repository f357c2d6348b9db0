use thiserror::Error;

use crate::core::scoring::{calculate_match_score, score_breakdown};
use crate::models::{Pet, QuizAnswers};

/// Number of matches returned when no limit is configured
pub const DEFAULT_MATCH_LIMIT: usize = 3;

/// Errors that can occur before ranking starts
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Pet paired with its compatibility score for a single ranking call
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub pet: &'a Pet,
    pub match_score: u32,
}

/// Ranks the pet catalog against quiz answers
///
/// Holds no state between calls; scores are recomputed on every call and the
/// catalog is only borrowed.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    limit: usize,
}

impl Matcher {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank candidates using the configured limit
    pub fn find_matches(&self, answers: &QuizAnswers, candidates: &[Pet]) -> Vec<Pet> {
        rank(answers, candidates, self.limit)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_LIMIT)
    }
}

/// Score every candidate, highest first
///
/// The sort is stable, so candidates with equal scores keep their catalog
/// order.
pub fn score_candidates<'a>(
    answers: &QuizAnswers,
    candidates: &'a [Pet],
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|pet| {
            let match_score = calculate_match_score(pet, answers);
            if tracing::enabled!(tracing::Level::TRACE) {
                tracing::trace!(
                    "Scored pet {} ({}): {} {:?}",
                    pet.id,
                    pet.name,
                    match_score,
                    score_breakdown(pet, answers)
                );
            }
            ScoredCandidate { pet, match_score }
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}

/// Return the `limit` best matching pets for the answers
///
/// The result has `min(limit, candidates.len())` entries and carries no
/// score. An empty catalog yields an empty result.
pub fn rank(answers: &QuizAnswers, candidates: &[Pet], limit: usize) -> Vec<Pet> {
    score_candidates(answers, candidates)
        .into_iter()
        .take(limit)
        .map(|scored| scored.pet.clone())
        .collect()
}
