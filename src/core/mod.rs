// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{
    rank, score_candidates, MatchError, Matcher, ScoredCandidate, DEFAULT_MATCH_LIMIT,
};
pub use scoring::{calculate_match_score, score_breakdown, RuleHit, ScoringRule, RULES};
