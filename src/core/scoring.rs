use crate::models::{ActivityLevel, Experience, LivingSpace, Pet, QuizAnswers, TimeAvailable};

/// Tags the scoring rules look for
pub mod tags {
    pub const APARTMENT_FRIENDLY: &str = "apartment-friendly";
    pub const LARGE: &str = "large";
    pub const CALM: &str = "calm";
    pub const LOW_MAINTENANCE: &str = "low-maintenance";
    pub const MEDIUM_ENERGY: &str = "medium-energy";
    pub const HIGH_ENERGY: &str = "high-energy";
    pub const ENERGETIC: &str = "energetic";
    pub const TRAINED: &str = "trained";
    pub const EXPERIENCED_OWNER: &str = "experienced-owner";
    pub const INDEPENDENT: &str = "independent";
    pub const KID_FRIENDLY: &str = "kid-friendly";
    pub const QUIET: &str = "quiet";
}

/// A single additive scoring rule
///
/// Each rule inspects only the answers and one pet, so rules are independent
/// and their evaluation order does not matter.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub points: u32,
    applies: fn(&QuizAnswers, &Pet) -> bool,
}

impl ScoringRule {
    #[inline]
    pub fn applies(&self, answers: &QuizAnswers, pet: &Pet) -> bool {
        (self.applies)(answers, pet)
    }
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringRule")
            .field("name", &self.name)
            .field("points", &self.points)
            .finish()
    }
}

/// Rule fired for a pet, as reported by [`score_breakdown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: &'static str,
    pub points: u32,
}

pub static RULES: &[ScoringRule] = &[
    // Living space
    ScoringRule {
        name: "apartment_friendly",
        points: 3,
        applies: |a, p| {
            a.living_space == Some(LivingSpace::Apartment) && p.has_tag(tags::APARTMENT_FRIENDLY)
        },
    },
    ScoringRule {
        name: "small_house_not_large",
        points: 2,
        applies: |a, p| a.living_space == Some(LivingSpace::HouseSmall) && !p.has_tag(tags::LARGE),
    },
    ScoringRule {
        name: "large_house",
        points: 1,
        applies: |a, _| a.living_space == Some(LivingSpace::HouseLarge),
    },
    // Activity level
    ScoringRule {
        name: "low_activity_calm",
        points: 3,
        applies: |a, p| a.activity_level == Some(ActivityLevel::Low) && p.has_tag(tags::CALM),
    },
    ScoringRule {
        name: "low_activity_low_maintenance",
        points: 2,
        applies: |a, p| {
            a.activity_level == Some(ActivityLevel::Low) && p.has_tag(tags::LOW_MAINTENANCE)
        },
    },
    ScoringRule {
        name: "medium_activity_medium_energy",
        points: 3,
        applies: |a, p| {
            a.activity_level == Some(ActivityLevel::Medium) && p.has_tag(tags::MEDIUM_ENERGY)
        },
    },
    ScoringRule {
        name: "high_activity_high_energy",
        points: 3,
        applies: |a, p| {
            a.activity_level == Some(ActivityLevel::High) && p.has_tag(tags::HIGH_ENERGY)
        },
    },
    ScoringRule {
        name: "high_activity_energetic",
        points: 2,
        applies: |a, p| a.activity_level == Some(ActivityLevel::High) && p.has_tag(tags::ENERGETIC),
    },
    // Experience
    ScoringRule {
        name: "first_time_trained",
        points: 2,
        applies: |a, p| a.experience == Some(Experience::FirstTime) && p.has_tag(tags::TRAINED),
    },
    ScoringRule {
        name: "first_time_not_demanding",
        points: 1,
        applies: |a, p| {
            a.experience == Some(Experience::FirstTime) && !p.has_tag(tags::EXPERIENCED_OWNER)
        },
    },
    ScoringRule {
        name: "experienced_owner",
        points: 3,
        applies: |a, p| {
            a.experience == Some(Experience::Experienced) && p.has_tag(tags::EXPERIENCED_OWNER)
        },
    },
    // Time available
    ScoringRule {
        name: "limited_time_independent",
        points: 2,
        applies: |a, p| {
            a.time_available == Some(TimeAvailable::Limited) && p.has_tag(tags::INDEPENDENT)
        },
    },
    ScoringRule {
        name: "moderate_time_medium_energy",
        points: 1,
        applies: |a, p| {
            a.time_available == Some(TimeAvailable::Moderate) && p.has_tag(tags::MEDIUM_ENERGY)
        },
    },
    ScoringRule {
        name: "lots_of_time_high_energy",
        points: 2,
        applies: |a, p| {
            a.time_available == Some(TimeAvailable::Lots) && p.has_tag(tags::HIGH_ENERGY)
        },
    },
    // Kids
    ScoringRule {
        name: "kids_kid_friendly",
        points: 3,
        applies: |a, p| a.has_kids == Some(true) && p.has_tag(tags::KID_FRIENDLY),
    },
    ScoringRule {
        name: "no_kids_quiet",
        points: 1,
        applies: |a, p| a.has_kids == Some(false) && p.has_tag(tags::QUIET),
    },
];

/// Calculate the compatibility score of a pet for a set of quiz answers
///
/// Plain integer sum of the points of every rule that fires. Absent answers
/// fire no rules.
pub fn calculate_match_score(pet: &Pet, answers: &QuizAnswers) -> u32 {
    RULES
        .iter()
        .filter(|rule| rule.applies(answers, pet))
        .map(|rule| rule.points)
        .sum()
}

/// List the rules that fire for a pet, in table order
pub fn score_breakdown(pet: &Pet, answers: &QuizAnswers) -> Vec<RuleHit> {
    RULES
        .iter()
        .filter(|rule| rule.applies(answers, pet))
        .map(|rule| RuleHit {
            rule: rule.name,
            points: rule.points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_pet(tags: &[&str]) -> Pet {
        Pet {
            id: 1,
            name: "Test Pet".to_string(),
            age: 2,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            story: String::new(),
            photo: None,
        }
    }

    fn answers() -> QuizAnswers {
        QuizAnswers::default()
    }

    fn living(space: LivingSpace) -> QuizAnswers {
        QuizAnswers {
            living_space: Some(space),
            ..answers()
        }
    }

    fn activity(level: ActivityLevel) -> QuizAnswers {
        QuizAnswers {
            activity_level: Some(level),
            ..answers()
        }
    }

    fn experience(experience: Experience) -> QuizAnswers {
        QuizAnswers {
            experience: Some(experience),
            ..answers()
        }
    }

    fn time(time: TimeAvailable) -> QuizAnswers {
        QuizAnswers {
            time_available: Some(time),
            ..answers()
        }
    }

    fn kids(has_kids: bool) -> QuizAnswers {
        QuizAnswers {
            has_kids: Some(has_kids),
            ..answers()
        }
    }

    fn score(tags: &[&str], answers: &QuizAnswers) -> u32 {
        calculate_match_score(&create_test_pet(tags), answers)
    }

    #[test]
    fn test_no_answers_scores_zero() {
        assert_eq!(score(&["calm", "quiet", "kid-friendly", "trained"], &answers()), 0);
    }

    #[test]
    fn test_living_space_rules() {
        let apartment = living(LivingSpace::Apartment);
        assert_eq!(score(&["apartment-friendly"], &apartment), 3);
        assert_eq!(score(&["large"], &apartment), 0);

        let small = living(LivingSpace::HouseSmall);
        assert_eq!(score(&["apartment-friendly"], &small), 2);
        assert_eq!(score(&["large"], &small), 0);

        // Large house is unconditional
        let large = living(LivingSpace::HouseLarge);
        assert_eq!(score(&[], &large), 1);
        assert_eq!(score(&["large"], &large), 1);
    }

    #[test]
    fn test_activity_rules_stack() {
        assert_eq!(score(&["calm", "low-maintenance"], &activity(ActivityLevel::Low)), 5);
        assert_eq!(score(&["high-energy", "energetic"], &activity(ActivityLevel::High)), 5);
        assert_eq!(score(&["medium-energy"], &activity(ActivityLevel::Medium)), 3);
    }

    #[test]
    fn test_experience_rules() {
        let first_time = experience(Experience::FirstTime);
        assert_eq!(score(&["trained"], &first_time), 3);
        assert_eq!(score(&["experienced-owner"], &first_time), 0);

        let experienced = experience(Experience::Experienced);
        assert_eq!(score(&["experienced-owner"], &experienced), 3);

        // "some" experience matches no rule
        let some = experience(Experience::Intermediate);
        assert_eq!(score(&["trained", "experienced-owner"], &some), 0);
    }

    #[test]
    fn test_time_rules() {
        assert_eq!(score(&["independent"], &time(TimeAvailable::Limited)), 2);
        assert_eq!(score(&["medium-energy"], &time(TimeAvailable::Moderate)), 1);
        assert_eq!(score(&["high-energy"], &time(TimeAvailable::Lots)), 2);
    }

    #[test]
    fn test_kids_rules_require_explicit_answer() {
        let tags = ["kid-friendly", "quiet"];

        assert_eq!(score(&tags, &kids(true)), 3);
        assert_eq!(score(&tags, &kids(false)), 1);
        assert_eq!(score(&tags, &answers()), 0);
    }

    #[test]
    fn test_breakdown_sums_to_score() {
        let pet = create_test_pet(&["apartment-friendly", "calm", "low-maintenance", "quiet"]);
        let answers = QuizAnswers {
            living_space: Some(LivingSpace::Apartment),
            activity_level: Some(ActivityLevel::Low),
            experience: Some(Experience::FirstTime),
            time_available: Some(TimeAvailable::Limited),
            has_kids: Some(false),
        };

        let hits = score_breakdown(&pet, &answers);
        let total: u32 = hits.iter().map(|h| h.points).sum();

        assert_eq!(total, calculate_match_score(&pet, &answers));
        assert_eq!(hits.first().map(|h| h.rule), Some("apartment_friendly"));
        assert_eq!(hits.len(), 5);
    }
}
