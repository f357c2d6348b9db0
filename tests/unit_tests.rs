// Matcher tests against the public API and the reference catalog

use adoptly::core::{calculate_match_score, rank, Matcher};
use adoptly::models::{ActivityLevel, Experience, LivingSpace, Pet, QuizAnswers, TimeAvailable};
use adoptly::services::demo_pets;

fn apartment_answers(has_kids: bool) -> QuizAnswers {
    QuizAnswers {
        living_space: Some(LivingSpace::Apartment),
        activity_level: Some(ActivityLevel::Low),
        experience: Some(Experience::FirstTime),
        time_available: Some(TimeAvailable::Limited),
        has_kids: Some(has_kids),
    }
}

fn score_of(name: &str, answers: &QuizAnswers) -> u32 {
    let pets = demo_pets();
    let pet = pets.iter().find(|p| p.name == name).unwrap();
    calculate_match_score(pet, answers)
}

fn names(pets: &[Pet]) -> Vec<&str> {
    pets.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_reference_scores_apartment_no_kids() {
    let answers = apartment_answers(false);

    assert_eq!(score_of("Luna", &answers), 9);
    assert_eq!(score_of("Oliver", &answers), 7);
    assert_eq!(score_of("Buddy", &answers), 3);
    assert_eq!(score_of("Bella", &answers), 3);
    assert_eq!(score_of("Mia", &answers), 1);
    assert_eq!(score_of("Max", &answers), 0);
}

#[test]
fn test_reference_ranking_apartment_no_kids() {
    let pets = demo_pets();
    let result = rank(&apartment_answers(false), &pets, 3);

    // Buddy and Bella tie on 3; Buddy comes first in the catalog
    assert_eq!(names(&result), vec!["Luna", "Oliver", "Buddy"]);
}

#[test]
fn test_result_carries_no_score() {
    let pets = demo_pets();
    let result = rank(&apartment_answers(false), &pets, 3);

    for pet in &result {
        let value = serde_json::to_value(pet).unwrap();
        assert!(value.get("matchScore").is_none());
        assert!(value.get("match_score").is_none());
    }
}

#[test]
fn test_having_kids_changes_only_kid_rules() {
    let without = apartment_answers(false);
    let with = apartment_answers(true);

    assert_eq!(score_of("Buddy", &with), score_of("Buddy", &without) + 3);
    assert_eq!(score_of("Mia", &with), score_of("Mia", &without) + 3);
    assert_eq!(score_of("Luna", &with), score_of("Luna", &without));
    // Oliver's quiet bonus only applies to households without kids
    assert_eq!(score_of("Oliver", &with), score_of("Oliver", &without) - 1);
}

#[test]
fn test_result_length_is_min_of_limit_and_catalog() {
    let pets = demo_pets();
    let answers = apartment_answers(true);

    for limit in 0..10 {
        assert_eq!(rank(&answers, &pets, limit).len(), limit.min(pets.len()));
    }
}

#[test]
fn test_empty_catalog_yields_empty_result() {
    let matcher = Matcher::default();
    assert!(matcher.find_matches(&apartment_answers(false), &[]).is_empty());
}

#[test]
fn test_ranking_is_deterministic_and_does_not_mutate() {
    let pets = demo_pets();
    let before = pets.clone();
    let answers = apartment_answers(false);

    let first = rank(&answers, &pets, 6);
    let second = rank(&answers, &pets, 6);

    assert_eq!(first, second);
    assert_eq!(pets, before);
}

#[test]
fn test_adding_matching_tag_raises_score() {
    let active_house = QuizAnswers {
        living_space: Some(LivingSpace::HouseLarge),
        activity_level: Some(ActivityLevel::High),
        experience: Some(Experience::Experienced),
        time_available: Some(TimeAvailable::Lots),
        has_kids: Some(true),
    };
    let cases = [
        (
            active_house,
            vec!["high-energy", "energetic", "experienced-owner", "kid-friendly"],
        ),
        (
            apartment_answers(false),
            vec![
                "apartment-friendly",
                "calm",
                "low-maintenance",
                "trained",
                "independent",
                "quiet",
            ],
        ),
    ];

    for (answers, tags) in &cases {
        for pet in demo_pets() {
            let base = calculate_match_score(&pet, answers);
            for tag in tags {
                let mut tagged = pet.clone();
                if tagged.has_tag(tag) {
                    continue;
                }
                tagged.tags.push(tag.to_string());
                assert!(
                    calculate_match_score(&tagged, answers) > base,
                    "adding {} to {} did not raise its score",
                    tag,
                    pet.name
                );
            }
        }
    }
}

#[test]
fn test_missing_answers_forfeit_points() {
    let pets = demo_pets();
    let partial = QuizAnswers {
        living_space: Some(LivingSpace::Apartment),
        ..QuizAnswers::default()
    };

    // Only the apartment rule can fire
    let scores: Vec<u32> = pets.iter().map(|p| calculate_match_score(p, &partial)).collect();
    assert_eq!(scores, vec![0, 3, 0, 0, 3, 0]);

    let result = rank(&partial, &pets, 3);
    assert_eq!(names(&result), vec!["Luna", "Oliver", "Buddy"]);
}

#[test]
fn test_house_large_always_scores() {
    let answers = QuizAnswers {
        living_space: Some(LivingSpace::HouseLarge),
        has_kids: Some(true),
        ..QuizAnswers::default()
    };

    assert_eq!(score_of("Max", &answers), 1);
    assert_eq!(score_of("Buddy", &answers), 4);
}

#[test]
fn test_concurrent_ranking_shares_catalog() {
    let pets = demo_pets();
    let answers = apartment_answers(false);
    let expected = rank(&answers, &pets, 3);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| rank(&answers, &pets, 3)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
