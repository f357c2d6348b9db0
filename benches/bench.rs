// Criterion benchmarks for Adoptly

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use adoptly::core::{calculate_match_score, Matcher};
use adoptly::models::{ActivityLevel, Experience, LivingSpace, Pet, QuizAnswers, TimeAvailable};

const TAG_POOL: [&str; 12] = [
    "apartment-friendly",
    "large",
    "calm",
    "low-maintenance",
    "medium-energy",
    "high-energy",
    "energetic",
    "trained",
    "experienced-owner",
    "independent",
    "kid-friendly",
    "quiet",
];

fn create_candidate(id: usize) -> Pet {
    Pet {
        id: id as u32,
        name: format!("Pet {}", id),
        age: (id % 15) as u8,
        tags: (0..4).map(|i| TAG_POOL[(id * 7 + i * 5) % TAG_POOL.len()].to_string()).collect(),
        story: String::new(),
        photo: None,
    }
}

fn create_answers() -> QuizAnswers {
    QuizAnswers {
        living_space: Some(LivingSpace::Apartment),
        activity_level: Some(ActivityLevel::Low),
        experience: Some(Experience::FirstTime),
        time_available: Some(TimeAvailable::Limited),
        has_kids: Some(false),
    }
}

fn bench_match_score(c: &mut Criterion) {
    let pet = create_candidate(1);
    let answers = create_answers();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&pet), black_box(&answers)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::default();
    let answers = create_answers();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [6, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Pet> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.find_matches(black_box(&answers), black_box(&candidates)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_matching);

criterion_main!(benches);
