// Criterion benchmarks for College Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use college_match::core::{calculate_match_score, Matcher};
use college_match::models::{CollegeRecord, FilterCriteria, MatchRequest, SortKey, WeightConfig};

const STATES: [&str; 5] = ["CA", "NY", "TX", "MA", "IL"];

fn create_college(id: usize) -> CollegeRecord {
    CollegeRecord {
        id: Some(id.to_string()),
        name: format!("College {}", id),
        state: Some(STATES[id % STATES.len()].to_string()),
        net_price: Some(5000.0 + (id % 60) as f64 * 1000.0),
        grad_rate: Some(20.0 + (id % 75) as f64),
        median_debt: Some(8000.0 + (id % 40) as f64 * 800.0),
        median_earnings: (id % 7 != 0).then(|| 30000.0 + (id % 50) as f64 * 900.0),
        childcare_available: id % 3 == 0,
        ..Default::default()
    }
}

fn create_request(sort_by: SortKey) -> MatchRequest {
    MatchRequest {
        filters: FilterCriteria {
            max_budget: Some(45000.0),
            min_grad_rate: Some(40.0),
            max_debt: Some(30000.0),
            is_student_parent: true,
            ..Default::default()
        },
        weights: WeightConfig {
            budget: Some(3),
            grad_rate: Some(2),
            ..Default::default()
        },
        sort_by,
    }
}

fn bench_score(c: &mut Criterion) {
    let college = create_college(3);
    let request = create_request(SortKey::MatchScore);
    let weights = request.weights.resolve();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(
                black_box(&college),
                black_box(&request.filters),
                black_box(&weights),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::new();
    let request = create_request(SortKey::MatchScore);

    let mut group = c.benchmark_group("matching");

    for college_count in [100, 1000, 7000].iter() {
        let colleges: Vec<CollegeRecord> = (0..*college_count).map(create_college).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(college_count),
            &colleges,
            |b, colleges| {
                b.iter(|| matcher.find_matches(black_box(colleges), black_box(&request)));
            },
        );
    }

    group.finish();
}

fn bench_sort_keys(c: &mut Criterion) {
    let matcher = Matcher::new();
    let colleges: Vec<CollegeRecord> = (0..1000).map(create_college).collect();

    let mut group = c.benchmark_group("sort_keys");

    for sort_by in [
        SortKey::MatchScore,
        SortKey::LowestCost,
        SortKey::HighestGradRate,
        SortKey::HighestEarnings,
    ] {
        let request = create_request(sort_by);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", sort_by)),
            &request,
            |b, request| {
                b.iter(|| matcher.find_matches(black_box(&colleges), black_box(request)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score, bench_matching, bench_sort_keys);
criterion_main!(benches);
