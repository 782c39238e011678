//! Query benchmarks over synthetic parks using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taxi_core::synthetic::{generate_park, SyntheticParkParams};
use taxi_core::{build_report, QueryConfig, TaxiPark};

fn parks() -> Vec<(&'static str, TaxiPark)> {
    vec![
        ("small", (50, 200, 1_000)),
        ("medium", (200, 1_000, 10_000)),
        ("large", (1_000, 5_000, 100_000)),
    ]
    .into_iter()
    .map(|(name, (drivers, passengers, trips))| {
        let params = SyntheticParkParams::default()
            .with_drivers(drivers)
            .with_passengers(passengers)
            .with_trips(trips)
            .with_seed(42);
        (name, generate_park(&params))
    })
    .collect()
}

fn bench_queries(c: &mut Criterion) {
    let parks = parks();

    let mut group = c.benchmark_group("queries");
    for (name, park) in &parks {
        let busiest = park
            .income_by_driver()
            .first()
            .map(|income| income.driver.clone());

        group.bench_with_input(BenchmarkId::new("fake_drivers", name), park, |b, park| {
            b.iter(|| black_box(park.find_fake_drivers()));
        });
        group.bench_with_input(BenchmarkId::new("faithful", name), park, |b, park| {
            b.iter(|| black_box(park.find_faithful_passengers(5)));
        });
        if let Some(driver) = &busiest {
            group.bench_with_input(BenchmarkId::new("frequent", name), park, |b, park| {
                b.iter(|| black_box(park.find_frequent_passengers(driver)));
            });
        }
        group.bench_with_input(BenchmarkId::new("smart", name), park, |b, park| {
            b.iter(|| black_box(park.find_smart_passengers()));
        });
        group.bench_with_input(BenchmarkId::new("period", name), park, |b, park| {
            b.iter(|| black_box(park.most_frequent_trip_duration_period()));
        });
        group.bench_with_input(BenchmarkId::new("pareto", name), park, |b, park| {
            b.iter(|| black_box(park.check_pareto_principle()));
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let parks = parks();
    let config = QueryConfig::default();

    let mut group = c.benchmark_group("report");
    for (name, park) in &parks {
        group.bench_with_input(BenchmarkId::from_parameter(name), park, |b, park| {
            b.iter(|| black_box(build_report(park, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queries, bench_report);
criterion_main!(benches);
