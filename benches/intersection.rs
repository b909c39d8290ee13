use std::time::Duration;

use aabo::{BenchmarkSettings, Mesh, Variant, Volumes, object::populate};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

fn bench_settings() -> BenchmarkSettings {
    BenchmarkSettings::builder()
        .object_count(200_000)
        .probe_count(10)
        .build()
        .unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let settings = bench_settings();
    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let mesh = Mesh::generate(settings.point_count, settings.radius, &mut rng).unwrap();
    let objects = populate(
        &mesh,
        settings.object_count,
        settings.position_range,
        &mut rng,
    )
    .unwrap();
    let volumes = Volumes::build(&objects, |_| {}).unwrap();

    let mut group = c.benchmark_group("sweep");
    for variant in Variant::ALL {
        group.bench_function(variant.label(), |b| {
            b.iter(|| volumes.measure(variant, settings.probe_count).intersections)
        });
    }
    group.finish();

    c.bench_function("build_volumes", |b| {
        b.iter_batched(
            || objects.clone(),
            |objects| Volumes::build(&objects, |_| {}).unwrap(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20).measurement_time(Duration::from_secs(20));
    targets = criterion_benchmark
}
criterion_main!(benches);
