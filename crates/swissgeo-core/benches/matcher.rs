use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use swissgeo_core::prelude::*;

fn sample_jobs(n: usize) -> Vec<JobLocationAttributes> {
    (0..n)
        .map(|i| {
            let canton = Canton::ALL[i % Canton::ALL.len()];
            let mut job = JobLocationAttributes::in_canton(canton);
            if let Some(&sub) = canton.sub_regions().iter().next() {
                job = job.with_sub_region(sub);
            }
            if i % 3 == 0 {
                let other = Canton::ALL[(i * 7) % Canton::ALL.len()];
                job = job.with_location(AdditionalLocation::new(other));
            }
            job
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let jobs = sample_jobs(10_000);
    let matcher = LocationMatcher::default();

    let by_region = SelectionState::new()
        .toggled_region(Region::Ostschweiz)
        .toggled_region(Region::Central);
    let mut by_canton = SelectionState::new();
    by_canton.toggle_canton(Canton::Bern);
    by_canton.toggle_canton(Canton::Geneva);
    let by_sub_region = SelectionState::new()
        .toggled_sub_region(SubRegion::ZurichCity)
        .toggled_sub_region(SubRegion::Basel);

    c.bench_function("filter 10k / regions", |b| {
        b.iter(|| matcher.filter(black_box(&by_region), &jobs).count())
    });
    c.bench_function("filter 10k / cantons", |b| {
        b.iter(|| matcher.filter(black_box(&by_canton), &jobs).count())
    });
    c.bench_function("filter 10k / sub-regions", |b| {
        b.iter(|| matcher.filter(black_box(&by_sub_region), &jobs).count())
    });
}

fn bench_detection(c: &mut Criterion) {
    c.bench_function("detect postal code (hit)", |b| {
        b.iter(|| detect_sub_region_from_postal_code(black_box("8934")))
    });
    c.bench_function("detect postal code (miss)", |b| {
        b.iter(|| detect_sub_region_from_postal_code(black_box("9999")))
    });
}

criterion_group!(benches, bench_matcher, bench_detection);
criterion_main!(benches);
