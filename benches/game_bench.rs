use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridiron_dice::analysis::{simulate_many, study_drives};
use gridiron_dice::core::dice::seeded;
use gridiron_dice::core::types::PlayStyle;
use gridiron_dice::game::simulate_game_with;
use gridiron_dice::policy::CoachProfile;

fn bench_single_game(c: &mut Criterion) {
    let coach = CoachProfile::default();
    let mut seed = 0u64;
    c.bench_function("simulate_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut rng = seeded(seed);
            black_box(simulate_game_with(&coach, &mut rng))
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);
    group.bench_function("simulate_many_1000", |b| b.iter(|| black_box(simulate_many(1000, 42))));
    group.bench_function("study_pass_drives_10000", |b| {
        b.iter(|| black_box(study_drives(PlayStyle::Pass, 30, 10_000, 42)))
    });
    group.finish();
}

criterion_group!(benches, bench_single_game, bench_batch);
criterion_main!(benches);
