use criterion::{Criterion, criterion_group, criterion_main};
use moderation::{censor, validate_chirp};

const CLEAN_CHIRP: &str =
    "I hear Mastodon is better than Chirpy but I have not had time to check it out properly yet";

const PROFANE_CHIRP: &str =
    "This is a kerfuffle opinion I need to share with the world before the sharbert police arrive";

fn bench_censor_clean(c: &mut Criterion) {
    c.bench_function("moderation/censor_clean", |b| {
        b.iter(|| censor(CLEAN_CHIRP));
    });
}

fn bench_censor_profane(c: &mut Criterion) {
    c.bench_function("moderation/censor_profane", |b| {
        b.iter(|| censor(PROFANE_CHIRP));
    });
}

fn bench_validate_at_limit(c: &mut Criterion) {
    let body = "a".repeat(140);

    c.bench_function("moderation/validate_at_limit", |b| {
        b.iter(|| validate_chirp(&body).unwrap());
    });
}

criterion_group!(
    benches,
    bench_censor_clean,
    bench_censor_profane,
    bench_validate_at_limit
);
criterion_main!(benches);
