use core::tokenizer::{normalize, NoiseWords};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_normalize(c: &mut Criterion) {
    let noise = NoiseWords::standard();
    let text = "The quick, brown fox; jumps over the lazy dog! A test-case can't match. \
                Question?? night, Word storms rivers stones engines kernels"
        .repeat(64);
    c.bench_function("normalize_tokens", |b| {
        b.iter(|| {
            text.split_whitespace()
                .filter_map(|t| normalize(t, &noise))
                .count()
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
