use criterion::{criterion_group, criterion_main, Criterion};
use pathrank_core::tokenizer::tokenize;

fn bench_tokenize(c: &mut Criterion) {
    let text = "projects/2024/reports/quarterly_summary.txt \
        The quarterly numbers were reviewed by 12 teams; totals rose 7% overall. "
        .repeat(200);
    c.bench_function("tokenize_paths_and_prose", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
