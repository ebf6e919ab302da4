//! Ingestion throughput

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sonarguard_core::{SamplePair, WindowedOutlierFilter};

fn frames(count: usize) -> Vec<SamplePair> {
    (0..count)
        .map(|i| {
            let jitter = ((i * 7919) % 13) as f32 * 0.1;
            let spike = if i % 17 == 0 { 20.0 } else { 0.0 };
            SamplePair::new(15.0 + jitter + spike, 7.5 - jitter)
        })
        .collect()
}

fn bench_ingest(c: &mut Criterion) {
    let frames = frames(1024);

    c.bench_function("ingest_window_5", |b| {
        let mut filter = WindowedOutlierFilter::<(), 5>::with_sink(());
        b.iter(|| {
            for frame in &frames {
                black_box(filter.ingest_pair(black_box(*frame)));
            }
        })
    });

    c.bench_function("ingest_window_32", |b| {
        let mut filter = WindowedOutlierFilter::<(), 32>::with_sink(());
        b.iter(|| {
            for frame in &frames {
                black_box(filter.ingest_pair(black_box(*frame)));
            }
        })
    });
}

criterion_group!(benches, bench_ingest);
criterion_main!(benches);
