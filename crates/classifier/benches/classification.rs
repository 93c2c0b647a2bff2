//! Benchmarks for classification and normalization
//!
//! Run with: cargo bench --package classifier

use catalog::{RawItem, RawVideo};
use classifier::{Normalizer, TextClassifier};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE_TEXT: &str = "JEE Advanced 2024 | Rotational Motion One Shot\n\
    Complete revision of rotational motion with previous year questions, \
    solved examples and a formula sheet. Ideal for JEE Main and NEET aspirants.";

fn sample_items(count: usize) -> Vec<RawItem> {
    (0..count)
        .map(|i| {
            RawItem::Video(RawVideo {
                id: format!("video-{}", i),
                title: Some(format!("Lecture {}: Linear Algebra Basics", i)),
                description: Some(SAMPLE_TEXT.to_string()),
                channel: Some("Bench Channel".to_string()),
                published_at: Some("2024-01-15T10:00:00Z".to_string()),
                duration: Some("PT14M5S".to_string()),
                has_captions: i % 2 == 0,
                view_count: Some(i as u64 * 100),
            })
        })
        .collect()
}

fn bench_classify_text(c: &mut Criterion) {
    let classifier = TextClassifier::new();

    c.bench_function("classify_text", |b| {
        b.iter(|| black_box(classifier.classify(black_box(SAMPLE_TEXT))))
    });
}

fn bench_normalize_batch(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    // One full search page
    let items = sample_items(50);

    c.bench_function("normalize_50_items", |b| {
        b.iter(|| black_box(normalizer.normalize_all(black_box(&items))))
    });
}

criterion_group!(benches, bench_classify_text, bench_normalize_batch);
criterion_main!(benches);
