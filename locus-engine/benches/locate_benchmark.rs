//! Performance benchmarks for the tiered locator
//!
//! Run with: cargo bench --bench locate_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::executor::block_on;
use locus_core::{LocationQuery, MemoryDocument};
use locus_engine::Locator;
use std::hint::black_box;

/// Generate a document of roughly `paragraphs` paragraphs
fn generate_document(paragraphs: usize) -> String {
    let base = "The Supplier shall deliver the Goods within thirty days of the order date.";
    (0..paragraphs)
        .map(|idx| format!("{idx}. {base}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sentence found by the first tier, at the end of the document
fn bench_exact_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_hit");
    let locator = Locator::new();

    for paragraphs in [10, 100, 1_000] {
        let text = generate_document(paragraphs);
        let doc = MemoryDocument::from_text(&text);
        let query = LocationQuery::sentence(format!(
            "{}. The Supplier shall deliver the Goods within thirty days of the order date.",
            paragraphs - 1
        ))
        .with_highlight("thirty days");

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("locate", paragraphs), &query, |b, query| {
            b.iter(|| {
                doc.clear_calls();
                block_on(locator.locate(&doc, black_box(query)))
            });
        });
    }

    group.finish();
}

/// Sentence only found by the punctuation-insensitive tier
fn bench_full_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_fallback");
    let locator = Locator::new();

    for paragraphs in [10, 100, 1_000] {
        let text = generate_document(paragraphs).replace("Supplier", "Suppliers");
        let doc = MemoryDocument::from_text(&text);
        let query = LocationQuery::sentence(format!(
            "{}. The Supplier\u{2019}s shall deliver the Goods within thirty days of the order date.",
            paragraphs - 1
        ));

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("locate", paragraphs), &query, |b, query| {
            b.iter(|| {
                doc.clear_calls();
                block_on(locator.locate(&doc, black_box(query)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_exact_hit, bench_full_fallback);
criterion_main!(benches);
