//! Criterion benchmarks for edge n-gram analysis.
//!
//! Covers:
//! - The pull-based generator over tokenized input
//! - Front and back grams with and without position preservation
//! - Full analyzer pipelines built from settings

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use edgegram::analysis::settings::AnalysisRegistry;
use edgegram::analysis::source::{TokenSource, TokenizerSource, collect_tokens};
use edgegram::analysis::token_filter::edge_ngram::{EdgeNGramTokenFilter, Side};
use edgegram::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "search",
        "engine",
        "autocomplete",
        "prefix",
        "suffix",
        "token",
        "analysis",
        "mosfellsbær",
        "position",
        "increment",
        "a",
        "of",
        "the",
        "normalization",
        "gram",
        "phrase",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100);
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| words[(i * 7 + j * 13) % words.len()])
            .collect();
        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark the generator directly over a tokenizer source.
fn bench_edge_ngram_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_ngram_filter");
    let text = generate_test_documents(1).remove(0);
    let tokenizer = Arc::new(WhitespaceTokenizer::new());

    for (side, preserve) in [
        (Side::Front, false),
        (Side::Front, true),
        (Side::Back, false),
        (Side::Back, true),
    ] {
        let id = BenchmarkId::new(side.label(), if preserve { "preserve" } else { "plain" });
        group.bench_with_input(id, &text, |b, text| {
            b.iter(|| {
                let source = TokenizerSource::new(tokenizer.clone(), black_box(text.as_str()));
                let mut filter =
                    EdgeNGramTokenFilter::new(source, side, 2, 6, preserve).unwrap();
                black_box(collect_tokens(&mut filter).unwrap())
            })
        });
    }

    // Rewinding reuses the already tokenized input
    group.bench_function("reset_and_replay", |b| {
        let source = TokenizerSource::new(tokenizer.clone(), text.as_str());
        let mut filter = EdgeNGramTokenFilter::new(source, Side::Front, 1, 3, true).unwrap();
        b.iter(|| {
            filter.get_mut().reset().unwrap();
            filter.reset().unwrap();
            black_box(collect_tokens(&mut filter).unwrap())
        })
    });

    group.finish();
}

/// Benchmark analyzers built from JSON settings.
fn bench_analyzer(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer");

    let registry = AnalysisRegistry::from_json_str(
        r#"{
            "analysis": {
                "filter": {
                    "autocomplete_filter": {
                        "type": "edge_ngram_2",
                        "min_gram": 1,
                        "max_gram": 10,
                        "preserve_positions": true
                    }
                },
                "analyzer": {
                    "autocomplete": {
                        "tokenizer": "whitespace",
                        "filter": ["lowercase", "stop", "autocomplete_filter"]
                    }
                }
            }
        }"#,
    )
    .unwrap();
    let analyzer = registry.analyzer("autocomplete").unwrap();
    let texts = generate_test_documents(100);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in &texts {
                let count = analyzer.analyze(black_box(text)).unwrap().count();
                black_box(count);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_edge_ngram_filter, bench_analyzer);
criterion_main!(benches);
