//! Benchmarks for line classification and include resolution.

use std::fmt::Write;
use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geosite_rules::diagnostics::NoopDiagnostics;
use geosite_rules::provider::MemoryProvider;
use geosite_rules::{Resolver, classify};

/// Corpus of `sets` rule sets, each including the next two and listing
/// `domains` suffix and full entries.
fn sample_corpus(sets: usize, domains: usize) -> MemoryProvider {
    let mut provider = MemoryProvider::new();
    for i in 0..sets {
        let mut content = String::new();
        writeln!(content, "# rule set {i}").unwrap();
        for next in [i + 1, i + 2] {
            if next < sets {
                writeln!(content, "include:set-{next}").unwrap();
            }
        }
        for d in 0..domains {
            writeln!(content, "d{d}.set{i}.example.com @ads").unwrap();
            writeln!(content, "full:www.d{d}.set{i}.example.com").unwrap();
        }
        writeln!(content, r"regexp:^ads[0-9]+\.set{i}\.com$").unwrap();
        provider.insert(format!("set-{i}"), content);
    }
    provider
}

fn bench_classify(c: &mut Criterion) {
    let lines = [
        "# comment",
        "",
        "include:category-ads",
        "full:www.example.com @cn",
        "example.com @ads",
        r"regexp:^ads\.example\.com$",
    ];
    c.bench_function("classify_mixed_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(classify(black_box(line)));
            }
        })
    });
}

fn bench_resolve_chain(c: &mut Criterion) {
    let mut builder = Resolver::builder(sample_corpus(200, 50));
    builder.set_diagnostics(Arc::new(NoopDiagnostics));
    let resolver = builder.build();

    c.bench_function("resolve_200_sets", |b| {
        b.iter(|| resolver.resolve(black_box(["set-0"])))
    });
}

criterion_group!(benches, bench_classify, bench_resolve_chain);
criterion_main!(benches);
