//! Benchmarks for the extraction pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dialect::discovery::{extract_productions, Manifest};
use dialect::parser::{find_signatures, parse_productions, tokenize};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("parsing")
}

/// Build a fragment with `count` productions of moderate size.
fn synthetic_fragment(count: usize) -> String {
    let mut source = String::from("<#-- generated -->\n\n");
    for i in 0..count {
        source.push_str(&format!(
            "SqlNode Production{i}(Span s, int depth) :\n{{\n    final String open = \"{{\";\n    // }} not counted\n}}\n{{\n    <TOKEN_{i}> {{ return node(s, '}}'); }}\n    /* {{ {{ */\n}}\n\n"
        ));
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let base = fs::read_to_string(fixtures_dir().join("base.ftl")).unwrap();
    let large = synthetic_fragment(500);

    group.bench_function("tokenize_large", |b| {
        b.iter(|| tokenize(black_box(&large)).count())
    });

    group.bench_function("signatures_large", |b| {
        b.iter(|| find_signatures(black_box(&large)))
    });

    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse_productions(black_box(&base)).unwrap())
    });

    group.bench_function("parse_large", |b| {
        b.iter(|| parse_productions(black_box(&large)).unwrap())
    });

    group.finish();
}

// -- Hierarchy benchmarks --

fn bench_extraction(c: &mut Criterion) {
    let root = fixtures_dir();
    let dialect = root.join("intermediate").join("dialects").join("testDialect");
    let (manifest, _) = Manifest::discover(&root).unwrap();
    let options = manifest
        .options()
        .with_license(manifest.license_text(&root).unwrap());

    c.bench_function("extract_fixture_dialect", |b| {
        b.iter(|| extract_productions(black_box(&root), black_box(&dialect), &options).unwrap())
    });
}

criterion_group!(benches, bench_parsing, bench_extraction);
criterion_main!(benches);
