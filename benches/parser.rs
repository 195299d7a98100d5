//! Benchmarks for parsing and rendering definition files.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ludwieg::{parse_document, render_source, render_tree};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A document with `packages` packages, each holding a few fields, an array
/// and a struct nested `depth` levels deep.
fn generated_document(packages: usize, depth: usize) -> String {
    let mut out = String::new();
    for p in 0..packages {
        out.push_str(&format!("// package {}\npackage pkg_{} {{\n", p, letters(p)));
        out.push_str(&format!("    id 0x{:04X}\n", p));
        out.push_str("    uint64 key\n    string label !deprecated\n    uint8[*] payload\n");
        for level in 0..depth {
            let indent = "    ".repeat(level + 1);
            out.push_str(&format!("{}struct level_{} {{\n", indent, letters(level)));
            out.push_str(&format!("{}    double value\n", indent));
        }
        for level in (0..depth).rev() {
            out.push_str(&format!("{}}}\n", "    ".repeat(level + 1)));
        }
        out.push_str("}\n\n");
    }
    out
}

/// Names may only use lowercase letters, so spell indices as letters.
fn letters(mut n: usize) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            return name;
        }
    }
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let fixture = load_fixture("user.lud");
    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse_document(black_box(&fixture)).unwrap())
    });

    for packages in [10, 100] {
        let source = generated_document(packages, 4);
        group.bench_with_input(
            BenchmarkId::new("parse_generated", packages),
            &source,
            |b, source| b.iter(|| parse_document(black_box(source)).unwrap()),
        );
    }

    let deep = generated_document(1, 64);
    group.bench_function("parse_deep_nesting", |b| {
        b.iter(|| parse_document(black_box(&deep)).unwrap())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let doc = parse_document(&generated_document(100, 4)).unwrap();

    group.bench_function("render_source", |b| b.iter(|| render_source(black_box(&doc))));
    group.bench_function("render_tree", |b| b.iter(|| render_tree(black_box(&doc))));

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_rendering);
criterion_main!(benches);
