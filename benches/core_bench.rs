//! Benchmarks for piecework core operations.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use piecework::core::{digest, fragment, recipe, PieceSpec, Registry};
use std::path::Path;

fn bench_parse_specification(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_specification");
    for n in [10, 100, 500] {
        let yaml: String = (0..n)
            .map(|i| {
                format!(
                    "piece_{i:04}:\n  header: p{i}.hpp\n  source: p{i}.cpp\n  license: LICENSE\n  order: {i}\n"
                )
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &yaml, |b, yaml| {
            b.iter(|| {
                let spec = recipe::parse_specification(black_box(yaml), Path::new("bench.spec"))
                    .unwrap();
                black_box(spec);
            });
        });
    }
    group.finish();
}

fn bench_resolve_fragments(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    let mut group = c.benchmark_group("resolve_fragments");
    for size_kb in [1, 64, 1024] {
        let name = format!("frag_{size_kb}k.txt");
        std::fs::write(dir.path().join(&name), "x".repeat(size_kb * 1024)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size_kb), &name, |b, name| {
            b.iter(|| {
                let mut piece = PieceSpec {
                    header: Some(name.clone()),
                    source: Some(name.clone()),
                    ..Default::default()
                };
                fragment::resolve_all(black_box(&mut piece), dir.path()).unwrap();
                black_box(piece);
            });
        });
    }
    group.finish();
}

fn bench_load_recipe(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("h.hpp"), "#pragma once\n").unwrap();
    std::fs::write(dir.path().join("s.cpp"), "int main() { return 0; }\n").unwrap();

    let mut recipe_yaml = String::new();
    for f in 0..20 {
        let spec: String = (0..10)
            .map(|p| format!("piece_{f}_{p}:\n  header: h.hpp\n  source: s.cpp\n"))
            .collect();
        let path = dir.path().join(format!("f{f}.spec"));
        std::fs::write(&path, spec).unwrap();
        recipe_yaml.push_str(&format!("- \"{}\"\n", path.display()));
    }
    let recipe_path = dir.path().join("recipe.yaml");
    std::fs::write(&recipe_path, recipe_yaml).unwrap();

    c.bench_function("load_recipe_20x10", |b| {
        b.iter(|| {
            let mut registry = Registry::new();
            recipe::load_recipe_with_trace(&recipe_path, &mut registry, &mut std::io::sink())
                .unwrap();
            black_box(registry);
        });
    });
}

fn bench_piece_hash(c: &mut Criterion) {
    let piece = PieceSpec {
        header: Some("h".repeat(4096)),
        source: Some("s".repeat(65536)),
        license: Some("l".repeat(1024)),
        ..Default::default()
    };
    c.bench_function("piece_hash", |b| {
        b.iter(|| black_box(digest::piece_hash(black_box(&piece))));
    });
}

criterion_group!(
    benches,
    bench_parse_specification,
    bench_resolve_fragments,
    bench_load_recipe,
    bench_piece_hash
);
criterion_main!(benches);
