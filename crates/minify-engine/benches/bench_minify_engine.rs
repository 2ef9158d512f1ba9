use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minify_core::Profile;
use minify_engine::{compact_line, Minifier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SNIPPETS: &[&str] = &[
    "int   counter = 0;   // running total",
    "/* block comment",
    "   spanning lines */ return counter + 1;",
    "#include <stdio.h>",
    "const char *msg = \"hello,   world // not a comment\";",
    "if ( a == b ) { do_something ( a , b ) ; }",
    "",
    "    // indented comment only",
    "#region header",
    "generated code here",
    "#endregion",
];

fn generate_source(size_kb: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(SNIPPETS[rng.gen_range(0..SNIPPETS.len())]);
        text.push('\n');
    }
    text
}

fn bench_minify(c: &mut Criterion) {
    let src_1k = generate_source(1, 7);
    let src_10k = generate_source(10, 7);
    let src_100k = generate_source(100, 7);

    for &(name, profile) in &[("base", Profile::Base), ("regions", Profile::Regions), ("corrected", Profile::Corrected)] {
        let minifier = Minifier::for_profile(profile).unwrap();
        let n = name;
        c.bench_function(&format!("minify_{n}_1kb"), |b| {
            b.iter(|| black_box(minifier.minify(black_box(&src_1k))))
        });
        c.bench_function(&format!("minify_{n}_10kb"), |b| {
            b.iter(|| black_box(minifier.minify(black_box(&src_10k))))
        });
        c.bench_function(&format!("minify_{n}_100kb"), |b| {
            b.iter(|| black_box(minifier.minify(black_box(&src_100k))))
        });
    }
}

fn bench_compact_line(c: &mut Criterion) {
    let line = "if ( alpha == beta ) { result = compute ( alpha , \"beta  gamma\" ) ; }";
    c.bench_function("compact_line", |b| {
        b.iter(|| black_box(compact_line(black_box(line))))
    });
}

criterion_group!(benches, bench_minify, bench_compact_line);
criterion_main!(benches);
