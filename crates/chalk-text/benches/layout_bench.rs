//! Benchmarks for glyph counting and fixed-width fitting.
//!
//! Run with: cargo bench -p chalk-text

use chalk_text::{glyph_count, set_length, set_length_with};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn ascii_text(len: usize) -> String {
    "Work area height: 1080 ".chars().cycle().take(len).collect()
}

fn box_text(len: usize) -> String {
    "┃│┌─┐└┘━".chars().cycle().take(len).collect()
}

fn bench_glyph_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyph_count");
    for len in [16, 64, 256] {
        for (name, text) in [("ascii", ascii_text(len)), ("box", box_text(len))] {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, len), &text, |b, text| {
                b.iter(|| glyph_count(black_box(text)))
            });
        }
    }
    group.finish();
}

fn bench_set_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_length");
    let label = "GLFW required extensions:";
    group.bench_function("pad_label", |b| {
        b.iter(|| set_length_with(black_box(label), black_box(59), "─", true))
    });
    let long = box_text(200);
    group.bench_function("truncate_box", |b| {
        b.iter(|| set_length(black_box(&long), black_box(62)))
    });
    group.finish();
}

criterion_group!(benches, bench_glyph_count, bench_set_length);
criterion_main!(benches);
