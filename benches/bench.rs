use std::str::FromStr;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fast_strconv::FastFloat;

pub fn parse_benchmark(c: &mut Criterion) {
    let s64 = black_box("1234.5678901234567");
    let b64 = s64.as_bytes();
    c.bench_function("fast_strconv-f64", |b| {
        b.iter(|| black_box(fast_strconv::parse_partial::<f64, _>(b64).unwrap().0))
    });
    c.bench_function("lexical_core-f64", |b| {
        b.iter(|| black_box(lexical_core::parse_partial::<f64>(b64).unwrap().0))
    });
    c.bench_function("from_str-f64", |b| {
        b.iter(|| black_box(f64::from_str(s64).unwrap()))
    });
    let s32 = black_box("12.34567890");
    let b32 = s32.as_bytes();
    c.bench_function("fast_strconv-f32", |b| {
        b.iter(|| black_box(fast_strconv::parse_partial::<f32, _>(b32).unwrap().0))
    });
    c.bench_function("lexical_core-f32", |b| {
        b.iter(|| black_box(lexical_core::parse_partial::<f32>(b32).unwrap().0))
    });
    c.bench_function("from_str-f32", |b| {
        b.iter(|| black_box(f32::from_str(s32).unwrap()))
    });

    let direct = black_box("-12345");
    c.bench_function("fast_strconv-direct", |b| {
        b.iter(|| black_box(f64::parse_float(direct).unwrap()))
    });
    let long = black_box("3.14159265358979323846264338327950288419716939937510");
    c.bench_function("fast_strconv-long", |b| {
        b.iter(|| black_box(f64::parse_float(long).unwrap()))
    });
    let hex = black_box("0x1.921fb54442d18p+1");
    c.bench_function("fast_strconv-hex", |b| {
        b.iter(|| black_box(f64::parse_float(hex).unwrap()))
    });
    let separated = black_box("1_234_567.891_011");
    c.bench_function("fast_strconv-underscores", |b| {
        b.iter(|| black_box(f64::parse_float(separated).unwrap()))
    });
}

pub fn format_benchmark(c: &mut Criterion) {
    let v = black_box(1234.5678901234567_f64);
    let mut out = Vec::with_capacity(32);
    c.bench_function("fast_strconv-format-shortest", |b| {
        b.iter(|| {
            out.clear();
            v.append_float(&mut out, 'g', -1);
            black_box(out.len())
        })
    });
    let mut buf = ryu::Buffer::new();
    c.bench_function("ryu-format", |b| b.iter(|| black_box(buf.format(v).len())));
    c.bench_function("std-format", |b| b.iter(|| black_box(v.to_string())));
    c.bench_function("fast_strconv-format-fixed", |b| {
        b.iter(|| {
            out.clear();
            v.append_float(&mut out, 'f', 6);
            black_box(out.len())
        })
    });
    c.bench_function("fast_strconv-format-hex", |b| {
        b.iter(|| {
            out.clear();
            v.append_float(&mut out, 'x', -1);
            black_box(out.len())
        })
    });
}

criterion_group!(benches, parse_benchmark, format_benchmark);
criterion_main!(benches);
