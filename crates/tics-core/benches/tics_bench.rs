use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use tics_core::AxisTics;

fn gen_ranges(n: usize) -> Vec<(f64, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // sweep several decades with an awkward offset
        let scale = 10f64.powi((i % 9) as i32 - 4);
        let lo = (i as f64 * 0.37).sin() * scale;
        v.push((lo, lo + scale * (1.0 + (i % 7) as f64)));
    }
    v
}

fn bench_interval(c: &mut Criterion) {
    let ranges = gen_ranges(1_000);
    c.bench_function("interval_layout", |b| {
        b.iter(|| {
            for &(x1, x2) in &ranges {
                let dtic = (x2 - x1) / 8.0;
                let _ = black_box(AxisTics::with_interval(x1, x2, dtic));
            }
        });
    });
}

fn bench_max_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_count_layout");
    let ranges = gen_ranges(1_000);
    for &ntic in &[2usize, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("ntic{ntic}")), &ntic, |b, &n| {
            b.iter(|| {
                for &(x1, x2) in &ranges {
                    let _ = black_box(AxisTics::with_max_count(x1, x2, n));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_interval, bench_max_count);
criterion_main!(benches);
