use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bit_twiddle::bit_field::{set_bit, test_bit, toggle_bit};
use bit_twiddle::demo;

fn bench_set_bit(c: &mut Criterion) {
    c.bench_function("set bit", |b| {
        b.iter(|| set_bit(black_box(0b10001u32), black_box(3)))
    });
}

fn bench_toggle_test(c: &mut Criterion) {
    c.bench_function("toggle then test", |b| {
        b.iter(|| {
            let value = toggle_bit(black_box(25u32), black_box(15)).unwrap();
            test_bit(value, 15)
        })
    });
}

fn bench_demo_run(c: &mut Criterion) {
    let mut out = Vec::with_capacity(8);
    c.bench_function("demo run", |b| {
        b.iter(|| {
            out.clear();
            black_box(demo::run(&mut out).unwrap());
        })
    });
}

criterion_group!(bit_benches, bench_set_bit, bench_toggle_test, bench_demo_run);
criterion_main!(bit_benches);
