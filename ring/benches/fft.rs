use criterion::{Criterion, criterion_group, criterion_main};
use ring::{Polynomial, Ring, RingParams};
use sampling::source::Source;

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    for params in [RingParams::small(), RingParams::medium()] {
        let ring: Ring = Ring::new(params);
        let mut source: Source = Source::new([0u8; 32]);
        let a: Polynomial = ring.random(&mut source);
        let b: Polynomial = ring.random(&mut source);
        group.bench_function(format!("mul/{}", ring.degree()), |bencher| {
            bencher.iter(|| ring.mul(&a, &b));
        });
        group.bench_function(format!("project_all/{}", ring.degree()), |bencher| {
            bencher.iter(|| ring.project_to_all_characters(&a));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
