use criterion::{Criterion, criterion_group, criterion_main};
use ring::{Polynomial, Ring, RingParams};
use routing::{RoutingExample, RoutingWeights};
use sampling::source::Source;
use sheaf::{GluingConstraint, Patch, RoutingProblem, SheafRouter};

fn problem(ring: &Ring, source: &mut Source, num_examples: usize) -> RoutingProblem {
    let examples: Vec<RoutingExample> = (0..num_examples)
        .map(|_| {
            let message: Polynomial = ring.random(source);
            RoutingExample {
                source: ring.random(source),
                destination: ring.random(source),
                expected_output: message.clone(),
                message,
            }
        })
        .collect();
    let boundary: Polynomial = ring.random(source);
    RoutingProblem {
        patches: vec![
            Patch::create("a", RoutingWeights::uniform(ring.degree(), ring.characters())),
            Patch::create("b", RoutingWeights::uniform(ring.degree(), ring.characters())),
        ],
        gluings: vec![GluingConstraint::continuity("a", "b", boundary)],
        examples,
    }
}

fn bench_learn(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheaf");
    for params in [RingParams::small(), RingParams::medium()] {
        let ring: Ring = Ring::new(params);
        let mut source: Source = Source::new([0u8; 32]);
        let prob: RoutingProblem = problem(&ring, &mut source, 8);
        group.bench_function(format!("learn/{}", ring.degree()), |bencher| {
            bencher.iter(|| {
                let mut router: SheafRouter =
                    SheafRouter::create(&ring, prob.clone()).unwrap();
                router.learn_routing().unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_learn);
criterion_main!(benches);
