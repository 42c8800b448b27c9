use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grex_core::rng::RngHandle;
use grex_graph::{gen_graphical_vector, vector_to_adjacency, vector_to_incidence};

fn reconstruct_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(42);
    let degrees = gen_graphical_vector(2_000, 16, &mut rng);

    c.bench_function("vector_to_adjacency_2k", |b| {
        b.iter(|| {
            let adjacency = vector_to_adjacency(black_box(&degrees)).unwrap();
            black_box(adjacency);
        });
    });

    let small = gen_graphical_vector(200, 8, &mut rng);
    c.bench_function("vector_to_incidence_200", |b| {
        b.iter(|| {
            let incidence = vector_to_incidence(black_box(&small)).unwrap();
            black_box(incidence);
        });
    });
}

criterion_group!(benches, reconstruct_bench);
criterion_main!(benches);
