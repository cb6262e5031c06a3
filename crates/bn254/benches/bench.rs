#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use revm_bn254::{ArkworksProvider, Bn254, ScalarField, P1, P2, U256};

/// Benchmarks the provider-backed kernel operations.
pub fn benchmark_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn254 kernel");
    let bn = Bn254::new(&ArkworksProvider);

    let scalars: Vec<ScalarField> = (1..=16u64)
        .map(|i| ScalarField(U256::from_limbs([i, i, i, i])))
        .collect();
    let bases: Vec<_> = scalars
        .iter()
        .map(|s| bn.g1_from_scalar(*s).unwrap())
        .collect();
    let encoded = bases[3].serialize();

    group.bench_function("g1 add", |b| {
        b.iter(|| bn.add(black_box(bases[0]), black_box(bases[1])).unwrap())
    });
    group.bench_function("g1 scalar mul", |b| {
        b.iter(|| bn.scalar_mul(black_box(P1), black_box(scalars[7])).unwrap())
    });
    group.bench_function("msm 16", |b| {
        b.iter(|| bn.multi_scalar_mul(black_box(&bases), black_box(&scalars)).unwrap())
    });
    group.bench_function("scalar invert", |b| {
        b.iter(|| bn.invert(black_box(scalars[5])).unwrap())
    });
    group.bench_function("deserialize", |b| {
        b.iter(|| bn.deserialize(black_box(encoded)).unwrap())
    });
    group.bench_function("pairing prod2", |b| {
        b.iter(|| {
            bn.pairing_prod2(black_box(P1), P2, black_box(P1.negate()), P2)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchmark_kernel
}
criterion_main!(benches);
