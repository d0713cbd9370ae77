use criterion::{Criterion, black_box, criterion_group, criterion_main};
use modular_arithmetic::{discrete_logarithm, euler_phi, factorisation, square_root};

fn bench_factorisation(c: &mut Criterion) {
    c.bench_function("factorisation_1000001", |b| {
        b.iter(|| factorisation(black_box(1_000_001)).expect("factorise"))
    });

    c.bench_function("euler_phi_360360", |b| {
        b.iter(|| euler_phi(black_box(360_360)).expect("totient"))
    });
}

fn bench_residues(c: &mut Criterion) {
    // 10009 = 1 mod 8 forces the Tonelli-Shanks path
    c.bench_function("square_root_mod_10009", |b| {
        b.iter(|| square_root(black_box(3_600), black_box(10_009)).expect("roots"))
    });

    // 6 generates the multiplicative group mod 41
    c.bench_function("discrete_log_mod_41", |b| {
        b.iter(|| discrete_logarithm(black_box(6), black_box(35), black_box(41)).expect("dlog"))
    });
}

criterion_group!(benches, bench_factorisation, bench_residues);
criterion_main!(benches);
