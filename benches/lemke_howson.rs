use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use nashsolver::{BimatrixGame, DEFAULT_MAX_PIVOTS, lemke_howson};
use ndarray::Array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand::{SeedableRng, rngs::StdRng};
use ndarray_rand::rand_distr::Uniform;

fn random_game(rng: &mut StdRng, size: usize) -> BimatrixGame {
    let a = Array::random_using((size, size), Uniform::new(0., 10.), rng);
    let b = Array::random_using((size, size), Uniform::new(0., 10.), rng);
    BimatrixGame::new(a, b).expect("Invalid random game.")
}

fn bench_single_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("lemke_howson");
    for size in [4, 16, 64] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter_batched(
                || random_game(&mut rng, size),
                |game| lemke_howson(&game, 1, DEFAULT_MAX_PIVOTS),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_path);
criterion_main!(benches);
