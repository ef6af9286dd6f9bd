use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmaze::{
    progress::ProgressHandle, solve, DepthFirstSearch, Dims, Generator, GridGenerator,
    NoopRenderer, RndKruskals,
};

const SIZE: Dims = Dims(50, 50);

fn generate(algorithm: Box<dyn GridGenerator>) -> pmaze::Maze {
    Generator::new(SIZE)
        .unwrap()
        .with_seed(7)
        .with_algorithm(algorithm)
        .generate(ProgressHandle::new(), &mut NoopRenderer)
        .unwrap()
}

pub fn dfs_generate(c: &mut Criterion) {
    c.bench_function("dfs_generate", |b| {
        b.iter(|| {
            let maze = generate(black_box(Box::new(DepthFirstSearch)));
            black_box(maze);
        })
    });
}

pub fn kruskals_generate(c: &mut Criterion) {
    c.bench_function("kruskals_generate", |b| {
        b.iter(|| {
            let maze = generate(black_box(Box::new(RndKruskals)));
            black_box(maze);
        })
    });
}

pub fn solve_generated(c: &mut Criterion) {
    let maze = generate(Box::new(DepthFirstSearch));
    c.bench_function("solve_generated", |b| {
        b.iter(|| {
            let report = solve(black_box(&maze), ProgressHandle::new(), &mut NoopRenderer);
            black_box(report);
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = dfs_generate, kruskals_generate, solve_generated}
criterion_main!(benches);
