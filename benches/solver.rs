//! Benchmarks for the Tower of Hanoi solvers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hanoi::state::State;
use hanoi::{bfs, recursive, search};

/// Benchmark the best-first engine on a mid-sized puzzle.
fn bench_astar(c: &mut Criterion) {
    c.bench_function("astar_8_disks", |b| {
        b.iter(|| search::solve(black_box(8)).unwrap())
    });
}

/// Benchmark breadth-first search on the same puzzle.
///
/// BFS expands most of the reachable state graph, making it the slow case;
/// fewer samples keep the run time reasonable.
fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");
    group.sample_size(10);
    group.bench_function("solve_8_disks", |b| {
        b.iter(|| bfs::solve(black_box(8)).unwrap())
    });
    group.finish();
}

/// Benchmark the closed-form recursive solver.
fn bench_recursive(c: &mut Criterion) {
    c.bench_function("recursive_8_disks", |b| {
        b.iter(|| recursive::solve(black_box(8)).unwrap())
    });
}

/// Benchmark legal move enumeration from the start state.
fn bench_neighbors(c: &mut Criterion) {
    let start = State::initial(8);
    c.bench_function("neighbors", |b| b.iter(|| black_box(&start).neighbors()));
}

criterion_group!(
    benches,
    bench_astar,
    bench_bfs,
    bench_recursive,
    bench_neighbors
);
criterion_main!(benches);
