use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_strategies::graph::generators::{generate_grid, generate_random, generate_shortcut_chain};
use dijkstra_strategies::{DirectedGraph, Strategy};

const SIZES: [usize; 3] = [256, 1_024, 4_096];

fn make_graph(kind: &str, size: usize) -> DirectedGraph<u64> {
    let seed = 0x5EED ^ size as u64;
    match kind {
        "grid" => {
            let side = (size as f64).sqrt() as usize;
            generate_grid(side, side, 100, seed)
        }
        "shortcut-chain" => generate_shortcut_chain(size),
        _ => generate_random(size, 4, 100, seed),
    }
}

fn bench_strategies(c: &mut Criterion) {
    for kind in ["random", "grid", "shortcut-chain"] {
        let mut group = c.benchmark_group(format!("strategies/{}", kind));
        group.sample_size(20);

        for &size in &SIZES {
            let graph = make_graph(kind, size);

            for strategy in Strategy::ALL {
                group.bench_with_input(BenchmarkId::new(strategy.name(), size), &graph, |b, graph| {
                    b.iter(|| strategy.run::<u64, _>(black_box(graph), black_box(0)))
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
