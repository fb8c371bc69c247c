use dijkstra_strategies::graph::generators::{generate_grid, generate_random, generate_shortcut_chain};
use dijkstra_strategies::report::{format_distances, write_run};
use dijkstra_strategies::{
    run_array_scan, run_eager_queue, run_lazy_queue, DirectedGraph, Distance, Error, Graph,
    RunStatistics, ShortestPathStrategy, Strategy, StrategyComparison,
};

use Distance::{Finite, Infinite};

// 0 -> 1 (1), 0 -> 2 (5), 1 -> 2 (2)
fn triangle() -> DirectedGraph<u64> {
    DirectedGraph::from_edges(3, vec![(0, 1, 1), (0, 2, 5), (1, 2, 2)]).unwrap()
}

// Plain Bellman-Ford used as an independent reference
fn reference_distances(graph: &DirectedGraph<u64>, source: usize) -> Vec<Distance<u64>> {
    let n = graph.vertex_count();
    let mut dist = vec![Infinite; n];
    dist[source] = Finite(0);
    for _ in 0..n {
        let mut changed = false;
        for (u, row) in graph.rows() {
            for edge in row {
                let candidate = dist[u].extend(edge.weight());
                if candidate < dist[edge.destination()] {
                    dist[edge.destination()] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn stats(vertices_settled: usize, edges_relaxed: usize) -> RunStatistics {
    RunStatistics {
        vertices_settled,
        edges_relaxed,
    }
}

#[test]
fn test_triangle_prefers_two_hop_path() {
    let graph = triangle();

    for strategy in Strategy::ALL {
        let run = strategy.run(&graph, 0).unwrap();
        assert_eq!(run.distances(), &[Finite(0), Finite(1), Finite(3)], "{}", strategy);
        assert_eq!(run.source(), 0);
        assert_eq!(run.strategy(), strategy);
    }
}

#[test]
fn test_triangle_counters_per_strategy() {
    let graph = triangle();

    // one round per vertex
    assert_eq!(run_array_scan(&graph, 0).unwrap().statistics(), stats(3, 3));
    // the stale (2, 5) entry is popped and counted
    assert_eq!(run_lazy_queue(&graph, 0).unwrap().statistics(), stats(4, 3));
    // three seeds plus three re-insertions
    assert_eq!(run_eager_queue(&graph, 0).unwrap().statistics(), stats(6, 3));
}

#[test]
fn test_run_splits_into_distances_and_statistics() {
    let (distances, statistics) = run_array_scan(&triangle(), 0).unwrap().into_parts();

    assert_eq!(distances, vec![Finite(0), Finite(1), Finite(3)]);
    assert_eq!(statistics, stats(3, 3));
}

#[test]
fn test_report_lists_counters_and_distances() {
    let graph = DirectedGraph::from_edges(2, vec![(0, 1, 6u64)]).unwrap();
    let comparison = StrategyComparison::run(&graph, 1).unwrap();

    let mut out = Vec::new();
    write_run(&comparison.runs()[0], &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "Total number of vertices visited: 2\nTotal number of edges visited: 0\ndist0: Infinity\ndist1: 0\n"
    );
    assert_eq!(format_distances(comparison.runs()[2].distances()), "[Infinity, 0]");
    assert!(comparison.get(Strategy::LazyQueue).is_some());
}

#[test]
fn test_single_isolated_vertex() {
    let graph: DirectedGraph<u64> = DirectedGraph::isolated(1);

    for strategy in Strategy::ALL {
        let run = strategy.run(&graph, 0).unwrap();
        assert_eq!(run.distances(), &[Finite(0)]);
        assert_eq!(run.statistics(), stats(1, 0), "{}", strategy);
    }
}

#[test]
fn test_disconnected_pair_stays_infinite() {
    let graph: DirectedGraph<u64> = DirectedGraph::isolated(2);

    for strategy in Strategy::ALL {
        let run = strategy.run(&graph, 0).unwrap();
        assert_eq!(run.distances(), &[Finite(0), Infinite]);
        assert_eq!(run.reachable_count(), 1);
        assert_eq!(run.statistics().edges_relaxed, 0);
    }

    // the empty second round still counts
    assert_eq!(run_array_scan(&graph, 0).unwrap().statistics(), stats(2, 0));
    assert_eq!(run_lazy_queue(&graph, 0).unwrap().statistics(), stats(1, 0));
    assert_eq!(run_eager_queue(&graph, 0).unwrap().statistics(), stats(2, 0));
}

#[test]
fn test_visited_sets() {
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, 4u64)]).unwrap();

    let array_scan = run_array_scan(&graph, 0).unwrap();
    assert_eq!(array_scan.visited(), Some(&[true, true, false][..]));

    // every vertex is seeded, so every vertex gets popped
    let eager = run_eager_queue(&graph, 0).unwrap();
    assert_eq!(eager.visited(), Some(&[true, true, true][..]));

    let lazy = run_lazy_queue(&graph, 0).unwrap();
    assert_eq!(lazy.visited(), None);
}

#[test]
fn test_source_out_of_range() {
    let graph = triangle();

    for strategy in Strategy::ALL {
        let err = strategy.run(&graph, 3).unwrap_err();
        assert!(
            matches!(err, Error::OutOfRange { vertex: 3, vertex_count: 3 }),
            "{}: {:?}",
            strategy,
            err
        );
    }

    let empty: DirectedGraph<u64> = DirectedGraph::isolated(0);
    assert!(matches!(run_lazy_queue(&empty, 0), Err(Error::OutOfRange { .. })));
}

#[test]
fn test_unreachable_vertices_remain_infinite() {
    // 2 and 3 only point back into the reachable part
    let graph = DirectedGraph::from_edges(
        4,
        vec![(0, 1, 2u64), (2, 0, 1), (3, 1, 1), (3, 2, 1)],
    )
    .unwrap();

    for strategy in Strategy::ALL {
        let run = strategy.run(&graph, 0).unwrap();
        assert_eq!(run.distances(), &[Finite(0), Finite(2), Infinite, Infinite]);
    }
}

#[test]
fn test_non_zero_source() {
    let graph = triangle();

    for strategy in Strategy::ALL {
        let run = strategy.run(&graph, 1).unwrap();
        assert_eq!(run.distances(), &[Infinite, Finite(0), Finite(2)]);
    }
}

#[test]
fn test_zero_weight_cycles() {
    let graph = DirectedGraph::from_edges(
        4,
        vec![(0, 1, 0u64), (1, 2, 0), (2, 1, 0), (2, 3, 7), (1, 3, 9)],
    )
    .unwrap();

    for strategy in Strategy::ALL {
        let run = strategy.run(&graph, 0).unwrap();
        assert_eq!(run.distances(), &[Finite(0), Finite(0), Finite(0), Finite(7)]);
    }
}

#[test]
fn test_shortcut_chain_counters() {
    let n = 10;
    let graph = generate_shortcut_chain(n);

    let array_scan = run_array_scan(&graph, 0).unwrap();
    let lazy = run_lazy_queue(&graph, 0).unwrap();
    let eager = run_eager_queue(&graph, 0).unwrap();

    let expected: Vec<Distance<u64>> = (0..n as u64).map(Finite).collect();
    assert_eq!(array_scan.distances(), expected.as_slice());
    assert_eq!(lazy.distances(), expected.as_slice());
    assert_eq!(eager.distances(), expected.as_slice());

    // n - 1 chain edges and n - 2 shortcuts each improve a distance once
    assert_eq!(array_scan.statistics(), stats(n, 2 * n - 3));
    // every stale shortcut entry is popped once more
    assert_eq!(lazy.statistics(), stats(2 * n - 2, 2 * n - 3));
    assert_eq!(eager.statistics(), stats(n + 2 * n - 3, 2 * n - 3));
}

#[test]
fn test_queue_pops_match_pushes() {
    for seed in 0..10 {
        let graph = generate_random(150, 3, 40, seed);
        let n = graph.vertex_count();

        let lazy = run_lazy_queue(&graph, 0).unwrap().statistics();
        let eager = run_eager_queue(&graph, 0).unwrap().statistics();

        // every pushed entry is eventually popped
        assert_eq!(lazy.vertices_settled, 1 + lazy.edges_relaxed);
        assert_eq!(eager.vertices_settled, n + eager.edges_relaxed);
    }
}

#[test]
fn test_strategies_agree_on_random_graphs() {
    for seed in 0..20 {
        let graph = generate_random(200, 3, 50, seed);

        for source in [0, 17, 199] {
            let expected = reference_distances(&graph, source);
            let comparison = StrategyComparison::run(&graph, source).unwrap();

            assert!(comparison.distances_agree(), "seed {} source {}", seed, source);
            assert!(comparison.disagreements().is_empty());
            for run in comparison.runs() {
                assert_eq!(run.distances(), expected.as_slice(), "{} seed {}", run.strategy(), seed);
                assert_eq!(run.distance(source), Some(Finite(0)));
            }
        }
    }
}

#[test]
fn test_strategies_agree_on_grids() {
    let graph = generate_grid(12, 9, 9, 42);
    let expected = reference_distances(&graph, 0);

    for strategy in Strategy::ALL {
        let run = strategy.compute_distances(&graph, 0).unwrap();
        assert_eq!(run.distances(), expected.as_slice());
        assert_eq!(run.reachable_count(), graph.vertex_count());
    }
}

#[test]
fn test_parallel_comparison_matches_sequential() {
    let graph = generate_random(300, 4, 100, 7);

    let sequential = StrategyComparison::run(&graph, 5).unwrap();
    let parallel = StrategyComparison::run_parallel(&graph, 5).unwrap();

    assert_eq!(sequential.runs(), parallel.runs());
}

#[test]
fn test_runs_are_repeatable() {
    let graph = generate_random(100, 3, 20, 99);

    for strategy in Strategy::ALL {
        let first = strategy.run(&graph, 3).unwrap();
        let second = strategy.run(&graph, 3).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_small_weight_type_overflow_is_unreachable() {
    // 200 + 100 does not fit in u8
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, 200u8), (1, 2, 100)]).unwrap();

    for strategy in Strategy::ALL {
        let run = strategy.run(&graph, 0).unwrap();
        assert_eq!(run.distances(), &[Finite(0), Finite(200), Infinite]);
    }
}

#[test]
fn test_strategy_names_round_trip() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
    }
    assert_eq!("dijkstra1".parse::<Strategy>().unwrap(), Strategy::ArrayScan);
    assert_eq!("Lazy_Queue".parse::<Strategy>().unwrap(), Strategy::LazyQueue);
    assert!("bellman-ford".parse::<Strategy>().is_err());
}
