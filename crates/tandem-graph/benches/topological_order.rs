use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tandem_graph::Graph;

fn layered_dag(layers: usize, width: usize, fanout: usize) -> Graph<u32> {
    let mut g = Graph::with_capacity(layers * width);
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let from = (layer * width + i) as u32;
            for k in 0..fanout {
                let to = ((layer + 1) * width + (i * 7 + k * 3) % width) as u32;
                g.add_edge(from, to);
            }
        }
    }
    g
}

fn bench_topological_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_order");
    for &(layers, width) in &[(16usize, 16usize), (64, 64), (256, 64)] {
        let g = layered_dag(layers, width, 3);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{layers}x{width}")),
            &g,
            |b, g| {
                b.iter_batched(
                    || {
                        // Touch the graph so the cached traversal is dropped.
                        let mut g = g.clone();
                        g.add_vertex(u32::MAX);
                        g
                    },
                    |g| black_box(g.topological_order()),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_remove_vertex(c: &mut Criterion) {
    let g = layered_dag(64, 64, 3);
    c.bench_function("remove_vertex/middle_layer", |b| {
        b.iter_batched(
            || g.clone(),
            |mut g| {
                for v in 32 * 64..33 * 64 {
                    black_box(g.remove_vertex(&v));
                }
                g
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_topological_order, bench_remove_vertex);
criterion_main!(benches);
