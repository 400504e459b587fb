use std::collections::BTreeSet;
use tandem_graph::Graph;

fn assert_topological(g: &Graph<u32>, order: &[u32]) {
    assert_eq!(order.len(), g.vertex_count());
    let pos = |v: u32| order.iter().position(|&x| x == v).unwrap();
    for (from, to) in g.edges() {
        if from != to {
            assert!(pos(from) < pos(to), "edge {from} -> {to} points backwards");
        }
    }
}

#[test]
fn three_cycle_then_remove_vertex() {
    let mut g: Graph<&str> = Graph::new();
    g.add_edge("A", "B");
    g.add_edge("B", "C");
    g.add_edge("C", "A");

    assert!(g.has_cycle());
    assert_eq!(g.topological_order(), None);
    let cycle = g.cycle().unwrap();
    assert_eq!(cycle.first(), cycle.last());
    assert_eq!(cycle.len(), 4);
    let members: BTreeSet<&str> = cycle.iter().copied().collect();
    assert_eq!(members, BTreeSet::from(["A", "B", "C"]));
    assert_eq!(cycle, vec!["C", "B", "A", "C"]);
    for pair in cycle.windows(2) {
        assert!(g.has_edge(&pair[1], &pair[0]));
    }

    assert_eq!(g.remove_vertex(&"B"), Some(vec!["C"]));
    assert!(!g.has_cycle());
    assert_eq!(g.cycle(), None);
    let order = g.topological_order().unwrap();
    assert_eq!(order, vec!["C", "A"]);
    assert_eq!(g.transverse().out_degree(&"C"), Ok(0));
    assert_eq!(g.transverse().out_degree(&"A"), Ok(1));
    assert!(g.transverse().out_degree(&"B").is_err());
}

#[test]
fn cycle_walks_predecessors_back_from_the_closing_vertex() {
    let mut g: Graph<u32> = Graph::new();
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 0);
    assert_eq!(g.cycle(), Some(vec![2, 1, 0, 2]));
    // The transverse side walks the same loop the other way round.
    assert_eq!(g.transverse().cycle(), Some(vec![1, 2, 0, 1]));
}

#[test]
fn first_back_edge_in_traversal_order_wins() {
    let mut g: Graph<u32> = Graph::new();
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 1);
    g.add_edge(1, 0);
    assert_eq!(g.cycle(), Some(vec![2, 1, 2]));
}

#[test]
fn self_loop_is_not_reported_as_a_cycle() {
    let mut g: Graph<&str> = Graph::new();
    g.add_edge("a", "a");
    g.add_edge("a", "b");
    assert!(!g.has_cycle());
    assert_eq!(g.topological_order(), Some(vec!["a", "b"]));
    assert_eq!(g.in_degree(&"a"), Ok(1));
}

#[test]
fn order_is_reverse_post_order() {
    let mut g: Graph<u32> = Graph::new();
    g.add_edge(0, 1);
    g.add_edge(0, 2);
    g.add_edge(1, 3);
    g.add_edge(2, 3);
    g.add_vertex(4);
    assert_eq!(g.topological_order(), Some(vec![4, 0, 2, 1, 3]));
    assert_eq!(g.transverse().topological_order(), Some(vec![4, 3, 2, 1, 0]));
}

#[test]
fn breaking_and_restoring_a_cycle() {
    let mut g: Graph<u32> = Graph::new();
    for i in 0..10 {
        g.add_edge(i, i + 1);
    }
    assert_topological(&g, &g.topological_order().unwrap());

    g.add_edge(10, 3);
    assert!(g.has_cycle());
    assert!(g.transverse().has_cycle());
    assert_eq!(g.topological_order(), None);

    g.remove_edge(&10, &3);
    assert!(!g.has_cycle());
    assert_topological(&g, &g.topological_order().unwrap());
}

#[test]
fn exactly_one_of_cycle_and_order() {
    let mut g: Graph<u32> = Graph::new();
    let mut state = 7u64;
    for _ in 0..200 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let from = ((state >> 33) % 12) as u32;
        let to = ((state >> 45) % 12) as u32;
        if (state >> 20) % 4 == 0 {
            g.remove_edge(&from, &to);
        } else {
            g.add_edge(from, to);
        }

        let cycle = g.cycle();
        let order = g.topological_order();
        assert_eq!(g.has_cycle(), cycle.is_some());
        assert!(cycle.is_some() != order.is_some());
        if let Some(order) = order {
            assert_topological(&g, &order);
        }
        if let Some(cycle) = cycle {
            assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                assert!(g.has_edge(&pair[1], &pair[0]));
            }
        }
    }
}
