//! Combined cycle detection and topological ordering.
//!
//! A single depth-first traversal over every live index either finds a back edge (and reports the
//! cycle it closes) or finishes every vertex, in which case the reverse post-order is a valid
//! topological order. Roots are taken in ascending index order and neighbors in insertion order,
//! so the outcome only depends on the sequence of mutations.
//!
//! The traversal keeps an explicit frame stack instead of recursing, so deep chains do not
//! exhaust the thread stack.

use super::adjacency::AdjacencyStore;
use std::collections::VecDeque;

/// Result of one traversal, expressed in vertex indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::graph) enum Traversal {
    /// Closed predecessor walk against edge direction; first and last entries are equal.
    Cycle(Vec<usize>),
    /// Reverse post-order of every live index.
    Order(Vec<usize>),
}

/// Cached outcome, in vertex values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::graph) enum DfsResult<V> {
    Cycle(Vec<V>),
    Order(Vec<V>),
}

impl<V> DfsResult<V> {
    pub(in crate::graph) fn cycle(&self) -> Option<&[V]> {
        match self {
            Self::Cycle(cycle) => Some(cycle),
            Self::Order(_) => None,
        }
    }

    pub(in crate::graph) fn order(&self) -> Option<&[V]> {
        match self {
            Self::Cycle(_) => None,
            Self::Order(order) => Some(order),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Finished,
}

pub(in crate::graph) fn traverse(
    adjacency: &AdjacencyStore,
    roots: impl IntoIterator<Item = usize>,
    bound: usize,
) -> Traversal {
    let mut marks = vec![Mark::Unvisited; bound];
    let mut edge_to = vec![usize::MAX; bound];
    let mut order: VecDeque<usize> = VecDeque::with_capacity(bound);
    // (vertex, position of the next neighbor to explore)
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in roots {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnStack;
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let (v, pos) = *frame;
            let next = adjacency.targets(v).and_then(|t| t.get_index(pos)).copied();
            let Some(w) = next else {
                marks[v] = Mark::Finished;
                order.push_front(v);
                frames.pop();
                continue;
            };
            frame.1 += 1;

            match marks[w] {
                Mark::Unvisited => {
                    edge_to[w] = v;
                    marks[w] = Mark::OnStack;
                    frames.push((w, 0));
                }
                // Self-loops are not reported as the cycle.
                Mark::OnStack if w != v => {
                    return Traversal::Cycle(close_cycle(&edge_to, v, w));
                }
                Mark::OnStack | Mark::Finished => {}
            }
        }
    }

    Traversal::Order(order.into())
}

/// Walks predecessors from `v` back to `w` and closes the loop: `[v, pred(v), .., w, v]`.
fn close_cycle(edge_to: &[usize], v: usize, w: usize) -> Vec<usize> {
    let mut cycle = Vec::new();
    let mut x = v;
    while x != w {
        cycle.push(x);
        x = edge_to[x];
    }
    cycle.push(w);
    cycle.push(v);
    cycle
}
