//! Index-based adjacency storage for one side of a [`Graph`](super::Graph).
//!
//! Each slot holds the ordered, deduplicated set of target indices for a vertex. A parallel
//! array counts inbound edges per index.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

pub(in crate::graph) type Targets = IndexSet<usize, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct AdjacencyStore {
    out: Vec<Option<Targets>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl AdjacencyStore {
    pub(in crate::graph) fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            in_degree: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    fn ensure_slot(&mut self, idx: usize) {
        if self.out.len() <= idx {
            self.out.resize_with(idx + 1, || None);
            self.in_degree.resize(idx + 1, 0);
        }
    }

    pub(in crate::graph) fn add_edge(&mut self, u: usize, v: usize) -> bool {
        self.ensure_slot(u.max(v));
        let targets = self.out[u].get_or_insert_with(Targets::default);
        if !targets.insert(v) {
            return false;
        }
        self.in_degree[v] += 1;
        self.edge_count += 1;
        true
    }

    pub(in crate::graph) fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let Some(targets) = self.out.get_mut(u).and_then(Option::as_mut) else {
            return false;
        };
        if !targets.shift_remove(&v) {
            return false;
        }
        if targets.is_empty() {
            self.out[u] = None;
        }
        debug_assert!(self.in_degree[v] > 0, "in-degree underflow");
        self.in_degree[v] -= 1;
        self.edge_count -= 1;
        true
    }

    /// Clears the outbound set of `u`. Inbound edges from other vertices are left alone.
    pub(in crate::graph) fn remove_vertex(&mut self, u: usize) -> Option<Targets> {
        let targets = self.out.get_mut(u)?.take()?;
        for &v in &targets {
            debug_assert!(self.in_degree[v] > 0, "in-degree underflow");
            self.in_degree[v] -= 1;
        }
        self.edge_count -= targets.len();
        Some(targets)
    }

    pub(in crate::graph) fn contains(&self, u: usize, v: usize) -> bool {
        self.targets(u).is_some_and(|t| t.contains(&v))
    }

    pub(in crate::graph) fn targets(&self, u: usize) -> Option<&Targets> {
        self.out.get(u).and_then(Option::as_ref)
    }

    pub(in crate::graph) fn out_degree(&self, u: usize) -> usize {
        self.targets(u).map_or(0, Targets::len)
    }

    pub(in crate::graph) fn in_degree(&self, v: usize) -> usize {
        self.in_degree.get(v).copied().unwrap_or(0)
    }

    pub(in crate::graph) fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.out.clear();
        self.in_degree.clear();
        self.edge_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_edges_are_noops() {
        let mut a = AdjacencyStore::default();
        assert!(a.add_edge(0, 1));
        assert!(!a.add_edge(0, 1));
        assert_eq!(a.in_degree(1), 1);
        assert_eq!(a.out_degree(0), 1);
        assert_eq!(a.edge_count(), 1);
    }

    #[test]
    fn insertion_order_survives_removal() {
        let mut a = AdjacencyStore::default();
        for v in [3, 1, 2, 4] {
            a.add_edge(0, v);
        }
        assert!(a.remove_edge(0, 1));
        assert!(!a.remove_edge(0, 1));
        let targets: Vec<usize> = a.targets(0).into_iter().flatten().copied().collect();
        assert_eq!(targets, vec![3, 2, 4]);
        assert_eq!(a.in_degree(1), 0);
    }

    #[test]
    fn remove_vertex_only_drops_outbound_edges() {
        let mut a = AdjacencyStore::default();
        a.add_edge(0, 1);
        a.add_edge(0, 2);
        a.add_edge(2, 0);

        let removed = a.remove_vertex(0).map(|t| t.into_iter().collect::<Vec<_>>());
        assert_eq!(removed, Some(vec![1, 2]));
        assert_eq!(a.in_degree(1), 0);
        assert_eq!(a.in_degree(2), 0);
        assert_eq!(a.in_degree(0), 1);
        assert!(a.contains(2, 0));
        assert_eq!(a.edge_count(), 1);
        assert_eq!(a.remove_vertex(0), None);
    }
}
