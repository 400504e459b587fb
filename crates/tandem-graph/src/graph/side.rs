//! One half of a transverse pair: adjacency and the cached traversal result.
//!
//! Both halves index vertices through the pair's shared [`VertexRegistry`].

use super::adjacency::AdjacencyStore;
use super::dfs::{self, DfsResult, Traversal};
use super::registry::VertexRegistry;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub(in crate::graph) struct Side<V> {
    pub(in crate::graph) adjacency: AdjacencyStore,
    // `None` means dirty: no traversal since the last structural change.
    dfs: Option<DfsResult<V>>,
}

impl<V> Side<V>
where
    V: Clone + Eq + Hash,
{
    pub(in crate::graph) fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: AdjacencyStore::with_capacity(capacity),
            dfs: None,
        }
    }

    pub(in crate::graph) fn invalidate(&mut self) {
        self.dfs = None;
    }

    #[cfg(test)]
    pub(in crate::graph) fn is_clean(&self) -> bool {
        self.dfs.is_some()
    }

    pub(in crate::graph) fn targets(&self, registry: &VertexRegistry<V>, u: usize) -> Vec<V> {
        registry.values(self.adjacency.targets(u).into_iter().flatten().copied())
    }

    /// Returns the cached traversal result, running the traversal first if the cache is dirty.
    pub(in crate::graph) fn traversal(&mut self, registry: &VertexRegistry<V>) -> &DfsResult<V> {
        let result = match self.dfs.take() {
            Some(result) => result,
            None => self.traverse(registry),
        };
        self.dfs.insert(result)
    }

    fn traverse(&self, registry: &VertexRegistry<V>) -> DfsResult<V> {
        let outcome = dfs::traverse(&self.adjacency, registry.live_indices(), registry.bound());
        match outcome {
            Traversal::Cycle(cycle) => {
                tracing::debug!(
                    vertices = registry.len(),
                    edges = self.adjacency.edge_count(),
                    cycle_len = cycle.len() - 1,
                    "dfs found a cycle"
                );
                DfsResult::Cycle(registry.values(cycle))
            }
            Traversal::Order(order) => {
                tracing::trace!(
                    vertices = registry.len(),
                    edges = self.adjacency.edge_count(),
                    "dfs produced a topological order"
                );
                DfsResult::Order(registry.values(order))
            }
        }
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.adjacency.clear();
        self.dfs = None;
    }
}
