//! Bidirectional mapping between vertex values and dense indices.
//!
//! Indices are handed out by first use starting at 0. Indices released by [`VertexRegistry::remove`]
//! go onto a free list and are reused before the index space grows, so an index may be
//! reassigned to a different vertex after a remove + add cycle.

use rustc_hash::FxBuildHasher;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexRegistry<V> {
    index: HashMap<V, usize>,
    values: Vec<Option<V>>,
    free: Vec<usize>,
}

impl<V> VertexRegistry<V>
where
    V: Clone + Eq + Hash,
{
    pub(in crate::graph) fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            values: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Returns the index of `vertex`, registering it first if needed.
    pub(in crate::graph) fn index_of(&mut self, vertex: &V) -> usize {
        if let Some(&idx) = self.index.get(vertex) {
            return idx;
        }
        let idx = match self.free.pop() {
            Some(idx) => {
                debug_assert!(self.values[idx].is_none(), "free index is still live");
                self.values[idx] = Some(vertex.clone());
                idx
            }
            None => {
                self.values.push(Some(vertex.clone()));
                self.values.len() - 1
            }
        };
        self.index.insert(vertex.clone(), idx);
        idx
    }

    pub(in crate::graph) fn get(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Deregisters `vertex`, returning its former index to the free list.
    pub(in crate::graph) fn remove(&mut self, vertex: &V) -> Option<usize> {
        let idx = self.index.remove(vertex)?;
        self.values[idx] = None;
        self.free.push(idx);
        Some(idx)
    }

    pub(in crate::graph) fn value(&self, idx: usize) -> Option<&V> {
        self.values.get(idx).and_then(Option::as_ref)
    }

    /// Maps live indices back to values, in the given order.
    pub(in crate::graph) fn values(&self, indices: impl IntoIterator<Item = usize>) -> Vec<V> {
        indices
            .into_iter()
            .filter_map(|idx| {
                let value = self.value(idx);
                debug_assert!(value.is_some(), "adjacency references a free index");
                value.cloned()
            })
            .collect()
    }

    pub(in crate::graph) fn len(&self) -> usize {
        self.index.len()
    }

    /// One past the highest index ever handed out.
    pub(in crate::graph) fn bound(&self) -> usize {
        self.values.len()
    }

    /// Live indices in ascending order.
    pub(in crate::graph) fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(idx, v)| v.as_ref().map(|_| idx))
    }

    /// Live `(index, value)` pairs in ascending index order.
    pub(in crate::graph) fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(idx, v)| v.as_ref().map(|v| (idx, v)))
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.index.clear();
        self.values.clear();
        self.free.clear();
    }
}
