//! Collection-style adapters over a [`Graph`].
//!
//! The views hold a mutable borrow of the graph and translate set operations into the graph's
//! own mutations, so the transverse side stays in sync. Iteration returns snapshots.

use crate::Graph;
use std::hash::Hash;

/// The live vertex set of a graph. Removing a vertex removes all of its edges.
pub struct VertexSetView<'g, V> {
    graph: &'g mut Graph<V>,
}

impl<'g, V> VertexSetView<'g, V>
where
    V: Clone + Eq + Hash,
{
    pub fn new(graph: &'g mut Graph<V>) -> Self {
        Self { graph }
    }

    pub fn len(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.graph.contains_vertex(vertex)
    }

    pub fn iter(&self) -> impl Iterator<Item = V> {
        self.graph.vertices().into_iter()
    }

    pub fn insert(&mut self, vertex: V) -> bool {
        self.graph.add_vertex(vertex)
    }

    pub fn remove(&mut self, vertex: &V) -> bool {
        self.graph.remove_vertex(vertex).is_some()
    }
}

/// The outbound edge set of one vertex.
///
/// Inserting into the view of an unregistered vertex registers it.
pub struct EdgeSetView<'g, V> {
    graph: &'g mut Graph<V>,
    vertex: V,
}

impl<'g, V> EdgeSetView<'g, V>
where
    V: Clone + Eq + Hash,
{
    pub fn new(graph: &'g mut Graph<V>, vertex: V) -> Self {
        Self { graph, vertex }
    }

    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    pub fn len(&self) -> usize {
        self.graph.out_degree(&self.vertex).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, to: &V) -> bool {
        self.graph.has_edge(&self.vertex, to)
    }

    pub fn iter(&self) -> impl Iterator<Item = V> {
        self.graph
            .successors(&self.vertex)
            .unwrap_or_default()
            .into_iter()
    }

    pub fn insert(&mut self, to: V) -> bool {
        self.graph.add_edge(self.vertex.clone(), to)
    }

    pub fn remove(&mut self, to: &V) -> bool {
        self.graph.remove_edge(&self.vertex, to)
    }

    /// Replaces the whole edge set, returning the previous one. Inbound edges of the vertex are
    /// dropped, as with [`Graph::set_edges`].
    pub fn replace(&mut self, edges: impl IntoIterator<Item = V>) -> Vec<V> {
        self.graph.set_edges(self.vertex.clone(), edges)
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash,
{
    pub fn vertex_set(&mut self) -> VertexSetView<'_, V> {
        VertexSetView::new(self)
    }

    pub fn edge_set(&mut self, vertex: V) -> EdgeSetView<'_, V> {
        EdgeSetView::new(self, vertex)
    }
}
