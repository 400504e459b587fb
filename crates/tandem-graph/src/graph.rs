//! The [`Graph`] facade and its transverse pair.
//!
//! Both directions of a graph live in one shared pair: the forward side stores `u -> v`, the
//! transverse side stores `v -> u`, and both index vertices through one registry. A [`Graph`]
//! handle is a reference to the pair plus the side it looks at, so [`Graph::transverse`] is just
//! the same pair seen from the other side. Every mutation updates both sides before returning.

mod adjacency;
mod dfs;
mod registry;
mod side;

use crate::{Error, GraphOptions, Result};
use registry::VertexRegistry;
use rustc_hash::FxHasher;
use side::Side;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Forward,
    Transverse,
}

impl Orientation {
    fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Transverse,
            Self::Transverse => Self::Forward,
        }
    }
}

#[derive(Debug, Clone)]
struct Pair<V> {
    registry: VertexRegistry<V>,
    forward: Side<V>,
    transverse: Side<V>,
}

impl<V> Pair<V>
where
    V: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: VertexRegistry::with_capacity(capacity),
            forward: Side::with_capacity(capacity),
            transverse: Side::with_capacity(capacity),
        }
    }

    /// Returns `(local, mirror)` as seen from `orientation`.
    fn sides(&self, orientation: Orientation) -> (&Side<V>, &Side<V>) {
        match orientation {
            Orientation::Forward => (&self.forward, &self.transverse),
            Orientation::Transverse => (&self.transverse, &self.forward),
        }
    }

    /// Returns `(registry, local, mirror)` as seen from `orientation`.
    fn split_mut(
        &mut self,
        orientation: Orientation,
    ) -> (&mut VertexRegistry<V>, &mut Side<V>, &mut Side<V>) {
        let Self {
            registry,
            forward,
            transverse,
        } = self;
        match orientation {
            Orientation::Forward => (registry, forward, transverse),
            Orientation::Transverse => (registry, transverse, forward),
        }
    }

    fn invalidate(&mut self) {
        self.forward.invalidate();
        self.transverse.invalidate();
    }

    fn add_vertex(&mut self, vertex: &V) -> bool {
        let before = self.registry.len();
        self.registry.index_of(vertex);
        let added = self.registry.len() > before;
        if added {
            self.invalidate();
        }
        added
    }

    fn add_edge(&mut self, orientation: Orientation, from: &V, to: &V) -> bool {
        let (registry, local, mirror) = self.split_mut(orientation);
        let u = registry.index_of(from);
        let v = registry.index_of(to);
        let added = local.adjacency.add_edge(u, v);
        let mirrored = mirror.adjacency.add_edge(v, u);
        debug_assert_eq!(added, mirrored, "transverse adjacency out of sync");
        let changed = added || mirrored;
        if changed {
            self.invalidate();
        }
        changed
    }

    fn remove_edge(&mut self, orientation: Orientation, from: &V, to: &V) -> bool {
        let (registry, local, mirror) = self.split_mut(orientation);
        let (Some(u), Some(v)) = (registry.get(from), registry.get(to)) else {
            return false;
        };
        let removed = local.adjacency.remove_edge(u, v);
        let mirrored = mirror.adjacency.remove_edge(v, u);
        debug_assert_eq!(removed, mirrored, "transverse adjacency out of sync");
        let changed = removed || mirrored;
        if changed {
            self.invalidate();
        }
        changed
    }

    fn remove_vertex(&mut self, orientation: Orientation, vertex: &V) -> Option<Vec<V>> {
        let (registry, local, mirror) = self.split_mut(orientation);
        let idx = registry.get(vertex)?;

        let outgoing = local.adjacency.remove_vertex(idx).unwrap_or_default();
        for &to in &outgoing {
            mirror.adjacency.remove_edge(to, idx);
        }
        // The mirror's outbound set of `vertex` is exactly the local inbound set.
        let incoming = mirror.adjacency.remove_vertex(idx).unwrap_or_default();
        for &from in &incoming {
            local.adjacency.remove_edge(from, idx);
        }
        debug_assert_eq!(local.adjacency.in_degree(idx), 0, "dangling inbound edge");
        debug_assert_eq!(mirror.adjacency.in_degree(idx), 0, "dangling inbound edge");

        let previous = registry.values(outgoing.iter().copied());
        registry.remove(vertex);
        self.invalidate();

        tracing::trace!(
            outgoing = outgoing.len(),
            incoming = incoming.len(),
            "removed vertex"
        );
        Some(previous)
    }

    fn set_edges(
        &mut self,
        orientation: Orientation,
        vertex: &V,
        edges: impl IntoIterator<Item = V>,
    ) -> Vec<V> {
        let previous = self.remove_vertex(orientation, vertex).unwrap_or_default();
        self.add_vertex(vertex);
        for to in edges {
            self.add_edge(orientation, vertex, &to);
        }
        previous
    }

    fn clear(&mut self) {
        tracing::debug!(
            vertices = self.registry.len(),
            edges = self.forward.adjacency.edge_count(),
            "clearing graph"
        );
        self.registry.clear();
        self.forward.clear();
        self.transverse.clear();
    }
}

/// A mutable directed graph over hashable vertex values, paired with its transverse graph.
///
/// `Graph` is a handle: [`Graph::transverse`] returns another handle onto the same pair, and
/// mutations through either handle are visible through both. [`Clone`] deep-copies the pair, so
/// the clone and its own transverse are independent from the original.
///
/// The pair is not safe for concurrent mutation; the handle is neither `Send` nor `Sync`.
pub struct Graph<V> {
    pair: Rc<RefCell<Pair<V>>>,
    orientation: Orientation,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash,
{
    /// Creates an empty graph with default options.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(GraphOptions { capacity })
    }

    /// Like [`Graph::with_capacity`], but accepts a signed hint and rejects negative values.
    pub fn try_with_capacity(capacity: i64) -> Result<Self> {
        GraphOptions::from_capacity_hint(capacity).map(Self::with_options)
    }

    /// Creates an empty graph configured by `options`.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            pair: Rc::new(RefCell::new(Pair::with_capacity(options.capacity))),
            orientation: Orientation::Forward,
        }
    }

    /// Returns the live reverse-edge graph paired with this one.
    pub fn transverse(&self) -> Self {
        Self {
            pair: Rc::clone(&self.pair),
            orientation: self.orientation.flip(),
        }
    }

    /// Returns `true` if `other` is the transverse handle of this graph (not merely equal to it).
    pub fn is_transverse_of(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pair, &other.pair) && self.orientation != other.orientation
    }

    /// Registers `vertex` without edges. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.pair.borrow_mut().add_vertex(&vertex)
    }

    /// Adds `from -> to`, registering both endpoints. Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.pair.borrow_mut().add_edge(self.orientation, &from, &to)
    }

    /// Removes `vertex` with all its edges, then re-adds it with `edges` in iteration order.
    ///
    /// Inbound edges of `vertex` are dropped as well. Returns the previous outbound edges, empty
    /// if there were none.
    pub fn set_edges(&mut self, vertex: V, edges: impl IntoIterator<Item = V>) -> Vec<V> {
        self.pair
            .borrow_mut()
            .set_edges(self.orientation, &vertex, edges)
    }

    /// Removes `vertex` with all its inbound and outbound edges.
    ///
    /// Returns the former outbound edges, or `None` if the vertex was not registered.
    pub fn remove_vertex(&mut self, vertex: &V) -> Option<Vec<V>> {
        self.pair.borrow_mut().remove_vertex(self.orientation, vertex)
    }

    /// Removes `from -> to`. Returns `false` if there was no such edge.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        self.pair.borrow_mut().remove_edge(self.orientation, from, to)
    }

    /// Removes every vertex and edge from both sides of the pair. Allocations are kept.
    pub fn clear(&mut self) {
        self.pair.borrow_mut().clear();
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.with_local(|registry, _| registry.get(vertex).is_some())
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.with_local(|registry, side| match (registry.get(from), registry.get(to)) {
            (Some(u), Some(v)) => side.adjacency.contains(u, v),
            _ => false,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.with_local(|registry, _| registry.len())
    }

    pub fn edge_count(&self) -> usize {
        self.with_local(|_, side| side.adjacency.edge_count())
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Live vertices in index order, which is also the traversal root order.
    ///
    /// A graph and its transverse list vertices in the same order.
    pub fn vertices(&self) -> Vec<V> {
        self.with_local(|registry, _| registry.iter().map(|(_, v)| v.clone()).collect())
    }

    /// Outbound neighbors of `vertex` in insertion order, or `None` if it is not registered.
    pub fn successors(&self, vertex: &V) -> Option<Vec<V>> {
        self.with_local(|registry, side| {
            registry.get(vertex).map(|u| side.targets(registry, u))
        })
    }

    /// Inbound neighbors of `vertex`, read from the transverse side.
    pub fn predecessors(&self, vertex: &V) -> Option<Vec<V>> {
        self.transverse().successors(vertex)
    }

    /// Every edge as `(from, to)`, grouped by source in vertex order.
    pub fn edges(&self) -> Vec<(V, V)> {
        self.with_local(|registry, side| {
            let mut out = Vec::with_capacity(side.adjacency.edge_count());
            for (u, from) in registry.iter() {
                for to in side.targets(registry, u) {
                    out.push((from.clone(), to));
                }
            }
            out
        })
    }

    /// Vertices with no inbound edges.
    pub fn sources(&self) -> Vec<V> {
        self.with_local(|registry, side| {
            registry
                .iter()
                .filter(|&(idx, _)| side.adjacency.in_degree(idx) == 0)
                .map(|(_, v)| v.clone())
                .collect()
        })
    }

    /// Vertices with no outbound edges.
    pub fn sinks(&self) -> Vec<V> {
        self.with_local(|registry, side| {
            registry
                .iter()
                .filter(|&(idx, _)| side.adjacency.out_degree(idx) == 0)
                .map(|(_, v)| v.clone())
                .collect()
        })
    }

    /// Number of edges pointing into `vertex`.
    ///
    /// Fails with [`Error::VertexNotFound`] if the vertex is not registered.
    pub fn in_degree(&self, vertex: &V) -> Result<usize> {
        self.with_local(|registry, side| {
            registry.get(vertex).map(|v| side.adjacency.in_degree(v))
        })
        .ok_or(Error::VertexNotFound)
    }

    /// Number of edges leaving `vertex`.
    ///
    /// Fails with [`Error::VertexNotFound`] if the vertex is not registered.
    pub fn out_degree(&self, vertex: &V) -> Result<usize> {
        self.with_local(|registry, side| {
            registry.get(vertex).map(|u| side.adjacency.out_degree(u))
        })
        .ok_or(Error::VertexNotFound)
    }

    pub fn has_cycle(&self) -> bool {
        self.with_traversal(|result| result.cycle().is_some())
    }

    /// A closed cycle (first and last vertex equal), if one exists.
    ///
    /// The cycle is listed by walking predecessors back from the vertex that closed it, so each
    /// consecutive pair `[x, y]` is the edge `y -> x`. Self-loops are never reported here and do
    /// not prevent a topological order.
    pub fn cycle(&self) -> Option<Vec<V>> {
        self.with_traversal(|result| result.cycle().map(<[V]>::to_vec))
    }

    /// Every vertex in an order where each edge points forward, or `None` if there is a cycle.
    pub fn topological_order(&self) -> Option<Vec<V>> {
        self.with_traversal(|result| result.order().map(<[V]>::to_vec))
    }

    fn with_local<R>(&self, f: impl FnOnce(&VertexRegistry<V>, &Side<V>) -> R) -> R {
        let pair = self.pair.borrow();
        let (local, _) = pair.sides(self.orientation);
        f(&pair.registry, local)
    }

    fn with_traversal<R>(&self, f: impl FnOnce(&dfs::DfsResult<V>) -> R) -> R {
        let mut pair = self.pair.borrow_mut();
        let (registry, local, _) = pair.split_mut(self.orientation);
        f(local.traversal(registry))
    }
}

impl<V> Default for Graph<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Graph<V>
where
    V: Clone,
{
    /// Deep-copies both sides of the pair, cached traversal results included; the clone's
    /// transverse is the copied mirror.
    fn clone(&self) -> Self {
        Self {
            pair: Rc::new(RefCell::new(self.pair.borrow().clone())),
            orientation: self.orientation,
        }
    }
}

impl<V> PartialEq for Graph<V>
where
    V: Clone + Eq + Hash,
{
    /// Same vertex set and, per vertex, the same edge set; edge order is ignored.
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.pair, &other.pair) && self.orientation == other.orientation {
            return true;
        }
        let lhs = self.pair.borrow();
        let rhs = other.pair.borrow();
        let (ra, rb) = (&lhs.registry, &rhs.registry);
        let (a, _) = lhs.sides(self.orientation);
        let (b, _) = rhs.sides(other.orientation);

        if ra.len() != rb.len() || a.adjacency.edge_count() != b.adjacency.edge_count() {
            return false;
        }

        ra.iter().all(|(u, vertex)| {
            let Some(bu) = rb.get(vertex) else {
                return false;
            };
            if a.adjacency.out_degree(u) != b.adjacency.out_degree(bu) {
                return false;
            }
            a.adjacency.targets(u).into_iter().flatten().all(|&t| {
                ra.value(t)
                    .and_then(|to| rb.get(to))
                    .is_some_and(|bt| b.adjacency.contains(bu, bt))
            })
        })
    }
}

impl<V> Eq for Graph<V> where V: Clone + Eq + Hash {}

fn fx_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<V> Hash for Graph<V>
where
    V: Clone + Eq + Hash,
{
    /// Order-independent: insertion order of vertices and edges does not affect the hash.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let pair = self.pair.borrow();
        let registry = &pair.registry;
        let (side, _) = pair.sides(self.orientation);
        let mut total: u64 = 0;
        for (u, vertex) in registry.iter() {
            let edges = side
                .adjacency
                .targets(u)
                .into_iter()
                .flatten()
                .filter_map(|&t| registry.value(t))
                .fold(0u64, |acc, to| acc.wrapping_add(fx_hash(to)));
            total = total.wrapping_add(fx_hash(vertex) ^ edges);
        }
        state.write_usize(registry.len());
        state.write_u64(total);
    }
}

impl<V> fmt::Display for Graph<V>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    /// Renders as `{a=[b, c], b=[]}` in vertex order, edges in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = self.pair.borrow();
        let registry = &pair.registry;
        let (side, _) = pair.sides(self.orientation);
        f.write_str("{")?;
        for (i, (u, vertex)) in registry.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}=[")?;
            for (j, to) in side.targets(registry, u).iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{to}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}

impl<V> fmt::Debug for Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = self.pair.borrow();
        let registry = &pair.registry;
        let (side, _) = pair.sides(self.orientation);
        f.debug_map()
            .entries(
                registry
                    .iter()
                    .map(|(u, vertex)| (vertex, side.targets(registry, u))),
            )
            .finish()
    }
}
