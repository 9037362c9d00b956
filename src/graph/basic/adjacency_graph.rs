//! An immutable adjacency-list directed graph.
//!
//! Vertices are interned into dense indices on construction. Outgoing arcs are
//! stored per vertex in insertion order, so every traversal over this graph is
//! deterministic. There is no mutation API: the graph is built once from arcs
//! and then only queried.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::{Arc, DirectedGraph};

/// A directed graph with vertex type `V` and arrow type `A`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_arcs` | \(O(n + m)\) | One hash lookup per arc endpoint |
/// | `next_arcs` | \(O(1)\) expected | Hash lookup, then a slice borrow |
/// | `vertices` | \(O(1)\) | Insertion-ordered slice |
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, A> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<Arc<V, A>>>,
    arc_count: usize,
}

impl<V, A> Default for AdjacencyGraph<V, A> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            arc_count: 0,
        }
    }
}

impl<V: Eq + Hash + Clone, A> AdjacencyGraph<V, A> {
    /// Builds a graph from arcs. Vertices appear in first-mention order.
    pub fn from_arcs<I>(arcs: I) -> Self
    where
        I: IntoIterator<Item = Arc<V, A>>,
    {
        Self::with_vertices(core::iter::empty(), arcs)
    }

    /// Builds a graph from an explicit vertex list plus arcs.
    ///
    /// Use this for graphs with isolated vertices. Arc endpoints missing from
    /// `vertices` are added after them.
    pub fn with_vertices<VI, AI>(vertices: VI, arcs: AI) -> Self
    where
        VI: IntoIterator<Item = V>,
        AI: IntoIterator<Item = Arc<V, A>>,
    {
        let mut graph = Self::default();
        for v in vertices {
            graph.intern(v);
        }
        for arc in arcs {
            let from = graph.intern(arc.start.clone());
            graph.intern(arc.end.clone());
            graph.adjacency[from].push(arc);
            graph.arc_count += 1;
        }
        graph
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Returns `true` if `vertex` belongs to the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }
}

impl AdjacencyGraph<usize, ()> {
    /// Builds a graph over `0..adjacency.len()` from adjacency lists.
    ///
    /// Neighbor indices beyond the list length become extra vertices.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        let arcs = adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().map(move |&v| Arc::new(u, v, ())));
        Self::with_vertices(0..adjacency.len(), arcs)
    }
}

impl<V: Eq + Hash, A> DirectedGraph<V, A> for AdjacencyGraph<V, A> {
    #[inline]
    fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[inline]
    fn next_arcs(&self, vertex: &V) -> &[Arc<V, A>] {
        match self.index.get(vertex) {
            Some(&idx) => &self.adjacency[idx],
            None => &[],
        }
    }

    #[inline]
    fn arc_count(&self) -> usize {
        self.arc_count
    }
}
