//! Directed graphs as seen by the search engine.
//!
//! The engine never owns a graph. It reads one through plain functions:
//! a successor function yielding [`Arc`]s, a cost function, and a sum function.
//! [`DirectedGraph`] is the read-only query surface for callers that do have a
//! graph value, and [`AdjacencyGraph`] is a small implementation of it.
//!
//! Modules:
//! - `basic`: graph values built once from arcs
//! - `path`: back links, path search algorithms and the sequence builder
//! - `scc`: strongly connected components (iterative Tarjan)

pub mod basic;
pub mod path;
pub mod scc;
pub(crate) mod access;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use access::visited::{DenseVisited, VisitCounter, Visited};
pub use basic::AdjacencyGraph;
pub use scc::{strongly_connected_components, strongly_connected_components_of};

/// A directed arc: `start --arrow--> end`.
///
/// The arrow is an opaque label. The engine only passes it through to the
/// cost function and into arrow and arc sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc<V, A> {
    /// The vertex the arc leaves.
    pub start: V,
    /// The vertex the arc enters.
    pub end: V,
    /// The arrow label.
    pub arrow: A,
}

impl<V, A> Arc<V, A> {
    /// Creates an arc.
    #[inline]
    pub const fn new(start: V, end: V, arrow: A) -> Self {
        Self { start, end, arrow }
    }
}

/// Read-only access to a directed graph.
///
/// Successors are returned as slices borrowed from the graph. Closures such as
/// `|v: &V| graph.next_arcs(v).iter().cloned()` therefore satisfy the
/// successor contract of the search algorithms.
pub trait DirectedGraph<V, A> {
    /// All vertices, in a stable order.
    fn vertices(&self) -> &[V];

    /// The outgoing arcs of `vertex`. Unknown vertices have none.
    fn next_arcs(&self, vertex: &V) -> &[Arc<V, A>];

    /// Total number of arcs.
    fn arc_count(&self) -> usize;

    /// Number of vertices.
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// The end vertices of the outgoing arcs of `vertex`.
    #[inline]
    fn next_vertices<'a>(&'a self, vertex: &V) -> NextVertices<'a, V, A> {
        NextVertices {
            arcs: self.next_arcs(vertex).iter(),
        }
    }
}

/// Iterator over the successor vertices of one vertex.
#[derive(Debug, Clone)]
pub struct NextVertices<'a, V, A> {
    arcs: core::slice::Iter<'a, Arc<V, A>>,
}

impl<'a, V, A> Iterator for NextVertices<'a, V, A> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.arcs.next().map(|arc| &arc.end)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.arcs.size_hint()
    }
}

impl<V, A> ExactSizeIterator for NextVertices<'_, V, A> {}
