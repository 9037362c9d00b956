//! Interchangeable path search algorithms.
//!
//! All three strategies implement [`ArcPathSearchAlgo`]. They read the graph
//! only through the supplied functions and return the [`BackLink`] that ends
//! at a goal vertex, or `None`.
//!
//! | Strategy | Frontier | Result |
//! |----------|----------|--------|
//! | [`ArbitraryArcPathSearch`] | FIFO queue | fewest arcs from the start set |
//! | [`ShortestArcPathSearch`] | priority queue by (cost, depth) | least cost (costs must be non-negative) |
//! | [`UniqueArcPathSearch`] | FIFO queue + visit counts | the only path within the bound, if there is exactly one |

use std::rc::Rc;

use crate::cost::CostAlgebra;
use crate::graph::path::backlink::BackLink;
use crate::graph::Arc;

pub mod arbitrary;
pub mod shortest;
pub mod unique;

pub use arbitrary::ArbitraryArcPathSearch;
pub use shortest::ShortestArcPathSearch;
pub use unique::UniqueArcPathSearch;

/// A search from a set of start vertices to the first vertex accepted by a goal predicate.
///
/// Parameters:
/// - `start_vertices`: roots of the search; duplicates collapse
/// - `goal`: accepts the vertices that end a path
/// - `next_arcs`: the outgoing arcs of a vertex
/// - `max_cost`: the largest admissible path cost (inclusive)
/// - `cost`: the cost of one arc, given `(start, end, arrow)`
/// - `algebra`: zero, positive infinity and the sum function
pub trait ArcPathSearchAlgo<V, A, C> {
    /// Runs the search. `None` means no (or, for [`UniqueArcPathSearch`], no unique) path.
    fn search<I, G, N, NI, F, S>(
        &self,
        start_vertices: I,
        goal: G,
        next_arcs: N,
        max_cost: &C,
        cost: F,
        algebra: &CostAlgebra<C, S>,
    ) -> Option<Rc<BackLink<V, A, C>>>
    where
        I: IntoIterator<Item = V>,
        G: Fn(&V) -> bool,
        N: Fn(&V) -> NI,
        NI: IntoIterator<Item = Arc<V, A>>,
        F: Fn(&V, &V, &A) -> C,
        S: Fn(&C, &C) -> C;
}
