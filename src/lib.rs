//! # `arcpath` - Path Search over Function-Defined Graphs
//!
//! A family of interchangeable graph search algorithms over directed graphs
//! that are supplied only as functions: successor enumeration, arc cost and
//! cost summation. The engine never owns or mutates a graph.
//!
//! ## Key Features
//!
//! - **Three path strategies behind one trait**: breadth-first arbitrary path,
//!   Dijkstra cheapest path, and globally unique path
//! - **Back-link chains**: immutable `Rc`-shared parent links, so memory grows
//!   with the reached vertices, not with path length times frontier size
//! - **Caller-supplied cost algebra**: zero, infinity sentinel and sum are
//!   passed per search and validated on construction
//! - **Sequence building**: vertex, arrow or arc sequences, chained over
//!   waypoints, plus reachability queries
//! - **Iterative Tarjan**: strongly connected components without recursion
//!
//! ## Architecture
//!
//! 1. **Cost algebra** ([`CostAlgebra`]): ordering via `PartialOrd`, a zero, a
//!    positive-infinity sentinel and a sum function.
//! 2. **Back links** ([`BackLink`]): vertex, incoming arrow, cumulative cost,
//!    depth, parent.
//! 3. **Strategies** ([`ArcPathSearchAlgo`]): [`ArbitraryArcPathSearch`],
//!    [`ShortestArcPathSearch`], [`UniqueArcPathSearch`].
//! 4. **Sequence builder** ([`SequenceBuilder`]): a strategy plus the fixed
//!    successor, cost and sum functions.
//! 5. **Components** ([`graph::strongly_connected_components`]).
//!
//! Not finding a path is not an error: searches return `Option`. Only an
//! invalid cost configuration produces a [`SearchError`].
//!
//! ## Example
//!
//! ```rust
//! use arcpath::graph::{AdjacencyGraph, Arc, DirectedGraph};
//! use arcpath::{ArcPathSearchAlgo, CostAlgebra, ShortestArcPathSearch};
//!
//! let graph = AdjacencyGraph::from_arcs([
//!     Arc::new("A", "B", 1u32),
//!     Arc::new("B", "C", 1),
//!     Arc::new("A", "C", 5),
//!     Arc::new("C", "D", 1),
//! ]);
//!
//! let found = ShortestArcPathSearch
//!     .search(
//!         ["A"],
//!         |v| *v == "D",
//!         |v| graph.next_arcs(v).iter().cloned(),
//!         &u32::MAX,
//!         |_, _, cost| *cost,
//!         &CostAlgebra::additive(),
//!     )
//!     .unwrap();
//!
//! let path = found.to_vertex_sequence();
//! assert_eq!(path.items(), &["A", "B", "C", "D"]);
//! assert_eq!(*path.cost(), 3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cost;
pub mod error;
pub mod graph;

pub use cost::{CostAlgebra, SaturatingCost};
pub use error::SearchError;
pub use graph::path::{
    ArbitraryArcPathSearch, ArcPathSearchAlgo, BackLink, PathSequence, SequenceBuilder,
    ShortestArcPathSearch, UniqueArcPathSearch,
};
pub use graph::{Arc, DirectedGraph};

// Search strategies are stateless.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<ArbitraryArcPathSearch>() == 0);
    assert!(mem::size_of::<ShortestArcPathSearch>() == 0);
    assert!(mem::size_of::<UniqueArcPathSearch>() == 0);
};
