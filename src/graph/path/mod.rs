//! Path search: back links, search strategies and sequence building.
//!
//! A search walks the graph from a set of start vertices and records each
//! reached vertex as a [`BackLink`]. The strategy decides the order of the
//! walk; the [`SequenceBuilder`] turns the goal's back link into the
//! sequence the caller asked for.

pub mod algo;
pub mod backlink;
pub mod builder;
pub mod sequence;

pub use algo::{ArbitraryArcPathSearch, ArcPathSearchAlgo, ShortestArcPathSearch, UniqueArcPathSearch};
pub use backlink::{Ancestors, BackLink};
pub use builder::{SequenceBuilder, VertexArcs, VertexArcsFn, VertexCostFn};
pub use sequence::PathSequence;
