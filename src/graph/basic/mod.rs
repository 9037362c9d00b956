//! Basic graph implementations.
//!
//! Graph values that are built once and then only queried.

pub mod adjacency_graph;

pub use adjacency_graph::AdjacencyGraph;
