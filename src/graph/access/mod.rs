//! Graph accessors and low-level building blocks.
//!
//! Shared bookkeeping for the search algorithms (visited sets, visit
//! counters). The types are re-exported from [`crate::graph`].

pub(crate) mod visited;
