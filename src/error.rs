//! Error types for search configuration.
//!
//! Only configuration problems are errors. A search that finds nothing is a
//! normal outcome and is reported as `None` by the search APIs.

use thiserror::Error;

/// Raised when a [`CostAlgebra`](crate::CostAlgebra) or a
/// [`SequenceBuilder`](crate::SequenceBuilder) is built from invalid cost values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The value supplied as zero is not numerically zero.
    #[error("zero({zero}) is != 0")]
    InvalidZero {
        /// Debug rendering of the rejected value.
        zero: String,
    },

    /// The positive infinity sentinel compares below zero.
    #[error("positive infinity({positive_infinity}) is < zero({zero})")]
    InfinityBelowZero {
        /// Debug rendering of the rejected sentinel.
        positive_infinity: String,
        /// Debug rendering of the zero it was compared against.
        zero: String,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, SearchError>;
