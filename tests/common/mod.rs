//! Shared helpers for the integration tests.

use arcpath::graph::{AdjacencyGraph, Arc};

/// Installs a tracing subscriber when `RUST_LOG` is set.
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// A -> B (1), B -> C (1), A -> C (5), C -> D (1).
#[allow(dead_code)]
pub fn abcd() -> AdjacencyGraph<&'static str, u32> {
    AdjacencyGraph::from_arcs([
        Arc::new("A", "B", 1),
        Arc::new("B", "C", 1),
        Arc::new("A", "C", 5),
        Arc::new("C", "D", 1),
    ])
}
