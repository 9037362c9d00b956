//! Breadth-first search for a globally unique path.
//!
//! Uniqueness is global up to (inclusive) `max_cost`. Every arrival at a
//! vertex within the bound is counted, and only the first arrival is
//! expanded. A result is returned only when
//! 1. exactly one dequeued vertex satisfies the goal, and
//! 2. no vertex on that goal's back-link chain was reached more than once.
//!
//! The second check runs after the search. A vertex may be reachable twice
//! without lying on the returned chain; that does not make the path ambiguous.
//!
//! "No path" and "more than one path" both come back as `None`.

use std::collections::VecDeque;
use std::hash::Hash;
use std::rc::Rc;

use crate::cost::CostAlgebra;
use crate::graph::path::algo::ArcPathSearchAlgo;
use crate::graph::path::backlink::BackLink;
use crate::graph::{Arc, VisitCounter};

/// Globally unique path search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UniqueArcPathSearch;

impl UniqueArcPathSearch {
    /// Creates the strategy.
    pub const fn new() -> Self {
        Self
    }
}

impl<V, A, C> ArcPathSearchAlgo<V, A, C> for UniqueArcPathSearch
where
    V: Eq + Hash + Clone,
    C: Clone + PartialOrd,
{
    #[tracing::instrument(level = "trace", skip_all)]
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
        S: Fn(&C, &C) -> C,
    {
        let mut queue = VecDeque::with_capacity(16);
        let mut counts = VisitCounter::new();
        for start in start_vertices {
            if counts.visit_once(&start) {
                queue.push_back(BackLink::root(start, algebra.zero().clone()));
            }
        }

        let mut found: Option<Rc<BackLink<V, A, C>>> = None;
        while let Some(node) = queue.pop_front() {
            let u = node.vertex();
            if goal(u) {
                if found.is_some() {
                    tracing::debug!("second goal reached, path is not unique");
                    return None;
                }
                found = Some(Rc::clone(&node));
            }

            for Arc { end, arrow, .. } in next_arcs(u) {
                let total = algebra.sum(node.cost(), &cost(u, &end, &arrow));
                if algebra.admits(&total, max_cost) && counts.visit(&end) == 1 {
                    queue.push_back(BackLink::child(&node, end, arrow, total));
                }
            }
        }

        let found = found?;
        if found
            .ancestors()
            .any(|link| counts.count(link.vertex()) > 1)
        {
            tracing::debug!(depth = found.depth(), "goal chain has a vertex reached twice");
            return None;
        }
        tracing::debug!(depth = found.depth(), "unique path found");
        Some(found)
    }
}
