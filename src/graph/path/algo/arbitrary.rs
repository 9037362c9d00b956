//! Breadth-first search for an arbitrary path.
//!
//! The first dequeued vertex that satisfies the goal wins. BFS order makes the
//! result minimal in arc count from the start set, not in cost. A vertex is
//! marked visited when it is first enqueued within the cost bound and is never
//! expanded again.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::rc::Rc;

use crate::cost::CostAlgebra;
use crate::graph::path::algo::ArcPathSearchAlgo;
use crate::graph::path::backlink::BackLink;
use crate::graph::{Arc, Visited};

/// Breadth-first arbitrary path search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArbitraryArcPathSearch;

impl ArbitraryArcPathSearch {
    /// Creates the strategy.
    pub const fn new() -> Self {
        Self
    }

    /// Like [`ArcPathSearchAlgo::search`], with caller-owned visited bookkeeping.
    ///
    /// Vertices already marked in `visited` are treated as unreachable, which
    /// lets a caller exclude vertices up front or reuse a [`DenseVisited`](crate::graph::DenseVisited).
    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn search_with_visited<V, A, C, I, G, N, NI, F, S, W>(
        &self,
        start_vertices: I,
        goal: G,
        next_arcs: N,
        visited: &mut W,
        max_cost: &C,
        cost: F,
        algebra: &CostAlgebra<C, S>,
    ) -> Option<Rc<BackLink<V, A, C>>>
    where
        C: Clone + PartialOrd,
        I: IntoIterator<Item = V>,
        G: Fn(&V) -> bool,
        N: Fn(&V) -> NI,
        NI: IntoIterator<Item = Arc<V, A>>,
        F: Fn(&V, &V, &A) -> C,
        S: Fn(&C, &C) -> C,
        W: Visited<V> + ?Sized,
    {
        let mut queue = VecDeque::with_capacity(16);
        for start in start_vertices {
            if visited.try_visit(&start) {
                queue.push_back(BackLink::root(start, algebra.zero().clone()));
            }
        }

        let mut expanded = 0usize;
        while let Some(node) = queue.pop_front() {
            let u = node.vertex();
            if goal(u) {
                tracing::debug!(expanded, depth = node.depth(), "breadth-first search reached goal");
                return Some(node);
            }
            expanded += 1;

            for Arc { end, arrow, .. } in next_arcs(u) {
                if visited.is_visited(&end) {
                    continue;
                }
                let total = algebra.sum(node.cost(), &cost(u, &end, &arrow));
                if algebra.admits(&total, max_cost) && visited.try_visit(&end) {
                    queue.push_back(BackLink::child(&node, end, arrow, total));
                }
            }
        }

        tracing::debug!(expanded, "breadth-first search exhausted");
        None
    }
}

impl<V, A, C> ArcPathSearchAlgo<V, A, C> for ArbitraryArcPathSearch
where
    V: Eq + Hash + Clone,
    C: Clone + PartialOrd,
{
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
        let mut visited = HashSet::new();
        self.search_with_visited(
            start_vertices,
            goal,
            next_arcs,
            &mut visited,
            max_cost,
            cost,
            algebra,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, DenseVisited, DirectedGraph};

    fn diamond() -> AdjacencyGraph<char, u32> {
        // a -> c is direct but expensive; a -> b -> c is cheap.
        AdjacencyGraph::from_arcs([
            Arc::new('a', 'c', 5),
            Arc::new('a', 'b', 1),
            Arc::new('b', 'c', 1),
        ])
    }

    fn run(
        g: &AdjacencyGraph<char, u32>,
        starts: &[char],
        goal: char,
        max: u32,
    ) -> Option<Vec<char>> {
        ArbitraryArcPathSearch
            .search(
                starts.iter().copied(),
                |v| *v == goal,
                |v| g.next_arcs(v).iter().cloned(),
                &max,
                |_, _, w| *w,
                &CostAlgebra::additive(),
            )
            .map(|link| link.to_vertex_sequence().into_parts().0)
    }

    #[test]
    fn prefers_fewest_arcs_over_cost() {
        let g = diamond();
        assert_eq!(run(&g, &['a'], 'c', 100), Some(vec!['a', 'c']));
    }

    #[test]
    fn cost_bound_prunes_arcs() {
        let g = diamond();
        assert_eq!(run(&g, &['a'], 'c', 4), Some(vec!['a', 'b', 'c']));
        assert_eq!(run(&g, &['a'], 'c', 1), None);
    }

    #[test]
    fn start_vertex_satisfying_goal_is_returned() {
        let g = diamond();
        assert_eq!(run(&g, &['b', 'b'], 'b', 0), Some(vec!['b']));
    }

    #[test]
    fn overflowing_totals_do_not_wrap_into_the_bound() {
        let g = AdjacencyGraph::from_arcs([
            Arc::new('a', 'b', u32::MAX - 1),
            Arc::new('b', 'c', 2),
        ]);
        assert_eq!(run(&g, &['a'], 'b', u32::MAX), Some(vec!['a', 'b']));
        assert_eq!(run(&g, &['a'], 'c', u32::MAX), None);
    }

    #[test]
    fn pre_visited_vertices_are_excluded() {
        let g = AdjacencyGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]]);
        let mut visited = DenseVisited::new(4);
        visited.try_visit(&1);
        let found = ArbitraryArcPathSearch
            .search_with_visited(
                [0],
                |v| *v == 3,
                |v| g.next_arcs(v).iter().cloned(),
                &mut visited,
                &usize::MAX,
                |_, _, _| 1usize,
                &CostAlgebra::additive(),
            )
            .unwrap();
        assert_eq!(found.to_vertex_sequence().items(), &[0, 2, 3]);
    }

    #[test]
    fn dense_visited_capacity_bounds_the_search() {
        let g = AdjacencyGraph::from_adjacency(&[vec![1], vec![usize::MAX], vec![]]);
        let mut visited = DenseVisited::new(3);
        let found = ArbitraryArcPathSearch.search_with_visited(
            [0],
            |v| *v == usize::MAX,
            |v| g.next_arcs(v).iter().cloned(),
            &mut visited,
            &usize::MAX,
            |_, _, _| 1usize,
            &CostAlgebra::additive(),
        );
        assert!(found.is_none());
        assert_eq!(visited.len(), 2);
    }
}
