//! Dijkstra search for a cheapest path.
//!
//! The cost function must return values `>= zero` for every arc.
//!
//! Entries leave the queue by lower cost, then shallower depth, then earlier
//! insertion. The depth key keeps the search from wandering along zero-cost
//! arcs, and the insertion key makes ties deterministic. A vertex is
//! re-enqueued only when a strictly cheaper admissible path to it turns up.
//!
//! ### Performance Characteristics
//! | Case | Complexity |
//! |------|------------|
//! | path found | at most \(O(|A| + |V| \log |V|)\) within `max_cost` |
//! | no path | exactly \(O(|A| + |V| \log |V|)\) within `max_cost` |

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::rc::Rc;

use crate::cost::{compare, CostAlgebra};
use crate::graph::path::algo::ArcPathSearchAlgo;
use crate::graph::path::backlink::BackLink;
use crate::graph::Arc;

/// Cheapest path search (Dijkstra).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShortestArcPathSearch;

impl ShortestArcPathSearch {
    /// Creates the strategy.
    pub const fn new() -> Self {
        Self
    }
}

/// A queued back link; the heap pops the smallest (cost, depth, seq) first.
struct Frontier<V, A, C> {
    link: Rc<BackLink<V, A, C>>,
    seq: u64,
}

impl<V, A, C: PartialOrd> Ord for Frontier<V, A, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(other.link.cost(), self.link.cost())
            .then_with(|| other.link.depth().cmp(&self.link.depth()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<V, A, C: PartialOrd> PartialOrd for Frontier<V, A, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, A, C: PartialOrd> PartialEq for Frontier<V, A, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, A, C: PartialOrd> Eq for Frontier<V, A, C> {}

impl<V, A, C> ArcPathSearchAlgo<V, A, C> for ShortestArcPathSearch
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
        let mut queue = BinaryHeap::new();
        // Best known cost per vertex; missing entries are positive infinity.
        let mut best: HashMap<V, C> = HashMap::new();
        let mut seq = 0u64;

        for start in start_vertices {
            if best.insert(start.clone(), algebra.zero().clone()).is_none() {
                let link = BackLink::root(start, algebra.zero().clone());
                queue.push(Frontier { link, seq });
                seq += 1;
            }
        }

        let mut expanded = 0usize;
        while let Some(Frontier { link: node, .. }) = queue.pop() {
            let u = node.vertex();
            if best
                .get(u)
                .is_some_and(|known| compare(known, node.cost()) == Ordering::Less)
            {
                continue;
            }
            if goal(u) {
                tracing::debug!(expanded, depth = node.depth(), "dijkstra search reached goal");
                return Some(node);
            }
            expanded += 1;

            for Arc { end, arrow, .. } in next_arcs(u) {
                let total = algebra.sum(node.cost(), &cost(u, &end, &arrow));
                let known = best.get(&end).unwrap_or(algebra.positive_infinity());
                if total < *known && algebra.admits(&total, max_cost) {
                    best.insert(end.clone(), total.clone());
                    let link = BackLink::child(&node, end, arrow, total);
                    queue.push(Frontier { link, seq });
                    seq += 1;
                }
            }
        }

        tracing::debug!(expanded, "dijkstra search exhausted");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, DirectedGraph};

    fn cheapest(
        g: &AdjacencyGraph<char, u32>,
        start: char,
        goal: char,
        max: u32,
    ) -> Option<(Vec<char>, u32)> {
        ShortestArcPathSearch
            .search(
                [start],
                |v| *v == goal,
                |v| g.next_arcs(v).iter().cloned(),
                &max,
                |_, _, w| *w,
                &CostAlgebra::additive(),
            )
            .map(|link| link.to_vertex_sequence().into_parts())
    }

    #[test]
    fn finds_cheapest_not_shortest() {
        let g = AdjacencyGraph::from_arcs([
            Arc::new('a', 'b', 1),
            Arc::new('b', 'c', 1),
            Arc::new('a', 'c', 5),
            Arc::new('c', 'd', 1),
        ]);
        assert_eq!(cheapest(&g, 'a', 'd', 100), Some((vec!['a', 'b', 'c', 'd'], 3)));
    }

    #[test]
    fn equal_cost_prefers_shallower_path() {
        // a -> b is free, so a -> b -> c and a -> c both cost 1.
        let g = AdjacencyGraph::from_arcs([
            Arc::new('a', 'b', 0),
            Arc::new('b', 'c', 1),
            Arc::new('a', 'c', 1),
        ]);
        assert_eq!(cheapest(&g, 'a', 'c', 10), Some((vec!['a', 'c'], 1)));
    }

    #[test]
    fn bound_is_inclusive() {
        let g = AdjacencyGraph::from_arcs([Arc::new('a', 'b', 4)]);
        assert_eq!(cheapest(&g, 'a', 'b', 4), Some((vec!['a', 'b'], 4)));
        assert_eq!(cheapest(&g, 'a', 'b', 3), None);
    }

    #[test]
    fn cheaper_path_found_later_replaces_earlier() {
        // b is first reached at cost 10, then at cost 3 through c.
        let g = AdjacencyGraph::from_arcs([
            Arc::new('a', 'b', 10),
            Arc::new('a', 'c', 1),
            Arc::new('c', 'b', 2),
            Arc::new('b', 'd', 1),
        ]);
        assert_eq!(cheapest(&g, 'a', 'd', 100), Some((vec!['a', 'c', 'b', 'd'], 4)));
    }

    #[test]
    fn totals_past_the_type_range_are_inadmissible() {
        // a -> b -> c would cost 6e9, which does not fit in a u32.
        let g = AdjacencyGraph::from_arcs([
            Arc::new('a', 'b', 3_000_000_000u32),
            Arc::new('b', 'c', 3_000_000_000),
            Arc::new('a', 'c', 4_000_000_000),
        ]);
        assert_eq!(cheapest(&g, 'a', 'c', u32::MAX), Some((vec!['a', 'c'], 4_000_000_000)));

        let g = AdjacencyGraph::from_arcs([
            Arc::new('a', 'b', 3_000_000_000u32),
            Arc::new('b', 'c', 3_000_000_000),
        ]);
        assert_eq!(cheapest(&g, 'a', 'c', u32::MAX), None);
    }

    #[test]
    fn float_costs_with_infinite_sentinel() {
        let g = AdjacencyGraph::from_arcs([Arc::new(0u8, 1, 0.5f64), Arc::new(1, 2, 0.25)]);
        let algebra = CostAlgebra::with_infinity(f64::INFINITY).unwrap();
        let found = ShortestArcPathSearch
            .search(
                [0u8],
                |v| *v == 2,
                |v| g.next_arcs(v).iter().cloned(),
                &f64::INFINITY,
                |_, _, w| *w,
                &algebra,
            )
            .unwrap();
        assert_eq!(*found.cost(), 0.75);
        assert_eq!(found.depth(), 2);
    }

    #[test]
    fn frontier_orders_by_cost_then_depth_then_insertion() {
        let root = BackLink::root('r', 0u32);
        let deep = BackLink::child(&BackLink::child(&root, 'x', (), 1), 'y', (), 1);
        let shallow = BackLink::child(&root, 'z', (), 1);

        let mut heap = BinaryHeap::new();
        heap.push(Frontier { link: Rc::clone(&deep), seq: 0 });
        heap.push(Frontier { link: Rc::clone(&shallow), seq: 1 });
        heap.push(Frontier { link: BackLink::child(&root, 'w', (), 1), seq: 2 });
        heap.push(Frontier { link: Rc::clone(&root), seq: 3 });

        let order: Vec<char> = std::iter::from_fn(|| heap.pop())
            .map(|f| *f.link.vertex())
            .collect();
        assert_eq!(order, vec!['r', 'z', 'w', 'y']);
    }
}
