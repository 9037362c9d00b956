//! Randomized checks against petgraph.

use std::collections::{BTreeSet, HashMap};

use arcpath::graph::{strongly_connected_components, AdjacencyGraph, Arc, DirectedGraph};
use arcpath::{
    ArbitraryArcPathSearch, CostAlgebra, SequenceBuilder, ShortestArcPathSearch,
};
use petgraph::algo::{dijkstra, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

const VERTICES: u32 = 12;

fn arcs_strategy() -> impl Strategy<Value = Vec<(u32, u32, u32)>> {
    proptest::collection::vec((0..VERTICES, 0..VERTICES, 0u32..20), 0..48)
}

fn build(arcs: &[(u32, u32, u32)]) -> (AdjacencyGraph<u32, u32>, DiGraph<u32, u32>) {
    let ours = AdjacencyGraph::with_vertices(0..VERTICES, arcs.iter().map(|&(a, b, w)| Arc::new(a, b, w)));
    let mut theirs = DiGraph::new();
    for v in 0..VERTICES {
        theirs.add_node(v);
    }
    for &(a, b, w) in arcs {
        theirs.add_edge(NodeIndex::new(a as usize), NodeIndex::new(b as usize), w);
    }
    (ours, theirs)
}

proptest! {
    #[test]
    fn test_shortest_cost_matches_petgraph(arcs in arcs_strategy(), start in 0..VERTICES, goal in 0..VERTICES) {
        let (ours, theirs) = build(&arcs);
        let expected: HashMap<NodeIndex, u32> =
            dijkstra(&theirs, NodeIndex::new(start as usize), None, |e| *e.weight());

        let builder = SequenceBuilder::with_algebra(
            ShortestArcPathSearch,
            CostAlgebra::additive(),
            |v: &u32| ours.next_arcs(v).iter().cloned(),
            |_: &u32, _: &u32, w: &u32| *w,
        );
        let found = builder.find_arc_sequence_between(start, goal, &u32::MAX);

        match expected.get(&NodeIndex::new(goal as usize)) {
            Some(&cost) => {
                let path = found.expect("petgraph found a path");
                prop_assert_eq!(*path.cost(), cost);
                prop_assert_eq!(path.items().iter().map(|arc| arc.arrow).sum::<u32>(), cost);
                let mut at = start;
                for arc in path.items() {
                    prop_assert_eq!(arc.start, at);
                    prop_assert!(ours.next_arcs(&at).contains(arc));
                    at = arc.end;
                }
                prop_assert_eq!(at, goal);
            }
            None => prop_assert!(found.is_none()),
        }
    }

    #[test]
    fn test_breadth_first_uses_fewest_arcs(arcs in arcs_strategy(), start in 0..VERTICES, goal in 0..VERTICES) {
        let (ours, theirs) = build(&arcs);
        let hops: HashMap<NodeIndex, u32> =
            dijkstra(&theirs, NodeIndex::new(start as usize), None, |_| 1u32);

        let builder = SequenceBuilder::with_algebra(
            ArbitraryArcPathSearch,
            CostAlgebra::additive(),
            |v: &u32| ours.next_arcs(v).iter().cloned(),
            |_: &u32, _: &u32, _: &u32| 1u32,
        );
        let found = builder.find_vertex_sequence_between(start, goal, &u32::MAX);

        match hops.get(&NodeIndex::new(goal as usize)) {
            Some(&count) => {
                let path = found.expect("petgraph reached the goal");
                prop_assert_eq!(path.len() as u32, count + 1);
                prop_assert_eq!(*path.cost(), count);
            }
            None => prop_assert!(found.is_none()),
        }
    }

    #[test]
    fn test_larger_bound_keeps_cheapest_cost(arcs in arcs_strategy(), start in 0..VERTICES, goal in 0..VERTICES, extra in 0u32..50) {
        let (ours, _) = build(&arcs);
        let builder = SequenceBuilder::with_algebra(
            ShortestArcPathSearch,
            CostAlgebra::additive(),
            |v: &u32| ours.next_arcs(v).iter().cloned(),
            |_: &u32, _: &u32, w: &u32| *w,
        );
        if let Some(path) = builder.find_vertex_sequence_between(start, goal, &u32::MAX) {
            let bound = *path.cost();
            let tight = builder.find_vertex_sequence_between(start, goal, &bound);
            let loose = builder.find_vertex_sequence_between(start, goal, &(bound + extra));
            prop_assert_eq!(tight.map(|p| *p.cost()), Some(bound));
            prop_assert_eq!(loose.map(|p| *p.cost()), Some(bound));
            if bound > 0 {
                prop_assert!(builder.find_vertex_sequence_between(start, goal, &(bound - 1)).is_none());
            }
        }
    }

    #[test]
    fn test_scc_partition_matches_petgraph(arcs in arcs_strategy()) {
        let (ours, theirs) = build(&arcs);
        let expected: BTreeSet<BTreeSet<u32>> = tarjan_scc(&theirs)
            .into_iter()
            .map(|scc| scc.into_iter().map(|ix| theirs[ix]).collect())
            .collect();
        let actual: BTreeSet<BTreeSet<u32>> = strongly_connected_components(0..VERTICES, |v: &u32| {
            ours.next_vertices(v).copied().collect::<Vec<_>>()
        })
        .into_iter()
        .map(|scc| scc.into_iter().collect())
        .collect();
        prop_assert_eq!(actual, expected);
    }
}
