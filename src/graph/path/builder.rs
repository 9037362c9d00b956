//! The sequence builder: one search strategy plus the fixed search functions.
//!
//! A [`SequenceBuilder`] holds a search strategy, the cost algebra, the
//! successor function and the cost function. Each query runs one search
//! (or one per waypoint leg) and turns the resulting back link into a vertex,
//! arrow or arc sequence with its total cost.
//!
//! ```rust
//! use arcpath::graph::{AdjacencyGraph, Arc, DirectedGraph};
//! use arcpath::{SequenceBuilder, ShortestArcPathSearch};
//!
//! let graph = AdjacencyGraph::from_arcs([
//!     Arc::new('a', 'b', 1u32),
//!     Arc::new('b', 'c', 1),
//!     Arc::new('a', 'c', 5),
//!     Arc::new('c', 'd', 1),
//! ]);
//! let builder = SequenceBuilder::new(
//!     ShortestArcPathSearch,
//!     0,
//!     u32::MAX,
//!     |v: &char| graph.next_arcs(v).iter().cloned(),
//!     |_: &char, _: &char, w: &u32| *w,
//!     |a: &u32, b: &u32| a + b,
//! )
//! .unwrap();
//!
//! let path = builder.find_vertex_sequence_between('a', 'd', &100).unwrap();
//! assert_eq!(path.items(), &['a', 'b', 'c', 'd']);
//! assert_eq!(*path.cost(), 3);
//! ```

use core::fmt::Debug;
use core::marker::PhantomData;
use std::hash::Hash;
use std::rc::Rc;

use num_traits::Zero;

use crate::cost::CostAlgebra;
use crate::error::Result;
use crate::graph::path::algo::ArcPathSearchAlgo;
use crate::graph::path::backlink::BackLink;
use crate::graph::path::sequence::{chain_waypoints, PathSequence};
use crate::graph::Arc;

/// Runs searches with fixed successor, cost and sum functions.
///
/// - `V`, `A`, `C`: vertex, arrow and cost types
/// - `P`: the search strategy
/// - `N`: successor function `Fn(&V) -> impl IntoIterator<Item = Arc<V, A>>`
/// - `F`: arc cost function `Fn(&V, &V, &A) -> C`
/// - `S`: sum function `Fn(&C, &C) -> C`
pub struct SequenceBuilder<V, A, C, P, N, F, S> {
    algo: P,
    algebra: CostAlgebra<C, S>,
    next_arcs: N,
    cost: F,
    _marker: PhantomData<fn(&V) -> A>,
}

impl<V, A, C, P, N, NI, F, S> SequenceBuilder<V, A, C, P, N, F, S>
where
    N: Fn(&V) -> NI,
    NI: IntoIterator<Item = Arc<V, A>>,
    F: Fn(&V, &V, &A) -> C,
    S: Fn(&C, &C) -> C,
{
    /// Creates a builder, validating the cost values.
    ///
    /// # Errors
    /// [`SearchError::InvalidZero`](crate::SearchError::InvalidZero) if `zero` is not zero,
    /// [`SearchError::InfinityBelowZero`](crate::SearchError::InfinityBelowZero) if
    /// `positive_infinity < zero`.
    pub fn new(algo: P, zero: C, positive_infinity: C, next_arcs: N, cost: F, sum: S) -> Result<Self>
    where
        C: Zero + PartialOrd + Debug,
    {
        let algebra = CostAlgebra::new(zero, positive_infinity, sum)?;
        Ok(Self::with_algebra(algo, algebra, next_arcs, cost))
    }

    /// Creates a builder from an already validated cost algebra.
    pub fn with_algebra(algo: P, algebra: CostAlgebra<C, S>, next_arcs: N, cost: F) -> Self {
        Self {
            algo,
            algebra,
            next_arcs,
            cost,
            _marker: PhantomData,
        }
    }
}

impl<V, A, C, P, N, F, S> SequenceBuilder<V, A, C, P, N, F, S> {
    /// The search strategy.
    pub fn algo(&self) -> &P {
        &self.algo
    }

    /// The cost algebra.
    pub fn algebra(&self) -> &CostAlgebra<C, S> {
        &self.algebra
    }
}

/// Successor arcs of one vertex in a vertex-only graph.
///
/// Wraps the successor vertices lazily; each `w` becomes `from --()--> w`.
#[derive(Debug, Clone)]
pub struct VertexArcs<V, I> {
    from: V,
    ends: I,
}

impl<V: Clone, I: Iterator<Item = V>> Iterator for VertexArcs<V, I> {
    type Item = Arc<V, ()>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let end = self.ends.next()?;
        Some(Arc::new(self.from.clone(), end, ()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ends.size_hint()
    }
}

impl<V: Clone, I: ExactSizeIterator<Item = V>> ExactSizeIterator for VertexArcs<V, I> {}

/// Successor function of a vertex-only builder.
pub type VertexArcsFn<'a, V, I> = Box<dyn Fn(&V) -> VertexArcs<V, I> + 'a>;
/// Cost function of a vertex-only builder.
pub type VertexCostFn<'a, V, C> = Box<dyn Fn(&V, &V, &()) -> C + 'a>;

impl<'a, V, C, P, S, I> SequenceBuilder<V, (), C, P, VertexArcsFn<'a, V, I>, VertexCostFn<'a, V, C>, S>
where
    V: Clone + 'a,
    C: 'a,
    I: Iterator<Item = V>,
    S: Fn(&C, &C) -> C,
{
    /// Creates a builder for graphs given as vertex successors without arrow data.
    ///
    /// Every successor `w` of `v` becomes an arc `v --()--> w`, and `cost`
    /// is called as `cost(v, w)`. Both functions may borrow the graph, e.g.
    /// `|v: &V| graph.next_vertices(v).cloned()`.
    pub fn for_vertices<NV, VI, FV>(
        algo: P,
        algebra: CostAlgebra<C, S>,
        next_vertices: NV,
        cost: FV,
    ) -> Self
    where
        NV: Fn(&V) -> VI + 'a,
        VI: IntoIterator<Item = V, IntoIter = I>,
        FV: Fn(&V, &V) -> C + 'a,
    {
        let next_arcs: VertexArcsFn<'a, V, I> = Box::new(move |v: &V| VertexArcs {
            from: v.clone(),
            ends: next_vertices(v).into_iter(),
        });
        let cost: VertexCostFn<'a, V, C> = Box::new(move |u: &V, v: &V, _: &()| cost(u, v));
        Self::with_algebra(algo, algebra, next_arcs, cost)
    }
}

impl<V, A, C, P, N, NI, F, S> SequenceBuilder<V, A, C, P, N, F, S>
where
    V: Eq + Hash + Clone,
    A: Clone,
    C: Clone + PartialOrd,
    P: ArcPathSearchAlgo<V, A, C>,
    N: Fn(&V) -> NI,
    NI: IntoIterator<Item = Arc<V, A>>,
    F: Fn(&V, &V, &A) -> C,
    S: Fn(&C, &C) -> C,
{
    /// Runs the strategy and returns the raw back link of the goal.
    pub fn search<I, G>(&self, start_vertices: I, goal: G, max_cost: &C) -> Option<Rc<BackLink<V, A, C>>>
    where
        I: IntoIterator<Item = V>,
        G: Fn(&V) -> bool,
    {
        self.algo.search(
            start_vertices,
            goal,
            &self.next_arcs,
            max_cost,
            &self.cost,
            &self.algebra,
        )
    }

    /// Finds a vertex sequence from any start vertex to a vertex accepted by `goal`.
    pub fn find_vertex_sequence<I, G>(&self, start_vertices: I, goal: G, max_cost: &C) -> Option<PathSequence<V, C>>
    where
        I: IntoIterator<Item = V>,
        G: Fn(&V) -> bool,
    {
        self.search(start_vertices, goal, max_cost)
            .map(|link| link.to_vertex_sequence())
    }

    /// Finds a vertex sequence from `start` to `goal`.
    pub fn find_vertex_sequence_between(&self, start: V, goal: V, max_cost: &C) -> Option<PathSequence<V, C>> {
        self.find_vertex_sequence([start], |v| *v == goal, max_cost)
    }

    /// Finds an arrow sequence from any start vertex to a vertex accepted by `goal`.
    pub fn find_arrow_sequence<I, G>(&self, start_vertices: I, goal: G, max_cost: &C) -> Option<PathSequence<A, C>>
    where
        I: IntoIterator<Item = V>,
        G: Fn(&V) -> bool,
    {
        self.search(start_vertices, goal, max_cost)
            .map(|link| link.to_arrow_sequence())
    }

    /// Finds an arrow sequence from `start` to `goal`.
    pub fn find_arrow_sequence_between(&self, start: V, goal: V, max_cost: &C) -> Option<PathSequence<A, C>> {
        self.find_arrow_sequence([start], |v| *v == goal, max_cost)
    }

    /// Finds an arc sequence from any start vertex to a vertex accepted by `goal`.
    pub fn find_arc_sequence<I, G>(
        &self,
        start_vertices: I,
        goal: G,
        max_cost: &C,
    ) -> Option<PathSequence<Arc<V, A>, C>>
    where
        I: IntoIterator<Item = V>,
        G: Fn(&V) -> bool,
    {
        self.search(start_vertices, goal, max_cost)
            .map(|link| link.to_arc_sequence())
    }

    /// Finds an arc sequence from `start` to `goal`.
    pub fn find_arc_sequence_between(&self, start: V, goal: V, max_cost: &C) -> Option<PathSequence<Arc<V, A>, C>> {
        self.find_arc_sequence([start], |v| *v == goal, max_cost)
    }

    /// Finds a vertex sequence that visits `waypoints` in order.
    ///
    /// Each leg is searched separately with `max_cost_between_waypoints` as
    /// its bound. The joint vertex between two legs appears once. A single
    /// waypoint yields just that vertex at zero cost.
    pub fn find_vertex_sequence_over_waypoints<W>(
        &self,
        waypoints: W,
        max_cost_between_waypoints: &C,
    ) -> Option<PathSequence<V, C>>
    where
        W: IntoIterator<Item = V>,
    {
        chain_waypoints(
            waypoints,
            &self.algebra,
            |first| vec![first.clone()],
            1,
            |from, to| self.find_vertex_sequence_between(from.clone(), to.clone(), max_cost_between_waypoints),
        )
    }

    /// Finds an arrow sequence that visits `waypoints` in order.
    pub fn find_arrow_sequence_over_waypoints<W>(
        &self,
        waypoints: W,
        max_cost_between_waypoints: &C,
    ) -> Option<PathSequence<A, C>>
    where
        W: IntoIterator<Item = V>,
    {
        chain_waypoints(
            waypoints,
            &self.algebra,
            |_| Vec::new(),
            0,
            |from, to| self.find_arrow_sequence_between(from.clone(), to.clone(), max_cost_between_waypoints),
        )
    }

    /// Finds an arc sequence that visits `waypoints` in order.
    pub fn find_arc_sequence_over_waypoints<W>(
        &self,
        waypoints: W,
        max_cost_between_waypoints: &C,
    ) -> Option<PathSequence<Arc<V, A>, C>>
    where
        W: IntoIterator<Item = V>,
    {
        chain_waypoints(
            waypoints,
            &self.algebra,
            |_| Vec::new(),
            0,
            |from, to| self.find_arc_sequence_between(from.clone(), to.clone(), max_cost_between_waypoints),
        )
    }

    /// Returns `true` if a vertex accepted by `goal` is reachable from any start vertex.
    pub fn is_reachable<I, G>(&self, start_vertices: I, goal: G, max_cost: &C) -> bool
    where
        I: IntoIterator<Item = V>,
        G: Fn(&V) -> bool,
    {
        self.search(start_vertices, goal, max_cost).is_some()
    }

    /// Returns `true` if a vertex accepted by `goal` is reachable from `start`.
    pub fn is_reachable_from<G>(&self, start: V, goal: G, max_cost: &C) -> bool
    where
        G: Fn(&V) -> bool,
    {
        self.is_reachable([start], goal, max_cost)
    }

    /// Returns `true` if `goal` is reachable from `start`.
    pub fn is_reachable_between(&self, start: V, goal: V, max_cost: &C) -> bool {
        self.is_reachable([start], |v| *v == goal, max_cost)
    }

    /// Returns `true` if every leg between consecutive `waypoints` is reachable.
    pub fn is_reachable_over_waypoints<W>(&self, waypoints: W, max_cost_between_waypoints: &C) -> bool
    where
        W: IntoIterator<Item = V>,
    {
        chain_waypoints(
            waypoints,
            &self.algebra,
            |_| Vec::<()>::new(),
            0,
            |from, to| {
                self.search([from.clone()], |v| v == to, max_cost_between_waypoints)
                    .map(|link| PathSequence::new(Vec::new(), link.cost().clone()))
            },
        )
        .is_some()
    }
}
