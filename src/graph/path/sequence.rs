//! Search results and waypoint chaining.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cost::CostAlgebra;

/// An ordered sequence of vertices, arrows or arcs together with its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathSequence<T, C> {
    items: Vec<T>,
    cost: C,
}

impl<T, C> PathSequence<T, C> {
    /// Pairs `items` with their total `cost`.
    #[inline]
    pub fn new(items: Vec<T>, cost: C) -> Self {
        Self { items, cost }
    }

    /// The items, in path order.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The total cost.
    #[inline]
    pub fn cost(&self) -> &C {
        &self.cost
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when there are no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits into items and cost.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, C) {
        (self.items, self.cost)
    }
}

impl<T, C> IntoIterator for PathSequence<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Chains per-leg searches over consecutive waypoint pairs.
///
/// `seed` supplies the items for the first waypoint before any leg runs.
/// `overlap` is the number of leading items of each leg that repeat the tail
/// already collected: 1 for vertex sequences, 0 for arrow and arc sequences.
/// Any leg returning `None` fails the whole chain.
pub(crate) fn chain_waypoints<V, T, C, S, W, F>(
    waypoints: W,
    algebra: &CostAlgebra<C, S>,
    seed: impl FnOnce(&V) -> Vec<T>,
    overlap: usize,
    mut leg: F,
) -> Option<PathSequence<T, C>>
where
    W: IntoIterator<Item = V>,
    C: Clone,
    S: Fn(&C, &C) -> C,
    F: FnMut(&V, &V) -> Option<PathSequence<T, C>>,
{
    let mut waypoints = waypoints.into_iter();
    let Some(mut from) = waypoints.next() else {
        return Some(PathSequence::new(Vec::new(), algebra.zero().clone()));
    };
    let mut items = seed(&from);
    let mut cost = algebra.zero().clone();

    for (index, to) in waypoints.enumerate() {
        let Some(part) = leg(&from, &to) else {
            tracing::debug!(leg = index, "waypoint leg unreachable");
            return None;
        };
        let (part_items, part_cost) = part.into_parts();
        items.extend(part_items.into_iter().skip(overlap));
        cost = algebra.sum(&cost, &part_cost);
        from = to;
    }

    Some(PathSequence::new(items, cost))
}
