//! Visited sets for graph searches.
//!
//! Two flavours of bookkeeping:
//! - [`Visited`]: "add and report whether newly inserted", used by the
//!   breadth-first search. `HashSet` implements it for any hashable vertex;
//!   [`DenseVisited`] is a word-packed bitmap for `usize`-indexed graphs.
//! - [`VisitCounter`]: per-vertex multiplicity, used by the uniqueness search,
//!   which needs to know whether a vertex was reached more than once.

use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// A set that records vertices on first visit.
pub trait Visited<V> {
    /// Returns `true` iff `vertex` was not yet visited, and marks it visited.
    fn try_visit(&mut self, vertex: &V) -> bool;

    /// Returns `true` if `vertex` has been visited.
    fn is_visited(&self, vertex: &V) -> bool;
}

impl<V, S> Visited<V> for HashSet<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn try_visit(&mut self, vertex: &V) -> bool {
        !self.contains(vertex) && self.insert(vertex.clone())
    }

    #[inline]
    fn is_visited(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }
}

impl<T: Visited<V> + ?Sized, V> Visited<V> for &mut T {
    #[inline]
    fn try_visit(&mut self, vertex: &V) -> bool {
        (**self).try_visit(vertex)
    }

    #[inline]
    fn is_visited(&self, vertex: &V) -> bool {
        (**self).is_visited(vertex)
    }
}

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set for `usize` vertices.
///
/// Holds vertices `0..capacity` only. A vertex at or beyond the capacity is
/// never admitted: [`Visited::try_visit`] returns `false` for it, so a search
/// treats it as unreachable.
#[derive(Debug, Clone, Default)]
pub struct DenseVisited {
    words: Vec<u64>,
    capacity: usize,
    len: usize,
}

impl DenseVisited {
    /// Creates a set for vertices `0..bits`.
    pub fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            capacity: bits,
            len: 0,
        }
    }

    /// The exclusive upper bound on admissible vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of visited vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forgets all visits, keeping the allocation.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.len = 0;
    }
}

impl Visited<usize> for DenseVisited {
    #[inline]
    fn try_visit(&mut self, vertex: &usize) -> bool {
        if *vertex >= self.capacity {
            return false;
        }
        let (word, mask) = (vertex / WORD_BITS, 1u64 << (vertex % WORD_BITS));
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.len += 1;
        }
        fresh
    }

    #[inline]
    fn is_visited(&self, vertex: &usize) -> bool {
        self.words
            .get(vertex / WORD_BITS)
            .is_some_and(|w| w & (1u64 << (vertex % WORD_BITS)) != 0)
    }
}

/// Counts how many times each vertex has been reached.
#[derive(Debug, Clone)]
pub struct VisitCounter<V> {
    counts: HashMap<V, usize>,
}

impl<V> Default for VisitCounter<V> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> VisitCounter<V> {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an arrival at `vertex` and returns its new count.
    #[inline]
    pub fn visit(&mut self, vertex: &V) -> usize {
        if let Some(count) = self.counts.get_mut(vertex) {
            *count += 1;
            return *count;
        }
        self.counts.insert(vertex.clone(), 1);
        1
    }

    /// Records `vertex` with count 1 if it was never seen.
    ///
    /// Returns `false` (and leaves the count alone) if it was already present.
    #[inline]
    pub fn visit_once(&mut self, vertex: &V) -> bool {
        if self.counts.contains_key(vertex) {
            return false;
        }
        self.counts.insert(vertex.clone(), 1);
        true
    }

    /// How many times `vertex` has been reached; 0 if never.
    #[inline]
    pub fn count(&self, vertex: &V) -> usize {
        self.counts.get(vertex).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_set_reports_first_visit_only() {
        let mut seen = HashSet::new();
        assert!(seen.try_visit(&"a"));
        assert!(!seen.try_visit(&"a"));
        assert!(seen.is_visited(&"a"));
        assert!(!seen.is_visited(&"b"));
    }

    #[test]
    fn dense_visited_tracks_vertices_below_capacity() {
        let mut seen = DenseVisited::new(200);
        assert_eq!(seen.capacity(), 200);
        assert!(seen.try_visit(&3));
        assert!(seen.try_visit(&199));
        assert!(!seen.try_visit(&199));
        assert!(seen.is_visited(&199));
        assert!(!seen.is_visited(&100));
        assert_eq!(seen.len(), 2);

        seen.clear();
        assert!(seen.is_empty());
        assert!(!seen.is_visited(&3));
    }

    #[test]
    fn dense_visited_refuses_vertices_past_capacity() {
        let mut seen = DenseVisited::new(8);
        // 8..64 share the last word but are still out of range.
        assert!(!seen.try_visit(&8));
        assert!(!seen.try_visit(&200));
        assert!(!seen.try_visit(&usize::MAX));
        assert!(!seen.is_visited(&8));
        assert!(!seen.is_visited(&usize::MAX));
        assert!(seen.is_empty());
        assert_eq!(seen.words.len(), 1);
    }

    #[test]
    fn counter_tracks_multiplicity() {
        let mut counter = VisitCounter::new();
        assert!(counter.visit_once(&'s'));
        assert!(!counter.visit_once(&'s'));
        assert_eq!(counter.count(&'s'), 1);

        assert_eq!(counter.visit(&'x'), 1);
        assert_eq!(counter.visit(&'x'), 2);
        assert_eq!(counter.count(&'x'), 2);
        assert_eq!(counter.count(&'y'), 0);
    }
}
