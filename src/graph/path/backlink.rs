//! Back links: the persistent parent-linked records that searches build.
//!
//! Every node the search reaches is recorded as a [`BackLink`] pointing at the
//! node it was reached from. Frontier nodes share their common ancestors
//! through `Rc`, so memory grows with the number of reached vertices rather
//! than with path length times frontier size. Nothing is mutated after
//! construction.
//!
//! A found path is recovered by walking `parent` links from the goal back to
//! the root and reversing. The walk is O(path length) and never touches the
//! search state again.

use core::fmt;
use std::rc::Rc;

use crate::graph::path::sequence::PathSequence;
use crate::graph::Arc;

/// One step of a search tree: a vertex, the arrow it was entered through,
/// and the cumulative cost and depth from its root.
pub struct BackLink<V, A, C> {
    vertex: V,
    entry: Option<Entry<V, A, C>>,
    cost: C,
    depth: usize,
}

/// How a non-root link was entered.
struct Entry<V, A, C> {
    parent: Rc<BackLink<V, A, C>>,
    arrow: A,
}

impl<V, A, C> BackLink<V, A, C> {
    /// Creates a root link. `zero` must be the zero of the cost algebra.
    #[inline]
    pub fn root(vertex: V, zero: C) -> Rc<Self> {
        Rc::new(Self {
            vertex,
            entry: None,
            cost: zero,
            depth: 0,
        })
    }

    /// Creates a link that enters `vertex` from `parent` through `arrow`.
    #[inline]
    pub fn child(parent: &Rc<Self>, vertex: V, arrow: A, cost: C) -> Rc<Self> {
        Rc::new(Self {
            vertex,
            depth: parent.depth + 1,
            entry: Some(Entry {
                parent: Rc::clone(parent),
                arrow,
            }),
            cost,
        })
    }

    /// The vertex this link ends at.
    #[inline]
    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    /// The arrow used to enter the vertex. `None` at a root.
    #[inline]
    pub fn arrow(&self) -> Option<&A> {
        self.entry.as_ref().map(|entry| &entry.arrow)
    }

    /// The link this one was reached from. `None` at a root.
    #[inline]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.entry.as_ref().map(|entry| &entry.parent)
    }

    /// Cumulative cost from the root.
    #[inline]
    pub fn cost(&self) -> &C {
        &self.cost
    }

    /// Number of arcs between this link and its root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` for a root link.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.entry.is_none()
    }

    /// Walks from this link to its root, this link first.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_, V, A, C> {
        Ancestors { next: Some(self) }
    }

    /// The vertices from the root to this link, with the total cost.
    pub fn to_vertex_sequence(&self) -> PathSequence<V, C>
    where
        V: Clone,
        C: Clone,
    {
        self.to_sequence(|link| link.vertex.clone())
    }

    /// Maps every link from the root to this one, with the total cost.
    pub fn to_sequence<T, F>(&self, mut f: F) -> PathSequence<T, C>
    where
        F: FnMut(&Self) -> T,
        C: Clone,
    {
        let mut items: Vec<T> = self.ancestors().map(&mut f).collect();
        items.reverse();
        PathSequence::new(items, self.cost.clone())
    }

    /// Maps every (parent, child) step from the root to this link.
    ///
    /// `f` receives the parent link, the child link and the arrow between
    /// them. A root link yields an empty sequence.
    pub fn to_step_sequence<T, F>(&self, mut f: F) -> PathSequence<T, C>
    where
        F: FnMut(&Self, &Self, &A) -> T,
        C: Clone,
    {
        let mut items = Vec::with_capacity(self.depth);
        let mut child = self;
        while let Some(entry) = &child.entry {
            items.push(f(&entry.parent, child, &entry.arrow));
            child = &*entry.parent;
        }
        items.reverse();
        PathSequence::new(items, self.cost.clone())
    }

    /// The arrows from the root to this link, with the total cost.
    pub fn to_arrow_sequence(&self) -> PathSequence<A, C>
    where
        A: Clone,
        C: Clone,
    {
        self.to_step_sequence(|_, _, arrow| arrow.clone())
    }

    /// The arcs from the root to this link, with the total cost.
    pub fn to_arc_sequence(&self) -> PathSequence<Arc<V, A>, C>
    where
        V: Clone,
        A: Clone,
        C: Clone,
    {
        self.to_step_sequence(|parent, child, arrow| {
            Arc::new(parent.vertex.clone(), child.vertex.clone(), arrow.clone())
        })
    }
}

impl<V, A, C> Drop for BackLink<V, A, C> {
    // Unlink iteratively so long chains cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.entry.take();
        while let Some(entry) = next {
            match Rc::try_unwrap(entry.parent) {
                Ok(mut owned) => next = owned.entry.take(),
                Err(_) => break,
            }
        }
    }
}

impl<V: fmt::Debug, A: fmt::Debug, C: fmt::Debug> fmt::Debug for BackLink<V, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackLink")
            .field("vertex", &self.vertex)
            .field("arrow", &self.arrow())
            .field("cost", &self.cost)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`BackLink::ancestors`].
pub struct Ancestors<'a, V, A, C> {
    next: Option<&'a BackLink<V, A, C>>,
}

impl<'a, V, A, C> Iterator for Ancestors<'a, V, A, C> {
    type Item = &'a BackLink<V, A, C>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.entry.as_ref().map(|entry| &*entry.parent);
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.map_or(0, |link| link.depth + 1);
        (n, Some(n))
    }
}

impl<V, A, C> ExactSizeIterator for Ancestors<'_, V, A, C> {}
