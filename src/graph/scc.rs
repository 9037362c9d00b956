//! Strongly connected components (Tarjan), without recursion.
//!
//! The recursive formulation is replaced by an explicit stack of frames. Each
//! frame holds a vertex, the smallest low value folded in from its successors
//! so far, and the iterator over its remaining successors. Depth is bounded
//! only by heap memory, so long chains and large cycles are safe.
//!
//! Per vertex, `low` is the smallest discovery index known to be reachable
//! from the vertex's DFS subtree, itself included. When a vertex's successors
//! are exhausted:
//! - folded minimum < `low`: the vertex belongs to a component whose root is
//!   an ancestor, so the minimum becomes its new `low`
//! - otherwise the vertex is a root: everything above it on the component
//!   stack, itself included, forms one component
//!
//! Emitted vertices get `low = FINALIZED`, which is larger than any discovery
//! index, so they never lower a minimum again.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `strongly_connected_components` | \(O(n + m)\) | One hash lookup per arc |
//!
//! Components come out in reverse topological order of the condensation.
//! Within a component, vertices are listed in reverse discovery order.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::DirectedGraph;

const FINALIZED: usize = usize::MAX;

/// One suspended level of the depth-first search.
struct Frame<V, It> {
    vertex: V,
    min: usize,
    successors: It,
}

/// Computes all strongly connected components.
///
/// Every vertex of `vertices`, and every vertex reachable from them through
/// `next_vertices`, appears in exactly one component. Vertices on no cycle
/// form singleton components.
///
/// ```rust
/// use arcpath::graph::strongly_connected_components;
///
/// // a -> b -> c -> a, plus an isolated d.
/// let next = |v: &char| match v {
///     'a' => vec!['b'],
///     'b' => vec!['c'],
///     'c' => vec!['a'],
///     _ => vec![],
/// };
/// let mut sccs = strongly_connected_components(['a', 'b', 'c', 'd'], next);
/// for scc in &mut sccs {
///     scc.sort_unstable();
/// }
/// sccs.sort();
/// assert_eq!(sccs, vec![vec!['a', 'b', 'c'], vec!['d']]);
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn strongly_connected_components<V, VI, N, I>(vertices: VI, next_vertices: N) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone,
    VI: IntoIterator<Item = V>,
    N: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    let mut sccs = Vec::new();
    let mut low: HashMap<V, usize> = HashMap::new();
    let mut discovered = 0usize;
    let mut stack: Vec<V> = Vec::new();
    let mut frames: Vec<Frame<V, I::IntoIter>> = Vec::new();
    let mut roots = vertices.into_iter();

    loop {
        let next = match frames.last_mut() {
            Some(frame) => frame.successors.next(),
            None => roots.next(),
        };

        match next {
            Some(v) => {
                if let Some(&v_low) = low.get(&v) {
                    if let Some(parent) = frames.last_mut() {
                        parent.min = parent.min.min(v_low);
                    }
                    continue;
                }
                // Descend.
                low.insert(v.clone(), discovered);
                stack.push(v.clone());
                frames.push(Frame {
                    successors: next_vertices(&v).into_iter(),
                    vertex: v,
                    min: discovered,
                });
                discovered += 1;
            }
            None => {
                // Ascend.
                let Some(frame) = frames.pop() else {
                    break;
                };
                let Some(v_low) = low.get_mut(&frame.vertex) else {
                    continue;
                };
                if frame.min < *v_low {
                    *v_low = frame.min;
                } else {
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        let is_root = w == frame.vertex;
                        if let Some(w_low) = low.get_mut(&w) {
                            *w_low = FINALIZED;
                        }
                        component.push(w);
                        if is_root {
                            break;
                        }
                    }
                    sccs.push(component);
                }

                let folded = low.get(&frame.vertex).copied().unwrap_or(FINALIZED);
                if let Some(parent) = frames.last_mut() {
                    parent.min = parent.min.min(folded);
                }
            }
        }
    }

    tracing::debug!(components = sccs.len(), vertices = discovered, "strongly connected components computed");
    sccs
}

/// Computes the strongly connected components of a [`DirectedGraph`].
pub fn strongly_connected_components_of<V, A, G>(graph: &G) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone,
    G: DirectedGraph<V, A> + ?Sized,
{
    strongly_connected_components(graph.vertices().iter().cloned(), |v: &V| {
        graph.next_vertices(v).cloned()
    })
}
