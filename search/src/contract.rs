//! Caller-supplied collaborator seams: state spaces and observers.

use std::marker::PhantomData;

use crate::node::NodeRef;

/// Trait for state spaces that support breadth-first search.
///
/// # Contract
///
/// - `successors` must return a finite list for every call. The engine does
///   not bound the total number of calls, so a space that always yields at
///   least one successor and never reaches a goal grows without bound unless
///   the caller sets a budget.
/// - The returned order is preserved as the creation/visit/test/enqueue order
///   for that expansion step. No reordering, no deduplication.
/// - Neither method is required to be pure; panics propagate unmodified to
///   the caller of the search.
pub trait StateSpace {
    /// The caller-defined state type. Opaque to the engine: no equality,
    /// hashing, or ordering is required of it.
    type State;

    /// Produce the successor states of the given node.
    ///
    /// The node view exposes the wrapped state and its full ancestry.
    fn successors(&mut self, node: &NodeRef<'_, Self::State>) -> Vec<Self::State>;

    /// Test whether the given node's state satisfies the goal.
    ///
    /// Never called for the root node: acceptance is only tested on nodes
    /// created during expansion. Callers needing already-at-goal detection
    /// must check the initial state themselves.
    fn is_goal(&mut self, node: &NodeRef<'_, Self::State>) -> bool;
}

/// Per-node visitor hook.
///
/// Called exactly once for every node created, including the root, before
/// that node's acceptance is tested. Must not mutate state values out from
/// under the engine; the engine holds no copies.
pub trait StateObserver<S> {
    /// Observe a newly created node.
    fn on_node(&mut self, node: &NodeRef<'_, S>);
}

impl<S, F> StateObserver<S> for F
where
    F: FnMut(&NodeRef<'_, S>),
{
    fn on_node(&mut self, node: &NodeRef<'_, S>) {
        self(node);
    }
}

/// [`StateSpace`] built from two closures.
///
/// Backs the closure-style entry point; also usable directly when a full
/// trait implementation would be noise.
pub struct FnSpace<S, E, A> {
    expand: E,
    accept: A,
    _state: PhantomData<fn() -> S>,
}

impl<S, E, A> FnSpace<S, E, A>
where
    E: FnMut(&NodeRef<'_, S>) -> Vec<S>,
    A: FnMut(&NodeRef<'_, S>) -> bool,
{
    /// Pair an expansion closure with an acceptance closure.
    pub fn new(expand: E, accept: A) -> Self {
        Self {
            expand,
            accept,
            _state: PhantomData,
        }
    }
}

impl<S, E, A> StateSpace for FnSpace<S, E, A>
where
    E: FnMut(&NodeRef<'_, S>) -> Vec<S>,
    A: FnMut(&NodeRef<'_, S>) -> bool,
{
    type State = S;

    fn successors(&mut self, node: &NodeRef<'_, S>) -> Vec<S> {
        (self.expand)(node)
    }

    fn is_goal(&mut self, node: &NodeRef<'_, S>) -> bool {
        (self.accept)(node)
    }
}
