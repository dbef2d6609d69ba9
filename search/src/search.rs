//! Search entry points and the expansion loop.

use crate::contract::{FnSpace, StateObserver, StateSpace};
use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::node::{NodeArena, NodeId, NodeRef};
use crate::policy::{CancelToken, SearchPolicy};
use crate::trace::{SearchTrace, TerminationReason};

/// Result of a search execution.
///
/// Always carries a complete [`SearchTrace`] regardless of how the run
/// terminated. `path` is the first-class not-found signal: `None` means no
/// created node was accepted, never an error and never an empty sequence.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// States from the initial state to the first accepted one, inclusive.
    /// Length is always at least 1 when present.
    pub path: Option<Vec<S>>,
    /// Structural audit trail of the run.
    pub trace: SearchTrace,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.trace.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }
}

/// Run breadth-first search from `initial` over the given state space.
///
/// The observer, when supplied, sees every created node (the root included)
/// exactly once, before that node's acceptance is tested. Acceptance is
/// never tested on the root itself: a space whose goal predicate matches the
/// initial state still gets expanded (see [`StateSpace::is_goal`]).
///
/// Cancellation is cooperative: the token is checked once per dequeued node,
/// so a fired token stops the run before the next expansion, not mid-step.
///
/// # Errors
///
/// Returns [`SearchError::InvalidBudget`] for pre-flight policy validation
/// failures. No trace is produced in this case because no search steps were
/// taken.
pub fn search<SP>(
    initial: SP::State,
    space: &mut SP,
    observer: Option<&mut dyn StateObserver<SP::State>>,
    policy: &SearchPolicy,
    cancel: Option<&CancelToken>,
) -> Result<SearchResult<SP::State>, SearchError>
where
    SP: StateSpace + ?Sized,
{
    policy.validate()?;
    Ok(run(initial, space, observer, policy, cancel))
}

/// Closure-style convenience entry point, unbounded and uncancellable.
///
/// `expand` yields the successor states of a node, `visit` (optional) is
/// called once per created node, and `accept` identifies goal nodes. Returns
/// the path from `initial` through the first accepted state, or `None` if the
/// frontier drained without any acceptance.
pub fn breadth_first_search<S, E, I, A>(
    initial: S,
    mut expand: E,
    visit: Option<&mut dyn FnMut(&NodeRef<'_, S>)>,
    accept: A,
) -> Option<Vec<S>>
where
    E: FnMut(&NodeRef<'_, S>) -> I,
    I: IntoIterator<Item = S>,
    A: FnMut(&NodeRef<'_, S>) -> bool,
{
    let mut space = FnSpace::new(
        move |node: &NodeRef<'_, S>| expand(node).into_iter().collect(),
        accept,
    );
    let policy = SearchPolicy::default();
    let result = match visit {
        Some(mut f) => run(initial, &mut space, Some(&mut f), &policy, None),
        None => run(initial, &mut space, None, &policy, None),
    };
    result.path
}

/// The expansion loop. Policy is assumed validated.
fn run<SP>(
    initial: SP::State,
    space: &mut SP,
    mut observer: Option<&mut dyn StateObserver<SP::State>>,
    policy: &SearchPolicy,
    cancel: Option<&CancelToken>,
) -> SearchResult<SP::State>
where
    SP: StateSpace + ?Sized,
{
    let mut arena = NodeArena::new();
    let mut frontier = FifoFrontier::new();
    let mut nodes_expanded: u64 = 0;
    let mut goal: Option<NodeId> = None;

    let root = arena.push(initial, None);
    if let Some(obs) = observer.as_mut() {
        obs.on_node(&arena.node_ref(root));
    }
    // The root is enqueued untested: acceptance only applies to nodes created
    // during expansion. Already-at-goal detection is the caller's job.
    frontier.push(root);

    let termination_reason = 'run: loop {
        let Some(current) = frontier.pop() else {
            break 'run TerminationReason::FrontierExhausted;
        };
        if let Some(token) = cancel {
            if token.is_cancelled() {
                break 'run TerminationReason::Cancelled;
            }
        }

        let successors = space.successors(&arena.node_ref(current));
        nodes_expanded += 1;
        let child_depth = arena.get(current).depth + 1;

        for state in successors {
            if let Some(max_depth) = policy.max_depth {
                // Over-deep successors are never materialized: no node, no
                // visit, no acceptance test.
                if child_depth > max_depth {
                    continue;
                }
            }
            if let Some(max_nodes) = policy.max_nodes {
                if arena.len() as u64 >= max_nodes {
                    break 'run TerminationReason::NodeBudgetExceeded;
                }
            }

            let child = arena.push(state, Some(current));
            let node = arena.node_ref(child);
            if let Some(obs) = observer.as_mut() {
                obs.on_node(&node);
            }
            if space.is_goal(&node) {
                // Stop immediately: remaining siblings of this expansion step
                // are neither created, visited, nor tested.
                goal = Some(child);
                break 'run TerminationReason::GoalReached {
                    node_id: child as u64,
                };
            }
            frontier.push(child);
        }
    };

    let trace = SearchTrace::from_run(
        &arena,
        nodes_expanded,
        frontier.high_water(),
        termination_reason,
    );
    let path = goal.map(|id| arena.into_path(id));
    SearchResult { path, trace }
}
