//! Shared helpers for the statewalk benchmark suites.

#![forbid(unsafe_code)]

use statewalk_search::contract::FnSpace;
use statewalk_search::node::NodeRef;

/// Label of the deepest-rightmost node of a ternary heap layout rooted at 0.
///
/// Searching for it forces the engine to materialize every node of the first
/// `depth` levels, which makes tree benchmarks comparable across runs.
#[must_use]
pub fn ternary_rightmost(depth: u32) -> u64 {
    let mut goal = 0u64;
    for _ in 0..depth {
        goal = goal * 3 + 3;
    }
    goal
}

/// Ternary-tree state space over heap labels, accepting `goal`.
#[must_use]
pub fn ternary_space(
    goal: u64,
) -> FnSpace<u64, impl FnMut(&NodeRef<'_, u64>) -> Vec<u64>, impl FnMut(&NodeRef<'_, u64>) -> bool>
{
    FnSpace::new(
        |node: &NodeRef<'_, u64>| {
            let n = *node.state();
            vec![n * 3 + 1, n * 3 + 2, n * 3 + 3]
        },
        move |node: &NodeRef<'_, u64>| *node.state() == goal,
    )
}

/// Linear-chain state space, accepting `goal`.
#[must_use]
pub fn chain_space(
    goal: u64,
) -> FnSpace<u64, impl FnMut(&NodeRef<'_, u64>) -> Vec<u64>, impl FnMut(&NodeRef<'_, u64>) -> bool>
{
    FnSpace::new(
        |node: &NodeRef<'_, u64>| vec![node.state() + 1],
        move |node: &NodeRef<'_, u64>| *node.state() == goal,
    )
}
