//! Path lock tests: path endpoints, shortest-route selection, not-found
//! semantics, and the no-root-short-circuit quirk.

use statewalk_lock_tests::{ChainSpace, GraphSpace, WordSpace};
use statewalk_search::node::NodeRef;
use statewalk_search::policy::SearchPolicy;
use statewalk_search::search::{breadth_first_search, search};

#[test]
fn word_building_reaches_abc() {
    let path = breadth_first_search(
        String::new(),
        |node: &NodeRef<'_, String>| {
            ["a", "b", "c"]
                .iter()
                .map(|suffix| format!("{}{suffix}", node.state()))
                .collect::<Vec<_>>()
        },
        None,
        |node: &NodeRef<'_, String>| node.state() == "abc",
    );
    assert_eq!(
        path,
        Some(vec![
            String::new(),
            "a".to_string(),
            "ab".to_string(),
            "abc".to_string()
        ])
    );
}

#[test]
fn linear_chain_counts_to_five() {
    let mut space = ChainSpace::to_goal(5);
    let result = search(0u64, &mut space, None, &SearchPolicy::default(), None).unwrap();
    assert_eq!(result.path, Some(vec![0, 1, 2, 3, 4, 5]));
    assert!(result.is_goal_reached());
}

#[test]
fn dead_end_space_is_not_found() {
    let path = breadth_first_search(
        "start",
        |_node: &NodeRef<'_, &str>| Vec::<&str>::new(),
        None,
        |_node: &NodeRef<'_, &str>| true,
    );
    assert_eq!(path, None, "a result is never an empty path");
}

#[test]
fn path_endpoints_are_initial_and_accepted() {
    let mut space = WordSpace::new("ab", "bb");
    let result = search(
        String::new(),
        &mut space,
        None,
        &SearchPolicy::default(),
        None,
    )
    .unwrap();
    let path = result.path.expect("goal is reachable");
    assert_eq!(path.first().map(String::as_str), Some(""));
    assert_eq!(path.last().map(String::as_str), Some("bb"));
    assert!(!path.is_empty());
}

#[test]
fn shortest_route_wins_over_longer_one() {
    let mut space = GraphSpace::two_routes();
    let result = search(
        "start",
        &mut space,
        None,
        &SearchPolicy::default(),
        None,
    )
    .unwrap();
    let path = result.path.expect("goal is reachable");
    assert_eq!(
        path,
        vec!["start", "a1", "a2", "goal"],
        "the 3-edge route must win even though the 5-edge branch is yielded first"
    );
}

#[test]
fn path_edge_count_matches_goal_depth() {
    let mut space = GraphSpace::two_routes();
    let result = search(
        "start",
        &mut space,
        None,
        &SearchPolicy::default(),
        None,
    )
    .unwrap();
    let path_len = result.path.as_ref().map_or(0, Vec::len);
    let goal_summary = result
        .trace
        .node_summaries
        .iter()
        .find(|n| n.is_goal)
        .expect("goal node recorded");
    assert_eq!(path_len as u32, goal_summary.depth + 1);
}

// An accepting initial state is NOT detected before the loop: acceptance is
// only tested on nodes created during expansion. This is locked behavior,
// not a bug.
#[test]
fn accepting_initial_state_is_not_short_circuited() {
    let path = breadth_first_search(
        0u32,
        |_node: &NodeRef<'_, u32>| vec![0u32],
        None,
        |node: &NodeRef<'_, u32>| *node.state() == 0,
    );
    assert_eq!(
        path,
        Some(vec![0, 0]),
        "the root must be expanded, not returned as a trivial one-element path"
    );
}
