//! Visit-order lock tests: completeness, breadth-first ordering with
//! yield-order ties, root-first visiting, and run-to-run determinism.

use std::collections::BTreeMap;

use statewalk_lock_tests::{GraphSpace, WordSpace};
use statewalk_search::policy::SearchPolicy;
use statewalk_search::search::search;

fn run_word_search(visited: &mut Vec<(String, u32)>) -> Option<Vec<String>> {
    let mut space = WordSpace::new("ab", "ba");
    let mut observer = |node: &statewalk_search::node::NodeRef<'_, String>| {
        visited.push((node.state().clone(), node.depth()));
    };
    let result = search(
        String::new(),
        &mut space,
        Some(&mut observer),
        &SearchPolicy::default(),
        None,
    )
    .unwrap();
    result.path
}

#[test]
fn visits_follow_level_order_with_yield_ties() {
    let mut visited = Vec::new();
    let path = run_word_search(&mut visited);
    assert_eq!(
        path,
        Some(vec![String::new(), "b".to_string(), "ba".to_string()])
    );

    let states: Vec<&str> = visited.iter().map(|(s, _)| s.as_str()).collect();
    // Level 0, then level 1 in yield order, then level 2 in yield order up to
    // the accepted node. "bb" is never created: acceptance of "ba" stops the
    // run before its sibling is processed.
    assert_eq!(states, vec!["", "a", "b", "aa", "ab", "ba"]);
}

#[test]
fn visit_depths_never_decrease() {
    let mut visited = Vec::new();
    let _ = run_word_search(&mut visited);
    for window in visited.windows(2) {
        assert!(
            window[0].1 <= window[1].1,
            "visit depth decreased from {} to {}",
            window[0].1,
            window[1].1
        );
    }
}

#[test]
fn every_created_node_visited_exactly_once() {
    let mut visited = Vec::new();
    let mut space = GraphSpace::two_routes();
    let mut observer = |node: &statewalk_search::node::NodeRef<'_, &'static str>| {
        visited.push(node.id());
    };
    let result = search(
        "start",
        &mut space,
        Some(&mut observer),
        &SearchPolicy::default(),
        None,
    )
    .unwrap();

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for id in &visited {
        *counts.entry(*id).or_insert(0) += 1;
    }
    assert_eq!(
        counts.len() as u64,
        result.trace.metadata.nodes_created,
        "every created node must be visited"
    );
    assert!(
        counts.values().all(|&n| n == 1),
        "no node may be visited twice"
    );
}

#[test]
fn root_is_visited_first() {
    let mut visited = Vec::new();
    let _ = run_word_search(&mut visited);
    assert_eq!(
        visited.first(),
        Some(&(String::new(), 0)),
        "the initial state is itself part of the discovered sequence"
    );
}

#[test]
fn repeated_runs_are_identical_n10() {
    let mut first_visits = Vec::new();
    let first_path = run_word_search(&mut first_visits);

    for _ in 1..10 {
        let mut visits = Vec::new();
        let path = run_word_search(&mut visits);
        assert_eq!(path, first_path, "path differs across runs");
        assert_eq!(visits, first_visits, "visit sequence differs across runs");
    }
}
