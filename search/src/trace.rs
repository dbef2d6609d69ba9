//! `SearchTrace`: structural audit artifact of one search run.
//!
//! The trace records the node graph shape (ids, parent links, depths), the
//! aggregate counters, and the termination reason, but never the state values,
//! so no serialization bound leaks onto the caller's state type. Canonical
//! JSON bytes and a domain-prefixed digest make run-to-run determinism
//! directly checkable.

use sha2::{Digest, Sha256};

use crate::node::NodeArena;

/// Domain prefix for trace digests.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"STATEWALK::SEARCH_TRACE::V1\0";

/// The complete audit trail of a search run.
#[derive(Debug, Clone)]
pub struct SearchTrace {
    /// Per-node structural summaries, sorted by `node_id` ascending.
    pub node_summaries: Vec<NodeSummary>,
    /// Aggregate counters and the termination reason.
    pub metadata: TraceMetadata,
}

/// Structural summary of one created node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub node_id: u64,
    /// `None` for the root.
    pub parent_id: Option<u64>,
    pub depth: u32,
    /// True for the accepted node, if any.
    pub is_goal: bool,
}

/// Aggregate run metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceMetadata {
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Frontier pops that ran an expansion.
    pub nodes_expanded: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
    /// Why the run stopped.
    pub termination_reason: TerminationReason,
    /// Node ids of the accepted path, root first. `None` unless a goal was
    /// reached.
    pub path_node_ids: Option<Vec<u64>>,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// A created node satisfied the acceptance predicate.
    GoalReached { node_id: u64 },
    /// Frontier emptied without any acceptance: the not-found outcome.
    FrontierExhausted,
    /// The `max_nodes` budget was hit before any acceptance.
    NodeBudgetExceeded,
    /// A cancellation token fired.
    Cancelled,
}

impl SearchTrace {
    /// Build the trace for a finished run.
    ///
    /// Summaries are emitted in arena order, which is `node_id` ascending by
    /// construction.
    #[must_use]
    pub fn from_run<S>(
        arena: &NodeArena<S>,
        nodes_expanded: u64,
        frontier_high_water: u64,
        termination_reason: TerminationReason,
    ) -> Self {
        let goal_id = match &termination_reason {
            TerminationReason::GoalReached { node_id } => Some(*node_id),
            _ => None,
        };
        let node_summaries = (0..arena.len())
            .map(|id| {
                let node = arena.get(id);
                NodeSummary {
                    node_id: id as u64,
                    parent_id: node.predecessor.map(|p| p as u64),
                    depth: node.depth,
                    is_goal: goal_id == Some(id as u64),
                }
            })
            .collect();
        let path_node_ids = goal_id.map(|id| {
            arena
                .path_ids(id as usize)
                .into_iter()
                .map(|p| p as u64)
                .collect()
        });

        Self {
            node_summaries,
            metadata: TraceMetadata {
                nodes_created: arena.len() as u64,
                nodes_expanded,
                frontier_high_water,
                termination_reason,
                path_node_ids,
            },
        }
    }

    /// Serialize the trace to canonical JSON bytes.
    ///
    /// `serde_json` maps are key-sorted, so equal traces always produce
    /// byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Hex digest of the canonical bytes under the trace domain prefix.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_TRACE);
        hasher.update(self.to_canonical_json_bytes()?);
        Ok(hex::encode(hasher.finalize()))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
    })
}

fn metadata_to_json(m: &TraceMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "nodes_created": m.nodes_created,
        "nodes_expanded": m.nodes_expanded,
        "path_node_ids": m.path_node_ids,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => {
            serde_json::json!({"type": "frontier_exhausted"})
        }
        TerminationReason::NodeBudgetExceeded => {
            serde_json::json!({"type": "node_budget_exceeded"})
        }
        TerminationReason::Cancelled => {
            serde_json::json!({"type": "cancelled"})
        }
    }
}
