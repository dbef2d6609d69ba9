//! FIFO frontier over arena node ids.
//!
//! Strict first-in-first-out extraction is the breadth-first guarantee: every
//! node at graph distance *k* from the root is expanded before any node at
//! distance *k + 1*, with ties broken by enqueue order.

use std::collections::VecDeque;

use crate::node::NodeId;

/// FIFO frontier of discovered-but-not-yet-expanded nodes.
#[derive(Debug)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: u64,
}

impl FifoFrontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            high_water: 0,
        }
    }

    /// Enqueue a node at the tail.
    pub fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Dequeue the head node.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for FifoFrontier {
    fn default() -> Self {
        Self::new()
    }
}
