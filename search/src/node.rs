//! Arena-backed search nodes and path reconstruction.
//!
//! Nodes are created forward in time and never mutated; each holds one
//! non-owning index to its predecessor, so the ancestry structure is acyclic
//! by construction and the whole run is freed by dropping the arena.

/// Index of a node within a [`NodeArena`].
pub type NodeId = usize;

/// One discovered state together with its discovery bookkeeping.
///
/// `predecessor` is `None` only for the root node.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// The wrapped state value, immutable once created.
    pub state: S,
    /// Arena index of the node this one was generated from.
    pub predecessor: Option<NodeId>,
    /// Tree depth (root = 0). Equals the edge count of the path to the root.
    pub depth: u32,
}

/// Forward-only arena owning every node created during one search run.
///
/// Node ids are assigned in creation order, so a predecessor id is always
/// strictly smaller than the ids of the nodes generated from it.
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> NodeArena<S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node, deriving its depth from the predecessor.
    ///
    /// # Panics
    ///
    /// Panics if `predecessor` is not an id previously returned by this arena.
    pub fn push(&mut self, state: S, predecessor: Option<NodeId>) -> NodeId {
        let depth = predecessor.map_or(0, |p| self.nodes[p].depth + 1);
        let id = self.nodes.len();
        self.nodes.push(SearchNode {
            state,
            predecessor,
            depth,
        });
        id
    }

    /// Borrow a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id]
    }

    /// Borrowed callback view of a node.
    #[must_use]
    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_, S> {
        NodeRef { arena: self, id }
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids along the predecessor chain from the root to `goal`, inclusive.
    #[must_use]
    pub fn path_ids(&self, goal: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.nodes[goal].depth as usize + 1);
        let mut current = Some(goal);
        while let Some(id) = current {
            ids.push(id);
            current = self.nodes[id].predecessor;
        }
        ids.reverse();
        ids
    }

    /// Consume the arena and move the states along the predecessor chain of
    /// `goal` out in root-to-goal order.
    ///
    /// Ids on the chain are strictly increasing, so a single forward pass over
    /// the arena collects the path without cloning any state.
    #[must_use]
    pub fn into_path(self, goal: NodeId) -> Vec<S> {
        let ids = self.path_ids(goal);
        let mut wanted = ids.iter().copied().peekable();
        let mut path = Vec::with_capacity(ids.len());
        for (id, node) in self.nodes.into_iter().enumerate() {
            if wanted.peek() == Some(&id) {
                path.push(node.state);
                wanted.next();
            }
        }
        path
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of one node, handed to caller-supplied callbacks.
///
/// Exposes the wrapped state and its full ancestry without giving the callback
/// mutable access to the arena.
#[derive(Debug)]
pub struct NodeRef<'a, S> {
    arena: &'a NodeArena<S>,
    id: NodeId,
}

impl<S> Clone for NodeRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NodeRef<'_, S> {}

impl<'a, S> NodeRef<'a, S> {
    /// Arena id of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tree depth of this node (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.arena.get(self.id).depth
    }

    /// The wrapped state.
    #[must_use]
    pub fn state(&self) -> &'a S {
        &self.arena.get(self.id).state
    }

    /// View of the node this one was generated from, or `None` for the root.
    #[must_use]
    pub fn predecessor(&self) -> Option<NodeRef<'a, S>> {
        self.arena.get(self.id).predecessor.map(|id| NodeRef {
            arena: self.arena,
            id,
        })
    }

    /// States along the chain from the root to this node, inclusive.
    ///
    /// The first element is the initial state and the last is this node's
    /// state.
    #[must_use]
    pub fn path_states(&self) -> Vec<&'a S> {
        self.arena
            .path_ids(self.id)
            .into_iter()
            .map(|id| &self.arena.get(id).state)
            .collect()
    }
}
