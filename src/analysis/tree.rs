//! Arena-based sequence tree.
//!
//! Folds move sequences into a shared-prefix tree. Nodes live in a flat
//! `Vec<SequenceNode>` and refer to each other by `NodeId`; the parent link
//! is a plain index used for lookups, never for ownership.
//!
//! The root is a sentinel at depth -1 with no move. A node at even depth
//! holds a move by player 0, odd depth by player 1.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, PlayerId};

/// Index into the `SequenceTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the sequence tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequenceNode {
    /// The card played to reach this node (`None` for the root).
    pub card: Option<Card>,

    /// Ply index: 0 for the opening move, -1 for the root.
    pub depth: i32,

    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// Children in insertion order. No two share a card.
    pub children: SmallVec<[NodeId; 4]>,
}

impl SequenceNode {
    fn root() -> Self {
        Self {
            card: None,
            depth: -1,
            parent: NodeId::NONE,
            children: SmallVec::new(),
        }
    }

    /// Check if this is the root sentinel.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.depth < 0
    }

    /// Check if this node ends at least one sequence and has no continuation.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The player who made this node's move (`None` for the root).
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        if self.is_root() {
            None
        } else {
            Some(PlayerId::new((self.depth % 2) as u8))
        }
    }
}

/// Shared-prefix tree of move sequences.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequenceTree {
    nodes: Vec<SequenceNode>,
    root: NodeId,
}

impl Default for SequenceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceTree {
    /// Create a tree holding only the root sentinel.
    pub fn new() -> Self {
        Self {
            nodes: vec![SequenceNode::root()],
            root: NodeId::new(0),
        }
    }

    /// Build a tree from a set of sequences, inserted in order.
    pub fn from_sequences<'a, I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = &'a [Card]>,
    {
        let mut tree = Self::new();
        for sequence in sequences {
            tree.insert(sequence);
        }
        log::debug!("built sequence tree with {} nodes", tree.len());
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SequenceNode {
        &self.nodes[id.0 as usize]
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The child of `parent` reached by `card`, if any.
    #[must_use]
    pub fn child(&self, parent: NodeId, card: Card) -> Option<NodeId> {
        self.get(parent)
            .children
            .iter()
            .copied()
            .find(|&child| self.get(child).card == Some(card))
    }

    /// Insert a sequence, reusing existing prefix nodes.
    ///
    /// Returns the node for the sequence's last move (the root for an empty
    /// sequence).
    pub fn insert(&mut self, sequence: &[Card]) -> NodeId {
        let mut node = self.root;
        for &card in sequence {
            node = match self.child(node, card) {
                Some(child) => child,
                None => self.alloc_child(node, card),
            };
        }
        node
    }

    fn alloc_child(&mut self, parent: NodeId, card: Card) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        let depth = self.get(parent).depth + 1;
        self.nodes.push(SequenceNode {
            card: Some(card),
            depth,
            parent,
            children: SmallVec::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    /// Moves from the root down to `node`, recovered through parent links.
    #[must_use]
    pub fn path(&self, node: NodeId) -> Vec<Card> {
        let mut path = Vec::new();
        let mut current = node;
        while !current.is_none() {
            let n = self.get(current);
            if let Some(card) = n.card {
                path.push(card);
            }
            current = n.parent;
        }
        path.reverse();
        path
    }

    /// All node IDs in pre-order: each node before its children, children
    /// in insertion order.
    #[must_use]
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.get(id).children.iter().rev().copied());
        }
        order
    }

    /// Iterate over leaf node IDs in arena order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, node)| node.is_leaf() && !node.is_root())
            .map(|(id, _)| id)
    }

    /// Iterate over all nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SequenceNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0) as usize,
            leaf_count: self.leaves().count(),
        }
    }
}

/// Statistics about a sequence tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes, root included.
    pub node_count: usize,

    /// Length of the longest root-to-leaf path in moves.
    pub max_depth: usize,

    /// Number of leaves.
    pub leaf_count: usize,
}
