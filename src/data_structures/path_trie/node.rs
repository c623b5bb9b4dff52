//! Node implementation for the path trie.
//!
//! Nodes live in an arena owned by the trie. Child edges and the parent
//! back-reference are arena indices, so the parent link never owns anything.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Handle to a node in a trie's arena.
///
/// A handle stays valid until the node it names is detached by a removal;
/// after that the slot may be reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node always occupies the first slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Child map keyed by segment.
pub(crate) type Children = HashMap<String, NodeId, FnvBuildHasher>;

/// A node in the path trie.
///
/// Each node represents one segment position. A node whose `value` is `None`
/// is structural: it exists only because other entries pass through it.
#[derive(Debug, Clone)]
pub struct TrieNode<T> {
    /// Segment this node represents (empty for the root)
    pub(crate) key: String,

    /// Payload, `Some` iff a stored path terminates here
    pub(crate) value: Option<T>,

    /// Map of segments to child nodes
    pub(crate) children: Children,

    /// Non-owning back-reference, `None` only for the root
    pub(crate) parent: Option<NodeId>,
}

impl<T> TrieNode<T> {
    /// Creates a structural node for `key` under `parent`.
    pub(crate) fn new(key: String, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value: None,
            children: Children::default(),
            parent,
        }
    }

    /// Creates the root node.
    pub(crate) fn root() -> Self {
        Self::new(String::new(), None)
    }

    /// The segment this node represents.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The payload, if a stored path terminates at this node.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether a stored path terminates at this node.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Parent handle, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Handle of the child for `segment`, if any.
    pub fn child(&self, segment: &str) -> Option<NodeId> {
        self.children.get(segment).copied()
    }

    /// Iterates over `(segment, child)` pairs in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.children.iter().map(|(k, id)| (k.as_str(), *id))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Clears the payload, turning the node structural. Returns the old value.
    pub(crate) fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }
}
