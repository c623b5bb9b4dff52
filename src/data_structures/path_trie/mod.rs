//! Lanai Path Trie Implementation
//!
//! This module provides a generic string-keyed map organized as a segment
//! trie. Keys are decomposed into segments by a pluggable [`PathSplitter`]
//! (one segment per character by default, or per `/`-separated component for
//! route-like keys), and every segment becomes one edge in the tree.
//!
//! Key features:
//! * Insert-if-absent (`add`) and last-write-wins (`upsert`) insertion
//! * Exact lookup, prefix lookup and full enumeration
//! * Structural nodes: a node can exist as a waypoint without holding a value
//! * Arena-backed nodes with non-owning parent links
//!
//! [`Trie`] is single-threaded. Wrap it in [`SyncTrie`] to share it between
//! threads behind one reader/writer lock.

mod error;
mod node;
mod splitter;
mod sync;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

pub use error::TrieError;
pub use node::{NodeId, TrieNode};
pub use splitter::{CharSplitter, DelimiterSplitter, EmptySegments, PathSplitter};
pub use sync::SyncTrie;

#[cfg(test)]
pub use splitter::MockPathSplitter;

/// Result type for path trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Splitter trait object stored by a trie.
pub type BoxedSplitter = Box<dyn PathSplitter + Send + Sync>;

/// What happens to ancestors when `remove` detaches a childless node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneMode {
    /// Only the removed node is detached. A parent left childless and
    /// structural stays in the tree.
    #[default]
    SingleLevel,

    /// Keep detaching upward while the parent is childless and structural.
    Cascade,
}

/// Builder for a [`Trie`] with a custom splitter or prune mode.
pub struct TrieBuilder {
    splitter: Option<BoxedSplitter>,
    prune_mode: PruneMode,
}

impl TrieBuilder {
    /// Creates a builder with the default character splitter.
    pub fn new() -> Self {
        Self {
            splitter: None,
            prune_mode: PruneMode::default(),
        }
    }

    /// Uses `splitter` to decompose paths.
    pub fn splitter<S>(mut self, splitter: S) -> Self
    where
        S: PathSplitter + Send + Sync + 'static,
    {
        self.splitter = Some(Box::new(splitter));
        self
    }

    /// Uses an already boxed splitter.
    pub fn boxed_splitter(mut self, splitter: BoxedSplitter) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Sets the prune mode used by `remove`.
    pub fn prune_mode(mut self, prune_mode: PruneMode) -> Self {
        self.prune_mode = prune_mode;
        self
    }

    /// Builds an empty trie.
    pub fn build<T>(self) -> Trie<T> {
        Trie {
            nodes: vec![Some(TrieNode::root())],
            free: Vec::new(),
            splitter: self.splitter.unwrap_or_else(|| Box::new(CharSplitter)),
            prune_mode: self.prune_mode,
            len: 0,
        }
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrieBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieBuilder")
            .field("custom_splitter", &self.splitter.is_some())
            .field("prune_mode", &self.prune_mode)
            .finish()
    }
}

/// A string-keyed map stored as a segment trie.
///
/// The splitter and prune mode are fixed at construction. All operations
/// split the path completely before touching the tree, so a rejected path
/// never leaves partial state behind.
pub struct Trie<T> {
    /// Node arena; slot 0 is the root and freed slots hold `None`
    nodes: Vec<Option<TrieNode<T>>>,

    /// Freed slots available for reuse
    free: Vec<NodeId>,

    splitter: BoxedSplitter,

    prune_mode: PruneMode,

    /// Number of present nodes
    len: usize,
}

impl<T> Trie<T> {
    /// Creates an empty trie that splits paths per character.
    pub fn new() -> Self {
        TrieBuilder::new().build()
    }

    /// Creates an empty trie with a custom splitter.
    pub fn with_splitter<S>(splitter: S) -> Self
    where
        S: PathSplitter + Send + Sync + 'static,
    {
        TrieBuilder::new().splitter(splitter).build()
    }

    /// Returns a builder for further configuration.
    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    /// The prune mode this trie was built with.
    pub fn prune_mode(&self) -> PruneMode {
        self.prune_mode
    }

    /// Inserts `value` at `path` unless a value is already present there.
    ///
    /// An existing value is left untouched and the call still succeeds.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The path now holds a value (new or pre-existing).
    /// * `Err(TrieError::InvalidPath)` - The splitter rejected `path`.
    pub fn add(&mut self, path: &str, value: T) -> TrieResult<()> {
        let segments = self.splitter.split(path)?;
        let id = self.walk_or_create(segments);

        let node = self.slot_mut(id);
        if node.is_present() {
            trace!(path, "add skipped, path already present");
            return Ok(());
        }
        node.value = Some(value);
        self.len += 1;

        trace!(path, "added");
        Ok(())
    }

    /// Inserts `value` at `path`, overwriting any existing value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The path now holds `value`.
    /// * `Err(TrieError::InvalidPath)` - The splitter rejected `path`.
    pub fn upsert(&mut self, path: &str, value: T) -> TrieResult<()> {
        let segments = self.splitter.split(path)?;
        let id = self.walk_or_create(segments);

        if self.slot_mut(id).value.replace(value).is_none() {
            self.len += 1;
        }

        trace!(path, "upserted");
        Ok(())
    }

    /// Removes the value stored at `path`.
    ///
    /// A childless node is detached from its parent. A node that still roots
    /// other entries is kept as a structural waypoint with its value cleared.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The value was removed.
    /// * `Err(TrieError::NotFound)` - Nothing is present at `path`.
    /// * `Err(TrieError::InvalidPath)` - The splitter rejected `path`.
    pub fn remove(&mut self, path: &str) -> TrieResult<()> {
        let (_, id) = self.find_node(path)?;

        let node = self.slot_mut(id);
        node.take_value();
        let is_leaf = node.is_leaf();
        self.len -= 1;

        if !is_leaf {
            debug!(path, "soft-deleted, node still roots other entries");
            return Ok(());
        }

        let detached = self.prune_from(id);
        debug!(path, detached, "removed");
        Ok(())
    }

    /// Returns a copy of the value stored at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The stored value.
    /// * `Err(TrieError::NotFound)` - A segment is missing or the node is structural.
    /// * `Err(TrieError::InvalidPath)` - The splitter rejected `path`.
    pub fn query(&self, path: &str) -> TrieResult<T>
    where
        T: Clone,
    {
        self.get(path).cloned()
    }

    /// Borrows the value stored at `path`.
    pub fn get(&self, path: &str) -> TrieResult<&T> {
        let (_, id) = self.find_node(path)?;
        self.slot(id)
            .value()
            .ok_or_else(|| TrieError::NotFound(path.to_string()))
    }

    /// Like [`Trie::query`], but returns `default` when nothing is present.
    ///
    /// Only `NotFound` is recovered; a splitter failure still propagates.
    pub fn query_or_default(&self, path: &str, default: T) -> TrieResult<T>
    where
        T: Clone,
    {
        match self.query(path) {
            Err(TrieError::NotFound(_)) => Ok(default),
            other => other,
        }
    }

    /// Resolves the present node stored at `path`.
    ///
    /// This is the traversal shared by `query`, `remove` and `contains`.
    ///
    /// # Returns
    ///
    /// * `Ok((segments, id))` - The split path and the handle of its node.
    /// * `Err(TrieError::NotFound)` - A segment is missing or the node is structural.
    /// * `Err(TrieError::InvalidPath)` - The splitter rejected `path`.
    pub fn find_node(&self, path: &str) -> TrieResult<(Vec<String>, NodeId)> {
        let segments = self.splitter.split(path)?;
        match self.locate(&segments) {
            Some(id) if self.slot(id).is_present() => Ok((segments, id)),
            _ => Err(TrieError::NotFound(path.to_string())),
        }
    }

    /// Returns `true` if a value is present at `path`.
    ///
    /// A missing path is `Ok(false)`; a splitter failure is still an error.
    pub fn contains(&self, path: &str) -> TrieResult<bool> {
        match self.find_node(path) {
            Ok(_) => Ok(true),
            Err(TrieError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Resolves a node handle. Returns `None` for a handle whose node was detached.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode<T>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// The root node. It represents the empty path.
    pub fn root(&self) -> &TrieNode<T> {
        self.slot(NodeId::ROOT)
    }

    /// Rebuilds the full path of a node by joining its segments with `delimiter`.
    pub fn full_path(&self, id: NodeId, delimiter: &str) -> Option<String> {
        let mut keys = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            keys.push(current.key.as_str());
            current = self.slot(parent);
        }
        keys.reverse();
        Some(keys.join(delimiter))
    }

    /// Lists every stored entry as `(full_path, value)`.
    ///
    /// Segments are joined with `delimiter` (empty when `None`). The order is
    /// unspecified.
    pub fn to_slice(&self, delimiter: Option<&str>) -> Vec<(String, T)>
    where
        T: Clone,
    {
        self.collect_from(NodeId::ROOT, delimiter.unwrap_or(""))
    }

    /// Lists every stored entry whose path starts with `prefix`.
    ///
    /// The prefix node itself need not hold a value. A prefix that does not
    /// resolve, or that the splitter rejects, yields an empty list.
    pub fn query_by_prefix(&self, prefix: &str, delimiter: Option<&str>) -> Vec<(String, T)>
    where
        T: Clone,
    {
        let segments = match self.splitter.split(prefix) {
            Ok(segments) => segments,
            Err(err) => {
                debug!(prefix, %err, "prefix rejected by splitter");
                return Vec::new();
            }
        };

        match self.locate(&segments) {
            Some(id) => self.collect_from(id, delimiter.unwrap_or("")),
            None => {
                debug!(prefix, "prefix not found");
                Vec::new()
            }
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, including the root and structural nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Removes every entry and node except the root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Some(TrieNode::root()));
        self.free.clear();
        self.len = 0;
    }

    /// Walks `segments` from the root without creating anything.
    fn locate(&self, segments: &[String]) -> Option<NodeId> {
        segments.iter().try_fold(NodeId::ROOT, |current, segment| {
            self.slot(current).child(segment)
        })
    }

    /// Walks `segments` from the root, creating structural nodes as needed.
    fn walk_or_create(&mut self, segments: Vec<String>) -> NodeId {
        let mut current = NodeId::ROOT;
        for segment in segments {
            current = match self.slot(current).child(&segment) {
                Some(child) => child,
                None => {
                    let child = self.alloc(TrieNode::new(segment.clone(), Some(current)));
                    self.slot_mut(current).children.insert(segment, child);
                    child
                }
            };
        }
        current
    }

    /// Detaches the childless node `id`, then keeps detaching structural,
    /// childless ancestors when the prune mode is `Cascade`. The root is never
    /// detached. Returns the number of nodes detached.
    fn prune_from(&mut self, id: NodeId) -> usize {
        let mut detached = 0;
        let mut current = id;

        while let Some(parent) = self.slot(current).parent {
            self.detach(current, parent);
            detached += 1;

            if self.prune_mode == PruneMode::SingleLevel {
                break;
            }
            let parent_node = self.slot(parent);
            if parent_node.is_present() || !parent_node.is_leaf() {
                break;
            }
            current = parent;
        }
        detached
    }

    fn detach(&mut self, id: NodeId, parent: NodeId) {
        if let Some(node) = self.nodes[id.0].take() {
            self.slot_mut(parent).children.remove(&node.key);
            self.free.push(id);
        }
    }

    fn alloc(&mut self, node: TrieNode<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Collects present nodes of the subtree at `start` with a stack-based walk.
    fn collect_from(&self, start: NodeId, delimiter: &str) -> Vec<(String, T)>
    where
        T: Clone,
    {
        let mut result = Vec::new();
        let Some(base) = self.full_path(start, delimiter) else {
            return result;
        };

        let mut stack = vec![(start, base)];
        while let Some((id, path)) = stack.pop() {
            let node = self.slot(id);
            if let Some(value) = node.value() {
                result.push((path.clone(), value.clone()));
            }

            let is_root = node.parent.is_none();
            for (key, child) in node.children() {
                let child_path = if is_root {
                    key.to_string()
                } else {
                    format!("{path}{delimiter}{key}")
                };
                stack.push((child, child_path));
            }
        }
        result
    }

    // Linked ids always point at live slots: detach unlinks before freeing.
    fn slot(&self, id: NodeId) -> &TrieNode<T> {
        self.nodes[id.0]
            .as_ref()
            .unwrap_or_else(|| unreachable!("node {} is linked but freed", id.0))
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut TrieNode<T> {
        self.nodes[id.0]
            .as_mut()
            .unwrap_or_else(|| unreachable!("node {} is linked but freed", id.0))
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("node_count", &self.node_count())
            .field("prune_mode", &self.prune_mode)
            .finish_non_exhaustive()
    }
}
