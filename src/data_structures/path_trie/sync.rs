//! Thread-safe wrapper around [`Trie`].
//!
//! One reader/writer lock guards the whole tree. Mutations hold the write
//! lock for their full duration and every read holds the read lock, so a
//! reader never observes a partially applied write.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;

use super::{NodeId, PathSplitter, Trie, TrieResult};

/// A [`Trie`] shared between threads behind a single `RwLock`.
pub struct SyncTrie<T> {
    inner: RwLock<Trie<T>>,
}

impl<T> SyncTrie<T> {
    /// Creates an empty trie that splits paths per character.
    pub fn new() -> Self {
        Self::from_trie(Trie::new())
    }

    /// Creates an empty trie with a custom splitter.
    pub fn with_splitter<S>(splitter: S) -> Self
    where
        S: PathSplitter + Send + Sync + 'static,
    {
        Self::from_trie(Trie::with_splitter(splitter))
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: Trie<T>) -> Self {
        Self {
            inner: RwLock::new(trie),
        }
    }

    /// Inserts `value` at `path` unless a value is already present.
    pub fn add(&self, path: &str, value: T) -> TrieResult<()> {
        self.inner.write().add(path, value)
    }

    /// Inserts `value` at `path`, overwriting any existing value.
    pub fn upsert(&self, path: &str, value: T) -> TrieResult<()> {
        self.inner.write().upsert(path, value)
    }

    /// Removes the value stored at `path`.
    pub fn remove(&self, path: &str) -> TrieResult<()> {
        self.inner.write().remove(path)
    }

    /// Returns a copy of the value stored at `path`.
    pub fn query(&self, path: &str) -> TrieResult<T>
    where
        T: Clone,
    {
        self.inner.read().query(path)
    }

    /// Returns the value at `path`, or `default` when nothing is present.
    pub fn query_or_default(&self, path: &str, default: T) -> TrieResult<T>
    where
        T: Clone,
    {
        self.inner.read().query_or_default(path, default)
    }

    /// Resolves the present node stored at `path`.
    ///
    /// The handle may be invalidated by a concurrent `remove`. Resolve it
    /// through [`SyncTrie::read`] while holding the guard if that matters.
    pub fn find_node(&self, path: &str) -> TrieResult<(Vec<String>, NodeId)> {
        self.inner.read().find_node(path)
    }

    /// Returns `true` if a value is present at `path`.
    pub fn contains(&self, path: &str) -> TrieResult<bool> {
        self.inner.read().contains(path)
    }

    /// Lists every stored entry as `(full_path, value)`.
    pub fn to_slice(&self, delimiter: Option<&str>) -> Vec<(String, T)>
    where
        T: Clone,
    {
        self.inner.read().to_slice(delimiter)
    }

    /// Lists every stored entry whose path starts with `prefix`.
    pub fn query_by_prefix(&self, prefix: &str, delimiter: Option<&str>) -> Vec<(String, T)>
    where
        T: Clone,
    {
        self.inner.read().query_by_prefix(prefix, delimiter)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.write().clear()
    }

    /// Takes the read lock for a sequence of reads against one snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, Trie<T>> {
        self.inner.read()
    }

    /// Takes the write lock for a sequence of mutations applied atomically.
    pub fn write(&self) -> RwLockWriteGuard<'_, Trie<T>> {
        self.inner.write()
    }

    /// Consumes the wrapper and returns the trie.
    pub fn into_inner(self) -> Trie<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for SyncTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Trie<T>> for SyncTrie<T> {
    fn from(trie: Trie<T>) -> Self {
        Self::from_trie(trie)
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_read() {
            Some(trie) => f.debug_struct("SyncTrie").field("inner", &*trie).finish(),
            None => f.debug_struct("SyncTrie").field("inner", &"<locked>").finish(),
        }
    }
}
