//! Data structures for Lanai.
//!
//! This module contains the path trie and its thread-safe wrapper.

pub mod path_trie;

// Re-export common data structures
pub use path_trie::{
    CharSplitter, DelimiterSplitter, NodeId, PathSplitter, PruneMode, SyncTrie, Trie,
    TrieBuilder, TrieError, TrieResult,
};
