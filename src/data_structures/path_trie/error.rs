//! Error types for the path trie.
//!
//! Only two kinds of failure originate in the trie: the splitter rejected the
//! input, or nothing present lives at the requested path.

/// Errors that can occur in path trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The path splitter rejected the input.
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath {
        /// The path that was rejected.
        path: String,
        /// Why the splitter rejected it.
        reason: String,
    },

    /// No present node resolves the requested path.
    #[error("Path not found: {0}")]
    NotFound(String),
}

impl TrieError {
    /// Creates an `InvalidPath` error. Intended for custom splitters.
    pub fn invalid_path<P: Into<String>, R: Into<String>>(path: P, reason: R) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
