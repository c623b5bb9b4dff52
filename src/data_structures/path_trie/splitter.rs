//! Path splitting strategies.
//!
//! A splitter turns a key string into the ordered segments used as edge labels
//! in the trie. Splitting always runs to completion before the trie is touched,
//! so a splitter failure can never leave a half-built path behind.

use super::{TrieError, TrieResult};
use serde::{Deserialize, Serialize};

/// Decomposes a path into trie segments.
///
/// Implementations must be deterministic: the same input always yields the
/// same segments. Any closure `Fn(&str) -> TrieResult<Vec<String>>` is a
/// splitter as well.
#[cfg_attr(test, mockall::automock)]
pub trait PathSplitter {
    /// Splits `path` into segments, or rejects it with `TrieError::InvalidPath`.
    fn split(&self, path: &str) -> TrieResult<Vec<String>>;
}

impl<F> PathSplitter for F
where
    F: Fn(&str) -> TrieResult<Vec<String>>,
{
    fn split(&self, path: &str) -> TrieResult<Vec<String>> {
        self(path)
    }
}

/// Default splitter: one segment per Unicode scalar value. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSplitter;

impl PathSplitter for CharSplitter {
    fn split(&self, path: &str) -> TrieResult<Vec<String>> {
        Ok(path.chars().map(String::from).collect())
    }
}

/// How a `DelimiterSplitter` treats empty segments (`"a//b"`, leading or
/// trailing delimiters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySegments {
    /// Keep empty segments as edges of their own
    Keep,
    /// Drop them, so `"//foo//bar/"` and `"/foo/bar"` are the same path
    #[default]
    Skip,
    /// Fail with `InvalidPath`
    Reject,
}

/// Splits on a delimiter string, e.g. `/` for route-like keys.
#[derive(Debug, Clone)]
pub struct DelimiterSplitter {
    delimiter: String,
    empty_segments: EmptySegments,
}

impl DelimiterSplitter {
    /// Creates a splitter that skips empty segments.
    pub fn new<D: Into<String>>(delimiter: D) -> Self {
        Self {
            delimiter: delimiter.into(),
            empty_segments: EmptySegments::default(),
        }
    }

    /// Sets the empty segment policy.
    pub fn with_empty_segments(mut self, policy: EmptySegments) -> Self {
        self.empty_segments = policy;
        self
    }

    /// The delimiter this splitter splits on.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl PathSplitter for DelimiterSplitter {
    fn split(&self, path: &str) -> TrieResult<Vec<String>> {
        if self.delimiter.is_empty() {
            return Err(TrieError::invalid_path(path, "splitter delimiter is empty"));
        }

        let mut segments = Vec::new();
        for segment in path.split(self.delimiter.as_str()) {
            if segment.is_empty() {
                match self.empty_segments {
                    EmptySegments::Keep => {}
                    EmptySegments::Skip => continue,
                    EmptySegments::Reject => {
                        return Err(TrieError::invalid_path(path, "empty path segment"));
                    }
                }
            }
            segments.push(segment.to_string());
        }
        Ok(segments)
    }
}
