//! Lanai Library
//!
//! A string-keyed map stored as a segment trie, with a pluggable path
//! splitter, prefix queries, and a reader/writer locked wrapper for sharing
//! between threads.
//!
//! ```
//! use lanai_lib::data_structures::{DelimiterSplitter, Trie};
//!
//! let mut routes = Trie::with_splitter(DelimiterSplitter::new("/"));
//! routes.add("/api/users", "users").unwrap();
//! routes.add("/api/orders", "orders").unwrap();
//!
//! assert_eq!(routes.query("//api//users/").unwrap(), "users");
//! assert_eq!(routes.query_by_prefix("/api", Some("/")).len(), 2);
//! ```

pub mod config;
pub mod data_structures;
pub mod entries;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
