//! Test modules for Lanai.
//!
//! Crate-internal suites that cut across modules:
//! - Property-based model checks of the path trie using proptest
//! - Configuration loading against temporary files
//! - Entries file loading
//! - Error formatting and reporting

pub mod config_tests;

pub use test_utils::{key_strategy, segment_path_strategy, TestFixture};
