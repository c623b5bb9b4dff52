//! Trie configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::path_trie::PruneMode;
use serde::{Deserialize, Serialize};

/// Trie behavior and output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrieConfig {
    /// Pruning applied when `remove` detaches a node
    pub prune_mode: PruneMode,

    /// Delimiter used to join segments when listing entries
    pub join_delimiter: String,
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
