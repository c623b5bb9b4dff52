//! Entries files for the command line tool.
//!
//! An entries file is a TOML or JSON document with a single `entries` table
//! mapping paths to string values:
//!
//! ```toml
//! [entries]
//! china = "中国"
//! chinese = "中国人"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::LanaiConfig;
use crate::data_structures::path_trie::Trie;
use crate::error::{LanaiError, LanaiResult};

/// Paths and values read from an entries file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySet {
    /// Path to value mapping
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl EntrySet {
    /// Reads an entries file, picking the format from its extension.
    pub fn load(path: &Path) -> LanaiResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&contents)?),
            Some("json") => Ok(serde_json::from_str(&contents)?),
            _ => Err(LanaiError::Custom(format!(
                "Unsupported entries file extension for: {path:?}"
            ))),
        }
    }

    /// Builds a trie from the configuration and adds every entry to it.
    pub fn into_trie(self, config: &LanaiConfig) -> LanaiResult<Trie<String>> {
        let mut trie = config.build_trie();
        for (path, value) in self.entries {
            trie.add(&path, value)?;
        }
        tracing::info!(entries = trie.len(), nodes = trie.node_count(), "trie loaded");
        Ok(trie)
    }
}
