//! Splitter configuration module.
//!
//! This module selects how keys are decomposed into trie segments.

use super::{ConfigResult, Validate};
use crate::data_structures::path_trie::{
    BoxedSplitter, CharSplitter, DelimiterSplitter, EmptySegments,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Which splitter to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitterKind {
    /// One segment per character
    #[default]
    Chars,
    /// Split on `delimiter`
    Delimiter,
}

/// Splitter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Splitter to use
    pub kind: SplitterKind,

    /// Delimiter for the `delimiter` kind
    pub delimiter: String,

    /// Empty segment policy for the `delimiter` kind
    pub empty_segments: EmptySegments,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            kind: SplitterKind::Chars,
            delimiter: "/".to_string(),
            empty_segments: EmptySegments::Skip,
        }
    }
}

impl SplitterConfig {
    /// Builds the configured splitter.
    pub fn build(&self) -> BoxedSplitter {
        match self.kind {
            SplitterKind::Chars => Box::new(CharSplitter),
            SplitterKind::Delimiter => Box::new(
                DelimiterSplitter::new(self.delimiter.clone())
                    .with_empty_segments(self.empty_segments),
            ),
        }
    }
}

impl Validate for SplitterConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.kind == SplitterKind::Delimiter && self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "delimiter must not be empty for the delimiter splitter".to_string(),
            ));
        }
        Ok(())
    }
}
