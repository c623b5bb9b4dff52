//! Tests for the configuration module.

use crate::config::splitter::{SplitterConfig, SplitterKind};
use crate::config::{ConfigLoader, LanaiConfig, LogConfig, Validate};
use crate::data_structures::path_trie::{EmptySegments, PruneMode};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.splitter.kind, SplitterKind::Chars);
    assert_eq!(config.trie.prune_mode, PruneMode::SingleLevel);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LanaiConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log = LogConfig::default();
    config.splitter = SplitterConfig {
        kind: SplitterKind::Delimiter,
        delimiter: String::new(),
        empty_segments: EmptySegments::Skip,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    // an empty delimiter is irrelevant for the character splitter
    config.splitter.kind = SplitterKind::Chars;
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
            [splitter]
            kind = "delimiter"
            delimiter = "::"
            empty_segments = "reject"

            [trie]
            prune_mode = "cascade"
            join_delimiter = "::"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.splitter.kind, SplitterKind::Delimiter);
    assert_eq!(config.splitter.delimiter, "::");
    assert_eq!(config.splitter.empty_segments, EmptySegments::Reject);
    assert_eq!(config.trie.prune_mode, PruneMode::Cascade);

    // Other values should be defaults
    assert_eq!(config.log.level, "info");

    let mut trie = config.build_trie();
    trie.add("a::b", 1).unwrap();
    assert_eq!(trie.query("a::b").unwrap(), 1);
    assert!(trie.add("a::::b", 2).is_err());
    assert_eq!(trie.prune_mode(), PruneMode::Cascade);
}

/// Test loading configuration from JSON.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config.json",
            r#"{ "log": { "level": "debug", "json": true } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("config_env_test.toml", "[log]\nlevel = \"warn\"\n")
        .unwrap();

    std::env::set_var("TEST_ENV__LOG__LEVEL", "error");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.log.level, "error");

    std::env::remove_var("TEST_ENV__LOG__LEVEL");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("invalid.toml", "[splitter\nkind = chars\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());

    let config_path = fixture.write_file("config.ini", "kind=chars").unwrap();
    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}
