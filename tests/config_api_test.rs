//! Integration tests for the configuration and generator public API.

use ignite::config::{
    load_local_config, parse_local_config, save_local_config, LoadOutcome, LocalConfig,
};
use ignite::generators::GeneratorRegistry;
use ignite::plugins::parse_initialize_output;
use ignite::IgniteError;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let _config = LocalConfig::default();
    let _registry = GeneratorRegistry::new();
    let _outcome = LoadOutcome::Absent;
}

#[test]
fn config_drives_generator_lookup() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".ignite"),
        r#"module.exports = {
  "generators": {
    "component": "generator-ignite-component",
    "screen": "generator-ignite-screen"
  }
};
"#,
    )
    .unwrap();

    let config = load_local_config(temp.path()).into_config();
    let registry = GeneratorRegistry::from_config(&config);

    assert_eq!(registry.keys(), vec!["ignite:component", "ignite:screen"]);
    assert!(matches!(
        registry.get("container"),
        Err(IgniteError::UnknownGenerator { .. })
    ));
}

#[test]
fn unknown_keys_survive_a_rewrite() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".ignite"),
        r#"{"generators": {"component": "gen-x"}, "vectorIcons": {"family": "Ionicons"}}"#,
    )
    .unwrap();

    let mut config = load_local_config(temp.path()).into_config();
    config = config.with_generator("map", "gen-map");
    save_local_config(temp.path(), &config).unwrap();

    let reloaded = load_local_config(temp.path()).into_config();
    assert_eq!(reloaded.generator("component"), Some("gen-x"));
    assert_eq!(reloaded.generator("map"), Some("gen-map"));
    assert_eq!(reloaded.extra["vectorIcons"], json!({ "family": "Ionicons" }));
}

#[test]
fn plugin_output_can_be_saved_and_reloaded() {
    let temp = TempDir::new().unwrap();
    let updated = parse_initialize_output(
        "ignite-maps",
        r#"{"generators": {"map": "generator-ignite-map"}, "maps": {"apiKey": ""}}"#,
    )
    .unwrap()
    .unwrap();

    save_local_config(temp.path(), &updated).unwrap();

    let text = fs::read_to_string(temp.path().join(".ignite")).unwrap();
    assert!(text.starts_with("module.exports = "));
    assert_eq!(parse_local_config(&text).unwrap(), updated);
}

#[test]
fn malformed_file_is_never_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".ignite"), "module.exports = require('./x')").unwrap();

    let outcome = load_local_config(temp.path());
    assert!(outcome.warning().is_some());
    assert_eq!(outcome.into_config(), LocalConfig::default());
}
