//! Plugin initialization through a real `node`.
//!
//! Each test returns early when `node` is not on PATH.
#![cfg(unix)]

use ignite::config::LocalConfig;
use ignite::plugins::initialize_plugin;
use ignite::toolchain::{find_executable, SystemToolchain, ToolchainConfig};
use ignite::IgniteError;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn node_available() -> bool {
    if find_executable("node").is_some() {
        true
    } else {
        eprintln!("node not found on PATH, skipping");
        false
    }
}

fn project_with_plugin(module: &str, source: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("node_modules").join(module);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.js"), source).unwrap();
    temp
}

fn initialize(
    temp: &TempDir,
    module: &str,
    config: &LocalConfig,
) -> ignite::Result<Option<LocalConfig>> {
    let toolchain = SystemToolchain::new(ToolchainConfig::default());
    initialize_plugin(&toolchain, temp.path(), module, config)
}

#[test]
fn returned_object_becomes_the_new_config() {
    if !node_available() {
        return;
    }
    let temp = project_with_plugin(
        "ignite-x",
        r#"
module.exports.initialize = (config) => {
  console.log('adding map generator');
  config.generators.map = 'generator-ignite-map';
  config.extra = 1;
  return config;
};
"#,
    );
    let config = LocalConfig::default().with_generator("component", "gen-x");

    let updated = initialize(&temp, "ignite-x", &config).unwrap().unwrap();

    assert_eq!(updated.generator("component"), Some("gen-x"));
    assert_eq!(updated.generator("map"), Some("generator-ignite-map"));
    assert_eq!(updated.extra["extra"], json!(1));
}

#[test]
fn undefined_result_leaves_config_alone() {
    if !node_available() {
        return;
    }
    let temp = project_with_plugin(
        "ignite-x",
        "module.exports.initialize = () => { console.log('nothing to do'); };\n",
    );

    let result = initialize(&temp, "ignite-x", &LocalConfig::default()).unwrap();

    assert_eq!(result, None);
}

#[test]
fn module_without_initialize_returns_nothing() {
    if !node_available() {
        return;
    }
    let temp = project_with_plugin("ignite-x", "module.exports = { name: 'x' };\n");

    let result = initialize(&temp, "ignite-x", &LocalConfig::default()).unwrap();

    assert_eq!(result, None);
}

#[test]
fn async_initialize_is_awaited() {
    if !node_available() {
        return;
    }
    let temp = project_with_plugin(
        "ignite-x",
        r#"
module.exports.initialize = async (config) => {
  await new Promise((resolve) => setTimeout(resolve, 10));
  return { generators: { screen: 'generator-ignite-screen' } };
};
"#,
    );

    let updated = initialize(&temp, "ignite-x", &LocalConfig::default())
        .unwrap()
        .unwrap();

    assert_eq!(updated.generator("screen"), Some("generator-ignite-screen"));
}

#[test]
fn throwing_initialize_is_a_command_failure() {
    if !node_available() {
        return;
    }
    let temp = project_with_plugin(
        "ignite-x",
        "module.exports.initialize = () => { throw new Error('boom'); };\n",
    );

    let err = initialize(&temp, "ignite-x", &LocalConfig::default()).unwrap_err();

    assert!(matches!(err, IgniteError::CommandFailed { code: Some(1), .. }));
}

#[test]
fn non_object_result_is_invalid_config() {
    if !node_available() {
        return;
    }
    let temp = project_with_plugin(
        "ignite-x",
        "module.exports.initialize = () => 'generators';\n",
    );

    let err = initialize(&temp, "ignite-x", &LocalConfig::default()).unwrap_err();

    assert!(matches!(err, IgniteError::InvalidPluginConfig { .. }));
}
