//! Ignite plugins.
//!
//! A plugin is an npm package named `ignite-<name>`. Once installed into the
//! project, its exported `initialize(config)` is called with the current
//! local configuration and may hand back a replacement.

use std::path::Path;

use serde_json::Value;

use crate::config::LocalConfig;
use crate::error::{IgniteError, Result};
use crate::project::module_dir;
use crate::toolchain::{display_command, Toolchain};

/// npm naming prefix every plugin package carries.
pub const PLUGIN_PREFIX: &str = "ignite-";

/// Loads a module and calls its `initialize` export.
///
/// argv[1] is the module directory, argv[2] the configuration as JSON.
/// Anything the plugin logs goes to stderr so stdout carries only the
/// returned configuration.
pub const INITIALIZE_SCRIPT: &str = r#"
console.log = console.error;
const plugin = require(process.argv[1]);
if (!plugin || typeof plugin.initialize !== 'function') process.exit(0);
Promise.resolve(plugin.initialize(JSON.parse(process.argv[2])))
  .then((result) => {
    if (result !== undefined && result !== null) {
      process.stdout.write(JSON.stringify(result));
    }
  })
  .catch((err) => {
    console.error(err && err.stack ? err.stack : String(err));
    process.exit(1);
  });
"#;

/// npm module name for a plugin (`maps` → `ignite-maps`).
pub fn plugin_module_name(plugin: &str) -> String {
    format!("{}{}", PLUGIN_PREFIX, plugin)
}

/// Call an installed plugin's `initialize` with `config`.
///
/// Returns `Ok(None)` when the plugin returned nothing, which means the
/// configuration should be left as it is.
pub fn initialize_plugin(
    toolchain: &dyn Toolchain,
    project_root: &Path,
    module: &str,
    config: &LocalConfig,
) -> Result<Option<LocalConfig>> {
    let dir = module_dir(project_root, module);
    let args = vec![
        dir.to_string_lossy().into_owned(),
        serde_json::to_string(&config.to_value())?,
    ];

    tracing::debug!(module, dir = %dir.display(), "initializing plugin");
    let output = toolchain.run_script(INITIALIZE_SCRIPT, &args, project_root)?;
    if !output.success {
        if !output.stderr.trim().is_empty() {
            tracing::debug!(stderr = %output.stderr.trim(), "plugin initialize failed");
        }
        return Err(IgniteError::CommandFailed {
            command: display_command("node", &[format!("<initialize {}>", module)]),
            code: output.exit_code,
        });
    }

    parse_initialize_output(module, &output.stdout)
}

/// Interpret what the bridge printed.
pub fn parse_initialize_output(module: &str, stdout: &str) -> Result<Option<LocalConfig>> {
    let stdout = stdout.trim();
    if stdout.is_empty() {
        return Ok(None);
    }

    let invalid = |message: String| IgniteError::InvalidPluginConfig {
        module: module.to_string(),
        message,
    };
    let value: Value = serde_json::from_str(stdout).map_err(|e| invalid(e.to_string()))?;
    LocalConfig::from_value(value).map(Some).map_err(invalid)
}
