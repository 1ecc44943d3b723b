//! Tool requirements that are remediated rather than reported.
//!
//! A missing `yo` is installed globally on the spot, and a legacy global
//! `react-native` package is swapped for `react-native-cli`. Neither step
//! pins versions or rolls back.

use crate::error::Result;
use crate::ui::UserInterface;

use super::tool::{Tool, LEGACY_REACT_NATIVE_PACKAGE, REACT_NATIVE_CLI_PACKAGE, YO_PACKAGE};
use super::Toolchain;

/// Make sure `yo` is on PATH, installing it globally if it is not.
pub fn ensure_generator_tool(toolchain: &dyn Toolchain, ui: &mut dyn UserInterface) -> Result<()> {
    if let Some(path) = toolchain.locate(Tool::Yo) {
        tracing::debug!(path = %path.display(), "yo found");
        return Ok(());
    }

    ui.warning("yo is not installed. Installing it globally with npm...");
    toolchain.install_global(YO_PACKAGE)?;
    ui.success("Installed yo");
    Ok(())
}

/// Replace a globally installed `react-native` package with `react-native-cli`.
///
/// Returns whether a replacement happened.
pub fn replace_legacy_react_native(
    toolchain: &dyn Toolchain,
    ui: &mut dyn UserInterface,
) -> Result<bool> {
    if !toolchain.has_global_package(LEGACY_REACT_NATIVE_PACKAGE) {
        return Ok(false);
    }

    ui.warning(&format!(
        "Found a global '{}' install, which conflicts with '{}'. Replacing it...",
        LEGACY_REACT_NATIVE_PACKAGE, REACT_NATIVE_CLI_PACKAGE
    ));
    toolchain.uninstall_global(LEGACY_REACT_NATIVE_PACKAGE)?;
    toolchain.install_global(REACT_NATIVE_CLI_PACKAGE)?;
    ui.success(&format!("Installed {}", REACT_NATIVE_CLI_PACKAGE));
    Ok(true)
}
