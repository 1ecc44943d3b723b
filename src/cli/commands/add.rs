//! Add command implementation.
//!
//! The `ignite add <plugin>` command installs `ignite-<plugin>` into the
//! project and lets it update the local configuration.

use crate::cli::args::AddArgs;
use crate::config::{load_local_config, save_local_config};
use crate::error::{IgniteError, Result};
use crate::plugins::{initialize_plugin, plugin_module_name};
use crate::toolchain::ensure_generator_tool;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand<'a> {
    workspace: &'a Workspace,
    args: AddArgs,
}

impl<'a> AddCommand<'a> {
    /// Create a new add command.
    pub fn new(workspace: &'a Workspace, args: AddArgs) -> Self {
        Self { workspace, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AddArgs {
        &self.args
    }
}

impl Command for AddCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.workspace.root();
        let toolchain = self.workspace.toolchain();
        ensure_generator_tool(toolchain, ui)?;

        let module = plugin_module_name(&self.args.plugin);
        let mut spinner = ui.start_spinner(&format!("Looking up {}...", module));
        match self.workspace.registry().exists(&module) {
            Ok(true) => spinner.finish_and_clear(),
            Ok(false) => {
                spinner.finish_error(&format!("{} is not in the registry", module));
                return Err(IgniteError::PluginNotFound {
                    plugin: self.args.plugin.clone(),
                    module,
                });
            }
            Err(e) => {
                spinner.finish_error("Registry lookup failed");
                return Err(e);
            }
        }

        ui.message(&format!("Installing {}...", module));
        toolchain.install_dependency(&module, root)?;

        let outcome = load_local_config(root);
        if let Some(warning) = outcome.warning() {
            ui.warning(&warning);
        }
        let current = outcome.into_config();

        match initialize_plugin(toolchain, root, &module, &current)? {
            Some(updated) => {
                let path = save_local_config(root, &updated)?;
                ui.success(&format!("Added {} and updated {}", module, path.display()));
            }
            None => {
                tracing::debug!(module = %module, "plugin left the configuration unchanged");
                ui.success(&format!("Added {}", module));
            }
        }
        Ok(CommandResult::success())
    }
}
