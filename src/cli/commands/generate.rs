//! Generate command implementation.
//!
//! The `ignite generate <type> <name>` command runs the generator that the
//! project's `.ignite` file registers for `<type>`.

use crate::cli::args::GenerateArgs;
use crate::config::load_local_config;
use crate::error::Result;
use crate::generators::{GeneratorContext, GeneratorRegistry};
use crate::project::require_ignite_project;
use crate::toolchain::ensure_generator_tool;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand<'a> {
    workspace: &'a Workspace,
    args: GenerateArgs,
}

impl<'a> GenerateCommand<'a> {
    /// Create a new generate command.
    pub fn new(workspace: &'a Workspace, args: GenerateArgs) -> Self {
        Self { workspace, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &GenerateArgs {
        &self.args
    }
}

impl Command for GenerateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.workspace.root();
        require_ignite_project(root)?;

        let toolchain = self.workspace.toolchain();
        ensure_generator_tool(toolchain, ui)?;

        let outcome = load_local_config(root);
        if let Some(warning) = outcome.warning() {
            ui.warning(&warning);
        }
        let registry = GeneratorRegistry::from_config(&outcome.into_config());
        let generator = registry.get(&self.args.kind)?;

        let ctx = GeneratorContext {
            project_root: root,
            toolchain,
        };
        generator.run(&self.args.name, &ctx)?;

        ui.success(&format!("Generated {} {}", self.args.kind, self.args.name));
        Ok(CommandResult::success())
    }
}
