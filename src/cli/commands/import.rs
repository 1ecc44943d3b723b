//! Import command implementation.
//!
//! The `ignite import <type>` command hands off to the project generator's
//! `<type>` sub-generator.

use crate::cli::args::ImportArgs;
use crate::error::Result;
use crate::toolchain::{ensure_generator_tool, GENERATOR_NAMESPACE};
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand<'a> {
    workspace: &'a Workspace,
    args: ImportArgs,
}

impl<'a> ImportCommand<'a> {
    /// Create a new import command.
    pub fn new(workspace: &'a Workspace, args: ImportArgs) -> Self {
        Self { workspace, args }
    }

    /// `yo` namespace for the requested type.
    pub fn generator(&self) -> String {
        format!("{}:{}", GENERATOR_NAMESPACE, self.args.kind)
    }
}

impl Command for ImportCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let toolchain = self.workspace.toolchain();
        ensure_generator_tool(toolchain, ui)?;

        toolchain.run_generator(&[self.generator()], self.workspace.root())?;
        Ok(CommandResult::success())
    }
}
