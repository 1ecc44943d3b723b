//! New command implementation.
//!
//! The `ignite new <project>` command scaffolds a project by running the
//! Ignite yeoman generator. Every check that touches nothing runs before
//! anything is installed or spawned.

use crate::cli::args::NewArgs;
use crate::error::Result;
use crate::project::{forbid_ignite_project, project_target, validate_project_name};
use crate::toolchain::{ensure_generator_tool, replace_legacy_react_native, GENERATOR_NAMESPACE};
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The new command implementation.
pub struct NewCommand<'a> {
    workspace: &'a Workspace,
    args: NewArgs,
}

impl<'a> NewCommand<'a> {
    /// Create a new `new` command.
    pub fn new(workspace: &'a Workspace, args: NewArgs) -> Self {
        Self { workspace, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &NewArgs {
        &self.args
    }

    /// Arguments for `yo`, in the order the generator expects them.
    ///
    /// `--latest` is forwarded as whatever string was given.
    pub fn generator_args(&self) -> Vec<String> {
        let mut args = vec![GENERATOR_NAMESPACE.to_string(), self.args.project.clone()];
        if let Some(repo) = &self.args.repo {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
        if let Some(branch) = &self.args.branch {
            args.push("--branch".to_string());
            args.push(branch.clone());
        }
        if let Some(latest) = &self.args.latest {
            args.push("--latest".to_string());
            args.push(latest.clone());
        }
        args
    }
}

impl Command for NewCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.workspace.root();
        let project = &self.args.project;

        validate_project_name(project)?;
        let target = project_target(root, project)?;
        forbid_ignite_project(root)?;
        tracing::debug!(
            project = %project,
            target = %target.display(),
            "new project checks passed"
        );

        let toolchain = self.workspace.toolchain();
        ensure_generator_tool(toolchain, ui)?;
        replace_legacy_react_native(toolchain, ui)?;

        ui.show_header(&format!("Igniting {}", project));
        toolchain.run_generator(&self.generator_args(), root)?;

        ui.success(&format!("Created {} at {}", project, target.display()));
        ui.show_hint(&format!("cd {} to get started", project));
        Ok(CommandResult::success())
    }
}
