//! Doctor command implementation.
//!
//! The `ignite doctor` command prints the versions and locations of the
//! tools Ignite relies on. It is read-only and always succeeds.

use crate::doctor::DoctorReport;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand<'a> {
    workspace: &'a Workspace,
}

impl<'a> DoctorCommand<'a> {
    /// Create a new doctor command.
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }
}

impl Command for DoctorCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = DoctorReport::gather(self.workspace.toolchain(), self.workspace.root());
        for line in report.to_string().lines() {
            ui.output(line);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::{MockRegistry, MockToolchain, Tool};
    use crate::ui::MockUI;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[test]
    fn succeeds_with_nothing_installed() {
        let temp = TempDir::new().unwrap();
        let toolchain = Rc::new(MockToolchain::new());
        let workspace = Workspace::new(
            temp.path(),
            toolchain.clone(),
            Rc::new(MockRegistry::new()),
        );
        let mut ui = MockUI::new();

        let result = DoctorCommand::new(&workspace).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.outputs().len(), 6);
        assert!(ui.has_output("React Native: -"));
        assert!(!toolchain.spawned_anything());
    }

    #[test]
    fn prints_tool_versions() {
        let temp = TempDir::new().unwrap();
        let toolchain = MockToolchain::new()
            .with_version(Tool::Node, "20.11.0")
            .with_version(Tool::Yo, "4.3.1");
        let workspace = Workspace::new(
            temp.path(),
            Rc::new(toolchain),
            Rc::new(MockRegistry::new()),
        );
        let mut ui = MockUI::new();

        DoctorCommand::new(&workspace).execute(&mut ui).unwrap();

        assert!(ui.has_output("Node:         20.11.0 (/mock/bin/node)"));
        assert!(ui.has_output("yo:           4.3.1"));
        assert!(ui.has_output("npm:          -"));
    }
}
