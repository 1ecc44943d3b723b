//! Update command implementation.
//!
//! The `ignite update` command reinstalls the project generator globally
//! when npm reports a newer release.

use crate::error::Result;
use crate::toolchain::{ensure_generator_tool, OutdatedPackage, GENERATOR_PACKAGE};
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand<'a> {
    workspace: &'a Workspace,
}

impl<'a> UpdateCommand<'a> {
    /// Create a new update command.
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }
}

fn describe_update(outdated: &OutdatedPackage) -> String {
    match (&outdated.current, &outdated.latest) {
        (Some(current), Some(latest)) => {
            format!("Updated {} from {} to {}", GENERATOR_PACKAGE, current, latest)
        }
        (None, Some(latest)) => format!("Updated {} to {}", GENERATOR_PACKAGE, latest),
        _ => format!("Updated {}", GENERATOR_PACKAGE),
    }
}

impl Command for UpdateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let toolchain = self.workspace.toolchain();
        ensure_generator_tool(toolchain, ui)?;

        let mut spinner = ui.start_spinner("Checking for updates...");
        let outdated = match toolchain.outdated_global(GENERATOR_PACKAGE) {
            Ok(outdated) => outdated,
            Err(e) => {
                spinner.finish_error("Could not check for updates");
                return Err(e);
            }
        };

        let Some(outdated) = outdated else {
            spinner.finish_success(&format!("{} is already up to date", GENERATOR_PACKAGE));
            return Ok(CommandResult::success());
        };
        spinner.finish_and_clear();

        tracing::debug!(?outdated, "generator is outdated");
        ui.message(&format!("Installing the latest {}...", GENERATOR_PACKAGE));
        toolchain.install_global(GENERATOR_PACKAGE)?;

        ui.success(&describe_update(&outdated));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IgniteError;
    use crate::toolchain::{MockRegistry, MockToolchain, ToolCall};
    use crate::ui::MockUI;
    use std::path::Path;
    use std::rc::Rc;

    fn run(toolchain: &Rc<MockToolchain>, ui: &mut MockUI) -> Result<CommandResult> {
        let workspace = Workspace::new(
            Path::new("/project"),
            toolchain.clone(),
            Rc::new(MockRegistry::new()),
        );
        UpdateCommand::new(&workspace).execute(ui)
    }

    fn outdated(current: Option<&str>, latest: Option<&str>) -> OutdatedPackage {
        OutdatedPackage {
            current: current.map(str::to_string),
            wanted: latest.map(str::to_string),
            latest: latest.map(str::to_string),
        }
    }

    #[test]
    fn current_generator_is_left_alone() {
        let toolchain = Rc::new(MockToolchain::with_all_tools());
        let mut ui = MockUI::new();

        let result = run(&toolchain, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(
            toolchain.calls(),
            vec![ToolCall::CheckOutdated("generator-react-native-ignite".into())]
        );
        assert_eq!(ui.spinners(), ["Checking for updates..."]);
    }

    #[test]
    fn outdated_generator_is_reinstalled() {
        let toolchain = Rc::new(
            MockToolchain::with_all_tools().with_outdated(outdated(Some("1.0.0"), Some("2.1.0"))),
        );
        let mut ui = MockUI::new();

        run(&toolchain, &mut ui).unwrap();

        assert_eq!(
            toolchain.calls(),
            vec![
                ToolCall::CheckOutdated("generator-react-native-ignite".into()),
                ToolCall::InstallGlobal("generator-react-native-ignite".into()),
            ]
        );
        assert!(ui.has_success("from 1.0.0 to 2.1.0"));
    }

    #[test]
    fn failed_reinstall_is_tooling_error() {
        let toolchain = Rc::new(
            MockToolchain::with_all_tools()
                .with_outdated(outdated(None, Some("2.1.0")))
                .with_failing_install("generator-react-native-ignite"),
        );
        let mut ui = MockUI::new();

        let err = run(&toolchain, &mut ui).unwrap_err();

        assert!(matches!(err, IgniteError::ToolInstallFailed { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn installs_yo_first() {
        let toolchain = Rc::new(MockToolchain::new());
        let mut ui = MockUI::new();

        run(&toolchain, &mut ui).unwrap();

        assert_eq!(toolchain.calls()[0], ToolCall::InstallGlobal("yo".into()));
    }

    #[test]
    fn describes_versions_when_known() {
        assert_eq!(
            describe_update(&outdated(None, Some("2.0.0"))),
            "Updated generator-react-native-ignite to 2.0.0"
        );
        assert_eq!(
            describe_update(&outdated(None, None)),
            "Updated generator-react-native-ignite"
        );
    }
}
