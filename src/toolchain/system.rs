//! [`Toolchain`] backed by real processes.

use std::path::{Path, PathBuf};

use crate::error::{IgniteError, Result};

use super::command::{
    display_command, find_executable, run, run_checked, run_quiet, CommandOutput, StdioMode,
};
use super::npm::{self, OutdatedPackage};
use super::tool::{Tool, ToolchainConfig};
use super::Toolchain;

/// Spawns the configured `yo`, `npm` and `node` executables.
#[derive(Debug, Clone, Default)]
pub struct SystemToolchain {
    config: ToolchainConfig,
}

impl SystemToolchain {
    /// Create a toolchain using the given executables.
    pub fn new(config: ToolchainConfig) -> Self {
        Self { config }
    }

    fn npm(&self) -> &str {
        self.config.binary(Tool::Npm)
    }

    fn npm_mutation(
        &self,
        action: &str,
        package: &str,
        args: Vec<String>,
        cwd: Option<&Path>,
    ) -> Result<()> {
        let output = run(self.npm(), &args, cwd, StdioMode::Inherit).map_err(|_| {
            IgniteError::ToolInstallFailed {
                action: action.to_string(),
                package: package.to_string(),
                message: format!("could not start '{}'", self.npm()),
            }
        })?;

        if output.success {
            Ok(())
        } else {
            Err(IgniteError::ToolInstallFailed {
                action: action.to_string(),
                package: package.to_string(),
                message: format!(
                    "'{}' exited with code {:?}",
                    display_command(self.npm(), &args),
                    output.exit_code
                ),
            })
        }
    }
}

impl Toolchain for SystemToolchain {
    fn locate(&self, tool: Tool) -> Option<PathBuf> {
        find_executable(self.config.binary(tool))
    }

    fn version(&self, tool: Tool) -> Option<String> {
        let output = run_quiet(self.config.binary(tool), &["--version".to_string()], None).ok()?;
        if !output.success {
            return None;
        }
        npm::extract_version(&output.stdout)
    }

    fn has_global_package(&self, package: &str) -> bool {
        match run_quiet(self.npm(), &npm::list_global_args(package), None) {
            Ok(output) => npm::parse_global_list(&output.stdout, package),
            Err(e) => {
                tracing::debug!(error = %e, package, "global package listing failed");
                false
            }
        }
    }

    fn install_global(&self, package: &str) -> Result<()> {
        self.npm_mutation("install", package, npm::install_global_args(package), None)
    }

    fn uninstall_global(&self, package: &str) -> Result<()> {
        self.npm_mutation("uninstall", package, npm::uninstall_global_args(package), None)
    }

    fn outdated_global(&self, package: &str) -> Result<Option<OutdatedPackage>> {
        let output = run_quiet(self.npm(), &npm::outdated_global_args(package), None)?;
        npm::parse_outdated(&output.stdout, package, output.success).map_err(|e| {
            IgniteError::ToolInstallFailed {
                action: "check for updates of".to_string(),
                package: package.to_string(),
                message: format!("{} {}", e, output.stderr.trim()).trim().to_string(),
            }
        })
    }

    fn install_dependency(&self, package: &str, cwd: &Path) -> Result<()> {
        self.npm_mutation("install", package, npm::install_save_args(package), Some(cwd))
    }

    fn run_generator(&self, args: &[String], cwd: &Path) -> Result<()> {
        run_checked(self.config.binary(Tool::Yo), args, Some(cwd), StdioMode::Inherit).map(|_| ())
    }

    fn run_script(&self, script: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        let mut full = vec!["-e".to_string(), script.to_string()];
        full.extend(args.iter().cloned());
        run_quiet(self.config.binary(Tool::Node), &full, Some(cwd))
    }
}
