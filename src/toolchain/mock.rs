//! Mock toolchain and registry for testing.
//!
//! `MockToolchain` implements [`Toolchain`] without spawning anything and
//! records every side-effecting call for later assertion.
//!
//! # Example
//!
//! ```
//! use ignite::toolchain::{MockToolchain, Tool, ToolCall, Toolchain};
//!
//! let toolchain = MockToolchain::new();
//! assert!(toolchain.locate(Tool::Yo).is_none());
//!
//! toolchain.install_global("yo").unwrap();
//! assert!(toolchain.locate(Tool::Yo).is_some());
//! assert_eq!(toolchain.calls(), vec![ToolCall::InstallGlobal("yo".to_string())]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{IgniteError, Result};

use super::command::CommandOutput;
use super::npm::OutdatedPackage;
use super::registry::PackageRegistry;
use super::tool::{Tool, YO_PACKAGE};
use super::Toolchain;

/// A side-effecting call made against a [`MockToolchain`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    InstallGlobal(String),
    UninstallGlobal(String),
    CheckOutdated(String),
    InstallDependency { package: String, cwd: PathBuf },
    RunGenerator { args: Vec<String>, cwd: PathBuf },
    RunScript { args: Vec<String>, cwd: PathBuf },
}

/// Toolchain double with configurable tool presence and outcomes.
#[derive(Debug, Default)]
pub struct MockToolchain {
    tools: RefCell<HashSet<Tool>>,
    versions: HashMap<Tool, String>,
    global_packages: RefCell<HashSet<String>>,
    outdated: Option<OutdatedPackage>,
    failing_installs: HashSet<String>,
    generator_exit: Option<i32>,
    script_stdout: String,
    script_exit: Option<i32>,
    calls: RefCell<Vec<ToolCall>>,
}

impl MockToolchain {
    /// A toolchain where nothing is installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A toolchain where `yo`, `npm` and `node` are all present.
    pub fn with_all_tools() -> Self {
        let mock = Self::new();
        for tool in [Tool::Yo, Tool::Npm, Tool::Node] {
            mock.tools.borrow_mut().insert(tool);
        }
        mock
    }

    /// Mark a tool as present on PATH.
    pub fn with_tool(self, tool: Tool) -> Self {
        self.tools.borrow_mut().insert(tool);
        self
    }

    /// Report `version` for `tool`.
    pub fn with_version(mut self, tool: Tool, version: &str) -> Self {
        self.tools.borrow_mut().insert(tool);
        self.versions.insert(tool, version.to_string());
        self
    }

    /// Mark an npm package as globally installed.
    pub fn with_global_package(self, package: &str) -> Self {
        self.global_packages.borrow_mut().insert(package.to_string());
        self
    }

    /// Make the outdated check report this package.
    pub fn with_outdated(mut self, outdated: OutdatedPackage) -> Self {
        self.outdated = Some(outdated);
        self
    }

    /// Make installing `package` (globally or locally) fail.
    pub fn with_failing_install(mut self, package: &str) -> Self {
        self.failing_installs.insert(package.to_string());
        self
    }

    /// Make generator runs exit with `code`.
    pub fn with_generator_exit(mut self, code: i32) -> Self {
        self.generator_exit = Some(code);
        self
    }

    /// Stdout (and optionally a failing exit code) for script runs.
    pub fn with_script_output(mut self, stdout: &str, exit: Option<i32>) -> Self {
        self.script_stdout = stdout.to_string();
        self.script_exit = exit;
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<ToolCall> {
        self.calls.borrow().clone()
    }

    /// Arguments of every generator run.
    pub fn generator_runs(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ToolCall::RunGenerator { args, .. } => Some(args.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether any process would have been spawned.
    pub fn spawned_anything(&self) -> bool {
        !self.calls.borrow().is_empty()
    }

    fn record(&self, call: ToolCall) {
        self.calls.borrow_mut().push(call);
    }

    fn install_failure(&self, action: &str, package: &str) -> Option<IgniteError> {
        self.failing_installs
            .contains(package)
            .then(|| IgniteError::ToolInstallFailed {
                action: action.to_string(),
                package: package.to_string(),
                message: "mock failure".to_string(),
            })
    }
}

impl Toolchain for MockToolchain {
    fn locate(&self, tool: Tool) -> Option<PathBuf> {
        self.tools
            .borrow()
            .contains(&tool)
            .then(|| PathBuf::from("/mock/bin").join(tool.default_binary()))
    }

    fn version(&self, tool: Tool) -> Option<String> {
        self.versions.get(&tool).cloned()
    }

    fn has_global_package(&self, package: &str) -> bool {
        self.global_packages.borrow().contains(package)
    }

    fn install_global(&self, package: &str) -> Result<()> {
        self.record(ToolCall::InstallGlobal(package.to_string()));
        if let Some(err) = self.install_failure("install", package) {
            return Err(err);
        }
        self.global_packages.borrow_mut().insert(package.to_string());
        if package == YO_PACKAGE {
            self.tools.borrow_mut().insert(Tool::Yo);
        }
        Ok(())
    }

    fn uninstall_global(&self, package: &str) -> Result<()> {
        self.record(ToolCall::UninstallGlobal(package.to_string()));
        self.global_packages.borrow_mut().remove(package);
        Ok(())
    }

    fn outdated_global(&self, package: &str) -> Result<Option<OutdatedPackage>> {
        self.record(ToolCall::CheckOutdated(package.to_string()));
        Ok(self.outdated.clone())
    }

    fn install_dependency(&self, package: &str, cwd: &Path) -> Result<()> {
        self.record(ToolCall::InstallDependency {
            package: package.to_string(),
            cwd: cwd.to_path_buf(),
        });
        match self.install_failure("install", package) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn run_generator(&self, args: &[String], cwd: &Path) -> Result<()> {
        self.record(ToolCall::RunGenerator {
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });
        match self.generator_exit {
            Some(code) if code != 0 => Err(IgniteError::CommandFailed {
                command: format!("yo {}", args.join(" ")),
                code: Some(code),
            }),
            _ => Ok(()),
        }
    }

    fn run_script(&self, _script: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        self.record(ToolCall::RunScript {
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });
        let success = self.script_exit.is_none_or(|c| c == 0);
        Ok(CommandOutput {
            exit_code: Some(self.script_exit.unwrap_or(0)),
            stdout: self.script_stdout.clone(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success,
        })
    }
}

/// Registry double answering from a fixed set of package names.
#[derive(Debug, Default)]
pub struct MockRegistry {
    packages: HashSet<String>,
    unavailable: bool,
    queries: RefCell<Vec<String>>,
}

impl MockRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `package`.
    pub fn with_package(mut self, package: &str) -> Self {
        self.packages.insert(package.to_string());
        self
    }

    /// Make every query fail as if the network were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// Packages queried so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl PackageRegistry for MockRegistry {
    fn exists(&self, package: &str) -> Result<bool> {
        self.queries.borrow_mut().push(package.to_string());
        if self.unavailable {
            return Err(IgniteError::RegistryUnavailable {
                module: package.to_string(),
                message: "mock registry is offline".to_string(),
            });
        }
        Ok(self.packages.contains(package))
    }
}
