//! External tools: `yo`, `npm`, `node` and the package registry.
//!
//! Every process Ignite spawns goes through the [`Toolchain`] trait and
//! every registry query through [`PackageRegistry`], so commands can be
//! exercised against [`MockToolchain`] / [`MockRegistry`] in tests.

pub mod command;
pub mod mock;
pub mod npm;
pub mod registry;
pub mod requirements;
pub mod system;
pub mod tool;

pub use command::{display_command, find_executable, CommandOutput, StdioMode};
pub use mock::{MockRegistry, MockToolchain, ToolCall};
pub use npm::OutdatedPackage;
pub use registry::{HttpRegistry, PackageRegistry};
pub use requirements::{ensure_generator_tool, replace_legacy_react_native};
pub use system::SystemToolchain;
pub use tool::{
    Tool, ToolchainConfig, DEFAULT_REGISTRY_URL, GENERATOR_NAMESPACE, GENERATOR_PACKAGE,
    LEGACY_REACT_NATIVE_PACKAGE, REACT_NATIVE_CLI_PACKAGE, YO_PACKAGE,
};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Operations Ignite performs against external tools.
pub trait Toolchain {
    /// Resolve a tool's executable, if it is installed.
    fn locate(&self, tool: Tool) -> Option<PathBuf>;

    /// The tool's reported version, if it runs.
    fn version(&self, tool: Tool) -> Option<String>;

    /// Whether an npm package is installed globally.
    fn has_global_package(&self, package: &str) -> bool;

    /// `npm install -g <package>`.
    fn install_global(&self, package: &str) -> Result<()>;

    /// `npm uninstall -g <package>`.
    fn uninstall_global(&self, package: &str) -> Result<()>;

    /// Newer release of a global package, or `None` when current.
    fn outdated_global(&self, package: &str) -> Result<Option<OutdatedPackage>>;

    /// `npm install --save <package>` inside `cwd`.
    fn install_dependency(&self, package: &str, cwd: &Path) -> Result<()>;

    /// Run `yo` with inherited stdio. A non-zero exit is an error.
    fn run_generator(&self, args: &[String], cwd: &Path) -> Result<()>;

    /// Evaluate a JavaScript snippet with `node -e`, capturing output.
    fn run_script(&self, script: &str, args: &[String], cwd: &Path) -> Result<CommandOutput>;
}
