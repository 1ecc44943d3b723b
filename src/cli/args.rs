//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::toolchain::{ToolchainConfig, DEFAULT_REGISTRY_URL};
use crate::ui::OutputMode;

/// Ignite - Scaffold and manage React Native projects.
#[derive(Debug, Parser)]
#[command(name = "ignite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory to run in (overrides current directory)
    #[arg(short, long, global = true, env = "IGNITE_PROJECT")]
    pub project: Option<PathBuf>,

    /// Generator executable
    #[arg(long, global = true, env = "IGNITE_YO", default_value = "yo")]
    pub yo: String,

    /// Package manager executable
    #[arg(long, global = true, env = "IGNITE_NPM", default_value = "npm")]
    pub npm: String,

    /// JavaScript runtime executable
    #[arg(long, global = true, env = "IGNITE_NODE", default_value = "node")]
    pub node: String,

    /// Package registry base URL
    #[arg(long, global = true, env = "IGNITE_REGISTRY", default_value = DEFAULT_REGISTRY_URL)]
    pub registry: String,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Executables and registry selected by the global flags.
    pub fn toolchain_config(&self) -> ToolchainConfig {
        ToolchainConfig {
            yo: self.yo.clone(),
            npm: self.npm.clone(),
            node: self.node.clone(),
            registry_url: self.registry.clone(),
        }
    }

    /// Output mode selected by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new React Native project
    New(NewArgs),

    /// Run a generator configured in .ignite
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Update the Ignite project generator
    Update,

    /// Add an Ignite plugin to the current project
    #[command(visible_alias = "a")]
    Add(AddArgs),

    /// Import an external resource into the project
    #[command(visible_alias = "i")]
    Import(ImportArgs),

    /// Show environment information
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NewArgs {
    /// Project name (letters and digits only)
    #[arg(id = "project_name", value_name = "PROJECT")]
    pub project: String,

    /// Template repository passed to the generator
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// Template branch passed to the generator
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Forwarded to the generator unchanged; a bare flag sends "true"
    #[arg(long, value_name = "VALUE", num_args = 0..=1, default_missing_value = "true")]
    pub latest: Option<String>,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// Generator type, as listed under "generators" in .ignite
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// Name handed to the generator
    pub name: String,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Plugin name, without the "ignite-" prefix
    pub plugin: String,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// Resource type understood by the project generator
    #[arg(value_name = "TYPE")]
    pub kind: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
