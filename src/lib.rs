//! Ignite - Scaffold and manage React Native projects.
//!
//! Ignite is a command dispatcher: it validates its arguments and the
//! working directory, makes sure the external tools it relies on are
//! installed, and hands the real work to `yo`, `npm` and `node`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The project's `.ignite` configuration file
//! - [`doctor`] - Environment report
//! - [`error`] - Error types, result alias and exit codes
//! - [`generators`] - Generator registry used by `ignite generate`
//! - [`plugins`] - Plugin naming and initialization
//! - [`project`] - Project-name validation and project detection
//! - [`toolchain`] - External tools and the package registry
//! - [`ui`] - Spinners and terminal output
//! - [`workspace`] - The context commands run in
//!
//! # Example
//!
//! ```
//! use ignite::config::LocalConfig;
//! use ignite::generators::GeneratorRegistry;
//!
//! let config = LocalConfig::default().with_generator("component", "generator-ignite-component");
//! let registry = GeneratorRegistry::from_config(&config);
//!
//! assert!(registry.get("component").is_ok());
//! assert!(registry.get("screen").is_err());
//! ```

pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod generators;
pub mod plugins;
pub mod project;
pub mod toolchain;
pub mod ui;
pub mod workspace;

pub use error::{IgniteError, Result};
