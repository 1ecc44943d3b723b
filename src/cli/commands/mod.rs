//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the
//! [`Workspace`](crate::workspace::Workspace) it runs in rather than
//! reading the process's current directory.

pub mod add;
pub mod completions;
pub mod dispatcher;
pub mod doctor;
pub mod generate;
pub mod import;
pub mod new;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
