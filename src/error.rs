//! Error types for Ignite operations.
//!
//! This module defines [`IgniteError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure class maps to a distinct process exit status via
//!   [`IgniteError::exit_code`], so scripted callers can trust `$?`
//! - Use `anyhow::Error` (via `IgniteError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for unexpected failures (io, json, anything uncategorized).
pub const EXIT_UNEXPECTED: i32 = 1;
/// Exit status for failed precondition checks.
pub const EXIT_VALIDATION: i32 = 2;
/// Exit status for failed package-manager operations.
pub const EXIT_TOOLING: i32 = 3;
/// Exit status for generators that are not configured or not installed.
pub const EXIT_GENERATOR: i32 = 4;
/// Exit status when a plugin does not exist in the registry.
pub const EXIT_PLUGIN_NOT_FOUND: i32 = 5;
/// Exit status when a plugin hands back a configuration we cannot store.
pub const EXIT_PLUGIN_CONFIG: i32 = 6;
/// Exit status when the package registry cannot be reached.
pub const EXIT_REGISTRY: i32 = 7;

/// Core error type for Ignite operations.
#[derive(Debug, Error)]
pub enum IgniteError {
    /// Project name is not a plain alphanumeric identifier.
    #[error("\"{name}\" is not a valid name for a project. Please use a valid identifier name (alphanumeric).")]
    InvalidProjectName { name: String },

    /// Project name collides with a reserved word.
    #[error("\"{name}\" is a reserved word. Please choose another project name.")]
    ReservedProjectName { name: String },

    /// Target project directory already exists.
    #[error("Directory {path} already exists.")]
    DirectoryExists { path: PathBuf },

    /// `new` was run from inside an existing Ignite project.
    #[error("Ignite cannot create a new project inside an existing Ignite project ({path} exists).")]
    InsideIgniteProject { path: PathBuf },

    /// A project-scoped command was run outside an Ignite project.
    #[error("This is not an Ignite project directory ({path} is missing). Run this command from your project root.")]
    NotIgniteProject { path: PathBuf },

    /// Installing or uninstalling a package failed.
    #[error("Failed to {action} '{package}': {message}")]
    ToolInstallFailed {
        action: String,
        package: String,
        message: String,
    },

    /// A spawned command failed to start or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// No generator registered for the requested type.
    #[error("Unknown generator '{kind}'. Add it under \"generators\" in .ignite or install a plugin that provides it.")]
    UnknownGenerator { kind: String },

    /// A configured generator module is not present in node_modules.
    #[error("Generator module '{module}' is not installed (expected {path})")]
    GeneratorNotInstalled { module: String, path: PathBuf },

    /// The plugin package does not exist in the registry.
    #[error("There is no ignite plugin called '{plugin}'. Expected to find the npm module '{module}'.")]
    PluginNotFound { plugin: String, module: String },

    /// A plugin's `initialize` returned something that is not a valid configuration.
    #[error("Plugin '{module}' returned an invalid configuration: {message}")]
    InvalidPluginConfig { module: String, message: String },

    /// The registry could not answer an existence query.
    #[error("Could not query the package registry for '{module}': {message}")]
    RegistryUnavailable { module: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IgniteError {
    /// Process exit status this error should produce.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidProjectName { .. }
            | Self::ReservedProjectName { .. }
            | Self::DirectoryExists { .. }
            | Self::InsideIgniteProject { .. }
            | Self::NotIgniteProject { .. } => EXIT_VALIDATION,
            Self::ToolInstallFailed { .. } => EXIT_TOOLING,
            Self::CommandFailed { code, .. } => match code {
                Some(c) if *c != 0 => *c,
                _ => EXIT_UNEXPECTED,
            },
            Self::UnknownGenerator { .. } | Self::GeneratorNotInstalled { .. } => EXIT_GENERATOR,
            Self::PluginNotFound { .. } => EXIT_PLUGIN_NOT_FOUND,
            Self::InvalidPluginConfig { .. } => EXIT_PLUGIN_CONFIG,
            Self::RegistryUnavailable { .. } => EXIT_REGISTRY,
            Self::Io(_) | Self::Json(_) | Self::Other(_) => EXIT_UNEXPECTED,
        }
    }
}

/// Result type alias for Ignite operations.
pub type Result<T> = std::result::Result<T, IgniteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_project_name_displays_name() {
        let err = IgniteError::InvalidProjectName {
            name: "my-app".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"my-app\""));
        assert!(msg.contains("alphanumeric"));
    }

    #[test]
    fn directory_exists_displays_path() {
        let err = IgniteError::DirectoryExists {
            path: PathBuf::from("/work/foo"),
        };
        assert!(err.to_string().contains("/work/foo"));
    }

    #[test]
    fn plugin_not_found_names_expected_module() {
        let err = IgniteError::PluginNotFound {
            plugin: "maps".into(),
            module: "ignite-maps".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'maps'"));
        assert!(msg.contains("ignite-maps"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = IgniteError::CommandFailed {
            command: "yo react-native-ignite foo".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("yo react-native-ignite foo"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn validation_errors_exit_with_validation_status() {
        let errors = [
            IgniteError::InvalidProjectName { name: "a b".into() },
            IgniteError::ReservedProjectName {
                name: "React".into(),
            },
            IgniteError::DirectoryExists {
                path: PathBuf::from("foo"),
            },
            IgniteError::InsideIgniteProject {
                path: PathBuf::from("App"),
            },
            IgniteError::NotIgniteProject {
                path: PathBuf::from("App"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), EXIT_VALIDATION, "{err}");
        }
    }

    #[test]
    fn each_failure_class_has_its_own_status() {
        let codes = [
            IgniteError::ToolInstallFailed {
                action: "install".into(),
                package: "yo".into(),
                message: "exit 1".into(),
            }
            .exit_code(),
            IgniteError::UnknownGenerator {
                kind: "component".into(),
            }
            .exit_code(),
            IgniteError::PluginNotFound {
                plugin: "x".into(),
                module: "ignite-x".into(),
            }
            .exit_code(),
            IgniteError::InvalidPluginConfig {
                module: "ignite-x".into(),
                message: "not an object".into(),
            }
            .exit_code(),
            IgniteError::RegistryUnavailable {
                module: "ignite-x".into(),
                message: "timeout".into(),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [3, 4, 5, 6, 7]);
    }

    #[test]
    fn command_failed_propagates_child_status() {
        let err = IgniteError::CommandFailed {
            command: "yo".into(),
            code: Some(42),
        };
        assert_eq!(err.exit_code(), 42);
    }

    #[test]
    fn command_failed_without_status_is_unexpected() {
        let err = IgniteError::CommandFailed {
            command: "yo".into(),
            code: None,
        };
        assert_eq!(err.exit_code(), EXIT_UNEXPECTED);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: IgniteError = io_err.into();
        assert!(matches!(err, IgniteError::Io(_)));
        assert_eq!(err.exit_code(), EXIT_UNEXPECTED);
    }
}
