//! External process execution.

use crate::error::{IgniteError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when inherited).
    pub stdout: String,

    /// Standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program exited with status 0.
    pub success: bool,
}

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Child shares our terminal (generators prompt the user).
    #[default]
    Inherit,
    /// Stdout and stderr are collected for parsing.
    Capture,
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Run `program` with `args`.
///
/// The program is resolved on PATH first so that wrappers such as
/// `npm.cmd` are found on Windows. Failure to start the process is a
/// [`IgniteError::CommandFailed`] with no exit code; a non-zero exit is
/// reported through [`CommandOutput::success`], not as an error.
pub fn run(
    program: &str,
    args: &[String],
    cwd: Option<&Path>,
    stdio: StdioMode,
) -> Result<CommandOutput> {
    let start = Instant::now();
    let resolved = find_executable(program).unwrap_or_else(|| PathBuf::from(program));

    tracing::debug!(
        command = %display_command(program, args),
        cwd = ?cwd,
        "spawning process"
    );

    let mut cmd = Command::new(&resolved);
    cmd.args(args);

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    match stdio {
        StdioMode::Inherit => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
        StdioMode::Capture => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }
    }

    let output = cmd.output().map_err(|e| {
        tracing::debug!(error = %e, program, "failed to start process");
        IgniteError::CommandFailed {
            command: display_command(program, args),
            code: None,
        }
    })?;

    let duration = start.elapsed();
    tracing::debug!(status = ?output.status.code(), ?duration, program, "process exited");

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

/// Run a program and collect its output without touching the terminal.
pub fn run_quiet(program: &str, args: &[String], cwd: Option<&Path>) -> Result<CommandOutput> {
    run(program, args, cwd, StdioMode::Capture)
}

/// Run a program and turn a non-zero exit into an error.
pub fn run_checked(
    program: &str,
    args: &[String],
    cwd: Option<&Path>,
    stdio: StdioMode,
) -> Result<CommandOutput> {
    let output = run(program, args, cwd, stdio)?;
    if output.success {
        Ok(output)
    } else {
        Err(IgniteError::CommandFailed {
            command: display_command(program, args),
            code: output.exit_code,
        })
    }
}

/// Look up an executable the way a shell would.
///
/// Names containing a path separator are checked directly; bare names
/// are searched for in each `PATH` entry.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path).find_map(|dir| {
        executable_names(name)
            .into_iter()
            .map(|n| dir.join(n))
            .find(|p| is_executable(p))
    })
}

#[cfg(windows)]
fn executable_names(name: &str) -> Vec<String> {
    if Path::new(name).extension().is_some() {
        return vec![name.to_string()];
    }
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    std::iter::once(name.to_string())
        .chain(exts.split(';').filter(|e| !e.is_empty()).map(|e| format!("{}{}", name, e)))
        .collect()
}

#[cfg(not(windows))]
fn executable_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Convenience for building owned argument vectors from literals.
pub fn args<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string_lossy().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn display_command_joins_args() {
        assert_eq!(
            display_command("npm", &args(["install", "-g", "yo"])),
            "npm install -g yo"
        );
        assert_eq!(display_command("yo", &[]), "yo");
    }

    #[test]
    fn missing_program_is_command_failed_without_code() {
        let err = run_quiet("this-command-does-not-exist-12345", &[], None).unwrap_err();
        assert!(matches!(
            err,
            IgniteError::CommandFailed { code: None, .. }
        ));
    }

    #[test]
    fn find_executable_misses_unknown_names() {
        assert!(find_executable("this-command-does-not-exist-12345").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn run_captures_stdout() {
        let result = run_quiet("sh", &args(["-c", "echo hello"]), None).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_non_zero_exit_without_error() {
        let result = run_quiet("sh", &args(["-c", "exit 3"]), None).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn run_checked_turns_non_zero_into_error() {
        let err = run_checked("sh", &args(["-c", "exit 4"]), None, StdioMode::Capture).unwrap_err();
        assert!(matches!(
            err,
            IgniteError::CommandFailed { code: Some(4), .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn run_uses_working_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();
        let result = run_quiet("ls", &[], Some(temp.path())).unwrap();
        assert!(result.stdout.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn find_executable_accepts_explicit_paths() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("fake-yo");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let found = find_executable(script.to_str().unwrap());
        assert_eq!(found, Some(script.clone()));

        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(find_executable(script.to_str().unwrap()).is_none());
    }
}
