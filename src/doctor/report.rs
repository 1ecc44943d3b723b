//! The environment report printed by `ignite doctor`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::project::module_dir;
use crate::toolchain::{Tool, Toolchain};

/// Shown wherever a value could not be determined.
pub const PLACEHOLDER: &str = "-";

const LABEL_WIDTH: usize = 14;

/// Snapshot of the tools Ignite depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorReport {
    pub host: String,
    pub ignite_version: Option<String>,
    pub ignite_path: Option<PathBuf>,
    pub node_version: Option<String>,
    pub node_path: Option<PathBuf>,
    pub npm_version: Option<String>,
    pub yo_version: Option<String>,
    pub react_native_version: Option<String>,
}

#[derive(Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

impl DoctorReport {
    /// Collect everything. Never fails; unknown values stay `None`.
    pub fn gather(toolchain: &dyn Toolchain, project_root: &Path) -> Self {
        Self {
            host: host_platform(),
            ignite_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            ignite_path: std::env::current_exe().ok(),
            node_version: toolchain.version(Tool::Node),
            node_path: toolchain.locate(Tool::Node),
            npm_version: toolchain.version(Tool::Npm),
            yo_version: toolchain.version(Tool::Yo),
            react_native_version: installed_version(project_root, "react-native"),
        }
    }

    /// Report lines, in display order.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Host", self.host.clone()),
            (
                "Ignite",
                with_path(self.ignite_version.as_deref(), self.ignite_path.as_deref()),
            ),
            (
                "Node",
                with_path(self.node_version.as_deref(), self.node_path.as_deref()),
            ),
            ("npm", or_placeholder(self.npm_version.as_deref())),
            ("yo", or_placeholder(self.yo_version.as_deref())),
            (
                "React Native",
                or_placeholder(self.react_native_version.as_deref()),
            ),
        ]
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            let label = format!("{}:", label);
            writeln!(f, "{:<width$}{}", label, value, width = LABEL_WIDTH)?;
        }
        Ok(())
    }
}

/// `<os> <arch>` of the running host.
pub fn host_platform() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Version recorded in `node_modules/<module>/package.json`, if readable.
pub fn installed_version(project_root: &Path, module: &str) -> Option<String> {
    let manifest = module_dir(project_root, module).join("package.json");
    let content = fs::read_to_string(&manifest).ok()?;
    match serde_json::from_str::<PackageManifest>(&content) {
        Ok(parsed) => parsed.version,
        Err(e) => {
            tracing::debug!(path = %manifest.display(), error = %e, "unreadable package manifest");
            None
        }
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

fn with_path(version: Option<&str>, path: Option<&Path>) -> String {
    let path = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    format!("{} ({})", or_placeholder(version), path)
}
