//! npm argument construction and output parsing.
//!
//! `npm ls` and `npm outdated` both exit non-zero in perfectly normal
//! situations (nothing listed, something outdated), so the exit status
//! alone never decides the outcome; stdout is parsed first.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::Result;

use super::command::args;

/// A globally installed package with a newer release available.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutdatedPackage {
    /// Installed version, if npm reported one.
    #[serde(default)]
    pub current: Option<String>,
    /// Highest version satisfying the install range.
    #[serde(default)]
    pub wanted: Option<String>,
    /// Latest published version.
    #[serde(default)]
    pub latest: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListOutput {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
}

/// `npm install -g <package>`
pub fn install_global_args(package: &str) -> Vec<String> {
    args(["install", "-g", package])
}

/// `npm uninstall -g <package>`
pub fn uninstall_global_args(package: &str) -> Vec<String> {
    args(["uninstall", "-g", package])
}

/// `npm install --save <package>`
pub fn install_save_args(package: &str) -> Vec<String> {
    args(["install", "--save", package])
}

/// `npm ls -g --depth=0 --json <package>`
pub fn list_global_args(package: &str) -> Vec<String> {
    args(["ls", "-g", "--depth=0", "--json", package])
}

/// `npm outdated -g --json <package>`
pub fn outdated_global_args(package: &str) -> Vec<String> {
    args(["outdated", "-g", "--json", package])
}

/// Whether `npm ls --json` output lists `package` as a dependency.
///
/// Unparsable output counts as "not installed".
pub fn parse_global_list(stdout: &str, package: &str) -> bool {
    if stdout.trim().is_empty() {
        return false;
    }
    serde_json::from_str::<ListOutput>(stdout)
        .map(|list| list.dependencies.contains_key(package))
        .unwrap_or(false)
}

/// Interpret `npm outdated --json` output for `package`.
///
/// Empty output and an empty object both mean "up to date", unless npm
/// exited non-zero. A top-level `error` object is npm reporting its own
/// failure (registry unreachable, bad auth) and is never "up to date".
pub fn parse_outdated(
    stdout: &str,
    package: &str,
    succeeded: bool,
) -> Result<Option<OutdatedPackage>> {
    if stdout.trim().is_empty() {
        if succeeded {
            return Ok(None);
        }
        return Err(anyhow::anyhow!("npm outdated exited with an error and no output").into());
    }

    let value: serde_json::Value = serde_json::from_str(stdout)?;
    if let Some(error) = value.get("error") {
        let code = error.get("code").and_then(|c| c.as_str()).unwrap_or("unknown");
        let summary = error.get("summary").and_then(|s| s.as_str()).unwrap_or_default();
        return Err(anyhow::anyhow!("npm reported {}: {}", code, summary.trim()).into());
    }

    let mut entries: BTreeMap<String, OutdatedPackage> = serde_json::from_value(value)?;
    Ok(entries.remove(package))
}

/// Extract a version number from `--version` style output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
