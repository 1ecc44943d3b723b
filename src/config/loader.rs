//! Reading and writing the `.ignite` file.
//!
//! The file is a CommonJS-style assignment, `module.exports = { ... }`,
//! whose right-hand side is an object literal. Literals are read as JSON5,
//! so unquoted keys, single quotes, comments and trailing commas load. A
//! bare document is accepted too. Anything computed (`require`, function
//! calls) is malformed.
//! Loading never fails: a missing or unreadable file degrades to an empty
//! configuration, and the caller decides whether to warn.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;

use super::schema::LocalConfig;

/// Name of the local configuration file.
pub const CONFIG_FILE: &str = ".ignite";

const MODULE_EXPORTS: &str = "module.exports";

/// What loading `.ignite` produced.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file parsed.
    Loaded(LocalConfig),
    /// There is no `.ignite` file.
    Absent,
    /// The file exists but could not be read or parsed.
    Malformed { path: PathBuf, reason: String },
}

impl LoadOutcome {
    /// The loaded configuration, or an empty one.
    pub fn into_config(self) -> LocalConfig {
        match self {
            Self::Loaded(config) => config,
            Self::Absent | Self::Malformed { .. } => LocalConfig::default(),
        }
    }

    /// Human-readable warning for a malformed file.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Malformed { path, reason } => Some(format!(
                "Ignoring unreadable configuration at {}: {}",
                path.display(),
                reason
            )),
            _ => None,
        }
    }
}

/// Path of the `.ignite` file for a project directory.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Load `.ignite` from `dir`.
pub fn load_local_config(dir: &Path) -> LoadOutcome {
    let path = config_path(dir);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no local configuration");
            return LoadOutcome::Absent;
        }
        Err(e) => {
            return LoadOutcome::Malformed {
                path,
                reason: e.to_string(),
            }
        }
    };

    match parse_local_config(&content) {
        Ok(config) => {
            tracing::debug!(
                path = %path.display(),
                generators = config.generators.len(),
                "loaded local configuration"
            );
            LoadOutcome::Loaded(config)
        }
        Err(reason) => LoadOutcome::Malformed { path, reason },
    }
}

/// Parse the text of an `.ignite` file.
pub fn parse_local_config(content: &str) -> std::result::Result<LocalConfig, String> {
    let body = strip_module_exports(content);
    if body.is_empty() {
        return Err("file is empty".to_string());
    }
    let value: Value = json5::from_str(body).map_err(|e| e.to_string())?;
    LocalConfig::from_value(value)
}

fn strip_module_exports(content: &str) -> &str {
    let trimmed = content.trim();
    let body = match trimmed.strip_prefix(MODULE_EXPORTS) {
        Some(rest) => rest.trim_start().strip_prefix('=').unwrap_or(rest),
        None => trimmed,
    };
    body.trim().trim_end_matches(';').trim_end()
}

/// Render a configuration in the on-disk format.
pub fn render_local_config(config: &LocalConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(&config.to_value())?;
    Ok(format!("{} = {}\n", MODULE_EXPORTS, json))
}

/// Overwrite `.ignite` in `dir`.
pub fn save_local_config(dir: &Path, config: &LocalConfig) -> Result<PathBuf> {
    let path = config_path(dir);
    let rendered = render_local_config(config)?;
    let tmp = dir.join(format!("{}.tmp", CONFIG_FILE));
    fs::write(&tmp, rendered)?;
    if let Err(e) = fs::rename(&tmp, &path) {
        fs::remove_file(&tmp).ok();
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), "wrote local configuration");
    Ok(path)
}
