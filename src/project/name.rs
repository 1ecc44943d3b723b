//! Project name validation.

use regex::Regex;

use crate::error::{IgniteError, Result};

/// Names the generator refuses because they shadow framework identifiers.
pub const RESERVED_NAMES: &[&str] = &["React"];

const PROJECT_NAME_PATTERN: &str = r"(?i-u)^[a-z0-9]+$";

fn is_identifier(name: &str) -> bool {
    Regex::new(PROJECT_NAME_PATTERN)
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

/// Check that `name` is usable as a new project name.
///
/// Two independent passes: the name must be plain alphanumeric
/// (case-insensitive), and must not be exactly a reserved word
/// (case-sensitive, so `react` passes while `React` does not).
pub fn validate_project_name(name: &str) -> Result<()> {
    if !is_identifier(name) {
        return Err(IgniteError::InvalidProjectName {
            name: name.to_string(),
        });
    }

    if RESERVED_NAMES.contains(&name) {
        return Err(IgniteError::ReservedProjectName {
            name: name.to_string(),
        });
    }

    Ok(())
}
