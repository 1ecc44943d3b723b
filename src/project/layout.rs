//! Working-directory checks.
//!
//! An Ignite project is recognized by its `App` directory. These checks are
//! point-in-time: nothing stops the directory from appearing between the
//! check and the generator run, and the generator fails on its own then.

use std::path::{Path, PathBuf};

use crate::error::{IgniteError, Result};

/// Directory whose presence marks an Ignite project root.
pub const APP_DIR: &str = "App";

/// Where project-local npm dependencies live.
pub const NODE_MODULES_DIR: &str = "node_modules";

/// Whether `dir` looks like the root of an Ignite project.
pub fn is_ignite_project(dir: &Path) -> bool {
    dir.join(APP_DIR).is_dir()
}

/// Fail unless `dir` is an Ignite project root.
pub fn require_ignite_project(dir: &Path) -> Result<()> {
    if is_ignite_project(dir) {
        Ok(())
    } else {
        Err(IgniteError::NotIgniteProject {
            path: dir.join(APP_DIR),
        })
    }
}

/// Fail if `dir` is already an Ignite project root.
pub fn forbid_ignite_project(dir: &Path) -> Result<()> {
    if dir.join(APP_DIR).exists() {
        Err(IgniteError::InsideIgniteProject {
            path: dir.join(APP_DIR),
        })
    } else {
        Ok(())
    }
}

/// Fail if `parent/name` already exists; otherwise return that path.
pub fn project_target(parent: &Path, name: &str) -> Result<PathBuf> {
    let target = parent.join(name);
    if target.exists() {
        Err(IgniteError::DirectoryExists { path: target })
    } else {
        Ok(target)
    }
}

/// Path of an installed npm module below `dir`.
pub fn module_dir(dir: &Path, module: &str) -> PathBuf {
    dir.join(NODE_MODULES_DIR).join(module)
}
