//! Project names and project-directory detection.

pub mod layout;
pub mod name;

pub use layout::{
    forbid_ignite_project, is_ignite_project, module_dir, project_target, require_ignite_project,
    APP_DIR, NODE_MODULES_DIR,
};
pub use name::{validate_project_name, RESERVED_NAMES};
