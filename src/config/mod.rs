//! Local project configuration (`.ignite`).
//!
//! - Schema definitions in [`schema`]
//! - Loading and saving in [`loader`]
//!
//! # Example
//!
//! ```
//! use ignite::config::{load_local_config, save_local_config, LoadOutcome, LocalConfig};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! assert_eq!(load_local_config(temp.path()), LoadOutcome::Absent);
//!
//! let config = LocalConfig::default().with_generator("component", "generator-ignite-component");
//! save_local_config(temp.path(), &config).unwrap();
//!
//! let loaded = load_local_config(temp.path()).into_config();
//! assert_eq!(loaded.generator("component"), Some("generator-ignite-component"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    config_path, load_local_config, parse_local_config, render_local_config, save_local_config,
    LoadOutcome, CONFIG_FILE,
};
pub use schema::LocalConfig;
