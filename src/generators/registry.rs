//! Generator lookup.
//!
//! Generators are registered up front under a namespaced key
//! (`ignite:<type>`) and looked up by type. A type nobody registered is a
//! typed [`IgniteError::UnknownGenerator`], never a failed module load.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::LocalConfig;
use crate::error::{IgniteError, Result};
use crate::project::module_dir;
use crate::toolchain::Toolchain;

/// Prefix for registered generator keys.
pub const COMMAND_NAMESPACE: &str = "ignite";

/// npm naming convention for yeoman generators.
pub const GENERATOR_MODULE_PREFIX: &str = "generator-";

/// Everything a generator needs to run.
pub struct GeneratorContext<'a> {
    /// Project root the generator writes into.
    pub project_root: &'a Path,
    /// Tools used to run it.
    pub toolchain: &'a dyn Toolchain,
}

/// Something that can scaffold files given a single free-text argument.
pub trait Generator: fmt::Debug {
    /// Short description for logs and listings.
    fn describe(&self) -> String;

    /// Run the generator with `name` as its only argument.
    fn run(&self, name: &str, ctx: &GeneratorContext<'_>) -> Result<()>;
}

/// A generator provided by an npm module installed in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGenerator {
    module: String,
}

impl ModuleGenerator {
    /// Wrap an npm module name.
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
        }
    }

    /// Name `yo` knows this generator by (`generator-foo` → `foo`).
    pub fn namespace(&self) -> &str {
        self.module
            .strip_prefix(GENERATOR_MODULE_PREFIX)
            .filter(|rest| !rest.is_empty())
            .unwrap_or(&self.module)
    }

    /// Where the module must be installed.
    pub fn resolve(&self, project_root: &Path) -> Result<PathBuf> {
        let dir = module_dir(project_root, &self.module);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(IgniteError::GeneratorNotInstalled {
                module: self.module.clone(),
                path: dir,
            })
        }
    }
}

impl Generator for ModuleGenerator {
    fn describe(&self) -> String {
        format!("npm module {}", self.module)
    }

    fn run(&self, name: &str, ctx: &GeneratorContext<'_>) -> Result<()> {
        let path = self.resolve(ctx.project_root)?;
        tracing::debug!(module = %self.module, path = %path.display(), name, "running generator");
        ctx.toolchain.run_generator(
            &[self.namespace().to_string(), name.to_string()],
            ctx.project_root,
        )
    }
}

/// Generators available to `generate`, keyed by namespaced type.
#[derive(Debug, Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every generator listed in a local configuration.
    pub fn from_config(config: &LocalConfig) -> Self {
        let mut registry = Self::new();
        for (kind, module) in &config.generators {
            registry.register(kind, Box::new(ModuleGenerator::new(module)));
        }
        registry
    }

    /// Namespaced key for a generator type.
    pub fn key(kind: &str) -> String {
        format!("{}:{}", COMMAND_NAMESPACE, kind)
    }

    /// Register (or replace) the generator for `kind`.
    pub fn register(&mut self, kind: &str, generator: Box<dyn Generator>) {
        tracing::debug!(
            key = %Self::key(kind),
            generator = %generator.describe(),
            "registered generator"
        );
        self.generators.insert(Self::key(kind), generator);
    }

    /// Look up the generator for `kind`.
    pub fn get(&self, kind: &str) -> Result<&dyn Generator> {
        self.generators
            .get(&Self::key(kind))
            .map(|g| g.as_ref())
            .ok_or_else(|| IgniteError::UnknownGenerator {
                kind: kind.to_string(),
            })
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
