//! The context every command runs in.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::Result;
use crate::toolchain::{
    HttpRegistry, PackageRegistry, SystemToolchain, Toolchain, ToolchainConfig,
};

/// Working directory plus the external collaborators commands talk to.
///
/// Commands never consult the process's current directory or spawn tools
/// directly; they go through a `Workspace`.
pub struct Workspace {
    root: PathBuf,
    toolchain: Rc<dyn Toolchain>,
    registry: Rc<dyn PackageRegistry>,
}

impl Workspace {
    /// Assemble a workspace from explicit parts.
    pub fn new(
        root: &Path,
        toolchain: Rc<dyn Toolchain>,
        registry: Rc<dyn PackageRegistry>,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            toolchain,
            registry,
        }
    }

    /// A workspace backed by real processes and the HTTP registry.
    pub fn system(root: &Path, config: ToolchainConfig) -> Result<Self> {
        let registry = HttpRegistry::new(&config.registry_url)?;
        Ok(Self::new(
            root,
            Rc::new(SystemToolchain::new(config)),
            Rc::new(registry),
        ))
    }

    /// Directory commands operate in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn toolchain(&self) -> &dyn Toolchain {
        self.toolchain.as_ref()
    }

    pub fn registry(&self) -> &dyn PackageRegistry {
        self.registry.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::{MockRegistry, MockToolchain, Tool};

    #[test]
    fn exposes_its_parts() {
        let workspace = Workspace::new(
            Path::new("/project"),
            Rc::new(MockToolchain::new().with_tool(Tool::Yo)),
            Rc::new(MockRegistry::new().with_package("ignite-maps")),
        );

        assert_eq!(workspace.root(), Path::new("/project"));
        assert!(workspace.toolchain().locate(Tool::Yo).is_some());
        assert!(workspace.registry().exists("ignite-maps").unwrap());
    }

    #[test]
    fn system_workspace_uses_configured_registry() {
        let config = ToolchainConfig {
            registry_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        let workspace = Workspace::system(Path::new("/project"), config).unwrap();
        assert_eq!(workspace.root(), Path::new("/project"));
    }
}
