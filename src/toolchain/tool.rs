//! External tools and the package names Ignite works with.

use std::fmt;

/// npm package providing the `yo` binary.
pub const YO_PACKAGE: &str = "yo";

/// The yeoman generator that scaffolds new projects.
pub const GENERATOR_PACKAGE: &str = "generator-react-native-ignite";

/// Namespace under which `yo` knows [`GENERATOR_PACKAGE`].
pub const GENERATOR_NAMESPACE: &str = "react-native-ignite";

/// Legacy global package that shadows the React Native CLI.
pub const LEGACY_REACT_NATIVE_PACKAGE: &str = "react-native";

/// The React Native CLI the generator expects to find globally.
pub const REACT_NATIVE_CLI_PACKAGE: &str = "react-native-cli";

/// Default npm registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// An external executable Ignite depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Yeoman, runs generators.
    Yo,
    /// Package manager.
    Npm,
    /// JavaScript runtime.
    Node,
}

impl Tool {
    /// Executable name looked up on PATH by default.
    pub fn default_binary(&self) -> &'static str {
        match self {
            Tool::Yo => "yo",
            Tool::Npm => "npm",
            Tool::Node => "node",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_binary())
    }
}

/// Which executables and registry to use.
///
/// Built from global CLI flags (or their `IGNITE_*` environment
/// variables) and handed to [`SystemToolchain`](super::SystemToolchain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    pub yo: String,
    pub npm: String,
    pub node: String,
    pub registry_url: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            yo: Tool::Yo.default_binary().to_string(),
            npm: Tool::Npm.default_binary().to_string(),
            node: Tool::Node.default_binary().to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

impl ToolchainConfig {
    /// The configured executable for `tool`.
    pub fn binary(&self, tool: Tool) -> &str {
        match tool {
            Tool::Yo => &self.yo,
            Tool::Npm => &self.npm,
            Tool::Node => &self.node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_plain_binaries() {
        let config = ToolchainConfig::default();
        assert_eq!(config.binary(Tool::Yo), "yo");
        assert_eq!(config.binary(Tool::Npm), "npm");
        assert_eq!(config.binary(Tool::Node), "node");
        assert_eq!(config.registry_url, "https://registry.npmjs.org");
    }

    #[test]
    fn binary_honors_overrides() {
        let config = ToolchainConfig {
            yo: "/opt/bin/yo".to_string(),
            ..Default::default()
        };
        assert_eq!(config.binary(Tool::Yo), "/opt/bin/yo");
    }

    #[test]
    fn tool_displays_binary_name() {
        assert_eq!(Tool::Node.to_string(), "node");
    }
}
