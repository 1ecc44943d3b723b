//! Local configuration schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Contents of a project's `.ignite` file.
///
/// ```
/// use ignite::config::LocalConfig;
///
/// let config = LocalConfig::default().with_generator("component", "generator-ignite-component");
/// assert_eq!(config.generator("component"), Some("generator-ignite-component"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Generator type name → npm module implementing it.
    #[serde(default)]
    pub generators: BTreeMap<String, String>,

    /// Keys Ignite does not interpret, kept so plugins can store their own settings.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Whether the source document had a `generators` key.
    #[serde(skip)]
    generators_declared: bool,
}

impl LocalConfig {
    /// Module configured for a generator type.
    pub fn generator(&self, kind: &str) -> Option<&str> {
        self.generators.get(kind).map(String::as_str)
    }

    /// Builder-style helper to register a generator module.
    pub fn with_generator(mut self, kind: &str, module: &str) -> Self {
        self.generators.insert(kind.to_string(), module.to_string());
        self.generators_declared = true;
        self
    }

    /// Validate an arbitrary JSON value as a configuration.
    ///
    /// The value must be an object; if it has a `generators` key, that must
    /// map names to module-name strings.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let declared = match &value {
            Value::Object(map) => map.contains_key("generators"),
            other => return Err(format!("expected an object, got {}", json_kind(other))),
        };
        let mut config: Self = serde_json::from_value(value).map_err(|e| e.to_string())?;
        config.generators_declared = declared;
        Ok(config)
    }

    /// The configuration as a JSON value.
    ///
    /// `generators` is written only when it has entries or was present in
    /// the document this configuration came from.
    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        if self.generators_declared || !self.generators.is_empty() {
            let generators = self
                .generators
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            map.insert("generators".to_string(), Value::Object(generators));
        }
        Value::Object(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
