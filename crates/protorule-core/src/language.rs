/// Language configuration
///
/// Describes the language/toolchain a rule is generated for. The merge core
/// never inspects this; it is carried through to the aggregate unchanged so
/// the downstream rule emitter can read it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language name (e.g. `"java"`, `"go"`).
    pub name: String,

    /// Optional protoc tool path override.
    #[serde(default)]
    pub protoc: Option<String>,

    /// Whether rule generation is enabled for this language.
    #[serde(default = "enabled_default")]
    pub enabled: bool,

    /// Plugin option strings, in declaration order.
    #[serde(default)]
    pub options: Vec<String>,
}

fn enabled_default() -> bool {
    true
}

impl LanguageConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protoc: None,
            enabled: true,
            options: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_enabled_by_default() {
        let config: LanguageConfig = serde_json::from_str(r#"{"name": "java"}"#).unwrap();
        assert_eq!(config.name, "java");
        assert!(config.enabled);
        assert!(config.protoc.is_none());
        assert!(config.options.is_empty());
    }
}
