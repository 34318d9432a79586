/// Invocation manifest
///
/// The serialization boundary that carries one merge invocation's inputs
/// across a process boundary: the language config, the execution root, the
/// rule's target directory and prefix, the proto library, and the per-plugin
/// results.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::language::LanguageConfig;
use crate::library::SimpleProtoLibrary;
use crate::plugin::PluginResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationManifest {
    /// Language configuration for the rule being generated.
    pub language: LanguageConfig,

    /// Directory the build action executes in. May be empty; only consulted
    /// for the external-workspace detection.
    #[serde(default)]
    pub execution_root: String,

    /// Package-relative directory of the BUILD file the rule lives in.
    #[serde(default)]
    pub target_dir: String,

    /// Rule naming prefix.
    pub prefix: String,

    /// The library holding the proto files.
    pub library: SimpleProtoLibrary,

    /// Per-plugin results, in invocation order.
    #[serde(default)]
    pub plugins: Vec<PluginResult>,
}

impl InvocationManifest {
    /// Read a manifest from any JSON reader.
    pub fn from_reader(reader: impl io::Read) -> Result<Self> {
        let manifest = serde_json::from_reader(reader)?;
        Ok(manifest)
    }

    /// Read a manifest from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| Error::manifest(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "language": {"name": "java"},
        "target_dir": "foo/bar",
        "prefix": "java",
        "library": {"name": "example_proto", "files": ["foo/bar/example.proto"]},
        "plugins": [
            {"implementation": "builtin:java", "outputs": ["foo/bar/Example.java"]}
        ]
    }"#;

    #[test]
    fn test_from_reader() {
        let manifest = InvocationManifest::from_reader(MANIFEST.as_bytes()).unwrap();

        assert_eq!(manifest.language.name, "java");
        assert_eq!(manifest.target_dir, "foo/bar");
        assert_eq!(manifest.execution_root, "");
        assert_eq!(manifest.library.name, "example_proto");
        assert_eq!(manifest.plugins.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_a_manifest_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invocation.json");
        fs::write(&path, "{not json").unwrap();

        let err = InvocationManifest::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = InvocationManifest::from_path("no/such/invocation.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
