/// Per-plugin code-generation results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The result of one code-generation plugin invocation: the files it
/// generated, the imports the generated code depends on, and an optional
/// explicit remapping of output basenames to their true locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginResult {
    /// Implementation identifier, unique per plugin within one invocation
    /// (e.g. `"builtin:java"`).
    pub implementation: String,

    /// Workspace-relative paths of the generated files, in generation order.
    #[serde(default)]
    pub outputs: Vec<String>,

    /// Import strings contributed by this plugin. May contain duplicates.
    #[serde(default)]
    pub imports: Vec<String>,

    /// Explicit basename-to-full-path mappings. When non-empty these are
    /// authoritative: the merge copies `outputs` and `mappings` verbatim and
    /// skips path normalization for this plugin entirely.
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
}

impl PluginResult {
    /// Create an empty result for the named plugin implementation.
    pub fn new(implementation: impl Into<String>) -> Self {
        Self {
            implementation: implementation.into(),
            ..Default::default()
        }
    }

    /// Set the generated output paths.
    pub fn outputs(mut self, outputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the import list.
    pub fn imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Add one explicit basename-to-path mapping.
    pub fn mapping(mut self, basename: impl Into<String>, path: impl Into<String>) -> Self {
        self.mappings.insert(basename.into(), path.into());
        self
    }
}
