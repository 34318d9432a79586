/// Rule configuration and the plugin-result merge
///
/// This module handles:
/// - Merging per-plugin generated source lists into one rule source list
/// - Remapping sources generated outside the rule's target directory
/// - Rewriting mapping paths for builds running in an external workspace
/// - Consolidating per-plugin import lists

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use crate::language::LanguageConfig;
use crate::library::ProtoLibrary;
use crate::manifest::InvocationManifest;
use crate::paths;
use crate::plugin::PluginResult;

/// The merged description of one generated build rule: the complete source
/// list, source mappings, and import list across every plugin that ran.
/// Constructed once per merge and not mutated afterwards.
#[derive(Debug, Clone)]
pub struct RuleConfiguration {
    /// Language configuration, passed through unchanged.
    pub language: LanguageConfig,
    /// Package-relative directory of the BUILD file the rule lives in.
    pub target_dir: String,
    /// Rule naming prefix (e.g. `"java"`), passed through unchanged.
    pub prefix: String,
    /// The library holding the proto files.
    pub library: Arc<dyn ProtoLibrary>,
    /// The plugin results that were merged, in input order.
    pub plugins: Vec<PluginResult>,
    /// Merged source files to declare on the rule.
    pub outputs: Vec<String>,
    /// Merged import list, sorted ascending. Not deduplicated.
    pub imports: Vec<String>,
    /// Merged basename-to-source-path mappings.
    pub mappings: BTreeMap<String, String>,
}

impl RuleConfiguration {
    /// Merge the given plugin results into a rule configuration.
    ///
    /// `exec_root` is the directory the build action executes in; it may be
    /// empty, and is only consulted to detect external-workspace builds.
    pub fn new(
        language: LanguageConfig,
        exec_root: &str,
        target_dir: impl Into<String>,
        prefix: impl Into<String>,
        library: Arc<dyn ProtoLibrary>,
        plugins: Vec<PluginResult>,
    ) -> Self {
        let target_dir = target_dir.into();
        let (outputs, mappings) = merge_sources(exec_root, &target_dir, &plugins);
        let imports = merge_imports(&plugins);

        debug!(
            target_dir = %target_dir,
            plugins = plugins.len(),
            outputs = outputs.len(),
            mappings = mappings.len(),
            imports = imports.len(),
            "merged plugin results"
        );

        Self {
            language,
            target_dir,
            prefix: prefix.into(),
            library,
            plugins,
            outputs,
            imports,
            mappings,
        }
    }

    /// Merge the plugin results carried by an invocation manifest.
    pub fn from_manifest(manifest: InvocationManifest) -> Self {
        let InvocationManifest {
            language,
            execution_root,
            target_dir,
            prefix,
            library,
            plugins,
        } = manifest;

        Self::new(
            language,
            &execution_root,
            target_dir,
            prefix,
            Arc::new(library),
            plugins,
        )
    }

    /// Find a plugin result by implementation name. Matching is exact and
    /// case-sensitive.
    pub fn plugin(&self, implementation: &str) -> Option<&PluginResult> {
        self.plugins
            .iter()
            .find(|plugin| plugin.implementation == implementation)
    }

    /// The outputs of one specific plugin (not the merged list), or an empty
    /// slice when no plugin matches.
    pub fn plugin_outputs(&self, implementation: &str) -> &[String] {
        self.plugin(implementation)
            .map_or(&[], |plugin| plugin.outputs.as_slice())
    }
}

impl Serialize for RuleConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct LibraryRepr<'a> {
            name: &'a str,
            files: &'a [String],
            imports: &'a [String],
        }

        let library = LibraryRepr {
            name: self.library.name(),
            files: self.library.files(),
            imports: self.library.imports(),
        };

        let mut state = serializer.serialize_struct("RuleConfiguration", 8)?;
        state.serialize_field("language", &self.language)?;
        state.serialize_field("target_dir", &self.target_dir)?;
        state.serialize_field("prefix", &self.prefix)?;
        state.serialize_field("library", &library)?;
        state.serialize_field("plugins", &self.plugins)?;
        state.serialize_field("outputs", &self.outputs)?;
        state.serialize_field("imports", &self.imports)?;
        state.serialize_field("mappings", &self.mappings)?;
        state.end()
    }
}

/// Merge the source files generated by each plugin, in input order, into the
/// rule source list plus any mappings needed to locate files generated
/// outside the target directory.
fn merge_sources(
    exec_root: &str,
    target_dir: &str,
    plugins: &[PluginResult],
) -> (Vec<String>, BTreeMap<String, String>) {
    let mut srcs = Vec::new();
    let mut mappings = BTreeMap::new();

    for plugin in plugins {
        // A plugin that supplied its own mappings has already decided where
        // its files live; copy both lists verbatim.
        if !plugin.mappings.is_empty() {
            srcs.extend(plugin.outputs.iter().cloned());
            for (basename, path) in &plugin.mappings {
                mappings.insert(basename.clone(), path.clone());
            }
            continue;
        }

        for filename in &plugin.outputs {
            let mut dir = paths::dirname(filename);
            // A bare filename has directory "."; for a root-package rule the
            // target directory is "", and the two mean the same place.
            if dir == "." && target_dir.is_empty() {
                dir = target_dir;
            }
            if dir == target_dir {
                // Generated in place: list it relative to the target directory.
                let prefix = format!("{target_dir}/");
                let relative = filename.strip_prefix(&prefix).unwrap_or(filename);
                srcs.push(relative.to_string());
            } else {
                // Generated elsewhere: list the basename and record where the
                // file really lives.
                let basename = paths::basename(filename);
                mappings.insert(basename.to_string(), filename.clone());
                srcs.push(basename.to_string());
            }
        }
    }

    // When the action executes inside an external workspace the exec root
    // ends in external/<workspace>, and every mapped file must be addressed
    // as external/<workspace>/<path> from the primary workspace.
    if let Some(workspace) = paths::external_workspace(exec_root) {
        for value in mappings.values_mut() {
            *value = format!("external/{workspace}/{value}");
        }
    }

    (srcs, mappings)
}

/// Concatenate every plugin's import list, in plugin input order, then sort.
/// Duplicates are kept.
fn merge_imports(plugins: &[PluginResult]) -> Vec<String> {
    let mut imports: Vec<String> = plugins
        .iter()
        .flat_map(|plugin| plugin.imports.iter().cloned())
        .collect();

    imports.sort();

    imports
}
