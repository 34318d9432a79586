/// Proto library abstraction
///
/// The library that holds the protocol definition files a rule compiles. The
/// merge passes the library through unchanged; it sits behind a trait so
/// alternative library providers can plug in without touching the merge.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A library of protocol definition files.
pub trait ProtoLibrary: fmt::Debug + Send + Sync {
    /// Library name.
    fn name(&self) -> &str;

    /// Workspace-relative paths of the `.proto` files.
    fn files(&self) -> &[String];

    /// Imports the library's files declare.
    fn imports(&self) -> &[String];
}

/// A plain value-record library, suitable for manifest deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleProtoLibrary {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub imports: Vec<String>,
}

impl SimpleProtoLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the `.proto` file list.
    pub fn files(mut self, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }
}

impl ProtoLibrary for SimpleProtoLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn files(&self) -> &[String] {
        &self.files
    }

    fn imports(&self) -> &[String] {
        &self.imports
    }
}
