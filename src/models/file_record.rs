//! Collected files and their import relationships

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file captured from the scanned tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scan root, always `/`-separated; unique within a run
    pub path: String,

    /// Original size in bytes
    pub size: u64,

    /// Captured content, verbatim
    pub content: String,

    /// Import data, present once the dependency analyzer has looked at the file
    pub dependencies: Option<DependencyInfo>,
}

impl FileRecord {
    /// Create a record without dependency data
    pub fn new(path: impl Into<String>, size: u64, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size,
            content: content.into(),
            dependencies: None,
        }
    }

    /// Lower-cased extension of the record path including the leading dot
    pub fn extension(&self) -> Option<String> {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        name.rfind('.')
            .filter(|&idx| idx > 0)
            .map(|idx| name[idx..].to_lowercase())
    }
}

/// Outbound and inbound import edges of one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
    /// What this file imports, in source order
    pub imports: Vec<ImportEdge>,

    /// Which records import this file; derived by the linking pass only
    pub imported_by: Vec<ImportEdge>,
}

impl DependencyInfo {
    /// Create dependency info with the given outbound edges
    pub fn with_imports(imports: Vec<ImportEdge>) -> Self {
        Self {
            imports,
            imported_by: Vec::new(),
        }
    }

    /// True when there is nothing to report in either direction
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.imported_by.is_empty()
    }
}

/// A single import relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEdge {
    /// Module path as written in the source (or the importing record for imported-by edges)
    pub path: String,

    /// Classification of the import
    pub kind: ImportKind,

    /// Record path the import resolved to, if any
    pub location: Option<String>,
}

impl ImportEdge {
    /// Create an unresolved edge
    pub fn new(path: impl Into<String>, kind: ImportKind) -> Self {
        Self {
            path: path.into(),
            kind,
            location: None,
        }
    }

    /// Whether this edge points inside the scanned tree
    pub fn is_local(&self) -> bool {
        self.kind == ImportKind::Local
    }
}

/// Classification of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// Resolvable to another file within the scanned root
    Local,
    /// A third-party package outside the scanned root
    External,
    /// Part of the language's standard library
    Standard,
}

impl ImportKind {
    /// Name used in the output document
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportKind::Local => "local",
            ImportKind::External => "external",
            ImportKind::Standard => "standard",
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
