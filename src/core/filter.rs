//! Path filtering
//!
//! Two independent gates decide whether an entry ends up in the document:
//! the exclusion gate looks at every path segment, the selection gate looks
//! at the file's extension or base name.

use glob::Pattern;
use std::path::{Component, Path};

use crate::error::Result;
use crate::models::config::Settings;

/// Extensions selected when neither explicit extensions nor globs are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".c", ".cpp", ".css", ".go", ".h", ".hpp", ".html", ".java", ".js", ".json", ".jsx", ".md",
    ".mdx", ".php", ".py", ".rb", ".rs", ".sql", ".swift", ".ts", ".tsx", ".txt", ".xml",
    ".yaml", ".yml",
];

/// Trim, lower-case and make sure an extension starts with a dot
pub fn normalize_extension(pattern: &str) -> String {
    let pattern = pattern.trim().to_lowercase();
    if pattern.starts_with('.') {
        pattern
    } else {
        format!(".{}", pattern)
    }
}

/// Which rule set the selection gate uses
#[derive(Debug, Clone)]
enum Selection {
    /// Exact match against normalized extensions
    Extensions(Vec<String>),
    /// Base name must match one glob
    Globs(Vec<Pattern>),
    /// Built-in allow-list
    Defaults,
}

/// Decides exclusion and selection for walk entries
#[derive(Debug, Clone)]
pub struct PathFilter {
    excluded_names: Vec<String>,
    unsafe_mode: bool,
    selection: Selection,
}

impl PathFilter {
    /// Build a filter from the run settings, compiling glob patterns once
    pub fn new(settings: &Settings) -> Result<Self> {
        let extensions: Vec<String> = settings
            .file_patterns
            .iter()
            .map(|p| normalize_extension(p))
            .filter(|p| p != ".")
            .collect();

        // First configured tier wins; later tiers are never consulted
        let selection = if !extensions.is_empty() {
            Selection::Extensions(extensions)
        } else if !settings.glob_patterns.is_empty() {
            let patterns = settings
                .glob_patterns
                .iter()
                .map(|p| Pattern::new(p.trim()))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Selection::Globs(patterns)
        } else {
            Selection::Defaults
        };

        Ok(Self {
            excluded_names: settings.excluded_names.clone(),
            unsafe_mode: settings.unsafe_mode,
            selection,
        })
    }

    /// Whether a root-relative path is excluded
    ///
    /// Always false in unsafe mode.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        if self.unsafe_mode {
            return false;
        }

        relative.components().any(|component| match component {
            Component::Normal(segment) => {
                let segment = segment.to_string_lossy();
                is_hidden(&segment) || self.excluded_names.iter().any(|name| *name == segment)
            }
            _ => false,
        })
    }

    /// Whether a file passes the selection gate
    pub fn is_selected(&self, path: &Path) -> bool {
        match &self.selection {
            Selection::Extensions(extensions) => {
                let ext = extension_of(path);
                extensions.iter().any(|e| *e == ext)
            }
            Selection::Globs(patterns) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                patterns.iter().any(|p| p.matches(&name))
            }
            Selection::Defaults => {
                let ext = extension_of(path);
                DEFAULT_EXTENSIONS.contains(&ext.as_str())
            }
        }
    }

    /// Both gates together
    pub fn accepts(&self, relative: &Path) -> bool {
        !self.is_excluded(relative) && self.is_selected(relative)
    }
}

fn is_hidden(segment: &str) -> bool {
    segment.starts_with('.') && segment != "." && segment != ".."
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| normalize_extension(&e.to_string_lossy()))
        .unwrap_or_else(|| ".".to_string())
}
