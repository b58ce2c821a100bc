//! Root-relative path handling
//!
//! Record keys are `/`-separated paths relative to the absolute scan root.
//! Import resolution joins the root with the raw import string and
//! normalizes the result lexically; the filesystem is never consulted.

use std::path::{Component, Path, PathBuf};

/// Maps between absolute filesystem paths and record keys
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Create a resolver for an absolute scan root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: normalize(&root.into()),
        }
    }

    /// The normalized absolute root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record key for a path inside the root, `None` for the root itself or outside paths
    pub fn relative_key(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        to_key(relative)
    }

    /// Join the root with a raw import path and turn the result into a record key
    ///
    /// Returns `None` when the joined path escapes the root.
    pub fn resolve_import(&self, raw: &str) -> Option<String> {
        let raw = raw.trim_start_matches('/');
        let joined = normalize(&self.root.join(raw));
        self.relative_key(&joined)
    }
}

/// Lexically normalize a path, dropping `.` and folding `..`
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // Never climb above the filesystem root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

fn to_key(relative: &Path) -> Option<String> {
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
