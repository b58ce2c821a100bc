//! Per-language import extraction
//!
//! Extraction is line-based and pattern-driven. It never fails on malformed
//! input; anything it cannot make sense of is either skipped or reported as a
//! problem alongside whatever edges were found.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ImportEdge, ImportKind};

static GO_SINGLE_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^import\s+(?:[\w.]+\s+)?"([^"]+)""#).unwrap());

static GO_BLOCK_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^import\s*\(").unwrap());

static GO_BLOCK_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:[\w.]+\s+)?"([^"]+)""#).unwrap());

static SCRIPT_IMPORT_FROM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s+.*\s+from\s+['"]([^'"]+)['"]"#).unwrap());

static SCRIPT_EXPORT_FROM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"export\s+.*\s+from\s+['"]([^'"]+)['"]"#).unwrap());

static SCRIPT_REQUIRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"require\(['"]([^'"]+)['"]\)"#).unwrap());

static SCRIPT_SIDE_EFFECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s+['"]([^'"]+)['"]"#).unwrap());

static PYTHON_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^import\s+(\w+)").unwrap());

static PYTHON_FROM_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^from\s+([^\s]+)\s+import").unwrap());

/// Edges found in one file plus an optional description of what went wrong
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub imports: Vec<ImportEdge>,
    pub problem: Option<String>,
}

impl Extraction {
    fn push(&mut self, path: &str, kind: ImportKind) {
        self.imports.push(ImportEdge::new(path, kind));
    }
}

/// Extracts import edges from the text of one language family
pub trait ImportExtractor {
    /// Scan `content` for imports
    ///
    /// `local_prefix` is the module prefix that marks an import as belonging
    /// to the scanned project, for languages that use one.
    fn extract(&self, content: &str, local_prefix: &str) -> Extraction;
}

/// Language families with an extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Go,
    Script,
    Python,
}

impl Language {
    /// Pick the family from a lower-cased extension including the dot
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".go" => Some(Language::Go),
            ".js" | ".jsx" | ".ts" | ".tsx" | ".mjs" | ".cjs" => Some(Language::Script),
            ".py" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn extractor(&self) -> &'static dyn ImportExtractor {
        match self {
            Language::Go => &GoExtractor,
            Language::Script => &ScriptExtractor,
            Language::Python => &PythonExtractor,
        }
    }
}

/// Go `import "x"` and `import ( ... )` blocks
pub struct GoExtractor;

impl GoExtractor {
    fn classify(path: &str, local_prefix: &str) -> ImportKind {
        if !local_prefix.is_empty() && path.starts_with(local_prefix) {
            ImportKind::Local
        } else if path.contains('.') || path.contains('/') {
            ImportKind::External
        } else {
            ImportKind::Standard
        }
    }
}

impl ImportExtractor for GoExtractor {
    fn extract(&self, content: &str, local_prefix: &str) -> Extraction {
        let mut extraction = Extraction::default();
        let mut block_start: Option<usize> = None;

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();

            if block_start.is_some() {
                if line.starts_with(')') {
                    block_start = None;
                } else if let Some(cap) = GO_BLOCK_ENTRY.captures(line) {
                    let path = &cap[1];
                    extraction.push(path, Self::classify(path, local_prefix));
                }
                continue;
            }

            if let Some(open) = GO_BLOCK_OPEN.find(line) {
                let rest = line[open.end()..].trim();
                // Single-line block: import ( "fmt" )
                if let Some(inner) = rest.strip_suffix(')') {
                    for cap in GO_BLOCK_ENTRY.captures_iter(inner.trim()) {
                        let path = &cap[1];
                        extraction.push(path, Self::classify(path, local_prefix));
                    }
                } else {
                    if let Some(cap) = GO_BLOCK_ENTRY.captures(rest) {
                        let path = &cap[1];
                        extraction.push(path, Self::classify(path, local_prefix));
                    }
                    block_start = Some(idx + 1);
                }
            } else if let Some(cap) = GO_SINGLE_IMPORT.captures(line) {
                let path = &cap[1];
                extraction.push(path, Self::classify(path, local_prefix));
            }
        }

        if let Some(line) = block_start {
            extraction.problem = Some(format!(
                "import block opened on line {} is never closed",
                line
            ));
        }

        extraction
    }
}

/// JavaScript and TypeScript `import`, `export ... from` and `require`
pub struct ScriptExtractor;

impl ScriptExtractor {
    fn classify(path: &str) -> ImportKind {
        if path.starts_with('.') {
            ImportKind::Local
        } else if !path.contains('/') {
            ImportKind::Standard
        } else {
            ImportKind::External
        }
    }
}

impl ImportExtractor for ScriptExtractor {
    fn extract(&self, content: &str, _local_prefix: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for line in content.lines() {
            let mut found: Vec<&str> = Vec::new();

            if let Some(cap) = SCRIPT_IMPORT_FROM.captures(line) {
                found.push(cap.get(1).map(|m| m.as_str()).unwrap_or_default());
            } else if let Some(cap) = SCRIPT_EXPORT_FROM.captures(line) {
                found.push(cap.get(1).map(|m| m.as_str()).unwrap_or_default());
            } else {
                for cap in SCRIPT_SIDE_EFFECT.captures_iter(line) {
                    found.push(cap.get(1).map(|m| m.as_str()).unwrap_or_default());
                }
            }
            for cap in SCRIPT_REQUIRE.captures_iter(line) {
                found.push(cap.get(1).map(|m| m.as_str()).unwrap_or_default());
            }

            for path in found.into_iter().filter(|p| !p.is_empty()) {
                extraction.push(path, Self::classify(path));
            }
        }

        extraction
    }
}

/// Python `import x` and `from x import y`
pub struct PythonExtractor;

impl PythonExtractor {
    fn classify(path: &str) -> ImportKind {
        if path.contains('.') {
            ImportKind::Local
        } else {
            ImportKind::Standard
        }
    }
}

impl ImportExtractor for PythonExtractor {
    fn extract(&self, content: &str, _local_prefix: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for line in content.lines() {
            let line = line.trim();
            let cap = PYTHON_IMPORT
                .captures(line)
                .or_else(|| PYTHON_FROM_IMPORT.captures(line));
            if let Some(cap) = cap {
                let path = &cap[1];
                extraction.push(path, Self::classify(path));
            }
        }

        extraction
    }
}
