//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "output.xml";

/// Default size ceiling for a single file (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Names excluded from the walk unless unsafe mode is on
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &["node_modules", ".git", ".env", ".DS_Store"];

/// Main configuration settings for a run
///
/// Built once from the configuration sources and handed to the pipeline by
/// reference; nothing in the pipeline mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory to scan
    pub target_dir: PathBuf,

    /// Where the document goes
    pub output: OutputTarget,

    /// Largest file to include, in bytes (0 = unlimited)
    pub max_file_size: u64,

    /// Explicit extensions to include (normalized to `.ext`)
    pub file_patterns: Vec<String>,

    /// Glob patterns matched against file base names
    pub glob_patterns: Vec<String>,

    /// Path segments that exclude an entry
    pub excluded_names: Vec<String>,

    /// Disable the exclusion gate entirely
    pub unsafe_mode: bool,

    /// Gzip the document
    pub compress: bool,

    /// Extract imports and link them across files
    pub dependency_graph: bool,

    /// Estimate tokens and prefix the output name with the count
    pub token_count: bool,

    /// Module prefix that marks a Go-style import as local
    pub local_prefix: Option<String>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to show a progress spinner
    pub show_progress: bool,

    /// Whether to use colors in the summary
    pub use_colors: bool,

    /// Format of the end-of-run summary
    pub summary_format: SummaryFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE)),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            file_patterns: Vec::new(),
            glob_patterns: Vec::new(),
            excluded_names: DEFAULT_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
            unsafe_mode: false,
            compress: false,
            dependency_graph: false,
            token_count: true,
            local_prefix: None,
            follow_links: false,
            quiet: false,
            verbose: false,
            show_progress: true,
            use_colors: true,
            summary_format: SummaryFormat::Text,
        }
    }
}

impl Settings {
    /// Settings for scanning `target_dir` with everything else defaulted
    pub fn for_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    /// Whether the whole document has to be held before anything is written
    pub fn needs_full_document(&self) -> bool {
        self.dependency_graph || self.token_count
    }

    /// Prefix used to classify Go-style imports as local
    pub fn local_prefix_or(&self, root: &Path) -> String {
        self.local_prefix
            .clone()
            .unwrap_or_else(|| root.to_string_lossy().into_owned())
    }
}

/// Destination of the generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Write to a file
    File(PathBuf),
    /// Write to standard output
    Stdout,
}

impl OutputTarget {
    /// Output path when writing to a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::File(path) => Some(path),
            OutputTarget::Stdout => None,
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            _ => Err(format!("Invalid summary format: {}", s)),
        }
    }
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub target_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub stdout: Option<bool>,
    pub max_file_size: Option<u64>,
    pub file_patterns: Option<Vec<String>>,
    pub glob_patterns: Option<Vec<String>>,
    pub excluded_names: Option<Vec<String>>,
    pub unsafe_mode: Option<bool>,
    pub compress: Option<bool>,
    pub dependency_graph: Option<bool>,
    pub token_count: Option<bool>,
    pub local_prefix: Option<String>,
    pub follow_links: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub show_progress: Option<bool>,
    pub use_colors: Option<bool>,
    pub summary_format: Option<SummaryFormat>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.target_dir.is_some() {
            self.target_dir = other.target_dir;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.stdout.is_some() {
            self.stdout = other.stdout;
        }
        if other.max_file_size.is_some() {
            self.max_file_size = other.max_file_size;
        }
        if other.file_patterns.is_some() {
            self.file_patterns = other.file_patterns;
        }
        if other.glob_patterns.is_some() {
            self.glob_patterns = other.glob_patterns;
        }
        if other.excluded_names.is_some() {
            self.excluded_names = other.excluded_names;
        }
        if other.unsafe_mode.is_some() {
            self.unsafe_mode = other.unsafe_mode;
        }
        if other.compress.is_some() {
            self.compress = other.compress;
        }
        if other.dependency_graph.is_some() {
            self.dependency_graph = other.dependency_graph;
        }
        if other.token_count.is_some() {
            self.token_count = other.token_count;
        }
        if other.local_prefix.is_some() {
            self.local_prefix = other.local_prefix;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.summary_format.is_some() {
            self.summary_format = other.summary_format;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(target_dir) = &self.target_dir {
            settings.target_dir = target_dir.clone();
        }
        if let Some(output_file) = &self.output_file {
            settings.output = OutputTarget::File(output_file.clone());
        }
        // Stdout wins over any output file
        if self.stdout == Some(true) {
            settings.output = OutputTarget::Stdout;
        }
        if let Some(max_file_size) = self.max_file_size {
            settings.max_file_size = max_file_size;
        }
        if let Some(file_patterns) = &self.file_patterns {
            settings.file_patterns = file_patterns.clone();
        }
        if let Some(glob_patterns) = &self.glob_patterns {
            settings.glob_patterns = glob_patterns.clone();
        }
        if let Some(excluded_names) = &self.excluded_names {
            settings.excluded_names = excluded_names.clone();
        }
        if let Some(unsafe_mode) = self.unsafe_mode {
            settings.unsafe_mode = unsafe_mode;
        }
        if let Some(compress) = self.compress {
            settings.compress = compress;
        }
        if let Some(dependency_graph) = self.dependency_graph {
            settings.dependency_graph = dependency_graph;
        }
        if let Some(token_count) = self.token_count {
            settings.token_count = token_count;
        }
        if let Some(local_prefix) = &self.local_prefix {
            settings.local_prefix = Some(local_prefix.clone());
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(summary_format) = self.summary_format {
            settings.summary_format = summary_format;
        }

        settings
    }
}
