//! Error types and definitions for xdir
//!
//! Setup failures (root resolution, configuration, output creation) are
//! critical and abort the run. Everything that happens to a single entry
//! during the walk is recoverable and only shows up in the error counter.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current entry fails but the walk continues
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for xdir operations
#[derive(Debug, Error)]
pub enum XdirError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// The target directory could not be turned into an absolute path
    #[error("Error resolving target directory {path}: {source}")]
    RootResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Output destination could not be created
    #[error("Error creating output {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal {
        path: PathBuf,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// File is larger than the configured ceiling
    #[error("File {path} exceeds size limit ({size} > {limit} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// File could not be opened or read
    #[error("Error reading file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// File content cannot be embedded in the document
    #[error("Cannot encode {path}: {message}")]
    Encoding {
        path: PathBuf,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Two walk entries mapped to the same relative path
    #[error("Duplicate record for {path}")]
    DuplicateRecord {
        path: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Import extraction gave up part way through a file
    #[error("Dependency extraction error in {path}: {message}")]
    DependencyExtraction {
        path: String,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// XML writer errors
    #[error("XML error: {source}")]
    Xml {
        #[source]
        source: quick_xml::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },
}

impl XdirError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the entry is skipped
            XdirError::PermissionDenied { .. } => ErrorSeverity::Warning,
            XdirError::FileTooLarge { .. } => ErrorSeverity::Warning,
            XdirError::Encoding { .. } => ErrorSeverity::Warning,
            XdirError::DuplicateRecord { .. } => ErrorSeverity::Warning,
            XdirError::DependencyExtraction { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            XdirError::RootResolution { .. } => ErrorSeverity::Critical,
            XdirError::InvalidPath { .. } => ErrorSeverity::Critical,
            XdirError::Config { .. } => ErrorSeverity::Critical,
            XdirError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            XdirError::ConfigRead { .. } => ErrorSeverity::Critical,
            XdirError::ConfigParse { .. } => ErrorSeverity::Critical,
            XdirError::GlobPattern { .. } => ErrorSeverity::Critical,
            XdirError::OutputCreate { .. } => ErrorSeverity::Critical,
            XdirError::OutputWrite { .. } => ErrorSeverity::Critical,
            XdirError::StdoutWrite { .. } => ErrorSeverity::Critical,
            XdirError::Xml { .. } => ErrorSeverity::Critical,

            // Regular errors - current entry fails but the walk continues
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            XdirError::PermissionDenied { path, .. } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            XdirError::Io { source, .. } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            XdirError::InvalidPath { path, .. } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            XdirError::RootResolution { path, source, .. } => {
                format!("Cannot resolve source directory '{}': {}.", path.display(), source)
            }
            XdirError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'. Create one with --init or use command line options.", path.display())
            }
            XdirError::OutputCreate { path, source, .. } => {
                format!("Cannot create output '{}': {}. Check that the directory exists and is writable.", path.display(), source)
            }
            XdirError::FileTooLarge { path, size, limit, .. } => {
                format!("Skipping '{}': {} bytes exceeds the {} byte limit. Raise it with --max-size.", path.display(), size, limit)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        XdirError::Io {
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        XdirError::Config {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        XdirError::InvalidPath {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        XdirError::PermissionDenied {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        XdirError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a file read error, mapping permission failures
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            return XdirError::permission_denied(path);
        }
        XdirError::FileRead {
            path,
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a size ceiling error
    pub fn file_too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        XdirError::FileTooLarge {
            path: path.into(),
            size,
            limit,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create an encoding error
    pub fn encoding(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        XdirError::Encoding {
            path: path.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a duplicate record error
    pub fn duplicate_record(path: impl Into<String>) -> Self {
        XdirError::DuplicateRecord {
            path: path.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a dependency extraction error
    pub fn dependency_extraction(path: impl Into<String>, message: impl Into<String>) -> Self {
        XdirError::DependencyExtraction {
            path: path.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create an output creation error
    pub fn output_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        XdirError::OutputCreate {
            path: path.into(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        XdirError::OutputWrite {
            path: path.into(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a stdout write error
    pub fn stdout_write(source: std::io::Error) -> Self {
        XdirError::StdoutWrite {
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for XdirError {
    fn from(err: std::io::Error) -> Self {
        XdirError::io_error(err)
    }
}

impl From<toml::de::Error> for XdirError {
    fn from(err: toml::de::Error) -> Self {
        XdirError::TomlParse {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<glob::PatternError> for XdirError {
    fn from(err: glob::PatternError) -> Self {
        XdirError::GlobPattern {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<serde_json::Error> for XdirError {
    fn from(err: serde_json::Error) -> Self {
        XdirError::JsonSerialize {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<quick_xml::Error> for XdirError {
    fn from(err: quick_xml::Error) -> Self {
        XdirError::Xml {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

/// Result type alias for xdir operations
pub type Result<T> = std::result::Result<T, XdirError>;
