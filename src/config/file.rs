//! Configuration file handling

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::core::filter::normalize_extension;
use crate::error::{Result, XdirError};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".xdir.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20, // Above environment variables, below the command line
        }
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(XdirError::ConfigNotFound {
                path: self.path.clone(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

/// Environment variables read by [`EnvConfig`], without the prefix
const ENV_KEYS: &[&str] = &[
    "SOURCE_DIR",
    "OUTPUT",
    "PATTERNS",
    "GLOB",
    "MAX_SIZE",
    "COMPRESS",
    "UNSAFE",
    "DEPS",
    "TOKENS",
    "LOCAL_PREFIX",
    "SUMMARY",
];

/// Environment variable configuration source
///
/// Reads `<PREFIX>_SOURCE_DIR`, `<PREFIX>_PATTERNS` and friends. Values that
/// do not parse are ignored.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10, // Lower priority than file config
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.var(key).and_then(|value| match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|value| {
            value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(dir) = self.var("SOURCE_DIR") {
            settings.target_dir = Some(PathBuf::from(dir));
        }

        if let Some(output) = self.var("OUTPUT") {
            settings.output_file = Some(PathBuf::from(output));
        }

        if let Some(patterns) = self.list("PATTERNS") {
            settings.file_patterns =
                Some(patterns.iter().map(|p| normalize_extension(p)).collect());
        }

        if let Some(globs) = self.list("GLOB") {
            settings.glob_patterns = Some(globs);
        }

        if let Some(max_size) = self.var("MAX_SIZE") {
            if let Ok(max_size) = max_size.trim().parse() {
                settings.max_file_size = Some(max_size);
            }
        }

        settings.compress = self.flag("COMPRESS");
        settings.unsafe_mode = self.flag("UNSAFE");
        settings.dependency_graph = self.flag("DEPS");
        settings.token_count = self.flag("TOKENS");
        settings.local_prefix = self.var("LOCAL_PREFIX");

        if let Some(format) = self.var("SUMMARY") {
            if let Ok(format) = format.parse() {
                settings.summary_format = Some(format);
            }
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
