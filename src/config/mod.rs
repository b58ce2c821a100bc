//! Configuration management
//!
//! Settings are merged from several sources, lowest priority first:
//! built-in defaults, `XDIR_*` environment variables, a TOML file and the
//! command line.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use tracing::debug;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig};
pub use parser::{
    create_default_config, find_default_config, parse_config_content, parse_config_file,
};
pub use settings::SettingsValidator;

/// Prefix of the environment variables read by [`load_config`]
pub const ENV_PREFIX: &str = "XDIR";

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10 // Default priority
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            debug!(
                "Loading configuration from {} (priority {})",
                source.name(),
                source.priority()
            );
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Try to load from a source, ignoring if not available
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if !source.is_available() {
            return self;
        }
        match source.load() {
            Ok(partial) => {
                debug!(
                    "Loading configuration from {} (priority {})",
                    source.name(),
                    source.priority()
                );
                self.merge(partial)
            }
            Err(err) => {
                debug!("Ignoring {}: {}", source.name(), err);
                self
            }
        }
    }

    /// Add configuration from a file that has to exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        if !file_config.is_available() {
            return Err(crate::error::XdirError::ConfigNotFound {
                path: path.to_path_buf(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }
        self.load_from(&file_config)
    }

    /// Add configuration from the first default location that has a file
    pub fn add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        settings::SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let config_path = cli_args.config.clone();
    let cli_config = CliConfig::new(cli_args);

    // Environment variables have the lowest priority of the explicit sources
    let mut builder = ConfigBuilder::new().try_load_from(&EnvConfig::new(env_prefix));

    // An explicit config file must exist; default locations are optional
    builder = match config_path {
        Some(path) => builder.add_config_file(&path)?,
        None => builder.add_default_config_file()?,
    };

    // Load from CLI args (highest priority)
    builder = builder.load_from(&cli_config)?;

    builder.build()
}
