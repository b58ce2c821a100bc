//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::core::filter::normalize_extension;
use crate::error::{Result, ResultExt, XdirError};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(XdirError::ConfigNotFound {
            path: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| XdirError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
///
/// Extension patterns are normalized on the way in.
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let mut settings: PartialSettings = toml::from_str(content).map_err(|e| XdirError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })?;

    validate_partial_settings(&settings, path)?;

    if let Some(patterns) = settings.file_patterns.take() {
        settings.file_patterns = Some(patterns.iter().map(|p| normalize_extension(p)).collect());
    }

    Ok(settings)
}

fn invalid(message: String) -> XdirError {
    XdirError::Config {
        message,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    }
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(target_dir) = &settings.target_dir {
        if target_dir.as_os_str().is_empty() {
            return Err(invalid(format!(
                "Invalid empty target_dir in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(invalid(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.file_patterns {
        for pattern in patterns {
            if normalize_extension(pattern) == "." {
                return Err(invalid(format!(
                    "Empty extension in file_patterns in config file: {}",
                    path.display()
                )));
            }
        }
    }

    if let Some(patterns) = &settings.glob_patterns {
        for pattern in patterns {
            if pattern.trim().is_empty() {
                return Err(invalid(format!(
                    "Empty glob pattern in config file: {}",
                    path.display()
                )));
            }

            // Try to compile the pattern to check validity
            glob::Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern '{}' in config file {}", pattern, path.display())
            })?;
        }
    }

    if let Some(names) = &settings.excluded_names {
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(invalid(format!(
                "Empty name in excluded_names in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Candidate locations for a configuration file, in lookup order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("xdir").join("config.toml"));
    }

    locations
}

/// Find and load configuration from default locations
///
/// The first existing file wins; the others are not read.
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for location in default_config_locations() {
        if location.is_file() {
            return Ok(Some(parse_config_file(location)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(XdirError::io_error)?;
        }
    }

    let default_config = include_str!("default_config.toml");
    fs::write(path, default_config).map_err(XdirError::io_error)?;

    Ok(())
}
