//! Settings validation

use std::path::Path;

use crate::core::filter::normalize_extension;
use crate::error::{Result, ResultExt, XdirError};
use crate::models::config::{OutputTarget, Settings};

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // Target must be an existing directory
        if !settings.target_dir.is_dir() {
            return Err(XdirError::invalid_path(&settings.target_dir));
        }

        for pattern in &settings.file_patterns {
            if normalize_extension(pattern) == "." {
                return Err(XdirError::config_error(format!(
                    "File pattern '{}' does not name an extension",
                    pattern
                )));
            }
        }

        for pattern in &settings.glob_patterns {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
        }

        if let OutputTarget::File(path) = &settings.output {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the output file's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(XdirError::config_error("Output file name is empty"));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(XdirError::invalid_path(parent));
            }
        }

        Ok(())
    }
}
