//! Progress reporting functionality
//!
//! A spinner on stderr that tracks the walk. Stdout is left alone so the
//! document can be piped.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for a single run
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; nothing is drawn when quiet or disabled
    pub fn new(quiet: bool, enabled: bool) -> Self {
        let spinner = if quiet || !enabled {
            None
        } else {
            let bar = ProgressBar::new_spinner();
            let template = "{spinner:.green} [{elapsed}] {pos} files {wide_msg}";
            if let Ok(style) = ProgressStyle::default_spinner().template(template) {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            Some(bar)
        };

        Self { spinner }
    }

    /// Note one collected file
    pub fn update(&self, files: u64, path: &str) {
        if let Some(bar) = &self.spinner {
            bar.set_position(files);
            bar.set_message(path.to_string());
        }
    }

    /// Remove the spinner without leaving a line behind
    pub fn clear(&self) {
        if let Some(bar) = &self.spinner {
            bar.finish_and_clear();
        }
    }
}
