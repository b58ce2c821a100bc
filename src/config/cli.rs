//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, SummaryArg};
use crate::core::filter::normalize_extension;
use crate::error::Result;
use crate::models::config::{PartialSettings, SummaryFormat};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
///
/// Flags that were not given stay `None`/`false` so lower-priority sources
/// keep their values.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub source_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub patterns: Option<Vec<String>>,
    pub globs: Option<Vec<String>>,
    pub max_size: Option<u64>,
    pub compress: bool,
    pub unsafe_mode: bool,
    pub deps: bool,
    pub token_count: Option<bool>,
    pub stdout: bool,
    pub local_prefix: Option<String>,
    pub follow_links: bool,
    pub summary: Option<SummaryFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    let values: Vec<String> = values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        CliArgs {
            source_dir: args.source_dir.clone(),
            output: args.output.clone(),
            patterns: non_empty(&args.patterns),
            globs: non_empty(&args.glob),
            max_size: args.max_size,
            compress: args.compress,
            unsafe_mode: args.unsafe_mode,
            deps: args.deps,
            token_count: args.token_count(),
            stdout: args.stdout,
            local_prefix: args.local_prefix.clone(),
            follow_links: args.follow_links,
            summary: args.summary.map(|s| match s {
                SummaryArg::Text => SummaryFormat::Text,
                SummaryArg::Json => SummaryFormat::Json,
            }),
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(dir) = &self.args.source_dir {
            settings.target_dir = Some(dir.clone());
        }

        if let Some(output) = &self.args.output {
            settings.output_file = Some(output.clone());
        }

        if let Some(patterns) = &self.args.patterns {
            settings.file_patterns =
                Some(patterns.iter().map(|p| normalize_extension(p)).collect());
        }

        if let Some(globs) = &self.args.globs {
            settings.glob_patterns = Some(globs.clone());
        }

        if let Some(max_size) = self.args.max_size {
            settings.max_file_size = Some(max_size);
        }

        if let Some(prefix) = &self.args.local_prefix {
            settings.local_prefix = Some(prefix.clone());
        }

        if let Some(format) = self.args.summary {
            settings.summary_format = Some(format);
        }

        settings.token_count = self.args.token_count;

        // Boolean flags
        if self.args.compress {
            settings.compress = Some(true);
        }

        if self.args.unsafe_mode {
            settings.unsafe_mode = Some(true);
        }

        if self.args.deps {
            settings.dependency_graph = Some(true);
        }

        if self.args.stdout {
            settings.stdout = Some(true);
        }

        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
