//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;
pub mod xml;

pub use self::progress::ProgressReporter;
pub use self::writers::{
    compressed_path, create_writer, final_output_path, token_prefixed_path, FileWriter,
    OutputSink, OutputWriter, StdoutWriter,
};
pub use self::xml::{serialize_document, XmlSerializer};

use crate::error::Result;
use crate::models::config::SummaryFormat;
use crate::models::RunReport;

/// Trait for run summary formatters
pub trait Formatter {
    /// Format a finished run into a string
    fn format(&self, report: &RunReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        if self.quiet {
            return Ok(formatters::format_report_brief(report));
        }
        Ok(formatters::format_report_text(
            report,
            self.use_colors,
            self.verbose,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        formatters::format_report_json(report)
    }
}

/// Create a formatter based on the summary format
pub fn create_formatter(
    format: SummaryFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        SummaryFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        SummaryFormat::Json => Box::new(JsonFormatter),
    }
}
