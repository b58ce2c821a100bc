//! Output formatting functionality
//!
//! Renders the end-of-run summary as text or JSON.

use ansi_term::Colour::{Blue, Green, Yellow};
use ansi_term::Style;

use crate::error::{Result, XdirError};
use crate::models::RunReport;

fn output_location(report: &RunReport) -> String {
    match &report.output {
        Some(path) => path.display().to_string(),
        None => "<stdout>".to_string(),
    }
}

/// One-line summary for quiet mode
pub fn format_report_brief(report: &RunReport) -> String {
    let stats = &report.stats;
    format!(
        "{} files, {:.2} MB, {} tokens, {} errors -> {}\n",
        stats.files_processed,
        stats.megabytes(),
        stats.tokens,
        stats.errors,
        output_location(report)
    )
}

/// Format a run report as text
pub fn format_report_text(report: &RunReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();
    let stats = &report.stats;

    // Summary header
    if use_colors {
        output.push_str(&format!("{}\n\n", Blue.bold().paint("Processing complete")));
    } else {
        output.push_str("Processing complete\n\n");
    }

    output.push_str(&format!("Files processed: {}\n", stats.files_processed));
    output.push_str(&format!("Total size: {:.2} MB\n", stats.megabytes()));
    if stats.tokens > 0 {
        output.push_str(&format!("Estimated tokens: {}\n", stats.tokens));
    }
    if verbose {
        output.push_str(&format!("Bytes processed: {}\n", stats.bytes_processed));
        output.push_str(&format!(
            "Mode: {}\n",
            if report.buffered { "buffered" } else { "streaming" }
        ));
    }

    if stats.errors > 0 {
        if use_colors {
            output.push_str(&format!(
                "{}\n",
                Yellow.bold().paint(format!("Skipped with errors: {}", stats.errors))
            ));
        } else {
            output.push_str(&format!("Skipped with errors: {}\n", stats.errors));
        }
    }

    let location = output_location(report);
    if use_colors {
        output.push_str(&format!(
            "\nOutput: {}\n",
            Green.paint(Style::new().bold().paint(location).to_string())
        ));
    } else {
        output.push_str(&format!("\nOutput: {}\n", location));
    }

    output
}

/// Format a run report as pretty JSON
pub fn format_report_json(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| XdirError::JsonSerialize {
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })
}
