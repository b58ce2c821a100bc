//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// xdir - pack a directory tree into a single XML document
#[derive(Parser, Debug)]
#[command(name = "xdir")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pack the text files of a directory tree into one XML document")]
#[command(long_about = "xdir walks a directory, keeps the files that pass its exclusion and selection rules, \
and writes their contents into a single XML document suitable for pasting into an LLM context. \
It can optionally extract imports and link them across files, and prefix the output name with an \
estimated token count.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Pack the current directory into output.xml (renamed to <tokens>-output.xml)
    xdir

    # Pack a specific directory into a specific file
    xdir ./my-project context.xml

    # Only Go and Markdown files
    xdir ./my-project --patterns go,md

    # Select by glob on the file name instead
    xdir ./my-project --glob '*.test.ts,Makefile'

Output Options:
    # Stream to stdout without buffering
    xdir ./my-project --stdout --no-tokens

    # Gzip the document (appends .gz)
    xdir ./my-project --compress

    # Include an import graph for Go, JavaScript/TypeScript and Python
    xdir ./my-project --deps --local-prefix github.com/me/project

Configuration:
    # Use a specific configuration file
    xdir --config ./xdir.toml

    # Create a default configuration file
    xdir --init
")]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "SOURCE_DIR", help = "Directory to scan (defaults to the current directory)")]
    pub source_dir: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT", help = "Output file (defaults to output.xml)")]
    pub output: Option<PathBuf>,

    /// File extensions to include
    #[arg(short, long, value_name = "EXTS", value_delimiter = ',', help = "Comma separated extensions to include, e.g. go,md,.ts (overrides --glob and the defaults)")]
    pub patterns: Vec<String>,

    /// Glob patterns matched against file names
    #[arg(short, long, value_name = "GLOBS", value_delimiter = ',', help = "Comma separated glob patterns matched against file names, e.g. '*.rs,Dockerfile'")]
    pub glob: Vec<String>,

    /// Largest file to include, in bytes
    #[arg(short = 's', long, value_name = "BYTES", help = "Skip files larger than this many bytes (0 disables the limit, default 10485760)")]
    pub max_size: Option<u64>,

    /// Gzip the output
    #[arg(short = 'z', long, help = "Gzip the document; .gz is appended to the output name")]
    pub compress: bool,

    /// Disable the exclusion rules
    #[arg(long = "unsafe", help = "Include hidden files and node_modules, .git, .env, .DS_Store")]
    pub unsafe_mode: bool,

    /// Extract imports and link them across files
    #[arg(short, long, help = "Add a dependency section with imports and imported-by links")]
    pub deps: bool,

    /// Prefix the output name with the token count
    #[arg(long, conflicts_with = "no_tokens", help = "Estimate tokens and prefix the output file name with the count (default)")]
    pub tokens: bool,

    /// Skip token estimation
    #[arg(long, help = "Skip token estimation and keep the output name as given; allows streaming output")]
    pub no_tokens: bool,

    /// Write to stdout
    #[arg(long, help = "Write the document to stdout instead of a file")]
    pub stdout: bool,

    /// Module prefix for local Go imports
    #[arg(long, value_name = "PREFIX", help = "Module path prefix that marks Go imports as local (defaults to the source directory)")]
    pub local_prefix: Option<String>,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal (link cycles are reported and skipped)")]
    pub follow_links: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .xdir.toml in the current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.xdir.toml) in the current directory")]
    pub init: bool,

    /// Summary format
    #[arg(long, value_enum, value_name = "FORMAT", help = "Format of the end-of-run summary printed to stderr")]
    pub summary: Option<SummaryArg>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (one summary line, no progress)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show debug logging and extra summary details")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Disable progress spinner
    #[arg(long, help = "Disable the progress spinner (useful for CI environments)")]
    pub no_progress: bool,
}

/// Summary format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryArg {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Token naming as requested on the command line, if at all
    pub fn token_count(&self) -> Option<bool> {
        if self.no_tokens {
            Some(false)
        } else if self.tokens {
            Some(true)
        } else {
            None
        }
    }
}
