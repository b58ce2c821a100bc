//! xdir - pack a directory tree into a single XML document
//!
//! This library walks a directory, selects text files by extension or glob,
//! and serializes them into one XML document, optionally with a cross-file
//! import graph and a token estimate for sizing LLM prompts.

#![feature(error_generic_member_access)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use core::{PathFilter, Walker};
pub use error::{handle_error, ErrorSeverity, Result, ResultExt, XdirError};
pub use models::{
    config::{OutputTarget, Settings},
    DependencyInfo, FileRecord, ImportEdge, ImportKind, RunReport, Stats,
};
pub use parsers::DependencyAnalyzer;
pub use utils::TokenEstimator;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
