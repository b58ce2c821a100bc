//! Error handling for xdir
//!
//! Error types, the crate-wide result alias, and helpers for attaching
//! context and triaging errors by severity.

pub mod context;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{ErrorSeverity, Result, XdirError};
