//! Error context utilities for xdir
//!
//! Helpers for attaching context to foreign errors and for deciding, based on
//! severity, whether a failure ends the run or is only logged.

use tracing::{error, warn};

use crate::error::types::ErrorSeverity;
use crate::error::{Result, XdirError};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| XdirError::Config {
            message: format!("{}: {}", context(), err),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: log the error and return None
/// - Error: log the error and return None
/// - Critical: log the error and return Some(error)
pub fn handle_error(err: XdirError) -> Option<XdirError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            error!("critical: {}", message);
            Some(err)
        }
    }
}
