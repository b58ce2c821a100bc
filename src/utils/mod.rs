//! Shared helpers

pub mod path_resolver;
pub mod tokens;

pub use path_resolver::PathResolver;
pub use tokens::TokenEstimator;
