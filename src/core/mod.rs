//! Core pipeline: filtering, collection, record storage and the walk itself

pub mod collector;
pub mod filter;
pub mod registry;
pub mod walker;

pub use collector::ContentCollector;
pub use filter::{normalize_extension, PathFilter, DEFAULT_EXTENSIONS};
pub use registry::RecordSet;
pub use walker::Walker;
