//! Data models and structures for xdir

pub mod config;
pub mod file_record;
pub mod stats;

pub use config::{OutputTarget, PartialSettings, Settings, SummaryFormat};
pub use file_record::{DependencyInfo, FileRecord, ImportEdge, ImportKind};
pub use stats::{RunReport, Stats};
