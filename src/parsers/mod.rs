//! Import extraction and dependency linking

pub mod dependency_analyzer;
pub mod extractors;

pub use dependency_analyzer::{AnalysisReport, DependencyAnalyzer};
pub use extractors::{Extraction, ImportExtractor, Language};
