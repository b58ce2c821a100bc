//! Dependency extraction and linking across a record set
//!
//! Extraction fills each record's outbound edges from its own text. Linking
//! then resolves local edges against the set and derives the inbound
//! `imported_by` lists; it is the only place those lists are written.

use tracing::debug;

use crate::core::registry::RecordSet;
use crate::error::XdirError;
use crate::models::{DependencyInfo, FileRecord, ImportEdge, ImportKind};
use crate::parsers::extractors::Language;
use crate::utils::PathResolver;

/// Outcome of a full analysis pass
#[derive(Debug, Default)]
pub struct AnalysisReport {
    /// Per-record extraction problems; each one counts as a run error
    pub errors: Vec<XdirError>,
    /// Local edges that resolved to a record in the set
    pub linked: usize,
}

/// Runs extraction and linking over records of a single run
#[derive(Debug, Clone)]
pub struct DependencyAnalyzer {
    resolver: PathResolver,
    local_prefix: String,
}

impl DependencyAnalyzer {
    pub fn new(resolver: PathResolver, local_prefix: impl Into<String>) -> Self {
        Self {
            resolver,
            local_prefix: local_prefix.into(),
        }
    }

    /// Extract outbound edges for one record
    ///
    /// Records in an unsupported language get empty dependency data. Any
    /// edges found before a problem are kept on the record.
    pub fn extract(&self, record: &mut FileRecord) -> Option<XdirError> {
        let Some(language) = record.extension().and_then(|ext| Language::from_extension(&ext))
        else {
            record.dependencies = Some(DependencyInfo::default());
            return None;
        };

        let extraction = language
            .extractor()
            .extract(&record.content, &self.local_prefix);
        record.dependencies = Some(DependencyInfo::with_imports(extraction.imports));

        extraction
            .problem
            .map(|message| XdirError::dependency_extraction(record.path.clone(), message))
    }

    /// Resolve local edges and rebuild every `imported_by` list
    ///
    /// Iterates the set in its stored order, which fixes the order of every
    /// `imported_by` list. Returns the number of resolved edges.
    pub fn link(&self, records: &mut RecordSet) -> usize {
        for record in records.iter_mut() {
            record
                .dependencies
                .get_or_insert_with(DependencyInfo::default)
                .imported_by
                .clear();
        }

        // (source, edge, target) triples, gathered before anything is mutated
        let mut resolved = Vec::new();
        for (source_idx, record) in records.iter().enumerate() {
            let Some(deps) = &record.dependencies else {
                continue;
            };
            for (edge_idx, edge) in deps.imports.iter().enumerate() {
                if !edge.is_local() {
                    continue;
                }
                match self
                    .resolver
                    .resolve_import(&edge.path)
                    .and_then(|key| records.position(&key))
                {
                    Some(target_idx) => resolved.push((source_idx, edge_idx, target_idx)),
                    None => debug!("Unresolved local import {} in {}", edge.path, record.path),
                }
            }
        }

        for &(source_idx, edge_idx, target_idx) in &resolved {
            let source_path = records.at(source_idx).path.clone();
            let target_path = records.at(target_idx).path.clone();

            if let Some(deps) = records.at_mut(source_idx).dependencies.as_mut() {
                deps.imports[edge_idx].location = Some(target_path);
            }
            records
                .at_mut(target_idx)
                .dependencies
                .get_or_insert_with(DependencyInfo::default)
                .imported_by
                .push(ImportEdge::new(source_path, ImportKind::Local));
        }

        resolved.len()
    }

    /// Extraction over every record followed by one linking pass
    pub fn analyze_all(&self, records: &mut RecordSet) -> AnalysisReport {
        let mut report = AnalysisReport::default();

        for record in records.iter_mut() {
            if let Some(err) = self.extract(record) {
                report.errors.push(err);
            }
        }

        report.linked = self.link(records);
        debug!("Linked {} local imports across {} files", report.linked, records.len());

        report
    }
}
