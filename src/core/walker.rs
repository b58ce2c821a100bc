//! Directory walking and document assembly
//!
//! The walker ties the pipeline together: resolve the root, walk it in
//! file-name order through the [`PathFilter`], collect each surviving file
//! and either stream it straight into the document or buffer the whole set
//! for dependency linking and token-aware naming.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::collector::ContentCollector;
use crate::core::filter::PathFilter;
use crate::core::registry::RecordSet;
use crate::error::{handle_error, Result, XdirError};
use crate::models::{config::Settings, FileRecord, RunReport, Stats};
use crate::output::{
    create_writer, final_output_path, serialize_document, OutputSink, XmlSerializer,
};
use crate::parsers::DependencyAnalyzer;
use crate::utils::{PathResolver, TokenEstimator};

/// Runs the whole pipeline for one set of settings
pub struct Walker {
    settings: Settings,
}

impl Walker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the pipeline and write the document
    pub fn run(&self) -> Result<RunReport> {
        self.run_with_progress(|_, _| {})
    }

    /// Run with a callback invoked after each collected file
    ///
    /// The callback receives the number of files collected so far and the
    /// record path of the latest one.
    pub fn run_with_progress<F>(&self, progress_fn: F) -> Result<RunReport>
    where
        F: Fn(u64, &str),
    {
        let root = self.resolve_root()?;
        let filter = PathFilter::new(&self.settings)?;

        info!("Scanning {}", root.display());

        if self.settings.needs_full_document() {
            self.run_buffered(&root, &filter, progress_fn)
        } else {
            self.run_streaming(&root, &filter, progress_fn)
        }
    }

    /// Absolute, symlink-free form of the target directory
    fn resolve_root(&self) -> Result<PathBuf> {
        let target = &self.settings.target_dir;
        let root = fs::canonicalize(target).map_err(|source| XdirError::RootResolution {
            path: target.clone(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        })?;

        if !root.is_dir() {
            return Err(XdirError::invalid_path(root));
        }

        Ok(root)
    }

    /// Write each record as soon as it is collected
    fn run_streaming<F>(
        &self,
        root: &Path,
        filter: &PathFilter,
        progress_fn: F,
    ) -> Result<RunReport>
    where
        F: Fn(u64, &str),
    {
        let mut stats = Stats::new();
        let sink = OutputSink::create(&self.settings.output, self.settings.compress)?;
        let sink_path = sink.path().map(Path::to_path_buf);
        let mut serializer = XmlSerializer::begin(sink, false)
            .map_err(|err| output_failure(err, sink_path.as_deref()))?;

        let skip = sink_path.as_deref().and_then(OwnOutput::locate);

        let mut written = 0u64;
        self.walk(root, filter, skip.as_ref(), &mut stats, |record| {
            serializer
                .write_record(&record)
                .map_err(|err| output_failure(err, sink_path.as_deref()))?;
            written += 1;
            progress_fn(written, &record.path);
            Ok(record.size)
        })?;

        let sink = serializer
            .finish()
            .map_err(|err| output_failure(err, sink_path.as_deref()))?;
        let output = sink.finish()?;

        info!(
            "Wrote {} files ({} bytes), {} errors",
            stats.files_processed, stats.bytes_processed, stats.errors
        );

        Ok(RunReport {
            stats,
            output,
            buffered: false,
        })
    }

    /// Collect everything, link, serialize, count and then write once
    fn run_buffered<F>(
        &self,
        root: &Path,
        filter: &PathFilter,
        progress_fn: F,
    ) -> Result<RunReport>
    where
        F: Fn(u64, &str),
    {
        let mut stats = Stats::new();
        let mut records = RecordSet::new();
        let destination = self
            .settings
            .output
            .path()
            .map(|path| final_output_path(path, self.settings.compress, None));
        let skip = destination.as_deref().and_then(OwnOutput::locate);

        self.walk(root, filter, skip.as_ref(), &mut stats, |record| {
            let size = record.size;
            let path = record.path.clone();
            records.insert(record)?;
            progress_fn(records.len() as u64, &path);
            Ok(size)
        })?;

        if self.settings.dependency_graph {
            let analyzer = DependencyAnalyzer::new(
                PathResolver::new(root),
                self.settings.local_prefix_or(root),
            );
            let report = analyzer.analyze_all(&mut records);
            for err in report.errors {
                skip_entry(err, &mut stats)?;
            }
        }

        let document = serialize_document(&records, self.settings.dependency_graph)?;

        let tokens = if self.settings.token_count {
            let mut estimator = TokenEstimator::new();
            estimator.count(&document);
            stats.add_tokens(estimator.total());
            Some(estimator.total())
        } else {
            None
        };

        let output = self
            .settings
            .output
            .path()
            .map(|path| final_output_path(path, self.settings.compress, tokens));
        create_writer(output.as_deref(), self.settings.compress).write(document.as_bytes())?;

        info!(
            "Wrote {} files ({} bytes, {} tokens), {} errors",
            stats.files_processed, stats.bytes_processed, stats.tokens, stats.errors
        );

        Ok(RunReport {
            stats,
            output,
            buffered: true,
        })
    }

    /// Walk the root and hand every collected record to `on_record`
    ///
    /// `on_record` returns the record's size once it has been accepted.
    /// Per-entry failures are logged and counted; critical ones end the walk.
    fn walk<R>(
        &self,
        root: &Path,
        filter: &PathFilter,
        skip: Option<&OwnOutput>,
        stats: &mut Stats,
        mut on_record: R,
    ) -> Result<()>
    where
        R: FnMut(FileRecord) -> Result<u64>,
    {
        let resolver = PathResolver::new(root);
        let collector = ContentCollector::new(self.settings.max_file_size);

        let entries = WalkDir::new(root)
            .follow_links(self.settings.follow_links)
            .sort_by_file_name()
            .into_iter()
            // Excluded directories are pruned along with their subtree
            .filter_entry(|entry| match entry.path().strip_prefix(root) {
                Ok(relative) if filter.is_excluded(relative) => {
                    debug!("Excluded {}", relative.display());
                    false
                }
                _ => true,
            });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    let failure = match err.io_error() {
                        Some(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
                            XdirError::permission_denied(path)
                        }
                        _ => XdirError::directory_traversal_error(path, err.to_string()),
                    };
                    skip_entry(failure, stats)?;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if skip.is_some_and(|skip| skip.matches(entry.path())) {
                debug!("Skipping output destination {}", entry.path().display());
                continue;
            }
            if !filter.is_selected(entry.path()) {
                debug!("Not selected {}", entry.path().display());
                continue;
            }
            let Some(key) = resolver.relative_key(entry.path()) else {
                continue;
            };

            let accepted = collector
                .collect(entry.path(), key)
                .and_then(&mut on_record);
            match accepted {
                Ok(size) => stats.record_file(size),
                Err(err) => skip_entry(err, stats)?,
            }
        }

        Ok(())
    }
}

/// Log a per-entry failure and count it, or return it when it is critical
fn skip_entry(err: XdirError, stats: &mut Stats) -> Result<()> {
    if let Some(critical) = handle_error(err) {
        return Err(critical);
    }
    stats.record_error();
    Ok(())
}

/// Write failures on the document always end the run
fn output_failure(err: XdirError, path: Option<&Path>) -> XdirError {
    match err {
        XdirError::Io { source, .. } => match path {
            Some(path) => XdirError::output_write(path, source),
            None => XdirError::stdout_write(source),
        },
        other => other,
    }
}

/// The document a run writes, along with token-named copies from earlier runs
struct OwnOutput {
    dir: PathBuf,
    name: String,
}

impl OwnOutput {
    /// Destination in the same form the walk produces, if its directory exists
    fn locate(path: &Path) -> Option<Self> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Some(Self {
            dir: fs::canonicalize(parent).ok()?,
            name: path.file_name()?.to_string_lossy().into_owned(),
        })
    }

    /// `out.xml` itself, or `<digits>-out.xml` in the same directory
    fn matches(&self, path: &Path) -> bool {
        if path.parent() != Some(self.dir.as_path()) {
            return false;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        if name == self.name.as_str() {
            return true;
        }
        name.strip_suffix(self.name.as_str())
            .and_then(|prefix| prefix.strip_suffix('-'))
            .is_some_and(|count| !count.is_empty() && count.bytes().all(|b| b.is_ascii_digit()))
    }
}
