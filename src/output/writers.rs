//! Output writing functionality
//!
//! Streaming runs write through an [`OutputSink`] as records arrive.
//! Buffered runs hand the finished document to an [`OutputWriter`], which
//! for files goes through a temporary file persisted under the final name.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{Result, XdirError};
use crate::models::OutputTarget;

/// Append `.gz` unless the name already ends with it
pub fn compressed_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "gz") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".gz");
    PathBuf::from(name)
}

/// Prefix the file name with a token count: `dir/out.xml` -> `dir/42-out.xml`
pub fn token_prefixed_path(path: &Path, tokens: u64) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}-{}", tokens, name))
}

/// Final file name for a run
pub fn final_output_path(path: &Path, compress: bool, tokens: Option<u64>) -> PathBuf {
    let path = if compress {
        compressed_path(path)
    } else {
        path.to_path_buf()
    };
    match tokens {
        Some(tokens) => token_prefixed_path(&path, tokens),
        None => path,
    }
}

enum Destination {
    File(BufWriter<File>),
    Stdout(BufWriter<Stdout>),
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Destination::File(w) => w.write(buf),
            Destination::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::File(w) => w.flush(),
            Destination::Stdout(w) => w.flush(),
        }
    }
}

enum Encoding {
    Plain(Destination),
    Gzip(GzEncoder<Destination>),
}

/// Incremental writer used by streaming runs
pub struct OutputSink {
    path: Option<PathBuf>,
    inner: Encoding,
}

impl OutputSink {
    /// Open the destination, truncating an existing file
    pub fn create(target: &OutputTarget, compress: bool) -> Result<Self> {
        let (path, destination) = match target {
            OutputTarget::File(path) => {
                let path = final_output_path(path, compress, None);
                let file = File::create(&path).map_err(|e| XdirError::output_create(&path, e))?;
                (Some(path), Destination::File(BufWriter::new(file)))
            }
            OutputTarget::Stdout => (None, Destination::Stdout(BufWriter::new(io::stdout()))),
        };

        let inner = if compress {
            Encoding::Gzip(GzEncoder::new(destination, Compression::default()))
        } else {
            Encoding::Plain(destination)
        };

        Ok(Self { path, inner })
    }

    /// Path being written, `None` for stdout
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flush everything, including the gzip trailer
    pub fn finish(self) -> Result<Option<PathBuf>> {
        let path = self.path;
        let result = match self.inner {
            Encoding::Plain(mut destination) => destination.flush(),
            Encoding::Gzip(encoder) => encoder.finish().and_then(|mut d| d.flush()),
        };
        result.map_err(|e| match &path {
            Some(p) => XdirError::output_write(p, e),
            None => XdirError::stdout_write(e),
        })?;
        Ok(path)
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            Encoding::Plain(w) => w.write(buf),
            Encoding::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            Encoding::Plain(w) => w.flush(),
            Encoding::Gzip(w) => w.flush(),
        }
    }
}

/// Trait for output writers
pub trait OutputWriter {
    /// Write a complete document to the output destination
    fn write(&self, content: &[u8]) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter {
    compress: bool,
}

impl StdoutWriter {
    pub fn new(compress: bool) -> Self {
        Self { compress }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &[u8]) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let result = if self.compress {
            let mut encoder = GzEncoder::new(&mut lock, Compression::default());
            encoder.write_all(content).and_then(|_| encoder.finish().map(|_| ()))
        } else {
            lock.write_all(content)
        };
        result
            .and_then(|_| lock.flush())
            .map_err(XdirError::stdout_write)
    }
}

/// Writer for file output
///
/// The document is written to a temporary file next to the destination and
/// renamed into place, so a failed run never leaves a partial document.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    compress: bool,
}

impl FileWriter {
    /// Create a new file writer for the exact final path
    pub fn new(path: impl AsRef<Path>, compress: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            compress,
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &[u8]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut temp =
            NamedTempFile::new_in(&dir).map_err(|e| XdirError::output_create(&self.path, e))?;

        let written = if self.compress {
            let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
            encoder.write_all(content).and_then(|_| encoder.finish().map(|_| ()))
        } else {
            temp.as_file_mut().write_all(content)
        };
        written
            .and_then(|_| temp.as_file_mut().sync_all())
            .map_err(|e| XdirError::output_write(&self.path, e))?;

        temp.persist(&self.path)
            .map_err(|e| XdirError::output_write(&self.path, e.error))?;
        Ok(())
    }
}

/// Create an output writer for a finished document
pub fn create_writer(
    output_file: Option<impl AsRef<Path>>,
    compress: bool,
) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path, compress)),
        None => Box::new(StdoutWriter::new(compress)),
    }
}
