//! Content collection
//!
//! Reads a selected file into a [`FileRecord`]. Anything that keeps a file
//! out of the document (too large, unreadable, not embeddable) comes back as
//! a per-entry error for the caller to count.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, XdirError};
use crate::models::FileRecord;
use crate::output::xml::check_embeddable;

/// Reads files under a size ceiling
#[derive(Debug, Clone, Copy)]
pub struct ContentCollector {
    max_file_size: u64,
}

impl ContentCollector {
    /// Create a collector; a ceiling of 0 disables the size check
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Read `path` and build a record keyed by `key`
    ///
    /// The file handle is dropped before returning, whatever the outcome.
    pub fn collect(&self, path: &Path, key: impl Into<String>) -> Result<FileRecord> {
        let mut file = File::open(path).map_err(|err| XdirError::file_read(path, err))?;
        let size = file
            .metadata()
            .map_err(|err| XdirError::file_read(path, err))?
            .len();

        if self.max_file_size > 0 && size > self.max_file_size {
            return Err(XdirError::file_too_large(path, size, self.max_file_size));
        }

        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes)
            .map_err(|err| XdirError::file_read(path, err))?;

        let content = String::from_utf8(bytes).map_err(|err| {
            XdirError::encoding(path, format!("not valid UTF-8: {}", err.utf8_error()))
        })?;
        check_embeddable(&content).map_err(|message| XdirError::encoding(path, message))?;

        Ok(FileRecord::new(key, size, content))
    }
}
