//! Record storage for buffered runs

use std::collections::HashMap;

use crate::error::{Result, XdirError};
use crate::models::FileRecord;

/// Records in walk order with an index by path
///
/// Paths are unique: a second record under an existing path is rejected and
/// the first one is kept.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<FileRecord>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, failing if its path is already taken
    pub fn insert(&mut self, record: FileRecord) -> Result<()> {
        if self.index.contains_key(&record.path) {
            return Err(XdirError::duplicate_record(record.path));
        }
        self.index.insert(record.path.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn position(&self, path: &str) -> Option<usize> {
        self.index.get(path).copied()
    }

    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.position(path).map(|idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut FileRecord> {
        match self.position(path) {
            Some(idx) => Some(&mut self.records[idx]),
            None => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, FileRecord> {
        self.records.iter_mut()
    }

    /// Record at a position, as returned by [`RecordSet::position`]
    pub fn at(&self, idx: usize) -> &FileRecord {
        &self.records[idx]
    }

    pub fn at_mut(&mut self, idx: usize) -> &mut FileRecord {
        &mut self.records[idx]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
