//! # Hosts Table
//!
//! In-memory view of a hosts file, used to answer "is this hostname already
//! mapped?" before a new record is appended.
//!
//! Loading is permissive: a line that cannot be turned into a record is
//! logged and remembered in [`HostsTable::skipped`], and loading carries on.
//! Strict checking is the job of the [`validator`](crate::validator).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hmap_common::error::{HmapError, Result};
use hmap_common::record::HostRecord;
use tracing::{debug, warn};

use crate::parser;
use crate::reader::LineReader;

const INITIAL_CAPACITY: usize = 32;

/// A line the loader could not turn into a record.
#[derive(Debug)]
pub struct SkippedLine {
    pub line_number: usize,
    pub reason: HmapError,
}

#[derive(Debug, Default)]
pub struct HostsTable {
    records: Vec<HostRecord>,
    skipped: Vec<SkippedLine>,
}

impl HostsTable {
    /// Loads every record of the hosts file at `path`.
    ///
    /// # Errors
    /// [`HmapError::FileNotFound`] if the file does not exist,
    /// [`HmapError::AccessDenied`] if it cannot be opened for reading and
    /// [`HmapError::Io`] if reading fails midway.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| HmapError::from_open(path, e))?;
        let table = Self::from_reader(file)?;

        debug!(
            "Loaded {} records from {} ({} lines skipped)",
            table.len(),
            path.display(),
            table.skipped.len()
        );
        Ok(table)
    }

    /// Builds a table from any byte stream in hosts-file format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut table = Self {
            records: Vec::with_capacity(INITIAL_CAPACITY),
            skipped: Vec::new(),
        };

        for line in LineReader::new(reader) {
            let line = match line {
                Ok(line) => line,
                Err(e @ HmapError::LineTooLong { line_number, .. }) => {
                    table.skip(line_number, e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            match parser::parse_line(line.content()) {
                Ok(Some(record)) => table.records.push(record),
                Ok(None) => {}
                Err(reason) => table.skip(line.number, reason),
            }
        }

        table.records.shrink_to_fit();
        Ok(table)
    }

    fn skip(&mut self, line_number: usize, reason: HmapError) {
        warn!("Skipping line {line_number}: {reason}");
        self.skipped.push(SkippedLine {
            line_number,
            reason,
        });
    }

    /// Returns `true` if any record maps `hostname`. Matching is exact and
    /// case-sensitive.
    pub fn is_hostname_in_use(&self, hostname: &str) -> bool {
        self.records.iter().any(|record| record.contains(hostname))
    }

    /// Returns the IP of the first record mapping `hostname`.
    pub fn find_ip(&self, hostname: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.contains(hostname))
            .map(HostRecord::ip)
    }

    pub fn records(&self) -> &[HostRecord] {
        &self.records
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a HostsTable {
    type Item = &'a HostRecord;
    type IntoIter = std::slice::Iter<'a, HostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
