//! Bounded line reader.
//!
//! Reads a byte stream one line at a time, never holding more than
//! [`MAX_LINE_LENGTH`] bytes of line content in memory.

use std::io::{BufRead, BufReader, Read};

use hmap_common::error::{HmapError, Result};
use hmap_common::record::MAX_LINE_LENGTH;

/// One raw line, terminator included when the stream had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position of the line in the stream.
    pub number: usize,
    pub bytes: Vec<u8>,
}

impl Line {
    /// The line without its `\n` or `\r\n` terminator.
    pub fn content(&self) -> &[u8] {
        let bytes = self.bytes.strip_suffix(b"\n").unwrap_or(&self.bytes);
        bytes.strip_suffix(b"\r").unwrap_or(bytes)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.content()).into_owned()
    }
}

pub struct LineReader<R> {
    inner: BufReader<R>,
    line_number: usize,
    limit: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_limit(reader, MAX_LINE_LENGTH)
    }

    /// Reader rejecting lines whose content exceeds `limit` bytes.
    pub fn with_limit(reader: R, limit: usize) -> Self {
        Self {
            inner: BufReader::new(reader),
            line_number: 0,
            limit,
        }
    }

    /// Returns the next line, or `None` once the stream is exhausted.
    ///
    /// An overlong line is consumed up to its newline and reported as
    /// [`HmapError::LineTooLong`]; the following call continues with the next line.
    pub fn next_line(&mut self) -> Result<Option<Line>> {
        let mut bytes: Vec<u8> = Vec::new();
        // Content plus a `\r\n` terminator.
        let budget = (self.limit + 2) as u64;

        let read = (&mut self.inner).take(budget).read_until(b'\n', &mut bytes)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if bytes.len() as u64 == budget && bytes.last() != Some(&b'\n') {
            self.skip_rest_of_line()?;
            return Err(self.too_long());
        }

        let line = Line {
            number: self.line_number,
            bytes,
        };
        // The terminator (or the end of the stream) was reached, nothing to skip.
        if line.content().len() > self.limit {
            return Err(self.too_long());
        }

        Ok(Some(line))
    }

    fn too_long(&self) -> HmapError {
        HmapError::LineTooLong {
            line_number: self.line_number,
            limit: self.limit,
        }
    }

    fn skip_rest_of_line(&mut self) -> Result<()> {
        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.inner.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.inner.consume(len);
                }
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
