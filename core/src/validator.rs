//! # Line Validator
//!
//! Strict, character-by-character check of a hosts file. Unlike
//! [`HostsTable::load`](crate::table::HostsTable::load), which skips what it
//! cannot parse, the validator stops at the first problem and reports where
//! it is: 1-based line number, 0-based column and the offending line.
//!
//! Each line is scanned left to right through a small state machine:
//!
//! * whitespace at column 0 is an error;
//! * `#` ends the line (the rest is a comment);
//! * alphanumerics, `.`, `-`, `:` and `%` build up the current word;
//! * whitespace elsewhere closes the current word. The first word must be an
//!   IP address, every later word a hostname;
//! * anything else is an unexpected character.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hmap_common::config::ValidationOptions;
use hmap_common::error::{HmapError, Result};
use hmap_common::record::{MAX_LINE_LENGTH, MAX_NUM_ALIASES};
use thiserror::Error;
use tracing::debug;

use crate::reader::LineReader;
use crate::validators::{is_valid_host, is_valid_ip};

const COMMENT_CHAR: u8 = b'#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationKind {
    #[error("Whitespace before IP address is not allowed")]
    WhitespaceBeforeIp,
    #[error("HMAP recommends against mixing tabs and spaces")]
    MixedWhitespace,
    #[error("Invalid IP address format")]
    InvalidIp,
    #[error("Invalid host format")]
    InvalidHost,
    #[error("Unexpected character")]
    UnexpectedChar,
    #[error("No host was provided")]
    NoHost,
    #[error("Too many hosts on one line (at most {max})", max = MAX_NUM_ALIASES)]
    TooManyAliases,
    #[error("Line is longer than {max} bytes", max = MAX_LINE_LENGTH)]
    LineTooLong,
}

impl ValidationKind {
    pub fn severity(self) -> Status {
        match self {
            ValidationKind::MixedWhitespace => Status::Warning,
            _ => Status::Error,
        }
    }
}

/// A problem found on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineIssue {
    pub kind: ValidationKind,
    pub column: usize,
}

impl LineIssue {
    fn new(kind: ValidationKind, column: usize) -> Self {
        Self { kind, column }
    }
}

/// Outcome of validating a whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    pub status: Status,
    pub kind: Option<ValidationKind>,
    /// Line of the issue, or the number of lines read on a clean pass.
    pub line_number: usize,
    pub column: usize,
    /// Text of the offending line, without its terminator.
    pub line: String,
}

impl ValidationContext {
    fn new() -> Self {
        Self {
            status: Status::Ok,
            kind: None,
            line_number: 0,
            column: 0,
            line: String::new(),
        }
    }

    fn record(&mut self, issue: LineIssue, line: String) {
        self.status = issue.kind.severity();
        self.kind = Some(issue.kind);
        self.column = issue.column;
        self.line = line;
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing read yet.
    Start,
    /// Inside a word that began at `start`.
    Word { start: usize },
    /// Inside a run of whitespace between words.
    Gap,
    /// Reached `#`.
    Comment,
}

/// Scanner for a single line.
struct LineScanner<'a> {
    line: &'a [u8],
    options: ValidationOptions,
    state: State,
    words: usize,
    seen_tab: bool,
    seen_space: bool,
    warning: Option<LineIssue>,
}

impl<'a> LineScanner<'a> {
    fn new(line: &'a [u8], options: ValidationOptions) -> Self {
        Self {
            line,
            options,
            state: State::Start,
            words: 0,
            seen_tab: false,
            seen_space: false,
            warning: None,
        }
    }

    fn run(mut self) -> Option<LineIssue> {
        let line: &'a [u8] = self.line;
        let mut end = line.len();

        for (column, &byte) in line.iter().enumerate() {
            if let Err(issue) = self.step(column, byte) {
                return Some(issue);
            }
            if self.state == State::Comment {
                end = column;
                break;
            }
        }

        if let Err(issue) = self.finish(end) {
            return Some(issue);
        }

        self.warning
    }

    fn step(&mut self, column: usize, byte: u8) -> std::result::Result<(), LineIssue> {
        if byte.is_ascii_whitespace() {
            if column == 0 {
                return Err(LineIssue::new(ValidationKind::WhitespaceBeforeIp, 0));
            }
            if let State::Word { start } = self.state {
                self.close_word(start, column)?;
            }
            self.note_whitespace(column, byte);
            self.state = State::Gap;
        } else if byte == COMMENT_CHAR {
            if let State::Word { start } = self.state {
                self.close_word(start, column)?;
            }
            self.state = State::Comment;
        } else if is_word_byte(byte) {
            if matches!(self.state, State::Start | State::Gap) {
                self.state = State::Word { start: column };
            }
        } else {
            return Err(LineIssue::new(ValidationKind::UnexpectedChar, column));
        }

        Ok(())
    }

    fn finish(&mut self, end: usize) -> std::result::Result<(), LineIssue> {
        if let State::Word { start } = self.state {
            self.close_word(start, end)?;
        }

        match self.words {
            // Comment-only line.
            0 if end == 0 => Ok(()),
            0 | 1 => Err(LineIssue::new(ValidationKind::NoHost, end)),
            _ => Ok(()),
        }
    }

    fn close_word(&mut self, start: usize, end: usize) -> std::result::Result<(), LineIssue> {
        let word = String::from_utf8_lossy(&self.line[start..end]);
        self.words += 1;

        if self.words == 1 {
            if !is_valid_ip(&word) {
                return Err(LineIssue::new(ValidationKind::InvalidIp, start));
            }
        } else {
            if self.words - 1 > MAX_NUM_ALIASES {
                return Err(LineIssue::new(ValidationKind::TooManyAliases, start));
            }
            if !is_valid_host(&word) {
                return Err(LineIssue::new(ValidationKind::InvalidHost, start));
            }
        }

        Ok(())
    }

    fn note_whitespace(&mut self, column: usize, byte: u8) {
        if byte == b'\t' {
            self.seen_tab = true;
        } else {
            self.seen_space = true;
        }

        if self.options.warn_mixed_whitespace
            && self.seen_tab
            && self.seen_space
            && self.warning.is_none()
        {
            self.warning = Some(LineIssue::new(ValidationKind::MixedWhitespace, column));
        }
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b':' | b'%')
}

/// Validates hosts files line by line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Checks a single line, terminator excluded. Blank lines are fine.
    pub fn validate_line(&self, line: &[u8]) -> Option<LineIssue> {
        if line.is_empty() {
            return None;
        }
        LineScanner::new(line, self.options).run()
    }

    /// Validates the file at `path`.
    ///
    /// # Errors
    /// Only when the file cannot be opened or read; problems inside the file
    /// are reported through the returned [`ValidationContext`].
    pub fn validate_file(&self, path: &Path) -> Result<ValidationContext> {
        let file = File::open(path).map_err(|e| HmapError::from_open(path, e))?;
        self.validate_reader(file)
    }

    pub fn validate_reader<R: Read>(&self, reader: R) -> Result<ValidationContext> {
        let mut ctx = ValidationContext::new();

        for line in LineReader::new(reader) {
            match line {
                Ok(line) => {
                    ctx.line_number = line.number;
                    if let Some(issue) = self.validate_line(line.content()) {
                        debug!("Line {} failed validation: {}", line.number, issue.kind);
                        ctx.record(issue, line.text());
                        return Ok(ctx);
                    }
                }
                Err(HmapError::LineTooLong { line_number, limit }) => {
                    ctx.line_number = line_number;
                    ctx.record(
                        LineIssue::new(ValidationKind::LineTooLong, limit),
                        String::new(),
                    );
                    return Ok(ctx);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(ctx)
    }
}

/// Validates the file at `path` with default options.
pub fn validate_file(path: &Path) -> Result<ValidationContext> {
    Validator::default().validate_file(path)
}
