//! # Error Model
//!
//! Every fallible operation of the core returns [`Result`], whose error side is
//! [`HmapError`]. Line-level validation problems are *not* errors in this sense:
//! the validator reports them as data, see `hmap_core::validator`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::{MAX_HOSTNAME_LENGTH, MAX_IP_LENGTH, MAX_NUM_ALIASES};

pub type Result<T> = std::result::Result<T, HmapError>;

#[derive(Debug, Error)]
pub enum HmapError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A map string could not be split into an IP and its hosts.
    #[error("invalid map string '{input}': {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    #[error("IP address '{ip}' is longer than {max} bytes", max = MAX_IP_LENGTH)]
    IpTooLong { ip: String },

    #[error("hostname '{hostname}' is longer than {max} bytes", max = MAX_HOSTNAME_LENGTH)]
    HostnameTooLong { hostname: String },

    #[error("a record holds at most {max} hostnames, got {count}", max = MAX_NUM_ALIASES)]
    TooManyAliases { count: usize },

    #[error("'{ip}' is not a valid IP address")]
    InvalidIp { ip: String },

    #[error("'{hostname}' is not a valid hostname")]
    InvalidHost { hostname: String },

    #[error("record for '{ip}' has no hostnames")]
    NoHostnames { ip: String },

    #[error("line {line_number} is longer than {limit} bytes")]
    LineTooLong { line_number: usize, limit: usize },
}

impl HmapError {
    /// Classifies an error raised while opening `path`.
    pub fn from_open(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => HmapError::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => HmapError::AccessDenied(path.to_path_buf()),
            _ => HmapError::Io(err),
        }
    }

    pub fn invalid_format(input: &str, reason: &'static str) -> Self {
        HmapError::InvalidFormat {
            input: input.to_owned(),
            reason,
        }
    }
}
