//! # Map Parser
//!
//! Turns raw hosts-file lines and user supplied map strings into
//! [`HostRecord`]s.
//!
//! A record only comes out of the parser complete: within its bounds, with
//! an IP that passes [`is_valid_ip`] and hostnames that pass
//! [`is_valid_host`]. Anything else fails that single record.

use hmap_common::error::{HmapError, Result};
use hmap_common::record::HostRecord;

use crate::validators::{is_valid_host, is_valid_ip};

const COMMENT_CHAR: u8 = b'#';
const MAP_SEPARATOR: [char; 2] = ['<', '-'];
const HOST_SEPARATOR: char = ',';

/// Whitespace delimited tokens of a hosts-file line, up to its comment.
pub struct Tokens<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self { line, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.line.len() && self.line[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        if self.pos >= self.line.len() || self.line[self.pos] == COMMENT_CHAR {
            self.pos = self.line.len();
            return None;
        }

        let start = self.pos;
        while self.pos < self.line.len()
            && !self.line[self.pos].is_ascii_whitespace()
            && self.line[self.pos] != COMMENT_CHAR
        {
            self.pos += 1;
        }

        Some(&self.line[start..self.pos])
    }
}

/// Parses one hosts-file line.
///
/// Returns `Ok(None)` for blank lines, comment lines and lines that only
/// carry an IP address.
pub fn parse_line(line: &[u8]) -> Result<Option<HostRecord>> {
    let mut tokens = Tokens::new(line).map(String::from_utf8_lossy);

    let Some(ip) = tokens.next() else {
        return Ok(None);
    };

    let hostnames: Vec<String> = tokens.map(|token| token.into_owned()).collect();
    if hostnames.is_empty() {
        return Ok(None);
    }

    let record = HostRecord::new(ip.into_owned(), hostnames)?;
    check_syntax(record).map(Some)
}

/// Parses a map string of the form `ip <- host[,host...]`.
///
/// Whitespace around the IP, the separator and each host is ignored.
pub fn parse_map_string(map: &str) -> Result<HostRecord> {
    let (ip_part, hosts_part) = split_map(map)?;

    let ip = ip_part.trim();
    if ip.is_empty() {
        return Err(HmapError::invalid_format(map, "no IP address before '<-'"));
    }
    if ip.contains(char::is_whitespace) {
        return Err(HmapError::invalid_format(map, "IP address contains whitespace"));
    }

    if hosts_part.trim().is_empty() {
        return Err(HmapError::invalid_format(map, "no hosts after '<-'"));
    }

    let mut hostnames: Vec<&str> = Vec::new();
    for host in hosts_part.split(HOST_SEPARATOR).map(str::trim) {
        if host.is_empty() {
            return Err(HmapError::invalid_format(map, "empty host in host list"));
        }
        if host.contains(char::is_whitespace) {
            return Err(HmapError::invalid_format(map, "host contains whitespace"));
        }
        hostnames.push(host);
    }

    check_syntax(HostRecord::new(ip, hostnames)?)
}

fn check_syntax(record: HostRecord) -> Result<HostRecord> {
    if !is_valid_ip(record.ip()) {
        return Err(HmapError::InvalidIp {
            ip: record.ip().to_owned(),
        });
    }

    if let Some(hostname) = record.hostnames().iter().find(|h| !is_valid_host(h)) {
        return Err(HmapError::InvalidHost {
            hostname: hostname.clone(),
        });
    }

    Ok(record)
}

/// Splits a map string at its single `<-` separator.
fn split_map(map: &str) -> Result<(&str, &str)> {
    let Some(pos) = map.find(MAP_SEPARATOR[0]) else {
        return Err(HmapError::invalid_format(map, "missing '<-' separator"));
    };

    let rest = &map[pos + MAP_SEPARATOR[0].len_utf8()..];
    let Some(hosts) = rest.strip_prefix(MAP_SEPARATOR[1]) else {
        return Err(HmapError::invalid_format(map, "'<' must be followed by '-'"));
    };

    if hosts.contains(MAP_SEPARATOR[0]) {
        return Err(HmapError::invalid_format(map, "more than one '<-' separator"));
    }

    Ok((&map[..pos], hosts))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
