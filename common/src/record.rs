//! # Host Record Model
//!
//! A [`HostRecord`] is one `ip -> hostnames` association, either read from a
//! hosts-file line or built from a map string such as `192.168.1.1 <- router`.
//!
//! Records are bounded: an IP holds at most [`MAX_IP_LENGTH`] bytes, a record
//! holds at most [`MAX_NUM_ALIASES`] hostnames of at most [`MAX_HOSTNAME_LENGTH`]
//! bytes each. Construction fails instead of truncating.

use std::fmt;

use crate::error::{HmapError, Result};

pub const MAX_IP_LENGTH: usize = 48;
pub const MAX_HOSTNAME_LENGTH: usize = 252;
pub const MAX_NUM_ALIASES: usize = 11;
pub const MAX_LINE_LENGTH: usize = 4096;

/// Comment written above every record appended by `hmap`.
pub const ADDED_BY_MARKER: &str = "# The host below was added by HMAP";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostRecord {
    ip: String,
    hostnames: Vec<String>,
}

impl HostRecord {
    /// Builds a record, checking every bound.
    ///
    /// Only bounds are checked here. Records coming out of the `hmap-core`
    /// parsers are also checked against the IP and hostname syntax.
    pub fn new<S>(ip: impl Into<String>, hostnames: impl IntoIterator<Item = S>) -> Result<Self>
    where
        S: Into<String>,
    {
        let ip: String = ip.into();
        if ip.len() > MAX_IP_LENGTH {
            return Err(HmapError::IpTooLong { ip });
        }

        let hostnames: Vec<String> = hostnames.into_iter().map(Into::into).collect();
        if hostnames.is_empty() {
            return Err(HmapError::NoHostnames { ip });
        }
        if hostnames.len() > MAX_NUM_ALIASES {
            return Err(HmapError::TooManyAliases {
                count: hostnames.len(),
            });
        }

        for hostname in &hostnames {
            if hostname.is_empty() {
                return Err(HmapError::invalid_format(&ip, "empty hostname"));
            }
            if hostname.len() > MAX_HOSTNAME_LENGTH {
                return Err(HmapError::HostnameTooLong {
                    hostname: hostname.clone(),
                });
            }
        }

        Ok(Self { ip, hostnames })
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Hostnames in file order.
    pub fn hostnames(&self) -> &[String] {
        &self.hostnames
    }

    pub fn contains(&self, hostname: &str) -> bool {
        self.hostnames.iter().any(|h| h == hostname)
    }

    /// Renders the record the way it is written to a hosts file:
    /// `ip<TAB>host1<TAB>host2`.
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(
            self.ip.len() + self.hostnames.iter().map(|h| h.len() + 1).sum::<usize>(),
        );
        line.push_str(&self.ip);
        for hostname in &self.hostnames {
            line.push('\t');
            line.push_str(hostname);
        }
        line
    }
}

/// Formats the record as a map string, `ip <- host1,host2`.
impl fmt::Display for HostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.ip, self.hostnames.join(","))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_line_and_map_string() {
        let record = HostRecord::new("10.0.0.1", ["nas", "nas.lan"]).unwrap();

        assert_eq!(record.to_line(), "10.0.0.1\tnas\tnas.lan");
        assert_eq!(record.to_string(), "10.0.0.1 <- nas,nas.lan");
        assert!(record.contains("nas.lan"));
        assert!(!record.contains("NAS"));
    }

    #[test]
    fn bounds_are_errors() {
        let long_ip = "1".repeat(MAX_IP_LENGTH + 1);
        assert!(matches!(
            HostRecord::new(long_ip, ["a"]),
            Err(HmapError::IpTooLong { .. })
        ));

        let long_host = "a".repeat(MAX_HOSTNAME_LENGTH + 1);
        assert!(matches!(
            HostRecord::new("::1", [long_host]),
            Err(HmapError::HostnameTooLong { .. })
        ));

        let max_host = "a".repeat(MAX_HOSTNAME_LENGTH);
        assert!(HostRecord::new("::1", [max_host]).is_ok());

        let too_many: Vec<String> = (0..=MAX_NUM_ALIASES).map(|i| format!("h{i}")).collect();
        assert!(matches!(
            HostRecord::new("::1", too_many),
            Err(HmapError::TooManyAliases { count: 12 })
        ));

        let empty: [&str; 0] = [];
        assert!(matches!(
            HostRecord::new("::1", empty),
            Err(HmapError::NoHostnames { .. })
        ));
        assert!(matches!(
            HostRecord::new("::1", ["a", ""]),
            Err(HmapError::InvalidFormat { .. })
        ));
    }
}
