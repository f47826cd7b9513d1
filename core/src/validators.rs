//! Syntax predicates for the two kinds of tokens found in a hosts file.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

use hmap_common::record::{MAX_HOSTNAME_LENGTH, MAX_IP_LENGTH};
use regex::Regex;

const HOSTNAME_PATTERN: &str =
    r"(?i)^[a-z](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*$";

static HOSTNAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Retrieves or compiles the hostname pattern.
fn hostname_regex() -> &'static Regex {
    HOSTNAME_REGEX.get_or_init(|| {
        // The pattern is a constant; failing to compile it is a programming error.
        Regex::new(HOSTNAME_PATTERN).expect("hostname pattern must compile")
    })
}

/// Returns `true` if `ip` is an IPv4 dotted quad or an IPv6 literal.
///
/// IPv6 literals may carry a `%zone` suffix (e.g. `fe80::1%eth0`).
pub fn is_valid_ip(ip: &str) -> bool {
    if ip.is_empty() || ip.len() > MAX_IP_LENGTH {
        return false;
    }

    is_valid_ipv4(ip) || is_valid_ipv6(ip)
}

fn is_valid_ipv4(ip: &str) -> bool {
    ip.parse::<Ipv4Addr>().is_ok()
}

fn is_valid_ipv6(ip: &str) -> bool {
    match ip.split_once('%') {
        Some((addr, zone)) => addr.parse::<Ipv6Addr>().is_ok() && is_valid_zone(zone),
        None => ip.parse::<Ipv6Addr>().is_ok(),
    }
}

fn is_valid_zone(zone: &str) -> bool {
    !zone.is_empty()
        && zone
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Returns `true` if `host` is an acceptable hostname.
///
/// Labels are separated by dots. The first label starts with a letter, every
/// label ends with a letter or digit, hyphens are allowed in between. Case is
/// ignored.
pub fn is_valid_host(host: &str) -> bool {
    !host.is_empty() && host.len() <= MAX_HOSTNAME_LENGTH && hostname_regex().is_match(host)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
