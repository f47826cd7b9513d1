#![cfg(test)]
use hmap_common::error::HmapError;
use hmap_common::record::{ADDED_BY_MARKER, HostRecord};
use hmap_core::{
    Status, ValidationKind, append_record, is_hostname_in_use, load_hosts, parse_map_string,
    validate_file,
};
use pretty_assertions::assert_eq;

use crate::util::{HostsFixture, SCENARIO};

#[test]
fn load_scenario() {
    let hosts: HostsFixture = HostsFixture::new(SCENARIO);

    let table = load_hosts(&hosts.path).unwrap();

    assert_eq!(table.len(), 2);
    assert!(is_hostname_in_use(&table, "myrouter"));
    assert!(!is_hostname_in_use(&table, "missing"));
}

/// The path the CLI takes for `addmap`: parse, check, append, reload.
#[test]
fn append_then_reload() {
    let hosts: HostsFixture = HostsFixture::new(SCENARIO);

    let record: HostRecord = parse_map_string("10.0.0.5 <- nas, nas.lan").unwrap();
    let before = load_hosts(&hosts.path).unwrap();
    assert!(!is_hostname_in_use(&before, "nas"));

    append_record(&hosts.path, &record).unwrap();

    let after = load_hosts(&hosts.path).unwrap();
    assert_eq!(after.len(), 3);
    assert!(is_hostname_in_use(&after, "nas"));
    assert!(is_hostname_in_use(&after, "nas.lan"));
    assert_eq!(after.records()[2], record);

    assert_eq!(
        hosts.contents(),
        format!("{SCENARIO}{ADDED_BY_MARKER}\n10.0.0.5\tnas\tnas.lan\n")
    );

    // What hmap writes passes its own validation.
    let ctx = validate_file(&hosts.path).unwrap();
    assert!(ctx.is_ok(), "{ctx:?}");
}

#[test]
fn append_to_missing_file() {
    let hosts: HostsFixture = HostsFixture::missing();
    let record: HostRecord = parse_map_string("10.0.0.5<-nas").unwrap();

    let result = append_record(&hosts.path, &record);

    assert!(matches!(result, Err(HmapError::FileNotFound(_))));
    assert!(!hosts.path.exists());
}

#[test]
fn validate_leading_whitespace() {
    let hosts: HostsFixture = HostsFixture::new(" 127.0.0.1 localhost\n");

    let ctx = validate_file(&hosts.path).unwrap();

    assert_eq!(ctx.status, Status::Error);
    assert_eq!(ctx.kind, Some(ValidationKind::WhitespaceBeforeIp));
    assert_eq!(ctx.line_number, 1);
    assert_eq!(ctx.column, 0);
    assert_eq!(ctx.line, " 127.0.0.1 localhost");
}

#[test]
fn validate_unexpected_char() {
    let hosts: HostsFixture = HostsFixture::new("127.0.0.1 localhost\n10.0.0.1 nas # ok@\n10.0.0.2 b@d\n");

    let ctx = validate_file(&hosts.path).unwrap();

    assert_eq!(ctx.kind, Some(ValidationKind::UnexpectedChar));
    assert_eq!(ctx.line_number, 3);
    assert_eq!(ctx.column, 10);
}

#[test]
fn validate_missing_file() {
    let hosts: HostsFixture = HostsFixture::missing();

    assert!(matches!(
        validate_file(&hosts.path),
        Err(HmapError::FileNotFound(_))
    ));
    assert!(matches!(load_hosts(&hosts.path), Err(HmapError::FileNotFound(_))));
}

/// Indentation only trips the validator. Bad addresses and hostnames are
/// skipped by the loader and rejected by the validator.
#[test]
fn loader_is_permissive_validator_is_strict() {
    let hosts: HostsFixture =
        HostsFixture::new("  10.0.0.1 indented\n10.0.0.2 fine\nnot-an-ip stray\n10.0.0.3 -bad\n");

    let table = load_hosts(&hosts.path).unwrap();
    assert_eq!(table.len(), 2);
    assert!(is_hostname_in_use(&table, "indented"));
    assert!(!is_hostname_in_use(&table, "stray"));
    assert!(!is_hostname_in_use(&table, "-bad"));

    let skipped: Vec<usize> = table.skipped().iter().map(|s| s.line_number).collect();
    assert_eq!(skipped, [3, 4]);

    let ctx = validate_file(&hosts.path).unwrap();
    assert_eq!(ctx.kind, Some(ValidationKind::WhitespaceBeforeIp));
}

#[cfg(unix)]
#[test]
fn unreadable_file() {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let hosts: HostsFixture = HostsFixture::new(SCENARIO);
    fs::set_permissions(&hosts.path, Permissions::from_mode(0o000)).unwrap();

    // Root ignores file modes.
    if fs::read(&hosts.path).is_ok() {
        eprintln!("Skipping permission test: running with elevated privileges.");
        return;
    }

    assert!(matches!(load_hosts(&hosts.path), Err(HmapError::AccessDenied(_))));
}
