//! Appends new records to a hosts file.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use hmap_common::error::{HmapError, Result};
use hmap_common::record::{ADDED_BY_MARKER, HostRecord};
use tracing::debug;

/// Appends `record` to the hosts file at `path`, preceded by
/// [`ADDED_BY_MARKER`].
///
/// The marker, the record and their newlines are written with a single
/// `write_all` so the marker never lands without its record on a successful
/// write. The file is never created.
///
/// A file that can be appended to but not read is still accepted. Its last
/// byte cannot be checked, so a non-empty one gets a blank line before the
/// marker.
///
/// # Errors
/// [`HmapError::FileNotFound`] if `path` does not exist,
/// [`HmapError::AccessDenied`] if it cannot be opened for appending and
/// [`HmapError::Io`] if the write fails.
pub fn append_record(path: &Path, record: &HostRecord) -> Result<()> {
    let (mut file, terminated) = match OpenOptions::new().read(true).append(true).open(path) {
        Ok(mut file) => {
            let terminated = ends_with_newline(&mut file)?;
            (file, terminated)
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!("{} is not readable, appending without reading it", path.display());
            let file = OpenOptions::new()
                .append(true)
                .open(path)
                .map_err(|e| HmapError::from_open(path, e))?;
            let terminated = file.metadata()?.len() == 0;
            (file, terminated)
        }
        Err(e) => return Err(HmapError::from_open(path, e)),
    };

    let mut entry = String::new();
    if !terminated {
        entry.push('\n');
    }
    entry.push_str(ADDED_BY_MARKER);
    entry.push('\n');
    entry.push_str(&record.to_line());
    entry.push('\n');

    file.write_all(entry.as_bytes())?;
    file.flush()?;

    debug!("Appended '{}' to {}", record, path.display());
    Ok(())
}

/// Empty files count as ending with a newline.
fn ends_with_newline(file: &mut File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;

    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record() -> HostRecord {
        HostRecord::new("192.168.1.1", ["myrouter", "router.lan"]).unwrap()
    }

    #[test]
    fn appends_marker_and_record() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "127.0.0.1 localhost\n").unwrap();

        append_record(file.path(), &record()).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            contents,
            "127.0.0.1 localhost\n\
             # The host below was added by HMAP\n\
             192.168.1.1\tmyrouter\trouter.lan\n"
        );
    }

    #[test]
    fn separates_from_unterminated_last_line() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "127.0.0.1 localhost").unwrap();

        append_record(file.path(), &record()).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("127.0.0.1 localhost\n# The host below"));
    }

    #[test]
    fn empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        append_record(file.path(), &record()).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with(ADDED_BY_MARKER));
    }

    #[cfg(unix)]
    #[test]
    fn write_only_file() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "127.0.0.1 localhost\n").unwrap();
        fs::set_permissions(file.path(), Permissions::from_mode(0o200)).unwrap();

        // Root ignores file modes.
        if fs::read(file.path()).is_ok() {
            eprintln!("Skipping permission test: running with elevated privileges.");
            return;
        }

        append_record(file.path(), &record()).unwrap();

        fs::set_permissions(file.path(), Permissions::from_mode(0o600)).unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            contents,
            "127.0.0.1 localhost\n\n\
             # The host below was added by HMAP\n\
             192.168.1.1\tmyrouter\trouter.lan\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn read_only_file_is_denied() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "127.0.0.1 localhost\n").unwrap();
        fs::set_permissions(file.path(), Permissions::from_mode(0o400)).unwrap();

        if fs::OpenOptions::new().append(true).open(file.path()).is_ok() {
            eprintln!("Skipping permission test: running with elevated privileges.");
            return;
        }

        assert!(matches!(
            append_record(file.path(), &record()),
            Err(HmapError::AccessDenied(_))
        ));
        fs::set_permissions(file.path(), Permissions::from_mode(0o600)).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "127.0.0.1 localhost\n");
    }

    #[test]
    fn missing_file_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");

        assert!(matches!(
            append_record(&path, &record()),
            Err(HmapError::FileNotFound(_))
        ));
        assert!(!path.exists());
    }
}
