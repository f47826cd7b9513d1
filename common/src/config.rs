use std::path::PathBuf;

pub struct Config {
    /// Hosts file every operation works on.
    pub hosts_path: PathBuf,
    /// How much terminal decoration to drop. `0` prints everything.
    pub quiet: u8,
    pub validation: ValidationOptions,
}

/// Tunables for the line validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Raise a warning when a line separates its fields with both tabs and spaces.
    ///
    /// Off by default.
    pub warn_mixed_whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_path: default_hosts_path(),
            quiet: 0,
            validation: ValidationOptions::default(),
        }
    }
}

/// Returns the path of the system hosts file.
pub fn default_hosts_path() -> PathBuf {
    default_hosts_path_impl()
}

#[cfg(not(windows))]
fn default_hosts_path_impl() -> PathBuf {
    PathBuf::from("/etc/hosts")
}

#[cfg(windows)]
fn default_hosts_path_impl() -> PathBuf {
    match std::env::var_os("SystemRoot") {
        Some(root) => PathBuf::from(root).join("System32/drivers/etc/hosts"),
        None => PathBuf::from("C:/Windows/System32/drivers/etc/hosts"),
    }
}
