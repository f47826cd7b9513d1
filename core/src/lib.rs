//! # HMAP Core
//!
//! Parsing, validation, querying and mutation of hosts files.
//!
//! ## Modules
//! * **[`reader`]**: bounded line reader.
//! * **[`validators`]**: IP and hostname syntax predicates.
//! * **[`parser`]**: hosts-file lines and map strings into [`HostRecord`]s.
//! * **[`table`]**: permissive in-memory table of a whole file.
//! * **[`validator`]**: strict line-by-line validation with diagnostics.
//! * **[`mutator`]**: appending records to a file.
//!
//! The free functions re-exported here are the surface the command line
//! works with.

use std::path::Path;

use hmap_common::error::Result;
pub use hmap_common::record::HostRecord;

pub mod mutator;
pub mod parser;
pub mod reader;
pub mod table;
pub mod validator;
pub mod validators;

pub use mutator::append_record;
pub use parser::{parse_line, parse_map_string};
pub use table::HostsTable;
pub use validator::{validate_file, Status, ValidationContext, ValidationKind, Validator};
pub use validators::{is_valid_host, is_valid_ip};

/// Loads the hosts file at `path` into a [`HostsTable`].
pub fn load_hosts(path: &Path) -> Result<HostsTable> {
    HostsTable::load(path)
}

/// Returns `true` if `hostname` is already mapped by a record of `table`.
pub fn is_hostname_in_use(table: &HostsTable, hostname: &str) -> bool {
    table.is_hostname_in_use(hostname)
}
