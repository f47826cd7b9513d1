use std::collections::HashSet;

use anyhow::{Context, bail};
use hmap_common::config::Config;
use hmap_common::success;
use hmap_core::{HostRecord, HostsTable};
use tracing::{info, warn};

use crate::terminal::print;

pub fn addmap(map: &str, cfg: &Config) -> anyhow::Result<()> {
    let record: HostRecord = hmap_core::parse_map_string(map)
        .context("Invalid map string, see `hmap map-format` for more information")?;

    let table: HostsTable = hmap_core::load_hosts(&cfg.hosts_path)
        .with_context(|| format!("Failed to parse {}", cfg.hosts_path.display()))?;

    if !table.skipped().is_empty() {
        warn!(
            "{} line(s) of {} were ignored, run `hmap validate` for details",
            table.skipped().len(),
            cfg.hosts_path.display()
        );
    }

    check_record(&record, &table)?;

    info!("Adding the following map:");
    print::map_line(&record);

    hmap_core::append_record(&cfg.hosts_path, &record).with_context(|| {
        format!(
            "Failed to add new host to {}, make sure you have enough permission",
            cfg.hosts_path.display()
        )
    })?;

    success!("Map added successfully");
    Ok(())
}

/// Rejects records that would map a hostname twice. Syntax was already
/// checked by the parser.
fn check_record(record: &HostRecord, table: &HostsTable) -> anyhow::Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for hostname in record.hostnames() {
        if !seen.insert(hostname.as_str()) {
            bail!("'{hostname}' appears more than once in the map");
        }

        if hmap_core::is_hostname_in_use(table, hostname) {
            let ip: &str = table.find_ip(hostname).unwrap_or("another address");
            bail!("'{hostname}' is already pointing to {ip}");
        }
    }

    Ok(())
}
