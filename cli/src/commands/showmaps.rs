use anyhow::Context;
use colored::*;
use hmap_common::config::Config;
use hmap_core::HostsTable;

use crate::hprint;
use crate::terminal::{colors, print};

pub fn showmaps(cfg: &Config) -> anyhow::Result<()> {
    let table: HostsTable = hmap_core::load_hosts(&cfg.hosts_path)
        .with_context(|| format!("Failed to parse {}", cfg.hosts_path.display()))?;

    if table.is_empty() {
        print::print_status(format!("No maps in {}", cfg.hosts_path.display()));
        return Ok(());
    }

    match cfg.quiet {
        0 => {
            print::print_status(format!("Maps for {}:", cfg.hosts_path.display()));
            for (idx, record) in table.iter().enumerate() {
                print::map_tree(idx, record);
            }
        }
        _ => {
            for record in &table {
                print::map_line(record);
            }
        }
    }

    print_summary(&table, cfg);
    Ok(())
}

fn print_summary(table: &HostsTable, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let maps: ColoredString = format!("{} maps", table.len()).bold().green();
    let hosts: usize = table.iter().map(|r| r.hostnames().len()).sum();
    let hosts: ColoredString = format!("{hosts} hosts").bold().yellow();
    let output: String = format!("{maps} covering {hosts}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    hprint!();
    print::fat_separator(cfg.quiet);
    print::centerln(&output);

    for skipped in table.skipped() {
        print::print_status(format!(
            "line {} ignored: {}",
            skipped.line_number, skipped.reason
        ));
    }
}
