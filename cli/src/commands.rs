pub mod addmap;
pub mod map_format;
pub mod rmhost;
pub mod showmaps;
pub mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use hmap_common::config::{Config, ValidationOptions, default_hosts_path};

#[derive(Parser)]
#[command(name = "hmap", version)]
#[command(about = "Inspect, validate and extend hosts files.")]
pub struct CommandLine {
    /// Hosts file to use
    #[arg(short = 'f', long = "file-path", global = true, default_value_os_t = default_hosts_path())]
    pub file_path: PathBuf,

    /// Print less (repeat for even less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Warn about lines that mix tabs and spaces when validating
    #[arg(long, global = true)]
    pub warn_mixed_whitespace: bool,

    // `showmaps` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a host to IP map to the hosts file
    #[command(alias = "a", after_help = map_format::MAP_FORMAT)]
    Addmap { map: String },
    /// Remove a host from the hosts file
    #[command(alias = "r")]
    Rmhost { host: String },
    /// Display the maps of the hosts file
    #[command(alias = "s")]
    Showmaps,
    /// Validate the hosts file
    #[command(alias = "v")]
    Validate,
    /// Explain the map format, with examples
    MapFormat,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            hosts_path: self.file_path.clone(),
            quiet: self.quiet,
            validation: ValidationOptions {
                warn_mixed_whitespace: self.warn_mixed_whitespace,
            },
        }
    }
}
