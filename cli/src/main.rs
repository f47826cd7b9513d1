mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, addmap, map_format, rmhost, showmaps, validate};
use hmap_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg: Config = commands.config();

    let result: anyhow::Result<()> = match commands.command.unwrap_or(Commands::Showmaps) {
        Commands::Addmap { map } => {
            print::header("adding map", cfg.quiet);
            addmap::addmap(&map, &cfg)
        }
        Commands::Rmhost { host } => {
            print::header("removing host", cfg.quiet);
            rmhost::rmhost(&host, &cfg)
        }
        Commands::Showmaps => {
            print::header("showing maps", cfg.quiet);
            showmaps::showmaps(&cfg)
        }
        Commands::Validate => {
            print::header("validating", cfg.quiet);
            validate::validate(&cfg)
        }
        Commands::MapFormat => map_format::map_format(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
