use anyhow::{Context, bail};
use hmap_common::config::Config;
use hmap_common::success;
use hmap_core::{Status, ValidationContext, Validator};

use crate::terminal::print;

pub fn validate(cfg: &Config) -> anyhow::Result<()> {
    let ctx: ValidationContext = Validator::new(cfg.validation)
        .validate_file(&cfg.hosts_path)
        .with_context(|| format!("Unable to open/read {}", cfg.hosts_path.display()))?;

    match ctx.status {
        Status::Ok => {
            success!("File validated successfully!");
            Ok(())
        }
        Status::Warning => {
            print::diagnostic(&cfg.hosts_path, &ctx);
            Ok(())
        }
        Status::Error => {
            print::diagnostic(&cfg.hosts_path, &ctx);
            bail!("{} is not a valid hosts file", cfg.hosts_path.display());
        }
    }
}
