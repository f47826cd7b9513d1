use hmap_common::config::Config;

pub fn rmhost(host: &str, _cfg: &Config) -> anyhow::Result<()> {
    anyhow::bail!("'rmhost' is not implemented yet, '{host}' was left in place");
}
