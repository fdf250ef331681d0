use ferrous_lookup_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        upstream_servers = ?config.dns.upstream_servers,
        dns_server = %config.lookup.dns_server,
        subject_concurrency = config.lookup.subject_concurrency,
        query_concurrency = config.lookup.query_concurrency,
        "Configuration loaded"
    );

    Ok(config)
}
