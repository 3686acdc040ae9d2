use anyhow::Context;
use clap::Parser;

use version_resolver::cli::{self, Cli};
use version_resolver::config::ResolverConfig;
use version_resolver::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        ResolverConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    let _guard = logging::init(&config.logging)?;

    let mut stdout = std::io::stdout().lock();
    cli::run(&cli.command, &config, &mut stdout)
}
