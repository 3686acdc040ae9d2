//! Command line interface

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::ResolverConfig;
use crate::version::resolver::VersionResolver;

#[derive(Debug, Parser)]
#[command(name = "version-resolver")]
#[command(
    version,
    about = "Resolve wildcard version specifiers against a catalog of versions"
)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, overrides the configured level
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the highest version matching the specifier
    Resolve(ResolveArgs),
    /// Print every matching version, highest first
    List(ResolveArgs),
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Version specifier, e.g. "8.+" or "1.7.0_+"
    #[arg(short, long, value_name = "SPEC")]
    pub candidate: Option<String>,

    /// Specifier used when no candidate is given; overrides the configured default
    #[arg(short, long = "default", value_name = "SPEC")]
    pub default_version: Option<String>,

    /// Concrete versions to choose from
    #[arg(required = true, value_name = "VERSION")]
    pub versions: Vec<String>,
}

impl ResolveArgs {
    /// Resolver for the `--default` flag or, failing that, the configured default
    ///
    /// The default is validated even when a candidate is given.
    fn resolver(&self, config: &ResolverConfig) -> anyhow::Result<VersionResolver> {
        let default_version = self
            .default_version
            .as_deref()
            .unwrap_or(&config.default_version);
        VersionResolver::new(default_version)
            .with_context(|| format!("Invalid default version '{}'", default_version))
    }
}

/// Execute a command, writing results to `out`
pub fn run<W: Write>(
    command: &Command,
    config: &ResolverConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Resolve(args) => {
            let resolved = args
                .resolver(config)?
                .resolve(args.candidate.as_deref(), &args.versions)?;
            info!("Resolved version {}", resolved);
            writeln!(out, "{}", resolved).context("Failed to write output")?;
        }
        Command::List(args) => {
            let matched = args
                .resolver(config)?
                .matching_versions(args.candidate.as_deref(), &args.versions)?;
            for version in matched {
                writeln!(out, "{}", version).context("Failed to write output")?;
            }
        }
    }
    Ok(())
}
