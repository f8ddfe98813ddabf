//! `jcli config`: show, list, generate and switch Jenkins server configs

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use crate::config::{Config, ConfigStore};
use crate::constants::output;

#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Set the current Jenkins
    #[arg(short, long, value_name = "NAME")]
    pub current: Option<String>,

    /// Show the current Jenkins
    #[arg(short, long)]
    pub show: bool,

    /// Generate a sample config file for you
    #[arg(short, long)]
    pub generate: bool,

    /// Display all your Jenkins configs
    #[arg(short, long)]
    pub list: bool,
}

impl ConfigArgs {
    fn target(&self) -> Option<&str> {
        self.current.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether any requested action reads or writes the config file
    fn needs_store(&self) -> bool {
        self.show || self.list || self.target().is_some()
    }
}

/// Entry point for the subcommand.
///
/// The config file is only loaded when an action needs it, so `--generate`
/// works before any config exists.
pub fn run<W: Write>(args: &ConfigArgs, config_path: Option<&Path>, out: &mut W) -> Result<()> {
    if !args.needs_store() {
        if args.generate {
            generate(out)?;
        }
        return Ok(());
    }

    let mut store = match config_path {
        Some(path) => ConfigStore::load(path),
        None => ConfigStore::load_default(),
    }
    .context("Failed to load Jenkins config")?;

    execute(args, &mut store, out)
}

/// Run the requested actions against a loaded store, in flag order
pub fn execute<W: Write>(args: &ConfigArgs, store: &mut ConfigStore, out: &mut W) -> Result<()> {
    if args.show {
        show(store, out)?;
    }

    if args.list {
        list(store.config(), out)?;
    }

    if args.generate {
        generate(out)?;
    }

    if let Some(name) = args.target() {
        store
            .set_current(name)
            .with_context(|| format!("Failed to set current Jenkins to {}", name))?;
        debug!(path = %store.path().display(), "Current Jenkins updated");
    }

    Ok(())
}

fn show<W: Write>(store: &ConfigStore, out: &mut W) -> Result<()> {
    let Some(current) = store.current_server() else {
        let name = &store.config().current;
        if name.is_empty() {
            bail!("No current Jenkins is set, use --current to choose one");
        }
        bail!("Current Jenkins {} is not in the config", name);
    };

    writeln!(
        out,
        "Current Jenkins's name is {}, url is {}",
        current.name, current.url
    )?;
    Ok(())
}

fn list<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "{}", output::LIST_HEADER)?;
    for (i, server) in config.servers.iter().enumerate() {
        writeln!(out, "{}-{}\t{}", i, server.name, server.url)?;
    }
    Ok(())
}

fn generate<W: Write>(out: &mut W) -> Result<()> {
    let sample = ConfigStore::generate_sample().context("Failed to generate sample config")?;
    write!(out, "{}", sample)?;
    Ok(())
}
