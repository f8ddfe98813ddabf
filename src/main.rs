#![deny(unsafe_code)]

mod commands;
mod config;
mod constants;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::commands::config::ConfigArgs;

#[derive(Parser)]
#[command(name = "jcli")]
#[command(version)]
#[command(about = "Jenkins command line client", long_about = None)]
struct Cli {
    /// Path of the config file (defaults to ~/.jenkins-cli.yaml)
    #[arg(long, global = true, value_name = "PATH", env = constants::config::PATH_ENV)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the config of jcli
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `config --generate` output can be redirected
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Config(args) => commands::config::run(args, cli.config.as_deref(), &mut out),
    }
}
