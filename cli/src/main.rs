use adamx_core::{ConfigStore, LoadSource};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod banner;
mod repl;

#[derive(Parser)]
#[command(name = "adamx")]
#[command(about = "adamx - your terminal coding companion", long_about = None)]
struct Cli {
    /// Path to the settings file (default: ~/.adamx/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress the startup banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(ConfigStore::default_path);
    let store = ConfigStore::new(path);

    // The only fatal failure: the settings document can be neither read nor
    // recreated. Everything after this point is recoverable per command.
    let (settings, source) = store
        .load()
        .context("Failed to initialize configuration")?;

    if source == LoadSource::Recovered {
        eprintln!("Error reading config file. Using defaults.");
    }

    if !cli.no_banner {
        banner::print_welcome(&settings);
    }

    repl::Repl::new(store, settings).run()
}
