use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use spidr_form::config::Config;
use spidr_form::logging::init_tracing;

/// Spidr Air Fryer interest form.
#[derive(Debug, Parser)]
#[command(name = "spidr-form", version, about)]
struct Cli {
    /// Path to the config file (default: <config dir>/spidr-form/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Hide the Spidr logo next to the form
    #[arg(long)]
    no_logo: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    if cli.no_logo {
        config.ui.show_logo = false;
    }

    spidr_form::ui::run(&config).context("Terminal UI failed")
}
