//! agentdesk - A terminal agent workstation for a 5G smart call center
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use agentdesk_app::config;
use agentdesk_core::prelude::*;
use agentdesk_core::FixtureSet;
use clap::Parser;

/// agentdesk - A terminal agent workstation for a 5G smart call center
#[derive(Parser, Debug)]
#[command(name = "agentdesk")]
#[command(about = "A terminal agent workstation for a 5G smart call center", long_about = None)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON fixture file replacing the built-in demo data
    #[arg(long, value_name = "FILE")]
    fixtures: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(config::default_config_path);

    if args.init_config {
        if config::init_config_file(&config_path)? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    // Initialize logging (to file, since the TUI owns stdout)
    agentdesk_core::logging::init()?;

    let settings = config::load_settings(&config_path);
    info!("Config: {}", config_path.display());

    // A CLI path wins over the one in the config file.
    let fixtures = match args.fixtures.or_else(|| settings.fixtures.file()) {
        Some(path) => {
            info!("Loading fixtures from {}", path.display());
            FixtureSet::load(&path)?
        }
        None => FixtureSet::builtin()?,
    };

    let result = agentdesk_tui::run(settings, fixtures).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("agentdesk exiting");
    Ok(result?)
}
