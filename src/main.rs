//! Career Advisor - a terminal client for the career advisory service
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates; this file only wires configuration, logging and the client
//! together and hands control to the TUI.

use std::path::PathBuf;

use clap::Parser;

use cadvisor_app::config;
use cadvisor_app::AdvisorClient;
use cadvisor_core::prelude::*;

/// Career Advisor - structured career advice and a follow-up chat, in your terminal
#[derive(Parser, Debug)]
#[command(name = "cadvisor")]
#[command(about = "A terminal client for the Career & Skill Development Advisor", long_about = None)]
struct Args {
    /// Base URL of the advisory service (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to a config file (defaults to ~/.config/cadvisor/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    cadvisor_core::logging::init()?;

    // Settings precedence: CLI flag > config file > built-in default
    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(api_url) = args.api_url {
        settings.api.base_url = api_url;
    }
    info!("advisory service: {}", settings.api.base_url);

    let client = AdvisorClient::new(settings.api.base_url.clone());

    cadvisor_tui::run(settings, client).await?;
    Ok(())
}
