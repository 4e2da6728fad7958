//! Widgetry CLI - assembles platform widget markup.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "widgetry")]
#[command(about = "Assemble nested widget markup for a mobile platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to widgetry.toml config file
    #[arg(short, long, default_value = "widgetry.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the widget markup for a platform
    Render {
        /// Platform name, case-insensitive (defaults to config)
        platform: Option<String>,

        /// Print a JSON object instead of bare markup
        #[arg(long)]
        json: bool,
    },

    /// List recognized platforms
    Platforms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Render { platform, json } => {
            commands::render::run(&cli.config, platform, json)?;
        }
        Commands::Platforms => {
            commands::platforms::run()?;
        }
    }

    Ok(())
}
