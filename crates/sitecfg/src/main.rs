//! sitecfg CLI - check and export static site build configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sitecfg_core::ExportFormat;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "sitecfg")]
#[command(about = "Check and export static site build configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (defaults to site.toml, site.json, site.yaml or site.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter site.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Load and validate the config
    Check,

    /// Print a summary of the assembled config
    Show,

    /// Render the config as the default export document
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Toml => ExportFormat::Toml,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
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
        Commands::Init { yes } => {
            let path = cli.config.unwrap_or_else(|| PathBuf::from("site.toml"));
            commands::init::run(&path, yes)?;
        }
        Commands::Check => {
            commands::check::run(cli.config)?;
        }
        Commands::Show => {
            commands::show::run(cli.config)?;
        }
        Commands::Export { format, output } => {
            commands::export::run(cli.config, format.into(), output)?;
        }
    }

    Ok(())
}
