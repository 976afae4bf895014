//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::record_cmd;
use crate::storage;

#[derive(Parser)]
#[command(name = "addr")]
#[command(author, version, about = "Create and manage architecture decision records")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default is ~/.addr.yaml)
    #[arg(long, global = true, env = "ADDR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new record in the configured directory
    #[command(after_help = "Example:\n  addr new use postgres for storage")]
    New {
        /// Record title; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Use this number instead of the next free one
        #[arg(long, short = 'n')]
        number: Option<u32>,
    },

    /// List records in the configured directory
    List,

    /// Show the resolved configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("addr starting");

    let config = storage::Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(source) = &config.source {
        output.note(&format!("Using config file: {}", source.display()));
    }
    output.verbose_ctx(
        "config",
        &format!(
            "directory={}, number_width={}, date_format={:?}, template={:?}",
            config.directory.display(),
            config.number_width,
            config.date_format,
            config.template
        ),
    );

    match cli.command {
        Commands::New { title, number } => {
            record_cmd::new_record(&output, &config, &title.join(" "), number)?
        }
        Commands::List => record_cmd::list_records(&output, &config)?,
        Commands::Config => record_cmd::show_config(&output, &config),
    }

    output.verbose("Command completed successfully");
    Ok(())
}
