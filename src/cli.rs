//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Launch Dashboard - interactive launch records dashboard
#[derive(Parser, Debug)]
#[command(name = "launch-dashboard")]
#[command(version)]
#[command(about = "Serve an interactive launch records dashboard", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the dataset CSV path from the configuration
    #[arg(long, short = 'd', global = true)]
    pub dataset: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Load the dataset and print a summary
    Inspect,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
