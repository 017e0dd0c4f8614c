//! CLI interface module

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    DatasetError(String),
    CommandError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::DatasetError(msg) => format!("Dataset error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::DatasetError(msg) => {
                format!("{} {}", "Dataset error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::DashboardError> for CliError {
    fn from(err: crate::errors::DashboardError) -> Self {
        CliError::DatasetError(err.to_string())
    }
}

/// Run a non-server command
pub fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Inspect => {
            let config = crate::config::get_config();
            commands::inspect_dataset(&config.dataset.path, &config.dashboard.sites)
        }
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => commands::config_generate(output_path, force),
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by server mode".to_string(),
        )),
    }
}
