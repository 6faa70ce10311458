//! CLI definitions and command implementations for the chain registry.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chains::Error;
use chains::config::{Config, load_config};
use clap::{Parser, Subcommand};

#[cfg(feature = "telemetry")]
use crate::telemetry::Telemetry;

pub mod check;
pub mod init;
pub mod list;

/// Supported EVM chain registry — inspect and check chain ids.
#[derive(Debug, Parser)]
#[command(name = "chains")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "chains.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List the enabled supported chains.
    List {
        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CONFIG")]
        config: Option<PathBuf>,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Check whether a value names an enabled supported chain.
    ///
    /// VALUE is read as JSON; anything that is not valid JSON is treated as a
    /// string. Exits with status 1 when the chain is not supported.
    Check {
        /// Value to check, e.g. `1`, `10143.0` or `"1"`.
        value: String,

        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CONFIG")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Runs the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the command
    /// fails.
    pub fn run(self) -> Result<ExitCode, Error> {
        match self.command {
            Commands::Init { output, force } => {
                setup(None)?;
                init::run(&output, force)
            }
            Commands::List { config, json } => {
                let config = setup(config.as_deref())?;
                list::run(&config, json)
            }
            Commands::Check { value, config } => {
                let config = setup(config.as_deref())?;
                check::run(&value, &config)
            }
        }
    }
}

/// Loads the optional config file and installs logging from it.
fn setup(path: Option<&Path>) -> Result<Config, Error> {
    let config = path.map(load_config).transpose()?.unwrap_or_default();

    #[cfg(feature = "telemetry")]
    Telemetry::new()
        .with_log_level(config.log_level())
        .register();

    Ok(config)
}
