//! Supported chain registry CLI
//!
//! Inspects the set of EVM chains the Fusion swap client supports.
//!
//! ```sh
//! chains init                 # Generate default chains.toml
//! chains list --json          # Print enabled supported chains
//! chains check 10143          # Exit 0 if supported, 1 otherwise
//! ```

mod cmd;
#[cfg(feature = "telemetry")]
mod telemetry;

use std::process::ExitCode;

use clap::Parser;
use cmd::Cli;

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
