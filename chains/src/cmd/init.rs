//! `chains init` command — write the default TOML configuration.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use chains::Error;
use chains::config::generate_default_config;

/// Fails when `output` exists and `force` is not set.
fn ensure_target(output: &Path, force: bool) -> Result<(), Error> {
    let exists = output.try_exists().map_err(|e| {
        Error::Config(format!("cannot inspect '{}': {e}", output.display()))
    })?;
    if exists && !force {
        return Err(Error::Config(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }
    Ok(())
}

/// Execute the `init` command.
///
/// # Errors
///
/// Returns an error if `output` already exists (without `--force`) or cannot
/// be written.
pub fn run(output: &Path, force: bool) -> Result<ExitCode, Error> {
    ensure_target(output, force)?;
    fs::write(output, generate_default_config())
        .map_err(|e| Error::Config(format!("failed to write '{}': {e}", output.display())))?;

    #[cfg(feature = "telemetry")]
    tracing::info!(path = %output.display(), force, "wrote default config");
    Ok(ExitCode::SUCCESS)
}
