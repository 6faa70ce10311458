//! `chains check` command — run the membership predicate on a raw value.

use std::process::ExitCode;

use chains::config::Config;
use chains::{Error, SupportedChain, supported_chain};
use serde_json::Value;

/// Result of checking a value against the registry and the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Supported and enabled.
    Supported(SupportedChain),
    /// Supported, but left out of the config's `chains` list.
    Disabled(SupportedChain),
    /// Not a supported chain id.
    Unsupported,
}

/// Reads `raw` as JSON, falling back to a JSON string when it does not parse.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn evaluate(value: &Value, config: &Config) -> Outcome {
    match supported_chain(value) {
        Some(chain) if config.is_enabled(chain) => Outcome::Supported(chain),
        Some(chain) => Outcome::Disabled(chain),
        None => Outcome::Unsupported,
    }
}

/// Execute the `check` command.
///
/// Prints `supported` or `unsupported` and maps the answer to the exit code.
///
/// # Errors
///
/// Never fails; the `Result` keeps the command signature uniform.
#[allow(clippy::print_stdout, clippy::unnecessary_wraps)]
pub fn run(raw: &str, config: &Config) -> Result<ExitCode, Error> {
    let value = parse_value(raw);

    match evaluate(&value, config) {
        Outcome::Supported(chain) => {
            println!("supported: {chain} ({})", chain.caip2());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Disabled(chain) => {
            #[cfg(feature = "telemetry")]
            tracing::info!(%chain, "chain is supported but disabled by config");
            println!("unsupported: {raw} ({chain} is disabled)");
            Ok(ExitCode::FAILURE)
        }
        Outcome::Unsupported => {
            #[cfg(feature = "telemetry")]
            tracing::debug!(%value, "value is not a supported chain id");
            println!("unsupported: {raw}");
            Ok(ExitCode::FAILURE)
        }
    }
}
