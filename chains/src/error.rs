//! Unified error types for the chain registry.

use thiserror::Error;

/// Top-level error type for the chain registry and its CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Chain id is valid but not in the supported set.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(u64),

    /// Chain id was expected to be unsupported but is in the supported set.
    #[error("chain is supported: {0}")]
    Supported(u64),

    /// Chain id is not part of the upstream network universe.
    #[error("unknown network: {0}")]
    UnknownNetwork(u64),

    /// A chain reference (id, CAIP-2 string or name) could not be parsed.
    #[error("parse: {0}")]
    Parse(String),

    /// Configuration file could not be resolved, read, parsed, or written.
    #[error("config: {0}")]
    Config(String),

    /// JSON output could not be produced.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
