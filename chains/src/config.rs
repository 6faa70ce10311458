//! Configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`Config`] — which supported chains an application enables, plus the
//!   fallback log level.
//! - [`load_config`] — Reads and parses a TOML configuration file.
//! - [`generate_default_config`] — Produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! log_level = "info"
//!
//! # Omit to enable every supported chain.
//! chains = ["eip155:1", "eip155:10143", 137, "sepolia"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::Error;
use crate::registry::SupportedChain;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default)]
    log_level: Option<String>,
    /// Enabled chains. `None` enables every supported chain.
    #[serde(default, deserialize_with = "deserialize_chains")]
    chains: Option<Vec<SupportedChain>>,
}

impl Config {
    /// Log filter directive from the file, if any.
    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// Whether `chain` is enabled by this configuration.
    #[must_use]
    pub fn is_enabled(&self, chain: SupportedChain) -> bool {
        self.chains
            .as_ref()
            .is_none_or(|chains| chains.contains(&chain))
    }

    /// Enabled chains in registry order.
    #[must_use]
    pub fn enabled_chains(&self) -> Vec<SupportedChain> {
        SupportedChain::ALL
            .into_iter()
            .filter(|chain| self.is_enabled(*chain))
            .collect()
    }
}

fn deserialize_chains<'de, D>(deserializer: D) -> Result<Option<Vec<SupportedChain>>, D::Error>
where
    D: Deserializer<'de>,
{
    let chains = Vec::<SupportedChain>::deserialize(deserializer)?;
    let mut seen = HashSet::with_capacity(chains.len());
    for chain in &chains {
        if !seen.insert(*chain) {
            return Err(serde::de::Error::custom(format!(
                "duplicate chain '{}' ({})",
                chain,
                chain.caip2()
            )));
        }
    }
    Ok(Some(chains))
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed, or if it
/// names a chain outside the supported set.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::Config(format!(
            "failed to resolve config path '{}': {e}",
            path.display()
        ))
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::Config(format!(
            "failed to read config file '{}': {e}",
            config_path.display()
        ))
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "failed to parse TOML config '{}': {e}",
            config_path.display()
        ))
    })?;
    #[cfg(feature = "telemetry")]
    tracing::debug!(
        path = %config_path.display(),
        enabled = config.enabled_chains().len(),
        "loaded config"
    );
    Ok(config)
}

/// Generate a default TOML configuration template.
///
/// Every supported chain is listed, so the template parses to the same
/// effective configuration as an empty file.
#[must_use]
pub fn generate_default_config() -> String {
    let mut config = String::from(
        r#"# Supported chain configuration

# Log filter used when RUST_LOG is not set.
log_level = "info"

# ── Enabled chains ───────────────────────────────────────────────────
# Entries may be a chain id, a CAIP-2 identifier ("eip155:<chain_id>")
# or a chain name. Remove the list to enable every supported chain.
chains = [
"#,
    );

    for chain in SupportedChain::ALL {
        let caip2 = format!("\"{}\",", chain.caip2());
        let note = if chain.is_local() { ", local" } else { "" };
        config.push_str(&format!("    {caip2:<20}# {chain}{note}\n"));
    }
    config.push_str("]\n");

    config
}
