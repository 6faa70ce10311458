//! `chains list` command — print the enabled supported chains.

use std::process::ExitCode;

use chains::config::Config;
use chains::{Error, SupportedChain};
use serde::Serialize;

/// One row of `chains list` output.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct ChainEntry {
    chain_id: u64,
    caip2: String,
    name: &'static str,
    local: bool,
    testnet: bool,
}

impl From<SupportedChain> for ChainEntry {
    fn from(chain: SupportedChain) -> Self {
        Self {
            chain_id: chain.chain_id(),
            caip2: chain.caip2(),
            name: chain.name(),
            local: chain.is_local(),
            testnet: chain.is_testnet(),
        }
    }
}

impl ChainEntry {
    fn flags(&self) -> String {
        let mut flags = Vec::with_capacity(2);
        if self.local {
            flags.push("local");
        }
        if self.testnet {
            flags.push("testnet");
        }
        flags.join(",")
    }
}

/// Rows for every chain enabled by `config`, in registry order.
fn entries(config: &Config) -> Vec<ChainEntry> {
    config
        .enabled_chains()
        .into_iter()
        .map(ChainEntry::from)
        .collect()
}

fn render_table(entries: &[ChainEntry]) -> String {
    let mut out = format!("{:>9}  {:<16}  {:<10}  FLAGS\n", "CHAIN ID", "CAIP-2", "NAME");
    for entry in entries {
        out.push_str(&format!(
            "{:>9}  {:<16}  {:<10}  {}\n",
            entry.chain_id,
            entry.caip2,
            entry.name,
            entry.flags()
        ));
    }
    out
}

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialised.
#[allow(clippy::print_stdout)]
pub fn run(config: &Config, json: bool) -> Result<ExitCode, Error> {
    let entries = entries(config);
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_table(&entries));
    }
    Ok(ExitCode::SUCCESS)
}
