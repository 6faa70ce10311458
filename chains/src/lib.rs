//! Supported EVM chains for the Fusion swap client.
//!
//! The upstream swap SDK publishes a universe of networks ([`Network`]). The
//! client supports twelve of them plus two networks the SDK does not list
//! ([`LocalNetwork`]: Sepolia and Monad testnet). This crate is the single
//! source of truth for that set:
//!
//! - [`SUPPORTED_CHAINS`] — supported chain ids, in registry order.
//! - [`SupportedChain`] — the supported set as a closed type.
//! - [`UnsupportedChain`] — universe members left out.
//! - [`is_supported_chain`] — total membership check for untyped values.
//!
//! ```
//! use chains::{SupportedChain, is_supported_chain, supported_chain};
//! use serde_json::json;
//!
//! let value = json!(11155111);
//! assert!(is_supported_chain(&value));
//! assert_eq!(supported_chain(&value), Some(SupportedChain::Sepolia));
//! assert!(!is_supported_chain(&json!(null)));
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod registry;

pub use self::error::{Error, Result};
pub use self::network::{EIP155_NAMESPACE, Network};
pub use self::registry::{
    LocalNetwork, SUPPORTED_CHAINS, SupportedChain, UnsupportedChain,
    is_supported_chain, is_supported_chain_id, supported_chain,
};
