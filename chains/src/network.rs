//! Network universe published by the Fusion swap SDK.
//!
//! [`Network`] mirrors the upstream `NetworkEnum`: the closed set of EVM chains
//! the SDK knows how to route orders on. It is an opaque, versioned input to
//! this crate. When the SDK adds or removes a network, this enum and the
//! registry in [`crate::registry`] have to be revisited by hand.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// CAIP-2 namespace of EVM chains.
pub const EIP155_NAMESPACE: &str = "eip155";

/// A textual chain reference, split into a numeric id or a bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChainReference<'a> {
    /// Decimal id, either bare or behind the `eip155:` namespace.
    Id(u64),
    /// Anything without a namespace that is not all digits.
    Name(&'a str),
}

/// Splits `raw` into a [`ChainReference`].
///
/// Ids must be ASCII digits only, so `+1` and `eip155:+1` are rejected.
pub(crate) fn parse_chain_reference(raw: &str) -> Result<ChainReference<'_>, Error> {
    let raw = raw.trim();
    let digits = match raw.split_once(':') {
        Some((namespace, _)) if namespace != EIP155_NAMESPACE => {
            return Err(Error::Parse(format!(
                "unexpected namespace '{namespace}' in '{raw}'"
            )));
        }
        Some((_, reference)) => reference,
        None if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => raw,
        None => return Ok(ChainReference::Name(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse(format!("invalid chain id '{digits}' in '{raw}'")));
    }
    digits
        .parse()
        .map(ChainReference::Id)
        .map_err(|e| Error::Parse(format!("invalid chain id '{digits}': {e}")))
}

/// An EVM network known to the upstream swap SDK, keyed by EIP-155 chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum Network {
    /// Ethereum mainnet.
    Ethereum = 1,
    /// Polygon PoS.
    Polygon = 137,
    /// zkSync Era.
    ZkSync = 324,
    /// BNB Smart Chain.
    Binance = 56,
    /// Arbitrum One.
    Arbitrum = 42_161,
    /// Avalanche C-Chain.
    Avalanche = 43_114,
    /// OP Mainnet.
    Optimism = 10,
    /// Fantom Opera.
    Fantom = 250,
    /// Gnosis Chain.
    Gnosis = 100,
    /// Base.
    Coinbase = 8_453,
    /// Linea.
    Linea = 59_144,
    /// Sonic.
    Sonic = 146,
    /// Unichain.
    Unichain = 130,
}

impl Network {
    /// Every network in the universe, in upstream declaration order.
    pub const ALL: [Self; 13] = [
        Self::Ethereum,
        Self::Polygon,
        Self::ZkSync,
        Self::Binance,
        Self::Arbitrum,
        Self::Avalanche,
        Self::Optimism,
        Self::Fantom,
        Self::Gnosis,
        Self::Coinbase,
        Self::Linea,
        Self::Sonic,
        Self::Unichain,
    ];

    /// Returns the EIP-155 chain id.
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        self as u64
    }

    /// Looks up a network by EIP-155 chain id.
    #[must_use]
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i].chain_id() == chain_id {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Lowercase network name as used by the SDK.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
            Self::ZkSync => "zksync",
            Self::Binance => "binance",
            Self::Arbitrum => "arbitrum",
            Self::Avalanche => "avalanche",
            Self::Optimism => "optimism",
            Self::Fantom => "fantom",
            Self::Gnosis => "gnosis",
            Self::Coinbase => "coinbase",
            Self::Linea => "linea",
            Self::Sonic => "sonic",
            Self::Unichain => "unichain",
        }
    }
}

impl TryFrom<u64> for Network {
    type Error = Error;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id).ok_or(Error::UnknownNetwork(chain_id))
    }
}

impl From<Network> for u64 {
    fn from(network: Network) -> Self {
        network.chain_id()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a decimal chain id, a CAIP-2 `eip155:<id>` identifier or a network
/// name (case-insensitive).
impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_chain_reference(s)? {
            ChainReference::Id(chain_id) => Self::try_from(chain_id),
            ChainReference::Name(name) => Self::ALL
                .into_iter()
                .find(|network| network.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| Error::Parse(format!("unknown network '{name}'"))),
        }
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.chain_id())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NetworkVisitor;

        impl Visitor<'_> for NetworkVisitor {
            type Value = Network;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a known chain id, CAIP-2 identifier or network name")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Network::try_from(v).map_err(E::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let chain_id = u64::try_from(v)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))?;
                self.visit_u64(chain_id)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(NetworkVisitor)
    }
}
