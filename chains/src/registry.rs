//! Supported-chain registry.
//!
//! The client supports a fixed subset of the upstream [`Network`] universe plus
//! two networks the universe does not carry ([`LocalNetwork`]). This module
//! exposes that subset three ways:
//!
//! - [`SUPPORTED_CHAINS`] — the ordered list of supported chain ids.
//! - [`SupportedChain`] — a closed enum of exactly those chains, for use in
//!   type annotations.
//! - [`is_supported_chain`] — a total predicate over untyped JSON values, with
//!   [`supported_chain`] as its narrowing counterpart.
//!
//! [`UnsupportedChain`] names the universe members left out. The supported
//! part of the universe is derived by removing those from [`Network::ALL`],
//! and a compile-time check asserts the derivation agrees with
//! [`SupportedChain::ALL`]. Local additions are never part of the exclusion
//! step; they are supported unconditionally.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Error;
use crate::network::{ChainReference, EIP155_NAMESPACE, Network, parse_chain_reference};

/// Networks the client supports that are absent from the [`Network`] universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum LocalNetwork {
    /// Ethereum Sepolia testnet.
    Sepolia = 11_155_111,
    /// Monad testnet.
    Monad = 10_143,
}

impl LocalNetwork {
    /// Both local additions, in registry order.
    pub const ALL: [Self; 2] = [Self::Sepolia, Self::Monad];

    /// Returns the EIP-155 chain id.
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        self as u64
    }

    /// Looks up a local addition by EIP-155 chain id.
    #[must_use]
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            11_155_111 => Some(Self::Sepolia),
            10_143 => Some(Self::Monad),
            _ => None,
        }
    }

    /// Lowercase network name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sepolia => "sepolia",
            Self::Monad => "monad",
        }
    }
}

// Declares `SupportedChain` and its `ALL` table from one list, so a variant
// cannot exist without a place in the registry order.
macro_rules! supported_chains {
    ($($(#[$meta:meta])* $variant:ident = $chain_id:expr, $name:literal;)+) => {
        /// A chain the client supports.
        ///
        /// Discriminants are the EIP-155 chain ids, taken from [`Network`] and
        /// [`LocalNetwork`] so the two can never disagree.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u64)]
        pub enum SupportedChain {
            $($(#[$meta])* $variant = $chain_id,)+
        }

        impl SupportedChain {
            const COUNT: usize = [$(SupportedChain::$variant),+].len();

            /// Every supported chain in registry order: twelve universe
            /// members followed by the local additions. Append-only.
            pub const ALL: [SupportedChain; SupportedChain::COUNT] = [$(SupportedChain::$variant),+];

            /// Lowercase chain name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

supported_chains! {
    /// Ethereum mainnet.
    Ethereum = Network::Ethereum as u64, "ethereum";
    /// Polygon PoS.
    Polygon = Network::Polygon as u64, "polygon";
    /// BNB Smart Chain.
    Binance = Network::Binance as u64, "binance";
    /// OP Mainnet.
    Optimism = Network::Optimism as u64, "optimism";
    /// Arbitrum One.
    Arbitrum = Network::Arbitrum as u64, "arbitrum";
    /// Avalanche C-Chain.
    Avalanche = Network::Avalanche as u64, "avalanche";
    /// Gnosis Chain.
    Gnosis = Network::Gnosis as u64, "gnosis";
    /// Base.
    Coinbase = Network::Coinbase as u64, "coinbase";
    /// zkSync Era.
    ZkSync = Network::ZkSync as u64, "zksync";
    /// Linea.
    Linea = Network::Linea as u64, "linea";
    /// Sonic.
    Sonic = Network::Sonic as u64, "sonic";
    /// Unichain.
    Unichain = Network::Unichain as u64, "unichain";
    /// Ethereum Sepolia testnet.
    Sepolia = LocalNetwork::Sepolia as u64, "sepolia";
    /// Monad testnet.
    Monad = LocalNetwork::Monad as u64, "monad";
}

impl SupportedChain {
    /// Returns the EIP-155 chain id.
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        self as u64
    }

    /// Looks up a supported chain by EIP-155 chain id.
    ///
    /// Linear scan over [`Self::ALL`].
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

    /// The universe member this chain corresponds to, if any.
    #[must_use]
    pub const fn network(self) -> Option<Network> {
        Network::from_chain_id(self.chain_id())
    }

    /// The local addition this chain corresponds to, if any.
    #[must_use]
    pub const fn local(self) -> Option<LocalNetwork> {
        LocalNetwork::from_chain_id(self.chain_id())
    }

    /// Whether the chain is one of the [`LocalNetwork`] additions.
    #[must_use]
    pub const fn is_local(self) -> bool {
        self.local().is_some()
    }

    /// Whether the chain is a test network.
    #[must_use]
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Sepolia | Self::Monad)
    }

    /// CAIP-2 identifier, e.g. `eip155:1`.
    #[must_use]
    pub fn caip2(self) -> String {
        format!("{EIP155_NAMESPACE}:{}", self.chain_id())
    }
}

/// Supported chain ids in registry order.
pub const SUPPORTED_CHAINS: [u64; SupportedChain::ALL.len()] = {
    let mut ids = [0; SupportedChain::ALL.len()];
    let mut i = 0;
    while i < ids.len() {
        ids[i] = SupportedChain::ALL[i].chain_id();
        i += 1;
    }
    ids
};

/// A universe network the client does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedChain(Network);

impl UnsupportedChain {
    /// Every unsupported universe member, in universe order.
    pub const ALL: &'static [Self] = &UNSUPPORTED;

    /// Wraps `network` if it is not supported.
    #[must_use]
    pub const fn new(network: Network) -> Option<Self> {
        if is_supported_chain_id(network.chain_id()) {
            None
        } else {
            Some(Self(network))
        }
    }

    /// The underlying universe member.
    #[must_use]
    pub const fn network(self) -> Network {
        self.0
    }

    /// Returns the EIP-155 chain id.
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        self.0.chain_id()
    }
}

impl TryFrom<u64> for LocalNetwork {
    type Error = Error;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id).ok_or(Error::UnknownNetwork(chain_id))
    }
}

impl TryFrom<u64> for UnsupportedChain {
    type Error = Error;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        let network = Network::try_from(chain_id)?;
        Self::new(network).ok_or(Error::Supported(chain_id))
    }
}

impl fmt::Display for UnsupportedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.0.chain_id())
    }
}

const fn contains(ids: &[u64], chain_id: u64) -> bool {
    let mut i = 0;
    while i < ids.len() {
        if ids[i] == chain_id {
            return true;
        }
        i += 1;
    }
    false
}

const UNSUPPORTED_LEN: usize = {
    let mut len = 0;
    let mut i = 0;
    while i < Network::ALL.len() {
        if !contains(&SUPPORTED_CHAINS, Network::ALL[i].chain_id()) {
            len += 1;
        }
        i += 1;
    }
    len
};

/// Universe minus the supported set.
const UNSUPPORTED: [UnsupportedChain; UNSUPPORTED_LEN] = {
    let mut out = [UnsupportedChain(Network::Fantom); UNSUPPORTED_LEN];
    let mut len = 0;
    let mut i = 0;
    while i < Network::ALL.len() {
        if !contains(&SUPPORTED_CHAINS, Network::ALL[i].chain_id()) {
            out[len] = UnsupportedChain(Network::ALL[i]);
            len += 1;
        }
        i += 1;
    }
    out
};

const fn is_unsupported(network: Network) -> bool {
    let mut i = 0;
    while i < UNSUPPORTED.len() {
        if UNSUPPORTED[i].chain_id() == network.chain_id() {
            return true;
        }
        i += 1;
    }
    false
}

/// Universe minus the unsupported set.
const SUPPORTED_UNIVERSE: [Network; Network::ALL.len() - UNSUPPORTED_LEN] = {
    let mut out = [Network::Ethereum; Network::ALL.len() - UNSUPPORTED_LEN];
    let mut len = 0;
    let mut i = 0;
    while i < Network::ALL.len() {
        if !is_unsupported(Network::ALL[i]) {
            out[len] = Network::ALL[i];
            len += 1;
        }
        i += 1;
    }
    out
};

// The literal list, the enum and the double-exclusion derivation must agree.
const _: () = {
    let ids = &SUPPORTED_CHAINS;

    let mut i = 0;
    while i < ids.len() {
        let mut j = i + 1;
        while j < ids.len() {
            assert!(ids[i] != ids[j], "duplicate supported chain id");
            j += 1;
        }
        i += 1;
    }

    let mut k = 0;
    while k < SUPPORTED_UNIVERSE.len() {
        assert!(
            contains(ids, SUPPORTED_UNIVERSE[k].chain_id()),
            "universe member missing from the supported list"
        );
        k += 1;
    }

    let mut l = 0;
    while l < LocalNetwork::ALL.len() {
        let chain_id = LocalNetwork::ALL[l].chain_id();
        assert!(contains(ids, chain_id), "local network missing from the supported list");
        assert!(
            Network::from_chain_id(chain_id).is_none(),
            "local network collides with the universe"
        );
        l += 1;
    }

    assert!(
        SUPPORTED_UNIVERSE.len() + LocalNetwork::ALL.len() == ids.len(),
        "supported list has entries outside the universe and local additions"
    );
};

/// Whether `chain_id` is in [`SUPPORTED_CHAINS`].
#[must_use]
pub const fn is_supported_chain_id(chain_id: u64) -> bool {
    contains(&SUPPORTED_CHAINS, chain_id)
}

/// Whether an untyped value names a supported chain.
///
/// Only JSON numbers can match. Integral floats are accepted (`1.0` is chain
/// `1`); strings, `null`, booleans, arrays and objects always yield `false`.
/// Never fails.
///
/// ```
/// use chains::is_supported_chain;
/// use serde_json::json;
///
/// assert!(is_supported_chain(&json!(1)));
/// assert!(is_supported_chain(&json!(10143)));
/// assert!(!is_supported_chain(&json!(1337)));
/// assert!(!is_supported_chain(&json!("1")));
/// ```
#[must_use]
pub fn is_supported_chain(value: &Value) -> bool {
    supported_chain(value).is_some()
}

/// Narrows an untyped value to a [`SupportedChain`].
///
/// Same acceptance rules as [`is_supported_chain`].
#[must_use]
pub fn supported_chain(value: &Value) -> Option<SupportedChain> {
    let Value::Number(number) = value else {
        return None;
    };
    let chain_id = number
        .as_u64()
        .or_else(|| number.as_f64().and_then(integral_chain_id))?;
    SupportedChain::from_chain_id(chain_id)
}

#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn integral_chain_id(value: f64) -> Option<u64> {
    (value >= 0.0 && value.trunc() == value && value < u64::MAX as f64).then_some(value as u64)
}

impl TryFrom<u64> for SupportedChain {
    type Error = Error;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id).ok_or_else(|| {
            #[cfg(feature = "telemetry")]
            tracing::debug!(chain_id, "chain id is not in the supported set");
            Error::UnsupportedChain(chain_id)
        })
    }
}

impl TryFrom<Network> for SupportedChain {
    type Error = UnsupportedChain;

    fn try_from(network: Network) -> Result<Self, Self::Error> {
        Self::from_chain_id(network.chain_id()).ok_or(UnsupportedChain(network))
    }
}

impl From<LocalNetwork> for SupportedChain {
    fn from(local: LocalNetwork) -> Self {
        match local {
            LocalNetwork::Sepolia => Self::Sepolia,
            LocalNetwork::Monad => Self::Monad,
        }
    }
}

impl From<SupportedChain> for u64 {
    fn from(chain: SupportedChain) -> Self {
        chain.chain_id()
    }
}

/// Parses a decimal chain id, a CAIP-2 `eip155:<id>` identifier or a chain
/// name (case-insensitive).
impl FromStr for SupportedChain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_chain_reference(s)? {
            ChainReference::Id(chain_id) => Self::try_from(chain_id),
            ChainReference::Name(name) => Self::ALL
                .into_iter()
                .find(|chain| chain.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| Error::Parse(format!("unknown chain '{name}'"))),
        }
    }
}

impl fmt::Display for SupportedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SupportedChain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.chain_id())
    }
}

impl<'de> Deserialize<'de> for SupportedChain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SupportedChainVisitor;

        impl Visitor<'_> for SupportedChainVisitor {
            type Value = SupportedChain;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a supported chain id, CAIP-2 identifier or chain name")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                SupportedChain::try_from(v).map_err(E::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let chain_id =
                    u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))?;
                self.visit_u64(chain_id)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SupportedChainVisitor)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_every_listed_chain_is_supported() {
        for chain_id in SUPPORTED_CHAINS {
            assert!(is_supported_chain(&json!(chain_id)), "{chain_id}");
            assert!(is_supported_chain_id(chain_id));
        }
    }

    #[test]
    fn test_known_scenarios() {
        assert!(is_supported_chain(&json!(1)));
        assert!(is_supported_chain(&json!(11_155_111)));
        assert!(is_supported_chain(&json!(10_143)));
        assert!(!is_supported_chain(&json!(1337)));
        assert!(!is_supported_chain(&json!("1")));
    }

    #[test]
    fn test_unlisted_integers_are_rejected() {
        assert!(!is_supported_chain(&json!(999_999)));
        assert!(!is_supported_chain(&json!(0)));
        assert!(!is_supported_chain(&json!(-1)));
        assert!(!is_supported_chain(&json!(Network::Fantom.chain_id())));
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        assert!(!is_supported_chain(&Value::Null));
        assert!(!is_supported_chain(&json!("ethereum")));
        assert!(!is_supported_chain(&json!(true)));
        assert!(!is_supported_chain(&json!({})));
        assert!(!is_supported_chain(&json!([])));
        assert!(!is_supported_chain(&json!({ "chainId": 1 })));
        assert!(!is_supported_chain(&json!([1])));
    }

    #[test]
    fn test_float_inputs() {
        assert!(is_supported_chain(&json!(1.0)));
        assert!(!is_supported_chain(&json!(1.5)));
        assert!(!is_supported_chain(&json!(-1.0)));
        assert_eq!(supported_chain(&json!(137.0)), Some(SupportedChain::Polygon));
    }

    #[test]
    fn test_narrowing_returns_the_matching_variant() {
        assert_eq!(supported_chain(&json!(8453)), Some(SupportedChain::Coinbase));
        assert_eq!(supported_chain(&json!(10_143)), Some(SupportedChain::Monad));
        assert_eq!(supported_chain(&json!(250)), None);
    }

    #[test]
    fn test_supported_set_has_fourteen_unique_entries() {
        assert_eq!(SUPPORTED_CHAINS.len(), 14);
        let unique: HashSet<_> = SUPPORTED_CHAINS.iter().collect();
        assert_eq!(unique.len(), 14);
    }

    #[test]
    fn test_local_additions_listed_once() {
        for local in LocalNetwork::ALL {
            let count = SUPPORTED_CHAINS
                .iter()
                .filter(|&&id| id == local.chain_id())
                .count();
            assert_eq!(count, 1, "{}", local.name());
            assert!(Network::from_chain_id(local.chain_id()).is_none());
        }
        assert_eq!(&SUPPORTED_CHAINS[12..], &[11_155_111, 10_143]);
    }

    #[test]
    fn test_registry_order() {
        assert_eq!(
            SUPPORTED_CHAINS,
            [
                1, 137, 56, 10, 42_161, 43_114, 100, 8_453, 324, 59_144, 146, 130, 11_155_111,
                10_143
            ]
        );
    }

    #[test]
    fn test_unsupported_is_universe_minus_supported() {
        assert_eq!(
            UnsupportedChain::ALL,
            &[UnsupportedChain::new(Network::Fantom).expect("fantom is unsupported")]
        );
        assert_eq!(UnsupportedChain::new(Network::Ethereum), None);
        assert_eq!(SUPPORTED_UNIVERSE.len(), 12);
        for network in SUPPORTED_UNIVERSE {
            let chain = SupportedChain::try_from(network).expect("derived member is supported");
            assert_eq!(chain.network(), Some(network));
            assert!(!chain.is_local());
        }
    }

    #[test]
    fn test_network_narrowing() {
        assert_eq!(
            SupportedChain::try_from(Network::Linea),
            Ok(SupportedChain::Linea)
        );
        let err = SupportedChain::try_from(Network::Fantom).unwrap_err();
        assert_eq!(err.network(), Network::Fantom);
        assert_eq!(err.to_string(), "fantom (250)");
    }

    #[test]
    fn test_local_chains_have_no_universe_counterpart() {
        assert_eq!(SupportedChain::from(LocalNetwork::Sepolia), SupportedChain::Sepolia);
        assert_eq!(SupportedChain::Monad.local(), Some(LocalNetwork::Monad));
        assert_eq!(SupportedChain::Monad.network(), None);
        assert!(SupportedChain::Sepolia.is_testnet());
        assert!(!SupportedChain::Ethereum.is_testnet());
    }

    #[test]
    fn test_try_from_u64() {
        assert_eq!(SupportedChain::try_from(42_161_u64).ok(), Some(SupportedChain::Arbitrum));
        assert!(matches!(
            SupportedChain::try_from(1337_u64),
            Err(Error::UnsupportedChain(1337))
        ));
    }

    #[test]
    fn test_parse_accepts_ids_caip2_and_names() {
        assert_eq!("1".parse::<SupportedChain>().ok(), Some(SupportedChain::Ethereum));
        assert_eq!(
            "eip155:10143".parse::<SupportedChain>().ok(),
            Some(SupportedChain::Monad)
        );
        assert_eq!(
            " Sepolia ".parse::<SupportedChain>().ok(),
            Some(SupportedChain::Sepolia)
        );
        assert_eq!(
            "zksync".parse::<SupportedChain>().ok(),
            Some(SupportedChain::ZkSync)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "eip155:250".parse::<SupportedChain>(),
            Err(Error::UnsupportedChain(250))
        ));
        assert!(matches!(
            "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1".parse::<SupportedChain>(),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            "eip155:abc".parse::<SupportedChain>(),
            Err(Error::Parse(_))
        ));
        assert!(matches!("".parse::<SupportedChain>(), Err(Error::Parse(_))));
        assert!(matches!(
            "fantom".parse::<SupportedChain>(),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_signed_references() {
        assert!(matches!(
            "eip155:+1".parse::<SupportedChain>(),
            Err(Error::Parse(_))
        ));
        assert!(matches!("+1".parse::<SupportedChain>(), Err(Error::Parse(_))));
        assert!(serde_json::from_value::<SupportedChain>(json!("eip155:+1")).is_err());
    }

    #[test]
    fn test_local_network_try_from() {
        assert_eq!(
            LocalNetwork::try_from(11_155_111_u64).ok(),
            Some(LocalNetwork::Sepolia)
        );
        assert_eq!(LocalNetwork::try_from(10_143_u64).ok(), Some(LocalNetwork::Monad));
        assert!(matches!(
            LocalNetwork::try_from(1_u64),
            Err(Error::UnknownNetwork(1))
        ));
        assert!(matches!(
            LocalNetwork::try_from(250_u64),
            Err(Error::UnknownNetwork(250))
        ));
    }

    #[test]
    fn test_unsupported_chain_try_from() {
        let fantom = UnsupportedChain::try_from(250_u64).expect("fantom is unsupported");
        assert_eq!(fantom.network(), Network::Fantom);
        assert!(matches!(
            UnsupportedChain::try_from(1_u64),
            Err(Error::Supported(1))
        ));
        assert!(matches!(
            UnsupportedChain::try_from(11_155_111_u64),
            Err(Error::UnknownNetwork(11_155_111))
        ));
    }

    #[test]
    fn test_all_lists_each_variant_once_with_its_name() {
        let names: HashSet<_> = SupportedChain::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), SupportedChain::ALL.len());
        for chain in SupportedChain::ALL {
            assert_eq!(chain.name().parse::<SupportedChain>().ok(), Some(chain));
        }
    }

    #[test]
    fn test_caip2_and_display() {
        assert_eq!(SupportedChain::Coinbase.caip2(), "eip155:8453");
        assert_eq!(SupportedChain::Coinbase.to_string(), "coinbase");
    }

    #[test]
    fn test_serde_uses_numeric_ids() {
        assert_eq!(
            serde_json::to_value(SupportedChain::Sonic).expect("serialize"),
            json!(146)
        );
        let chains: Vec<SupportedChain> =
            serde_json::from_value(json!([1, "eip155:130", "linea"])).expect("deserialize");
        assert_eq!(
            chains,
            [
                SupportedChain::Ethereum,
                SupportedChain::Unichain,
                SupportedChain::Linea
            ]
        );
        let err = serde_json::from_value::<SupportedChain>(json!(250)).unwrap_err();
        assert!(err.to_string().contains("unsupported chain: 250"));
        assert!(serde_json::from_value::<SupportedChain>(json!(null)).is_err());
    }
}
