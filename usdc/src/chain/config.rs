//! USDC deployment table and the keyed [`NetworkRegistry`] built from it.

use std::collections::HashMap;
use std::sync::LazyLock;

use alloy_primitives::{Address, U64, address};
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Token precision shared by every USDC deployment in the table.
pub const USDC_DECIMALS: u8 = 6;

/// On-chain configuration of one USDC deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// ERC-20 contract address.
    pub token_address: Address,
    /// EIP-155 chain id. Serialised as a `0x`-prefixed hex quantity.
    #[serde(serialize_with = "serialize_hex_quantity")]
    pub chain_id: u64,
    /// Token precision.
    pub decimals: u8,
    /// Human-readable label.
    pub network_name: &'static str,
    /// Stable lookup key.
    pub network_id: &'static str,
}

impl NetworkConfig {
    /// Chain id in the hex quantity form wallets expect.
    #[must_use]
    pub fn chain_id_hex(&self) -> U64 {
        U64::from(self.chain_id)
    }
}

fn serialize_hex_quantity<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    U64::from(*value).serialize(serializer)
}

/// Known USDC deployments, in listing order.
pub const USDC_NETWORKS: [NetworkConfig; 3] = [
    NetworkConfig {
        token_address: address!("036CbD53842c5426634e7929541eC2318f3dCF7e"),
        chain_id: 84532,
        decimals: USDC_DECIMALS,
        network_name: "Base Sepolia",
        network_id: "base-sepolia",
    },
    NetworkConfig {
        token_address: address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        chain_id: 8453,
        decimals: USDC_DECIMALS,
        network_name: "Base Mainnet",
        network_id: "base-mainnet",
    },
    // Test token deployment, not Circle's canonical Sepolia USDC.
    NetworkConfig {
        token_address: address!("82653402f5e59968993177BF1BC1029A1802dac8"),
        chain_id: 11_155_111,
        decimals: USDC_DECIMALS,
        network_name: "Ethereum Sepolia",
        network_id: "eth-sepolia",
    },
];

static USDC_REGISTRY: LazyLock<NetworkRegistry> = LazyLock::new(|| {
    NetworkRegistry::new(USDC_NETWORKS).expect("USDC deployment table has unique network ids")
});

/// Immutable mapping from network key to [`NetworkConfig`].
///
/// Entries keep their insertion order for listing; lookups go through a hash
/// index. Keys are unique, so a lookup has exactly one possible answer.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    entries: Vec<NetworkConfig>,
    index: HashMap<&'static str, usize>,
}

impl NetworkRegistry {
    /// Build a registry from `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNetwork`] if two entries share a network key.
    pub fn new(entries: impl IntoIterator<Item = NetworkConfig>) -> Result<Self, Error> {
        let entries: Vec<NetworkConfig> = entries.into_iter().collect();
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.network_id, position).is_some() {
                return Err(Error::DuplicateNetwork(entry.network_id.to_owned()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The process-wide registry of [`USDC_NETWORKS`].
    #[must_use]
    pub fn usdc() -> &'static Self {
        &USDC_REGISTRY
    }

    /// Resolve `network_id` to its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NetworkNotFound`] if no entry has that key.
    pub fn get(&self, network_id: &str) -> Result<&NetworkConfig, Error> {
        self.index
            .get(network_id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| Error::NetworkNotFound(network_id.to_owned()))
    }

    /// Whether `network_id` has an entry.
    #[must_use]
    pub fn contains(&self, network_id: &str) -> bool {
        self.index.contains_key(network_id)
    }

    /// Entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkConfig> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_resolves_to_itself() {
        let registry = NetworkRegistry::usdc();
        for entry in &USDC_NETWORKS {
            let found = registry.get(entry.network_id).expect("entry present");
            assert_eq!(found.network_id, entry.network_id);
            assert_eq!(found, entry);
        }
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let err = NetworkRegistry::usdc().get("polygon-mainnet").unwrap_err();
        assert!(matches!(err, Error::NetworkNotFound(ref key) if key == "polygon-mainnet"));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let registry = NetworkRegistry::usdc();
        assert!(registry.get("Base-Sepolia").is_err());
        assert!(registry.get(" base-sepolia").is_err());
        assert!(registry.get("").is_err());
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let mut entries = USDC_NETWORKS.to_vec();
        entries.push(NetworkConfig {
            network_name: "Shadow Base Sepolia",
            ..USDC_NETWORKS[0]
        });
        let err = NetworkRegistry::new(entries).unwrap_err();
        assert!(matches!(err, Error::DuplicateNetwork(ref key) if key == "base-sepolia"));
    }

    #[test]
    fn test_iteration_keeps_table_order() {
        let ids: Vec<_> = NetworkRegistry::usdc().iter().map(|n| n.network_id).collect();
        assert_eq!(ids, ["base-sepolia", "base-mainnet", "eth-sepolia"]);
    }

    #[test]
    fn test_all_deployments_use_six_decimals() {
        assert!(USDC_NETWORKS.iter().all(|n| n.decimals == 6));
    }

    #[test]
    fn test_chain_id_serialises_as_hex() {
        let json = serde_json::to_value(USDC_NETWORKS[0]).unwrap();
        assert_eq!(json["chainId"], "0x14a34");
        assert_eq!(json["networkId"], "base-sepolia");
        assert_eq!(json["decimals"], 6);
        assert!(
            json["tokenAddress"]
                .as_str()
                .unwrap()
                .eq_ignore_ascii_case("0x036CbD53842c5426634e7929541eC2318f3dCF7e")
        );
    }
}
