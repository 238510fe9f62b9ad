//! Chain descriptors and read-only RPC provider construction.

use std::fmt;
use std::str::FromStr;

use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use serde::Serialize;
use url::Url;

use crate::error::Error;

/// Native gas currency of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    /// Display name.
    pub name: &'static str,
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Precision.
    pub decimals: u8,
}

/// Block explorer front end of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockExplorer {
    /// Display name.
    pub name: &'static str,
    /// Base URL.
    pub url: &'static str,
}

/// Static description of an EVM chain a handler can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    /// EIP-155 chain id.
    pub id: u64,
    /// Display name.
    pub name: &'static str,
    /// Native gas currency.
    pub native_currency: NativeCurrency,
    /// Default public JSON-RPC endpoint.
    pub rpc_url: &'static str,
    /// Default block explorer.
    pub block_explorer: BlockExplorer,
}

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

/// Base mainnet.
pub const BASE: ChainDescriptor = ChainDescriptor {
    id: 8453,
    name: "Base",
    native_currency: ETHER,
    rpc_url: "https://mainnet.base.org",
    block_explorer: BlockExplorer {
        name: "Basescan",
        url: "https://basescan.org",
    },
};

/// Base Sepolia testnet.
pub const BASE_SEPOLIA: ChainDescriptor = ChainDescriptor {
    id: 84532,
    name: "Base Sepolia",
    native_currency: NativeCurrency {
        name: "Sepolia Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_url: "https://sepolia.base.org",
    block_explorer: BlockExplorer {
        name: "Basescan",
        url: "https://sepolia.basescan.org",
    },
};

/// Network keys that have a chain binding.
///
/// Every key in [`USDC_NETWORKS`](super::USDC_NETWORKS) has a variant here, so
/// a key that passes the registry lookup always resolves to a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownNetwork {
    /// `base-sepolia`
    BaseSepolia,
    /// `base-mainnet`
    BaseMainnet,
    /// `eth-sepolia`
    EthSepolia,
}

impl KnownNetwork {
    /// Registry key of this network.
    #[must_use]
    pub const fn network_id(self) -> &'static str {
        match self {
            Self::BaseSepolia => "base-sepolia",
            Self::BaseMainnet => "base-mainnet",
            Self::EthSepolia => "eth-sepolia",
        }
    }

    /// Chain the network's RPC client is bound to.
    #[must_use]
    pub const fn chain(self) -> ChainDescriptor {
        match self {
            Self::BaseMainnet => BASE,
            Self::BaseSepolia => BASE_SEPOLIA,
            Self::EthSepolia => ChainDescriptor {
                id: 11_155_111,
                name: "Ethereum Sepolia",
                native_currency: NativeCurrency {
                    name: "Sepolia ETH",
                    symbol: "ETH",
                    decimals: 18,
                },
                rpc_url: "https://ethereum-sepolia.publicnode.com",
                block_explorer: BlockExplorer {
                    name: "Etherscan",
                    url: "https://sepolia.etherscan.io",
                },
            },
        }
    }
}

impl FromStr for KnownNetwork {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base-sepolia" => Ok(Self::BaseSepolia),
            "base-mainnet" => Ok(Self::BaseMainnet),
            "eth-sepolia" => Ok(Self::EthSepolia),
            other => Err(Error::NetworkNotFound(other.to_owned())),
        }
    }
}

impl fmt::Display for KnownNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.network_id())
    }
}

/// Build a read-only HTTP provider for `network_id` targeting `rpc_url`.
///
/// No request is made here; the transport connects on first use. Transaction
/// fillers are disabled since the provider only serves `eth_call`.
///
/// # Errors
///
/// Returns [`Error::InvalidRpcUrl`] if `rpc_url` does not parse.
pub fn build_provider(network_id: &str, rpc_url: &str) -> Result<DynProvider, Error> {
    let url = Url::parse(rpc_url).map_err(|e| Error::InvalidRpcUrl {
        network: network_id.to_owned(),
        reason: e.to_string(),
    })?;
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_http(url);
    Ok(provider.erased())
}
