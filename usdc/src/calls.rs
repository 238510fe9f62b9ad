//! Wallet-call payload produced for an external wallet to review and sign.
//!
//! The JSON shape follows the XMTP `walletSendCalls` content type:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "from": "0x…",
//!   "chainId": "0x14a34",
//!   "calls": [
//!     {
//!       "to": "0x…",
//!       "data": "0xa9059cbb…",
//!       "metadata": {
//!         "description": "Transfer 1 USDC on Base Sepolia",
//!         "transactionType": "transfer",
//!         "currency": "USDC",
//!         "amount": "1000000",
//!         "decimals": 6,
//!         "networkId": "base-sepolia"
//!       }
//!     }
//!   ]
//! }
//! ```

use alloy_primitives::{Address, Bytes, U64, U256};
use serde::{Deserialize, Serialize};

/// Payload format version.
pub const WALLET_SEND_CALLS_VERSION: &str = "1.0";

/// One or more pending calls for a wallet to sign and submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSendCallsParams {
    /// Payload format version.
    pub version: String,
    /// Sending account.
    pub from: Address,
    /// Chain the calls target, as a hex quantity.
    pub chain_id: U64,
    /// Calls in submission order.
    pub calls: Vec<WalletCall>,
}

/// A single contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletCall {
    /// Destination contract.
    pub to: Address,
    /// ABI-encoded call data.
    pub data: Bytes,
    /// Display information for the wallet.
    pub metadata: CallMetadata,
}

/// Human-facing description of a call. Never affects the encoded call data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMetadata {
    /// Sentence shown to the signer.
    pub description: String,
    /// Kind of call, e.g. `"transfer"`.
    pub transaction_type: String,
    /// Token symbol.
    pub currency: String,
    /// Raw amount in base units, carried as a decimal string.
    #[serde(with = "decimal_string")]
    pub amount: U256,
    /// Token precision.
    pub decimals: u8,
    /// Registry key of the network.
    pub network_id: String,
}

mod decimal_string {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        crate::units::parse_amount(&raw).map_err(de::Error::custom)
    }
}
