//! [`UsdcHandler`]: balance queries and transfer-call construction for one network.

use std::fmt;

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::{DynProvider, Provider};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::{SolCall, sol};
use tracing::{debug, instrument, warn};

use crate::calls::{CallMetadata, WALLET_SEND_CALLS_VERSION, WalletCall, WalletSendCallsParams};
use crate::chain::{ChainDescriptor, KnownNetwork, NetworkConfig, NetworkRegistry, build_provider};
use crate::config::Config;
use crate::error::Error;
use crate::units::format_units;

sol! {
    /// The two ERC-20 entry points the handler touches.
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Token symbol carried in call metadata.
const CURRENCY: &str = "USDC";

/// USDC access bound to a single network.
///
/// Owns the resolved [`NetworkConfig`] and a read-only RPC client for the
/// matching chain. Handlers share no state; any number can coexist.
#[derive(Clone)]
pub struct UsdcHandler {
    network: NetworkConfig,
    chain: ChainDescriptor,
    provider: DynProvider,
}

impl fmt::Debug for UsdcHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsdcHandler")
            .field("network", &self.network)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

impl UsdcHandler {
    /// Create a handler for `network_id` using the chain's default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NetworkNotFound`] if `network_id` is not registered.
    pub fn new(network_id: &str) -> Result<Self, Error> {
        Self::with_config(network_id, &Config::default())
    }

    /// Create a handler for `network_id`, taking the RPC endpoint from `config`
    /// when it sets one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NetworkNotFound`] if `network_id` is not registered, or
    /// [`Error::InvalidRpcUrl`] if the configured endpoint does not parse.
    pub fn with_config(network_id: &str, config: &Config) -> Result<Self, Error> {
        let network = *NetworkRegistry::usdc().get(network_id)?;
        let chain = network_id.parse::<KnownNetwork>()?.chain();
        let rpc_url = config.rpc_url(network_id).unwrap_or(chain.rpc_url);
        let provider = build_provider(network_id, rpc_url)?;
        debug!(
            network = network.network_id,
            chain_id = chain.id,
            rpc_url,
            "USDC handler created"
        );
        Ok(Self {
            network,
            chain,
            provider,
        })
    }

    /// Create a handler for `network_id` that talks through `provider`.
    ///
    /// The provider must already target the network's chain; it is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NetworkNotFound`] if `network_id` is not registered.
    pub fn with_provider(network_id: &str, provider: DynProvider) -> Result<Self, Error> {
        let network = *NetworkRegistry::usdc().get(network_id)?;
        let chain = network_id.parse::<KnownNetwork>()?.chain();
        Ok(Self {
            network,
            chain,
            provider,
        })
    }

    /// Resolved network configuration.
    #[must_use]
    pub const fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Chain the RPC client is bound to.
    #[must_use]
    pub const fn chain(&self) -> &ChainDescriptor {
        &self.chain
    }

    /// Raw `balanceOf(account)` in base units.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rpc`] if the node cannot be reached or the call fails,
    /// and [`Error::Decode`] if the return data is not a `uint256`.
    #[instrument(skip(self), fields(network = self.network.network_id))]
    pub async fn balance_raw(&self, account: Address) -> Result<U256, Error> {
        let input = IERC20::balanceOfCall { account }.abi_encode();
        let request = TransactionRequest::default()
            .with_to(self.network.token_address)
            .with_input(input);
        let output = self
            .provider
            .call(request)
            .await
            .inspect_err(|error| warn!(%error, "balanceOf call failed"))?;
        let balance = IERC20::balanceOfCall::abi_decode_returns(&output)?;
        debug!(%balance, "balanceOf returned");
        Ok(balance)
    }

    /// USDC balance of `account` as a decimal string, e.g. `"1.5"`.
    ///
    /// # Errors
    ///
    /// See [`balance_raw`](Self::balance_raw).
    pub async fn balance(&self, account: Address) -> Result<String, Error> {
        let raw = self.balance_raw(account).await?;
        Ok(format_units(raw, self.network.decimals))
    }

    /// Build the wallet payload for sending `amount` base units to `recipient`.
    ///
    /// Pure: the same inputs and network always give the same payload. `from`
    /// only appears in the envelope and never in the call data.
    #[must_use]
    pub fn create_transfer_call(
        &self,
        from: Address,
        recipient: Address,
        amount: U256,
    ) -> WalletSendCallsParams {
        let data = Bytes::from(
            IERC20::transferCall {
                to: recipient,
                amount,
            }
            .abi_encode(),
        );
        let metadata = CallMetadata {
            description: format!(
                "Transfer {} {CURRENCY} on {}",
                format_units(amount, self.network.decimals),
                self.network.network_name
            ),
            transaction_type: "transfer".to_owned(),
            currency: CURRENCY.to_owned(),
            amount,
            decimals: self.network.decimals,
            network_id: self.network.network_id.to_owned(),
        };

        WalletSendCallsParams {
            version: WALLET_SEND_CALLS_VERSION.to_owned(),
            from,
            chain_id: self.network.chain_id_hex(),
            calls: vec![WalletCall {
                to: self.network.token_address,
                data,
                metadata,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::USDC_NETWORKS;
    use alloy_primitives::{U64, address};
    use alloy_provider::ProviderBuilder;
    use alloy_sol_types::SolValue;
    use alloy_transport::mock::Asserter;

    const RECIPIENT: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const SENDER: Address = address!("1111111111111111111111111111111111111111");

    fn mocked(network_id: &str) -> (UsdcHandler, Asserter) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone())
            .erased();
        let handler = UsdcHandler::with_provider(network_id, provider).unwrap();
        (handler, asserter)
    }

    fn encoded_uint(value: u64) -> Bytes {
        Bytes::from(U256::from(value).abi_encode())
    }

    // ============================================================================
    // Construction
    // ============================================================================

    #[test]
    fn test_new_resolves_every_registered_network() {
        for entry in &USDC_NETWORKS {
            let handler = UsdcHandler::new(entry.network_id).unwrap();
            assert_eq!(handler.network().network_id, entry.network_id);
            assert_eq!(handler.chain().id, entry.chain_id);
        }
    }

    #[test]
    fn test_new_fails_for_unknown_network() {
        for key in ["", "base", "optimism-mainnet", "BASE-MAINNET"] {
            let err = UsdcHandler::new(key).unwrap_err();
            assert!(matches!(err, Error::NetworkNotFound(ref k) if k == key));
            assert!(err.to_string().ends_with(key));
        }
    }

    #[test]
    fn test_config_rpc_override_must_parse() {
        let config =
            Config::from_toml("[networks.base-mainnet]\nrpc_url = \"::nope::\"\n").unwrap();
        let err = UsdcHandler::with_config("base-mainnet", &config).unwrap_err();
        assert!(matches!(err, Error::InvalidRpcUrl { .. }));
    }

    #[test]
    fn test_config_override_only_applies_to_its_network() {
        let config =
            Config::from_toml("[networks.base-mainnet]\nrpc_url = \"::nope::\"\n").unwrap();
        assert!(UsdcHandler::with_config("base-sepolia", &config).is_ok());
    }

    #[test]
    fn test_concurrent_construction_is_independent() {
        let (sepolia, mainnet) = std::thread::scope(|scope| {
            let a = scope.spawn(|| UsdcHandler::new("eth-sepolia"));
            let b = scope.spawn(|| UsdcHandler::new("base-mainnet"));
            (a.join().unwrap().unwrap(), b.join().unwrap().unwrap())
        });
        assert_eq!(sepolia.network().network_id, "eth-sepolia");
        assert_eq!(sepolia.chain().id, 11_155_111);
        assert_eq!(mainnet.network().network_id, "base-mainnet");
        assert_eq!(mainnet.chain().id, 8453);
    }

    #[test]
    fn test_handler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UsdcHandler>();
    }

    #[test]
    fn test_debug_omits_provider() {
        let handler = UsdcHandler::new("base-sepolia").unwrap();
        let debug = format!("{handler:?}");
        assert!(debug.contains("UsdcHandler"));
        assert!(debug.contains("base-sepolia"));
    }

    // ============================================================================
    // Balance query
    // ============================================================================

    #[tokio::test]
    async fn test_balance_formats_whole_amounts() {
        let (handler, asserter) = mocked("base-sepolia");
        asserter.push_success(&encoded_uint(2_000_000));
        assert_eq!(handler.balance(RECIPIENT).await.unwrap(), "2");
    }

    #[tokio::test]
    async fn test_balance_formats_fractions() {
        let (handler, asserter) = mocked("base-mainnet");
        asserter.push_success(&encoded_uint(1_234_567));
        assert_eq!(handler.balance(RECIPIENT).await.unwrap(), "1.234567");

        asserter.push_success(&encoded_uint(1_500_000));
        assert_eq!(handler.balance(RECIPIENT).await.unwrap(), "1.5");
    }

    #[tokio::test]
    async fn test_balance_raw_is_unscaled() {
        let (handler, asserter) = mocked("eth-sepolia");
        asserter.push_success(&encoded_uint(42));
        assert_eq!(handler.balance_raw(RECIPIENT).await.unwrap(), U256::from(42u64));
    }

    #[tokio::test]
    async fn test_balance_propagates_rpc_errors() {
        let (handler, asserter) = mocked("base-sepolia");
        asserter.push_failure_msg("execution reverted");
        let err = handler.balance(RECIPIENT).await.unwrap_err();
        assert!(matches!(err, Error::Rpc(_)));
        assert!(err.to_string().contains("execution reverted"));
    }

    #[tokio::test]
    async fn test_balance_rejects_malformed_return_data() {
        let (handler, asserter) = mocked("base-sepolia");
        asserter.push_success(&Bytes::from_static(&[0x01, 0x02]));
        let err = handler.balance(RECIPIENT).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_balance_unreachable_node() {
        let provider = build_provider("base-sepolia", "http://127.0.0.1:59999").unwrap();
        let handler = UsdcHandler::with_provider("base-sepolia", provider).unwrap();
        assert!(matches!(
            handler.balance(RECIPIENT).await,
            Err(Error::Rpc(_))
        ));
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_balance_base_sepolia_live() {
        let handler = UsdcHandler::new("base-sepolia").unwrap();
        let balance = handler.balance(RECIPIENT).await.expect("live balance");
        assert!(!balance.is_empty());
    }

    // ============================================================================
    // Transfer-call construction
    // ============================================================================

    #[test]
    fn test_transfer_call_data_layout() {
        let handler = UsdcHandler::new("base-sepolia").unwrap();
        let params = handler.create_transfer_call(SENDER, RECIPIENT, U256::from(1_000_000u64));

        let expected = format!(
            "a9059cbb{:0>64}{:0>64}",
            "aa".repeat(20),
            format!("{:x}", 1_000_000u64)
        );
        assert_eq!(params.calls.len(), 1);
        assert_eq!(hex::encode(&params.calls[0].data), expected);
        assert_eq!(
            &params.calls[0].data[..4],
            IERC20::transferCall::SELECTOR.as_slice()
        );
    }

    #[test]
    fn test_transfer_call_data_ignores_sender() {
        let handler = UsdcHandler::new("base-mainnet").unwrap();
        let amount = U256::from(1_000_000u64);
        let a = handler.create_transfer_call(SENDER, RECIPIENT, amount);
        let b = handler.create_transfer_call(Address::ZERO, RECIPIENT, amount);
        assert_eq!(a.calls, b.calls);
        assert_eq!(a.from, SENDER);
        assert_eq!(b.from, Address::ZERO);
    }

    #[test]
    fn test_transfer_call_targets_token_on_bound_chain() {
        for entry in &USDC_NETWORKS {
            let handler = UsdcHandler::new(entry.network_id).unwrap();
            for amount in [0u64, 1, 1_000_000, u64::MAX] {
                let params = handler.create_transfer_call(SENDER, RECIPIENT, U256::from(amount));
                assert_eq!(params.version, "1.0");
                assert_eq!(params.chain_id, U64::from(entry.chain_id));
                assert_eq!(params.calls[0].to, entry.token_address);
            }
        }
    }

    #[test]
    fn test_transfer_metadata() {
        let handler = UsdcHandler::new("eth-sepolia").unwrap();
        let params = handler.create_transfer_call(SENDER, RECIPIENT, U256::from(1_500_000u64));
        let metadata = &params.calls[0].metadata;
        assert_eq!(metadata.description, "Transfer 1.5 USDC on Ethereum Sepolia");
        assert_eq!(metadata.transaction_type, "transfer");
        assert_eq!(metadata.currency, "USDC");
        assert_eq!(metadata.amount, U256::from(1_500_000u64));
        assert_eq!(metadata.decimals, 6);
        assert_eq!(metadata.network_id, "eth-sepolia");
    }

    #[test]
    fn test_description_scaling_leaves_encoded_amount_alone() {
        let handler = UsdcHandler::new("base-sepolia").unwrap();
        let params = handler.create_transfer_call(SENDER, RECIPIENT, U256::from(1u64));
        let call = &params.calls[0];
        assert_eq!(call.metadata.description, "Transfer 0.000001 USDC on Base Sepolia");
        assert_eq!(call.metadata.amount, U256::from(1u64));
        let decoded = IERC20::transferCall::abi_decode(&call.data).unwrap();
        assert_eq!(decoded.amount, U256::from(1u64));
        assert_eq!(decoded.to, RECIPIENT);
    }

    #[test]
    fn test_transfer_call_is_deterministic() {
        let handler = UsdcHandler::new("base-sepolia").unwrap();
        let amount = U256::from(123_456_789u64);
        assert_eq!(
            handler.create_transfer_call(SENDER, RECIPIENT, amount),
            handler.create_transfer_call(SENDER, RECIPIENT, amount)
        );
    }
}
