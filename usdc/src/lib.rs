//! USDC balance queries and ERC-20 transfer call construction.
//!
//! A [`UsdcHandler`] is bound to one network from the static
//! [`USDC_NETWORKS`] table. It reads balances through a read-only
//! `eth_call` to `balanceOf(address)` and builds
//! [`WalletSendCallsParams`] payloads carrying `transfer(address,uint256)`
//! call data for an external wallet to sign and submit.
//!
//! ```no_run
//! use alloy_primitives::{U256, address};
//! use usdc::UsdcHandler;
//!
//! # async fn demo() -> Result<(), usdc::Error> {
//! let handler = UsdcHandler::new("base-sepolia")?;
//! let owner = address!("1111111111111111111111111111111111111111");
//! println!("{}", handler.balance(owner).await?);
//!
//! let recipient = address!("2222222222222222222222222222222222222222");
//! let params = handler.create_transfer_call(owner, recipient, U256::from(1_000_000u64));
//! assert_eq!(params.calls.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod calls;
pub mod chain;
pub mod config;
pub mod error;
pub mod handler;
pub mod units;

pub use calls::{CallMetadata, WalletCall, WalletSendCallsParams};
pub use chain::{KnownNetwork, NetworkConfig, NetworkRegistry, USDC_NETWORKS};
pub use config::{Config, load_config};
pub use error::Error;
pub use handler::UsdcHandler;
pub use units::{format_units, parse_amount};
