//! `usdc balance` command — query an account's USDC balance.

use std::path::Path;

use alloy_primitives::Address;
use usdc::UsdcHandler;

use super::resolve_config;

/// Execute the `balance` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the network is
/// unknown, or the RPC call fails.
#[allow(clippy::print_stdout)]
pub async fn run(
    config_path: Option<&Path>,
    network: &str,
    address: Address,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(config_path)?;
    let handler = UsdcHandler::with_config(network, &config)?;
    let balance = handler.balance(address).await?;
    println!("{balance} USDC");
    Ok(())
}
