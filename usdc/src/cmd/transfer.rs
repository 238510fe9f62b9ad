//! `usdc transfer` command — print a transfer payload for wallet signing.

use std::path::Path;

use alloy_primitives::Address;
use usdc::{UsdcHandler, parse_amount};

use super::resolve_config;

/// Execute the `transfer` command.
///
/// Nothing is signed or sent; the payload is written to stdout.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the network is
/// unknown, or `amount` is not a base-unit integer.
#[allow(clippy::print_stdout)]
pub fn run(
    config_path: Option<&Path>,
    network: &str,
    from: Address,
    to: Address,
    amount: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let amount = parse_amount(amount)?;
    let config = resolve_config(config_path)?;
    let handler = UsdcHandler::with_config(network, &config)?;
    let params = handler.create_transfer_call(from, to, amount);
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}
