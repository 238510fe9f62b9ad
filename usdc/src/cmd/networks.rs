//! `usdc networks` command — list the network registry.

use usdc::NetworkRegistry;

/// Execute the `networks` command.
///
/// # Errors
///
/// Returns an error if the registry cannot be serialised.
#[allow(clippy::print_stdout)]
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let networks: Vec<_> = NetworkRegistry::usdc().iter().collect();
    println!("{}", serde_json::to_string_pretty(&networks)?);
    Ok(())
}
