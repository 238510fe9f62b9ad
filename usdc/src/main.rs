//! USDC command-line helper
//!
//! Reads USDC balances and prints ERC-20 transfer payloads for an external
//! wallet to sign. Nothing is signed or broadcast.
//!
//! ```sh
//! usdc init                                     # Generate default usdc.toml
//! usdc networks                                 # List supported networks
//! usdc balance -n base-sepolia 0x…              # Query a balance
//! usdc transfer -n base-sepolia --from 0x… --to 0x… --amount 1000000
//! ```

mod cmd;
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};
use dotenvy::dotenv;
use telemetry::Telemetry;

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    // Load .env variables before config values reference them
    dotenv().ok();

    let cli = Cli::parse();
    Telemetry::new().with_log_level("warn").register();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force).map_err(Into::into),
        Commands::Networks => cmd::networks::run(),
        Commands::Balance { network, address } => {
            cmd::balance::run(config, &network, address).await
        }
        Commands::Transfer {
            network,
            from,
            to,
            amount,
        } => cmd::transfer::run(config, &network, from, to, &amount),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
