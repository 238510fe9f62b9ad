//! CLI definitions and command implementations for `usdc`.

use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use usdc::{Config, Error, load_config};

pub mod balance;
pub mod init;
pub mod networks;
pub mod transfer;

/// USDC balance lookups and transfer payloads for wallet signing.
#[derive(Debug, Parser)]
#[command(name = "usdc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file with RPC overrides.
    #[arg(short, long, global = true, env = "USDC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "usdc.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List supported networks as JSON.
    Networks,

    /// Print the USDC balance of an account.
    Balance {
        /// Network key, e.g. `base-sepolia`.
        #[arg(short, long)]
        network: String,

        /// Account address.
        address: Address,
    },

    /// Print a wallet-call payload for a USDC transfer as JSON.
    Transfer {
        /// Network key, e.g. `base-sepolia`.
        #[arg(short, long)]
        network: String,

        /// Sending account.
        #[arg(long)]
        from: Address,

        /// Receiving account.
        #[arg(long)]
        to: Address,

        /// Amount in base units (1 USDC = 1000000).
        #[arg(long)]
        amount: String,
    },
}

/// Load the configuration file if one was given, else the defaults.
fn resolve_config(path: Option<&Path>) -> Result<Config, Error> {
    path.map_or_else(|| Ok(Config::default()), load_config)
}
