//! Unified error types for the USDC handler.

use thiserror::Error;

/// Top-level error type for registry lookup, RPC access and configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// No registry entry matches the requested network key.
    #[error("network configuration not found for: {0}")]
    NetworkNotFound(String),

    /// A registry was built from entries that repeat a network key.
    #[error("duplicate network configuration for: {0}")]
    DuplicateNetwork(String),

    /// Transport or contract-call failure while talking to the node.
    #[error(transparent)]
    Rpc(#[from] alloy_transport::TransportError),

    /// The node answered but the return data is not a valid ABI encoding.
    #[error(transparent)]
    Decode(#[from] alloy_sol_types::Error),

    /// A textual token amount could not be parsed as an unsigned 256-bit integer.
    #[error("invalid amount '{0}': expected a non-negative integer in base units")]
    InvalidAmount(String),

    /// An RPC endpoint override is not a valid URL.
    #[error("invalid RPC URL for {network}: {reason}")]
    InvalidRpcUrl {
        /// Network key the endpoint was configured for.
        network: String,
        /// Parser message.
        reason: String,
    },

    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for [`Error::Config`].
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// [`Error::Config`] carrying the display form of an underlying cause.
    #[must_use]
    pub fn config_with(message: impl AsRef<str>, source: impl std::fmt::Display) -> Self {
        Self::Config(format!("{}: {source}", message.as_ref()))
    }
}
