//! Configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`Config`] — per-network RPC endpoint overrides.
//! - [`load_config`] — Reads and parses a TOML configuration file.
//! - [`generate_default_config`] — Produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! [networks.base-sepolia]
//! rpc_url = "https://sepolia.base.org"
//!
//! [networks.eth-sepolia]
//! rpc_url = "$SEPOLIA_RPC_URL"
//! ```
//!
//! Every table key must be a registered network. Values support environment
//! variable references (`"$VAR"` or `"${VAR}"`), resolved at load time.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::{KnownNetwork, NetworkRegistry};
use crate::error::Error;

/// Overrides applied to a single network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkOverride {
    /// JSON-RPC endpoint replacing the chain's default.
    #[serde(default)]
    pub rpc_url: Option<String>,
}

/// Handler configuration. The default applies no overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides keyed by network key.
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkOverride>,
}

impl Config {
    /// Parse a TOML document, check its network keys and resolve env references.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid TOML for this
    /// schema, names a network that is not registered, or references an unset
    /// environment variable.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| Error::config_with("failed to parse TOML", e))?;
        let registry = NetworkRegistry::usdc();
        for (network_id, overrides) in &mut config.networks {
            if !registry.contains(network_id) {
                return Err(Error::config(format!(
                    "unknown network '{network_id}' in [networks]"
                )));
            }
            if let Some(rpc_url) = overrides.rpc_url.as_mut() {
                *rpc_url = resolve_env(rpc_url)?;
            }
        }
        Ok(config)
    }

    /// Configured RPC endpoint for `network_id`, if any.
    #[must_use]
    pub fn rpc_url(&self, network_id: &str) -> Option<&str> {
        self.networks
            .get(network_id)
            .and_then(|overrides| overrides.rpc_url.as_deref())
    }
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve config path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    Config::from_toml(&content).map_err(|e| match e {
        Error::Config(message) => {
            Error::Config(format!("{}: {message}", config_path.display()))
        }
        other => other,
    })
}

/// Generate a default TOML configuration template.
///
/// Lists every registered network with its chain's default endpoint.
#[must_use]
pub fn generate_default_config() -> String {
    let mut config = String::from(
        r#"# USDC handler configuration
#
# One table per network key. Omitted networks use their chain's default
# public RPC endpoint. Values support environment variable references:
# "$VAR" or "${VAR}".
"#,
    );

    for network in NetworkRegistry::usdc().iter() {
        let Ok(known) = network.network_id.parse::<KnownNetwork>() else {
            continue;
        };
        let chain = known.chain();
        config.push_str(&format!(
            "\n# {} (chain id {})\n[networks.{}]\nrpc_url = \"{}\"\n",
            network.network_name, chain.id, network.network_id, chain.rpc_url,
        ));
    }

    config
}

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
fn resolve_env(value: &str) -> Result<String, Error> {
    let var_name = if let Some(name) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        name
    } else if let Some(name) = value
        .strip_prefix('$')
        .filter(|name| !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_'))
    {
        name
    } else {
        return Ok(value.to_owned());
    };
    std::env::var(var_name).map_err(|_| {
        Error::config(format!(
            "env var '{var_name}' not found (referenced as '{value}')"
        ))
    })
}
