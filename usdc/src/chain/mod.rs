//! Network registry and chain binding.
//!
//! - [`config`] — USDC deployment table and the keyed [`NetworkRegistry`].
//! - [`provider`] — [`KnownNetwork`] chain binding and read-only provider construction.

mod config;
mod provider;

pub use self::config::*;
pub use self::provider::*;
