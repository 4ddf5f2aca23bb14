//! # Driven Ports (SPI - Outbound)
//!
//! Collaborators a token host talks to after the token exists: a resolver that
//! names networks and builds explorer links, and a registry of deployed tokens.
//! Compiling token source and submitting deployments are outside this crate.

use crate::config::TokenMetadata;
use crate::domain::value_objects::Address;
use crate::errors::RegistryError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the token address in explorer templates.
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// Display name used for networks the resolver does not know.
pub const UNKNOWN_NETWORK_NAME: &str = "Unknown Network";

// =============================================================================
// NETWORK RESOLUTION
// =============================================================================

/// Result of resolving a network identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkInfo {
    /// A recognised network.
    Known {
        /// Numeric network (chain) id.
        chain_id: u64,
        /// Human-readable name.
        name: String,
        /// Explorer URL with an `{address}` placeholder.
        explorer_template: String,
    },
    /// Sentinel for unrecognised ids.
    Unknown {
        /// The id that was looked up.
        chain_id: u64,
    },
}

impl NetworkInfo {
    /// Network id that was resolved.
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Known { chain_id, .. } | Self::Unknown { chain_id } => *chain_id,
        }
    }

    /// Display name; [`UNKNOWN_NETWORK_NAME`] for the sentinel.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Known { name, .. } => name,
            Self::Unknown { .. } => UNKNOWN_NETWORK_NAME,
        }
    }

    /// Returns true for the unknown sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// Explorer page for `address`, if the network has an explorer.
    #[must_use]
    pub fn explorer_url(&self, address: &Address) -> Option<String> {
        match self {
            Self::Known {
                explorer_template, ..
            } => Some(explorer_template.replace(ADDRESS_PLACEHOLDER, &address.to_hex())),
            Self::Unknown { .. } => None,
        }
    }
}

/// Maps network ids to names and explorer templates.
pub trait NetworkResolver: Send + Sync {
    /// Resolve `chain_id`; never fails, unknown ids yield the sentinel.
    fn resolve(&self, chain_id: u64) -> NetworkInfo;
}

// =============================================================================
// DEPLOYMENT REGISTRY
// =============================================================================

/// One deployed token instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Address the instance lives at.
    pub address: Address,
    /// Token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Network display name.
    pub network: String,
    /// Explorer link, when the network has one.
    pub explorer_url: Option<String>,
}

impl DeploymentRecord {
    /// Build a record from token metadata and a resolved network.
    #[must_use]
    pub fn new(address: Address, metadata: &TokenMetadata, network: &NetworkInfo) -> Self {
        Self {
            address,
            name: metadata.name.clone(),
            symbol: metadata.symbol.clone(),
            network: network.name().to_string(),
            explorer_url: network.explorer_url(&address),
        }
    }
}

/// Append-only list of deployment records with index-based removal.
#[async_trait]
pub trait DeploymentRegistry: Send + Sync {
    /// Append a record; returns its index.
    async fn append(&self, record: DeploymentRecord) -> usize;

    /// All records in insertion order.
    async fn list(&self) -> Vec<DeploymentRecord>;

    /// Remove and return the record at `index`.
    async fn remove(&self, index: usize) -> Result<DeploymentRecord, RegistryError>;
}
