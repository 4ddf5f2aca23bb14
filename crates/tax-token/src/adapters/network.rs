//! # Network Resolver Adapter
//!
//! Static table of well-known EVM networks and their block explorers.

use crate::ports::outbound::{NetworkInfo, NetworkResolver};
use std::collections::HashMap;
use tracing::debug;

/// Built-in networks: `(chain_id, name, explorer template)`.
const WELL_KNOWN_NETWORKS: &[(u64, &str, &str)] = &[
    (1, "Ethereum Mainnet", "https://etherscan.io/address/{address}"),
    (11_155_111, "Sepolia", "https://sepolia.etherscan.io/address/{address}"),
    (17_000, "Holesky", "https://holesky.etherscan.io/address/{address}"),
    (56, "BNB Smart Chain", "https://bscscan.com/address/{address}"),
    (97, "BNB Smart Chain Testnet", "https://testnet.bscscan.com/address/{address}"),
    (137, "Polygon", "https://polygonscan.com/address/{address}"),
    (80_002, "Polygon Amoy", "https://amoy.polygonscan.com/address/{address}"),
    (10, "OP Mainnet", "https://optimistic.etherscan.io/address/{address}"),
    (42_161, "Arbitrum One", "https://arbiscan.io/address/{address}"),
    (8_453, "Base", "https://basescan.org/address/{address}"),
    (84_532, "Base Sepolia", "https://sepolia.basescan.org/address/{address}"),
    (43_114, "Avalanche C-Chain", "https://snowtrace.io/address/{address}"),
];

/// Resolver backed by an in-memory table.
#[derive(Debug, Clone)]
pub struct StaticNetworkResolver {
    networks: HashMap<u64, (String, String)>,
}

impl StaticNetworkResolver {
    /// Resolver with no networks; every lookup yields the unknown sentinel.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            networks: HashMap::new(),
        }
    }

    /// Resolver preloaded with the well-known networks.
    #[must_use]
    pub fn well_known() -> Self {
        let mut resolver = Self::empty();
        for (chain_id, name, template) in WELL_KNOWN_NETWORKS {
            resolver = resolver.with_network(*chain_id, *name, *template);
        }
        resolver
    }

    /// Add or replace a network.
    #[must_use]
    pub fn with_network(
        mut self,
        chain_id: u64,
        name: impl Into<String>,
        explorer_template: impl Into<String>,
    ) -> Self {
        self.networks
            .insert(chain_id, (name.into(), explorer_template.into()));
        self
    }

    /// Number of known networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Returns true if no networks are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for StaticNetworkResolver {
    fn default() -> Self {
        Self::well_known()
    }
}

impl NetworkResolver for StaticNetworkResolver {
    fn resolve(&self, chain_id: u64) -> NetworkInfo {
        match self.networks.get(&chain_id) {
            Some((name, template)) => NetworkInfo::Known {
                chain_id,
                name: name.clone(),
                explorer_template: template.clone(),
            },
            None => {
                debug!(chain_id, "Unknown network id");
                NetworkInfo::Unknown { chain_id }
            }
        }
    }
}
