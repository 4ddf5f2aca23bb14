//! # In-Memory Deployment Registry
//!
//! Process-local record list. A persistent store would implement the same
//! [`DeploymentRegistry`] port.

use crate::errors::RegistryError;
use crate::ports::outbound::{DeploymentRecord, DeploymentRegistry};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Deployment records held in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDeploymentRegistry {
    records: RwLock<Vec<DeploymentRecord>>,
}

impl InMemoryDeploymentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a registry with existing records.
    #[must_use]
    pub fn with_records(records: Vec<DeploymentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if the registry holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl DeploymentRegistry for InMemoryDeploymentRegistry {
    async fn append(&self, record: DeploymentRecord) -> usize {
        let mut records = self.records.write().await;
        info!(
            address = ?record.address,
            symbol = %record.symbol,
            network = %record.network,
            "Deployment recorded"
        );
        records.push(record);
        records.len() - 1
    }

    async fn list(&self) -> Vec<DeploymentRecord> {
        self.records.read().await.clone()
    }

    async fn remove(&self, index: usize) -> Result<DeploymentRecord, RegistryError> {
        let mut records = self.records.write().await;
        let len = records.len();
        if index >= len {
            return Err(RegistryError::IndexOutOfRange { index, len });
        }
        let record = records.remove(index);
        debug!(index, address = ?record.address, "Deployment removed");
        Ok(record)
    }
}
