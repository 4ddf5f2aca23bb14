//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the outbound ports.

pub mod network;
pub mod registry;

pub use network::StaticNetworkResolver;
pub use registry::InMemoryDeploymentRegistry;
