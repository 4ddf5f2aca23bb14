//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the token domain and the outside world.
//!
//! - **Driving Ports (Inbound)**: `TokenApi`
//! - **Driven Ports (Outbound)**: `NetworkResolver`, `DeploymentRegistry`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
