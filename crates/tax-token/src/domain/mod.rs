//! # Domain Layer (Inner Hexagon)
//!
//! Pure accounting logic for the tax-on-transfer token.
//! NO I/O, NO async, NO time or randomness.
//!
//! - Dependencies point INWARD only (service and adapters depend on this).
//! - The engine is composed from the ledger, allowance table and tax policy;
//!   the untaxed movement is a ledger debit plus credit, not an override.

pub mod allowance;
pub mod engine;
pub mod invariants;
pub mod ledger;
pub mod tax;
pub mod value_objects;

pub use allowance::*;
pub use engine::*;
pub use invariants::*;
pub use ledger::*;
pub use tax::*;
pub use value_objects::*;
