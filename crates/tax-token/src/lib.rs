//! # Tax Token - Deflationary Tax-on-Transfer Ledger
//!
//! A fungible-token ledger where every transfer burns a fixed percentage of the
//! moved amount. The burn reduces the sender's balance and the total supply;
//! the recipient receives the remainder.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | `sum(balances) == total_supply` between operations | `domain/invariants.rs` - `check_supply_conservation()` |
//! | INVARIANT-2 | `0 <= tax <= amount`, percentage in `[0, 100]` | `domain/tax.rs` - `TaxPolicy::new()`, `compute_tax()` |
//! | INVARIANT-3 | Supply never grows after construction | `domain/invariants.rs` - `check_supply_not_increased()` |
//! | INVARIANT-4 | Allowance never goes negative | `domain/allowance.rs` - `AllowanceTable::consume()` |
//! | INVARIANT-5 | Balances never go negative | `domain/ledger.rs` - `Ledger::debit()` |
//!
//! ## Transfer Semantics
//!
//! | Operation | Allowance | Burned | Delivered |
//! |-----------|-----------|--------|-----------|
//! | `transfer(s, r, a)` | untouched | `floor(a * p / 100)` from `s` | `a - tax` to `r` |
//! | `transfer_from(sp, o, r, a)` | reduced by `a` (gross) | `floor(a * p / 100)` from `o` | `a - tax` to `r` |
//!
//! Failure behaviour depends on [`config::TransferMode`]: `Reference` keeps
//! the effects of steps that already ran, `Atomic` checks every precondition
//! first.
//!
//! ## Outbound Dependencies
//!
//! | Port | Adapter | Purpose |
//! |------|---------|---------|
//! | `NetworkResolver` | `StaticNetworkResolver` | Network names and explorer links |
//! | `DeploymentRegistry` | `InMemoryDeploymentRegistry` | Record deployed instances |
//!
//! ## Usage Example
//!
//! ```ignore
//! use tax_token::prelude::*;
//!
//! let config = TokenConfig::new("Ember", "EMB", 1_000_000, 18, 5, creator);
//! let service = TokenService::new(config)?;
//!
//! service.transfer(creator, recipient, Amount::from(200)).await?;
//! assert_eq!(service.balance_of(recipient).await, Amount::from(190));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Configuration
    pub use crate::config::{TokenConfig, TokenMetadata, TransferMode};

    // Value objects
    pub use crate::domain::value_objects::{Address, Amount, ParseAddressError, U256};

    // Domain
    pub use crate::domain::allowance::AllowanceTable;
    pub use crate::domain::engine::{TransferEngine, TransferOutcome, DEFAULT_EVENT_CAPACITY};
    pub use crate::domain::ledger::Ledger;
    pub use crate::domain::tax::{TaxPolicy, MAX_TAX_PERCENTAGE};

    // Invariants
    pub use crate::domain::invariants::{
        check_ledger_invariants, check_supply_conservation, check_tax_bound, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::{TokenApi, TokenInfo};
    pub use crate::ports::outbound::{
        DeploymentRecord, DeploymentRegistry, NetworkInfo, NetworkResolver,
    };

    // Adapters
    pub use crate::adapters::{InMemoryDeploymentRegistry, StaticNetworkResolver};

    // Errors and events
    pub use crate::errors::{ConfigError, RegistryError, TokenError};
    pub use crate::events::TokenEvent;

    // Service
    pub use crate::service::{ServiceConfig, ServiceStats, TokenService};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
