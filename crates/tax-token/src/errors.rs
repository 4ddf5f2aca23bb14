//! # Error Types
//!
//! All error types for the token ledger, its configuration and the
//! deployment registry port.

use crate::domain::value_objects::{Address, Amount};
use thiserror::Error;

// =============================================================================
// TOKEN ERRORS
// =============================================================================

/// Errors raised by the ledger, the allowance table and the transfer engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Tax percentage outside `[0, 100]`. Fatal to construction.
    #[error("invalid tax percentage: {percentage} > 100")]
    InvalidTaxPercentage {
        /// Rejected percentage.
        percentage: u8,
    },

    /// Account balance below the amount being debited or burned.
    #[error("insufficient balance for {account:?}: required {required}, available {available}")]
    InsufficientBalance {
        /// Account being debited or burned from.
        account: Address,
        /// Amount the step needed.
        required: Amount,
        /// Balance at the time of the step.
        available: Amount,
    },

    /// Spender allowance below the amount being consumed.
    #[error(
        "insufficient allowance for {spender:?} on {owner:?}: required {required}, available {available}"
    )]
    InsufficientAllowance {
        /// Account that granted the allowance.
        owner: Address,
        /// Account spending it.
        spender: Address,
        /// Amount the operation needed.
        required: Amount,
        /// Allowance at the time of the operation.
        available: Amount,
    },

    /// `initial_supply * 10^decimals` does not fit in 256 bits.
    #[error("initial supply overflow: {initial_supply} * 10^{decimals}")]
    SupplyOverflow {
        /// Whole-unit supply requested.
        initial_supply: u64,
        /// Decimal places requested.
        decimals: u8,
    },

    /// Increasing an allowance would exceed 256 bits.
    #[error("allowance overflow for {spender:?} on {owner:?}")]
    AllowanceOverflow {
        /// Account that granted the allowance.
        owner: Address,
        /// Account holding it.
        spender: Address,
    },
}

impl TokenError {
    /// Short, stable label used for log fields and metric labels.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTaxPercentage { .. } => "invalid_tax_percentage",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::InsufficientAllowance { .. } => "insufficient_allowance",
            Self::SupplyOverflow { .. } => "supply_overflow",
            Self::AllowanceOverflow { .. } => "allowance_overflow",
        }
    }
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Errors from loading or validating a [`crate::config::TokenConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration text could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),

    /// Tax percentage outside `[0, 100]`.
    #[error("invalid tax percentage: {0} > 100")]
    InvalidTaxPercentage(u8),

    /// Token name is empty.
    #[error("token name cannot be empty")]
    EmptyName,

    /// Token symbol is empty.
    #[error("token symbol cannot be empty")]
    EmptySymbol,
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors from a deployment registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Removal index past the end of the record list.
    #[error("registry index out of range: {index} >= {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of records held.
        len: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
