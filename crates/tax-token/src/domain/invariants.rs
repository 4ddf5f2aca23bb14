//! # Domain Invariants
//!
//! Properties that hold between any two operations on a token.
//!
//! - INVARIANT-1: Supply Conservation (`sum(balances) == total_supply`)
//! - INVARIANT-2: Tax Bound (`0 <= tax <= amount`, percentage in `[0, 100]`)
//! - INVARIANT-3: Supply Never Grows after construction

use crate::domain::ledger::Ledger;
use crate::domain::tax::{TaxPolicy, MAX_TAX_PERCENTAGE};
use crate::domain::value_objects::Amount;
use primitive_types::U512;

/// INVARIANT-1: Supply Conservation
#[must_use]
pub fn check_supply_conservation(ledger: &Ledger) -> bool {
    ledger.sum_of_balances() == U512::from(ledger.total_supply())
}

/// INVARIANT-2: Tax Bound
#[must_use]
pub fn check_tax_bound(policy: &TaxPolicy, amount: Amount) -> bool {
    policy.percentage() <= MAX_TAX_PERCENTAGE && policy.compute_tax(amount) <= amount
}

/// INVARIANT-3: Supply Never Grows
#[must_use]
pub fn check_supply_not_increased(before: Amount, after: Amount) -> bool {
    after <= before
}

/// A broken invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Balances and supply disagree.
    SupplyMismatch {
        /// Sum of every balance.
        sum_of_balances: U512,
        /// Recorded total supply.
        total_supply: Amount,
    },
    /// Supply went up between two observations.
    SupplyIncreased {
        /// Earlier supply.
        before: Amount,
        /// Later supply.
        after: Amount,
    },
}

/// Check the ledger-level invariants; `previous_supply` is the supply at the
/// prior observation, if any.
#[must_use]
pub fn check_ledger_invariants(
    ledger: &Ledger,
    previous_supply: Option<Amount>,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if !check_supply_conservation(ledger) {
        violations.push(InvariantViolation::SupplyMismatch {
            sum_of_balances: ledger.sum_of_balances(),
            total_supply: ledger.total_supply(),
        });
    }

    if let Some(before) = previous_supply {
        if !check_supply_not_increased(before, ledger.total_supply()) {
            violations.push(InvariantViolation::SupplyIncreased {
                before,
                after: ledger.total_supply(),
            });
        }
    }

    violations
}
