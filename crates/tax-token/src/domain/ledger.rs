//! # Ledger
//!
//! Per-account balances and the total supply.
//!
//! Every primitive keeps `sum(balances) == total_supply`:
//! - `mint` and `burn` move a balance and the supply together
//! - `debit` followed by `credit` of the same amount is supply-neutral

use crate::domain::value_objects::{Address, Amount};
use crate::errors::TokenError;
use std::collections::HashMap;
use tracing::trace;

/// Account balances plus total supply.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
}

impl Ledger {
    /// Create an empty ledger (no accounts, zero supply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `account`; zero for accounts never seen.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Current total supply.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Iterate over every account that has ever held a balance.
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    /// Number of accounts tracked.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    /// Increase the balance of `account` by `amount`.
    ///
    /// Callers only credit what was debited or minted, so the balance never
    /// exceeds `total_supply` and the addition cannot overflow.
    pub fn credit(&mut self, account: Address, amount: Amount) {
        let balance = self.balances.entry(account).or_default();
        *balance = balance.saturating_add(amount);
        trace!(account = ?account, %amount, "credit");
    }

    /// Decrease the balance of `account` by `amount`.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` if the balance is below `amount`; the ledger is unchanged.
    pub fn debit(&mut self, account: Address, amount: Amount) -> Result<(), TokenError> {
        let available = self.balance_of(&account);
        let remaining =
            available
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientBalance {
                    account,
                    required: amount,
                    available,
                })?;
        self.balances.insert(account, remaining);
        trace!(account = ?account, %amount, "debit");
        Ok(())
    }

    /// Destroy `amount` tokens held by `account`, shrinking the total supply.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` under the same condition as [`Ledger::debit`].
    pub fn burn(&mut self, account: Address, amount: Amount) -> Result<(), TokenError> {
        self.debit(account, amount)?;
        // debit succeeded, so amount <= balance <= total_supply
        self.total_supply = self.total_supply.saturating_sub(amount);
        trace!(account = ?account, %amount, total_supply = %self.total_supply, "burn");
        Ok(())
    }

    /// Create `amount` new tokens for `account`. Only used while constructing a token.
    pub(crate) fn mint(&mut self, account: Address, amount: Amount) {
        self.total_supply = self.total_supply.saturating_add(amount);
        self.credit(account, amount);
    }

    /// Sum of every balance, in 512 bits so it cannot overflow even if the
    /// conservation invariant were broken.
    #[must_use]
    pub fn sum_of_balances(&self) -> primitive_types::U512 {
        self.balances
            .values()
            .fold(primitive_types::U512::zero(), |acc, b| {
                acc + primitive_types::U512::from(*b)
            })
    }
}

// =============================================================================
// TESTS
// =============================================================================
