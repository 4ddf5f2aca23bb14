//! # Allowance Table
//!
//! Per-(owner, spender) caps on how much a spender may move out of an
//! owner's balance through `transfer_from`.

use crate::domain::value_objects::{Address, Amount};
use crate::errors::TokenError;
use std::collections::HashMap;

/// Approved amounts keyed by `(owner, spender)`.
#[derive(Debug, Clone, Default)]
pub struct AllowanceTable {
    allowances: HashMap<(Address, Address), Amount>,
}

impl AllowanceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current allowance; zero if never set.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite the allowance (not additive).
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    /// Spend `amount` of the allowance. Returns the remaining allowance.
    ///
    /// # Errors
    ///
    /// `InsufficientAllowance` if the stored allowance is below `amount`; the
    /// table is unchanged.
    pub fn consume(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<Amount, TokenError> {
        let available = self.allowance(&owner, &spender);
        let remaining =
            available
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientAllowance {
                    owner,
                    spender,
                    required: amount,
                    available,
                })?;
        self.allowances.insert((owner, spender), remaining);
        Ok(remaining)
    }

    /// Add `added` to the allowance. Returns the new allowance.
    ///
    /// # Errors
    ///
    /// `AllowanceOverflow` if the result does not fit in 256 bits.
    pub fn increase(
        &mut self,
        owner: Address,
        spender: Address,
        added: Amount,
    ) -> Result<Amount, TokenError> {
        let updated = self
            .allowance(&owner, &spender)
            .checked_add(added)
            .ok_or(TokenError::AllowanceOverflow { owner, spender })?;
        self.allowances.insert((owner, spender), updated);
        Ok(updated)
    }

    /// Subtract `subtracted` from the allowance. Returns the new allowance.
    ///
    /// # Errors
    ///
    /// `InsufficientAllowance` if it would drop below zero.
    pub fn decrease(
        &mut self,
        owner: Address,
        spender: Address,
        subtracted: Amount,
    ) -> Result<Amount, TokenError> {
        self.consume(owner, spender, subtracted)
    }
}
