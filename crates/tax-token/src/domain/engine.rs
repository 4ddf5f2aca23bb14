//! # Transfer Engine
//!
//! Orchestrates [`Ledger`], [`AllowanceTable`] and [`TaxPolicy`] into the two
//! public movement operations.
//!
//! ## Step Order
//!
//! `transfer(sender, recipient, amount)`:
//! 1. `tax = compute_tax(amount)`
//! 2. `burn(sender, tax)`
//! 3. `debit(sender, amount - tax)` then `credit(recipient, amount - tax)`
//!
//! `transfer_from(spender, owner, recipient, amount)`:
//! 1. `consume(owner, spender, amount)` (gross amount, not net of tax)
//! 2. the `transfer` sequence with `owner` as the source
//!
//! In [`TransferMode::Reference`] a failure at step N leaves steps `< N`
//! applied: a rejected debit keeps the tax burned, and a rejected burn in
//! `transfer_from` keeps the allowance consumed. Supply conservation holds
//! regardless, since every individual step preserves it.
//! [`TransferMode::Atomic`] checks every precondition before the first mutation.

use crate::config::{TokenConfig, TokenMetadata, TransferMode};
use crate::domain::allowance::AllowanceTable;
use crate::domain::ledger::Ledger;
use crate::domain::tax::TaxPolicy;
use crate::domain::value_objects::{Address, Amount};
use crate::errors::TokenError;
use crate::events::TokenEvent;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Default bound on the in-engine event log.
pub const DEFAULT_EVENT_CAPACITY: usize = 4_096;

/// Breakdown of a gross transfer amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Amount leaving the source account.
    pub gross: Amount,
    /// Amount burned.
    pub tax: Amount,
    /// Amount delivered to the recipient.
    pub net: Amount,
}

/// The token state machine. Single-threaded; see `TokenService` for a
/// serialised concurrent host.
#[derive(Debug, Clone)]
pub struct TransferEngine {
    config: TokenConfig,
    tax: TaxPolicy,
    ledger: Ledger,
    allowances: AllowanceTable,
    events: VecDeque<TokenEvent>,
    event_capacity: usize,
    dropped_events: u64,
}

impl TransferEngine {
    /// Construct a token, minting `initial_supply * 10^decimals` to the owner.
    ///
    /// # Errors
    ///
    /// - `InvalidTaxPercentage` if `tax_percentage > 100`
    /// - `SupplyOverflow` if the scaled supply does not fit in 256 bits
    pub fn new(config: TokenConfig) -> Result<Self, TokenError> {
        let tax = TaxPolicy::new(config.tax_percentage)?;
        let supply = scaled_supply(config.initial_supply, config.decimals)?;

        let mut ledger = Ledger::new();
        ledger.mint(config.owner, supply);

        info!(
            name = %config.metadata.name,
            symbol = %config.metadata.symbol,
            owner = ?config.owner,
            total_supply = %supply,
            tax_percentage = tax.percentage(),
            mode = ?config.transfer_mode,
            "Token constructed"
        );

        let mut engine = Self {
            config,
            tax,
            ledger,
            allowances: AllowanceTable::new(),
            events: VecDeque::new(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            dropped_events: 0,
        };
        engine.record(TokenEvent::mint(engine.config.owner, supply));
        Ok(engine)
    }

    /// Bound the event log at `capacity` entries. 0 disables recording.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.set_event_capacity(capacity);
        self
    }

    /// Change the event log bound, dropping the oldest entries that no longer fit.
    pub fn set_event_capacity(&mut self, capacity: usize) {
        self.event_capacity = capacity;
        while self.events.len() > capacity {
            self.events.pop_front();
            self.dropped_events += 1;
        }
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.metadata.name
    }

    /// Token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.config.metadata.symbol
    }

    /// Decimal places.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.config.decimals
    }

    /// Creator identity.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.config.owner
    }

    /// Display metadata.
    #[must_use]
    pub fn metadata(&self) -> &TokenMetadata {
        &self.config.metadata
    }

    /// Configuration the engine was built from.
    #[must_use]
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Burn percentage.
    #[must_use]
    pub fn tax_percentage(&self) -> u8 {
        self.tax.percentage()
    }

    /// Tax policy.
    #[must_use]
    pub fn tax_policy(&self) -> &TaxPolicy {
        &self.tax
    }

    /// Current total supply.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    /// Balance of `account`.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    /// Allowance granted by `owner` to `spender`.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances.allowance(owner, spender)
    }

    /// Read-only view of the ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Tax / net split a transfer of `amount` would produce.
    #[must_use]
    pub fn quote(&self, amount: Amount) -> TransferOutcome {
        let (tax, net) = self.tax.split(amount);
        TransferOutcome {
            gross: amount,
            tax,
            net,
        }
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn events(&self) -> &VecDeque<TokenEvent> {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.events).into()
    }

    /// Maximum number of events kept.
    #[must_use]
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }

    /// Events discarded because the log was full.
    #[must_use]
    pub fn dropped_events(&self) -> u64 {
        self.dropped_events
    }

    fn record(&mut self, event: TokenEvent) {
        if self.event_capacity == 0 {
            self.dropped_events += 1;
            return;
        }
        while self.events.len() >= self.event_capacity {
            self.events.pop_front();
            self.dropped_events += 1;
        }
        self.events.push_back(event);
    }

    // =========================================================================
    // ALLOWANCES
    // =========================================================================

    /// Set the allowance of `spender` over `owner`'s balance to `amount`.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.allowances.approve(owner, spender, amount);
        self.record(TokenEvent::approval(owner, spender, amount));
        debug!(owner = ?owner, spender = ?spender, %amount, "Allowance approved");
    }

    /// Raise an allowance by `added`. Returns the new allowance.
    ///
    /// # Errors
    ///
    /// `AllowanceOverflow` if the sum does not fit in 256 bits.
    pub fn increase_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        added: Amount,
    ) -> Result<Amount, TokenError> {
        let updated = self.allowances.increase(owner, spender, added)?;
        self.record(TokenEvent::approval(owner, spender, updated));
        Ok(updated)
    }

    /// Lower an allowance by `subtracted`. Returns the new allowance.
    ///
    /// # Errors
    ///
    /// `InsufficientAllowance` if the allowance is below `subtracted`.
    pub fn decrease_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        subtracted: Amount,
    ) -> Result<Amount, TokenError> {
        let updated = self.allowances.decrease(owner, spender, subtracted)?;
        self.record(TokenEvent::approval(owner, spender, updated));
        Ok(updated)
    }

    // =========================================================================
    // TRANSFERS
    // =========================================================================

    /// Move `amount` from `sender`, burning the tax and delivering the rest.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` from the burn or from the debit of the remainder.
    pub fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<bool, TokenError> {
        if self.config.transfer_mode == TransferMode::Atomic {
            self.ensure_balance(sender, amount)?;
        }

        let outcome = self.taxed_transfer(sender, recipient, amount)?;
        info!(
            from = ?sender,
            to = ?recipient,
            gross = %outcome.gross,
            tax = %outcome.tax,
            net = %outcome.net,
            "Transfer completed"
        );
        Ok(true)
    }

    /// Move `amount` from `owner` on behalf of `spender`.
    ///
    /// The allowance is consumed at the gross `amount` even though only
    /// `amount - tax` reaches the recipient.
    ///
    /// # Errors
    ///
    /// - `InsufficientAllowance` if `allowance(owner, spender) < amount`
    /// - `InsufficientBalance` from the burn or the debit
    pub fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<bool, TokenError> {
        if self.config.transfer_mode == TransferMode::Atomic {
            self.ensure_allowance(owner, spender, amount)?;
            self.ensure_balance(owner, amount)?;
        }

        let remaining = self
            .allowances
            .consume(owner, spender, amount)
            .map_err(|err| {
                warn!(owner = ?owner, spender = ?spender, %amount, "Allowance rejected");
                err
            })?;
        self.record(TokenEvent::approval(owner, spender, remaining));
        debug!(owner = ?owner, spender = ?spender, %amount, %remaining, "Allowance consumed");

        let outcome = self.taxed_transfer(owner, recipient, amount)?;
        info!(
            spender = ?spender,
            from = ?owner,
            to = ?recipient,
            gross = %outcome.gross,
            tax = %outcome.tax,
            net = %outcome.net,
            "TransferFrom completed"
        );
        Ok(true)
    }

    /// Burn the tax from `source`, then move the remainder.
    fn taxed_transfer(
        &mut self,
        source: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<TransferOutcome, TokenError> {
        let outcome = self.quote(amount);

        self.ledger.burn(source, outcome.tax).map_err(|err| {
            warn!(account = ?source, tax = %outcome.tax, "Tax burn rejected");
            err
        })?;
        self.record(TokenEvent::burn(source, outcome.tax));
        debug!(account = ?source, tax = %outcome.tax, "Tax burned");

        self.move_funds(source, recipient, outcome.net)
            .map_err(|err| {
                warn!(
                    account = ?source,
                    net = %outcome.net,
                    burned = %outcome.tax,
                    "Debit after burn rejected; burned tax stays burned"
                );
                err
            })?;

        Ok(outcome)
    }

    /// Plain movement with no tax.
    fn move_funds(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.ledger.debit(from, amount)?;
        self.ledger.credit(to, amount);
        self.record(TokenEvent::transfer(from, to, amount));
        Ok(())
    }

    fn ensure_balance(&self, account: Address, required: Amount) -> Result<(), TokenError> {
        let available = self.ledger.balance_of(&account);
        if available < required {
            warn!(account = ?account, %required, %available, "Balance precheck rejected");
            return Err(TokenError::InsufficientBalance {
                account,
                required,
                available,
            });
        }
        Ok(())
    }

    fn ensure_allowance(
        &self,
        owner: Address,
        spender: Address,
        required: Amount,
    ) -> Result<(), TokenError> {
        let available = self.allowances.allowance(&owner, &spender);
        if available < required {
            warn!(owner = ?owner, spender = ?spender, %required, %available, "Allowance precheck rejected");
            return Err(TokenError::InsufficientAllowance {
                owner,
                spender,
                required,
                available,
            });
        }
        Ok(())
    }
}

/// `initial_supply * 10^decimals`, checked.
fn scaled_supply(initial_supply: u64, decimals: u8) -> Result<Amount, TokenError> {
    Amount::from(10u8)
        .checked_pow(Amount::from(decimals))
        .and_then(|scale| Amount::from(initial_supply).checked_mul(scale))
        .ok_or(TokenError::SupplyOverflow {
            initial_supply,
            decimals,
        })
}

// =============================================================================
// TESTS
// =============================================================================
