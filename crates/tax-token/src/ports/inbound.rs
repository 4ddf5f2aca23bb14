//! # Driving Ports (API - Inbound)
//!
//! The interface a host exposes to callers of a token instance. Every call
//! runs to completion before the next one starts.

use crate::domain::engine::TransferOutcome;
use crate::domain::value_objects::{Address, Amount};
use crate::errors::TokenError;
use crate::events::TokenEvent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Static description of a token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal places.
    pub decimals: u8,
    /// Burn percentage.
    pub tax_percentage: u8,
    /// Creator identity.
    pub owner: Address,
    /// Project website.
    pub website: Option<String>,
    /// Social media link.
    pub social_link: Option<String>,
}

/// Primary API of a hosted token.
///
/// ## Usage
///
/// ```ignore
/// api.approve(owner, spender, Amount::from(200)).await;
/// api.transfer_from(spender, owner, recipient, Amount::from(200)).await?;
/// ```
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Move `amount` from `sender` to `recipient`, burning the tax.
    async fn transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<bool, TokenError>;

    /// Move `amount` out of `owner` on behalf of `spender`.
    async fn transfer_from(
        &self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<bool, TokenError>;

    /// Overwrite the allowance of `spender` over `owner`.
    async fn approve(&self, owner: Address, spender: Address, amount: Amount);

    /// Raise an allowance; returns the new value.
    async fn increase_allowance(
        &self,
        owner: Address,
        spender: Address,
        added: Amount,
    ) -> Result<Amount, TokenError>;

    /// Lower an allowance; returns the new value.
    async fn decrease_allowance(
        &self,
        owner: Address,
        spender: Address,
        subtracted: Amount,
    ) -> Result<Amount, TokenError>;

    /// Balance of `account`.
    async fn balance_of(&self, account: Address) -> Amount;

    /// Allowance of `spender` over `owner`.
    async fn allowance(&self, owner: Address, spender: Address) -> Amount;

    /// Current total supply.
    async fn total_supply(&self) -> Amount;

    /// Name, symbol, decimals and the other static fields.
    async fn token_info(&self) -> TokenInfo;

    /// Tax / net split a transfer of `amount` would produce.
    async fn quote(&self, amount: Amount) -> TransferOutcome;

    /// Drain the events recorded since the last call.
    async fn take_events(&self) -> Vec<TokenEvent>;
}
