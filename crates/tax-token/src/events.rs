//! # Token Events
//!
//! Record of every state change the engine performs, in the shape of the
//! standard fungible-token `Transfer` / `Approval` logs.
//!
//! | Effect | Event |
//! |--------|-------|
//! | mint | `Transfer { from: None, to: Some(creator) }` |
//! | burn | `Transfer { from: Some(account), to: None }` |
//! | plain movement | `Transfer { from: Some(a), to: Some(b) }` |
//! | approve / consume / adjust | `Approval { owner, spender, value }` (new allowance) |

use crate::domain::value_objects::{Address, Amount};
use serde::{Deserialize, Serialize};

/// A single ledger or allowance effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TokenEvent {
    /// Tokens moved. `None` on one side means minted or burned.
    Transfer {
        /// Source account (`None` for mint).
        from: Option<Address>,
        /// Destination account (`None` for burn).
        to: Option<Address>,
        /// Amount moved in base units.
        value: Amount,
    },
    /// Allowance set to `value`.
    Approval {
        /// Account whose balance the allowance draws on.
        owner: Address,
        /// Account allowed to spend.
        spender: Address,
        /// Allowance after the change.
        value: Amount,
    },
}

impl TokenEvent {
    /// Event for tokens created for `to`.
    #[must_use]
    pub fn mint(to: Address, value: Amount) -> Self {
        Self::Transfer {
            from: None,
            to: Some(to),
            value,
        }
    }

    /// Event for tokens destroyed from `from`.
    #[must_use]
    pub fn burn(from: Address, value: Amount) -> Self {
        Self::Transfer {
            from: Some(from),
            to: None,
            value,
        }
    }

    /// Event for a plain account-to-account movement.
    #[must_use]
    pub fn transfer(from: Address, to: Address, value: Amount) -> Self {
        Self::Transfer {
            from: Some(from),
            to: Some(to),
            value,
        }
    }

    /// Event for an allowance change.
    #[must_use]
    pub fn approval(owner: Address, spender: Address, value: Amount) -> Self {
        Self::Approval {
            owner,
            spender,
            value,
        }
    }

    /// True for `Transfer` events with no destination.
    #[must_use]
    pub fn is_burn(&self) -> bool {
        matches!(self, Self::Transfer { to: None, from: Some(_), .. })
    }
}
