//! # Tax Policy
//!
//! The burn-on-transfer rate and the pure function that applies it.

use crate::domain::value_objects::Amount;
use crate::errors::TokenError;

/// Upper bound for the tax percentage (inclusive).
pub const MAX_TAX_PERCENTAGE: u8 = 100;

/// Immutable tax configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaxPolicy {
    percentage: u8,
}

impl TaxPolicy {
    /// Create a policy burning `percentage` percent of every transfer.
    ///
    /// # Errors
    ///
    /// `InvalidTaxPercentage` if `percentage > 100`.
    pub fn new(percentage: u8) -> Result<Self, TokenError> {
        if percentage > MAX_TAX_PERCENTAGE {
            return Err(TokenError::InvalidTaxPercentage { percentage });
        }
        Ok(Self { percentage })
    }

    /// The configured percentage, in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// `floor(amount * percentage / 100)`.
    ///
    /// Computed as `q * p + floor(r * p / 100)` with `amount = 100q + r` so the
    /// intermediate never exceeds `amount`.
    #[must_use]
    pub fn compute_tax(&self, amount: Amount) -> Amount {
        let hundred = Amount::from(MAX_TAX_PERCENTAGE);
        let pct = Amount::from(self.percentage);
        let (quotient, remainder) = amount.div_mod(hundred);
        quotient * pct + remainder * pct / hundred
    }

    /// Split a gross amount into `(tax, net)`.
    #[must_use]
    pub fn split(&self, amount: Amount) -> (Amount, Amount) {
        let tax = self.compute_tax(amount);
        (tax, amount - tax)
    }
}
