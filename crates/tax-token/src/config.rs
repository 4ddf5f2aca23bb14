//! Token construction parameters and informational metadata.
//!
//! Loaded from TOML or built in code; `validate()` runs before an engine is
//! constructed from it.

use crate::domain::tax::MAX_TAX_PERCENTAGE;
use crate::domain::value_objects::Address;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Descriptive fields carried for display only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenMetadata {
    /// Token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Project website.
    pub website: Option<String>,
    /// Social media link.
    pub social_link: Option<String>,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "Deflationary Token".to_string(),
            symbol: "DFT".to_string(),
            website: None,
            social_link: None,
        }
    }
}

/// How `transfer` / `transfer_from` behave when a later step fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    /// Steps run in order and earlier effects stay applied when a later step
    /// fails (allowance consumed, tax burned).
    #[default]
    Reference,
    /// Every precondition is checked before the first mutation, so a failed
    /// call leaves no effect.
    Atomic,
}

/// Token configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Display metadata
    pub metadata: TokenMetadata,
    /// Initial supply in whole units (scaled by `10^decimals` at construction)
    pub initial_supply: u64,
    /// Decimal places of one whole unit
    pub decimals: u8,
    /// Percentage of every transfer burned, `[0, 100]`
    pub tax_percentage: u8,
    /// Creator; receives the whole initial supply
    pub owner: Address,
    /// Failure semantics of the transfer operations
    pub transfer_mode: TransferMode,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            metadata: TokenMetadata::default(),
            initial_supply: 1_000_000,
            decimals: 18,
            tax_percentage: 5,
            owner: Address::ZERO,
            transfer_mode: TransferMode::Reference,
        }
    }
}

impl TokenConfig {
    /// Config with the given construction arguments and default metadata links.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        initial_supply: u64,
        decimals: u8,
        tax_percentage: u8,
        owner: Address,
    ) -> Self {
        Self {
            metadata: TokenMetadata {
                name: name.into(),
                symbol: symbol.into(),
                website: None,
                social_link: None,
            },
            initial_supply,
            decimals,
            tax_percentage,
            owner,
            transfer_mode: TransferMode::Reference,
        }
    }

    /// Builder method to set the transfer mode.
    #[must_use]
    pub fn with_transfer_mode(mut self, mode: TransferMode) -> Self {
        self.transfer_mode = mode;
        self
    }

    /// Builder method to set website and social link.
    #[must_use]
    pub fn with_links(mut self, website: Option<String>, social_link: Option<String>) -> Self {
        self.metadata.website = website;
        self.metadata.social_link = social_link;
        self
    }

    /// Parse a TOML document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// `ConfigError::Parse` for malformed TOML or an unparseable owner address,
    /// plus anything `validate()` rejects.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Empty name or symbol, or a tax percentage above 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        if self.metadata.symbol.trim().is_empty() {
            return Err(ConfigError::EmptySymbol);
        }

        if self.tax_percentage > MAX_TAX_PERCENTAGE {
            return Err(ConfigError::InvalidTaxPercentage(self.tax_percentage));
        }

        Ok(())
    }
}
