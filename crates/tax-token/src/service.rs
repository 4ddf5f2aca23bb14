//! # Token Service
//!
//! Async host for a single token instance. Implements [`TokenApi`].
//!
//! ## Ordering
//!
//! - One `tokio::sync::Mutex` guards the engine; every call, reads included,
//!   holds it from start to finish, so no caller observes the state between a
//!   tax burn and the credit that follows it
//! - Clones share the same engine and statistics
//! - With `check_invariants` on, supply conservation is verified after every
//!   mutation and violations are logged at `error` level
//! - The hosted engine's event log is capped at `event_capacity`; hosts that
//!   need every event drain it with `take_events`

use crate::config::TokenConfig;
use crate::domain::engine::{TransferEngine, TransferOutcome, DEFAULT_EVENT_CAPACITY};
use crate::domain::invariants::check_ledger_invariants;
use crate::domain::value_objects::{Address, Amount};
use crate::errors::TokenError;
use crate::events::TokenEvent;
use crate::ports::inbound::{TokenApi, TokenInfo};
use crate::ports::outbound::{DeploymentRecord, DeploymentRegistry, NetworkResolver};

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, instrument};

/// Token Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Verify ledger invariants after each mutation.
    pub check_invariants: bool,
    /// Bound on the engine's event log; the oldest events are dropped past it.
    pub event_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            check_invariants: cfg!(debug_assertions),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Statistics for the Token Service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceStats {
    /// Successful `transfer` calls.
    pub transfers: u64,
    /// Successful `transfer_from` calls.
    pub transfer_froms: u64,
    /// Successful allowance changes (approve, increase, decrease).
    pub approvals: u64,
    /// Rejected calls of any kind.
    pub failures: u64,
    /// Base units burned, including tax burned by transfers that later failed.
    pub total_burned: Amount,
    /// Base units credited to recipients.
    pub total_delivered: Amount,
}

#[derive(Clone, Copy, Debug)]
enum Operation {
    Transfer,
    TransferFrom,
    Approve,
    IncreaseAllowance,
    DecreaseAllowance,
}

impl Operation {
    #[cfg_attr(not(feature = "metrics"), allow(dead_code))]
    fn label(self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::TransferFrom => "transfer_from",
            Self::Approve => "approve",
            Self::IncreaseAllowance => "increase_allowance",
            Self::DecreaseAllowance => "decrease_allowance",
        }
    }
}

/// The main Token Service.
#[derive(Clone)]
pub struct TokenService {
    config: ServiceConfig,
    engine: Arc<Mutex<TransferEngine>>,
    stats: Arc<RwLock<ServiceStats>>,
}

impl TokenService {
    /// Construct a token and host it with the default service config.
    ///
    /// # Errors
    ///
    /// Construction errors from [`TransferEngine::new`].
    pub fn new(config: TokenConfig) -> Result<Self, TokenError> {
        Self::with_config(config, ServiceConfig::default())
    }

    /// Construct a token and host it with `service_config`.
    ///
    /// # Errors
    ///
    /// Construction errors from [`TransferEngine::new`].
    pub fn with_config(
        config: TokenConfig,
        service_config: ServiceConfig,
    ) -> Result<Self, TokenError> {
        let engine = TransferEngine::new(config)?;
        Ok(Self::from_engine(engine, service_config))
    }

    /// Host an existing engine.
    #[must_use]
    pub fn from_engine(engine: TransferEngine, config: ServiceConfig) -> Self {
        let engine = engine.with_event_capacity(config.event_capacity);
        Self {
            config,
            engine: Arc::new(Mutex::new(engine)),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Get current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Run `f` against the engine under the service lock.
    pub async fn with_engine<R>(&self, f: impl FnOnce(&TransferEngine) -> R) -> R {
        let engine = self.engine.lock().await;
        f(&engine)
    }

    /// Resolve `chain_id`, build a deployment record for this token at
    /// `address`, and append it to `registry`. Returns the record's index.
    #[instrument(skip(self, resolver, registry))]
    pub async fn register_deployment<N, D>(
        &self,
        address: Address,
        chain_id: u64,
        resolver: &N,
        registry: &D,
    ) -> (usize, DeploymentRecord)
    where
        N: NetworkResolver + ?Sized,
        D: DeploymentRegistry + ?Sized,
    {
        let network = resolver.resolve(chain_id);
        let record = {
            let engine = self.engine.lock().await;
            DeploymentRecord::new(address, engine.metadata(), &network)
        };
        let index = registry.append(record.clone()).await;
        info!(index, network = %record.network, "Token deployment registered");
        (index, record)
    }

    fn verify(&self, engine: &TransferEngine, previous_supply: Amount) {
        if !self.config.check_invariants {
            return;
        }
        for violation in check_ledger_invariants(engine.ledger(), Some(previous_supply)) {
            error!(?violation, symbol = %engine.symbol(), "Ledger invariant violated");
            #[cfg(feature = "metrics")]
            token_telemetry::record_invariant_violation();
        }
    }

    async fn record_transfer(
        &self,
        operation: Operation,
        succeeded: bool,
        burned: Amount,
        outcome: TransferOutcome,
    ) {
        let delivered = if succeeded { outcome.net } else { Amount::zero() };
        {
            let mut stats = self.stats.write().await;
            match (operation, succeeded) {
                (Operation::TransferFrom, true) => stats.transfer_froms += 1,
                (_, true) => stats.transfers += 1,
                (_, false) => stats.failures += 1,
            }
            stats.total_burned = stats.total_burned.saturating_add(burned);
            stats.total_delivered = stats.total_delivered.saturating_add(delivered);
        }

        #[cfg(feature = "metrics")]
        {
            token_telemetry::record_transfer(operation.label(), succeeded);
            token_telemetry::record_amounts(metric_value(burned), metric_value(delivered));
        }
    }

    async fn record_allowance(&self, operation: Operation, succeeded: bool) {
        {
            let mut stats = self.stats.write().await;
            if succeeded {
                stats.approvals += 1;
            } else {
                stats.failures += 1;
            }
        }
        debug!(operation = ?operation, succeeded, "Allowance update recorded");

        #[cfg(feature = "metrics")]
        token_telemetry::record_allowance_update(operation.label(), succeeded);
    }
}

/// Lossy conversion for Prometheus counters.
#[cfg(feature = "metrics")]
fn metric_value(amount: Amount) -> f64 {
    if amount.bits() <= 128 {
        amount.low_u128() as f64
    } else {
        u128::MAX as f64
    }
}

#[async_trait]
impl TokenApi for TokenService {
    #[instrument(skip(self))]
    async fn transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<bool, TokenError> {
        let mut engine = self.engine.lock().await;
        let before = engine.total_supply();
        let outcome = engine.quote(amount);

        let result = engine.transfer(sender, recipient, amount);
        if let Err(err) = &result {
            debug!(kind = err.kind(), "Transfer rejected");
        }

        let burned = before.saturating_sub(engine.total_supply());
        self.verify(&engine, before);
        self.record_transfer(Operation::Transfer, result.is_ok(), burned, outcome)
            .await;
        result
    }

    #[instrument(skip(self))]
    async fn transfer_from(
        &self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<bool, TokenError> {
        let mut engine = self.engine.lock().await;
        let before = engine.total_supply();
        let outcome = engine.quote(amount);

        let result = engine.transfer_from(spender, owner, recipient, amount);
        if let Err(err) = &result {
            debug!(kind = err.kind(), "Transfer rejected");
        }

        let burned = before.saturating_sub(engine.total_supply());
        self.verify(&engine, before);
        self.record_transfer(Operation::TransferFrom, result.is_ok(), burned, outcome)
            .await;
        result
    }

    #[instrument(skip(self))]
    async fn approve(&self, owner: Address, spender: Address, amount: Amount) {
        let mut engine = self.engine.lock().await;
        engine.approve(owner, spender, amount);
        self.record_allowance(Operation::Approve, true).await;
    }

    #[instrument(skip(self))]
    async fn increase_allowance(
        &self,
        owner: Address,
        spender: Address,
        added: Amount,
    ) -> Result<Amount, TokenError> {
        let mut engine = self.engine.lock().await;
        let result = engine.increase_allowance(owner, spender, added);
        self.record_allowance(Operation::IncreaseAllowance, result.is_ok())
            .await;
        result
    }

    #[instrument(skip(self))]
    async fn decrease_allowance(
        &self,
        owner: Address,
        spender: Address,
        subtracted: Amount,
    ) -> Result<Amount, TokenError> {
        let mut engine = self.engine.lock().await;
        let result = engine.decrease_allowance(owner, spender, subtracted);
        self.record_allowance(Operation::DecreaseAllowance, result.is_ok())
            .await;
        result
    }

    async fn balance_of(&self, account: Address) -> Amount {
        self.engine.lock().await.balance_of(&account)
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.engine.lock().await.allowance(&owner, &spender)
    }

    async fn total_supply(&self) -> Amount {
        self.engine.lock().await.total_supply()
    }

    async fn token_info(&self) -> TokenInfo {
        let engine = self.engine.lock().await;
        let metadata = engine.metadata();
        TokenInfo {
            name: metadata.name.clone(),
            symbol: metadata.symbol.clone(),
            decimals: engine.decimals(),
            tax_percentage: engine.tax_percentage(),
            owner: engine.owner(),
            website: metadata.website.clone(),
            social_link: metadata.social_link.clone(),
        }
    }

    async fn quote(&self, amount: Amount) -> TransferOutcome {
        self.engine.lock().await.quote(amount)
    }

    async fn take_events(&self) -> Vec<TokenEvent> {
        self.engine.lock().await.take_events()
    }
}

// =============================================================================
// TESTS
// =============================================================================
