//! Aggregate pool state: assets under custody and shares outstanding
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;

/// Pool totals used by every share conversion
#[odra::module]
pub struct PoolLedger {
    /// Underlying asset held by the vault
    total_assets: Var<U256>,
    /// Sum of all position shares
    total_shares: Var<U256>,
}

#[odra::module]
impl PoolLedger {
    pub fn total_assets(&self) -> U256 {
        self.total_assets.get_or_default()
    }

    pub fn total_shares(&self) -> U256 {
        self.total_shares.get_or_default()
    }

    /// Records assets and shares entering the pool
    pub fn record_deposit(&mut self, assets: U256, shares: U256) {
        let total_assets = self
            .total_assets()
            .checked_add(assets)
            .unwrap_or_revert_with(&self.env(), VaultError::Overflow);
        let total_shares = self
            .total_shares()
            .checked_add(shares)
            .unwrap_or_revert_with(&self.env(), VaultError::Overflow);
        self.total_assets.set(total_assets);
        self.total_shares.set(total_shares);
    }

    /// Records assets and shares leaving the pool. Never goes below zero.
    pub fn record_withdrawal(&mut self, assets: U256, shares: U256) {
        let total_assets = self
            .total_assets()
            .checked_sub(assets)
            .unwrap_or_revert_with(&self.env(), VaultError::InsufficientFunds);
        let total_shares = self
            .total_shares()
            .checked_sub(shares)
            .unwrap_or_revert_with(&self.env(), VaultError::InsufficientFunds);
        self.total_assets.set(total_assets);
        self.total_shares.set(total_shares);
    }
}
