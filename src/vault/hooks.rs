//! Position updates that run on every share change
//!
//! Pending rewards are always settled against the share balance held before
//! the change, so neither a deposit nor a withdrawal alters what was already
//! earned.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;
use super::ShareVault;

impl ShareVault {
    /// Credits `shares` to `user`. A new position starts at the current
    /// accumulator values; an existing one is settled first.
    pub(super) fn after_deposit(&mut self, user: Address, shares: U256) {
        let position = self.positions.position(user);
        if !position.exists {
            let accumulators = self.accumulator_values();
            self.positions.open(user, &accumulators, shares);
            return;
        }

        self.settle_all(user, position.shares);
        let updated = position
            .shares
            .checked_add(shares)
            .unwrap_or_revert_with(&self.env(), VaultError::Overflow);
        self.positions.set_shares(user, updated);
    }

    /// Settles `user` and then debits `shares`
    pub(super) fn before_withdraw(&mut self, user: Address, shares: U256) {
        let position = self.positions.position(user);
        if position.shares < shares {
            self.env().revert(VaultError::InsufficientFunds);
        }

        self.settle_all(user, position.shares);
        self.positions.set_shares(user, position.shares - shares);
    }

    /// Checkpoints every registered reward token for `user`
    fn settle_all(&mut self, user: Address, shares: U256) {
        for (token, per_share_amount) in self.accumulator_values() {
            let settled = self.positions.settle(user, shares, token, per_share_amount);
            self.ok_or_revert(settled);
        }
    }

    fn accumulator_values(&self) -> Vec<(Address, U256)> {
        self.rewards
            .all_tokens()
            .into_iter()
            .map(|token| (token, self.rewards.per_share_amount(token)))
            .collect()
    }
}
