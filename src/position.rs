//! Per-user positions and per-(user, reward token) settlement records
//!
//! Positions and snapshots live in two independent mappings. A position is
//! created on its first credit and never deleted; a position that drained to
//! zero keeps its old snapshots, which is harmless because every share change
//! settles first.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;
use crate::math::{RewardMath, SafeMath};

/// A user's claim on the pool
#[odra::odra_type]
pub struct UserPosition {
    /// Shares held
    pub shares: U256,
    /// Whether the position has ever been initialized
    pub exists: bool,
}

#[odra::module]
pub struct UserPositions {
    /// user -> position
    positions: Mapping<Address, UserPosition>,
    /// (user, token) -> accumulator value at last settlement
    snapshots: Mapping<(Address, Address), U256>,
    /// (user, token) -> reward settled but not yet paid
    pending: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl UserPositions {
    pub fn position(&self, user: Address) -> UserPosition {
        self.positions.get(&user).unwrap_or(UserPosition {
            shares: U256::zero(),
            exists: false,
        })
    }

    pub fn shares_of(&self, user: Address) -> U256 {
        self.position(user).shares
    }

    pub fn snapshot(&self, user: Address, token: Address) -> U256 {
        self.snapshots.get(&(user, token)).unwrap_or_default()
    }

    pub fn pending(&self, user: Address, token: Address) -> U256 {
        self.pending.get(&(user, token)).unwrap_or_default()
    }
}

impl UserPositions {
    /// Initializes a position at the current accumulator values so rewards
    /// funded before the first deposit are not claimable.
    pub fn open(&mut self, user: Address, accumulators: &[(Address, U256)], shares: U256) {
        for (token, per_share_amount) in accumulators {
            self.snapshots.set(&(user, *token), *per_share_amount);
        }
        self.positions.set(&user, UserPosition { shares, exists: true });
    }

    pub fn set_shares(&mut self, user: Address, shares: U256) {
        self.positions.set(&user, UserPosition { shares, exists: true });
    }

    /// Moves the reward accrued since the last snapshot into the pending
    /// balance and advances the snapshot. Returns the new pending balance.
    pub fn settle(
        &mut self,
        user: Address,
        shares: U256,
        token: Address,
        per_share_amount: U256,
    ) -> Result<U256, VaultError> {
        let key = (user, token);
        let snapshot = self.snapshot(user, token);
        let owed = RewardMath::accrued(shares, per_share_amount, snapshot)?;
        let pending = SafeMath::add(self.pending(user, token), owed)?;

        self.snapshots.set(&key, per_share_amount);
        if !owed.is_zero() {
            self.pending.set(&key, pending);
        }
        Ok(pending)
    }

    /// Zeroes and returns the pending balance
    pub fn take_pending(&mut self, user: Address, token: Address) -> U256 {
        let amount = self.pending(user, token);
        if !amount.is_zero() {
            self.pending.set(&(user, token), U256::zero());
        }
        amount
    }
}
