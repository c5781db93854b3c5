//! Reward-per-share accumulators and the ordered reward token registry
//!
//! Funding a token raises its accumulator by `amount * 1e18 / total_shares`.
//! Nothing here touches user records, so funding costs the same regardless of
//! how many depositors exist.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;
use crate::math::{RewardMath, SafeMath};

/// Accumulator state of one reward token
#[odra::odra_type]
pub struct RewardInfo {
    /// Cumulative reward per share (scaled by 1e18)
    pub per_share_amount: U256,
    /// Total amount funded into this stream
    pub total_funded: U256,
    /// Position in the registry
    pub position: u32,
    /// Whether the token has been registered
    pub exists: bool,
}

/// Per-token accumulators plus the append-only registry
#[odra::module]
pub struct RewardAccumulator {
    /// token -> accumulator state
    rewards: Mapping<Address, RewardInfo>,
    /// Registry (for iteration) - stored as mapping
    token_list: Mapping<u32, Address>,
    /// Number of registered tokens
    token_count: Var<u32>,
}

#[odra::module]
impl RewardAccumulator {
    pub fn info(&self, token: Address) -> RewardInfo {
        self.rewards.get(&token).unwrap_or(RewardInfo {
            per_share_amount: U256::zero(),
            total_funded: U256::zero(),
            position: 0,
            exists: false,
        })
    }

    pub fn per_share_amount(&self, token: Address) -> U256 {
        self.info(token).per_share_amount
    }

    pub fn token_count(&self) -> u32 {
        self.token_count.get_or_default()
    }

    pub fn token_at(&self, position: u32) -> Option<Address> {
        self.token_list.get(&position)
    }

    /// Tokens registered at positions `[start, end)`
    pub fn tokens_in(&self, start: u32, end: u32) -> Vec<Address> {
        let mut tokens = Vec::new();
        for position in start..end {
            if let Some(token) = self.token_list.get(&position) {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Every registered token in registration order
    pub fn all_tokens(&self) -> Vec<Address> {
        self.tokens_in(0, self.token_count())
    }
}

impl RewardAccumulator {
    /// Raises `token`'s accumulator for `amount` spread over `total_shares`.
    ///
    /// Returns the updated state and whether this call registered the token.
    pub fn fund(
        &mut self,
        token: Address,
        amount: U256,
        total_shares: U256,
    ) -> Result<(RewardInfo, bool), VaultError> {
        if amount.is_zero() || total_shares.is_zero() {
            return Err(VaultError::InsufficientFunds);
        }
        let delta = RewardMath::per_share_delta(amount, total_shares)?;
        if delta.is_zero() {
            return Err(VaultError::ZeroAmount);
        }

        let mut info = self.info(token);
        let registered = !info.exists;
        if registered {
            let position = self.token_count();
            self.token_list.set(&position, token);
            self.token_count.set(position + 1);
            info.position = position;
            info.exists = true;
        }

        info.per_share_amount = SafeMath::add(info.per_share_amount, delta)?;
        info.total_funded = SafeMath::add(info.total_funded, amount)?;
        self.rewards.set(&token, info.clone());
        Ok((info, registered))
    }
}
