//! Paginated reward claims
use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::RewardClaimed;
use crate::math::RewardMath;
use super::{ClaimCursor, ShareVault};

impl ShareVault {
    /// Settles and pays `user` for the registry positions
    /// `[start, start + CLAIM_BATCH_SIZE)`.
    ///
    /// Every snapshot and pending balance in the batch is written before the
    /// first reward transfer.
    pub(super) fn claim_batch(&mut self, user: Address, start: u32) -> ClaimCursor {
        let token_count = self.rewards.token_count();
        let end = RewardMath::batch_end(start, token_count);
        let shares = self.positions.shares_of(user);

        let mut payouts: Vec<(Address, U256)> = Vec::new();
        for token in self.rewards.tokens_in(start, end) {
            let per_share_amount = self.rewards.per_share_amount(token);
            let settled = self.positions.settle(user, shares, token, per_share_amount);
            self.ok_or_revert(settled);

            let amount = self.positions.take_pending(user, token);
            if !amount.is_zero() {
                payouts.push((token, amount));
            }
        }

        for (token, amount) in payouts {
            self.push_token(token, user, amount);
            self.env().emit_event(RewardClaimed {
                user,
                token,
                amount,
            });
        }

        ClaimCursor {
            position: start,
            next_position: end,
            token_count,
        }
    }
}
