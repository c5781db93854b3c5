//! Share Vault - CEP-4626 style custody vault with multi-token rewards
//!
//! Users deposit the underlying CEP-18 asset and receive shares. The operator
//! funds any number of reward tokens; each funding raises that token's
//! reward-per-share accumulator, and users claim the difference between the
//! accumulator and their last snapshot, ten tokens per call.
//!
//! Every mutating entry point updates positions, pool totals and the share
//! ledger before it calls out to a token contract, and holds the reentrancy
//! lock for the whole call.

mod claim;
mod custody;
mod hooks;

#[cfg(test)]
mod test_tokens;

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;
use crate::events::*;
use crate::ledger::PoolLedger;
use crate::math::{Conversion, RewardMath, SafeMath, ShareMath};
use crate::position::{UserPosition, UserPositions};
use crate::rewards::{RewardAccumulator, RewardInfo};
use crate::share_token::ShareToken;

/// Progress of a paginated reward sweep
#[odra::odra_type]
pub struct ClaimCursor {
    /// Registry position the call started at
    pub position: u32,
    /// Position to pass to the next call
    pub next_position: u32,
    /// Number of registered reward tokens
    pub token_count: u32,
}

/// Share Vault contract
#[odra::module(events = [
    Deposit,
    Withdraw,
    CreatedToken,
    RewardTokenRegistered,
    RewardAdded,
    RewardClaimed,
    OperatorChanged,
    VaultPaused,
    Transfer,
    Approval
])]
pub struct ShareVault {
    /// Share-representation ledger
    share_token: SubModule<ShareToken>,
    /// Pool totals
    ledger: SubModule<PoolLedger>,
    /// Reward accumulators and registry
    rewards: SubModule<RewardAccumulator>,
    /// User positions and reward snapshots
    positions: SubModule<UserPositions>,
    /// Underlying CEP-18 asset
    asset: Var<Address>,
    /// Account allowed to fund rewards and configure the vault
    operator: Var<Address>,
    /// Paused state
    paused: Var<bool>,
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl ShareVault {
    /// Initialize the vault for `asset`; the deployer becomes the operator
    pub fn init(&mut self, asset: Address, name: String, symbol: String) {
        let caller = self.env().caller();

        self.asset.set(asset);
        self.operator.set(caller);
        self.paused.set(false);
        self.locked.set(false);
        self.share_token.init(name, symbol);

        self.env().emit_event(CreatedToken {
            token_address: self.env().self_address(),
        });
    }

    // ========================================
    // Vault Metadata
    // ========================================

    /// Address of the underlying asset
    pub fn asset(&self) -> Address {
        self.asset_address()
    }

    /// Assets under custody
    pub fn total_assets(&self) -> U256 {
        self.ledger.total_assets()
    }

    /// Shares outstanding
    pub fn total_shares(&self) -> U256 {
        self.ledger.total_shares()
    }

    /// Assets `user`'s shares redeem for at the current rate
    pub fn assets_of(&self, user: Address) -> U256 {
        let shares = self.positions.shares_of(user);
        self.convert(Conversion::Redeem, shares)
    }

    /// Assets one share unit redeems for
    pub fn assets_per_share(&self) -> U256 {
        self.convert(Conversion::Redeem, U256::one())
    }

    /// Shares `assets` would be worth, rounded down
    pub fn convert_to_shares(&self, assets: U256) -> U256 {
        self.convert(Conversion::Deposit, assets)
    }

    /// Assets `shares` are worth, rounded down
    pub fn convert_to_assets(&self, shares: U256) -> U256 {
        self.convert(Conversion::Redeem, shares)
    }

    // ========================================
    // Limits
    // ========================================

    pub fn max_deposit(&self, _receiver: Address) -> U256 {
        if self.paused.get_or_default() {
            return U256::zero();
        }
        U256::MAX
    }

    pub fn max_mint(&self, _receiver: Address) -> U256 {
        if self.paused.get_or_default() {
            return U256::zero();
        }
        U256::MAX
    }

    pub fn max_withdraw(&self, owner: Address) -> U256 {
        if self.paused.get_or_default() {
            return U256::zero();
        }
        self.assets_of(owner)
    }

    pub fn max_redeem(&self, owner: Address) -> U256 {
        if self.paused.get_or_default() {
            return U256::zero();
        }
        self.positions.shares_of(owner)
    }

    // ========================================
    // Previews
    // ========================================

    /// Shares minted by depositing `assets` (rounded down)
    pub fn preview_deposit(&self, assets: U256) -> U256 {
        self.preview(Conversion::Deposit, assets)
    }

    /// Assets required to mint `shares` (rounded up)
    pub fn preview_mint(&self, shares: U256) -> U256 {
        self.preview(Conversion::Mint, shares)
    }

    /// Shares burned to withdraw `assets` (rounded up)
    pub fn preview_withdraw(&self, assets: U256) -> U256 {
        self.preview(Conversion::Withdraw, assets)
    }

    /// Assets returned for redeeming `shares` (rounded down)
    pub fn preview_redeem(&self, shares: U256) -> U256 {
        self.preview(Conversion::Redeem, shares)
    }

    // ========================================
    // Deposit / Mint
    // ========================================

    /// Deposits `assets` from the caller and credits the shares to `receiver`.
    /// Returns the shares minted.
    pub fn deposit(&mut self, assets: U256, receiver: Address) -> U256 {
        self.ensure_not_paused();
        self.lock();

        let caller = self.env().caller();
        let shares = self.convert(Conversion::Deposit, assets);
        if shares.is_zero() {
            self.env().revert(VaultError::ZeroShares);
        }

        self.enter(caller, receiver, assets, shares);

        self.unlock();
        shares
    }

    /// Mints exactly `shares` to `receiver`, pulling the required assets from
    /// the caller. Returns the assets pulled.
    pub fn mint(&mut self, shares: U256, receiver: Address) -> U256 {
        self.ensure_not_paused();
        self.lock();

        if shares.is_zero() {
            self.env().revert(VaultError::ZeroShares);
        }
        let caller = self.env().caller();
        let assets = self.convert(Conversion::Mint, shares);
        if assets.is_zero() {
            self.env().revert(VaultError::ZeroAssets);
        }

        self.enter(caller, receiver, assets, shares);

        self.unlock();
        assets
    }

    // ========================================
    // Withdraw / Redeem
    // ========================================

    /// Sends `assets` to `receiver`, burning the needed shares from `owner`.
    /// Returns the shares burned.
    pub fn withdraw(&mut self, assets: U256, receiver: Address, owner: Address) -> U256 {
        self.ensure_not_paused();
        self.lock();

        if assets.is_zero() {
            self.env().revert(VaultError::ZeroAssets);
        }
        let caller = self.env().caller();
        let shares = self.convert(Conversion::Withdraw, assets);
        if shares.is_zero() {
            self.env().revert(VaultError::ZeroShares);
        }

        self.exit(caller, receiver, owner, assets, shares);

        self.unlock();
        shares
    }

    /// Burns `shares` from `owner` and sends the assets to `receiver`.
    /// Returns the assets sent.
    pub fn redeem(&mut self, shares: U256, receiver: Address, owner: Address) -> U256 {
        self.ensure_not_paused();
        self.lock();

        let caller = self.env().caller();
        let assets = self.convert(Conversion::Redeem, shares);
        if assets.is_zero() {
            self.env().revert(VaultError::ZeroAssets);
        }

        self.exit(caller, receiver, owner, assets, shares);

        self.unlock();
        assets
    }

    // ========================================
    // Rewards
    // ========================================

    /// Funds `amount` of `token` across all current shares (operator only).
    /// The first funding of a token appends it to the reward registry.
    pub fn add_reward(&mut self, token: Address, amount: U256) {
        self.ensure_not_paused();
        self.only_operator();
        self.lock();

        let caller = self.env().caller();
        let total_shares = self.ledger.total_shares();
        let funded = self.rewards.fund(token, amount, total_shares);
        let (info, registered) = self.ok_or_revert(funded);

        if registered {
            self.env().emit_event(RewardTokenRegistered {
                token,
                position: info.position,
            });
        }

        self.pull_token(token, caller, amount);

        self.env().emit_event(RewardAdded {
            token,
            funder: caller,
            amount,
            per_share_amount: info.per_share_amount,
        });

        self.unlock();
    }

    /// Pays the caller's rewards for up to ten registered tokens starting at
    /// `start_position`
    pub fn claim_all_reward(&mut self, start_position: u32) -> ClaimCursor {
        self.ensure_not_paused();
        self.lock();

        let caller = self.env().caller();
        let cursor = self.claim_batch(caller, start_position);

        self.unlock();
        cursor
    }

    /// Reward `user` could claim for `token` right now
    pub fn pending_reward(&self, user: Address, token: Address) -> U256 {
        let shares = self.positions.shares_of(user);
        let accrued = RewardMath::accrued(
            shares,
            self.rewards.per_share_amount(token),
            self.positions.snapshot(user, token),
        );
        let pending = self.positions.pending(user, token);
        self.ok_or_revert(accrued.and_then(|owed| SafeMath::add(pending, owed)))
    }

    /// Cumulative reward per share for `token` (scaled by 1e18)
    pub fn reward_per_share(&self, token: Address) -> U256 {
        self.rewards.per_share_amount(token)
    }

    pub fn reward_info(&self, token: Address) -> RewardInfo {
        self.rewards.info(token)
    }

    pub fn reward_token_count(&self) -> u32 {
        self.rewards.token_count()
    }

    pub fn reward_token_at(&self, position: u32) -> Option<Address> {
        self.rewards.token_at(position)
    }

    // ========================================
    // Positions
    // ========================================

    pub fn position_of(&self, user: Address) -> UserPosition {
        self.positions.position(user)
    }

    /// Accumulator value recorded at `user`'s last settlement of `token`
    pub fn claim_snapshot(&self, user: Address, token: Address) -> U256 {
        self.positions.snapshot(user, token)
    }

    // ========================================
    // Share Token
    // ========================================

    pub fn name(&self) -> String {
        self.share_token.name()
    }

    pub fn symbol(&self) -> String {
        self.share_token.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.share_token.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.share_token.total_supply()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.share_token.balance_of(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.share_token.allowance(owner, spender)
    }

    /// Lets `spender` withdraw or redeem up to `shares` of the caller's shares
    pub fn approve(&mut self, spender: Address, shares: U256) {
        let owner = self.env().caller();
        self.share_token.approve(owner, spender, shares);
    }

    // ========================================
    // Admin Functions
    // ========================================

    pub fn operator(&self) -> Address {
        self.operator.get_or_revert_with(VaultError::InvalidConfiguration)
    }

    pub fn set_operator(&mut self, new_operator: Address) {
        self.only_operator();
        let previous = self.operator();
        self.operator.set(new_operator);

        self.env().emit_event(OperatorChanged {
            previous,
            operator: new_operator,
        });
    }

    pub fn pause(&mut self) {
        self.only_operator();
        self.paused.set(true);
        self.env().emit_event(VaultPaused {
            paused: true,
            by: self.env().caller(),
        });
    }

    pub fn unpause(&mut self) {
        self.only_operator();
        self.paused.set(false);
        self.env().emit_event(VaultPaused {
            paused: false,
            by: self.env().caller(),
        });
    }

    pub fn is_paused(&self) -> bool {
        self.paused.get_or_default()
    }

    fn only_operator(&self) {
        let caller = self.env().caller();
        let operator = self.operator.get_or_revert_with(VaultError::Unauthorized);
        if caller != operator {
            self.env().revert(VaultError::Unauthorized);
        }
    }

    fn ensure_not_paused(&self) {
        if self.paused.get_or_default() {
            self.env().revert(VaultError::ContractPaused);
        }
    }

    /// Reentrancy lock
    fn lock(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(VaultError::Locked);
        }
        self.locked.set(true);
    }

    /// Reentrancy unlock
    fn unlock(&mut self) {
        self.locked.set(false);
    }
}

impl ShareVault {
    fn ok_or_revert<T>(&self, result: Result<T, VaultError>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }

    fn convert(&self, kind: Conversion, amount: U256) -> U256 {
        let result = ShareMath::convert(
            kind,
            amount,
            self.ledger.total_assets(),
            self.ledger.total_shares(),
        );
        self.ok_or_revert(result)
    }

    fn preview(&self, kind: Conversion, amount: U256) -> U256 {
        let result = ShareMath::preview(
            kind,
            amount,
            self.ledger.total_assets(),
            self.ledger.total_shares(),
        );
        self.ok_or_revert(result)
    }

    /// Credits `shares` to `receiver` and takes `assets` from `caller`
    fn enter(&mut self, caller: Address, receiver: Address, assets: U256, shares: U256) {
        self.after_deposit(receiver, shares);
        self.ledger.record_deposit(assets, shares);
        self.share_token.mint(receiver, shares);

        let asset = self.asset_address();
        self.pull_token(asset, caller, assets);

        self.env().emit_event(Deposit {
            caller,
            receiver,
            asset_amount: assets,
            share_amount: shares,
        });
    }

    /// Debits `shares` from `owner` and sends `assets` to `receiver`
    fn exit(
        &mut self,
        caller: Address,
        receiver: Address,
        owner: Address,
        assets: U256,
        shares: U256,
    ) {
        if caller != owner {
            self.share_token.spend_allowance(owner, caller, shares);
        }
        self.before_withdraw(owner, shares);
        self.ledger.record_withdrawal(assets, shares);
        self.share_token.burn(owner, shares);

        let asset = self.asset_address();
        self.push_token(asset, receiver, assets);

        self.env().emit_event(Withdraw {
            owner,
            receiver,
            asset_amount: assets,
            share_amount: shares,
        });
    }
}
