//! Event definitions for the share vault contracts
use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when assets enter the vault through `deposit` or `mint`
#[odra::event]
pub struct Deposit {
    /// Address that paid the assets
    pub caller: Address,
    /// Address credited with the shares
    pub receiver: Address,
    /// Amount of assets pulled into custody
    pub asset_amount: U256,
    /// Amount of shares minted
    pub share_amount: U256,
}

/// Event emitted when assets leave the vault through `withdraw` or `redeem`
#[odra::event]
pub struct Withdraw {
    /// Address whose shares were burned
    pub owner: Address,
    /// Address that received the assets
    pub receiver: Address,
    /// Amount of assets paid out
    pub asset_amount: U256,
    /// Amount of shares burned
    pub share_amount: U256,
}

/// Event emitted once when the vault creates its share token
#[odra::event]
pub struct CreatedToken {
    /// Address of the share token
    pub token_address: Address,
}

/// Event emitted the first time a reward token is funded
#[odra::event]
pub struct RewardTokenRegistered {
    /// Reward token address
    pub token: Address,
    /// Stable position in the reward registry
    pub position: u32,
}

/// Event emitted when the operator funds a reward stream
#[odra::event]
pub struct RewardAdded {
    pub token: Address,
    pub funder: Address,
    pub amount: U256,
    /// Accumulator value after funding (scaled by 1e18)
    pub per_share_amount: U256,
}

/// Event emitted when a user is paid a reward
#[odra::event]
pub struct RewardClaimed {
    pub user: Address,
    pub token: Address,
    pub amount: U256,
}

/// Event emitted when the operator role moves
#[odra::event]
pub struct OperatorChanged {
    pub previous: Address,
    pub operator: Address,
}

/// Event emitted when the vault is paused or unpaused
#[odra::event]
pub struct VaultPaused {
    pub paused: bool,
    pub by: Address,
}

/// Event emitted when tokens are transferred, minted or burned
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when approval is granted
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: U256,
}
