//! Error definitions for the share vault contracts
use odra::prelude::*;

/// Custom errors for the share vault
#[odra::odra_error]
pub enum VaultError {
    /// A non-zero amount converted to zero on the other side of the exchange
    ZeroAmount = 1,

    /// The operation would mint or burn zero shares
    ZeroShares = 2,

    /// The operation would move zero assets
    ZeroAssets = 3,

    /// Caller is not the vault operator
    Unauthorized = 4,

    /// Balance, pool size or funding amount is insufficient for the operation
    InsufficientFunds = 5,

    /// An underlying token transfer reported failure
    TransferFailed = 6,

    /// Spender has not been approved for enough shares
    InsufficientAllowance = 7,

    /// Overflow error
    Overflow = 8,

    /// Division by zero
    DivisionByZero = 9,

    /// Locked - reentrancy guard
    Locked = 10,

    /// Contract is paused
    ContractPaused = 11,

    /// Vault was not initialized
    InvalidConfiguration = 12,

    /// Underflow error
    Underflow = 13,
}

/// Custom errors for the fungible token contract
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,

    /// Caller may not mint
    Unauthorized = 102,
}
