//! Share conversion and reward accumulator math
//!
//! All ratio math goes through [`SafeMath::mul_div`], which takes an explicit
//! rounding direction. Deposit and redeem round down, mint and withdraw round
//! up, so rounding never moves value from the pool to a user.
use odra::casper_types::U256;
use crate::errors::VaultError;

/// Fixed-point scale of the reward-per-share accumulator (1e18)
pub const REWARD_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Number of reward tokens settled per claim call
pub const CLAIM_BATCH_SIZE: u32 = 10;

/// Rounding direction for a ratio computation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Towards zero
    Down,
    /// Away from zero whenever there is a remainder
    Up,
}

/// Safe math operations for U256
pub struct SafeMath;

impl SafeMath {
    /// Safe addition with overflow check
    pub fn add(a: U256, b: U256) -> Result<U256, VaultError> {
        a.checked_add(b).ok_or(VaultError::Overflow)
    }

    /// Safe subtraction with underflow check
    pub fn sub(a: U256, b: U256) -> Result<U256, VaultError> {
        a.checked_sub(b).ok_or(VaultError::Underflow)
    }

    /// Safe multiplication with overflow check
    pub fn mul(a: U256, b: U256) -> Result<U256, VaultError> {
        a.checked_mul(b).ok_or(VaultError::Overflow)
    }

    /// `value * numerator / denominator` rounded in the given direction
    pub fn mul_div(
        value: U256,
        numerator: U256,
        denominator: U256,
        rounding: Rounding,
    ) -> Result<U256, VaultError> {
        if denominator.is_zero() {
            return Err(VaultError::DivisionByZero);
        }
        let product = Self::mul(value, numerator)?;
        let quotient = product / denominator;
        match rounding {
            Rounding::Up if !(product % denominator).is_zero() => Self::add(quotient, U256::one()),
            _ => Ok(quotient),
        }
    }
}

/// Which vault entry point a conversion is priced for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// assets -> shares minted, rounded down
    Deposit,
    /// shares -> assets required, rounded up
    Mint,
    /// assets -> shares burned, rounded up
    Withdraw,
    /// shares -> assets returned, rounded down
    Redeem,
}

impl Conversion {
    pub fn rounding(self) -> Rounding {
        match self {
            Conversion::Deposit | Conversion::Redeem => Rounding::Down,
            Conversion::Mint | Conversion::Withdraw => Rounding::Up,
        }
    }
}

/// Stateless exchange between asset and share amounts
pub struct ShareMath;

impl ShareMath {
    /// Converts `amount` for the given entry point against the current pool totals.
    ///
    /// An empty pool prices 1:1 in both directions.
    pub fn convert(
        kind: Conversion,
        amount: U256,
        total_assets: U256,
        total_shares: U256,
    ) -> Result<U256, VaultError> {
        let rounding = kind.rounding();
        match kind {
            Conversion::Deposit | Conversion::Withdraw => {
                if total_shares.is_zero() || total_assets.is_zero() {
                    Ok(amount)
                } else {
                    SafeMath::mul_div(amount, total_shares, total_assets, rounding)
                }
            }
            Conversion::Mint | Conversion::Redeem => {
                if total_shares.is_zero() {
                    Ok(amount)
                } else {
                    SafeMath::mul_div(amount, total_assets, total_shares, rounding)
                }
            }
        }
    }

    /// Like [`ShareMath::convert`] but rejects a non-zero input that prices to zero
    pub fn preview(
        kind: Conversion,
        amount: U256,
        total_assets: U256,
        total_shares: U256,
    ) -> Result<U256, VaultError> {
        let converted = Self::convert(kind, amount, total_assets, total_shares)?;
        if converted.is_zero() && !amount.is_zero() {
            return Err(VaultError::ZeroAmount);
        }
        Ok(converted)
    }
}

/// Reward-per-share accumulator math
pub struct RewardMath;

impl RewardMath {
    pub fn precision() -> U256 {
        U256::from(REWARD_PRECISION)
    }

    /// Accumulator increase for funding `amount` across `total_shares`.
    /// The remainder of the division stays in the vault as dust.
    pub fn per_share_delta(amount: U256, total_shares: U256) -> Result<U256, VaultError> {
        SafeMath::mul_div(amount, Self::precision(), total_shares, Rounding::Down)
    }

    /// Reward owed to `shares` for the accumulator movement since `snapshot`
    pub fn accrued(shares: U256, accumulator: U256, snapshot: U256) -> Result<U256, VaultError> {
        let delta = SafeMath::sub(accumulator, snapshot)?;
        SafeMath::mul_div(shares, delta, Self::precision(), Rounding::Down)
    }

    /// Registry positions covered by a claim starting at `start`
    pub fn batch_end(start: u32, token_count: u32) -> u32 {
        if start >= token_count {
            return start;
        }
        start.saturating_add(CLAIM_BATCH_SIZE).min(token_count)
    }
}
