//! Share-representation ledger embedded in the vault
//!
//! Balances mirror `UserPosition::shares`. Shares are minted and burned only by
//! the vault and cannot move between accounts; the allowance table exists so an
//! owner can let another account withdraw on their behalf.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;
use crate::events::{Approval, Transfer};

/// CEP-18 style share ledger
#[odra::module]
pub struct ShareToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of shares
    total_supply: Var<U256>,
    /// Balance mapping: owner -> shares
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> shares
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl ShareToken {
    pub fn init(&mut self, name: String, symbol: String) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(18);
        self.total_supply.set(U256::zero());
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Sets the number of `owner`'s shares `spender` may withdraw
    pub fn approve(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);
        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }

    /// Reduces the allowance; reverts when it does not cover `amount`
    pub fn spend_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        let current = self.allowance(owner, spender);
        if current < amount {
            self.env().revert(VaultError::InsufficientAllowance);
        }
        self.allowances.set(&(owner, spender), current - amount);
    }

    pub fn mint(&mut self, to: Address, amount: U256) {
        let supply = self.total_supply();
        let new_supply = supply
            .checked_add(amount)
            .unwrap_or_revert_with(&self.env(), VaultError::Overflow);
        self.total_supply.set(new_supply);

        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);

        self.env().emit_event(Transfer {
            from: self.env().self_address(),
            to,
            value: amount,
        });
    }

    pub fn burn(&mut self, from: Address, amount: U256) {
        let balance = self.balance_of(from);
        if balance < amount {
            self.env().revert(VaultError::InsufficientFunds);
        }
        self.balances.set(&from, balance - amount);

        let supply = self.total_supply();
        self.total_supply.set(supply - amount);

        self.env().emit_event(Transfer {
            from,
            to: self.env().self_address(),
            value: amount,
        });
    }
}
