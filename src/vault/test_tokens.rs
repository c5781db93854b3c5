//! Misbehaving CEP-18 tokens for exercising the vault's failure paths
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use super::ShareVaultContractRef;

/// Token whose transfers can be switched to report failure
#[odra::module]
pub struct ToggleToken {
    balances: Mapping<Address, U256>,
    fail_transfer: Var<bool>,
    fail_transfer_from: Var<bool>,
}

#[odra::module]
impl ToggleToken {
    pub fn mint(&mut self, to: Address, amount: U256) {
        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);
    }

    pub fn set_failures(&mut self, transfer: bool, transfer_from: bool) {
        self.fail_transfer.set(transfer);
        self.fail_transfer_from.set(transfer_from);
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        if self.fail_transfer.get_or_default() {
            return false;
        }
        let caller = self.env().caller();
        self.move_balance(caller, to, amount);
        true
    }

    /// Moves funds without an allowance check
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        if self.fail_transfer_from.get_or_default() {
            return false;
        }
        self.move_balance(from, to, amount);
        true
    }

    pub fn approve(&mut self, _spender: Address, _amount: U256) -> bool {
        true
    }

    fn move_balance(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(crate::errors::TokenError::InsufficientBalance);
        }
        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
    }
}

/// Token that calls back into the vault while being pulled
#[odra::module]
pub struct ReentrantToken {
    balances: Mapping<Address, U256>,
}

#[odra::module]
impl ReentrantToken {
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn transfer(&mut self, _to: Address, _amount: U256) -> bool {
        true
    }

    /// `to` is the vault pulling the funds; deposit into it again
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let mut vault = ShareVaultContractRef::new(self.env(), to);
        vault.deposit(amount, from);
        true
    }

    pub fn approve(&mut self, _spender: Address, _amount: U256) -> bool {
        true
    }
}
