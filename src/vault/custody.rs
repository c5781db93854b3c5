//! Token movements in and out of vault custody
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::VaultError;
use crate::token::Cep18TokenContractRef;
use super::ShareVault;

impl ShareVault {
    pub(super) fn asset_address(&self) -> Address {
        self.asset.get_or_revert_with(VaultError::InvalidConfiguration)
    }

    /// Pulls `amount` of `token` from `from` into the vault (requires approval)
    pub(super) fn pull_token(&self, token: Address, from: Address, amount: U256) {
        let vault = self.env().self_address();
        let mut contract = Cep18TokenContractRef::new(self.env(), token);
        if !contract.transfer_from(from, vault, amount) {
            self.env().revert(VaultError::TransferFailed);
        }
    }

    /// Sends `amount` of `token` from the vault to `to`
    pub(super) fn push_token(&self, token: Address, to: Address, amount: U256) {
        let mut contract = Cep18TokenContractRef::new(self.env(), token);
        if !contract.transfer(to, amount) {
            self.env().revert(VaultError::TransferFailed);
        }
    }
}
