#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

pub mod errors;
pub mod events;
pub mod math;

// CEP-18 tokens: deployable fungible token and the vault's share ledger
pub mod token;
pub mod share_token;

// Vault state components
pub mod ledger;
pub mod position;
pub mod rewards;

// Share vault with multi-token reward distribution
pub mod vault;
