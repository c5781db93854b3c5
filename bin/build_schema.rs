//! Binary for generating contract schemas from odra modules.
#![doc = "Binary for generating contract schemas from odra modules."]

#[allow(unused_imports)]
use share_vault_contracts;

fn main() {
    // Schema generation is driven by odra-build; this target only links the crate.
}
