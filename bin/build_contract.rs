//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]

#[allow(unused_imports)]
use share_vault_contracts;

fn main() {
    // Compilation to WASM is driven by odra-build; this target only links the crate.
}
