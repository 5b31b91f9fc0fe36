//! Contract bindings for the ERC-721 bridge deployment pipeline.
//!
//! The bridge and the two test tokens are compiled with Foundry; this crate
//! holds their call interfaces plus helpers for turning the compiled
//! artifacts into deployable transaction payloads. The contracts themselves
//! are administered purely through the transaction surface defined here.

pub use alloy_sol_types::sol;

mod artifacts;
mod bridge;
mod tokens;

pub use artifacts::{ContractArtifacts, deploy_code};
pub use bridge::{BRIDGE_CONTRACT, IERC721Bridge, bridge_constructor_args};
pub use tokens::{
    ITestERC20, ITestERC721, TEST_ERC20_CONTRACT, TEST_ERC721_CONTRACT, erc721_constructor_args,
};
