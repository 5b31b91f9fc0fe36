//! Sequenced deployment and configuration pipeline for the ERC-721 bridge.
//!
//! The pipeline resolves the operator's signing identities, deploys the
//! bridge (and optionally two auxiliary test tokens), then issues the
//! administrative transactions that bring the bridge into an operational
//! state. Steps run strictly in order; every transaction is confirmed
//! before the next one is submitted, and any failure aborts the run.
//!
//! This is an operator-supervised batch tool, not a service: there is no
//! retry, rollback, or partial-failure recovery. Contracts deployed before
//! an abort stay on chain, unreferenced.

pub mod chain;
pub mod config;
pub mod deployer;
pub mod error;
pub mod identity;
pub mod issuer;
pub mod state;
pub mod steps;

#[cfg(test)]
mod tests;

pub use chain::{ChainClient, RpcChainClient};
pub use config::DeployConfig;
pub use error::DeployError;
pub use identity::{IdentitySet, NetworkContext, SignerConfig, resolve};
pub use issuer::{Erc20Details, NftDetails};
pub use state::{ContractHandle, RunState};
pub use steps::{RunStatus, Step, StepPlan, StepRunner};
