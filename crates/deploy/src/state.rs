//! Run state threaded through every pipeline operation.

use alloy_primitives::Address;
use tracing::info;

use crate::{
    error::DeployError,
    identity::{IdentitySet, NetworkContext},
};

/// Reference to a confirmed on-chain contract.
///
/// Created by a deployment or by attaching to a pre-existing address;
/// never mutated, only replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractHandle {
    address: Address,
}

impl ContractHandle {
    pub const fn new(address: Address) -> Self {
        Self { address }
    }

    pub const fn address(&self) -> Address {
        self.address
    }
}

/// Everything one run accumulates: the resolved network and identities,
/// plus the contract handles produced (or attached) so far.
///
/// Passed explicitly through each operation; there is no global state.
#[derive(Debug)]
pub struct RunState {
    pub network: NetworkContext,
    pub identities: IdentitySet,
    bridge: Option<ContractHandle>,
    test_erc20: Option<ContractHandle>,
    test_erc721: Option<ContractHandle>,
}

impl RunState {
    pub fn new(network: NetworkContext, identities: IdentitySet) -> Self {
        Self {
            network,
            identities,
            bridge: None,
            test_erc20: None,
            test_erc721: None,
        }
    }

    /// Attach to a bridge deployed in an earlier run.
    pub fn attach_bridge(&mut self, address: Address) {
        info!(%address, "attached to existing bridge");
        self.bridge = Some(ContractHandle::new(address));
    }

    pub fn record_bridge(&mut self, handle: ContractHandle) {
        self.bridge = Some(handle);
    }

    pub fn record_test_erc20(&mut self, handle: ContractHandle) {
        self.test_erc20 = Some(handle);
    }

    pub fn record_test_erc721(&mut self, handle: ContractHandle) {
        self.test_erc721 = Some(handle);
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// The bridge handle, required before any configuration call.
    pub fn bridge(&self) -> Result<ContractHandle, DeployError> {
        self.bridge.ok_or(DeployError::NoBridgeHandle)
    }

    pub fn test_erc20(&self) -> Option<ContractHandle> {
        self.test_erc20
    }

    pub fn test_erc721(&self) -> Option<ContractHandle> {
        self.test_erc721
    }
}
