//! Test fixtures for pipeline tests.
//!
//! [`MockChainClient`] implements the chain seam in memory: it records
//! every call in submission order and hands out deterministic addresses,
//! so tests can assert on exact sequencing without a node.

use std::sync::{
    Mutex,
    atomic::{AtomicU8, Ordering},
};

use alloy_primitives::Address;
use async_trait::async_trait;
use eyre::{Result, eyre};

use crate::{
    chain::ChainClient,
    config::DeployConfig,
    identity::{DEV_CHAIN_ID, NetworkContext, SignerConfig, resolve_identities},
    issuer::{Erc20Details, NftDetails},
    state::RunState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ChainCall {
    DeployBridge {
        bridge_signer: Address,
        fee_receiver: Address,
        operator: Address,
    },
    DeployTestErc20,
    DeployTestErc721 {
        name: String,
        symbol: String,
    },
    SetNftDetails {
        bridge: Address,
        details: NftDetails,
    },
    SetErc20Details {
        bridge: Address,
        details: Erc20Details,
    },
    SetBridgeStatus {
        bridge: Address,
        is_active: bool,
    },
    SetFeeStatus {
        bridge: Address,
        is_active: bool,
    },
}

#[derive(Default)]
pub(super) struct MockChainClient {
    calls: Mutex<Vec<ChainCall>>,
    next_address: AtomicU8,
    pub(super) fail_deploy_test_erc20: bool,
    pub(super) fail_set_bridge_status: bool,
}

impl MockChainClient {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Mock whose test-ERC20 deployment is rejected by the node.
    pub(super) fn failing_test_erc20() -> Self {
        Self {
            fail_deploy_test_erc20: true,
            ..Self::default()
        }
    }

    /// Mock whose `setBridgeStatus` call reverts.
    pub(super) fn failing_bridge_status() -> Self {
        Self {
            fail_set_bridge_status: true,
            ..Self::default()
        }
    }

    pub(super) fn calls(&self) -> Vec<ChainCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ChainCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_address(&self) -> Address {
        let n = self.next_address.fetch_add(1, Ordering::SeqCst) + 1;
        Address::repeat_byte(n)
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn deploy_bridge(
        &self,
        bridge_signer: Address,
        fee_receiver: Address,
        operator: Address,
    ) -> Result<Address> {
        self.record(ChainCall::DeployBridge {
            bridge_signer,
            fee_receiver,
            operator,
        });
        Ok(self.next_address())
    }

    async fn deploy_test_erc20(&self) -> Result<Address> {
        self.record(ChainCall::DeployTestErc20);
        if self.fail_deploy_test_erc20 {
            return Err(eyre!("deployment rejected by node"));
        }
        Ok(self.next_address())
    }

    async fn deploy_test_erc721(&self, name: &str, symbol: &str) -> Result<Address> {
        self.record(ChainCall::DeployTestErc721 {
            name: name.to_string(),
            symbol: symbol.to_string(),
        });
        Ok(self.next_address())
    }

    async fn set_nft_details(&self, bridge: Address, details: &NftDetails) -> Result<()> {
        self.record(ChainCall::SetNftDetails {
            bridge,
            details: details.clone(),
        });
        Ok(())
    }

    async fn set_erc20_details(&self, bridge: Address, details: &Erc20Details) -> Result<()> {
        self.record(ChainCall::SetErc20Details {
            bridge,
            details: *details,
        });
        Ok(())
    }

    async fn set_bridge_status(&self, bridge: Address, is_active: bool) -> Result<()> {
        self.record(ChainCall::SetBridgeStatus { bridge, is_active });
        if self.fail_set_bridge_status {
            return Err(eyre!("execution reverted: caller is not the operator"));
        }
        Ok(())
    }

    async fn set_fee_status(&self, bridge: Address, is_active: bool) -> Result<()> {
        self.record(ChainCall::SetFeeStatus { bridge, is_active });
        Ok(())
    }
}

pub(super) fn dev_state() -> RunState {
    dev_state_with(&SignerConfig::default())
}

pub(super) fn dev_state_with(signers: &SignerConfig) -> RunState {
    let identities = resolve_identities(signers).expect("test signer config must resolve");
    RunState::new(NetworkContext::new(DEV_CHAIN_ID), identities)
}

pub(super) fn test_config() -> DeployConfig {
    DeployConfig::default()
}
