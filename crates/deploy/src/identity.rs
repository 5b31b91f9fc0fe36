//! Identity resolution: the operating network and the signing identities
//! behind each bridge role.

use std::time::Duration;

use alloy::{
    providers::Provider,
    signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
};
use alloy_primitives::{Address, address};
use eyre::WrapErr as _;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DeployError;

/// Chain id of the local development network. Every other chain id is
/// treated as a real network and incurs [`SETTLE_DELAY`].
pub const DEV_CHAIN_ID: u64 = 31337;

/// Wait observed before the first transaction on non-dev networks, to
/// tolerate slower block propagation.
pub const SETTLE_DELAY: Duration = Duration::from_secs(6);

/// Mnemonic signer slots, in the fixed order the pipeline assigns roles.
const OWNER_INDEX: u32 = 0;
const BRIDGE_SIGNER_INDEX: u32 = 1;
const OPERATOR_INDEX: u32 = 2;
const FEE_RECEIVER_INDEX: u32 = 3;

/// The network a run operates against. Derived once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkContext {
    pub chain_id: u64,
}

impl NetworkContext {
    pub const fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }

    pub const fn is_dev(&self) -> bool {
        self.chain_id == DEV_CHAIN_ID
    }

    /// Settling delay to observe before the first transaction, if any.
    pub fn settle_delay(&self) -> Option<Duration> {
        if self.is_dev() { None } else { Some(SETTLE_DELAY) }
    }
}

/// Role addresses used when local signer derivation is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressOverrides {
    pub bridge_signer: Address,
    pub bridge_operator: Address,
    pub fee_receiver: Address,
}

impl Default for AddressOverrides {
    fn default() -> Self {
        Self {
            bridge_signer: address!("9d35ab5d6fb6c7e57e12262a02d3de510746d306"),
            bridge_operator: address!("24142eb9dbbbc7d71094c9c0e3c088c10ff2f2a6"),
            fee_receiver: address!("125260110d678e57275e0d21a030b20ce6ff8e0e"),
        }
    }
}

/// How signing identities are acquired.
///
/// With `use_local_signers` the bridge-signer/operator/fee-receiver roles
/// are derived from `mnemonic` at their fixed slot indices. Without it the
/// role addresses come from `overrides`, which makes running against a
/// production deployment an explicit, audited choice instead of a silent
/// fallback; `operator_key` must then be supplied for any plan that issues
/// configuration transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    pub mnemonic: String,
    pub use_local_signers: bool,
    pub overrides: AddressOverrides,
    pub operator_key: Option<String>,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            mnemonic: "test test test test test test test test test test test junk".to_string(),
            use_local_signers: true,
            overrides: AddressOverrides::default(),
            operator_key: None,
        }
    }
}

/// The resolved signing identities of one run. Built once, read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct IdentitySet {
    /// Signs every deployment transaction.
    pub owner: PrivateKeySigner,
    pub bridge_signer: Address,
    pub bridge_operator: Address,
    pub fee_receiver: Address,
    operator_signer: Option<PrivateKeySigner>,
}

impl IdentitySet {
    pub fn owner_address(&self) -> Address {
        self.owner.address()
    }

    /// Signer for configuration transactions, if one is available.
    pub fn operator_signer(&self) -> Option<&PrivateKeySigner> {
        self.operator_signer.as_ref()
    }
}

/// Resolve the operating network and the signing identities.
///
/// Queries the chain id through `provider` and derives identities from
/// `config`. Owner derivation failure is fatal; every later operation
/// requires it.
pub async fn resolve<P: Provider>(
    provider: &P,
    config: &SignerConfig,
) -> eyre::Result<(NetworkContext, IdentitySet)> {
    let chain_id = provider
        .get_chain_id()
        .await
        .wrap_err("failed to query chain id")?;
    let network = NetworkContext::new(chain_id);
    info!(chain_id, "running against network");

    let identities = resolve_identities(config)?;
    info!(
        owner = %identities.owner_address(),
        bridge_signer = %identities.bridge_signer,
        bridge_operator = %identities.bridge_operator,
        fee_receiver = %identities.fee_receiver,
        local_signers = config.use_local_signers,
        "resolved identities"
    );

    Ok((network, identities))
}

/// Derive the identity set from configuration alone.
pub fn resolve_identities(config: &SignerConfig) -> eyre::Result<IdentitySet> {
    let owner = signer_at(&config.mnemonic, OWNER_INDEX)
        .map_err(|err| DeployError::OwnerSignerUnavailable(err.to_string()))?;

    if config.use_local_signers {
        let bridge_signer = signer_at(&config.mnemonic, BRIDGE_SIGNER_INDEX)?;
        let operator = signer_at(&config.mnemonic, OPERATOR_INDEX)?;
        let fee_receiver = signer_at(&config.mnemonic, FEE_RECEIVER_INDEX)?;

        return Ok(IdentitySet {
            owner,
            bridge_signer: bridge_signer.address(),
            bridge_operator: operator.address(),
            fee_receiver: fee_receiver.address(),
            operator_signer: Some(operator),
        });
    }

    let overrides = &config.overrides;
    let operator_signer = config
        .operator_key
        .as_deref()
        .map(|key| key.parse::<PrivateKeySigner>())
        .transpose()
        .wrap_err("invalid operator key")?;

    if let Some(signer) = &operator_signer {
        if signer.address() != overrides.bridge_operator {
            return Err(DeployError::OperatorKeyMismatch {
                expected: overrides.bridge_operator,
                actual: signer.address(),
            }
            .into());
        }
    }

    Ok(IdentitySet {
        owner,
        bridge_signer: overrides.bridge_signer,
        bridge_operator: overrides.bridge_operator,
        fee_receiver: overrides.fee_receiver,
        operator_signer,
    })
}

fn signer_at(mnemonic: &str, index: u32) -> eyre::Result<PrivateKeySigner> {
    let signer = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .index(index)?
        .build()?;
    Ok(signer)
}
