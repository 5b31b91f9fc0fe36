//! Run configuration.
//!
//! A TOML file (plus CLI overrides) carries everything one run needs:
//! the RPC endpoint, the signer configuration, the configuration-call
//! parameters, and an optional pre-existing bridge address to attach to.
//! Defaults target a local dev node.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy_primitives::{Address, U256, address};
use eyre::WrapErr as _;
use serde::{Deserialize, Serialize};

use crate::{
    error::DeployError,
    identity::SignerConfig,
    issuer::{Erc20Details, NftDetails},
};

/// Configuration of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub rpc_url: String,
    /// Directory of forge-built artifacts (`out/` of the contracts build).
    pub artifacts_dir: PathBuf,
    pub signers: SignerConfig,
    /// Bridge deployed in an earlier run to attach to, if any.
    pub bridge_address: Option<Address>,
    pub nft: NftDetailsConfig,
    pub erc20: Erc20DetailsConfig,
    pub bridge_active: bool,
    pub fees_active: bool,
    pub erc721_name: String,
    pub erc721_symbol: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            artifacts_dir: PathBuf::from("contracts/out"),
            signers: SignerConfig::default(),
            bridge_address: None,
            nft: NftDetailsConfig::default(),
            erc20: Erc20DetailsConfig::default(),
            bridge_active: true,
            fees_active: true,
            erc721_name: "Test NFT".to_string(),
            erc721_symbol: "TNFT".to_string(),
        }
    }
}

impl DeployConfig {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&raw)
            .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}

/// `setNFTDetails` parameters as configured: fee amounts in whole tokens,
/// scaled by `fee_token_decimals` when the transaction is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftDetailsConfig {
    pub is_active: bool,
    pub nft_contract: Address,
    pub fee_token: Address,
    pub fee_token_decimals: u8,
    pub deposit_fee: u64,
    pub withdraw_fee: u64,
}

impl Default for NftDetailsConfig {
    fn default() -> Self {
        Self {
            is_active: true,
            nft_contract: address!("3b2fce233711a3178e88d64ec2b6746847b7161e"),
            fee_token: address!("9828739b8450112f15fb340416c53e0ea7679c1a"),
            fee_token_decimals: 18,
            deposit_fee: 1000,
            withdraw_fee: 1000,
        }
    }
}

impl NftDetailsConfig {
    pub fn details(&self) -> Result<NftDetails, DeployError> {
        Ok(NftDetails {
            is_active: self.is_active,
            nft_contract: self.nft_contract,
            fee_token: self.fee_token,
            deposit_fee: scale_fee(self.deposit_fee, self.fee_token_decimals)?,
            withdraw_fee: scale_fee(self.withdraw_fee, self.fee_token_decimals)?,
        })
    }
}

/// `setERC20Details` parameters as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Erc20DetailsConfig {
    pub is_active: bool,
    pub erc20_contract: Address,
}

impl Default for Erc20DetailsConfig {
    fn default() -> Self {
        Self {
            is_active: true,
            erc20_contract: address!("9828739b8450112f15fb340416c53e0ea7679c1a"),
        }
    }
}

impl Erc20DetailsConfig {
    pub fn details(&self) -> Erc20Details {
        Erc20Details {
            is_active: self.is_active,
            erc20_contract: self.erc20_contract,
        }
    }
}

/// Scale a whole-token fee amount into the fee token's smallest unit.
fn scale_fee(amount: u64, decimals: u8) -> Result<U256, DeployError> {
    let overflow = DeployError::FeeOverflow { amount, decimals };
    let unit = U256::from(10u8)
        .checked_pow(U256::from(decimals))
        .ok_or(overflow)?;
    U256::from(amount)
        .checked_mul(unit)
        .ok_or(DeployError::FeeOverflow { amount, decimals })
}
