//! Configuration issuer: administrative transactions against an already
//! deployed bridge.
//!
//! Every operation requires the bridge handle to exist in [`RunState`]
//! and is signed by the operator identity, keeping "who deploys" and
//! "who administers" separate.

use alloy_primitives::{Address, U256};
use eyre::Result;
use tracing::info;

use crate::{chain::ChainClient, state::RunState};

/// NFT collection registration, passed verbatim into `setNFTDetails`.
///
/// Fee amounts are already scaled to the fee token's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftDetails {
    pub is_active: bool,
    pub nft_contract: Address,
    pub fee_token: Address,
    pub deposit_fee: U256,
    pub withdraw_fee: U256,
}

/// Fee-token registration, passed verbatim into `setERC20Details`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Erc20Details {
    pub is_active: bool,
    pub erc20_contract: Address,
}

pub async fn set_nft_details<C: ChainClient + ?Sized>(
    chain: &C,
    state: &RunState,
    details: &NftDetails,
) -> Result<()> {
    let bridge = state.bridge()?;
    chain.set_nft_details(bridge.address(), details).await?;
    info!("NFT details set");
    Ok(())
}

pub async fn set_erc20_details<C: ChainClient + ?Sized>(
    chain: &C,
    state: &RunState,
    details: &Erc20Details,
) -> Result<()> {
    let bridge = state.bridge()?;
    chain.set_erc20_details(bridge.address(), details).await?;
    info!("ERC20 details set");
    Ok(())
}

pub async fn set_bridge_status<C: ChainClient + ?Sized>(
    chain: &C,
    state: &RunState,
    is_active: bool,
) -> Result<()> {
    let bridge = state.bridge()?;
    chain.set_bridge_status(bridge.address(), is_active).await?;
    info!(is_active, "bridge status set");
    Ok(())
}

pub async fn set_fee_status<C: ChainClient + ?Sized>(
    chain: &C,
    state: &RunState,
    is_active: bool,
) -> Result<()> {
    let bridge = state.bridge()?;
    chain.set_fee_status(bridge.address(), is_active).await?;
    info!(is_active, "fee status set");
    Ok(())
}
