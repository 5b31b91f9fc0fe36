//! Contract deployer: owner-signed deployments recorded into [`RunState`].
//!
//! Each operation either records a handle bound to a confirmed on-chain
//! address or fails the run; there is no "deployed but unconfirmed" state.

use eyre::Result;
use tracing::{info, warn};

use crate::{
    chain::ChainClient,
    config::DeployConfig,
    state::{ContractHandle, RunState},
};

/// Deploy the bridge with the resolved role addresses baked into its
/// constructor. The roles are fixed at deployment and not changeable by
/// this pipeline.
pub async fn deploy_bridge<C: ChainClient + ?Sized>(chain: &C, state: &mut RunState) -> Result<()> {
    let ids = &state.identities;
    info!("deploying bridge");
    let address = chain
        .deploy_bridge(ids.bridge_signer, ids.fee_receiver, ids.bridge_operator)
        .await?;
    info!(%address, "bridge deployed");
    state.record_bridge(ContractHandle::new(address));
    Ok(())
}

/// Deploy the fixed-name test ERC-20 fee token.
pub async fn deploy_test_erc20<C: ChainClient + ?Sized>(
    chain: &C,
    state: &mut RunState,
) -> Result<()> {
    warn!("test ERC20 is for testing only, not meant for mainnet");
    info!("deploying test ERC20");
    let address = chain.deploy_test_erc20().await?;
    info!(%address, "test ERC20 deployed");
    state.record_test_erc20(ContractHandle::new(address));
    Ok(())
}

/// Deploy the test ERC-721 collection.
pub async fn deploy_test_erc721<C: ChainClient + ?Sized>(
    chain: &C,
    state: &mut RunState,
    name: &str,
    symbol: &str,
) -> Result<()> {
    warn!("test ERC721 is for testing only, not meant for mainnet");
    info!(name, symbol, "deploying test ERC721");
    let address = chain.deploy_test_erc721(name, symbol).await?;
    info!(%address, "test ERC721 deployed");
    state.record_test_erc721(ContractHandle::new(address));
    Ok(())
}

/// Composite deployment: bridge, then test ERC-20, then test ERC-721,
/// strictly in that order.
pub async fn deploy_all<C: ChainClient + ?Sized>(
    chain: &C,
    state: &mut RunState,
    config: &DeployConfig,
) -> Result<()> {
    deploy_bridge(chain, state).await?;
    deploy_test_erc20(chain, state).await?;
    deploy_test_erc721(chain, state, &config.erc721_name, &config.erc721_symbol).await?;
    Ok(())
}
