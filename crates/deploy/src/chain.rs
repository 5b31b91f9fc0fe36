//! Chain access for the pipeline.
//!
//! [`ChainClient`] is the seam between the pipeline's sequencing logic and
//! the node it runs against; [`RpcChainClient`] is the production
//! implementation backed by alloy wallet providers. Every method submits at
//! most one transaction and returns only once that transaction is
//! confirmed, so callers observe strictly serialized on-chain effects.

use alloy::{
    network::{EthereumWallet, TransactionBuilder as _},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use bridge_contracts::{
    BRIDGE_CONTRACT, ContractArtifacts, IERC721Bridge, TEST_ERC20_CONTRACT, TEST_ERC721_CONTRACT,
    bridge_constructor_args, deploy_code, erc721_constructor_args,
};
use eyre::{Result, WrapErr as _};
use tracing::{debug, info};

use crate::{
    error::DeployError,
    identity::IdentitySet,
    issuer::{Erc20Details, NftDetails},
};

/// Transaction surface the pipeline needs from a chain.
///
/// Deployments are signed by the owner identity, configuration calls by
/// the operator identity.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Deploy the bridge with its three role-bearing constructor
    /// addresses and return the confirmed contract address.
    async fn deploy_bridge(
        &self,
        bridge_signer: Address,
        fee_receiver: Address,
        operator: Address,
    ) -> Result<Address>;

    /// Deploy the fixed-name test ERC-20 fee token.
    async fn deploy_test_erc20(&self) -> Result<Address>;

    /// Deploy the test ERC-721 collection with the given display name
    /// and symbol.
    async fn deploy_test_erc721(&self, name: &str, symbol: &str) -> Result<Address>;

    async fn set_nft_details(&self, bridge: Address, details: &NftDetails) -> Result<()>;

    async fn set_erc20_details(&self, bridge: Address, details: &Erc20Details) -> Result<()>;

    async fn set_bridge_status(&self, bridge: Address, is_active: bool) -> Result<()>;

    async fn set_fee_status(&self, bridge: Address, is_active: bool) -> Result<()>;
}

/// Provider type with wallet filler
type WalletProvider = alloy::providers::fillers::FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::fillers::JoinFill<
            alloy::providers::Identity,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::GasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::BlobGasFiller,
                    alloy::providers::fillers::JoinFill<
                        alloy::providers::fillers::NonceFiller,
                        alloy::providers::fillers::ChainIdFiller,
                    >,
                >,
            >,
        >,
        alloy::providers::fillers::WalletFiller<EthereumWallet>,
    >,
    alloy::providers::RootProvider,
>;

/// [`ChainClient`] backed by an EVM JSON-RPC endpoint.
///
/// Holds one wallet provider per signing identity: deployments go out
/// through the owner's, configuration calls through the operator's.
pub struct RpcChainClient {
    owner_provider: WalletProvider,
    operator_provider: Option<WalletProvider>,
    artifacts: ContractArtifacts,
}

impl RpcChainClient {
    /// Connect to `rpc_url` with the resolved identities.
    ///
    /// The operator provider is only built when an operator signer is
    /// available; plans without configuration steps do not need one.
    pub async fn connect(
        rpc_url: &str,
        identities: &IdentitySet,
        artifacts: ContractArtifacts,
    ) -> Result<Self> {
        let owner_provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(identities.owner.clone()))
            .connect(rpc_url)
            .await
            .wrap_err_with(|| format!("failed to connect to {rpc_url}"))?;

        let operator_provider = match identities.operator_signer() {
            Some(operator) => Some(
                ProviderBuilder::new()
                    .wallet(EthereumWallet::from(operator.clone()))
                    .connect(rpc_url)
                    .await
                    .wrap_err_with(|| format!("failed to connect to {rpc_url}"))?,
            ),
            None => None,
        };

        Ok(Self {
            owner_provider,
            operator_provider,
            artifacts,
        })
    }

    fn operator_provider(&self) -> Result<&WalletProvider, DeployError> {
        self.operator_provider
            .as_ref()
            .ok_or(DeployError::OperatorSignerUnavailable)
    }

    /// Submit a deployment signed by the owner and wait for confirmation.
    async fn deploy(&self, contract: &str, constructor_args: Vec<u8>) -> Result<Address> {
        let bytecode = self.artifacts.bytecode(contract)?;
        let code = deploy_code(bytecode, constructor_args);

        let tx = TransactionRequest::default().with_deploy_code(code);
        let receipt = self
            .owner_provider
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;

        if !receipt.status() {
            return Err(DeployError::Reverted(format!("deployment of {contract}")).into());
        }
        let address = receipt
            .contract_address
            .ok_or_else(|| DeployError::MissingContractAddress(contract.to_string()))?;

        debug!(tx_hash = %receipt.transaction_hash, contract, %address, "deployment confirmed");
        Ok(address)
    }

    /// Submit a configuration call signed by the operator and wait for
    /// confirmation.
    async fn configure(&self, bridge: Address, input: Vec<u8>, what: &str) -> Result<()> {
        let tx = TransactionRequest::default().to(bridge).input(input.into());
        let receipt = self
            .operator_provider()?
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;

        if !receipt.status() {
            return Err(DeployError::Reverted(what.to_string()).into());
        }

        debug!(tx_hash = %receipt.transaction_hash, what, "configuration call confirmed");
        Ok(())
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn deploy_bridge(
        &self,
        bridge_signer: Address,
        fee_receiver: Address,
        operator: Address,
    ) -> Result<Address> {
        let args = bridge_constructor_args(bridge_signer, fee_receiver, operator);
        self.deploy(BRIDGE_CONTRACT, args).await
    }

    async fn deploy_test_erc20(&self) -> Result<Address> {
        self.deploy(TEST_ERC20_CONTRACT, Vec::new()).await
    }

    async fn deploy_test_erc721(&self, name: &str, symbol: &str) -> Result<Address> {
        self.deploy(TEST_ERC721_CONTRACT, erc721_constructor_args(name, symbol))
            .await
    }

    async fn set_nft_details(&self, bridge: Address, details: &NftDetails) -> Result<()> {
        let call = IERC721Bridge::setNFTDetailsCall {
            isActive: details.is_active,
            nftContractAddress: details.nft_contract,
            feeTokenAddress: details.fee_token,
            depositFeeAmount: details.deposit_fee,
            withdrawFeeAmount: details.withdraw_fee,
        };
        info!(
            nft = %details.nft_contract,
            fee_token = %details.fee_token,
            "setting NFT details"
        );
        self.configure(bridge, call.abi_encode(), "setNFTDetails").await
    }

    async fn set_erc20_details(&self, bridge: Address, details: &Erc20Details) -> Result<()> {
        let call = IERC721Bridge::setERC20DetailsCall {
            isActive: details.is_active,
            erc20ContractAddress: details.erc20_contract,
        };
        info!(erc20 = %details.erc20_contract, "setting ERC20 details");
        self.configure(bridge, call.abi_encode(), "setERC20Details").await
    }

    async fn set_bridge_status(&self, bridge: Address, is_active: bool) -> Result<()> {
        let call = IERC721Bridge::setBridgeStatusCall { isActive: is_active };
        info!(is_active, "setting bridge status");
        self.configure(bridge, call.abi_encode(), "setBridgeStatus").await
    }

    async fn set_fee_status(&self, bridge: Address, is_active: bool) -> Result<()> {
        let call = IERC721Bridge::setFeeStatusCall { isActive: is_active };
        info!(is_active, "setting fee status");
        self.configure(bridge, call.abi_encode(), "setFeeStatus").await
    }
}
