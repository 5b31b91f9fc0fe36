use std::path::PathBuf;

use alloy::providers::ProviderBuilder;
use alloy_primitives::Address;
use bridge_contracts::ContractArtifacts;
use bridge_deploy::{
    DeployConfig, RpcChainClient, RunState, StepPlan, StepRunner, resolve,
};
use clap::Parser;
use eyre::Result;
use tracing::info;

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the deploy config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RPC URL (overrides config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Named plan preset to execute
    #[arg(long, default_value = "deploy-all-and-configure")]
    plan: String,

    /// Explicit comma-separated step ids, taking precedence over --plan
    #[arg(long, value_delimiter = ',')]
    steps: Option<Vec<u8>>,

    /// Attach to a bridge deployed in an earlier run (overrides config)
    #[arg(long)]
    bridge_address: Option<Address>,

    /// Directory of forge-built artifacts (overrides config)
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,
}

impl RunArgs {
    pub async fn run(self) -> Result<()> {
        let mut config = match &self.config {
            Some(path) => DeployConfig::load(path)?,
            None => {
                info!("no config file given, using dev defaults");
                DeployConfig::default()
            }
        };
        if let Some(rpc_url) = self.rpc_url {
            config.rpc_url = rpc_url;
        }
        if let Some(artifacts_dir) = self.artifacts_dir {
            config.artifacts_dir = artifacts_dir;
        }
        if let Some(bridge_address) = self.bridge_address {
            config.bridge_address = Some(bridge_address);
        }

        let plan = match &self.steps {
            Some(ids) => StepPlan::from_ids(ids)?,
            None => StepPlan::preset(&self.plan)?,
        };

        let probe = ProviderBuilder::new().connect(&config.rpc_url).await?;
        let (network, identities) = resolve(&probe, &config.signers).await?;

        let chain = RpcChainClient::connect(
            &config.rpc_url,
            &identities,
            ContractArtifacts::new(&config.artifacts_dir),
        )
        .await?;

        let mut state = RunState::new(network, identities);
        if let Some(address) = config.bridge_address {
            state.attach_bridge(address);
        }

        let mut runner = StepRunner::new(&chain);
        runner.run(&plan, &mut state, &config).await?;

        if let Ok(bridge) = state.bridge() {
            info!(address = %bridge.address(), "bridge ready");
        }
        Ok(())
    }
}
