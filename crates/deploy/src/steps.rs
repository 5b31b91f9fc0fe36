//! Step plans and the runner that executes them.
//!
//! A step is a symbolic name for exactly one pipeline operation; the
//! numeric ids are kept as the stable encoding operators pass on the
//! command line. A plan is an ordered, immutable list of steps; the
//! runner executes it sequentially and fail-fast.

use std::fmt;

use eyre::Result;
use tracing::info;

use crate::{
    chain::ChainClient,
    config::DeployConfig,
    deployer,
    error::DeployError,
    issuer,
    state::RunState,
};

/// One pipeline operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Deploy bridge, test ERC-20 and test ERC-721, strictly in that order.
    DeployAll,
    /// Deploy only the bridge.
    DeployBridge,
    SetNftDetails,
    SetFeeStatus,
    SetBridgeStatus,
    SetErc20Details,
}

impl Step {
    pub const ALL: [Self; 6] = [
        Self::DeployAll,
        Self::DeployBridge,
        Self::SetNftDetails,
        Self::SetFeeStatus,
        Self::SetBridgeStatus,
        Self::SetErc20Details,
    ];

    /// Stable numeric id of this step.
    pub const fn id(self) -> u8 {
        match self {
            Self::DeployAll => 0,
            Self::DeployBridge => 1,
            Self::SetNftDetails => 2,
            Self::SetFeeStatus => 3,
            Self::SetBridgeStatus => 4,
            Self::SetErc20Details => 5,
        }
    }

    pub fn from_id(id: u8) -> Result<Self, DeployError> {
        Self::ALL
            .into_iter()
            .find(|step| step.id() == id)
            .ok_or(DeployError::UnknownStepId(id))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::DeployAll => "deploy-all",
            Self::DeployBridge => "deploy-bridge",
            Self::SetNftDetails => "set-nft-details",
            Self::SetFeeStatus => "set-fee-status",
            Self::SetBridgeStatus => "set-bridge-status",
            Self::SetErc20Details => "set-erc20-details",
        }
    }

    /// Whether this step issues an operator-signed configuration call.
    pub const fn is_configuration(self) -> bool {
        matches!(
            self,
            Self::SetNftDetails | Self::SetFeeStatus | Self::SetBridgeStatus | Self::SetErc20Details
        )
    }

    /// Whether this step leaves a bridge handle in the run state.
    pub const fn provides_bridge(self) -> bool {
        matches!(self, Self::DeployAll | Self::DeployBridge)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered list of steps for one run. Immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    steps: Vec<Step>,
}

impl StepPlan {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn from_ids(ids: &[u8]) -> Result<Self, DeployError> {
        let steps = ids.iter().map(|id| Step::from_id(*id)).collect::<Result<_, _>>()?;
        Ok(Self { steps })
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Result<Self, DeployError> {
        match name {
            "deploy-all-and-configure" => Ok(Self::deploy_all_and_configure()),
            "deploy-bridge-only" => Ok(Self::deploy_bridge_only()),
            "deploy-and-configure" => Ok(Self::deploy_and_configure()),
            other => Err(DeployError::UnknownPreset(other.to_string())),
        }
    }

    pub const PRESETS: [&'static str; 3] = [
        "deploy-all-and-configure",
        "deploy-bridge-only",
        "deploy-and-configure",
    ];

    /// Deploy everything, then fully configure the fresh bridge.
    pub fn deploy_all_and_configure() -> Self {
        Self::new(vec![
            Step::DeployAll,
            Step::SetNftDetails,
            Step::SetFeeStatus,
            Step::SetBridgeStatus,
            Step::SetErc20Details,
        ])
    }

    pub fn deploy_bridge_only() -> Self {
        Self::new(vec![Step::DeployBridge])
    }

    /// Deploy the bridge (no test tokens) and fully configure it.
    pub fn deploy_and_configure() -> Self {
        Self::new(vec![
            Step::DeployBridge,
            Step::SetNftDetails,
            Step::SetFeeStatus,
            Step::SetBridgeStatus,
            Step::SetErc20Details,
        ])
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Reject plans that would fail mid-run, before any transaction is
    /// submitted: a configuration step with no bridge handle becoming
    /// available first, or configuration steps without an operator signer.
    pub fn validate(&self, state: &RunState) -> Result<(), DeployError> {
        let mut bridge_available = state.has_bridge();
        for step in &self.steps {
            if step.is_configuration() {
                if !bridge_available {
                    return Err(DeployError::NoBridgeHandle);
                }
                if state.identities.operator_signer().is_none() {
                    return Err(DeployError::OperatorSignerUnavailable);
                }
            }
            bridge_available |= step.provides_bridge();
        }
        Ok(())
    }
}

/// Execution state of the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running { current: usize, total: usize },
    Done,
    Aborted,
}

/// Executes a [`StepPlan`] against a [`ChainClient`], one step at a time.
///
/// Each step's transaction is confirmed before the next step begins; any
/// failure aborts the remaining steps.
pub struct StepRunner<'a, C: ChainClient + ?Sized> {
    chain: &'a C,
    status: RunStatus,
}

impl<'a, C: ChainClient + ?Sized> StepRunner<'a, C> {
    pub fn new(chain: &'a C) -> Self {
        Self {
            chain,
            status: RunStatus::Idle,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub async fn run(
        &mut self,
        plan: &StepPlan,
        state: &mut RunState,
        config: &DeployConfig,
    ) -> Result<()> {
        if let Err(err) = plan.validate(state) {
            self.status = RunStatus::Aborted;
            return Err(err.into());
        }

        if !plan.is_empty() {
            if let Some(delay) = state.network.settle_delay() {
                info!(
                    chain_id = state.network.chain_id,
                    seconds = delay.as_secs(),
                    "waiting for network to settle"
                );
                tokio::time::sleep(delay).await;
            }
        }

        let total = plan.len();
        for (i, step) in plan.steps().iter().copied().enumerate() {
            self.status = RunStatus::Running {
                current: i + 1,
                total,
            };
            info!(step = %step, "executing step {}/{total}", i + 1);

            if let Err(err) = self.execute(step, state, config).await {
                self.status = RunStatus::Aborted;
                return Err(err.wrap_err(format!("step `{step}` failed")));
            }
            info!(step = %step, "step done");
        }

        self.status = RunStatus::Done;
        info!("all steps done");
        Ok(())
    }

    async fn execute(&self, step: Step, state: &mut RunState, config: &DeployConfig) -> Result<()> {
        match step {
            Step::DeployAll => deployer::deploy_all(self.chain, state, config).await,
            Step::DeployBridge => deployer::deploy_bridge(self.chain, state).await,
            Step::SetNftDetails => {
                issuer::set_nft_details(self.chain, state, &config.nft.details()?).await
            }
            Step::SetFeeStatus => {
                issuer::set_fee_status(self.chain, state, config.fees_active).await
            }
            Step::SetBridgeStatus => {
                issuer::set_bridge_status(self.chain, state, config.bridge_active).await
            }
            Step::SetErc20Details => {
                issuer::set_erc20_details(self.chain, state, &config.erc20.details()).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ids_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_id(step.id()).unwrap(), step);
        }
        assert!(matches!(Step::from_id(6), Err(DeployError::UnknownStepId(6))));
    }

    #[test]
    fn test_step_ids_match_the_script_numbering() {
        assert_eq!(Step::DeployAll.id(), 0);
        assert_eq!(Step::DeployBridge.id(), 1);
        assert_eq!(Step::SetNftDetails.id(), 2);
        assert_eq!(Step::SetFeeStatus.id(), 3);
        assert_eq!(Step::SetBridgeStatus.id(), 4);
        assert_eq!(Step::SetErc20Details.id(), 5);
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            StepPlan::preset("deploy-all-and-configure").unwrap(),
            StepPlan::from_ids(&[0, 2, 3, 4, 5]).unwrap()
        );
        assert_eq!(
            StepPlan::preset("deploy-bridge-only").unwrap(),
            StepPlan::from_ids(&[1]).unwrap()
        );
        assert_eq!(
            StepPlan::preset("deploy-and-configure").unwrap(),
            StepPlan::from_ids(&[1, 2, 3, 4, 5]).unwrap()
        );
        assert!(matches!(
            StepPlan::preset("nope"),
            Err(DeployError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_every_preset_name_resolves() {
        for name in StepPlan::PRESETS {
            assert!(StepPlan::preset(name).is_ok(), "preset {name} must resolve");
        }
    }
}
