use thiserror::Error;

/// Failure taxonomy of the pipeline.
///
/// Every variant is fatal: the run stops and surfaces the error for a
/// human operator to diagnose.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The owner identity could not be derived. Nothing can be deployed
    /// without it, so this aborts before any transaction.
    #[error("owner signer unavailable: {0}")]
    OwnerSignerUnavailable(String),

    /// A configuration step was requested but no operator signer is
    /// available to sign it.
    #[error(
        "operator signer unavailable: the plan contains configuration steps \
         but neither a local operator signer nor an operator key is configured"
    )]
    OperatorSignerUnavailable,

    /// The configured operator key does not control the configured
    /// operator address.
    #[error("operator key address {actual} does not match configured operator address {expected}")]
    OperatorKeyMismatch {
        expected: alloy_primitives::Address,
        actual: alloy_primitives::Address,
    },

    /// A configuration step was requested before the bridge contract
    /// handle exists in this run's state.
    #[error("no bridge contract handle: deploy the bridge first or configure an attach address")]
    NoBridgeHandle,

    /// A step identifier outside the fixed mapping.
    #[error("unknown step id {0}")]
    UnknownStepId(u8),

    /// A plan preset name outside the fixed set.
    #[error("unknown plan preset `{0}`")]
    UnknownPreset(String),

    /// A submitted transaction was confirmed with a failure status.
    #[error("transaction reverted: {0}")]
    Reverted(String),

    /// A deployment receipt carried no contract address.
    #[error("deployment of {0} returned no contract address")]
    MissingContractAddress(String),

    /// A fee amount overflowed when scaled to the fee token's smallest unit.
    #[error("fee amount {amount} with {decimals} decimals overflows")]
    FeeOverflow { amount: u64, decimals: u8 },
}
