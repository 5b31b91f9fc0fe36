use crate::cmd::{plans::PlansArgs, run::RunArgs};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bridge-deploy")]
#[command(version, about = "Deploy and configure the ERC-721 bridge", long_about = None)]
pub struct DeployCli {
    #[command(subcommand)]
    pub cmd: DeploySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DeploySubcommand {
    /// Execute a step plan against a network
    Run(RunArgs),

    /// List the named plan presets and their steps
    Plans(PlansArgs),
}
