use clap::Parser;
use opts::{DeployCli, DeploySubcommand};

mod cmd;
mod opts;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = DeployCli::parse();

    match args.cmd {
        DeploySubcommand::Run(cmd) => cmd.run().await,
        DeploySubcommand::Plans(cmd) => cmd.run().await,
    }
}
