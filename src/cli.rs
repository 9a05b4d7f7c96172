//! Definitions of CLI arguments and commands for the deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy_coin, deploy_game, verify_deployment},
    constants::DEFAULT_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    types::RpsContract,
};

/// Scripts for deploying & verifying the Rock Paper Scissors contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long)]
    pub rpc_url: String,

    /// Block explorer API key, verification is skipped when unset
    #[arg(short, long, env = "ETHERSCAN_API_KEY")]
    pub etherscan_api_key: Option<String>,

    /// Number of confirmations to wait for the deployment transaction
    #[arg(short, long, env = "BLOCK_CONFIRMATIONS", default_value_t = DEFAULT_DEPLOY_CONFIRMATIONS)]
    pub confirmations: usize,

    /// Path of the deployments file in which deployed addresses are recorded
    #[arg(short, long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The subcommands of the deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the RockPaperScissorCoin contract
    DeployCoin,
    /// Deploy the RockPaperScissors game contract
    DeployGame(DeployGameArgs),
    /// Submit a recorded deployment for verification
    Verify(VerifyArgs),
}

impl Command {
    /// Run the command against the given client
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        deployments_path: &str,
        confirmations: usize,
        etherscan_api_key: Option<&str>,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployCoin => {
                deploy_coin(client, deployments_path, confirmations, etherscan_api_key).await
            }
            Command::DeployGame(args) => {
                deploy_game(
                    args,
                    client,
                    deployments_path,
                    confirmations,
                    etherscan_api_key,
                )
                .await
            }
            Command::Verify(args) => {
                verify_deployment(args, client, deployments_path, etherscan_api_key).await
            }
        }
    }
}

/// Deploy the game contract, paying out in the coin at the given address
#[derive(Args)]
pub struct DeployGameArgs {
    /// Address of the coin contract the game wagers in, read from
    /// the deployments file when omitted
    #[arg(long)]
    pub coin: Option<String>,
}

/// Verify a previously recorded deployment against the block explorer
#[derive(Args)]
pub struct VerifyArgs {
    /// The contract whose recorded deployment to verify
    #[arg(long, value_enum)]
    pub contract: RpsContract,
}
