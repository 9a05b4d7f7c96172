use clap::Parser;
use rps_scripts::{cli::Cli, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        etherscan_api_key,
        confirmations,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url).await?;

    command
        .run(
            client,
            &deployments_path,
            confirmations,
            etherscan_api_key.as_deref(),
        )
        .await
}
