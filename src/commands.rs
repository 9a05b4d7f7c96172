//! Implementations of the deploy and verify commands

use std::{str::FromStr, sync::Arc};

use ethers::{
    abi::{Address, Contract, Token},
    contract::ContractFactory,
    providers::Middleware,
    types::Bytes,
    utils::hex::FromHex,
};
use tracing::warn;

use crate::{
    cli::{DeployGameArgs, VerifyArgs},
    constants::COIN_CONTRACT_KEY,
    errors::ScriptError,
    types::RpsContract,
    utils::{contract_artifact, parse_addr_from_deployments_file, write_deployed_address},
    verify::{should_attempt_verification, verify_contract},
};

/// Deploy the coin contract
pub async fn deploy_coin(
    client: Arc<impl Middleware>,
    deployments_path: &str,
    confirmations: usize,
    etherscan_api_key: Option<&str>,
) -> Result<(), ScriptError> {
    deploy_and_verify(
        RpsContract::Coin,
        vec![],
        client,
        deployments_path,
        confirmations,
        etherscan_api_key,
    )
    .await
}

/// Deploy the game contract, wiring it to the coin it wagers in
pub async fn deploy_game(
    args: DeployGameArgs,
    client: Arc<impl Middleware>,
    deployments_path: &str,
    confirmations: usize,
    etherscan_api_key: Option<&str>,
) -> Result<(), ScriptError> {
    let coin_address = match args.coin {
        Some(addr) => Address::from_str(&addr)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?,
        None => parse_addr_from_deployments_file(deployments_path, COIN_CONTRACT_KEY)?,
    };

    deploy_and_verify(
        RpsContract::Game,
        vec![Token::Address(coin_address)],
        client,
        deployments_path,
        confirmations,
        etherscan_api_key,
    )
    .await
}

/// Re-submit a previously recorded deployment for verification
pub async fn verify_deployment(
    args: VerifyArgs,
    client: Arc<impl Middleware>,
    deployments_path: &str,
    etherscan_api_key: Option<&str>,
) -> Result<(), ScriptError> {
    let artifact = contract_artifact(args.contract);
    let address = parse_addr_from_deployments_file(deployments_path, artifact.deployments_key)?;
    let constructor_args = match args.contract {
        RpsContract::Coin => vec![],
        RpsContract::Game => vec![Token::Address(parse_addr_from_deployments_file(
            deployments_path,
            COIN_CONTRACT_KEY,
        )?)],
    };

    let Some(api_key) = etherscan_api_key.filter(|key| !key.is_empty()) else {
        warn!("no explorer API key configured, skipping verification");
        return Ok(());
    };

    let chain_id = client
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();

    verify_contract(chain_id, api_key, address, &artifact, &constructor_args).await;

    Ok(())
}

/// Deploy the given contract with its constructor arguments, record the deployed
/// address, and submit it for verification when the chain gate and credential allow
async fn deploy_and_verify(
    contract: RpsContract,
    constructor_args: Vec<Token>,
    client: Arc<impl Middleware>,
    deployments_path: &str,
    confirmations: usize,
    etherscan_api_key: Option<&str>,
) -> Result<(), ScriptError> {
    let artifact = contract_artifact(contract);

    // Get the contract ABI and bytecode
    let abi: Contract = serde_json::from_str(artifact.abi)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = Bytes::from_hex(artifact.bytecode.trim())
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let factory = ContractFactory::new(abi, bytecode, client.clone());

    // Deploy the contract
    let deployed = factory
        .deploy_tokens(constructor_args.clone())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(confirmations)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let address = deployed.address();
    println!("{} deployed at {:#x}", artifact.name, address);

    write_deployed_address(deployments_path, artifact.deployments_key, address)?;

    let chain_id = client
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();

    if should_attempt_verification(chain_id, artifact.verification_chain_id, etherscan_api_key) {
        // Can `unwrap` here since the gate above checked that the key is present
        let api_key = etherscan_api_key.unwrap();
        verify_contract(chain_id, api_key, address, &artifact, &constructor_args).await;
    }

    Ok(())
}
