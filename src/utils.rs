//! Utilities for the deploy scripts.

use std::{
    fs::{self, File},
    io::Read,
    path::PathBuf,
    str::FromStr,
    sync::Arc,
};

use ethers::{
    abi::{self, Address, Token},
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use json::JsonValue;

use crate::{
    constants::{
        COIN_ABI, COIN_BYTECODE, COIN_CONTRACT_KEY, COIN_CONTRACT_NAME, COIN_QUALIFIED_NAME,
        COIN_SOURCE, COIN_VERIFICATION_CHAIN_ID, DEPLOYMENTS_KEY, GAME_ABI, GAME_BYTECODE,
        GAME_CONTRACT_KEY, GAME_CONTRACT_NAME, GAME_QUALIFIED_NAME, GAME_SOURCE,
        GAME_VERIFICATION_CHAIN_ID,
    },
    errors::ScriptError,
    types::{ContractArtifact, RpsContract},
};

/// Sets up the client with which to deploy and interact with the contracts,
/// reading in the private key and RPC url from the CLI.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.clone().with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Look up the embedded build artifact for the given contract
pub fn contract_artifact(contract: RpsContract) -> ContractArtifact {
    match contract {
        RpsContract::Coin => ContractArtifact {
            name: COIN_CONTRACT_NAME,
            abi: COIN_ABI,
            bytecode: COIN_BYTECODE,
            source: COIN_SOURCE,
            qualified_name: COIN_QUALIFIED_NAME,
            verification_chain_id: COIN_VERIFICATION_CHAIN_ID,
            deployments_key: COIN_CONTRACT_KEY,
        },
        RpsContract::Game => ContractArtifact {
            name: GAME_CONTRACT_NAME,
            abi: GAME_ABI,
            bytecode: GAME_BYTECODE,
            source: GAME_SOURCE,
            qualified_name: GAME_QUALIFIED_NAME,
            verification_chain_id: GAME_VERIFICATION_CHAIN_ID,
            deployments_key: GAME_CONTRACT_KEY,
        },
    }
}

/// Parse the deployments file as JSON
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Read the address recorded in the deployments file under the given contract key
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(
                    "could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Record a deployed address in the deployments file under the given contract key,
/// creating the file if it doesn't exist and preserving unrelated entries
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

/// ABI-encode constructor arguments the way the block explorer expects them:
/// hex without a `0x` prefix, or `None` when the constructor takes no arguments
pub fn encode_constructor_args(args: &[Token]) -> Option<String> {
    (!args.is_empty()).then(|| hex::encode(abi::encode(args)))
}

#[cfg(test)]
mod tests {
    use ethers::{
        abi::{Address, Contract, ParamType, Token},
        types::Bytes,
        utils::hex::FromHex,
    };
    use tempfile::tempdir;

    use crate::types::RpsContract;

    use super::{
        contract_artifact, encode_constructor_args, parse_addr_from_deployments_file,
        write_deployed_address,
    };

    #[test]
    fn test_coin_artifact_well_formed() {
        let artifact = contract_artifact(RpsContract::Coin);

        let abi: Contract = serde_json::from_str(artifact.abi).unwrap();
        // The coin constructor takes no arguments
        assert!(abi.constructor().unwrap().inputs.is_empty());

        Bytes::from_hex(artifact.bytecode.trim()).unwrap();
    }

    #[test]
    fn test_game_artifact_well_formed() {
        let artifact = contract_artifact(RpsContract::Game);

        let abi: Contract = serde_json::from_str(artifact.abi).unwrap();
        // The game constructor takes the coin address
        let constructor_inputs = &abi.constructor().unwrap().inputs;
        assert_eq!(constructor_inputs.len(), 1);
        assert_eq!(constructor_inputs[0].kind, ParamType::Address);

        Bytes::from_hex(artifact.bytecode.trim()).unwrap();
    }

    #[test]
    fn test_encode_constructor_args_empty() {
        assert!(encode_constructor_args(&[]).is_none());
    }

    #[test]
    fn test_encode_constructor_args_address() {
        let addr = Address::from_low_u64_be(0x42);
        let encoded = encode_constructor_args(&[Token::Address(addr)]).unwrap();

        // A single address encodes to one 32-byte word, left-padded, no 0x prefix
        assert_eq!(encoded.len(), 64);
        assert!(!encoded.starts_with("0x"));
        assert!(encoded.starts_with("000000000000000000000000"));
        assert!(encoded.ends_with("42"));
    }

    #[test]
    fn test_deployments_file_round_trip() {
        let dir = tempdir().unwrap();
        let path_buf = dir.path().join("deployments.json");
        let path = path_buf.to_str().unwrap();

        let coin_addr = Address::from_low_u64_be(1);
        write_deployed_address(path, "coin", coin_addr).unwrap();
        assert_eq!(
            parse_addr_from_deployments_file(path, "coin").unwrap(),
            coin_addr
        );

        // A second write preserves the existing entry
        let game_addr = Address::from_low_u64_be(2);
        write_deployed_address(path, "game", game_addr).unwrap();
        assert_eq!(
            parse_addr_from_deployments_file(path, "coin").unwrap(),
            coin_addr
        );
        assert_eq!(
            parse_addr_from_deployments_file(path, "game").unwrap(),
            game_addr
        );
    }

    #[test]
    fn test_missing_deployment_errors() {
        let dir = tempdir().unwrap();
        let path_buf = dir.path().join("deployments.json");
        let path = path_buf.to_str().unwrap();

        std::fs::write(path, "{}").unwrap();
        assert!(parse_addr_from_deployments_file(path, "coin").is_err());
    }
}
