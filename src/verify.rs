//! Submission of deployed contracts to the block explorer's verification API

use ethers::{
    abi::{Address, Token},
    types::Chain,
};
use ethers_etherscan::{verify::VerifyContract, Client};
use tracing::{info, warn};

use crate::{
    constants::{ALREADY_VERIFIED_MARKER, OPTIMIZER_RUNS, SOLC_VERSION},
    errors::ScriptError,
    types::ContractArtifact,
    utils::encode_constructor_args,
};

/// Whether a deployment on the given chain should be submitted for verification.
///
/// Verification only makes sense on the public network the contract is gated on,
/// and requires an explorer API key. An empty key counts as absent.
pub fn should_attempt_verification(
    chain_id: u64,
    verification_chain_id: u64,
    api_key: Option<&str>,
) -> bool {
    chain_id == verification_chain_id && api_key.is_some_and(|key| !key.is_empty())
}

/// Whether an explorer response indicates the contract was previously verified
fn is_already_verified(message: &str) -> bool {
    message.to_lowercase().contains(ALREADY_VERIFIED_MARKER)
}

/// Submit the contract at the given address for verification.
///
/// Verification failures are logged and swallowed: a duplicate or failed
/// submission must not fail the deployment that triggered it.
pub async fn verify_contract(
    chain_id: u64,
    api_key: &str,
    address: Address,
    artifact: &ContractArtifact,
    constructor_args: &[Token],
) {
    info!("verifying {}...", artifact.name);

    match submit_verification(chain_id, api_key, address, artifact, constructor_args).await {
        Ok(guid) => info!("verification of {} submitted, guid: {}", artifact.name, guid),
        Err(e) if is_already_verified(&e.to_string()) => info!("{} already verified", artifact.name),
        Err(e) => warn!("failed to verify {}: {}", artifact.name, e),
    }
}

/// Submit the verification request to the explorer, returning its tracking GUID
async fn submit_verification(
    chain_id: u64,
    api_key: &str,
    address: Address,
    artifact: &ContractArtifact,
    constructor_args: &[Token],
) -> Result<String, ScriptError> {
    let chain =
        Chain::try_from(chain_id).map_err(|e| ScriptError::Verification(e.to_string()))?;
    let client =
        Client::new(chain, api_key).map_err(|e| ScriptError::Verification(e.to_string()))?;

    let verification = VerifyContract::new(
        address,
        artifact.qualified_name.to_string(),
        artifact.source.to_string(),
        SOLC_VERSION.to_string(),
    )
    .constructor_arguments(encode_constructor_args(constructor_args))
    .optimization(true)
    .runs(OPTIMIZER_RUNS);

    let response = client
        .submit_contract_verification(&verification)
        .await
        .map_err(|e| ScriptError::Verification(e.to_string()))?;

    // The explorer reports failures, duplicate verification included, in-band
    // with a "0" status rather than an HTTP error
    if response.status == "0" {
        return Err(ScriptError::Verification(response.result));
    }

    Ok(response.result)
}

#[cfg(test)]
mod tests {
    use crate::constants::{COIN_VERIFICATION_CHAIN_ID, GAME_VERIFICATION_CHAIN_ID};

    use super::{is_already_verified, should_attempt_verification};

    /// A chain ID with no verification gate attached (a local devnet)
    const DEVNET_CHAIN_ID: u64 = 31337;

    #[test]
    fn test_gating_requires_matching_chain() {
        // A non-matching chain never verifies, credential or not
        assert!(!should_attempt_verification(
            DEVNET_CHAIN_ID,
            COIN_VERIFICATION_CHAIN_ID,
            Some("key"),
        ));
        assert!(!should_attempt_verification(
            DEVNET_CHAIN_ID,
            COIN_VERIFICATION_CHAIN_ID,
            None,
        ));

        // The two contracts gate on different chains
        assert!(!should_attempt_verification(
            COIN_VERIFICATION_CHAIN_ID,
            GAME_VERIFICATION_CHAIN_ID,
            Some("key"),
        ));
    }

    #[test]
    fn test_gating_requires_credential() {
        assert!(!should_attempt_verification(
            COIN_VERIFICATION_CHAIN_ID,
            COIN_VERIFICATION_CHAIN_ID,
            None,
        ));
        // An empty key counts as absent
        assert!(!should_attempt_verification(
            COIN_VERIFICATION_CHAIN_ID,
            COIN_VERIFICATION_CHAIN_ID,
            Some(""),
        ));
        assert!(should_attempt_verification(
            COIN_VERIFICATION_CHAIN_ID,
            COIN_VERIFICATION_CHAIN_ID,
            Some("key"),
        ));
    }

    #[test]
    fn test_already_verified_is_case_insensitive() {
        assert!(is_already_verified("Contract source code already verified"));
        assert!(is_already_verified("ALREADY VERIFIED"));
        assert!(is_already_verified("Already Verified"));
    }

    #[test]
    fn test_already_verified_matches_substring() {
        assert!(is_already_verified(
            "error verifying contract: Contract source code already verified (guid: abc)"
        ));
    }

    #[test]
    fn test_other_errors_are_not_already_verified() {
        assert!(!is_already_verified("unable to locate contract code"));
        assert!(!is_already_verified("invalid api key"));
        // Containment only: reordered words don't match
        assert!(!is_already_verified("verified already"));
    }
}
