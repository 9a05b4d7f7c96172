//! Constants used in the deploy scripts

/// The ABI of the RockPaperScissorCoin contract
pub const COIN_ABI: &str = include_str!("../artifacts/RockPaperScissorCoin.abi");

/// The deployment bytecode of the RockPaperScissorCoin contract
pub const COIN_BYTECODE: &str = include_str!("../artifacts/RockPaperScissorCoin.bin");

/// The flattened source of the RockPaperScissorCoin contract,
/// submitted to the block explorer for verification
pub const COIN_SOURCE: &str = include_str!("../artifacts/RockPaperScissorCoin.sol");

/// The ABI of the RockPaperScissors contract
pub const GAME_ABI: &str = include_str!("../artifacts/RockPaperScissors.abi");

/// The deployment bytecode of the RockPaperScissors contract
pub const GAME_BYTECODE: &str = include_str!("../artifacts/RockPaperScissors.bin");

/// The flattened source of the RockPaperScissors contract,
/// submitted to the block explorer for verification
pub const GAME_SOURCE: &str = include_str!("../artifacts/RockPaperScissors.sol");

/// The name of the RockPaperScissorCoin contract
pub const COIN_CONTRACT_NAME: &str = "RockPaperScissorCoin";

/// The name of the RockPaperScissors contract
pub const GAME_CONTRACT_NAME: &str = "RockPaperScissors";

/// The fully qualified name of the RockPaperScissorCoin contract,
/// in the `path:name` form the block explorer expects
pub const COIN_QUALIFIED_NAME: &str = "contracts/RockPaperScissorCoin.sol:RockPaperScissorCoin";

/// The fully qualified name of the RockPaperScissors contract,
/// in the `path:name` form the block explorer expects
pub const GAME_QUALIFIED_NAME: &str = "contracts/RockPaperScissors.sol:RockPaperScissors";

/// The chain ID on which deployments of the coin contract are verified (Sepolia)
pub const COIN_VERIFICATION_CHAIN_ID: u64 = 11155111;

/// The chain ID on which deployments of the game contract are verified (Goerli)
pub const GAME_VERIFICATION_CHAIN_ID: u64 = 5;

/// The Solidity compiler version the artifacts were built with
pub const SOLC_VERSION: &str = "v0.8.19+commit.7dd6d404";

/// The optimizer runs setting the artifacts were built with
pub const OPTIMIZER_RUNS: u32 = 200;

/// The default number of confirmations to wait for the deployment transaction
pub const DEFAULT_DEPLOY_CONFIRMATIONS: usize = 1;

/// The deployments key in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The coin contract key in the deployments file
pub const COIN_CONTRACT_KEY: &str = "rock_paper_scissor_coin_contract";

/// The game contract key in the deployments file
pub const GAME_CONTRACT_KEY: &str = "rock_paper_scissors_contract";

/// The marker substring identifying an "already verified" response
/// from the block explorer, matched case-insensitively
pub const ALREADY_VERIFIED_MARKER: &str = "already verified";
