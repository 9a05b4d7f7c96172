//! Type definitions used throughout the deploy scripts

use std::fmt::{self, Display};

use clap::ValueEnum;

/// The deployable Rock Paper Scissors contracts
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RpsContract {
    /// The coin contract in which the game denominates its wagers
    Coin,
    /// The game contract
    Game,
}

impl Display for RpsContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpsContract::Coin => write!(f, "rock-paper-scissor-coin"),
            RpsContract::Game => write!(f, "rock-paper-scissors"),
        }
    }
}

/// The embedded build artifact and verification metadata for a deployable contract
pub struct ContractArtifact {
    /// The contract name, as declared in its source
    pub name: &'static str,
    /// The contract ABI, as compiler-emitted JSON
    pub abi: &'static str,
    /// The hex-encoded deployment bytecode
    pub bytecode: &'static str,
    /// The flattened Solidity source submitted for verification
    pub source: &'static str,
    /// The fully qualified contract name, e.g. `contracts/Foo.sol:Foo`
    pub qualified_name: &'static str,
    /// The chain ID on which deployments of this contract are verified
    pub verification_chain_id: u64,
    /// The key under which the deployed address is recorded in the deployments file
    pub deployments_key: &'static str,
}
