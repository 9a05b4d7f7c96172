//! Scripts for deploying and verifying the Rock Paper Scissors smart contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;
mod verify;
