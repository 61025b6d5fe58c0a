//! Chain parameter errors

use crate::chainparams::Network;
use crate::crypto::Hash256;
use thiserror::Error;

/// Errors raised while building or selecting chain parameters
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{network} genesis {field} mismatch: expected {expected}, computed {computed}")]
    GenesisMismatch {
        network: Network,
        field: &'static str,
        expected: Hash256,
        computed: Hash256,
    },
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworks,
    #[error("No network selected")]
    NotSelected,
    #[error("Network already selected: {current}, requested {requested}")]
    AlreadySelected { current: Network, requested: Network },
    #[error("Checkpoint heights must strictly increase: {height} follows {previous}")]
    InvalidCheckpoints { previous: u32, height: u32 },
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
