//! Network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::ParamsError;

/// The four deployment profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Main,
    /// Public test network
    #[serde(rename = "test", alias = "testnet")]
    Testnet,
    /// Local regression-test network
    Regtest,
    /// In-process unit-test network
    UnitTest,
}

impl Network {
    pub const ALL: [Network; 4] = [Network::Main, Network::Testnet, Network::Regtest, Network::UnitTest];

    /// Numeric network id, in declaration order
    pub fn id(&self) -> u8 {
        match self {
            Network::Main => 0,
            Network::Testnet => 1,
            Network::Regtest => 2,
            Network::UnitTest => 3,
        }
    }

    /// Network id string, as reported over RPC
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::UnitTest),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
