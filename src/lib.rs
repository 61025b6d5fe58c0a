//! QDP chain parameters
//!
//! Identity and consensus constants for the QDP proof-of-work network:
//! genesis blocks, checkpoints, address prefixes and seed peers for the
//! main, test, regression-test and unit-test networks, plus the registry
//! that selects exactly one of them per process.

pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod error;
pub mod p2p;

pub use chainparams::{Network, NetworkProfile, ParameterRegistry};
pub use error::ParamsError;

/// Monetary constants
pub mod constants {
    /// Base units per coin
    pub const COIN: i64 = 100_000_000;
}

// Lets the shared integration-test fixtures name this crate from unit tests
#[cfg(test)]
extern crate self as qdp_params;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
pub(crate) mod test_support;
