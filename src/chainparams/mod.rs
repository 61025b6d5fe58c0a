//! Chain parameters - per-network constants, genesis blocks, checkpoints
//! and network selection

mod checkpoints;
mod genesis;
mod global;
mod network;
mod networks;
mod prefixes;
mod profile;
mod registry;
mod selector;
mod unittest;

pub use checkpoints::*;
pub use genesis::*;
pub use global::*;
pub use network::*;
pub use networks::*;
pub use prefixes::*;
pub use profile::*;
pub use registry::*;
pub use selector::*;
pub use unittest::*;
