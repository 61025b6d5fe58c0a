//! Consensus primitives - blocks, transactions, scripts and compact targets

mod block;
mod difficulty;
mod script;
mod transaction;

pub use block::*;
pub use difficulty::*;
pub use script::*;
pub use transaction::*;
