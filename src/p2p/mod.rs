//! P2P bootstrap data - fixed seed conversion and DNS seeds

mod seeds;

pub use seeds::*;
