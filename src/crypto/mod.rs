//! Cryptography module - SHA-256d hashing, header hashing seam, merkle roots

mod hash;
mod merkle;

pub use hash::*;
pub use merkle::*;
