//! 256-bit hash values and SHA-256d hashing
//!
//! Hashes are stored in little-endian (wire) byte order and displayed
//! byte-reversed, the way block explorers print them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash / 256-bit unsigned value in little-endian byte order
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Create a zero hash (used for the genesis previous hash)
    pub const fn zero() -> Self {
        Hash256([0u8; 32])
    }

    /// Create hash from wire-order bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    /// `~0 >> shift` as a 256-bit value (proof-of-work ceilings)
    pub fn max_shifted_right(shift: u32) -> Self {
        let mut bytes = [0xffu8; 32];
        for bit in 0..shift.min(256) {
            let pos = 255 - bit as usize;
            bytes[pos / 8] &= !(1u8 << (pos % 8));
        }
        Hash256(bytes)
    }

    /// Parse display-order hex. Accepts a `0x` prefix and short input,
    /// which is left-padded with zeros (`"0x"` parses to zero).
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() > 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let padded = format!("{:0>64}", digits);
        let mut arr = [0u8; 32];
        hex::decode_to_slice(&padded, &mut arr)?;
        arr.reverse();
        Ok(Hash256(arr))
    }

    /// Convert to display-order hex string
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Get as wire-order bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

/// Numeric ordering, most significant byte first
impl Ord for Hash256 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for Hash256 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash256 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Double SHA-256 of arbitrary bytes
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    Hash256(out)
}

/// Hash two hashes together (for the merkle tree)
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}

/// Block header proof-of-work hash.
///
/// The production chain hashes headers with Quark; nodes plug their
/// implementation in here. Transactions and merkle trees always use SHA-256d.
pub trait BlockHasher {
    /// Hash a serialized 80-byte block header
    fn hash_header(&self, header: &[u8]) -> Hash256;
}

/// SHA-256d header hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256dHasher;

impl BlockHasher for Sha256dHasher {
    fn hash_header(&self, header: &[u8]) -> Hash256 {
        sha256d(header)
    }
}
