//! Base58 address prefixes
//!
//! Each network prepends its own version bytes before Base58Check encoding,
//! so addresses and keys from one network never parse on another.

use serde::Serialize;
use crate::crypto::sha256d;
use crate::error::ParamsError;

/// Kinds of Base58 data a network assigns prefixes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    /// BIP44 coin type (hardened), not an encoding prefix
    ExtCoinType,
}

impl AddressKind {
    pub const ALL: [AddressKind; 6] = [
        AddressKind::PubkeyAddress,
        AddressKind::ScriptAddress,
        AddressKind::SecretKey,
        AddressKind::ExtPublicKey,
        AddressKind::ExtSecretKey,
        AddressKind::ExtCoinType,
    ];

    /// Kinds that appear as leading bytes of encoded data, longest prefixes first
    const ENCODABLE: [AddressKind; 5] = [
        AddressKind::ExtPublicKey,
        AddressKind::ExtSecretKey,
        AddressKind::PubkeyAddress,
        AddressKind::ScriptAddress,
        AddressKind::SecretKey,
    ];
}

/// Per-network prefix bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressPrefixTable {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    pub ext_coin_type: [u8; 4],
}

impl AddressPrefixTable {
    pub fn get(&self, kind: AddressKind) -> &[u8] {
        match kind {
            AddressKind::PubkeyAddress => &self.pubkey_address,
            AddressKind::ScriptAddress => &self.script_address,
            AddressKind::SecretKey => &self.secret_key,
            AddressKind::ExtPublicKey => &self.ext_public_key,
            AddressKind::ExtSecretKey => &self.ext_secret_key,
            AddressKind::ExtCoinType => &self.ext_coin_type,
        }
    }

    /// BIP44 coin type with the hardened bit cleared
    pub fn bip44_coin_type(&self) -> u32 {
        u32::from_be_bytes(self.ext_coin_type) & 0x7fff_ffff
    }

    /// Base58Check(prefix || payload)
    pub fn encode(&self, kind: AddressKind, payload: &[u8]) -> String {
        let mut data = Vec::with_capacity(self.get(kind).len() + payload.len() + 4);
        data.extend_from_slice(self.get(kind));
        data.extend_from_slice(payload);
        let checksum = sha256d(&data);
        data.extend_from_slice(&checksum.0[..4]);
        bs58::encode(data).into_string()
    }

    /// Decode Base58Check data and identify its kind by prefix
    pub fn decode(&self, encoded: &str) -> Result<(AddressKind, Vec<u8>), ParamsError> {
        let data = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| ParamsError::InvalidAddress(e.to_string()))?;
        if data.len() < 5 {
            return Err(ParamsError::InvalidAddress("too short".to_string()));
        }

        let (body, checksum) = data.split_at(data.len() - 4);
        if checksum != &sha256d(body).0[..4] {
            return Err(ParamsError::InvalidAddress("bad checksum".to_string()));
        }

        AddressKind::ENCODABLE
            .iter()
            .find(|kind| body.starts_with(self.get(**kind)))
            .map(|kind| (*kind, body[self.get(*kind).len()..].to_vec()))
            .ok_or_else(|| ParamsError::InvalidAddress("unknown prefix".to_string()))
    }
}
