//! Genesis block generation
//!
//! Builds the first block of a network from its descriptor and checks it
//! against hardcoded values where the network pins them.

use log::{debug, error};
use serde::Serialize;
use crate::chainparams::Network;
use crate::consensus::{Block, BlockHeader, Script, Transaction, OP_CHECKSIG};
use crate::crypto::{BlockHasher, Hash256};
use crate::error::ParamsError;

/// Number pushed ahead of the timestamp message in the coinbase script
const GENESIS_SCRIPT_NUMBER: i64 = 504365040;

/// Second number pushed in the coinbase script
const GENESIS_SCRIPT_EXTRA: i64 = 4;

/// Genesis block version
pub const GENESIS_VERSION: i32 = 1;

/// Everything needed to rebuild a genesis block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Message embedded in the coinbase input script
    pub timestamp_message: String,
    /// Coinbase output value in base units
    pub reward: i64,
    /// Coinbase output script
    pub reward_script: Script,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisSpec {
    /// Pay-to-pubkey reward script: `<pubkey> OP_CHECKSIG`
    pub fn pay_to_pubkey(pubkey: &[u8]) -> Script {
        Script::new().push_slice(pubkey).push_opcode(OP_CHECKSIG)
    }

    fn coinbase(&self) -> Transaction {
        let script_sig = Script::new()
            .push_int(GENESIS_SCRIPT_NUMBER)
            .push_num(GENESIS_SCRIPT_EXTRA)
            .push_slice(self.timestamp_message.as_bytes());
        Transaction::coinbase(script_sig, self.reward, self.reward_script.clone())
    }
}

/// Hardcoded values a genesis block must reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpectedGenesis {
    pub hash: Hash256,
    pub merkle_root: Hash256,
}

/// A built genesis block with its descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    pub spec: GenesisSpec,
    pub block: Block,
    pub hash: Hash256,
    pub merkle_root: Hash256,
}

/// Build a genesis block from its descriptor.
///
/// Produces one coinbase transaction; with a single leaf the merkle root is
/// the coinbase txid.
pub fn build_genesis(spec: &GenesisSpec, hasher: &dyn BlockHasher) -> GenesisBlock {
    let header = BlockHeader::new(
        GENESIS_VERSION,
        Hash256::zero(),
        Hash256::zero(),
        spec.time,
        spec.bits,
        spec.nonce,
    );
    let mut block = Block::new(header, vec![spec.coinbase()]);
    let merkle_root = block.build_merkle_root();
    block.header.merkle_root = merkle_root;
    let hash = block.hash(hasher);

    debug!("built genesis block {} (merkle root {})", hash, merkle_root);

    GenesisBlock {
        spec: spec.clone(),
        block,
        hash,
        merkle_root,
    }
}

impl GenesisBlock {
    /// Rebuild from the stored descriptor
    pub fn rebuild(&self, hasher: &dyn BlockHasher) -> GenesisBlock {
        build_genesis(&self.spec, hasher)
    }

    /// Rebuild with a different timestamp and nonce
    pub fn with_time_and_nonce(&self, time: u32, nonce: u32, hasher: &dyn BlockHasher) -> GenesisBlock {
        let spec = GenesisSpec {
            time,
            nonce,
            ..self.spec.clone()
        };
        build_genesis(&spec, hasher)
    }

    pub fn coinbase(&self) -> &Transaction {
        &self.block.transactions[0]
    }

    pub fn header(&self) -> &BlockHeader {
        &self.block.header
    }

    /// Compare hash and merkle root against the pinned values
    pub fn verify(&self, network: Network, expected: &ExpectedGenesis) -> Result<(), ParamsError> {
        if self.hash != expected.hash {
            error!("{} genesis hash {} does not match {}", network, self.hash, expected.hash);
            return Err(ParamsError::GenesisMismatch {
                network,
                field: "hash",
                expected: expected.hash,
                computed: self.hash,
            });
        }
        if self.merkle_root != expected.merkle_root {
            error!(
                "{} genesis merkle root {} does not match {}",
                network, self.merkle_root, expected.merkle_root
            );
            return Err(ParamsError::GenesisMismatch {
                network,
                field: "merkle root",
                expected: expected.merkle_root,
                computed: self.merkle_root,
            });
        }
        Ok(())
    }
}
