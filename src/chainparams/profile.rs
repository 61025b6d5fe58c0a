//! Network profile record
//!
//! One immutable bundle of every constant a subsystem may ask about.

use serde::Serialize;
use std::sync::Arc;
use crate::chainparams::{AddressKind, AddressPrefixTable, CheckpointTable, ExpectedGenesis, GenesisBlock, Network};
use crate::crypto::Hash256;
use crate::p2p::{DnsSeed, PeerAddress};

/// Behaviour switches that differ between networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileFlags {
    pub require_rpc_password: bool,
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Parameters of one network
#[derive(Debug, Clone)]
pub struct NetworkProfile {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pubkey: Vec<u8>,
    pub default_port: u16,
    /// Easiest allowed proof-of-work target
    pub pow_limit: Hash256,
    pub subsidy_halving_interval: u32,
    pub max_reorganization_depth: u32,
    pub enforce_block_upgrade_majority: u32,
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,
    pub miner_threads: u32,
    /// Seconds
    pub target_timespan: i64,
    /// Seconds
    pub target_spacing: i64,
    pub last_pow_block: u32,
    pub maturity: u32,
    pub masternode_count_drift: u32,
    /// Whole coins
    pub masternode_collateral: i64,
    pub modifier_update_block: u32,
    /// Base units
    pub max_money_out: i64,
    pub genesis: GenesisBlock,
    /// Pinned genesis values; `None` leaves the genesis unverified
    pub expected_genesis: Option<ExpectedGenesis>,
    pub checkpoints: Arc<CheckpointTable>,
    pub fixed_seeds: Vec<PeerAddress>,
    pub dns_seeds: Vec<DnsSeed>,
    pub base58_prefixes: AddressPrefixTable,
    pub flags: ProfileFlags,
    pub pool_max_transactions: u32,
    pub spork_key: String,
    pub obfuscation_pool_dummy_address: String,
    /// UNIX seconds
    pub start_masternode_payments: i64,
}

impl NetworkProfile {
    /// Network id string
    pub fn name(&self) -> &'static str {
        self.network.name()
    }

    pub fn id(&self) -> u8 {
        self.network.id()
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash
    }

    pub fn verifies_genesis(&self) -> bool {
        self.expected_genesis.is_some()
    }

    pub fn prefix(&self, kind: AddressKind) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Number of blocks in one difficulty retarget window
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Whether `value` is a representable amount on this network
    pub fn money_range(&self, value: i64) -> bool {
        (0..=self.max_money_out).contains(&value)
    }

    pub fn summary(&self) -> ProfileSummary<'_> {
        ProfileSummary {
            network: self.network,
            network_id: self.network.id(),
            message_start: hex::encode(self.message_start),
            default_port: self.default_port,
            pow_limit: self.pow_limit,
            genesis_hash: self.genesis.hash,
            genesis_merkle_root: self.genesis.merkle_root,
            genesis_verified: self.verifies_genesis(),
            last_checkpoint: self.checkpoints.total_blocks_estimate(),
            dns_seeds: self.dns_seeds.iter().map(|s| s.host.clone()).collect(),
            fixed_seed_count: self.fixed_seeds.len(),
            prefixes: &self.base58_prefixes,
            flags: self.flags,
        }
    }
}

/// JSON-friendly view of a profile
#[derive(Debug, Serialize)]
pub struct ProfileSummary<'a> {
    pub network: Network,
    pub network_id: u8,
    pub message_start: String,
    pub default_port: u16,
    pub pow_limit: Hash256,
    pub genesis_hash: Hash256,
    pub genesis_merkle_root: Hash256,
    pub genesis_verified: bool,
    pub last_checkpoint: u32,
    pub dns_seeds: Vec<String>,
    pub fixed_seed_count: usize,
    pub prefixes: &'a AddressPrefixTable,
    pub flags: ProfileFlags,
}
