//! Profile definitions
//!
//! Main is written out in full. Every other profile starts as a copy of
//! its base and overrides fields explicitly; nothing is shared by reference
//! except the immutable checkpoint tables.

use std::sync::Arc;
use crate::chainparams::{
    build_genesis, AddressPrefixTable, CheckpointTable, ExpectedGenesis, GenesisSpec, Network, NetworkProfile,
    ProfileFlags, UnitTestProfile,
};
use crate::constants::COIN;
use crate::crypto::{BlockHasher, Hash256};
use crate::error::ParamsError;
use crate::p2p::{convert_seed6_now, DnsSeed, SeedSpec6};

pub const MAIN_GENESIS_HASH: &str = "000001121d8b556f9b3f8785d3e7e5c7b75f2a5d7742553642e99ad3b4f3d470";
pub const MAIN_GENESIS_MERKLE_ROOT: &str = "7b642387950d90e38bd657f9e0d06f4e3bb88c429d26c3a39244d880801e80bd";

const MAIN_GENESIS_MESSAGE: &str =
    "3rd March 2018 - How Trump\u{2019}s Tariffs May Pose a Threat to Allies and Economic Growth";
const MAIN_GENESIS_PUBKEY: &str = "047bcb4f3926fcb1dac4f6967eced00b5034e761750c2cfe77f02c95d75db0bb677d7ad8c1529eebafacb0fc118e49ec11617747397e00e601a9cc6a42c9b04eac";

/// Checkpoint time shared by every network
const CHECKPOINT_TIME: i64 = 1520035200;

/// Fixed seeds for the production network.
///
/// Stand-in for the generated seed table, which is not available: a single
/// entry taken from the DNS seed host on the default port.
pub const PN_SEED6_MAIN: &[SeedSpec6] = &[SeedSpec6::ipv4(96, 126, 100, 47, 58265)];

/// Decode a key literal, ignoring a dangling final nibble
fn parse_key_hex(s: &str) -> Result<Vec<u8>, ParamsError> {
    Ok(hex::decode(&s[..s.len() & !1])?)
}

fn main_checkpoints(genesis_hash: Hash256) -> Result<CheckpointTable, ParamsError> {
    CheckpointTable::new(&[(0, genesis_hash)], CHECKPOINT_TIME, 0, 1000.0)
}

fn testnet_checkpoints() -> Result<CheckpointTable, ParamsError> {
    CheckpointTable::new(&[(0, Hash256::from_hex("0x")?)], CHECKPOINT_TIME, 0, 250.0)
}

fn regtest_checkpoints() -> Result<CheckpointTable, ParamsError> {
    CheckpointTable::new(&[(0, Hash256::from_hex("0x")?)], CHECKPOINT_TIME, 0, 100.0)
}

/// Production network. Fails when the genesis block does not reproduce the
/// pinned hash and merkle root.
pub fn main_params(hasher: &dyn BlockHasher) -> Result<NetworkProfile, ParamsError> {
    let genesis = build_genesis(
        &GenesisSpec {
            timestamp_message: MAIN_GENESIS_MESSAGE.to_string(),
            reward: 50 * COIN,
            reward_script: GenesisSpec::pay_to_pubkey(&hex::decode(MAIN_GENESIS_PUBKEY)?),
            time: 1520035200,
            bits: 0x1e0ffff0,
            nonce: 7377508,
        },
        hasher,
    );

    let expected = ExpectedGenesis {
        hash: Hash256::from_hex(MAIN_GENESIS_HASH)?,
        merkle_root: Hash256::from_hex(MAIN_GENESIS_MERKLE_ROOT)?,
    };
    genesis.verify(Network::Main, &expected)?;

    Ok(NetworkProfile {
        network: Network::Main,
        message_start: [0xa2, 0xb2, 0x15, 0x14],
        alert_pubkey: parse_key_hex("04722195dd5da10e0183801213cc13a6cfa1beca48a6622f4e733ce497f871eefebbbac77e74a9b1fcaeac6edddcd15accf1c555245d8d6b329302c8befe0373d35")?,
        default_port: 58265,
        pow_limit: Hash256::max_shifted_right(20),
        subsidy_halving_interval: 210000,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 0,
        target_timespan: 60,
        target_spacing: 60,
        last_pow_block: 1339200,
        maturity: 100,
        masternode_count_drift: 20,
        masternode_collateral: 10000,
        modifier_update_block: 1,
        max_money_out: 100_000_000 * COIN,
        checkpoints: Arc::new(main_checkpoints(genesis.hash)?),
        genesis,
        expected_genesis: Some(expected),
        fixed_seeds: convert_seed6_now(PN_SEED6_MAIN),
        dns_seeds: vec![DnsSeed::new("96.126.100.47", "96.126.100.47")],
        base58_prefixes: AddressPrefixTable {
            pubkey_address: vec![58],
            script_address: vec![18],
            secret_key: vec![193],
            ext_public_key: [0x03, 0xf7, 0x28, 0x12],
            ext_secret_key: [0x03, 0xf7, 0x23, 0xd8],
            ext_coin_type: [0x80, 0x00, 0x01, 0x59],
        },
        flags: ProfileFlags {
            require_rpc_password: false,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        pool_max_transactions: 3,
        spork_key: "04cf75f7aba8a8e0298b76c92a76ced33717d8a0f2b17644ea117dba8a1d8aa2e07613f3ee7c63b09f0da496d0c50d777369701f1548d86978200df2da916ed3eb".to_string(),
        obfuscation_pool_dummy_address: "QcmpqXViWUXNroqVNYRdKjKrFM6PNa1oTM".to_string(),
        start_masternode_payments: 1520035200,
    })
}

/// Public test network, derived from main
pub fn testnet_params(main: &NetworkProfile, hasher: &dyn BlockHasher) -> Result<NetworkProfile, ParamsError> {
    let mut p = main.clone();

    p.network = Network::Testnet;
    p.message_start = [0x64, 0x44, 0x65, 0x54];
    p.alert_pubkey = parse_key_hex("04207f3e4229bdd4f408e77918571292e149c52b3ff92ef0ec55c5c4e34ae633c331e24e6e70173b03c18549284e29eea43f74d5b32eba631a5d0c277486103c66")?;
    p.default_port = 58276;
    p.enforce_block_upgrade_majority = 51;
    p.reject_block_outdated_majority = 75;
    p.to_check_block_upgrade_majority = 100;
    p.miner_threads = 0;
    p.target_timespan = 60;
    p.target_spacing = 60;
    p.last_pow_block = 475200;
    p.maturity = 60;
    p.modifier_update_block = 0;
    p.max_money_out = 100_000_000 * COIN;

    // Later start time; the resulting hash is not pinned
    p.genesis = main.genesis.with_time_and_nonce(1509321602, 343913, hasher);
    p.expected_genesis = None;
    p.checkpoints = Arc::new(testnet_checkpoints()?);

    p.fixed_seeds.clear();
    p.dns_seeds.clear();

    p.base58_prefixes = AddressPrefixTable {
        pubkey_address: vec![66],
        script_address: vec![21],
        secret_key: vec![209],
        ext_public_key: [0x04, 0x35, 0x87, 0xce],
        ext_secret_key: [0x04, 0x36, 0x83, 0x68],
        ext_coin_type: [0x80, 0x00, 0x00, 0x01],
    };

    p.flags.require_rpc_password = true;
    p.flags.mining_requires_peers = true;
    p.flags.allow_min_difficulty_blocks = true;
    p.flags.default_consistency_checks = false;
    p.flags.require_standard = false;
    p.flags.mine_blocks_on_demand = false;
    p.flags.testnet_to_be_deprecated_field_rpc = true;

    p.pool_max_transactions = 2;
    p.spork_key = "04df60d7360059adbd96509eb20b9c6f637b364b02874312c9ef46c44ffc1492993e54c2f464512d9632a21e8c6f0ac5c07bd32c9a4e4f3d969b63be70009f3ca5".to_string();
    p.obfuscation_pool_dummy_address = String::new();
    p.start_masternode_payments = 1510279999;

    Ok(p)
}

/// Regression-test network, derived from testnet
pub fn regtest_params(testnet: &NetworkProfile, hasher: &dyn BlockHasher) -> Result<NetworkProfile, ParamsError> {
    let mut p = testnet.clone();

    p.network = Network::Regtest;
    p.message_start = [0x14, 0x54, 0x95, 0x64];
    p.subsidy_halving_interval = 1500;
    p.enforce_block_upgrade_majority = 750;
    p.reject_block_outdated_majority = 950;
    p.to_check_block_upgrade_majority = 1000;
    p.miner_threads = 1;
    p.target_timespan = 24 * 60 * 60;
    p.target_spacing = 60;
    p.pow_limit = Hash256::max_shifted_right(1);

    let genesis_spec = GenesisSpec {
        time: 1509399999,
        bits: 0x1e0ffff0,
        nonce: 129915,
        ..testnet.genesis.spec.clone()
    };
    p.genesis = build_genesis(&genesis_spec, hasher);
    p.expected_genesis = None;
    p.default_port = 52563;
    p.checkpoints = Arc::new(regtest_checkpoints()?);

    p.fixed_seeds.clear();
    p.dns_seeds.clear();

    p.flags.require_rpc_password = false;
    p.flags.mining_requires_peers = false;
    p.flags.allow_min_difficulty_blocks = true;
    p.flags.default_consistency_checks = true;
    p.flags.require_standard = false;
    p.flags.mine_blocks_on_demand = true;
    p.flags.testnet_to_be_deprecated_field_rpc = false;

    Ok(p)
}

/// In-process unit-test network, derived from main and sharing its
/// (already verified) genesis block and checkpoints
pub fn unittest_params(main: &NetworkProfile) -> UnitTestProfile {
    let mut p = main.clone();

    p.network = Network::UnitTest;
    p.default_port = 51478;
    p.fixed_seeds.clear();
    p.dns_seeds.clear();

    p.flags.require_rpc_password = false;
    p.flags.mining_requires_peers = false;
    p.flags.default_consistency_checks = true;
    p.flags.allow_min_difficulty_blocks = false;
    p.flags.mine_blocks_on_demand = true;

    UnitTestProfile::new(p)
}
