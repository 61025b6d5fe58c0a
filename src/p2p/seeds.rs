//! Seed Node Configuration
//!
//! Hardcoded bootstrap nodes for initial peer discovery.
//! New nodes connect to these first to discover the rest of the network.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// One week in seconds
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Compiled-in seed: IPv6 (or IPv4-mapped) address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 seed stored in its IPv4-mapped IPv6 form
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }
}

/// A known peer address with its "last seen" time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerAddress {
    pub addr: SocketAddr,
    /// UNIX seconds
    pub last_seen: i64,
}

/// DNS seed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

fn seed_ip(addr: [u8; 16]) -> IpAddr {
    let v6 = Ipv6Addr::from(addr);
    match v6.to_ipv4_mapped() {
        Some(v4) => IpAddr::V4(v4),
        None => IpAddr::V6(v6),
    }
}

/// Convert compiled-in seeds into peer addresses.
///
/// Every seed gets a random "last seen" time between one and two weeks
/// before `now`, so a node only leans on one or two of them before fresher
/// gossiped addresses take over.
pub fn convert_seed6<R: Rng>(seeds: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<PeerAddress> {
    let converted: Vec<PeerAddress> = seeds
        .iter()
        .map(|seed| PeerAddress {
            addr: SocketAddr::new(seed_ip(seed.addr), seed.port),
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect();

    debug!("converted {} fixed seeds", converted.len());
    converted
}

/// [`convert_seed6`] against the system clock and thread RNG
pub fn convert_seed6_now(seeds: &[SeedSpec6]) -> Vec<PeerAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    convert_seed6(seeds, now, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(convert_seed6(&[], NOW, &mut rng).is_empty());
    }

    #[test]
    fn test_ipv4_mapped_seed() {
        let mut rng = StdRng::seed_from_u64(2);
        let seeds = [SeedSpec6::ipv4(96, 126, 100, 47, 58265)];
        let out = convert_seed6(&seeds, NOW, &mut rng);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].addr.to_string(), "96.126.100.47:58265");
    }

    #[test]
    fn test_ipv6_seed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 0x01;
        let out = convert_seed6(&[SeedSpec6 { addr, port: 8333 }], NOW, &mut rng);
        assert_eq!(out[0].addr.to_string(), "[2001::1]:8333");
    }

    #[test]
    fn test_last_seen_window() {
        let mut rng = StdRng::seed_from_u64(4);
        let seeds = vec![SeedSpec6::ipv4(10, 0, 0, 1, 1); 200];
        for peer in convert_seed6(&seeds, NOW, &mut rng) {
            assert!(peer.last_seen > NOW - 2 * ONE_WEEK);
            assert!(peer.last_seen <= NOW - ONE_WEEK);
        }
    }

    #[test]
    fn test_deterministic_for_fixed_rng() {
        let seeds = vec![SeedSpec6::ipv4(10, 0, 0, 1, 1); 5];
        let a = convert_seed6(&seeds, NOW, &mut StdRng::seed_from_u64(9));
        let b = convert_seed6(&seeds, NOW, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
