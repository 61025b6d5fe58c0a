//! Parameter registry
//!
//! Owns the four profiles and tracks which one the process runs on.
//! Build it once at startup, select a network, then pass `&NetworkProfile`
//! to whatever needs network constants.

use log::info;
use crate::chainparams::{
    main_params, regtest_params, testnet_params, unittest_params, Network, NetworkProfile, UnitTestProfile,
};
use crate::crypto::BlockHasher;
use crate::error::ParamsError;

#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    main: NetworkProfile,
    testnet: NetworkProfile,
    regtest: NetworkProfile,
    unittest: UnitTestProfile,
    active: Option<Network>,
}

impl ParameterRegistry {
    /// Build every profile in derivation order: main, testnet, regtest,
    /// then unit-test from main.
    ///
    /// Fails if the production genesis block does not match its pinned
    /// hash; nothing downstream may run in that case.
    pub fn new(hasher: &dyn BlockHasher) -> Result<Self, ParamsError> {
        let main = main_params(hasher)?;
        let testnet = testnet_params(&main, hasher)?;
        let regtest = regtest_params(&testnet, hasher)?;
        let unittest = unittest_params(&main);

        info!("chain parameters ready, main genesis {}", main.genesis.hash);

        Ok(Self {
            main,
            testnet,
            regtest,
            unittest,
            active: None,
        })
    }

    /// Look up a profile whether or not it is selected
    pub fn profile_for(&self, network: Network) -> &NetworkProfile {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
            Network::UnitTest => self.unittest.profile(),
        }
    }

    /// Make `network` the active profile.
    ///
    /// Meant to run once, right after command-line and config parsing.
    /// Switching networks after other subsystems have read parameters is
    /// not supported.
    pub fn select(&mut self, network: Network) -> &NetworkProfile {
        if self.active != Some(network) {
            info!("selected network {}", network);
        }
        self.active = Some(network);
        self.profile_for(network)
    }

    /// [`select`](Self::select) by network id string
    pub fn select_by_name(&mut self, name: &str) -> Result<&NetworkProfile, ParamsError> {
        let network = name.parse::<Network>()?;
        Ok(self.select(network))
    }

    pub fn active_network(&self) -> Option<Network> {
        self.active
    }

    pub fn try_active(&self) -> Result<&NetworkProfile, ParamsError> {
        self.active
            .map(|network| self.profile_for(network))
            .ok_or(ParamsError::NotSelected)
    }

    /// The selected profile.
    ///
    /// # Panics
    /// If no network has been selected.
    #[track_caller]
    pub fn active(&self) -> &NetworkProfile {
        match self.active {
            Some(network) => self.profile_for(network),
            None => panic!("chain parameters accessed before a network was selected"),
        }
    }

    /// Setters for the unit-test profile.
    ///
    /// # Panics
    /// Unless the unit-test network is the active one.
    #[track_caller]
    pub fn modifiable_params(&mut self) -> &mut UnitTestProfile {
        assert_eq!(
            self.active,
            Some(Network::UnitTest),
            "modifiable parameters are only available on the unit-test network"
        );
        &mut self.unittest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Sha256dHasher;
    use crate::test_support::KnownAnswerHasher;

    fn registry() -> ParameterRegistry {
        ParameterRegistry::new(&KnownAnswerHasher).unwrap()
    }

    #[test]
    fn test_startup_fails_on_genesis_mismatch() {
        let err = ParameterRegistry::new(&Sha256dHasher).unwrap_err();
        assert!(matches!(err, ParamsError::GenesisMismatch { network: Network::Main, .. }));
    }

    #[test]
    fn test_select_each_network() {
        let mut registry = registry();
        for network in Network::ALL {
            assert_eq!(registry.select(network).network, network);
            assert_eq!(registry.active_network(), Some(network));
            assert_eq!(registry.active().network, network);
        }
    }

    #[test]
    fn test_select_by_name() {
        let mut registry = registry();
        assert_eq!(registry.select_by_name("regtest").unwrap().default_port, 52563);
        assert_eq!(registry.select_by_name("test").unwrap().network, Network::Testnet);
        assert!(matches!(
            registry.select_by_name("signet"),
            Err(ParamsError::UnknownNetwork(name)) if name == "signet"
        ));
        // A failed lookup leaves the selection alone
        assert_eq!(registry.active_network(), Some(Network::Testnet));
    }

    #[test]
    fn test_reselect_does_not_change_values() {
        let mut registry = registry();
        let before = registry.select(Network::Main).clone();
        registry.select(Network::Regtest);
        let after = registry.select(Network::Main);
        assert_eq!(after.genesis, before.genesis);
        assert_eq!(after.default_port, before.default_port);
        assert_eq!(after.base58_prefixes, before.base58_prefixes);
        assert_eq!(after.checkpoints, before.checkpoints);
    }

    #[test]
    fn test_try_active_before_select() {
        let registry = registry();
        assert!(matches!(registry.try_active(), Err(ParamsError::NotSelected)));
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_active_before_select_panics() {
        registry().active();
    }

    #[test]
    fn test_modifiable_params_on_unittest() {
        let mut registry = registry();
        registry.select(Network::UnitTest);
        {
            let params = registry.modifiable_params();
            params.set_subsidy_halving_interval(150);
            params.set_enforce_block_upgrade_majority(2);
            params.set_reject_block_outdated_majority(3);
            params.set_to_check_block_upgrade_majority(4);
            params.set_default_consistency_checks(false);
            params.set_allow_min_difficulty_blocks(true);
            params.set_skip_proof_of_work_check(true);
        }
        let active = registry.active();
        assert_eq!(active.subsidy_halving_interval, 150);
        assert_eq!(active.enforce_block_upgrade_majority, 2);
        assert_eq!(active.reject_block_outdated_majority, 3);
        assert_eq!(active.to_check_block_upgrade_majority, 4);
        assert!(!active.flags.default_consistency_checks);
        assert!(active.flags.allow_min_difficulty_blocks);
        assert!(active.flags.skip_proof_of_work_check);

        // Main is untouched
        assert_eq!(registry.profile_for(Network::Main).subsidy_halving_interval, 210000);
    }

    #[test]
    #[should_panic(expected = "only available on the unit-test network")]
    fn test_modifiable_params_on_main_panics() {
        let mut registry = registry();
        registry.select(Network::Main);
        registry.modifiable_params();
    }
}
