//! Mutable unit-test profile
//!
//! The only profile whose consensus constants can change after
//! construction. Other profiles are handed out as `&NetworkProfile` and
//! have no setters at all.

use std::ops::Deref;
use crate::chainparams::{Network, NetworkProfile};

/// Unit-test network parameters plus setters for test cases
#[derive(Debug, Clone)]
pub struct UnitTestProfile {
    profile: NetworkProfile,
}

impl UnitTestProfile {
    pub(crate) fn new(profile: NetworkProfile) -> Self {
        debug_assert_eq!(profile.network, Network::UnitTest);
        Self { profile }
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.profile.subsidy_halving_interval = interval;
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.profile.enforce_block_upgrade_majority = majority;
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.profile.reject_block_outdated_majority = majority;
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) {
        self.profile.to_check_block_upgrade_majority = window;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.profile.flags.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, enabled: bool) {
        self.profile.flags.allow_min_difficulty_blocks = enabled;
    }

    pub fn set_skip_proof_of_work_check(&mut self, enabled: bool) {
        self.profile.flags.skip_proof_of_work_check = enabled;
    }
}

impl Deref for UnitTestProfile {
    type Target = NetworkProfile;

    fn deref(&self) -> &NetworkProfile {
        &self.profile
    }
}
