//! Process-wide parameters
//!
//! For code that cannot be handed a `&NetworkProfile`. Initialised once by
//! [`select_params`] from the startup routine and read-only afterwards.
//! Unit tests that need the mutable profile use a local
//! [`ParameterRegistry`] instead.

use std::sync::OnceLock;
use crate::chainparams::{Network, NetworkProfile, ParameterRegistry};
use crate::crypto::BlockHasher;
use crate::error::ParamsError;

static REGISTRY: OnceLock<ParameterRegistry> = OnceLock::new();

/// Build the registry and select `network` for the rest of the process.
///
/// Calling again with the same network returns the existing profile;
/// a different network is rejected.
pub fn select_params(network: Network, hasher: &dyn BlockHasher) -> Result<&'static NetworkProfile, ParamsError> {
    if let Some(registry) = REGISTRY.get() {
        return already_selected(registry, network);
    }

    let mut registry = ParameterRegistry::new(hasher)?;
    registry.select(network);

    match REGISTRY.set(registry) {
        Ok(()) => try_params(),
        // Lost a race with another initialiser
        Err(_) => already_selected(REGISTRY.get().ok_or(ParamsError::NotSelected)?, network),
    }
}

fn already_selected(registry: &'static ParameterRegistry, network: Network) -> Result<&'static NetworkProfile, ParamsError> {
    let current = registry.try_active()?;
    if current.network == network {
        Ok(current)
    } else {
        Err(ParamsError::AlreadySelected {
            current: current.network,
            requested: network,
        })
    }
}

pub fn try_params() -> Result<&'static NetworkProfile, ParamsError> {
    REGISTRY.get().ok_or(ParamsError::NotSelected)?.try_active()
}

/// The selected process-wide profile.
///
/// # Panics
/// If [`select_params`] has not succeeded yet.
#[track_caller]
pub fn params() -> &'static NetworkProfile {
    match try_params() {
        Ok(profile) => profile,
        Err(_) => panic!("chain parameters accessed before select_params"),
    }
}

/// Look up any profile once parameters are initialised
pub fn params_for(network: Network) -> Result<&'static NetworkProfile, ParamsError> {
    REGISTRY
        .get()
        .map(|registry| registry.profile_for(network))
        .ok_or(ParamsError::NotSelected)
}
