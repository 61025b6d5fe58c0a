//! Network selection from command-line flags and config files

use config::{Config, ConfigError};
use crate::chainparams::Network;
use crate::error::ParamsError;

/// The `-testnet` / `-regtest` switches as requested by the user.
///
/// `None` means the source did not mention the switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkSelector {
    pub testnet: Option<bool>,
    pub regtest: Option<bool>,
}

impl NetworkSelector {
    /// Read switches from command-line style arguments.
    ///
    /// Accepts `-name`, `--name`, `-name=1|0|true|false` and `-noname`.
    /// Later arguments win. Unrelated arguments are ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selector = Self::default();
        for arg in args {
            let Some((name, value)) = parse_bool_arg(arg.as_ref()) else {
                continue;
            };
            match name {
                "testnet" => selector.testnet = Some(value),
                "regtest" => selector.regtest = Some(value),
                _ => {}
            }
        }
        selector
    }

    /// Read `testnet` / `regtest` booleans from a config source
    pub fn from_config(config: &Config) -> Result<Self, ParamsError> {
        Ok(Self {
            testnet: config_flag(config, "testnet")?,
            regtest: config_flag(config, "regtest")?,
        })
    }

    /// Layer over a lower-priority source such as the config file.
    ///
    /// Switches set here, including explicit negations, win; unset ones
    /// fall back to `fallback`.
    pub fn merge(self, fallback: NetworkSelector) -> Self {
        Self {
            testnet: self.testnet.or(fallback.testnet),
            regtest: self.regtest.or(fallback.regtest),
        }
    }

    /// Resolve to a network; asking for both test networks is an error
    pub fn resolve(&self) -> Result<Network, ParamsError> {
        match (self.testnet.unwrap_or(false), self.regtest.unwrap_or(false)) {
            (true, true) => Err(ParamsError::ConflictingNetworks),
            (false, true) => Ok(Network::Regtest),
            (true, false) => Ok(Network::Testnet),
            (false, false) => Ok(Network::Main),
        }
    }
}

fn parse_bool_arg(arg: &str) -> Option<(&str, bool)> {
    let body = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, !matches!(value, "0" | "false" | "no" | "off")),
        None => (body, true),
    };
    match name.strip_prefix("no") {
        Some(negated) if negated == "testnet" || negated == "regtest" => Some((negated, !value)),
        _ => Some((name, value)),
    }
}

fn config_flag(config: &Config, key: &str) -> Result<Option<bool>, ParamsError> {
    match config.get_bool(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
