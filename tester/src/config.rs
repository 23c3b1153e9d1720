use std::env;
use std::str::FromStr;

use log::warn;
use rand::Rng;

pub const SEED_VAR: &str = "SLL_TESTER_SEED";
pub const OPS_VAR: &str = "SLL_TESTER_OPS";
pub const DEFAULT_OPS: usize = 1000;

/// How a tester run is seeded and how long it goes on for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TesterConfig {
    /// `None` draws a fresh seed for every run.
    pub seed: Option<u64>,
    pub ops: usize,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ops: DEFAULT_OPS,
        }
    }
}

impl TesterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Values that fail to parse are
    /// ignored in favour of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            seed: parse_var(&lookup, SEED_VAR),
            ops: parse_var(&lookup, OPS_VAR).unwrap_or(defaults.ops),
        }
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

fn parse_var<F, V>(lookup: &F, key: &str) -> Option<V>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}, not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = TesterConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config, TesterConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.ops, DEFAULT_OPS);
    }

    #[test]
    fn reads_both_vars() {
        let config = TesterConfig::from_lookup(lookup_in(&[(SEED_VAR, "42"), (OPS_VAR, " 250 ")]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.ops, 250);
        assert_eq!(config.seed_or_random(), 42);
    }

    #[test]
    fn garbage_falls_back() {
        let config =
            TesterConfig::from_lookup(lookup_in(&[(SEED_VAR, "soon"), (OPS_VAR, "-3")]));
        assert_eq!(config, TesterConfig::default());
    }
}
