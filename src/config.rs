//! Validator configuration
//!
//! Defaults are fixed in code; CI can override them without recompiling:
//!
//! | variable | field | default |
//! |---|---|---|
//! | `ARGCHECK_SEED` | [`ValidatorConfig::seed`] | 42 |
//! | `ARGCHECK_ATOL` | absolute tolerance | 1e-6 |
//! | `ARGCHECK_RTOL` | relative tolerance | 1e-6 |
//!
//! Unparseable values, and tolerances that are negative or not finite, are
//! ignored with a warning.

use crate::compare::{Tolerance, ToleranceMode};
use std::str::FromStr;

/// Environment variable holding the fixture seed
pub const SEED_ENV: &str = "ARGCHECK_SEED";
/// Environment variable holding the absolute tolerance
pub const ATOL_ENV: &str = "ARGCHECK_ATOL";
/// Environment variable holding the relative tolerance
pub const RTOL_ENV: &str = "ARGCHECK_RTOL";

/// Settings shared by every test case a validator runs
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValidatorConfig {
    /// Seed for random fixtures
    pub seed: u64,
    /// How reference and computed values are compared
    pub mode: ToleranceMode,
}

impl ValidatorConfig {
    /// Seed used when none is configured
    pub const DEFAULT_SEED: u64 = 42;

    /// Defaults overridden by `ARGCHECK_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `ARGCHECK_*` key
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed = parse_or(&lookup, SEED_ENV, defaults.seed);

        let mode = match defaults.mode {
            ToleranceMode::Approximate(t) => ToleranceMode::Approximate(Tolerance::new(
                parse_tolerance(&lookup, ATOL_ENV, t.atol),
                parse_tolerance(&lookup, RTOL_ENV, t.rtol),
            )),
            exact => exact,
        };

        Self { seed, mode }
    }

    /// Replace the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the comparison mode
    pub fn with_mode(mut self, mode: ToleranceMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            mode: ToleranceMode::approximate(),
        }
    }
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            default
        }),
    }
}

fn parse_tolerance(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
    let value = parse_or(lookup, key, default);
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("ignoring {key}={value}: tolerance must be finite and non-negative");
        default
    }
}
