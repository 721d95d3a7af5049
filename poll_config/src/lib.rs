#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for poll plans.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section is optional; an empty document yields the defaults
//!   (10 delays of 100 ms, i.e. up to one second of waiting).
use std::time::Duration;

use serde::Deserialize;

/// Upper bound on the total minimum wait a config may describe.
const MAX_TOTAL_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Unit of `poll.interval`.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DelayUnit {
    #[default]
    #[serde(alias = "millis")]
    Ms,
    #[serde(alias = "micros")]
    Us,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PollCfg {
    /// Number of delays after the first poll (total polls = delays + 1)
    pub delays: u32,
    /// Delay between polls, in `unit`
    pub interval: u32,
    pub unit: DelayUnit,
}

impl Default for PollCfg {
    fn default() -> Self {
        Self {
            delays: 10,
            interval: 100,
            unit: DelayUnit::Ms,
        }
    }
}

impl PollCfg {
    /// The configured interval as a `Duration`.
    pub fn interval_duration(&self) -> Duration {
        let v = u64::from(self.interval);
        match self.unit {
            DelayUnit::Ms => Duration::from_millis(v),
            DelayUnit::Us => Duration::from_micros(v),
        }
    }

    /// Lower bound on the time spent when the condition never becomes true.
    pub fn min_wait(&self) -> Duration {
        self.interval_duration().saturating_mul(self.delays)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Logging {
    pub level: Option<String>, // "info","debug"
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub poll: PollCfg,
    #[serde(default)]
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Poll
        if self.poll.delays > 0 && self.poll.interval == 0 {
            eyre::bail!("poll.interval must be > 0 when poll.delays > 0");
        }
        if self.poll.min_wait() > MAX_TOTAL_WAIT {
            eyre::bail!("poll.delays * poll.interval is unreasonably large (>24h)");
        }

        // Logging
        if let Some(level) = self.logging.level.as_deref() {
            let ok = matches!(
                level.to_ascii_lowercase().as_str(),
                "error" | "warn" | "info" | "debug" | "trace"
            );
            if !ok {
                eyre::bail!("logging.level must be one of error|warn|info|debug|trace, got {level:?}");
            }
        }
        Ok(())
    }
}
