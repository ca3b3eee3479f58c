use serde::{Deserialize, Serialize};

use super::defaults;

/// What to do with a row whose `decay_start` cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedDecayPolicy {
    /// Treat the row as stable and show its stored weight.
    FailOpen,
    /// Rewrite the marker during the sweep: restart decay below weight 2,
    /// clear it for supported weights.
    #[default]
    Repair,
    /// Fail the read with a corruption error.
    FailRead,
}

impl std::str::FromStr for MalformedDecayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fail_open" => Ok(Self::FailOpen),
            "repair" => Ok(Self::Repair),
            "fail_read" => Ok(Self::FailRead),
            other => Err(format!("unknown malformed decay policy: {other}")),
        }
    }
}

/// Decay subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Seconds for a decaying word to fall from weight 1 to 0.
    pub window_secs: u64,
    pub malformed_policy: MalformedDecayPolicy,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            window_secs: defaults::DEFAULT_DECAY_WINDOW_SECS,
            malformed_policy: MalformedDecayPolicy::default(),
        }
    }
}
