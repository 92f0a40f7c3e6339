//! Plugin configuration.
//!
//! The mode comes either from the raw JSON args the host hands to the plugin
//! factory, or from `GANG_SCHED_MODE` for hosts configured via environment.

use std::{env, fmt, str::FromStr};

use serde::Deserialize;

use crate::errors::ConfigError;

pub const MODE_ENV: &str = "GANG_SCHED_MODE";

const LEAST_MODE: &str = "Least";
const MOST_MODE: &str = "Most";

/// Direction of the memory preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreMode {
    /// Favor nodes with the least allocatable memory
    #[default]
    Least,
    /// Favor nodes with the most allocatable memory
    Most,
}

impl FromStr for ScoreMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LEAST_MODE => Ok(ScoreMode::Least),
            MOST_MODE => Ok(ScoreMode::Most),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for ScoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreMode::Least => write!(f, "{}", LEAST_MODE),
            ScoreMode::Most => write!(f, "{}", MOST_MODE),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerArgs {
    pub mode: ScoreMode,
}

/// Wire shape of the args. A missing mode reads as the empty string and is
/// rejected by the same check as an unknown one.
#[derive(Deserialize)]
struct RawArgs {
    #[serde(default)]
    mode: String,
}

impl SchedulerArgs {
    pub fn from_json(raw: &serde_json::Value) -> Result<Self, ConfigError> {
        let args = RawArgs::deserialize(raw)?;
        Self::from_mode(&args.mode)
    }

    /// Unset falls back to the default mode, anything else must be valid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(env::var(MODE_ENV).ok())
    }

    /// Same rule as [`SchedulerArgs::from_env`] for an already read value.
    pub fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(mode) => Self::from_mode(&mode),
            None => Ok(Self::default()),
        }
    }

    fn from_mode(mode: &str) -> Result<Self, ConfigError> {
        Ok(Self { mode: mode.parse()? })
    }
}
