use std::env;

use scheduler::{SchedulerArgs, ScoreMode, config::MODE_ENV, errors::ConfigError};

const SNAPSHOT_ENV: &str = "GANGCTL_SNAPSHOT";
const GANGCTL_SNAPSHOT: &str = "cluster.yaml";

#[derive(Debug)]
pub struct Config {
    pub snapshot: String,
    pub mode: ScoreMode,
}

impl Config {
    /// Flags win over the environment. The mode variable is only validated
    /// when no `--mode` flag was given.
    pub fn load(file: Option<String>, mode: Option<ScoreMode>) -> Result<Self, ConfigError> {
        Self::resolve(file, mode, env::var(SNAPSHOT_ENV).ok(), env::var(MODE_ENV).ok())
    }

    fn resolve(
        file: Option<String>,
        mode: Option<ScoreMode>,
        env_snapshot: Option<String>,
        env_mode: Option<String>,
    ) -> Result<Self, ConfigError> {
        let snapshot = file
            .or(env_snapshot)
            .unwrap_or_else(|| GANGCTL_SNAPSHOT.to_string());

        let mode = match mode {
            Some(mode) => mode,
            None => SchedulerArgs::from_env_value(env_mode)?.mode,
        };

        Ok(Self { snapshot, mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags_or_env() {
        let config = Config::resolve(None, None, None, None).unwrap();
        assert_eq!(config.snapshot, "cluster.yaml");
        assert_eq!(config.mode, ScoreMode::Least);
    }

    #[test]
    fn env_used_when_no_flags() {
        let config = Config::resolve(
            None,
            None,
            Some("prod.yaml".to_string()),
            Some("Most".to_string()),
        )
        .unwrap();
        assert_eq!(config.snapshot, "prod.yaml");
        assert_eq!(config.mode, ScoreMode::Most);
    }

    #[test]
    fn flags_override_env() {
        let config = Config::resolve(
            Some("dev.yaml".to_string()),
            Some(ScoreMode::Least),
            Some("prod.yaml".to_string()),
            Some("Most".to_string()),
        )
        .unwrap();
        assert_eq!(config.snapshot, "dev.yaml");
        assert_eq!(config.mode, ScoreMode::Least);
    }

    #[test]
    fn mode_flag_overrides_invalid_env_mode() {
        let config =
            Config::resolve(None, Some(ScoreMode::Most), None, Some("bogus".to_string())).unwrap();
        assert_eq!(config.mode, ScoreMode::Most);
    }

    #[test]
    fn invalid_env_mode_without_flag_is_rejected() {
        let err = Config::resolve(None, None, None, Some("bogus".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode(ref m) if m == "bogus"));
    }
}
