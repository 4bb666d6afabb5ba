//! Runtime configuration
//!
//! Resolved once at startup from `SIMON_*` environment variables and passed
//! explicitly to the score store and the terminal.

use std::path::PathBuf;
use std::time::Duration;

use crate::consts::{HIGHSCORE_FILE_NAME, REVEAL_DELAY_MS, ROUND_PAUSE_MS};
use crate::error::{Result, SimonError};

pub const ENV_HIGHSCORE_FILE: &str = "SIMON_HIGHSCORE_FILE";
pub const ENV_REVEAL_MS: &str = "SIMON_REVEAL_MS";
pub const ENV_ROUND_PAUSE_MS: &str = "SIMON_ROUND_PAUSE_MS";
pub const ENV_CLEAR: &str = "SIMON_CLEAR";
pub const ENV_SEED: &str = "SIMON_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding the high score table
    pub highscore_path: PathBuf,
    /// How long each color of the sequence stays on screen
    pub reveal_delay: Duration,
    /// Pause after a completed round
    pub round_pause: Duration,
    /// Clear the screen between reveals
    pub clear_screen: bool,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Config {
    /// Defaults with the high score file in the given directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            highscore_path: home.into().join(HIGHSCORE_FILE_NAME),
            reveal_delay: Duration::from_millis(REVEAL_DELAY_MS),
            round_pause: Duration::from_millis(ROUND_PAUSE_MS),
            clear_screen: true,
            seed: None,
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let highscore_path = match lookup(ENV_HIGHSCORE_FILE).filter(|v| !v.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .ok_or(SimonError::NoHomeDir)?
                .join(HIGHSCORE_FILE_NAME),
        };

        let mut config = Self {
            highscore_path,
            ..Self::with_home("")
        };

        if let Some(ms) = lookup(ENV_REVEAL_MS) {
            config.reveal_delay = Duration::from_millis(parse_u64(ENV_REVEAL_MS, &ms)?);
        }
        if let Some(ms) = lookup(ENV_ROUND_PAUSE_MS) {
            config.round_pause = Duration::from_millis(parse_u64(ENV_ROUND_PAUSE_MS, &ms)?);
        }
        if let Some(flag) = lookup(ENV_CLEAR) {
            config.clear_screen = parse_bool(ENV_CLEAR, &flag)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = Some(parse_u64(ENV_SEED, &seed)?);
        }

        log::debug!("Using config {:?}", config);
        Ok(config)
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| SimonError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SimonError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_HIGHSCORE_FILE, "/tmp/simon/scores.json"),
            (ENV_REVEAL_MS, "250"),
            (ENV_ROUND_PAUSE_MS, " 0 "),
            (ENV_CLEAR, "off"),
            (ENV_SEED, "1234"),
        ]))
        .unwrap();

        assert_eq!(config.highscore_path, PathBuf::from("/tmp/simon/scores.json"));
        assert_eq!(config.reveal_delay, Duration::from_millis(250));
        assert_eq!(config.round_pause, Duration::ZERO);
        assert!(!config.clear_screen);
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_defaults_besides_path() {
        let config =
            Config::from_lookup(lookup(&[(ENV_HIGHSCORE_FILE, "scores.json")])).unwrap();
        assert_eq!(config.reveal_delay, Duration::from_millis(REVEAL_DELAY_MS));
        assert_eq!(config.round_pause, Duration::from_millis(ROUND_PAUSE_MS));
        assert!(config.clear_screen);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_with_home_uses_fixed_file_name() {
        let config = Config::with_home("/home/someone");
        assert_eq!(
            config.highscore_path,
            PathBuf::from("/home/someone/.simon_highscores.json")
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::from_lookup(lookup(&[
            (ENV_HIGHSCORE_FILE, "scores.json"),
            (ENV_REVEAL_MS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SimonError::InvalidEnv { var: ENV_REVEAL_MS, .. }));

        let err = Config::from_lookup(lookup(&[
            (ENV_HIGHSCORE_FILE, "scores.json"),
            (ENV_CLEAR, "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SimonError::InvalidEnv { var: ENV_CLEAR, .. }));
    }
}
