//! Runtime configuration, loaded from the environment.
//!
//! Gameplay constants live in `constants.rs`; this covers the knobs that
//! vary per deployment: where the quiz service lives, where assets and the
//! session file are, and which tuning profile to play.

use std::path::PathBuf;

use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::Tuning;
use crate::error::ConfigError;

/// Main application configuration. All fields have defaults; the game runs
/// with no environment at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the flashcard service.
    #[serde(default = "default_quiz_base_url")]
    pub quiz_base_url: String,
    /// Directory the sprite assets are loaded from.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
    /// Path of the cross-page session file.
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,
    /// Which tuning profile to play: "vector" or "sprite".
    #[serde(default = "default_profile")]
    pub profile: String,
}

impl Config {
    /// Resolves the configured profile name to its tuning constants.
    pub fn tuning(&self) -> Result<&'static Tuning, ConfigError> {
        match self.profile.as_str() {
            "vector" => Ok(&Tuning::VECTOR),
            "sprite" => Ok(&Tuning::SPRITE),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

fn default_quiz_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_session_path() -> PathBuf {
    PathBuf::from("session.json")
}

fn default_profile() -> String {
    "vector".to_string()
}

/// Loads configuration from `MAZE_`-prefixed environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    Ok(Figment::new().merge(Env::prefixed("MAZE_")).extract()?)
}

/// Create a minimal config for testing with specific overrides
#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        quiz_base_url: "http://127.0.0.1:5000".to_string(),
        asset_dir: PathBuf::from("assets"),
        session_path: PathBuf::from("session.json"),
        profile: "vector".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_resolution() {
        let mut config = test_config();
        assert_eq!(config.tuning().unwrap(), &Tuning::VECTOR);

        config.profile = "sprite".to_string();
        assert_eq!(config.tuning().unwrap(), &Tuning::SPRITE);

        config.profile = "turbo".to_string();
        assert!(config.tuning().is_err());
    }
}
