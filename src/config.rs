/// Application configuration
///
/// Read once at startup from an optional JSON file in the user's config
/// directory:
/// - Linux: ~/.config/mcstudy/config.json
/// - macOS: ~/Library/Application Support/mcstudy/config.json
/// - Windows: %APPDATA%\mcstudy\config.json
///
/// Every field has a default, so a partial file is fine and a missing one
/// means "all defaults". Nothing is ever written back.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::state::review::DEFAULT_MIN_REVIEW_CHARS;

/// Who is using the app
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Profile {
    /// Name shown on the profile screen
    pub display_name: String,
    /// Program line under the name
    pub program: String,
    /// Author name put on submitted reviews
    pub review_name: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "Jessica Smith".to_string(),
            program: "Computer Science • Senior".to_string(),
            review_name: "You".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Simulated network latency after submitting a review
    pub review_return_delay_ms: u64,
    /// Minimum trimmed review length
    pub min_review_chars: usize,
    pub profile: Profile,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            review_return_delay_ms: 1000,
            min_review_chars: DEFAULT_MIN_REVIEW_CHARS,
            profile: Profile::default(),
            window_width: 420.0,
            window_height: 860.0,
        }
    }
}

impl Config {
    /// Load the user's config, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("⚠️  Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read a config file. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(path)?;
        Ok(Some(Self::from_json(&json)?))
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the path where the config file is expected
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("mcstudy");
        path.push("config.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_json(r#"{ "review_return_delay_ms": 250 }"#).unwrap();

        assert_eq!(config.review_return_delay_ms, 250);
        assert_eq!(config.min_review_chars, DEFAULT_MIN_REVIEW_CHARS);
        assert_eq!(config.profile, Profile::default());
    }

    #[test]
    fn test_partial_profile() {
        let config = Config::from_json(r#"{ "profile": { "review_name": "Sam W." } }"#).unwrap();

        assert_eq!(config.profile.review_name, "Sam W.");
        assert_eq!(config.profile.display_name, "Jessica Smith");
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(Config::from_json("{ not json").is_err());
        assert!(Config::from_json(r#"{ "min_review_chars": "five" }"#).is_err());
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("mcstudy-no-such-config.json");
        assert!(matches!(Config::load_from(&path), Ok(None)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "min_review_chars": 10 }}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.min_review_chars, 10);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
