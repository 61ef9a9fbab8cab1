//! User-level configuration for langscout
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/langscout/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default profiles directory when nothing else is configured.
const DEFAULT_PROFILES_DIR: &str = "profiles";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LangscoutConfig {
    /// Directory holding the reference trigram profiles
    pub profiles_dir: Option<PathBuf>,

    /// Restrict identification to these language codes (index order is
    /// still what decides ties)
    pub languages: Option<Vec<String>>,
}

impl LangscoutConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/langscout/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = LangscoutConfig::default();

        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<LangscoutConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        // Environment variables override everything
        if let Ok(dir) = std::env::var("LANGSCOUT_PROFILES_DIR") {
            config.profiles_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("langscout").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: LangscoutConfig) {
        if other.profiles_dir.is_some() {
            self.profiles_dir = other.profiles_dir;
        }
        if other.languages.is_some() {
            self.languages = other.languages;
        }
    }

    /// Resolve the profiles directory: CLI flag > env/config > default.
    ///
    /// The flag already carries the environment value when set (clap's
    /// `env` feature), so the flag wins outright here.
    pub fn resolve_profiles_dir(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(dir) = flag {
            return dir.to_path_buf();
        }
        self.profiles_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILES_DIR))
    }

    /// Allow-list of language codes, if configured
    pub fn languages(&self) -> Option<&[String]> {
        self.languages.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        let config = LangscoutConfig {
            profiles_dir: Some(PathBuf::from("/from/config")),
            languages: None,
        };
        let resolved = config.resolve_profiles_dir(Some(Path::new("/from/flag")));
        assert_eq!(resolved, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_config_wins_over_default() {
        let config = LangscoutConfig {
            profiles_dir: Some(PathBuf::from("/from/config")),
            languages: None,
        };
        assert_eq!(
            config.resolve_profiles_dir(None),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_default_when_nothing_configured() {
        let config = LangscoutConfig::default();
        assert_eq!(
            config.resolve_profiles_dir(None),
            PathBuf::from(DEFAULT_PROFILES_DIR)
        );
    }

    #[test]
    fn test_parse_toml() {
        let config: LangscoutConfig =
            toml::from_str("profiles_dir = \"/data/profiles\"\nlanguages = [\"en\", \"es\"]\n")
                .expect("parse config");
        assert_eq!(config.profiles_dir, Some(PathBuf::from("/data/profiles")));
        assert_eq!(
            config.languages,
            Some(vec!["en".to_string(), "es".to_string()])
        );
    }
}
