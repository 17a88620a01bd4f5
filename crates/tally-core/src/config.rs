//! Session configuration.
//!
//! Configuration covers the two things a user might want to change
//! without touching code: the avatar service template used for new
//! friends, and the roster the session starts with. Friend and balance
//! data itself is never persisted; the seed roster is read once at
//! startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::DEFAULT_AVATAR_URL;
use crate::friend::Friend;

/// One entry of the configured starting roster.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FriendSeed {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub balance: f64,
}

/// Top-level configuration, loadable from a TOML file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TallyConfig {
    /// Avatar URL template for newly added friends.
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
    /// Friends the session starts with.
    #[serde(rename = "friend", default = "default_roster")]
    pub friends: Vec<FriendSeed>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            avatar_url: default_avatar_url(),
            friends: default_roster(),
        }
    }
}

impl TallyConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The default config file location
    /// (e.g. `~/.config/tally/config.toml` on Linux).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
    }

    /// Loads the config from the default location, falling back to the
    /// built-in defaults when the file is missing or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("[Config] Failed to load {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// The starting roster as full friend records.
    pub fn seed_friends(&self) -> Vec<Friend> {
        self.friends
            .iter()
            .map(|seed| Friend {
                id: seed.id.clone(),
                name: seed.name.clone(),
                image: seed.image.clone(),
                balance: seed.balance,
            })
            .collect()
    }
}

fn default_avatar_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}

fn default_roster() -> Vec<FriendSeed> {
    [
        ("118836", "Clark", -7.0),
        ("933372", "Sarah", 20.0),
        ("499476", "Anthony", 0.0),
    ]
    .into_iter()
    .map(|(id, name, balance)| FriendSeed {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("{DEFAULT_AVATAR_URL}?u={id}"),
        balance,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_roster() {
        let config = TallyConfig::default();
        assert_eq!(config.avatar_url, DEFAULT_AVATAR_URL);

        let friends = config.seed_friends();
        assert_eq!(friends.len(), 3);
        assert_eq!(friends[0].name, "Clark");
        assert_eq!(friends[0].balance, -7.0);
        assert_eq!(friends[1].name, "Sarah");
        assert_eq!(friends[1].balance, 20.0);
        assert_eq!(friends[2].name, "Anthony");
        assert_eq!(friends[2].balance, 0.0);
    }

    #[test]
    fn test_from_toml_str() {
        let config = TallyConfig::from_toml_str(
            r#"
            avatar_url = "https://avatars.example/64"

            [[friend]]
            id = "f-1"
            name = "Dana"
            image = "https://avatars.example/64?u=f-1"
            balance = 12.5
            "#,
        )
        .unwrap();

        assert_eq!(config.avatar_url, "https://avatars.example/64");
        assert_eq!(config.friends.len(), 1);
        assert_eq!(config.friends[0].balance, 12.5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TallyConfig::from_toml_str("").unwrap();
        assert_eq!(config.avatar_url, DEFAULT_AVATAR_URL);
        assert_eq!(config.friends.len(), 3);
    }

    #[test]
    fn test_balance_defaults_to_zero() {
        let config = TallyConfig::from_toml_str(
            r#"
            [[friend]]
            id = "f-1"
            name = "Dana"
            image = "https://i.pravatar.cc/48?u=f-1"
            "#,
        )
        .unwrap();
        assert_eq!(config.friends[0].balance, 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "avatar_url = \"https://avatars.example/32\"").unwrap();

        let config = TallyConfig::load(file.path()).unwrap();
        assert_eq!(config.avatar_url, "https://avatars.example/32");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TallyConfig::from_toml_str("avatar_url = [").unwrap_err();
        assert!(matches!(err, crate::TallyError::Config(_)));
    }
}
