//! Configuration loading, validation, and management for roomdeck.
//!
//! Loads configuration from `~/.roomdeck/config.toml` with environment
//! variable overrides. Validates all settings at load time. Library crates
//! never read this on their own: callers load a [`SiteConfig`] once and pass
//! the relevant pieces in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.roomdeck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Feature flags gating optional page elements
    #[serde(default)]
    pub features: FeatureFlags,

    /// Link overrides keyed by link name (`community`, `docs`, ...)
    #[serde(default)]
    pub links: HashMap<String, String>,

    /// Image overrides keyed by image name (`logo`, `company_logo`, ...)
    #[serde(default)]
    pub images: HashMap<String, String>,

    /// Conference lobby settings
    #[serde(default)]
    pub lobby: LobbyConfig,
}

/// Boolean switches for optional navigation and branding elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub show_whats_new_link: bool,

    #[serde(default = "default_true")]
    pub show_source_link: bool,

    #[serde(default = "default_true")]
    pub show_community_link: bool,

    /// Scene editor is deployed alongside the lobby
    #[serde(default)]
    pub enable_spoke: bool,

    #[serde(default = "default_true")]
    pub show_docs_link: bool,

    #[serde(default)]
    pub show_cloud: bool,

    #[serde(default)]
    pub hide_powered_by: bool,

    #[serde(default = "default_true")]
    pub show_terms: bool,

    #[serde(default = "default_true")]
    pub show_privacy: bool,

    #[serde(default)]
    pub show_company_logo: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            show_whats_new_link: false,
            show_source_link: true,
            show_community_link: true,
            enable_spoke: false,
            show_docs_link: true,
            show_cloud: false,
            hide_powered_by: false,
            show_terms: true,
            show_privacy: true,
            show_company_logo: false,
        }
    }
}

impl FeatureFlags {
    /// Look up a flag by its configuration key.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        let value = match name {
            "show_whats_new_link" => self.show_whats_new_link,
            "show_source_link" => self.show_source_link,
            "show_community_link" => self.show_community_link,
            "enable_spoke" => self.enable_spoke,
            "show_docs_link" => self.show_docs_link,
            "show_cloud" => self.show_cloud,
            "hide_powered_by" => self.hide_powered_by,
            "show_terms" => self.show_terms,
            "show_privacy" => self.show_privacy,
            "show_company_logo" => self.show_company_logo,
            _ => return None,
        };
        Some(value)
    }
}

/// Settings for the grouped room list on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LobbyConfig {
    /// Members plus lobby occupants at which a room stops accepting spectators
    #[serde(default = "default_max_room_cap")]
    pub max_room_cap: u32,

    /// Groups whose name starts with one of these render collapsed
    #[serde(default = "default_collapsed_group_prefixes")]
    pub collapsed_group_prefixes: Vec<String>,

    /// Empty rooms still listed while a group is collapsed
    #[serde(default = "default_collapsed_empty_rooms")]
    pub collapsed_empty_rooms: usize,
}

fn default_max_room_cap() -> u32 {
    50
}
fn default_collapsed_group_prefixes() -> Vec<String> {
    vec!["Track ".into(), "Three Conference Streams".into()]
}
fn default_collapsed_empty_rooms() -> usize {
    3
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            max_room_cap: default_max_room_cap(),
            collapsed_group_prefixes: default_collapsed_group_prefixes(),
            collapsed_empty_rooms: default_collapsed_empty_rooms(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from the default path (~/.roomdeck/config.toml).
    ///
    /// Environment overrides:
    /// - `ROOMDECK_HOME` replaces the configuration directory
    /// - `ROOMDECK_MAX_ROOM_CAP` replaces `lobby.max_room_cap`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(cap) = std::env::var("ROOMDECK_MAX_ROOM_CAP") {
            config.lobby.max_room_cap = cap.parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "ROOMDECK_MAX_ROOM_CAP must be a positive integer, got '{cap}'"
                ))
            })?;
            config.validate()?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { reason, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "Loaded site configuration");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from("<inline>"),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        std::env::var("ROOMDECK_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs_home().join(".roomdeck"))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lobby.max_room_cap == 0 {
            return Err(ConfigError::ValidationError(
                "lobby.max_room_cap must be > 0".into(),
            ));
        }

        if self
            .lobby
            .collapsed_group_prefixes
            .iter()
            .any(|p| p.is_empty())
        {
            return Err(ConfigError::ValidationError(
                "lobby.collapsed_group_prefixes must not contain empty strings".into(),
            ));
        }

        Ok(())
    }

    /// The configured override for a link, or `default`.
    pub fn link(&self, key: &str, default: &str) -> String {
        self.links
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// The configured URL for an image, if any.
    pub fn image(&self, key: &str) -> Option<&str> {
        self.images.get(key).map(String::as_str)
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
