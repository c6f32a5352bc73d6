//! Client-side configuration loading and persistence.
//!
//! The panel keeps its own small config (which server to talk to) in
//! `~/.slackpanel/config.toml`. Everything the panel edits lives on the
//! server; nothing notification-related is stored locally.

mod server;

pub use server::ServerSettings;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings for the administered server
    #[serde(default)]
    pub server: ServerSettings,
}

impl Config {
    /// Get the config directory path (`~/.slackpanel/`).
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".slackpanel")
    }

    /// Get the config file path (`~/.slackpanel/config.toml`).
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The exclusive lock keeps concurrent `slackpanel` processes from
    /// interleaving writes; the temp-file rename keeps a crash mid-write
    /// from corrupting the config.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        // Lock file is separate from the config so the rename below never
        // races with the lock itself.
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| format!("Failed to lock config file: {}", lock_path.display()))?;

        let tmp_path = path.with_extension("toml.tmp");
        let write_result = std::fs::write(&tmp_path, &content)
            .with_context(|| format!("Failed to write config file: {}", tmp_path.display()))
            .and_then(|()| {
                std::fs::rename(&tmp_path, path).with_context(|| {
                    format!("Failed to move config into place: {}", path.display())
                })
            });

        let _ = fs2::FileExt::unlock(&lock_file);

        write_result
    }
}
