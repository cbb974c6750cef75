//! Flat key/value settings persistence for UI preferences.
//!
//! One TOML file per namespace under the user's config directory. The
//! engine itself persists nothing; this store exists for the UI layer
//! (theme, dim level, view mode). Loading is forgiving: a missing or
//! corrupt file reads back as `None` and the caller falls back to
//! defaults.

use std::fs;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Store rooted at `<user config dir>/haven`. `None` when the
    /// platform reports no config directory.
    pub fn open_default() -> Option<Self> {
        let mut dir = dirs::config_dir()?;
        dir.push("haven");
        Some(Self { dir })
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{namespace}.toml"))
    }

    pub fn save<T: Serialize>(&self, namespace: &str, value: &T) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.dir)?;
        let content = toml::to_string_pretty(value)?;
        fs::write(self.path_for(namespace), content)?;
        Ok(())
    }

    pub fn load<T: DeserializeOwned>(&self, namespace: &str) -> Option<T> {
        let content = fs::read_to_string(self.path_for(namespace)).ok()?;
        toml::from_str(&content).ok()
    }
}
