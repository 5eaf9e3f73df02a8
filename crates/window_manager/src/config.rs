//! Window manager configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{WindowManagerState, DEFAULT_TOP_Z_INDEX};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Tunables for a [`crate::WindowManagerContext`].
pub struct WindowManagerConfig {
    /// Stacking value the counter starts from; the first window is stacked one above it.
    pub initial_top_z_index: u32,
    /// Log every applied command through the Leptos console logger.
    pub log_commands: bool,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            initial_top_z_index: DEFAULT_TOP_Z_INDEX,
            log_commands: true,
        }
    }
}

#[derive(Debug, Error)]
/// Configuration loading failures.
pub enum ConfigError {
    /// The TOML document could not be parsed into a [`WindowManagerConfig`].
    #[error("invalid window manager config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl WindowManagerConfig {
    /// Parses a TOML document. Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, wrong value types, or unknown keys.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Empty window state seeded from this configuration.
    pub fn initial_state(&self) -> WindowManagerState {
        WindowManagerState::with_top_z_index(u64::from(self.initial_top_z_index))
    }
}
