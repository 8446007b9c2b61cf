//! Terminal configuration
//!
//! Runtime settings for a [`Terminal`](crate::Terminal). Grid dimensions are
//! compile-time constants; everything else lives here. With the `serde`
//! feature the config can be stored as postcard binary data.

use crate::ansi::Rgb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current config layout version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum serialized config size (binary)
pub const MAX_CONFIG_SIZE: usize = 16;

/// Configuration load/store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Deserialization failed
    Deserialize,
    /// Serialization failed (buffer too small)
    Serialize,
    /// Config version mismatch
    VersionMismatch,
}

/// Terminal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminalConfig {
    /// Layout version
    pub version: u8,
    /// Wrap long lines instead of dropping the overflow
    pub wrap_enabled: bool,
    /// Initial foreground color
    pub foreground: Rgb,
    /// Initial background color
    pub background: Rgb,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            wrap_enabled: false,
            foreground: Rgb::new(255, 255, 255),
            background: Rgb::new(0, 0, 0),
        }
    }
}

#[cfg(feature = "serde")]
impl TerminalConfig {
    /// Load a config from postcard binary data
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: TerminalConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if config.version != CONFIG_VERSION {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Config version mismatch: found {}, expected {}",
                config.version,
                CONFIG_VERSION
            );
            return Err(ConfigError::VersionMismatch);
        }

        Ok(config)
    }

    /// Store this config as postcard binary data
    ///
    /// Returns the number of bytes written
    pub fn to_slice(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        let used = postcard::to_slice(self, buffer).map_err(|_| ConfigError::Serialize)?;
        Ok(used.len())
    }
}
