//! Session configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who controls the Black pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    /// A human plays White against the random-move opponent.
    #[serde(rename = "ai")]
    PlayerVsAi,
}

impl Mode {
    /// Parses the short names used by the page buttons ("pvp" or "ai").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pvp" => Some(Mode::PlayerVsPlayer),
            "ai" => Some(Mode::PlayerVsAi),
            _ => None,
        }
    }

    /// Returns the short name of this mode.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "pvp",
            Mode::PlayerVsAi => "ai",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for an interactive [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mode the session starts in.
    #[serde(default)]
    pub mode: Mode,
    /// Delay before the opponent replies, in milliseconds.
    #[serde(default = "default_ai_delay_ms", alias = "aiDelayMs")]
    pub ai_delay_ms: u64,
}

fn default_ai_delay_ms() -> u64 {
    300
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: Mode::default(),
            ai_delay_ms: default_ai_delay_ms(),
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
