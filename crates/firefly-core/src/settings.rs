//! Session settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings that persist across sessions. Every field has a default, so a
/// partial settings file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause after each folder change, in milliseconds. Purely for pacing.
    pub pause_ms: u64,
    /// How many characters of a body to show.
    pub preview_chars: usize,
    /// Sender stamped on copies of sent drafts.
    pub from_address: String,
    /// Whether to show the agent greeting at startup.
    pub show_greeting: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pause_ms: 500,
            preview_chars: 100,
            from_address: "me@firefly.local".to_string(),
            show_greeting: true,
        }
    }
}

impl Settings {
    /// Parses and validates settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serde`] if the JSON is malformed, or
    /// [`Error::Config`] if a value is unusable.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending field.
    fn validate(&self) -> Result<()> {
        if self.from_address.trim().is_empty() {
            return Err(Error::Config("from_address must not be empty".into()));
        }
        if self.preview_chars == 0 {
            return Err(Error::Config("preview_chars must be at least 1".into()));
        }
        Ok(())
    }

    /// The pause after a folder change.
    #[must_use]
    pub const fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
