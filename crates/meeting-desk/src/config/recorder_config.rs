use crate::config::{
    DEFAULT_AUTOSAVE_INTERVAL_SECS, DEFAULT_DRIVER_INTERVAL_MS, DEFAULT_SAVED_INDICATOR_SECS,
    default_autosave_interval_secs, default_driver_interval_ms, default_saved_indicator_secs,
};

use std::time::Duration;

use meeting_desk_core::RecorderSettings;
use serde::{Deserialize, Serialize};

/// Recorder timing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// How often the terminal driver advances the session clock, in milliseconds.
    #[serde(default = "default_driver_interval_ms")]
    pub driver_interval_ms: u64,

    /// Quiet period after the last edit before notes are autosaved, in seconds.
    #[serde(default = "default_autosave_interval_secs")]
    pub autosave_interval_secs: u64,

    /// How long the Saved indicator stays up, in seconds.
    #[serde(default = "default_saved_indicator_secs")]
    pub saved_indicator_secs: u64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            driver_interval_ms: DEFAULT_DRIVER_INTERVAL_MS,
            autosave_interval_secs: DEFAULT_AUTOSAVE_INTERVAL_SECS,
            saved_indicator_secs: DEFAULT_SAVED_INDICATOR_SECS,
        }
    }
}

impl RecorderConfig {
    /// Driver period as a `Duration`.
    pub fn driver_interval(&self) -> Duration {
        Duration::from_millis(self.driver_interval_ms)
    }

    /// Session settings derived from this section.
    pub fn settings(&self) -> RecorderSettings {
        RecorderSettings {
            autosave_interval: Duration::from_secs(self.autosave_interval_secs),
            saved_indicator: Duration::from_secs(self.saved_indicator_secs),
        }
    }
}
