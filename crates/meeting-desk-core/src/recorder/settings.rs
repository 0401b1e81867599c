use std::time::Duration;

/// Period of the stopwatch tick. One tick counts one second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Quiet period after the last notes edit before an autosave fires.
pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// How long the "saved" indicator stays up after a successful save.
pub const DEFAULT_SAVED_INDICATOR: Duration = Duration::from_secs(2);

/// Timer cadences for a [`crate::RecorderSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecorderSettings {
    /// Autosave debounce window and cadence.
    pub autosave_interval: Duration,
    /// Display window for [`crate::SaveState::Saved`].
    pub saved_indicator: Duration,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            autosave_interval: DEFAULT_AUTOSAVE_INTERVAL,
            saved_indicator: DEFAULT_SAVED_INDICATOR,
        }
    }
}
