use crate::{CoreResult, DeskError};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;

/// Lifecycle of a recording session.
///
/// `Idle -> Running <-> Paused -> Stopped`. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Not started yet.
    #[default]
    Idle,
    /// Clock is running.
    Running,
    /// Clock is suspended.
    Paused,
    /// Meeting has ended.
    Stopped,
}

impl SessionStatus {
    /// Running or paused.
    pub fn is_active(self) -> bool {
        matches!(self, SessionStatus::Running | SessionStatus::Paused)
    }

    /// Lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Running => "running",
            SessionStatus::Paused => "paused",
            SessionStatus::Stopped => "stopped",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render whole seconds as zero-padded `HH:MM:SS`.
///
/// The hour field is not capped and simply widens past 99.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Stopwatch state: status plus whole elapsed seconds.
///
/// `elapsed_seconds` only grows, and only through [`RecordingSession::tick`]
/// while running. Timers live in [`crate::RecorderSession`]; this type is the
/// pure transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordingSession {
    status: SessionStatus,
    elapsed_seconds: u64,
}

impl RecordingSession {
    /// A fresh, idle stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whole seconds counted while running.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn formatted_elapsed(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    /// `Idle -> Running`.
    #[track_caller]
    pub fn start(&mut self) -> CoreResult<()> {
        match self.status {
            SessionStatus::Idle => {
                self.status = SessionStatus::Running;
                Ok(())
            }
            from => Err(invalid_transition(from, "start")),
        }
    }

    /// `Running <-> Paused`. Returns the new status.
    #[track_caller]
    pub fn toggle_pause(&mut self) -> CoreResult<SessionStatus> {
        self.status = match self.status {
            SessionStatus::Running => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Running,
            from => return Err(invalid_transition(from, "pause or resume")),
        };
        Ok(self.status)
    }

    /// `Running | Paused -> Stopped`.
    #[track_caller]
    pub fn stop(&mut self) -> CoreResult<()> {
        if !self.status.is_active() {
            return Err(invalid_transition(self.status, "stop"));
        }
        self.status = SessionStatus::Stopped;
        Ok(())
    }

    /// Count one second if running. Returns whether the counter moved.
    pub fn tick(&mut self) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }
}

#[track_caller]
fn invalid_transition(from: SessionStatus, action: &'static str) -> DeskError {
    DeskError::InvalidTransition {
        from,
        action,
        location: ErrorLocation::from(Location::caller()),
    }
}
