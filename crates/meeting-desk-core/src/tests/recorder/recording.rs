use crate::{DeskError, RecordingSession, SessionStatus, format_elapsed};

/// WHAT: Elapsed seconds render as zero-padded HH:MM:SS
/// WHY: The timer display depends on exact formatting
#[test]
fn given_whole_seconds_when_formatting_then_zero_padded_hh_mm_ss() {
    // Given/When/Then: Known values format exactly
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(59), "00:00:59");
    assert_eq!(format_elapsed(3661), "01:01:01");
}

/// WHAT: Hour field widens instead of wrapping past 99 hours
/// WHY: No upper bound is enforced on meeting length
#[test]
fn given_more_than_99_hours_when_formatting_then_hour_field_grows() {
    // Given: 100 hours and 5 seconds
    let seconds = 100 * 3600 + 5;

    // When: Formatting
    let formatted = format_elapsed(seconds);

    // Then: Three-digit hour field
    assert_eq!(formatted, "100:00:05");
}

/// WHAT: Start is only accepted from Idle
/// WHY: A meeting cannot be started twice
#[test]
fn given_running_session_when_starting_again_then_invalid_transition() {
    // Given: A running session
    let mut recording = RecordingSession::new();
    assert!(recording.start().is_ok());

    // When: Starting again
    let result = recording.start();

    // Then: Rejected with the current status reported
    assert!(matches!(
        result,
        Err(DeskError::InvalidTransition {
            from: SessionStatus::Running,
            ..
        })
    ));
    assert_eq!(recording.status(), SessionStatus::Running);
}

/// WHAT: Pause toggles between Running and Paused
/// WHY: Pause and resume share one control
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_session_when_toggling_twice_then_back_to_running() {
    // Given: A running session
    let mut recording = RecordingSession::new();
    recording.start().unwrap();

    // When: Toggling pause twice
    let first = recording.toggle_pause().unwrap();
    let second = recording.toggle_pause().unwrap();

    // Then: Paused, then Running again
    assert_eq!(first, SessionStatus::Paused);
    assert_eq!(second, SessionStatus::Running);
}

/// WHAT: Pause and stop are rejected before Start
/// WHY: Only an active meeting can be paused or ended
#[test]
fn given_idle_session_when_pausing_or_stopping_then_rejected() {
    // Given: An idle session
    let mut recording = RecordingSession::new();

    // When/Then: Both transitions fail and status stays Idle
    assert!(recording.toggle_pause().is_err());
    assert!(recording.stop().is_err());
    assert_eq!(recording.status(), SessionStatus::Idle);
}

/// WHAT: Ticks only count while Running
/// WHY: elapsedSeconds may only grow during running ticks
#[test]
#[allow(clippy::unwrap_used)]
fn given_each_status_when_ticking_then_only_running_counts() {
    // Given: A fresh session
    let mut recording = RecordingSession::new();

    // When/Then: Idle does not count
    assert!(!recording.tick());

    recording.start().unwrap();
    assert!(recording.tick());
    assert_eq!(recording.elapsed_seconds(), 1);

    recording.toggle_pause().unwrap();
    assert!(!recording.tick());
    assert_eq!(recording.elapsed_seconds(), 1);

    recording.toggle_pause().unwrap();
    recording.stop().unwrap();
    assert!(!recording.tick());
    assert_eq!(recording.elapsed_seconds(), 1);
}

/// WHAT: Stopped is terminal
/// WHY: No transition may follow Stop
#[test]
#[allow(clippy::unwrap_used)]
fn given_stopped_session_when_attempting_any_transition_then_all_rejected() {
    // Given: A stopped session
    let mut recording = RecordingSession::new();
    recording.start().unwrap();
    recording.stop().unwrap();

    // When/Then: Every transition fails and status stays Stopped
    assert!(recording.start().is_err());
    assert!(recording.toggle_pause().is_err());
    assert!(recording.stop().is_err());
    assert_eq!(recording.status(), SessionStatus::Stopped);
}
