use crate::{
    ActionItemDraft, DeskError, SaveState, SessionStatus, Severity,
    tests::support::{MockGateway, create_default_session, create_session},
};

use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// WHAT: A running session counts one second per tick
/// WHY: The stopwatch is driven purely by logical time
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_running_session_when_advancing_90_seconds_then_elapsed_is_90() {
    // Given: A started session
    let (mut session, _, _) = create_default_session();
    session.start().unwrap();

    // When: Advancing 90 seconds
    session.advance(ONE_SECOND * 90).await;

    // Then: 90 seconds counted
    assert_eq!(session.elapsed_seconds(), 90);
    assert_eq!(session.formatted_elapsed(), "00:01:30");
}

/// WHAT: Idle sessions do not count
/// WHY: The clock only runs after Start
#[tokio::test]
async fn given_idle_session_when_advancing_then_elapsed_stays_zero() {
    // Given: A session that was never started
    let (mut session, _, _) = create_default_session();

    // When: Advancing a minute
    let fired = session.advance(ONE_SECOND * 60).await;

    // Then: Nothing fired and nothing counted
    assert_eq!(fired, 0);
    assert_eq!(session.elapsed_seconds(), 0);
    assert_eq!(session.status(), SessionStatus::Idle);
}

/// WHAT: Time spent paused is not counted
/// WHY: elapsedSeconds increments only while Running
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_pause_and_resume_when_advancing_then_only_running_time_counts() {
    // Given: A session that ran for 10 seconds
    let (mut session, _, _) = create_default_session();
    session.start().unwrap();
    session.advance(ONE_SECOND * 10).await;

    // When: Paused for 20 seconds, then resumed for 5
    assert_eq!(session.toggle_pause().unwrap(), SessionStatus::Paused);
    session.advance(ONE_SECOND * 20).await;
    assert_eq!(session.elapsed_seconds(), 10);

    assert_eq!(session.toggle_pause().unwrap(), SessionStatus::Running);
    session.advance(ONE_SECOND * 5).await;

    // Then: 15 seconds counted
    assert_eq!(session.elapsed_seconds(), 15);
}

/// WHAT: Resume starts a fresh one-second period
/// WHY: Partial seconds before a pause are not carried over
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_pause_mid_second_when_resuming_then_next_tick_is_a_full_second_later() {
    // Given: 1.5 seconds of running time
    let (mut session, _, _) = create_default_session();
    session.start().unwrap();
    session.advance(Duration::from_millis(1500)).await;
    assert_eq!(session.elapsed_seconds(), 1);

    // When: Pausing and immediately resuming
    session.toggle_pause().unwrap();
    session.toggle_pause().unwrap();

    // Then: Half a second later nothing new, a full second later one more
    session.advance(Duration::from_millis(500)).await;
    assert_eq!(session.elapsed_seconds(), 1);
    session.advance(Duration::from_millis(500)).await;
    assert_eq!(session.elapsed_seconds(), 2);
}

/// WHAT: Elapsed time never decreases across a full lifecycle
/// WHY: Monotonicity is the stopwatch's core invariant
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_mixed_transitions_when_observing_elapsed_then_monotonic() {
    // Given: A session and a record of observations
    let (mut session, _, _) = create_default_session();
    let mut observed = vec![session.elapsed_seconds()];

    // When: Running through start, pauses, resumes, stop
    session.start().unwrap();
    for step in 0..6 {
        session.advance(Duration::from_millis(700 * (step + 1))).await;
        observed.push(session.elapsed_seconds());
        session.toggle_pause().unwrap();
        observed.push(session.elapsed_seconds());
    }
    session.stop().await.unwrap();
    session.advance(ONE_SECOND * 10).await;
    observed.push(session.elapsed_seconds());

    // Then: Every observation is >= the previous one
    assert!(observed.windows(2).all(|pair| pair[0] <= pair[1]));
}

/// WHAT: Stop is terminal for the clock and the state machine
/// WHY: No tick or transition may mutate state after Stop
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_stopped_session_when_advancing_and_transitioning_then_nothing_changes() {
    // Given: A session stopped after 5 seconds
    let (mut session, _, _) = create_default_session();
    session.start().unwrap();
    session.advance(ONE_SECOND * 5).await;
    session.stop().await.unwrap();

    // When: Advancing and attempting transitions
    let fired = session.advance(ONE_SECOND * 100).await;
    let start = session.start();
    let toggle = session.toggle_pause();
    let stop = session.stop().await;

    // Then: No timers left, nothing counted, every transition rejected
    assert_eq!(fired, 0);
    assert_eq!(session.pending_timers(), 0);
    assert_eq!(session.elapsed_seconds(), 5);
    assert_eq!(session.status(), SessionStatus::Stopped);
    assert!(matches!(start, Err(DeskError::InvalidTransition { .. })));
    assert!(matches!(toggle, Err(DeskError::InvalidTransition { .. })));
    assert!(matches!(stop, Err(DeskError::InvalidTransition { .. })));
}

/// WHAT: Stop saves notes and action items even when notes are empty
/// WHY: Ending a meeting always persists its outcome
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_empty_notes_when_stopping_then_unconditional_save_with_action_items() {
    // Given: A running session with one action item and no notes
    let (mut session, notifier, gateway) = create_default_session();
    session.start().unwrap();
    session
        .add_action_item(&mut ActionItemDraft::new("Send slides", "Ana", ""))
        .unwrap();
    session.advance(ONE_SECOND * 3).await;

    // When: Stopping
    session.stop().await.unwrap();

    // Then: Exactly one save carrying the action item and final elapsed time
    assert_eq!(gateway.save_calls(), 1);
    let record = gateway.last_saved().unwrap();
    assert_eq!(record.elapsed_seconds, 3);
    assert_eq!(record.notes, "");
    assert_eq!(record.action_items.len(), 1);
    assert_eq!(record.session_id, session.session_id());
    assert_eq!(session.notes().save_state(), SaveState::Saved);
    assert_eq!(notifier.last().unwrap().title, "Meeting Ended");
}

/// WHAT: Stop from Paused is allowed
/// WHY: A meeting can be ended while the clock is suspended
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_paused_session_when_stopping_then_stopped() {
    // Given: A paused session
    let (mut session, _, gateway) = create_default_session();
    session.start().unwrap();
    session.toggle_pause().unwrap();

    // When: Stopping
    let result = session.stop().await;

    // Then: Stopped and saved
    assert!(result.is_ok());
    assert_eq!(session.status(), SessionStatus::Stopped);
    assert_eq!(gateway.save_calls(), 1);
}

/// WHAT: A failed save on Stop still ends the meeting
/// WHY: Save errors are reported but never block the transition
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_failing_gateway_when_stopping_then_stopped_and_failure_reported() {
    // Given: A running session whose gateway rejects saves
    let (mut session, notifier, _) = create_session(MockGateway::with_save_failure());
    session.start().unwrap();
    session.edit_notes("Budget approved");

    // When: Stopping
    let result = session.stop().await;

    // Then: Stopped, save error returned, one destructive notification
    assert!(matches!(result, Err(DeskError::SaveFailed { .. })));
    assert_eq!(session.status(), SessionStatus::Stopped);
    assert_eq!(session.notes().save_state(), SaveState::Idle);
    assert_eq!(notifier.count_with(Severity::Destructive), 1);
    assert_eq!(notifier.last().unwrap().title, "Save Failed");
}

/// WHAT: Notes and action items remain usable after Stop
/// WHY: A failed stop save must be retryable through manual save
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_stop_save_failed_when_saving_manually_then_retry_succeeds() {
    // Given: A session stopped while the gateway was failing
    let (mut session, _, gateway) = create_session(MockGateway::with_save_failure());
    session.start().unwrap();
    session.edit_notes("Decisions");
    assert!(session.stop().await.is_err());

    // When: The backend recovers and the user saves manually
    gateway.set_save_failure(false);
    let result = session.save_notes().await;

    // Then: Saved, with no indicator timer left behind
    assert!(result.is_ok());
    assert_eq!(gateway.last_saved().unwrap().notes, "Decisions");
    assert_eq!(session.pending_timers(), 0);
}
