//! Meeting recorder: stopwatch, notes with debounced autosave, action items.
//!
//! All timers run on a logical [`Scheduler`] owned by the session. Nothing
//! happens until the owner calls [`RecorderSession::advance`], so a real-time
//! driver and a test can share the same code path.

use crate::{
    CoreResult, DeskError,
    meeting::MeetingId,
    ports::{Notification, NotificationSink, PersistenceGateway, SessionRecord},
    recorder::{
        ActionItemDraft, ActionItemId, ActionItemList, NotesBuffer, RecorderSettings,
        RecordingSession, Scheduler, SessionStatus, TICK_INTERVAL, TimerId,
    },
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    Tick,
    Autosave,
    ClearSavedIndicator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveTrigger {
    Autosave,
    Manual,
    Stop,
}

impl SaveTrigger {
    fn as_str(self) -> &'static str {
        match self {
            SaveTrigger::Autosave => "autosave",
            SaveTrigger::Manual => "manual",
            SaveTrigger::Stop => "stop",
        }
    }
}

/// One recorder view's worth of state.
///
/// Exclusively owns its notes and action items. Dropping the session cancels
/// every pending timer.
pub struct RecorderSession<N, G> {
    meeting_id: MeetingId,
    session_id: Uuid,
    settings: RecorderSettings,
    recording: RecordingSession,
    notes: NotesBuffer,
    action_items: ActionItemList,
    scheduler: Scheduler<TimerEvent>,
    tick_timer: Option<TimerId>,
    autosave_timer: Option<TimerId>,
    indicator_timer: Option<TimerId>,
    notifier: N,
    gateway: G,
}

impl<N, G> RecorderSession<N, G>
where
    N: NotificationSink,
    G: PersistenceGateway,
{
    /// Create an idle session for `meeting_id`.
    pub fn new(meeting_id: MeetingId, settings: RecorderSettings, notifier: N, gateway: G) -> Self {
        let session_id = Uuid::new_v4();

        info!(
            session_id = %session_id,
            meeting_id = %meeting_id,
            autosave_secs = settings.autosave_interval.as_secs(),
            "Recorder session created"
        );

        Self {
            meeting_id,
            session_id,
            settings,
            recording: RecordingSession::new(),
            notes: NotesBuffer::default(),
            action_items: ActionItemList::new(),
            scheduler: Scheduler::new(),
            tick_timer: None,
            autosave_timer: None,
            indicator_timer: None,
            notifier,
            gateway,
        }
    }

    /// Meeting this session records.
    pub fn meeting_id(&self) -> MeetingId {
        self.meeting_id
    }

    /// Unique id for log correlation.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Current stopwatch status.
    pub fn status(&self) -> SessionStatus {
        self.recording.status()
    }

    /// Whole seconds counted while running.
    pub fn elapsed_seconds(&self) -> u64 {
        self.recording.elapsed_seconds()
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn formatted_elapsed(&self) -> String {
        self.recording.formatted_elapsed()
    }

    /// Notes buffer and its save indicator.
    pub fn notes(&self) -> &NotesBuffer {
        &self.notes
    }

    /// Action items in insertion order.
    pub fn action_items(&self) -> &ActionItemList {
        &self.action_items
    }

    /// Logical time since the session was created.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Timers still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Logical time at which the pending autosave fires, if one is armed.
    pub fn autosave_due_at(&self) -> Option<Duration> {
        self.autosave_timer.and_then(|id| self.scheduler.deadline(id))
    }

    /// Snapshot of everything a save would send.
    pub fn record(&self) -> SessionRecord {
        SessionRecord {
            meeting_id: self.meeting_id,
            session_id: self.session_id,
            elapsed_seconds: self.recording.elapsed_seconds(),
            notes: self.notes.text().to_string(),
            action_items: self.action_items.items().to_vec(),
        }
    }

    /// Start the meeting clock. Only valid while idle.
    #[track_caller]
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn start(&mut self) -> CoreResult<()> {
        if let Err(e) = self.recording.start() {
            warn!(error = %e, "Start rejected");
            return Err(e);
        }

        self.arm_tick();
        self.arm_autosave();

        info!(meeting_id = %self.meeting_id, "Recording started");

        Ok(())
    }

    /// Pause a running clock or resume a paused one. Returns the new status.
    ///
    /// Resuming starts a fresh one-second period.
    #[track_caller]
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn toggle_pause(&mut self) -> CoreResult<SessionStatus> {
        let status = match self.recording.toggle_pause() {
            Ok(status) => status,
            Err(e) => {
                warn!(error = %e, "Pause toggle rejected");
                return Err(e);
            }
        };

        if status == SessionStatus::Paused {
            cancel_slot(&mut self.scheduler, &mut self.tick_timer);
            info!(
                elapsed_seconds = self.recording.elapsed_seconds(),
                "Recording paused"
            );
        } else {
            self.arm_tick();
            info!(
                elapsed_seconds = self.recording.elapsed_seconds(),
                "Recording resumed"
            );
        }

        Ok(status)
    }

    /// End the meeting and save notes and action items unconditionally.
    ///
    /// The transition to [`SessionStatus::Stopped`] happens even when the
    /// save fails; the returned error only reports the save.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub async fn stop(&mut self) -> CoreResult<()> {
        if let Err(e) = self.recording.stop() {
            warn!(error = %e, "Stop rejected");
            return Err(e);
        }

        let cancelled = self.cancel_all_timers();

        info!(
            elapsed_seconds = self.recording.elapsed_seconds(),
            elapsed = %self.recording.formatted_elapsed(),
            cancelled_timers = cancelled,
            "Recording stopped"
        );

        self.run_save(SaveTrigger::Stop).await
    }

    /// Replace the notes text. Resets the autosave window while active.
    pub fn edit_notes(&mut self, text: impl Into<String>) {
        self.notes.replace(text.into());

        if self.recording.status().is_active() {
            self.arm_autosave();
        }

        debug!(
            session_id = %self.session_id,
            notes_len = self.notes.text().len(),
            "Notes edited"
        );
    }

    /// User-triggered save, independent of the autosave cadence.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub async fn save_notes(&mut self) -> CoreResult<()> {
        self.run_save(SaveTrigger::Manual).await
    }

    /// Validate and append an action item.
    ///
    /// On success the draft is cleared and a confirmation is emitted. On
    /// failure a single validation notification is emitted and nothing
    /// changes.
    #[track_caller]
    pub fn add_action_item(&mut self, draft: &mut ActionItemDraft) -> CoreResult<ActionItemId> {
        match self.action_items.add(draft) {
            Ok(id) => {
                let draft = std::mem::take(draft);
                info!(
                    session_id = %self.session_id,
                    action_item_id = %id,
                    "Action item added"
                );
                self.notifier.notify(Notification::info(
                    "Action Item Added",
                    format!("\"{}\" has been added.", draft.task.trim()),
                ));
                Ok(id)
            }
            Err(e) => {
                let message = e
                    .field_errors()
                    .and_then(|errors| errors.get("task").or_else(|| errors.first_message()))
                    .unwrap_or("Please check the action item fields.")
                    .to_string();
                warn!(session_id = %self.session_id, error = %e, "Action item rejected");
                self.notifier
                    .notify(Notification::destructive("Validation Error", message));
                Err(e)
            }
        }
    }

    /// Flip an action item's completion. Unknown ids are a silent no-op.
    pub fn toggle_action_item(&mut self, id: ActionItemId) -> Option<bool> {
        let toggled = self.action_items.toggle(id);
        match toggled {
            Some(completed) => debug!(
                session_id = %self.session_id,
                action_item_id = %id,
                completed,
                "Action item toggled"
            ),
            None => debug!(
                session_id = %self.session_id,
                action_item_id = %id,
                "Toggle ignored for unknown action item"
            ),
        }
        toggled
    }

    /// Move logical time forward by `by`, firing every timer that falls due.
    ///
    /// Timers scheduled by a handler fire in the same call if they fall
    /// inside the window. Returns how many timers fired.
    pub async fn advance(&mut self, by: Duration) -> usize {
        let target = self.scheduler.now().saturating_add(by);
        let mut fired = 0;

        while let Some(event) = self.scheduler.pop_due(target) {
            fired += 1;
            self.handle_timer(event).await;
        }

        self.scheduler.advance_to(target);
        fired
    }

    async fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick => {
                self.tick_timer = None;
                if self.recording.tick() {
                    self.arm_tick();
                }
            }
            TimerEvent::Autosave => {
                self.autosave_timer = None;
                self.autosave().await;
            }
            TimerEvent::ClearSavedIndicator => {
                self.indicator_timer = None;
                self.notes.clear_indicator();
            }
        }
    }

    async fn autosave(&mut self) {
        let running = self.recording.status() == SessionStatus::Running;

        // Armed before saving; a failed save cancels it again.
        if self.recording.status().is_active() {
            self.arm_autosave();
        }

        if running && !self.notes.is_empty() && self.notes.is_dirty() {
            if self.run_save(SaveTrigger::Autosave).await.is_err() {
                // Reported once; the next edit re-arms the cadence.
                cancel_slot(&mut self.scheduler, &mut self.autosave_timer);
            }
        } else {
            debug!(
                session_id = %self.session_id,
                running,
                dirty = self.notes.is_dirty(),
                "Autosave window elapsed with nothing to save"
            );
        }
    }

    async fn run_save(&mut self, trigger: SaveTrigger) -> CoreResult<()> {
        let record = self.record();

        debug!(
            session_id = %self.session_id,
            trigger = trigger.as_str(),
            notes_len = record.notes.len(),
            action_items = record.action_items.len(),
            "Saving session"
        );

        let result = {
            let _pending = self.notes.begin_save();
            self.gateway.save(record).await
        };

        match result {
            Ok(()) => {
                let now = self.scheduler.now();
                self.notes.finish_save(now);

                cancel_slot(&mut self.scheduler, &mut self.indicator_timer);
                if self.recording.status() != SessionStatus::Stopped {
                    self.indicator_timer = Some(self.scheduler.schedule(
                        self.settings.saved_indicator,
                        TimerEvent::ClearSavedIndicator,
                    ));
                }

                match trigger {
                    SaveTrigger::Autosave => {}
                    SaveTrigger::Manual => self.notifier.notify(Notification::info(
                        "Notes Saved",
                        "Your meeting notes have been saved.",
                    )),
                    SaveTrigger::Stop => self.notifier.notify(Notification::info(
                        "Meeting Ended",
                        format!(
                            "Duration {}. Notes and action items saved.",
                            self.recording.formatted_elapsed()
                        ),
                    )),
                }

                info!(
                    session_id = %self.session_id,
                    trigger = trigger.as_str(),
                    saved_at_ms = now.as_millis(),
                    "Session saved"
                );

                Ok(())
            }
            Err(source) => {
                warn!(
                    session_id = %self.session_id,
                    trigger = trigger.as_str(),
                    error = %source,
                    "Session save failed"
                );

                let notification = match trigger {
                    SaveTrigger::Autosave => Notification::destructive(
                        "Autosave Failed",
                        "Your notes could not be saved automatically. Use Save Notes to try again.",
                    ),
                    SaveTrigger::Manual | SaveTrigger::Stop => Notification::destructive(
                        "Save Failed",
                        "Failed to save meeting notes. Please try again.",
                    ),
                };
                self.notifier.notify(notification);

                Err(DeskError::SaveFailed {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    fn arm_tick(&mut self) {
        cancel_slot(&mut self.scheduler, &mut self.tick_timer);
        self.tick_timer = Some(self.scheduler.schedule(TICK_INTERVAL, TimerEvent::Tick));
    }

    fn arm_autosave(&mut self) {
        cancel_slot(&mut self.scheduler, &mut self.autosave_timer);
        self.autosave_timer = Some(
            self.scheduler
                .schedule(self.settings.autosave_interval, TimerEvent::Autosave),
        );
    }
}

impl<N, G> RecorderSession<N, G> {
    fn cancel_all_timers(&mut self) -> usize {
        self.tick_timer = None;
        self.autosave_timer = None;
        self.indicator_timer = None;
        self.scheduler.clear()
    }
}

impl<N, G> Drop for RecorderSession<N, G> {
    fn drop(&mut self) {
        let cancelled = self.cancel_all_timers();
        debug!(
            session_id = %self.session_id,
            cancelled_timers = cancelled,
            "Recorder session torn down"
        );
    }
}

fn cancel_slot<E>(scheduler: &mut Scheduler<E>, slot: &mut Option<TimerId>) {
    if let Some(id) = slot.take() {
        scheduler.cancel(id);
    }
}
