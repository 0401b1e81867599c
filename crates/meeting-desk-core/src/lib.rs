//! Meeting Desk Core Library
//!
//! Meeting recorder state machine with a logical timer scheduler, notes
//! autosave, action items, and the create-meeting form, all talking to the
//! outside world through the [`NotificationSink`] and [`PersistenceGateway`]
//! ports.
//!
//! # Example
//!
//! ```no_run
//! use meeting_desk_core::{
//!     CoreResult, MeetingId, Notification, NotificationSink, RecorderSession,
//!     RecorderSettings, SaveError, SessionRecord, PersistenceGateway, MeetingDraft,
//!     CreateError,
//! };
//!
//! use std::time::Duration;
//!
//! struct Console;
//!
//! impl NotificationSink for Console {
//!     fn notify(&self, notification: Notification) {
//!         println!("{}: {}", notification.title, notification.message);
//!     }
//! }
//!
//! struct Discard;
//!
//! impl PersistenceGateway for Discard {
//!     async fn save(&self, _record: SessionRecord) -> Result<(), SaveError> {
//!         Ok(())
//!     }
//!
//!     async fn create_meeting(&self, _draft: MeetingDraft) -> Result<MeetingId, CreateError> {
//!         Ok(MeetingId::new(1))
//!     }
//! }
//!
//! async fn record() -> CoreResult<()> {
//!     let mut session =
//!         RecorderSession::new(MeetingId::new(1), RecorderSettings::default(), Console, Discard);
//!
//!     session.start()?;
//!     session.edit_notes("Agreed to ship on Friday");
//!     session.advance(Duration::from_secs(90)).await;
//!     session.stop().await?;
//!
//!     println!("Recorded {}", session.formatted_elapsed());
//!     Ok(())
//! }
//! ```

mod error;
mod meeting;
mod ports;
mod recorder;
mod validation;

pub use {
    error::{DeskError, Result as CoreResult},
    meeting::{
        CreateMeetingDialog, DEFAULT_DURATION, MAX_SUGGESTED_DURATION, Meeting, MeetingCatalog,
        MeetingDraft, MeetingField, MeetingForm, MeetingId, MeetingStatus, MeetingTab, Priority,
    },
    ports::{
        CreateError, Notification, NotificationSink, PersistenceGateway, SaveError, SessionRecord,
        Severity,
    },
    recorder::{
        ActionItem, ActionItemDraft, ActionItemId, ActionItemList, DEFAULT_AUTOSAVE_INTERVAL,
        DEFAULT_SAVED_INDICATOR, NotesBuffer, RecorderSession, RecorderSettings, RecordingSession,
        SaveState, Scheduler, SessionStatus, TICK_INTERVAL, TimerId, UNASSIGNED, format_elapsed,
    },
    validation::FieldErrors,
};

#[cfg(test)]
mod tests;
