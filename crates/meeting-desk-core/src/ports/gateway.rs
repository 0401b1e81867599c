use crate::{
    meeting::{MeetingDraft, MeetingId},
    recorder::ActionItem,
};

use std::{future::Future, sync::Arc};

use thiserror::Error;
use uuid::Uuid;

/// Backend rejected a session save.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct SaveError {
    /// Human-readable reason for failure.
    pub reason: String,
}

impl SaveError {
    /// Create a save error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Backend rejected a meeting creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct CreateError {
    /// Human-readable reason for failure.
    pub reason: String,
}

impl CreateError {
    /// Create a create error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Everything a recorder session hands to the backend on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Meeting being recorded.
    pub meeting_id: MeetingId,
    /// Recorder session, for log correlation.
    pub session_id: Uuid,
    /// Elapsed recording time at the moment of the save.
    pub elapsed_seconds: u64,
    /// Notes buffer contents.
    pub notes: String,
    /// Action items in insertion order.
    pub action_items: Vec<ActionItem>,
}

/// Opaque backend for saving sessions and creating meetings.
///
/// Each call completes exactly once. Callers keep at most one call in
/// flight per component and keep their UI disabled until it completes.
pub trait PersistenceGateway {
    /// Persist notes and action items for a session.
    fn save(&self, record: SessionRecord) -> impl Future<Output = Result<(), SaveError>> + Send;

    /// Create a meeting from a validated draft, returning its identifier.
    fn create_meeting(
        &self,
        draft: MeetingDraft,
    ) -> impl Future<Output = Result<MeetingId, CreateError>> + Send;
}

impl<T: PersistenceGateway> PersistenceGateway for Arc<T> {
    fn save(&self, record: SessionRecord) -> impl Future<Output = Result<(), SaveError>> + Send {
        (**self).save(record)
    }

    fn create_meeting(
        &self,
        draft: MeetingDraft,
    ) -> impl Future<Output = Result<MeetingId, CreateError>> + Send {
        (**self).create_meeting(draft)
    }
}
