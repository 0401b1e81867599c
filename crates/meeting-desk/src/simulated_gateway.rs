use meeting_desk_core::{
    CreateError, MeetingDraft, MeetingId, PersistenceGateway, SaveError, SessionRecord,
};

use std::{
    sync::atomic::{AtomicU64, AtomicUsize, Ordering},
    time::Duration,
};

use tracing::{info, instrument};

/// In-process backend that waits a fixed latency and always succeeds.
#[derive(Debug)]
pub struct SimulatedGateway {
    latency: Duration,
    next_id: AtomicU64,
    saves: AtomicUsize,
}

impl SimulatedGateway {
    /// Gateway handing out meeting ids from `first_id` upwards.
    pub fn new(latency: Duration, first_id: MeetingId) -> Self {
        Self {
            latency,
            next_id: AtomicU64::new(first_id.get()),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of session records accepted so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl PersistenceGateway for SimulatedGateway {
    #[instrument(skip(self, record), fields(session_id = %record.session_id))]
    async fn save(&self, record: SessionRecord) -> Result<(), SaveError> {
        tokio::time::sleep(self.latency).await;
        self.saves.fetch_add(1, Ordering::SeqCst);

        info!(
            meeting_id = %record.meeting_id,
            elapsed_seconds = record.elapsed_seconds,
            notes_len = record.notes.len(),
            action_items = record.action_items.len(),
            "Session record saved"
        );

        Ok(())
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create_meeting(&self, draft: MeetingDraft) -> Result<MeetingId, CreateError> {
        tokio::time::sleep(self.latency).await;
        let id = MeetingId::new(self.next_id.fetch_add(1, Ordering::SeqCst));

        info!(
            meeting_id = %id,
            date = %draft.date,
            time = %draft.time,
            duration_minutes = draft.duration_minutes,
            attendees = draft.attendees.len(),
            "Meeting created"
        );

        Ok(id)
    }
}
