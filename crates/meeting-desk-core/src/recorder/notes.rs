use std::time::Duration;

/// Progress indicator for the notes buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    /// Nothing to report.
    #[default]
    Idle,
    /// A save is in flight.
    Saving,
    /// The last save succeeded recently.
    Saved,
}

/// Free-text meeting notes plus save bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesBuffer {
    text: String,
    last_saved_at: Option<Duration>,
    save_state: SaveState,
    dirty: bool,
}

impl NotesBuffer {
    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the buffer holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Session clock offset of the last successful save.
    pub fn last_saved_at(&self) -> Option<Duration> {
        self.last_saved_at
    }

    /// Current indicator.
    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    /// Whether the text changed since the last successful save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn replace(&mut self, text: String) {
        self.text = text;
        self.dirty = true;
    }

    /// Enter `Saving` until the returned guard drops, which restores the
    /// previous indicator. Record the outcome after the guard is gone.
    pub(crate) fn begin_save(&mut self) -> PendingSave<'_> {
        let previous = std::mem::replace(&mut self.save_state, SaveState::Saving);
        PendingSave {
            notes: self,
            previous,
        }
    }

    pub(crate) fn finish_save(&mut self, at: Duration) {
        self.save_state = SaveState::Saved;
        self.last_saved_at = Some(at);
        self.dirty = false;
    }

    pub(crate) fn clear_indicator(&mut self) {
        if self.save_state == SaveState::Saved {
            self.save_state = SaveState::Idle;
        }
    }
}

/// A save in flight. Covers both a failed save and a caller that gives up on
/// the save future before it resolves.
pub(crate) struct PendingSave<'a> {
    notes: &'a mut NotesBuffer,
    previous: SaveState,
}

impl Drop for PendingSave<'_> {
    fn drop(&mut self) {
        self.notes.save_state = self.previous;
    }
}
