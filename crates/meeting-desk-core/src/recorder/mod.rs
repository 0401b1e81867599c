mod action_items;
mod notes;
mod recording;
mod scheduler;
mod session;
mod settings;

pub use {
    action_items::{ActionItem, ActionItemDraft, ActionItemId, ActionItemList, UNASSIGNED},
    notes::{NotesBuffer, SaveState},
    recording::{RecordingSession, SessionStatus, format_elapsed},
    scheduler::{Scheduler, TimerId},
    session::RecorderSession,
    settings::{
        DEFAULT_AUTOSAVE_INTERVAL, DEFAULT_SAVED_INDICATOR, RecorderSettings, TICK_INTERVAL,
    },
};
