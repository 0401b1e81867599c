mod catalog;
mod dialog;
mod form;
mod model;

pub use {
    catalog::{MeetingCatalog, MeetingTab},
    dialog::CreateMeetingDialog,
    form::{DEFAULT_DURATION, MAX_SUGGESTED_DURATION, MeetingDraft, MeetingField, MeetingForm},
    model::{Meeting, MeetingId, MeetingStatus, Priority},
};
