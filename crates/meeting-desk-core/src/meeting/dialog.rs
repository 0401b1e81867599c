use crate::{
    CoreResult, DeskError, FieldErrors,
    meeting::{Meeting, MeetingField, MeetingForm},
    ports::{Notification, NotificationSink, PersistenceGateway},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Create-meeting dialog: form state, inline errors, and one in-flight
/// create at a time.
pub struct CreateMeetingDialog<N, G> {
    open: bool,
    form: MeetingForm,
    errors: FieldErrors,
    submitting: bool,
    notifier: N,
    gateway: G,
}

impl<N, G> CreateMeetingDialog<N, G>
where
    N: NotificationSink,
    G: PersistenceGateway,
{
    /// A closed dialog with a default form.
    pub fn new(notifier: N, gateway: G) -> Self {
        Self {
            open: false,
            form: MeetingForm::default(),
            errors: FieldErrors::new(),
            submitting: false,
            notifier,
            gateway,
        }
    }

    /// Whether the dialog is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a create call is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current form contents.
    pub fn form(&self) -> &MeetingForm {
        &self.form
    }

    /// Inline errors from the last failed submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Show the dialog. Form contents are kept from any previous opening.
    pub fn open(&mut self) {
        self.open = true;
        debug!("Create meeting dialog opened");
    }

    /// Hide the dialog. Rejected while a create is in flight.
    #[track_caller]
    pub fn close(&mut self) -> CoreResult<()> {
        if self.submitting {
            return Err(DeskError::SubmissionInFlight {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.open = false;
        debug!("Create meeting dialog closed");
        Ok(())
    }

    /// Update one input and clear its inline error.
    pub fn set_field(&mut self, field: MeetingField, value: impl Into<String>) {
        self.form.set(field, value);
        if self.errors.remove(field.as_str()).is_some() {
            debug!(field = field.as_str(), "Cleared field error");
        }
    }

    /// Validate and create the meeting.
    ///
    /// Validation failures populate [`Self::errors`], emit one summary
    /// notification, and make no gateway call. A successful create resets
    /// the form and closes the dialog; a failed one keeps the form as typed.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> CoreResult<Meeting> {
        if self.submitting {
            return Err(DeskError::SubmissionInFlight {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                if let Some(errors) = e.field_errors() {
                    self.errors = errors.clone();
                }
                warn!(error = %e, "Meeting form rejected");
                self.notifier.notify(Notification::destructive(
                    "Validation Error",
                    "Please fill in all required fields correctly.",
                ));
                return Err(e);
            }
        };
        self.errors = FieldErrors::new();

        let result = {
            let _in_flight = InFlight::enter(&mut self.submitting);
            self.gateway.create_meeting(draft.clone()).await
        };

        match result {
            Ok(id) => {
                info!(meeting_id = %id, title = %draft.title, "Meeting created");
                self.notifier.notify(Notification::info(
                    "Meeting Created",
                    format!("\"{}\" has been scheduled successfully.", draft.title),
                ));
                self.form = MeetingForm::default();
                self.open = false;
                Ok(Meeting::scheduled(id, draft))
            }
            Err(source) => {
                error!(error = %source, "Meeting creation failed");
                self.notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to create meeting. Please try again.",
                ));
                Err(DeskError::CreateFailed {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}

/// Holds the submitting flag for the duration of a create call, including
/// when the submit future is dropped before it resolves.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn enter(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
