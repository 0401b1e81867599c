use crate::{CoreResult, DeskError, FieldErrors};

use std::panic::Location;

use chrono::{NaiveDate, NaiveTime};
use error_location::ErrorLocation;
use tracing::warn;

/// Duration pre-filled in a fresh form, in minutes.
pub const DEFAULT_DURATION: &str = "30";

/// Upper bound shown on the duration input.
///
/// Only the lower bound of one minute is enforced; longer meetings are
/// accepted and logged.
pub const MAX_SUGGESTED_DURATION: u32 = 480;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Inputs of the create-meeting form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingField {
    /// Required.
    Title,
    /// Required, `YYYY-MM-DD`.
    Date,
    /// Required, `HH:MM`.
    Time,
    /// Required, whole minutes, at least one.
    Duration,
    /// Optional.
    Location,
    /// Optional, comma separated.
    Attendees,
    /// Optional.
    Agenda,
}

impl MeetingField {
    /// Every field in form order.
    pub const ALL: [MeetingField; 7] = [
        MeetingField::Title,
        MeetingField::Date,
        MeetingField::Time,
        MeetingField::Duration,
        MeetingField::Location,
        MeetingField::Attendees,
        MeetingField::Agenda,
    ];

    /// Key used in [`FieldErrors`].
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingField::Title => "title",
            MeetingField::Date => "date",
            MeetingField::Time => "time",
            MeetingField::Duration => "duration",
            MeetingField::Location => "location",
            MeetingField::Attendees => "attendees",
            MeetingField::Agenda => "agenda",
        }
    }

    /// Look a field up by its key.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
    }
}

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingForm {
    /// Meeting title.
    pub title: String,
    /// Date input.
    pub date: String,
    /// Time input.
    pub time: String,
    /// Duration input, in minutes.
    pub duration: String,
    /// Location input.
    pub location: String,
    /// Comma-separated attendees.
    pub attendees: String,
    /// Agenda text.
    pub agenda: String,
}

impl Default for MeetingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            time: String::new(),
            duration: DEFAULT_DURATION.to_string(),
            location: String::new(),
            attendees: String::new(),
            agenda: String::new(),
        }
    }
}

/// Validated form output, handed to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingDraft {
    /// Trimmed title.
    pub title: String,
    /// Meeting date.
    pub date: NaiveDate,
    /// Start time.
    pub time: NaiveTime,
    /// Planned length in minutes.
    pub duration_minutes: u32,
    /// Trimmed location.
    pub location: String,
    /// Non-empty attendee entries.
    pub attendees: Vec<String>,
    /// Agenda text.
    pub agenda: String,
}

impl MeetingForm {
    /// Current value of `field`.
    pub fn get(&self, field: MeetingField) -> &str {
        match field {
            MeetingField::Title => &self.title,
            MeetingField::Date => &self.date,
            MeetingField::Time => &self.time,
            MeetingField::Duration => &self.duration,
            MeetingField::Location => &self.location,
            MeetingField::Attendees => &self.attendees,
            MeetingField::Agenda => &self.agenda,
        }
    }

    /// Overwrite `field`.
    pub fn set(&mut self, field: MeetingField, value: impl Into<String>) {
        let slot = match field {
            MeetingField::Title => &mut self.title,
            MeetingField::Date => &mut self.date,
            MeetingField::Time => &mut self.time,
            MeetingField::Duration => &mut self.duration,
            MeetingField::Location => &mut self.location,
            MeetingField::Attendees => &mut self.attendees,
            MeetingField::Agenda => &mut self.agenda,
        };
        *slot = value.into();
    }

    /// Check every required field, collecting all failures at once.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<MeetingDraft> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(MeetingField::Title.as_str(), "Meeting title is required");
        }

        let date = match self.date.trim() {
            "" => {
                errors.insert(MeetingField::Date.as_str(), "Date is required");
                None
            }
            raw => {
                let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok();
                if parsed.is_none() {
                    errors.insert(MeetingField::Date.as_str(), "Date must be in YYYY-MM-DD format");
                }
                parsed
            }
        };

        let time = match self.time.trim() {
            "" => {
                errors.insert(MeetingField::Time.as_str(), "Time is required");
                None
            }
            raw => {
                let parsed = parse_time(raw);
                if parsed.is_none() {
                    errors.insert(MeetingField::Time.as_str(), "Time must be in HH:MM format");
                }
                parsed
            }
        };

        let duration_minutes = match self.duration.trim().parse::<u32>() {
            Ok(minutes) if minutes >= 1 => {
                if minutes > MAX_SUGGESTED_DURATION {
                    warn!(
                        duration_minutes = minutes,
                        max_suggested = MAX_SUGGESTED_DURATION,
                        "Duration above suggested maximum accepted"
                    );
                }
                Some(minutes)
            }
            _ => {
                errors.insert(
                    MeetingField::Duration.as_str(),
                    "Duration must be at least 1 minute",
                );
                None
            }
        };

        match (date, time, duration_minutes) {
            (Some(date), Some(time), Some(duration_minutes)) if errors.is_empty() => {
                Ok(MeetingDraft {
                    title: title.to_string(),
                    date,
                    time,
                    duration_minutes,
                    location: self.location.trim().to_string(),
                    attendees: split_attendees(&self.attendees),
                    agenda: self.agenda.clone(),
                })
            }
            _ => Err(DeskError::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

fn split_attendees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
