use crate::meeting::MeetingDraft;

use std::{fmt, num::ParseIntError, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Meeting identifier assigned by the persistence gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeetingId(u64);

impl MeetingId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MeetingId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Whether a meeting is still ahead or already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingStatus {
    /// Scheduled, not yet held.
    Upcoming,
    /// Held and recorded.
    Completed,
}

/// Meeting priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Must not slip.
    High,
    /// Default.
    Medium,
    /// Nice to have.
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

/// A scheduled or completed meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    /// Identifier.
    pub id: MeetingId,
    /// Title.
    pub title: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time.
    pub time: NaiveTime,
    /// Planned length in minutes.
    pub duration_minutes: u32,
    /// Room or call link. May be empty.
    pub location: String,
    /// Attendee names or emails.
    pub attendees: Vec<String>,
    /// Free-text agenda. May be empty.
    pub agenda: String,
    /// Upcoming or completed.
    pub status: MeetingStatus,
    /// Priority badge.
    pub priority: Priority,
}

impl Meeting {
    /// A freshly created upcoming meeting built from a validated draft.
    pub fn scheduled(id: MeetingId, draft: MeetingDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            duration_minutes: draft.duration_minutes,
            location: draft.location,
            attendees: draft.attendees,
            agenda: draft.agenda,
            status: MeetingStatus::Upcoming,
            priority: Priority::Medium,
        }
    }

    /// Date and time combined.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
