use crate::meeting::{Meeting, MeetingId, MeetingStatus};

use std::cmp::Reverse;

use tracing::debug;

/// Tabs of the meeting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingTab {
    /// Meetings still ahead, soonest first.
    #[default]
    Upcoming,
    /// Completed meetings, most recent first.
    Past,
}

impl MeetingTab {
    /// Heading shown above the tab.
    pub fn label(self) -> &'static str {
        match self {
            MeetingTab::Upcoming => "Upcoming Meetings",
            MeetingTab::Past => "Past Meetings",
        }
    }

    /// Parse `upcoming` or `past`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Some(MeetingTab::Upcoming),
            "past" => Some(MeetingTab::Past),
            _ => None,
        }
    }
}

/// In-memory list of meetings behind the dashboard tabs.
#[derive(Debug, Clone, Default)]
pub struct MeetingCatalog {
    meetings: Vec<Meeting>,
}

impl MeetingCatalog {
    /// Catalog seeded with `meetings`.
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self { meetings }
    }

    /// Number of meetings across both tabs.
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Look a meeting up by id.
    pub fn get(&self, id: MeetingId) -> Option<&Meeting> {
        self.meetings.iter().find(|meeting| meeting.id == id)
    }

    /// One past the highest id in the catalog.
    pub fn next_id(&self) -> MeetingId {
        let highest = self
            .meetings
            .iter()
            .map(|meeting| meeting.id.get())
            .max()
            .unwrap_or(0);
        MeetingId::new(highest + 1)
    }

    /// Add a meeting, replacing any existing one with the same id.
    pub fn insert(&mut self, meeting: Meeting) {
        self.meetings.retain(|existing| existing.id != meeting.id);
        debug!(meeting_id = %meeting.id, "Meeting added to catalog");
        self.meetings.push(meeting);
    }

    /// Mark a meeting as held. Returns `false` for unknown ids.
    pub fn complete(&mut self, id: MeetingId) -> bool {
        match self.meetings.iter_mut().find(|meeting| meeting.id == id) {
            Some(meeting) => {
                meeting.status = MeetingStatus::Completed;
                debug!(meeting_id = %id, "Meeting marked completed");
                true
            }
            None => false,
        }
    }

    /// Meetings shown under `tab`, in display order.
    pub fn tab(&self, tab: MeetingTab) -> Vec<&Meeting> {
        match tab {
            MeetingTab::Upcoming => self.upcoming(),
            MeetingTab::Past => self.past(),
        }
    }

    /// Upcoming meetings, soonest first.
    pub fn upcoming(&self) -> Vec<&Meeting> {
        let mut meetings = self.with_status(MeetingStatus::Upcoming);
        meetings.sort_by_key(|meeting| (meeting.starts_at(), meeting.id));
        meetings
    }

    /// Completed meetings, most recent first.
    pub fn past(&self) -> Vec<&Meeting> {
        let mut meetings = self.with_status(MeetingStatus::Completed);
        meetings.sort_by_key(|meeting| (Reverse(meeting.starts_at()), meeting.id));
        meetings
    }

    fn with_status(&self, status: MeetingStatus) -> Vec<&Meeting> {
        self.meetings
            .iter()
            .filter(|meeting| meeting.status == status)
            .collect()
    }
}
