use meeting_desk_core::MeetingId;

use std::fmt;

/// Views reachable by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: meeting tabs and the create dialog.
    Dashboard,
    /// `/meetings/:id/record`: live recorder for one meeting.
    Recorder(MeetingId),
    /// Any other path.
    NotFound(String),
}

impl Route {
    /// Resolve a path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');

        if normalized.is_empty() {
            return Route::Dashboard;
        }

        let segments: Vec<&str> = normalized.split('/').collect();
        match segments.as_slice() {
            ["", "meetings", id, "record"] => match id.parse::<MeetingId>() {
                Ok(id) => Route::Recorder(id),
                Err(_) => Route::NotFound(trimmed.to_string()),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// Recorder path for `id`.
    pub fn recorder_path(id: MeetingId) -> String {
        format!("/meetings/{}/record", id)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard => f.write_str("/"),
            Route::Recorder(id) => f.write_str(&Route::recorder_path(*id)),
            Route::NotFound(path) => f.write_str(path),
        }
    }
}
