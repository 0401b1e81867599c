//! Plain-text rendering of each route.

use meeting_desk_core::{
    CreateMeetingDialog, Meeting, MeetingCatalog, MeetingField, MeetingTab, Notification,
    NotificationSink, PersistenceGateway, Priority, RecorderSession, SaveState, SessionStatus,
    Severity,
};

pub(crate) const HELP: &str = "\
Dashboard:  tab upcoming|past   new   set <field> <value>   submit   cancel   record <id>
Recorder:   start   pause   stop   note <text>   clear   save
            action <task>[|assignee[|deadline]]   toggle <n>   back
Anywhere:   open <path>   show   help   quit
Fields:     title date time duration location attendees agenda";

/// Dashboard: the active tab, plus the create dialog when open.
pub fn dashboard<N, G>(
    catalog: &MeetingCatalog,
    tab: MeetingTab,
    dialog: &CreateMeetingDialog<N, G>,
) -> String
where
    N: NotificationSink,
    G: PersistenceGateway,
{
    let meetings = catalog.tab(tab);
    let mut lines = vec![
        format!("== {} ({} meetings) ==", tab.label(), meetings.len()),
        String::new(),
    ];

    if meetings.is_empty() {
        lines.push("  No meetings.".to_string());
    }
    for meeting in meetings {
        lines.push(meeting_card(meeting));
    }

    if dialog.is_open() {
        lines.push(String::new());
        lines.push(create_dialog(dialog));
    }

    lines.join("\n")
}

fn meeting_card(meeting: &Meeting) -> String {
    let badge = match meeting.priority {
        Priority::High => "[HIGH]".to_string(),
        other => format!("[{}]", other),
    };
    format!(
        "  #{} {} {}\n     {} {} ({} min) | {} | {} attendees",
        meeting.id,
        meeting.title,
        badge,
        meeting.date.format("%Y-%m-%d"),
        meeting.time.format("%H:%M"),
        meeting.duration_minutes,
        if meeting.location.is_empty() {
            "No location"
        } else {
            meeting.location.as_str()
        },
        meeting.attendees.len(),
    )
}

fn create_dialog<N, G>(dialog: &CreateMeetingDialog<N, G>) -> String
where
    N: NotificationSink,
    G: PersistenceGateway,
{
    let mut lines = vec!["-- Create New Meeting --".to_string()];

    for field in MeetingField::ALL {
        lines.push(format!(
            "  {:<10} {}",
            field.as_str(),
            dialog.form().get(field)
        ));
        if let Some(message) = dialog.errors().get(field.as_str()) {
            lines.push(format!("  {:<10} ! {}", "", message));
        }
    }

    if dialog.is_submitting() {
        lines.push("  Creating...".to_string());
    }

    lines.join("\n")
}

/// Recorder: timer, notes, and action items for one meeting.
pub fn recorder<N, G>(meeting: &Meeting, session: &RecorderSession<N, G>) -> String
where
    N: NotificationSink,
    G: PersistenceGateway,
{
    let status = match session.status() {
        SessionStatus::Running => "RECORDING",
        SessionStatus::Paused => "PAUSED",
        SessionStatus::Stopped => "ENDED",
        SessionStatus::Idle => "READY",
    };

    let notes = session.notes();
    let indicator = match notes.save_state() {
        SaveState::Saving => " (saving...)",
        SaveState::Saved => " (saved)",
        SaveState::Idle => "",
    };

    let mut lines = vec![
        format!("== {} ==", meeting.title),
        format!("   {}  {}", session.formatted_elapsed(), status),
        String::new(),
        format!("-- Meeting Notes{} --", indicator),
    ];

    if notes.is_empty() {
        lines.push("  (empty)".to_string());
    } else {
        lines.extend(notes.text().lines().map(|line| format!("  {}", line)));
    }
    if let Some(at) = notes.last_saved_at() {
        lines.push(format!("  last saved at {}s", at.as_secs()));
    }

    let items = session.action_items();
    lines.push(String::new());
    lines.push(format!(
        "-- Action Items ({}/{} done) --",
        items.completed_count(),
        items.len()
    ));
    for (position, item) in items.iter().enumerate() {
        let deadline = item
            .deadline
            .map(|deadline| format!(" due {}", deadline.format("%Y-%m-%d")))
            .unwrap_or_default();
        lines.push(format!(
            "  {}. [{}] {} ({}{})",
            position + 1,
            if item.completed { "x" } else { " " },
            item.task,
            item.assignee,
            deadline,
        ));
    }

    lines.join("\n")
}

/// Fallback for unknown paths.
pub fn not_found(path: &str) -> String {
    format!("404\nOops! Page not found: {}\nType `open /` to return home.", path)
}

/// One toast line.
pub fn toast(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Info => "*",
        Severity::Destructive => "!",
    };
    format!(
        "{} {}: {}",
        marker, notification.title, notification.message
    )
}
