use crate::{AppError, AppResult};

use meeting_desk_core::{ActionItemDraft, MeetingField, MeetingId, MeetingTab};

/// One line of terminal input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Navigate to a path.
    Open {
        /// Requested path.
        path: String,
    },
    /// Open the recorder for a meeting.
    Record {
        /// Meeting to record.
        meeting_id: MeetingId,
    },
    /// Switch dashboard tab.
    ShowTab(MeetingTab),
    /// Open the create-meeting dialog.
    NewMeeting,
    /// Edit one dialog input.
    SetField {
        /// Field to edit.
        field: MeetingField,
        /// New raw value.
        value: String,
    },
    /// Submit the dialog.
    Submit,
    /// Close the dialog.
    Cancel,
    /// Start the meeting clock.
    Start,
    /// Pause or resume the meeting clock.
    Pause,
    /// End the meeting.
    Stop,
    /// Append a line to the notes.
    Note {
        /// Text to append.
        text: String,
    },
    /// Discard the notes text.
    ClearNotes,
    /// Save notes now.
    Save,
    /// Add an action item.
    Action(ActionItemDraft),
    /// Toggle the n-th action item, counting from one.
    Toggle {
        /// One-based position in the list.
        position: usize,
    },
    /// Return to the dashboard.
    Back,
    /// Redraw the current view.
    Show,
    /// List commands.
    Help,
    /// Exit the application.
    Quit,
}

impl AppCommand {
    /// Parse an input line. Blank lines yield `None`.
    #[track_caller]
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "open" => AppCommand::Open {
                path: required(rest, "open <path>")?.to_string(),
            },
            "record" => {
                let raw = required(rest, "record <meeting id>")?;
                let meeting_id = raw.parse::<MeetingId>().map_err(|_| {
                    AppError::invalid_command(format!("{:?} is not a meeting id", raw))
                })?;
                AppCommand::Record { meeting_id }
            }
            "tab" => {
                let raw = required(rest, "tab upcoming|past")?;
                let tab = MeetingTab::parse(raw).ok_or_else(|| {
                    AppError::invalid_command(format!("unknown tab {:?}, use upcoming or past", raw))
                })?;
                AppCommand::ShowTab(tab)
            }
            "new" => AppCommand::NewMeeting,
            "set" => {
                let args = required(rest, "set <field> <value>")?;
                let (name, value) = match args.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (args, ""),
                };
                let field = MeetingField::parse(name).ok_or_else(|| {
                    AppError::invalid_command(format!("unknown field {:?}", name))
                })?;
                AppCommand::SetField {
                    field,
                    value: value.to_string(),
                }
            }
            "submit" => AppCommand::Submit,
            "cancel" => AppCommand::Cancel,
            "start" => AppCommand::Start,
            "pause" | "resume" => AppCommand::Pause,
            "stop" => AppCommand::Stop,
            "note" => AppCommand::Note {
                text: required(rest, "note <text>")?.to_string(),
            },
            "clear" => AppCommand::ClearNotes,
            "save" => AppCommand::Save,
            "action" => {
                let args = required(rest, "action <task>[|assignee[|deadline]]")?;
                let mut parts = args.splitn(3, '|').map(str::trim);
                let task = parts.next().unwrap_or_default();
                let assignee = parts.next().unwrap_or_default();
                let deadline = parts.next().unwrap_or_default();
                AppCommand::Action(ActionItemDraft::new(task, assignee, deadline))
            }
            "toggle" => {
                let raw = required(rest, "toggle <n>")?;
                let position = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|position| *position > 0)
                    .ok_or_else(|| {
                        AppError::invalid_command(format!("{:?} is not a list position", raw))
                    })?;
                AppCommand::Toggle { position }
            }
            "back" => AppCommand::Back,
            "show" | "ls" => AppCommand::Show,
            "help" | "?" => AppCommand::Help,
            "quit" | "exit" => AppCommand::Quit,
            other => {
                return Err(AppError::invalid_command(format!(
                    "unknown command {:?}, type help for a list",
                    other
                )));
            }
        };

        Ok(Some(command))
    }
}

#[track_caller]
fn required<'a>(rest: &'a str, usage: &str) -> AppResult<&'a str> {
    if rest.is_empty() {
        return Err(AppError::invalid_command(format!("usage: {}", usage)));
    }
    Ok(rest)
}
