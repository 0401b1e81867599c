use crate::{CoreResult, DeskError, FieldErrors};

use std::{fmt, panic::Location};

use chrono::NaiveDate;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Assignee stored when the input was blank.
pub const UNASSIGNED: &str = "Unassigned";

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Opaque action item identifier. Generated at creation, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionItemId(Uuid);

impl ActionItemId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ActionItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A follow-up captured during a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    /// Stable identifier.
    pub id: ActionItemId,
    /// What needs doing. Never blank.
    pub task: String,
    /// Who owns it, or [`UNASSIGNED`].
    pub assignee: String,
    /// Optional due date.
    pub deadline: Option<NaiveDate>,
    /// Whether it has been ticked off.
    pub completed: bool,
}

/// Raw action item inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionItemDraft {
    /// Task description.
    pub task: String,
    /// Assignee; blank means unassigned.
    pub assignee: String,
    /// Deadline as `YYYY-MM-DD`; blank means none.
    pub deadline: String,
}

impl ActionItemDraft {
    /// Draft with all three inputs filled.
    pub fn new(
        task: impl Into<String>,
        assignee: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            assignee: assignee.into(),
            deadline: deadline.into(),
        }
    }

    /// Whether every input is blank.
    pub fn is_blank(&self) -> bool {
        self.task.trim().is_empty()
            && self.assignee.trim().is_empty()
            && self.deadline.trim().is_empty()
    }

    #[track_caller]
    fn to_item(&self) -> CoreResult<ActionItem> {
        let mut errors = FieldErrors::new();

        let task = self.task.trim();
        if task.is_empty() {
            errors.insert("task", "Please enter a task description.");
        }

        let deadline = match self.deadline.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, DEADLINE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert("deadline", "Deadline must be a date in YYYY-MM-DD format.");
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(DeskError::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let assignee = match self.assignee.trim() {
            "" => UNASSIGNED.to_string(),
            name => name.to_string(),
        };

        Ok(ActionItem {
            id: ActionItemId::generate(),
            task: task.to_string(),
            assignee,
            deadline,
            completed: false,
        })
    }
}

/// Insertion-ordered action items. Items are toggled, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionItemList {
    items: Vec<ActionItem>,
}

impl ActionItemList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ActionItem> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: ActionItemId) -> Option<&ActionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// How many items are completed.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Validate `draft` and append it. The list is untouched on error.
    #[track_caller]
    pub fn add(&mut self, draft: &ActionItemDraft) -> CoreResult<ActionItemId> {
        let item = draft.to_item()?;
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    /// Flip `completed` for `id`. Unknown ids are ignored and yield `None`.
    pub fn toggle(&mut self, id: ActionItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }
}
