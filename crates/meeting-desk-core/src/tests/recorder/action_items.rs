use crate::{
    ActionItemDraft, ActionItemList, DeskError, Severity, UNASSIGNED,
    tests::support::create_default_session,
};

use chrono::NaiveDate;

/// WHAT: Blank task is rejected with one validation notification
/// WHY: Action items require a task description
#[test]
fn given_blank_task_when_adding_then_list_unchanged_and_one_notification() {
    // Given: A session and a whitespace-only task
    let (mut session, notifier, _) = create_default_session();
    let mut draft = ActionItemDraft::new("   ", "Ana", "");

    // When: Adding the item
    let result = session.add_action_item(&mut draft);

    // Then: Nothing added, exactly one destructive notification, draft kept
    assert!(matches!(result, Err(DeskError::Validation { .. })));
    assert!(session.action_items().is_empty());
    assert_eq!(notifier.count(), 1);
    assert_eq!(notifier.count_with(Severity::Destructive), 1);
    assert_eq!(draft.assignee, "Ana");
}

/// WHAT: Blank assignee defaults to Unassigned, blank deadline to none
/// WHY: Optional inputs must not block quick capture
#[test]
#[allow(clippy::unwrap_used)]
fn given_task_only_when_adding_then_defaults_applied_and_draft_cleared() {
    // Given: Only a task
    let (mut session, notifier, _) = create_default_session();
    let mut draft = ActionItemDraft::new("Send slides", "", "");

    // When: Adding
    let id = session.add_action_item(&mut draft).unwrap();

    // Then: Stored with defaults; inputs cleared; confirmation emitted
    let item = session.action_items().get(id).unwrap();
    assert_eq!(item.task, "Send slides");
    assert_eq!(item.assignee, UNASSIGNED);
    assert_eq!(item.deadline, None);
    assert!(!item.completed);
    assert!(draft.is_blank());
    let last = notifier.last().unwrap();
    assert_eq!(last.severity, Severity::Info);
    assert_eq!(last.message, "\"Send slides\" has been added.");
}

/// WHAT: Deadline is parsed as a calendar date
/// WHY: Deadlines are dates, not free text
#[test]
#[allow(clippy::unwrap_used)]
fn given_iso_deadline_when_adding_then_date_stored() {
    // Given: A fully specified draft
    let mut list = ActionItemList::new();
    let draft = ActionItemDraft::new("Book venue", "  Sam ", "2025-03-14");

    // When: Adding directly to the list
    let id = list.add(&draft).unwrap();

    // Then: Trimmed assignee and parsed date
    let item = list.get(id).unwrap();
    assert_eq!(item.assignee, "Sam");
    assert_eq!(item.deadline, NaiveDate::from_ymd_opt(2025, 3, 14));
}

/// WHAT: Unparseable deadline is a validation failure
/// WHY: Bad input must not silently drop the deadline
#[test]
fn given_free_text_deadline_when_adding_then_rejected_with_deadline_error() {
    // Given: A deadline that is not a date
    let (mut session, notifier, _) = create_default_session();
    let mut draft = ActionItemDraft::new("Book venue", "", "next friday");

    // When: Adding
    let result = session.add_action_item(&mut draft);

    // Then: Rejected on the deadline field, one notification, draft kept
    let errors = result.as_ref().err().and_then(DeskError::field_errors);
    assert!(errors.is_some_and(|errors| errors.contains("deadline") && !errors.contains("task")));
    assert!(session.action_items().is_empty());
    assert_eq!(notifier.count(), 1);
    assert_eq!(draft.deadline, "next friday");
}

/// WHAT: A missing task outranks other field errors in the notification
/// WHY: The task is the first thing to fix
#[test]
#[allow(clippy::unwrap_used)]
fn given_blank_task_and_bad_deadline_when_adding_then_task_message_shown() {
    // Given: Both the task and the deadline invalid
    let (mut session, notifier, _) = create_default_session();
    let mut draft = ActionItemDraft::new("", "", "someday");

    // When: Adding
    let result = session.add_action_item(&mut draft);

    // Then: Both fields flagged, one notification naming the task
    let errors = result.as_ref().err().and_then(DeskError::field_errors);
    assert!(errors.is_some_and(|errors| errors.contains("task") && errors.contains("deadline")));
    assert_eq!(notifier.count(), 1);
    assert_eq!(notifier.last().unwrap().message, "Please enter a task description.");
}

/// WHAT: Toggling twice restores the completed flag
/// WHY: Toggle is an involution
#[test]
#[allow(clippy::unwrap_used)]
fn given_item_when_toggled_twice_then_completed_restored() {
    // Given: One open item
    let (mut session, _, _) = create_default_session();
    let id = session
        .add_action_item(&mut ActionItemDraft::new("Draft memo", "", ""))
        .unwrap();

    // When: Toggling twice
    let first = session.toggle_action_item(id);
    let second = session.toggle_action_item(id);

    // Then: Completed, then open again
    assert_eq!(first, Some(true));
    assert_eq!(second, Some(false));
    assert!(!session.action_items().get(id).unwrap().completed);
}

/// WHAT: Toggling an unknown id is a silent no-op
/// WHY: Stale ids from a torn-down view must not error
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_id_when_toggling_then_none_and_list_untouched() {
    // Given: A session with one item and an id from elsewhere
    let (mut session, notifier, _) = create_default_session();
    session
        .add_action_item(&mut ActionItemDraft::new("Real task", "", ""))
        .unwrap();
    let mut other = ActionItemList::new();
    let foreign = other
        .add(&ActionItemDraft::new("Foreign", "", ""))
        .unwrap();
    let before = session.action_items().clone();

    // When: Toggling the foreign id
    let result = session.toggle_action_item(foreign);

    // Then: Nothing changed, nothing notified beyond the add confirmation
    assert_eq!(result, None);
    assert_eq!(session.action_items(), &before);
    assert_eq!(notifier.count(), 1);
}

/// WHAT: Items keep insertion order and ids are unique
/// WHY: The list renders in insertion order
#[test]
#[allow(clippy::unwrap_used)]
fn given_several_items_when_listing_then_insertion_order_and_unique_ids() {
    // Given: Three items added in order
    let mut list = ActionItemList::new();
    let ids: Vec<_> = ["one", "two", "three"]
        .into_iter()
        .map(|task| list.add(&ActionItemDraft::new(task, "", "")).unwrap())
        .collect();

    // When: Toggling the middle one
    list.toggle(ids[1]);

    // Then: Order preserved, ids distinct, one completed
    let tasks: Vec<_> = list.iter().map(|item| item.task.as_str()).collect();
    assert_eq!(tasks, vec!["one", "two", "three"]);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_eq!(list.completed_count(), 1);
    assert_eq!(list.len(), 3);
}
