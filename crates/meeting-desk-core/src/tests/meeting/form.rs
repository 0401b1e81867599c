use crate::{DEFAULT_DURATION, DeskError, MeetingField, MeetingForm};

use chrono::{NaiveDate, NaiveTime};

fn filled_form() -> MeetingForm {
    MeetingForm {
        title: "Quarterly Review".to_string(),
        date: "2025-01-01".to_string(),
        time: "10:00".to_string(),
        duration: "30".to_string(),
        ..MeetingForm::default()
    }
}

/// WHAT: Blank title is the only error for an otherwise valid form
/// WHY: Failures are keyed per field
#[test]
fn given_blank_title_when_validating_then_exactly_one_title_error() {
    // Given: A valid form with an empty title
    let mut form = filled_form();
    form.set(MeetingField::Title, "");

    // When: Validating
    let result = form.validate();

    // Then: One error, keyed to "title"
    let errors = result.as_ref().err().and_then(DeskError::field_errors);
    assert!(errors.is_some_and(|errors| errors.len() == 1
        && errors.get("title") == Some("Meeting title is required")));
}

/// WHAT: All failures are collected in one pass
/// WHY: The user sees every problem at once
#[test]
fn given_default_form_when_validating_then_title_date_and_time_errors() {
    // Given: An untouched form (duration pre-filled)
    let form = MeetingForm::default();
    assert_eq!(form.duration, DEFAULT_DURATION);

    // When: Validating
    let result = form.validate();

    // Then: Three errors, duration accepted
    let errors = result.as_ref().err().and_then(DeskError::field_errors);
    assert!(errors.is_some_and(|errors| {
        errors.len() == 3
            && errors.get("date") == Some("Date is required")
            && errors.get("time") == Some("Time is required")
            && !errors.contains("duration")
    }));
}

/// WHAT: Durations below one minute or non-numeric are rejected
/// WHY: Only the lower bound is enforced
#[test]
fn given_invalid_durations_when_validating_then_duration_error() {
    for raw in ["0", "", "abc", "-5", "1.5"] {
        // Given: A valid form with a bad duration
        let mut form = filled_form();
        form.set(MeetingField::Duration, raw);

        // When: Validating
        let result = form.validate();

        // Then: Duration error only
        let errors = result.as_ref().err().and_then(DeskError::field_errors);
        assert!(
            errors.is_some_and(|errors| errors.len() == 1
                && errors.get("duration") == Some("Duration must be at least 1 minute")),
            "duration {raw:?} should be rejected"
        );
    }
}

/// WHAT: Durations above the suggested 480 minutes are accepted
/// WHY: The displayed upper bound is not enforced
#[test]
#[allow(clippy::unwrap_used)]
fn given_duration_above_suggested_maximum_when_validating_then_accepted() {
    // Given: A ten hour meeting
    let mut form = filled_form();
    form.set(MeetingField::Duration, "600");

    // When: Validating
    let draft = form.validate().unwrap();

    // Then: Accepted as-is
    assert_eq!(draft.duration_minutes, 600);
}

/// WHAT: A valid form yields a typed draft
/// WHY: The gateway receives parsed values, not raw strings
#[test]
#[allow(clippy::unwrap_used)]
fn given_complete_form_when_validating_then_draft_is_parsed_and_trimmed() {
    // Given: A complete form with padding and comma-separated attendees
    let mut form = filled_form();
    form.set(MeetingField::Title, "  Quarterly Review  ");
    form.set(MeetingField::Attendees, "ana@example.com, , sam@example.com ");
    form.set(MeetingField::Location, " Room B ");

    // When: Validating
    let draft = form.validate().unwrap();

    // Then: Parsed and trimmed
    assert_eq!(draft.title, "Quarterly Review");
    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(draft.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(draft.location, "Room B");
    assert_eq!(draft.attendees, vec!["ana@example.com", "sam@example.com"]);
}

/// WHAT: Malformed date and time inputs are rejected with format messages
/// WHY: Typed values cannot be built from garbage
#[test]
fn given_malformed_date_and_time_when_validating_then_format_errors() {
    // Given: Unparseable date and time
    let mut form = filled_form();
    form.set(MeetingField::Date, "01/01/2025");
    form.set(MeetingField::Time, "ten");

    // When: Validating
    let result = form.validate();

    // Then: Both reported
    let errors = result.as_ref().err().and_then(DeskError::field_errors);
    assert!(errors.is_some_and(|errors| errors.contains("date") && errors.contains("time")));
}

/// WHAT: Field keys round-trip through parse
/// WHY: The terminal front-end addresses fields by name
#[test]
fn given_field_names_when_parsing_then_matching_fields() {
    for field in MeetingField::ALL {
        assert_eq!(MeetingField::parse(field.as_str()), Some(field));
    }
    assert_eq!(MeetingField::parse("TITLE"), Some(MeetingField::Title));
    assert_eq!(MeetingField::parse("priority"), None);
}
