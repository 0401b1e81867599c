use meeting_desk_core::{Meeting, MeetingCatalog, MeetingId, MeetingStatus, Priority};

use chrono::{NaiveDate, NaiveTime};

struct SeedMeeting {
    id: u64,
    title: &'static str,
    date: (i32, u32, u32),
    time: (u32, u32),
    duration_minutes: u32,
    location: &'static str,
    attendees: [&'static str; 3],
    status: MeetingStatus,
    priority: Priority,
}

const DEMO_MEETINGS: [SeedMeeting; 5] = [
    SeedMeeting {
        id: 1,
        title: "Weekly Team Standup",
        date: (2024, 1, 20),
        time: (10, 0),
        duration_minutes: 30,
        location: "Conference Room A",
        attendees: ["John Doe", "Jane Smith", "Mike Johnson"],
        status: MeetingStatus::Upcoming,
        priority: Priority::High,
    },
    SeedMeeting {
        id: 2,
        title: "Project Review Meeting",
        date: (2024, 1, 20),
        time: (14, 0),
        duration_minutes: 60,
        location: "Virtual - Zoom",
        attendees: ["Sarah Wilson", "Tom Brown", "Lisa Chen"],
        status: MeetingStatus::Upcoming,
        priority: Priority::Medium,
    },
    SeedMeeting {
        id: 3,
        title: "Client Presentation",
        date: (2024, 1, 21),
        time: (11, 0),
        duration_minutes: 45,
        location: "Conference Room B",
        attendees: ["Alex Turner", "Emma Davis", "Ryan Lee"],
        status: MeetingStatus::Upcoming,
        priority: Priority::High,
    },
    SeedMeeting {
        id: 4,
        title: "Budget Planning Session",
        date: (2024, 1, 18),
        time: (15, 0),
        duration_minutes: 90,
        location: "Conference Room C",
        attendees: ["Maria Garcia", "David Kim", "Sophie Taylor"],
        status: MeetingStatus::Completed,
        priority: Priority::Medium,
    },
    SeedMeeting {
        id: 5,
        title: "Product Roadmap Discussion",
        date: (2024, 1, 17),
        time: (13, 0),
        duration_minutes: 60,
        location: "Virtual - Teams",
        attendees: ["Chris Anderson", "Amy White", "Ben Martinez"],
        status: MeetingStatus::Completed,
        priority: Priority::High,
    },
];

/// Catalog pre-filled with the demo meetings shown on first launch.
pub fn demo_catalog() -> MeetingCatalog {
    let meetings = DEMO_MEETINGS
        .iter()
        .filter_map(|seed| {
            let (year, month, day) = seed.date;
            let (hour, minute) = seed.time;
            Some(Meeting {
                id: MeetingId::new(seed.id),
                title: seed.title.to_string(),
                date: NaiveDate::from_ymd_opt(year, month, day)?,
                time: NaiveTime::from_hms_opt(hour, minute, 0)?,
                duration_minutes: seed.duration_minutes,
                location: seed.location.to_string(),
                attendees: seed.attendees.iter().map(|name| name.to_string()).collect(),
                agenda: String::new(),
                status: seed.status,
                priority: seed.priority,
            })
        })
        .collect();

    MeetingCatalog::new(meetings)
}
