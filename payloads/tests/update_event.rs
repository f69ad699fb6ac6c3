use std::str::FromStr;

use jiff::civil::date;
use payloads::{EventId, Visibility, requests, responses};

fn sample_update() -> requests::UpdateEvent {
    requests::UpdateEvent {
        title: "Meetup".into(),
        description: "An amazing event for amazing folks...".into(),
        start: date(2025, 1, 1).at(10, 0, 0, 0),
        end: date(2025, 1, 1).at(12, 0, 0, 0),
        location: "NYC".into(),
        online: false,
        visibility: Visibility::Public,
        max_attendees: 50,
        photos: None,
    }
}

fn field<'a>(
    fields: &'a [(&'static str, String)],
    name: &str,
) -> Option<&'a str> {
    fields
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn every_editable_field_is_carried() {
    let fields = sample_update().text_fields();
    for name in [
        "title",
        "description",
        "start",
        "end",
        "location",
        "online",
        "visibility",
        "maxAttendees",
    ] {
        assert!(field(&fields, name).is_some(), "missing field {name}");
    }
}

#[test]
fn online_is_always_a_canonical_boolean() {
    let mut details = sample_update();
    assert_eq!(field(&details.text_fields(), "online"), Some("false"));

    details.online = true;
    assert_eq!(field(&details.text_fields(), "online"), Some("true"));
}

#[test]
fn event_times_serialize_at_minute_granularity() {
    let fields = sample_update().text_fields();
    assert_eq!(field(&fields, "start"), Some("2025-01-01T10:00"));
    assert_eq!(field(&fields, "end"), Some("2025-01-01T12:00"));
}

#[test]
fn visibility_and_attendance_use_wire_representations() {
    let fields = sample_update().text_fields();
    assert_eq!(field(&fields, "visibility"), Some("Public"));
    assert_eq!(field(&fields, "maxAttendees"), Some("50"));
}

#[test]
fn valid_update_passes_validation() {
    assert!(requests::validate_event(&sample_update()).is_valid());
}

#[test]
fn blank_title_and_location_are_rejected() {
    let mut details = sample_update();
    details.title = "   ".into();
    assert_eq!(
        requests::validate_event(&details),
        requests::EventValidation::TitleRequired
    );

    let mut details = sample_update();
    details.location = String::new();
    assert_eq!(
        requests::validate_event(&details),
        requests::EventValidation::LocationRequired
    );
}

#[test]
fn end_before_start_is_rejected() {
    let mut details = sample_update();
    details.end = date(2024, 12, 31).at(9, 0, 0, 0);
    assert_eq!(
        requests::validate_event(&details),
        requests::EventValidation::EndBeforeStart
    );

    // an event may start and end at the same instant
    details.end = details.start;
    assert!(requests::validate_event(&details).is_valid());
}

#[test]
fn attendance_bounds_are_inclusive() {
    let mut details = sample_update();
    for ok in [1, 100] {
        details.max_attendees = ok;
        assert!(requests::validate_event(&details).is_valid());
    }
    for bad in [0, 101] {
        details.max_attendees = bad;
        assert_eq!(
            requests::validate_event(&details),
            requests::EventValidation::MaxAttendeesOutOfRange
        );
    }
}

#[test]
fn event_wire_format_is_camel_case() {
    let json = r#"{
        "id": "9b4f61e4-6b1f-4f76-a5e6-5f8f3f9f0c42",
        "title": "Meetup",
        "description": "",
        "start": "2025-01-01T10:00:00",
        "end": "2025-01-01T12:00:00",
        "location": "NYC",
        "online": false,
        "visibility": "Public",
        "maxAttendees": 50,
        "photos": ["/p/a.jpg"]
    }"#;

    let event: responses::Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.title, "Meetup");
    assert_eq!(event.max_attendees, 50);
    assert_eq!(event.visibility, Visibility::Public);
    assert_eq!(event.photos, vec!["/p/a.jpg".to_string()]);
    assert_eq!(event.start, date(2025, 1, 1).at(10, 0, 0, 0));
}

#[test]
fn event_id_round_trips_as_a_route_param() {
    let id = EventId(uuid::Uuid::from_str(
        "9b4f61e4-6b1f-4f76-a5e6-5f8f3f9f0c42",
    )
    .unwrap());
    let rendered = id.to_string();
    assert_eq!(EventId::from_str(&rendered).unwrap(), id);
}

#[test]
fn visibility_form_values_parse() {
    assert_eq!(
        Visibility::from_form_value("Public"),
        Some(Visibility::Public)
    );
    assert_eq!(
        Visibility::from_form_value("Private"),
        Some(Visibility::Private)
    );
    assert_eq!(Visibility::from_form_value("Secret"), None);
}
