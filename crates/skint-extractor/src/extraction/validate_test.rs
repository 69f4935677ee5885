use serde_json::json;

use super::*;

fn minimal_event() -> Value {
    json!({ "title": "Open Mic", "description": "bring a poem" })
}

#[test]
fn accepts_event_with_all_optional_fields_absent() {
    let events = validate_candidate(&json!({ "events": [minimal_event()] })).unwrap();
    assert_eq!(
        events,
        vec![EventRecord {
            title: "Open Mic".to_string(),
            description: "bring a poem".to_string(),
            start_date: None,
            start_time: None,
            end_date: None,
            end_time: None,
            link: None,
            address: None,
            cost: None,
        }]
    );
}

#[test]
fn accepts_empty_event_list() {
    let events = validate_candidate(&json!({ "events": [] })).unwrap();
    assert!(events.is_empty());
}

#[test]
fn accepts_fully_populated_event() {
    let candidate = json!({
        "events": [{
            "title": "Str8 West Coastin'",
            "description": "annual west coast hip-hop dance party",
            "startDate": "2024-08-09",
            "startTime": "10:00 pm",
            "endDate": "2024-08-10",
            "endTime": "2:00 am",
            "link": "https://www.eventbrite.com/e/919851068307",
            "address": "Friends and Lovers, Crown Heights",
            "cost": "$5 before 11pm with rsvp, $10 without"
        }]
    });
    let events = validate_candidate(&candidate).unwrap();
    let event = &events[0];
    assert_eq!(event.start_date.as_deref(), Some("2024-08-09"));
    assert_eq!(event.end_time.as_deref(), Some("2:00 am"));
    assert_eq!(
        event.link.as_deref(),
        Some("https://www.eventbrite.com/e/919851068307")
    );
    assert_eq!(
        event.address.as_deref(),
        Some("Friends and Lovers, Crown Heights")
    );
}

#[test]
fn null_and_blank_optionals_become_absent() {
    let candidate = json!({
        "events": [{
            "title": "Open Mic",
            "description": "bring a poem",
            "startDate": null,
            "cost": "   ",
            "link": ""
        }]
    });
    let events = validate_candidate(&candidate).unwrap();
    assert!(events[0].start_date.is_none());
    assert!(events[0].cost.is_none());
    assert!(events[0].link.is_none());
}

#[test]
fn values_are_trimmed() {
    let candidate = json!({
        "events": [{ "title": "  Open Mic ", "description": "poems\n", "cost": " Free " }]
    });
    let events = validate_candidate(&candidate).unwrap();
    assert_eq!(events[0].title, "Open Mic");
    assert_eq!(events[0].description, "poems");
    assert_eq!(events[0].cost.as_deref(), Some("Free"));
}

#[test]
fn rejects_missing_title() {
    let candidate = json!({ "events": [{ "description": "no name" }] });
    assert_eq!(
        validate_candidate(&candidate),
        Err(SchemaViolation::MissingField {
            index: 0,
            field: "title"
        })
    );
}

#[test]
fn rejects_missing_description() {
    let candidate = json!({ "events": [minimal_event(), { "title": "Second" }] });
    assert_eq!(
        validate_candidate(&candidate),
        Err(SchemaViolation::MissingField {
            index: 1,
            field: "description"
        })
    );
}

#[test]
fn rejects_blank_title() {
    let candidate = json!({ "events": [{ "title": " ", "description": "d" }] });
    assert_eq!(
        validate_candidate(&candidate),
        Err(SchemaViolation::MissingField {
            index: 0,
            field: "title"
        })
    );
}

#[test]
fn rejects_non_string_field() {
    let candidate = json!({
        "events": [{ "title": "Show", "description": "d", "cost": 10 }]
    });
    assert_eq!(
        validate_candidate(&candidate),
        Err(SchemaViolation::WrongType {
            index: 0,
            field: "cost"
        })
    );
}

#[test]
fn rejects_malformed_link() {
    let candidate = json!({
        "events": [{ "title": "Show", "description": "d", "link": "tickets at the door" }]
    });
    assert_eq!(
        validate_candidate(&candidate),
        Err(SchemaViolation::InvalidUrl {
            index: 0,
            value: "tickets at the door".to_string()
        })
    );
}

#[test]
fn accepts_non_http_link_alongside_web_link() {
    let candidate = json!({
        "events": [
            { "title": "Dance Party", "description": "d", "link": "https://www.eventbrite.com/e/1" },
            { "title": "Supper Club", "description": "rsvp by email", "link": "mailto:rsvp@venue.com" }
        ]
    });
    let events = validate_candidate(&candidate).expect("both links parse as URLs");
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].link.as_deref(), Some("mailto:rsvp@venue.com"));
}

#[test]
fn rejects_candidate_without_events_array() {
    assert_eq!(
        validate_candidate(&minimal_event()),
        Err(SchemaViolation::MissingEvents)
    );
    assert_eq!(
        validate_candidate(&json!({ "events": "none" })),
        Err(SchemaViolation::MissingEvents)
    );
}

#[test]
fn rejects_non_object_event() {
    assert_eq!(
        validate_candidate(&json!({ "events": ["Open Mic"] })),
        Err(SchemaViolation::NotAnObject { index: 0 })
    );
}
