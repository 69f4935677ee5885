//! Schema and instruction text sent to the extraction provider.
//!
//! This is guidance only. What is accepted is decided by
//! [`super::validate_candidate`].

use serde_json::{json, Value};

/// JSON Schema for the extraction output, plus the name and summary some
/// providers require alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub json_schema: Value,
}

/// Task instruction with one worked example of the post markup.
pub const EXTRACTION_INSTRUCTION: &str = r##"Extract events information from the text in the user message. Infer the event timestamp, address, and cost if possible. If you can't determine a specific field, leave it as null. A post may describe several events or none; return an empty "events" list when there are none. Here's an example of the content structure:

<p><span style="font-family:trebuchet ms;">fri 10pm (+ 8/16): <b>str8 west coastin&#8217;</b>: west coast hip-hop vibes take over friends and lovers (crown heights) at this annual dance party spun by djs eleven, raichous, dstrukt, and still life. $5 before 11pm with rsvp, $10 without. </span><a style="font-family: trebuchet ms;" href="https://www.eventbrite.com/e/str8-west-coastin-feat-dj-eleven-x-dstrukt-x-still-life-x-raichous-tickets-919851068307" target="_blank" rel="noopener"><b><font color="#FF6600">>></font color></b></a></p>

From that snippet you would extract one event titled "str8 west coastin'" starting at "10:00 pm", located at "friends and lovers (crown heights)", costing "$5 before 11pm with rsvp, $10 without", with the eventbrite URL as its link."##;

/// Build the event-list schema.
///
/// Every property is listed in `required` with nullable optional fields so
/// the schema is valid for strict structured-output modes.
#[must_use]
pub fn event_schema() -> EventSchema {
    let optional = |description: &str| {
        json!({ "type": ["string", "null"], "description": description })
    };

    let event = json!({
        "type": "object",
        "description": "Event information extracted from the post content",
        "properties": {
            "title": {
                "type": "string",
                "description": "Name of the event"
            },
            "description": {
                "type": "string",
                "description": "Brief description about the event, what or who will be there and what to expect"
            },
            "startDate": optional("First day of the event, eg '2024-12-01'"),
            "startTime": optional("Time of the event start, eg '6:30 pm'"),
            "endDate": optional("Last day of the event, eg '2024-12-02'"),
            "endTime": optional("Time of the event end, eg '8:00 pm'"),
            "link": optional(
                "URL Link to more information about the event or buy tickets. Usually the link follows the event description as an anchor tag on '>>'"
            ),
            "address": optional(
                "Street address of the event or venue name or any location description"
            ),
            "cost": optional("Cost to attend the event in dollars, eg 'Free' or '$10'")
        },
        "required": [
            "title", "description", "startDate", "startTime", "endDate",
            "endTime", "link", "address", "cost"
        ],
        "additionalProperties": false
    });

    EventSchema {
        name: "skint_post_events",
        description: "A list of events extracted from the post content with event information and link to more info",
        json_schema: json!({
            "type": "object",
            "properties": {
                "events": { "type": "array", "items": event }
            },
            "required": ["events"],
            "additionalProperties": false
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_property_is_required_and_described() {
        let schema = event_schema();
        let event = &schema.json_schema["properties"]["events"]["items"];
        let properties = event["properties"].as_object().unwrap();
        let required: Vec<&str> = event["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();

        assert_eq!(properties.len(), 9);
        for (name, property) in properties {
            assert!(required.contains(&name.as_str()), "{name} not required");
            assert!(
                property["description"].as_str().is_some_and(|d| !d.is_empty()),
                "{name} has no description"
            );
        }
    }

    #[test]
    fn property_names_match_persisted_field_names() {
        let schema = event_schema();
        let properties = schema.json_schema["properties"]["events"]["items"]["properties"]
            .as_object()
            .unwrap();
        for name in [
            "title",
            "description",
            "startDate",
            "startTime",
            "endDate",
            "endTime",
            "link",
            "address",
            "cost",
        ] {
            assert!(properties.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn instruction_carries_the_worked_example() {
        assert!(EXTRACTION_INSTRUCTION.contains("str8 west coastin"));
        assert!(EXTRACTION_INSTRUCTION.contains("eventbrite.com"));
    }
}
