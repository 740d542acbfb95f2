use serde_json::json;
use team_availability::{domain::MemberId, MemberFilter};

use crate::helpers::{alice_and_bob, approved, build, ymd};

#[test]
fn should_match_calendar_schema() {
    let aggregator = build(
        alice_and_bob(),
        vec![
            approved(1, 1, "Annual", "2024-03-10", "2024-03-12"),
            approved(2, 2, "Sick", "2024-03-12", "2024-03-12"),
        ],
    );

    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "year": { "type": "integer" },
        "month": { "type": "integer", "minimum": 1, "maximum": 12 },
        "days": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "date": { "type": "string", "pattern": "^\\d{4}-\\d{2}-\\d{2}$" },
              "members_on_leave": {
                "type": "array",
                "minItems": 1,
                "items": {
                  "type": "object",
                  "properties": {
                    "id": { "type": "integer" },
                    "first_name": { "type": "string", "minLength": 1 },
                    "last_name": { "type": "string", "minLength": 1 },
                    "leave_type": { "type": "string", "minLength": 1 }
                  },
                  "required": ["id", "first_name", "last_name", "leave_type"]
                }
              }
            },
            "required": ["date", "members_on_leave"]
          }
        }
      },
      "required": ["year", "month", "days"]
    });

    let calendar = aggregator
        .month_calendar(2024, 3, &MemberFilter::All)
        .expect("Failed to build calendar");
    let body = serde_json::to_value(&calendar).unwrap();

    assert!(
        jsonschema::is_valid(&schema, &body),
        "calendar does not match schema"
    );
    assert_eq!(
        body["days"],
        json!([
            {
                "date": "2024-03-10",
                "members_on_leave": [
                    { "id": 1, "first_name": "Alice", "last_name": "Smith", "leave_type": "Annual" }
                ]
            },
            {
                "date": "2024-03-11",
                "members_on_leave": [
                    { "id": 1, "first_name": "Alice", "last_name": "Smith", "leave_type": "Annual" }
                ]
            },
            {
                "date": "2024-03-12",
                "members_on_leave": [
                    { "id": 1, "first_name": "Alice", "last_name": "Smith", "leave_type": "Annual" },
                    { "id": 2, "first_name": "Bob", "last_name": "Jones", "leave_type": "Sick" }
                ]
            }
        ])
    );
}

#[test]
fn should_clip_leave_to_month() {
    let aggregator = build(
        alice_and_bob(),
        vec![approved(1, 1, "Annual", "2024-02-27", "2024-03-02")],
    );

    let march = aggregator.month_calendar(2024, 3, &MemberFilter::All).unwrap();
    assert_eq!(
        march.days.iter().map(|day| day.date).collect::<Vec<_>>(),
        vec![ymd("2024-03-01"), ymd("2024-03-02")]
    );

    let february = aggregator.month_calendar(2024, 2, &MemberFilter::All).unwrap();
    assert_eq!(february.days.len(), 3);
    assert!(february.day(ymd("2024-02-29")).is_some());

    let april = aggregator.month_calendar(2024, 4, &MemberFilter::All).unwrap();
    assert!(april.days.is_empty());
}

#[test]
fn should_filter_calendar_by_member() {
    let aggregator = build(
        alice_and_bob(),
        vec![
            approved(1, 1, "Annual", "2024-03-10", "2024-03-12"),
            approved(2, 2, "Sick", "2024-03-20", "2024-03-20"),
        ],
    );

    let bob_only = aggregator
        .month_calendar(2024, 3, &MemberFilter::Only(MemberId::new(2)))
        .unwrap();
    assert_eq!(bob_only.days.len(), 1);
    assert_eq!(bob_only.days[0].date, ymd("2024-03-20"));
    assert_eq!(bob_only.days[0].members_on_leave[0].first_name, "Bob");
}

#[test]
fn should_reject_invalid_month() {
    let aggregator = build(alice_and_bob(), vec![]);
    let error = aggregator
        .month_calendar(2024, 13, &MemberFilter::All)
        .unwrap_err();
    assert_eq!(error.as_ref(), "Invalid month: 2024-13");
}
