use crate::helpers::{alice_and_bob, approved, build, member, ymd};

fn entries(
    aggregator: &team_availability::LeaveAvailabilityAggregator,
    reference: &str,
    max_days: u32,
    max_results: usize,
) -> Vec<(String, String)> {
    aggregator
        .upcoming_leaves(ymd(reference), max_days, max_results)
        .iter()
        .map(|entry| {
            (
                entry.date.to_string(),
                entry.member.first_name.as_ref().to_owned(),
            )
        })
        .collect()
}

#[test]
fn should_truncate_within_a_day() {
    let aggregator = build(
        vec![
            member(1, "Alice", "Smith"),
            member(2, "Bob", "Jones"),
            member(3, "Carol", "White"),
        ],
        vec![
            approved(1, 1, "Annual", "2024-03-11", "2024-03-11"),
            approved(2, 2, "Sick", "2024-03-12", "2024-03-12"),
            approved(3, 3, "Annual", "2024-03-12", "2024-03-12"),
            approved(4, 2, "Personal", "2024-03-13", "2024-03-13"),
            approved(5, 3, "Annual", "2024-03-13", "2024-03-13"),
        ],
    );

    assert_eq!(
        entries(&aggregator, "2024-03-10", 5, 3),
        vec![
            ("2024-03-11".to_string(), "Alice".to_string()),
            ("2024-03-12".to_string(), "Bob".to_string()),
            ("2024-03-12".to_string(), "Carol".to_string()),
        ]
    );
    assert_eq!(
        entries(&aggregator, "2024-03-10", 5, 4),
        vec![
            ("2024-03-11".to_string(), "Alice".to_string()),
            ("2024-03-12".to_string(), "Bob".to_string()),
            ("2024-03-12".to_string(), "Carol".to_string()),
            ("2024-03-13".to_string(), "Bob".to_string()),
        ]
    );
}

#[test]
fn should_skip_reference_date() {
    let aggregator = build(
        alice_and_bob(),
        vec![approved(1, 1, "Annual", "2024-03-10", "2024-03-11")],
    );

    assert_eq!(
        entries(&aggregator, "2024-03-10", 5, 10),
        vec![("2024-03-11".to_string(), "Alice".to_string())]
    );
}

#[test]
fn should_stop_at_max_days() {
    let aggregator = build(
        alice_and_bob(),
        vec![approved(1, 1, "Annual", "2024-03-12", "2024-03-20")],
    );

    assert_eq!(entries(&aggregator, "2024-03-10", 3, 10).len(), 2);
    assert!(entries(&aggregator, "2024-03-10", 1, 10).is_empty());
    assert!(entries(&aggregator, "2024-03-10", 0, 10).is_empty());
}

#[test]
fn should_return_nothing_for_zero_results() {
    let aggregator = build(
        alice_and_bob(),
        vec![approved(1, 1, "Annual", "2024-03-11", "2024-03-12")],
    );

    assert!(entries(&aggregator, "2024-03-10", 5, 0).is_empty());
}

#[test]
fn should_handle_no_leave_at_all() {
    let aggregator = build(alice_and_bob(), vec![]);
    assert!(entries(&aggregator, "2024-03-10", 365, 7).is_empty());
    assert!(aggregator.upcoming_leaves_default(ymd("2024-03-10")).is_empty());
}

#[test]
fn should_apply_default_look_ahead_and_cap() {
    // Two people off every day for ten days: more than seven entries over six
    // or more days.
    let busy = build(
        alice_and_bob(),
        vec![
            approved(1, 1, "Annual", "2024-03-11", "2024-03-20"),
            approved(2, 2, "Sick", "2024-03-11", "2024-03-20"),
        ],
    );
    let capped = busy.upcoming_leaves_default(ymd("2024-03-10"));
    assert_eq!(capped.len(), 7);
    assert_eq!(capped[6].date, ymd("2024-03-14"));

    // One person off per day: the five-day window binds before the cap.
    let quiet = build(
        alice_and_bob(),
        vec![approved(1, 1, "Annual", "2024-03-11", "2024-03-20")],
    );
    let dates: Vec<_> = quiet
        .upcoming_leaves_default(ymd("2024-03-10"))
        .iter()
        .map(|entry| entry.date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2024-03-11", "2024-03-12", "2024-03-13", "2024-03-14", "2024-03-15"]
    );
}
