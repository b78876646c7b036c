//! Tests for the catalog boundary adapter: day patterns, clock values, time
//! ranges, meeting patterns and catalog documents.

use chrono::Weekday;
use timetable_engine::{
    parse_clock, parse_day_pattern, parse_time_range, Catalog, MeetingKind, MeetingPattern,
    TimeRange, TimetableError,
};

// ---------------------------------------------------------------------------
// Day patterns
// ---------------------------------------------------------------------------

#[test]
fn day_pattern_slots_are_monday_first() {
    let mask = parse_day_pattern("M-W-F--").unwrap();
    assert_eq!(
        mask.weekdays().collect::<Vec<_>>(),
        vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
    );
    assert!(parse_day_pattern("------U").unwrap().meets_on(Weekday::Sun));
}

#[test]
fn all_dash_pattern_is_empty_not_an_error() {
    assert!(parse_day_pattern("-------").unwrap().is_empty());
}

#[test]
fn short_day_pattern_is_rejected() {
    let err = parse_day_pattern("M-W-F").unwrap_err();
    assert!(matches!(
        err,
        TimetableError::InvalidDayPattern {
            expected: 7,
            found: 5,
            ..
        }
    ));
}

#[test]
fn long_day_pattern_is_rejected() {
    assert!(parse_day_pattern("M-W-F---").is_err());
}

#[test]
fn unexpected_slot_character_is_rejected() {
    let err = parse_day_pattern("M-W F--").unwrap_err();
    assert!(matches!(err, TimetableError::InvalidSlot { slot: 3, ch: ' ', .. }));
    assert!(parse_day_pattern("M1W----").is_err());
}

// ---------------------------------------------------------------------------
// Clock values and ranges
// ---------------------------------------------------------------------------

#[test]
fn clock_is_minutes_since_midnight() {
    assert_eq!(parse_clock("0000").unwrap(), 0);
    assert_eq!(parse_clock("0905").unwrap(), 545);
    assert_eq!(parse_clock("1830").unwrap(), 1110);
    assert_eq!(parse_clock("2359").unwrap(), 1439);
}

#[test]
fn malformed_clock_values_are_rejected() {
    for bad in ["", "930", "09300", "9:30", "ab30", "2400", "1260", "+930"] {
        assert!(
            matches!(parse_clock(bad), Err(TimetableError::InvalidTime(_))),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn time_range_parses_both_ends() {
    assert_eq!(parse_time_range("1000-1150").unwrap(), TimeRange::new(600, 710));
}

#[test]
fn malformed_time_ranges_are_rejected() {
    assert!(parse_time_range("1000").is_err());
    assert!(parse_time_range("1000-").is_err());
    assert!(parse_time_range("10:00-11:00").is_err());
    assert!(parse_time_range("TBA").is_err());
}

// ---------------------------------------------------------------------------
// Meeting patterns
// ---------------------------------------------------------------------------

#[test]
fn meeting_pattern_parses_kind_days_and_time() {
    let pattern = MeetingPattern::parse("LAB", "-T-R---", "1400-1650").unwrap();
    assert_eq!(pattern.kind, MeetingKind::Lab);
    assert!(pattern.days.meets_on(Weekday::Thu));
    assert_eq!(pattern.time, TimeRange::new(840, 1010));
}

#[test]
fn regular_meeting_must_end_after_it_starts() {
    assert!(matches!(
        MeetingPattern::parse("LEC", "M------", "1100-1100"),
        Err(TimetableError::EmptyTimeRange(_))
    ));
    assert!(matches!(
        MeetingPattern::parse("LEC", "M------", "1100-1000"),
        Err(TimetableError::EmptyTimeRange(_))
    ));
}

#[test]
fn exam_meeting_may_have_degenerate_range() {
    let exam = MeetingPattern::parse("EXAM", "M------", "0000-0000").unwrap();
    assert!(exam.kind.is_exam());
}

#[test]
fn meeting_pattern_serializes_to_catalog_strings() {
    let pattern = MeetingPattern::parse("lecture", "M-W----", "0900-0950").unwrap();
    let json = serde_json::to_value(pattern).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "LEC", "days": "M-W----", "time": "0900-0950"})
    );
    let back: MeetingPattern = serde_json::from_value(json).unwrap();
    assert_eq!(back, pattern);
}

#[test]
fn deserializing_a_malformed_meeting_fails() {
    let parsed: Result<MeetingPattern, _> =
        serde_json::from_str(r#"{"kind": "LEC", "days": "MW", "time": "0900-0950"}"#);
    assert!(parsed.is_err());
}

// ---------------------------------------------------------------------------
// Catalog documents
// ---------------------------------------------------------------------------

const CATALOG: &str = r#"{
  "courses": [
    {
      "code": "CS101",
      "hidden": ["CS101-C"],
      "sections": [
        { "id": "CS101-A", "meetings": [{ "kind": "LEC", "days": "M-W----", "time": "0900-1000" }] },
        { "id": "CS101-B", "cancelled": true, "meetings": [] },
        { "id": "CS101-C", "meetings": [{ "kind": "LEC", "days": "-T-R---", "time": "0900-1000" }] }
      ]
    },
    {
      "code": "MATH200",
      "pinned": "MATH200-B",
      "sections": [
        { "id": "MATH200-A", "meetings": [{ "kind": "LEC", "days": "M-W----", "time": "1000-1100" }] },
        { "id": "MATH200-B", "meetings": [
          { "kind": "LEC", "days": "-T-R---", "time": "1000-1100" },
          { "kind": "EXAM", "days": "----F--", "time": "0900-1200" }
        ] }
      ]
    }
  ]
}"#;

#[test]
fn catalog_groups_apply_hide_pin_and_cancellation() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let groups = catalog.choice_groups().unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].course, "CS101");
    let cs: Vec<&str> = groups[0].sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(cs, vec!["CS101-A"]);

    let math: Vec<&str> = groups[1].sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(math, vec!["MATH200-B"]);
    assert_eq!(groups[1].sections[0].meetings.len(), 2);
    assert_eq!(groups[1].sections[0].course, "MATH200");
}

#[test]
fn catalog_section_lookup_ignores_filters() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let hidden = catalog.section("CS101-C").unwrap();
    assert_eq!(hidden.course, "CS101");
    assert!(matches!(
        catalog.section("NOPE-1"),
        Err(TimetableError::UnknownSection(id)) if id == "NOPE-1"
    ));
}

#[test]
fn malformed_meeting_names_its_section() {
    let json = r#"{"courses": [{"code": "X", "sections": [
        {"id": "X-1", "meetings": [{"kind": "LEC", "days": "M-W----", "time": "9-10"}]}
    ]}]}"#;
    let catalog = Catalog::from_json(json).unwrap();

    let err = catalog.choice_groups().unwrap_err();

    match err {
        TimetableError::Section { section, source } => {
            assert_eq!(section, "X-1");
            assert!(matches!(*source, TimetableError::InvalidTime(_)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn invalid_catalog_json_is_reported() {
    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(TimetableError::Catalog(_))
    ));
}
