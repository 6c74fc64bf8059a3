//! Tests for rule evaluation: fixed dates, weekday rules, anchor offsets and
//! the errors each can produce.

use chrono::{NaiveDate, Weekday};
use holiday_engine::{evaluate, Anchor, Direction, HolidayError, Rule};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Fixed dates
// ---------------------------------------------------------------------------

#[test]
fn fixed_date_is_returned_as_is() {
    assert_eq!(evaluate(&Rule::fixed(7, 1), 2024).unwrap(), date(2024, 7, 1));
    assert_eq!(evaluate(&Rule::fixed(12, 31), 9999).unwrap(), date(9999, 12, 31));
}

#[test]
fn feb_29_only_exists_in_leap_years() {
    let leap_day = Rule::fixed(2, 29);
    assert_eq!(leap_day.evaluate(2024).unwrap(), date(2024, 2, 29));
    assert_eq!(leap_day.evaluate(2000).unwrap(), date(2000, 2, 29));

    let err = leap_day.evaluate(1900).unwrap_err();
    assert!(matches!(
        err,
        HolidayError::InvalidDate {
            year: 1900,
            month: 2,
            day: 29
        }
    ));
}

#[test]
fn feb_30_is_always_invalid() {
    let rule = Rule::fixed(2, 30);
    assert!(rule.validate().is_ok(), "day 30 is structurally fine");
    for year in [2023, 2024] {
        assert!(matches!(
            rule.evaluate(year),
            Err(HolidayError::InvalidDate { month: 2, day: 30, .. })
        ));
    }
}

#[test]
fn unsupported_years_are_range_errors() {
    let rule = Rule::fixed(1, 1);
    assert!(matches!(rule.evaluate(0), Err(HolidayError::Range(0))));
    assert!(matches!(rule.evaluate(-44), Err(HolidayError::Range(-44))));
    assert!(matches!(rule.evaluate(10_000), Err(HolidayError::Range(10_000))));
    assert!(rule.evaluate(1).is_ok());
    assert!(rule.evaluate(9999).is_ok());
}

// ---------------------------------------------------------------------------
// Weekday rules
// ---------------------------------------------------------------------------

#[test]
fn first_monday_of_september_when_sept_1_is_a_monday() {
    // 2025-09-01 is itself a Monday: the rule must not skip to Sept 8.
    let labour_day = Rule::nth_weekday(9, Weekday::Mon, 1);
    assert_eq!(labour_day.evaluate(2025).unwrap(), date(2025, 9, 1));
    assert_eq!(labour_day.evaluate(2024).unwrap(), date(2024, 9, 2));
}

#[test]
fn second_monday_of_october() {
    let thanksgiving = Rule::nth_weekday(10, Weekday::Mon, 2);
    assert_eq!(thanksgiving.evaluate(2023).unwrap(), date(2023, 10, 9));
    assert_eq!(thanksgiving.evaluate(2024).unwrap(), date(2024, 10, 14));
}

#[test]
fn negative_occurrence_counts_from_month_end() {
    // Last Monday of May (US Memorial Day).
    let last = Rule::nth_weekday(5, Weekday::Mon, -1);
    assert_eq!(last.evaluate(2024).unwrap(), date(2024, 5, 27));
    assert_eq!(last.evaluate(2025).unwrap(), date(2025, 5, 26));

    // When the month ends on the weekday itself, that day is the last one.
    let last_friday = Rule::nth_weekday(5, Weekday::Fri, -1);
    assert_eq!(last_friday.evaluate(2024).unwrap(), date(2024, 5, 31));

    let second_last = Rule::nth_weekday(5, Weekday::Mon, -2);
    assert_eq!(second_last.evaluate(2024).unwrap(), date(2024, 5, 20));
}

#[test]
fn fifth_occurrence_may_not_exist() {
    let fifth_monday = Rule::nth_weekday(9, Weekday::Mon, 5);
    assert_eq!(fifth_monday.evaluate(2025).unwrap(), date(2025, 9, 29));
    // September 2023 has only four Mondays.
    assert!(matches!(
        fifth_monday.evaluate(2023),
        Err(HolidayError::MissingOccurrence {
            year: 2023,
            month: 9,
            weekday: Weekday::Mon,
            n: 5
        })
    ));
}

#[test]
fn zero_occurrence_is_an_invalid_rule() {
    let rule = Rule::nth_weekday(9, Weekday::Mon, 0);
    assert!(matches!(rule.validate(), Err(HolidayError::InvalidRule(_))));
    assert!(matches!(rule.evaluate(2024), Err(HolidayError::InvalidRule(_))));
}

#[test]
fn monday_before_may_25() {
    let victoria_day = Rule::weekday_relative(5, 25, Weekday::Mon, Direction::Before);
    assert_eq!(victoria_day.evaluate(2021).unwrap(), date(2021, 5, 24));
    assert_eq!(victoria_day.evaluate(2022).unwrap(), date(2022, 5, 23));
    // May 25, 2026 is a Monday; "before" excludes the day itself.
    assert_eq!(victoria_day.evaluate(2026).unwrap(), date(2026, 5, 18));
}

#[test]
fn relative_directions_around_a_matching_day() {
    // 2026-05-25 is a Monday.
    let on = |direction| {
        Rule::weekday_relative(5, 25, Weekday::Mon, direction)
            .evaluate(2026)
            .unwrap()
    };
    assert_eq!(on(Direction::Before), date(2026, 5, 18));
    assert_eq!(on(Direction::OnOrBefore), date(2026, 5, 25));
    assert_eq!(on(Direction::After), date(2026, 6, 1));
    assert_eq!(on(Direction::OnOrAfter), date(2026, 5, 25));
    assert_eq!(on(Direction::Nearest), date(2026, 5, 25));
}

#[test]
fn nearest_weekday_picks_the_closer_side() {
    // 2024-07-04 is a Thursday: nearest Monday is Jul 1 (3 back) not Jul 8 (4 ahead).
    let rule = Rule::weekday_relative(7, 4, Weekday::Mon, Direction::Nearest);
    assert_eq!(rule.evaluate(2024).unwrap(), date(2024, 7, 1));
    // 2024-07-04 to the nearest Friday is one day ahead.
    let rule = Rule::weekday_relative(7, 4, Weekday::Fri, Direction::Nearest);
    assert_eq!(rule.evaluate(2024).unwrap(), date(2024, 7, 5));
}

#[test]
fn relative_rule_may_leave_the_month() {
    let rule = Rule::weekday_relative(1, 31, Weekday::Sat, Direction::OnOrAfter);
    // 2024-01-31 is a Wednesday.
    assert_eq!(rule.evaluate(2024).unwrap(), date(2024, 2, 3));
}

// ---------------------------------------------------------------------------
// Anchor offsets
// ---------------------------------------------------------------------------

#[test]
fn fixed_anchor_with_offset() {
    // Christmas Eve as Christmas - 1.
    let rule = Rule::anchored(Anchor::Fixed { month: 12, day: 25 }, -1);
    assert_eq!(rule.evaluate(2024).unwrap(), date(2024, 12, 24));
}

#[test]
fn anchor_offset_may_cross_the_year() {
    let rule = Rule::anchored(Anchor::Fixed { month: 12, day: 31 }, 1);
    assert_eq!(rule.evaluate(2024).unwrap(), date(2025, 1, 1));
}

#[test]
fn anchor_offset_leaving_supported_range_fails() {
    let rule = Rule::anchored(Anchor::Fixed { month: 12, day: 31 }, 1);
    assert!(matches!(rule.evaluate(9999), Err(HolidayError::Range(10_000))));
}

#[test]
fn invalid_anchor_date_propagates() {
    let rule = Rule::anchored(Anchor::Fixed { month: 2, day: 29 }.shifted(1), 0);
    assert!(rule.evaluate(2024).is_ok());
    assert!(matches!(
        rule.evaluate(2023),
        Err(HolidayError::InvalidDate { year: 2023, .. })
    ));
}

// ---------------------------------------------------------------------------
// Structural validation
// ---------------------------------------------------------------------------

#[test]
fn validation_rejects_malformed_rules() {
    let malformed = [
        Rule::fixed(0, 1),
        Rule::fixed(13, 1),
        Rule::fixed(1, 0),
        Rule::fixed(1, 32),
        Rule::nth_weekday(0, Weekday::Mon, 1),
        Rule::nth_weekday(5, Weekday::Mon, 6),
        Rule::nth_weekday(5, Weekday::Mon, -6),
        Rule::weekday_relative(5, 40, Weekday::Mon, Direction::Before),
        Rule::anchored(Anchor::Fixed { month: 14, day: 1 }.shifted(3), 1),
    ];
    for rule in malformed {
        assert!(
            matches!(rule.validate(), Err(HolidayError::InvalidRule(_))),
            "{:?} should be rejected",
            rule
        );
    }
}

#[test]
fn evaluation_is_deterministic() {
    let rule = Rule::easter_offset(-2);
    let first = rule.evaluate(2031).unwrap();
    for _ in 0..10 {
        assert_eq!(rule.evaluate(2031).unwrap(), first);
    }
}
