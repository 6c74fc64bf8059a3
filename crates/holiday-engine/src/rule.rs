//! Rule evaluation -- turns a declarative date rule into the nominal
//! (unadjusted) date it falls on in a given year.
//!
//! A [`Rule`] is one of three shapes:
//!
//! - a fixed month/day (`Jul 1`),
//! - a weekday rule (`first Monday of September`, `Monday before May 25`),
//! - an offset from an [`Anchor`] (`Easter - 2 days`).
//!
//! Evaluation is a pure function of `(rule, year)`.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, add_days, check_year, days_until, nth_weekday_of_month, ymd};
use crate::error::{HolidayError, Result};

/// A year-dependent date computed by a known algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedAnchor {
    /// Easter Sunday, Gregorian computus.
    WesternEaster,
    /// Easter Sunday, Julian computus, as a Gregorian date.
    OrthodoxEaster,
}

impl ComputedAnchor {
    pub fn evaluate(self, year: i32) -> Result<NaiveDate> {
        match self {
            ComputedAnchor::WesternEaster => calendar::western_easter(year),
            ComputedAnchor::OrthodoxEaster => calendar::orthodox_easter(year),
        }
    }
}

/// Reference point for offset-based rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Fixed { month: u32, day: u32 },
    Computed(ComputedAnchor),
    Derived { base: Box<Anchor>, offset_days: i32 },
}

impl Anchor {
    pub fn easter() -> Self {
        Anchor::Computed(ComputedAnchor::WesternEaster)
    }

    pub fn orthodox_easter() -> Self {
        Anchor::Computed(ComputedAnchor::OrthodoxEaster)
    }

    /// Anchor `offset_days` away from `self`.
    pub fn shifted(self, offset_days: i32) -> Self {
        Anchor::Derived {
            base: Box::new(self),
            offset_days,
        }
    }

    pub fn evaluate(&self, year: i32) -> Result<NaiveDate> {
        match self {
            Anchor::Fixed { month, day } => ymd(year, *month, *day),
            Anchor::Computed(computed) => computed.evaluate(year),
            Anchor::Derived { base, offset_days } => add_days(base.evaluate(year)?, *offset_days),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Anchor::Fixed { month, day } => validate_month_day(*month, *day),
            Anchor::Computed(_) => Ok(()),
            Anchor::Derived { base, .. } => base.validate(),
        }
    }
}

/// Where a [`WeekdayRule::Relative`] looks relative to its reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Strictly before the reference day.
    Before,
    OnOrBefore,
    /// Strictly after the reference day.
    After,
    OnOrAfter,
    /// Closest to the reference day (at most three days away).
    Nearest,
}

/// Weekday-based rules within a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayRule {
    /// The `n`-th `weekday` of `month`; negative `n` counts from the month's end.
    Nth { month: u32, weekday: Weekday, n: i8 },
    /// The `weekday` nearest to, before or after `day` of `month`.
    Relative {
        month: u32,
        day: u32,
        weekday: Weekday,
        direction: Direction,
    },
}

impl WeekdayRule {
    pub fn evaluate(&self, year: i32) -> Result<NaiveDate> {
        check_year(year)?;
        match *self {
            WeekdayRule::Nth { month, weekday, n } => {
                if n == 0 {
                    return Err(HolidayError::InvalidRule(
                        "weekday occurrence must not be zero".to_string(),
                    ));
                }
                nth_weekday_of_month(year, month, weekday, n).ok_or(
                    HolidayError::MissingOccurrence {
                        year,
                        month,
                        weekday,
                        n,
                    },
                )
            }
            WeekdayRule::Relative {
                month,
                day,
                weekday,
                direction,
            } => {
                let reference = ymd(year, month, day)?;
                let forward = days_until(reference.weekday(), weekday);
                let backward = days_until(weekday, reference.weekday());
                let offset = match direction {
                    Direction::OnOrAfter => forward,
                    Direction::After if forward == 0 => 7,
                    Direction::After => forward,
                    Direction::OnOrBefore => -backward,
                    Direction::Before if backward == 0 => -7,
                    Direction::Before => -backward,
                    // forward + backward is 7 unless both are zero, so the
                    // two candidates never tie.
                    Direction::Nearest if forward <= backward => forward,
                    Direction::Nearest => -backward,
                };
                add_days(reference, offset)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            WeekdayRule::Nth { month, n, .. } => {
                validate_month(month)?;
                if n == 0 {
                    return Err(HolidayError::InvalidRule(
                        "weekday occurrence must not be zero".to_string(),
                    ));
                }
                if n.unsigned_abs() > 5 {
                    return Err(HolidayError::InvalidRule(format!(
                        "weekday occurrence {} is out of range -5..=5",
                        n
                    )));
                }
                Ok(())
            }
            WeekdayRule::Relative { month, day, .. } => validate_month_day(month, day),
        }
    }
}

/// A holiday's date rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Fixed { month: u32, day: u32 },
    Weekday(WeekdayRule),
    AnchorOffset { anchor: Anchor, offset_days: i32 },
}

impl Rule {
    pub fn fixed(month: u32, day: u32) -> Self {
        Rule::Fixed { month, day }
    }

    /// The `n`-th `weekday` of `month` (negative `n` counts from the end).
    pub fn nth_weekday(month: u32, weekday: Weekday, n: i8) -> Self {
        Rule::Weekday(WeekdayRule::Nth { month, weekday, n })
    }

    pub fn weekday_relative(month: u32, day: u32, weekday: Weekday, direction: Direction) -> Self {
        Rule::Weekday(WeekdayRule::Relative {
            month,
            day,
            weekday,
            direction,
        })
    }

    pub fn anchored(anchor: Anchor, offset_days: i32) -> Self {
        Rule::AnchorOffset {
            anchor,
            offset_days,
        }
    }

    /// Western Easter shifted by `offset_days`.
    pub fn easter_offset(offset_days: i32) -> Self {
        Rule::anchored(Anchor::easter(), offset_days)
    }

    /// Structural checks that do not depend on the year.
    ///
    /// # Errors
    /// Returns `HolidayError::InvalidRule` for a month outside 1-12, a day
    /// outside 1-31, or a weekday occurrence of zero or beyond five.
    pub fn validate(&self) -> Result<()> {
        match self {
            Rule::Fixed { month, day } => validate_month_day(*month, *day),
            Rule::Weekday(rule) => rule.validate(),
            Rule::AnchorOffset { anchor, .. } => anchor.validate(),
        }
    }

    /// Evaluate this rule for `year`. See [`evaluate`].
    pub fn evaluate(&self, year: i32) -> Result<NaiveDate> {
        evaluate(self, year)
    }
}

/// Compute the unadjusted date `rule` falls on in `year`.
///
/// # Errors
/// Returns `HolidayError::Range` if `year` (or a shifted result) is outside
/// `MIN_YEAR..=MAX_YEAR`, `HolidayError::InvalidDate` if a fixed month/day
/// does not exist that year, `HolidayError::MissingOccurrence` if the month
/// has fewer than `|n|` of the weekday, and `HolidayError::InvalidRule` for
/// a weekday occurrence of zero.
pub fn evaluate(rule: &Rule, year: i32) -> Result<NaiveDate> {
    check_year(year)?;
    match rule {
        Rule::Fixed { month, day } => ymd(year, *month, *day),
        Rule::Weekday(weekday_rule) => weekday_rule.evaluate(year),
        Rule::AnchorOffset {
            anchor,
            offset_days,
        } => add_days(anchor.evaluate(year)?, *offset_days),
    }
}

fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(HolidayError::InvalidRule(format!("month {} is out of range 1..=12", month)))
    }
}

fn validate_month_day(month: u32, day: u32) -> Result<()> {
    validate_month(month)?;
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(HolidayError::InvalidRule(format!("day {} is out of range 1..=31", day)))
    }
}
