//! Gregorian calendar arithmetic shared by the rule evaluator and the
//! observance resolver.
//!
//! Everything here works on the proleptic Gregorian calendar for years
//! `MIN_YEAR..=MAX_YEAR`. Dates are `chrono::NaiveDate`; nothing in this
//! module depends on time zones.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{HolidayError, Result};

/// First year any rule can be evaluated for.
pub const MIN_YEAR: i32 = 1;

/// Last year any rule can be evaluated for.
pub const MAX_YEAR: i32 = 9999;

/// Fail with [`HolidayError::Range`] unless `year` is supported.
pub fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(HolidayError::Range(year))
    }
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_yo_opt(year, 1).is_some_and(|jan1| jan1.leap_year())
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Build a date, mapping a non-existent month/day to [`HolidayError::InvalidDate`].
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    check_year(year)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::InvalidDate { year, month, day })
}

/// Shift `date` by a signed number of days, staying inside the supported range.
pub fn add_days(date: NaiveDate, days: i32) -> Result<NaiveDate> {
    let shifted = date
        .checked_add_signed(Duration::days(i64::from(days)))
        .ok_or(HolidayError::Range(date.year()))?;
    check_year(shifted.year())?;
    Ok(shifted)
}

/// Days to move forward from `from` to reach `to` (0..=6).
pub fn days_until(from: Weekday, to: Weekday) -> i32 {
    let from = from.num_days_from_monday() as i32;
    let to = to.num_days_from_monday() as i32;
    (to - from).rem_euclid(7)
}

/// Weekday reached by moving `offset` days from `weekday`.
pub fn weekday_after(weekday: Weekday, offset: i32) -> Weekday {
    (0..offset.rem_euclid(7)).fold(weekday, |day, _| day.succ())
}

/// The `n`-th occurrence of `weekday` in `month`.
///
/// Positive `n` counts forward from the 1st, negative `n` counts backward
/// from the last day of the month. Returns `None` when `n == 0` or the
/// month has fewer than `|n|` such weekdays.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: i8) -> Option<NaiveDate> {
    if n > 0 {
        return NaiveDate::from_weekday_of_month_opt(year, month, weekday, n.unsigned_abs());
    }
    if n == 0 {
        return None;
    }

    let last = days_in_month(year, month);
    let end = NaiveDate::from_ymd_opt(year, month, last)?;
    let back = days_until(weekday, end.weekday()) as u32 + 7 * (u32::from(n.unsigned_abs()) - 1);
    match last.checked_sub(back) {
        Some(day) if day >= 1 => NaiveDate::from_ymd_opt(year, month, day),
        _ => None,
    }
}

/// Western (Gregorian) Easter Sunday for `year`.
///
/// Anonymous Gregorian computus (Meeus/Jones/Butcher), valid for every
/// year of the proleptic Gregorian calendar.
pub fn western_easter(year: i32) -> Result<NaiveDate> {
    check_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    ymd(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

/// Orthodox Easter Sunday for `year`, expressed as a Gregorian date.
///
/// The Julian computus yields a Julian-calendar date in March or April,
/// which is then moved by the Julian/Gregorian drift for that century.
pub fn orthodox_easter(year: i32) -> Result<NaiveDate> {
    check_year(year)?;

    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let n = d + e + 114;

    let julian = ymd(year, (n / 31) as u32, (n % 31 + 1) as u32)?;
    let drift = year / 100 - year / 400 - 2;
    add_days(julian, drift)
}
