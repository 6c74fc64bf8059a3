//! Weekend substitution -- moves a holiday's observance off an undesired
//! weekday.
//!
//! A [`SubstitutionSet`] maps trigger weekdays to day offsets. Resolution
//! looks at the nominal date's weekday exactly once and applies at most one
//! shift. The observed date is never re-tested, even when it lands on another
//! trigger weekday.

use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_days, weekday_after};
use crate::error::{HolidayError, Result};

/// Observe the holiday `offset_days` away when it falls on `trigger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Substitution {
    pub trigger: Weekday,
    pub offset_days: i32,
}

impl Substitution {
    pub const fn new(trigger: Weekday, offset_days: i32) -> Self {
        Self {
            trigger,
            offset_days,
        }
    }

    /// Weekday the shifted date lands on.
    pub fn lands_on(&self) -> Weekday {
        weekday_after(self.trigger, self.offset_days)
    }
}

/// An ordered, validated list of substitutions.
///
/// Construction rejects two entries with the same trigger
/// ([`HolidayError::DuplicateRule`]), so at most one entry matches any date.
/// A shift may land on another trigger weekday; [`resolve`] does not look
/// at the shifted date again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Substitution>", into = "Vec<Substitution>")]
pub struct SubstitutionSet(Vec<Substitution>);

impl SubstitutionSet {
    /// # Errors
    /// Returns `HolidayError::DuplicateRule` if two entries share a trigger.
    pub fn new(rules: Vec<Substitution>) -> Result<Self> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|earlier| earlier.trigger == rule.trigger) {
                return Err(HolidayError::DuplicateRule(rule.trigger));
            }
        }
        Ok(Self(rules))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Sunday moves to Monday.
    pub fn sunday_to_monday() -> Self {
        Self(vec![Substitution::new(Weekday::Sun, 1)])
    }

    /// Saturday moves back to Friday, Sunday forward to Monday.
    pub fn weekend_to_nearest_weekday() -> Self {
        Self(vec![
            Substitution::new(Weekday::Sat, -1),
            Substitution::new(Weekday::Sun, 1),
        ])
    }

    /// Saturday and Sunday both move to the following Monday.
    pub fn weekend_to_monday() -> Self {
        Self(vec![
            Substitution::new(Weekday::Sat, 2),
            Substitution::new(Weekday::Sun, 1),
        ])
    }

    pub fn rules(&self) -> &[Substitution] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First substitution triggered by `weekday`, in declaration order.
    pub fn matching(&self, weekday: Weekday) -> Option<&Substitution> {
        self.0.iter().find(|rule| rule.trigger == weekday)
    }

    /// Observed date for `unadjusted`. See [`resolve`].
    pub fn resolve(&self, unadjusted: NaiveDate) -> Result<NaiveDate> {
        resolve(unadjusted, self)
    }
}

impl TryFrom<Vec<Substitution>> for SubstitutionSet {
    type Error = HolidayError;

    fn try_from(rules: Vec<Substitution>) -> Result<Self> {
        Self::new(rules)
    }
}

impl From<SubstitutionSet> for Vec<Substitution> {
    fn from(set: SubstitutionSet) -> Self {
        set.0
    }
}

/// Compute the observed date for a nominal holiday date.
///
/// The weekday of `unadjusted` is examined once; the first substitution
/// whose trigger matches is applied. With no match the date is returned
/// unchanged. The shifted date is not examined again.
///
/// # Errors
/// Returns `HolidayError::Range` if the shift leaves the supported years.
pub fn resolve(unadjusted: NaiveDate, substitutions: &SubstitutionSet) -> Result<NaiveDate> {
    match substitutions.matching(unadjusted.weekday()) {
        Some(rule) => {
            let observed = add_days(unadjusted, rule.offset_days)?;
            debug!(
                "substituting {} ({}) -> {} ({:+} days)",
                unadjusted,
                rule.trigger,
                observed,
                rule.offset_days
            );
            Ok(observed)
        }
        None => Ok(unadjusted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_trigger_is_rejected() {
        let err = SubstitutionSet::new(vec![
            Substitution::new(Weekday::Sun, 1),
            Substitution::new(Weekday::Sun, 2),
        ])
        .unwrap_err();
        assert!(matches!(err, HolidayError::DuplicateRule(Weekday::Sun)));
    }

    #[test]
    fn shift_onto_another_trigger_is_applied_once() {
        let set = SubstitutionSet::new(vec![
            Substitution::new(Weekday::Sat, 1),
            Substitution::new(Weekday::Sun, 1),
        ])
        .unwrap();
        // 2024-01-06 is a Saturday.
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(set.resolve(saturday).unwrap(), sunday);
    }

    #[test]
    fn full_week_shift_is_allowed() {
        let set = SubstitutionSet::new(vec![Substitution::new(Weekday::Mon, 7)]).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(set.resolve(monday).unwrap(), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn zero_offset_is_allowed() {
        let set = SubstitutionSet::new(vec![Substitution::new(Weekday::Mon, 0)]).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(set.resolve(monday).unwrap(), monday);
    }

    #[test]
    fn preset_policies_pass_validation() {
        for set in [
            SubstitutionSet::sunday_to_monday(),
            SubstitutionSet::weekend_to_nearest_weekday(),
            SubstitutionSet::weekend_to_monday(),
        ] {
            assert!(SubstitutionSet::new(set.rules().to_vec()).is_ok());
        }
    }
}
