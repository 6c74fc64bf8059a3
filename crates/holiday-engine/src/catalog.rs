//! Holiday catalogs -- an ordered, read-only set of definitions for one
//! jurisdiction, resolved in bulk for a year.
//!
//! Catalog order is significant: every resolution returns holidays in the
//! order they were defined. A catalog is built once and only ever borrowed
//! afterwards, so it can be shared between threads and resolved for many
//! years concurrently.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calendar::{check_year, MAX_YEAR, MIN_YEAR};
use crate::error::{EntryError, HolidayError, Result};
use crate::holiday::{Category, HolidayDefinition, RawDefinition, ResolvedHoliday};
use crate::observance::SubstitutionSet;
use crate::rule::Rule;

/// What batch resolution does when individual holidays fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Any failure fails the whole batch; no partial results.
    #[default]
    Atomic,
    /// Resolve what can be resolved and report the rest.
    ContinueOnError,
}

/// Outcome of resolving a catalog for one year.
#[derive(Debug)]
pub struct Resolution {
    pub year: i32,
    /// Resolved holidays, in catalog order.
    pub holidays: Vec<ResolvedHoliday>,
    /// Failed holidays, in catalog order. Always empty in `Atomic` mode.
    pub failures: Vec<EntryError>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A holiday that falls on a queried date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMatch {
    pub holiday: ResolvedHoliday,
    /// The date is the holiday's nominal date.
    pub actual: bool,
    /// The date is the holiday's observed date.
    pub observed: bool,
}

/// An ordered collection of uniquely named holiday definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    name: String,
    holidays: Vec<HolidayDefinition>,
}

impl Catalog {
    /// # Errors
    /// Returns `HolidayError::DuplicateName` if two definitions share a name.
    pub fn new(name: impl Into<String>, holidays: Vec<HolidayDefinition>) -> Result<Self> {
        for (i, holiday) in holidays.iter().enumerate() {
            if holidays[..i].iter().any(|h| h.name() == holiday.name()) {
                return Err(HolidayError::DuplicateName(holiday.name().to_string()));
            }
        }
        Ok(Self {
            name: name.into(),
            holidays,
        })
    }

    pub fn builder(name: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder {
            name: name.into(),
            holidays: Vec::new(),
        }
    }

    /// Load a catalog from its JSON form, re-running every construction check.
    ///
    /// # Errors
    /// Returns `HolidayError::Json` for malformed JSON. A definition that
    /// fails validation yields the same error as building it in code
    /// (`InvalidRule`, `DuplicateRule`, `DuplicateName`).
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HolidayDefinition> {
        self.holidays.iter()
    }

    pub fn get(&self, name: &str) -> Option<&HolidayDefinition> {
        self.holidays.iter().find(|h| h.name() == name)
    }

    /// Resolve every holiday held in `year`, in catalog order.
    ///
    /// Holidays outside their activity window are left out.
    ///
    /// # Errors
    /// Returns `HolidayError::Range` for an unsupported year, and
    /// `HolidayError::Aggregate` naming every holiday that failed; in that
    /// case no results are returned.
    pub fn resolve_all(&self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        Ok(self.resolve_all_with(year, ErrorMode::Atomic)?.holidays)
    }

    /// Resolve every holiday held in `year` under the given error policy.
    ///
    /// # Errors
    /// Returns `HolidayError::Range` for an unsupported year. In `Atomic`
    /// mode, also returns `HolidayError::Aggregate` if any holiday fails.
    pub fn resolve_all_with(&self, year: i32, mode: ErrorMode) -> Result<Resolution> {
        check_year(year)?;

        let mut holidays = Vec::with_capacity(self.holidays.len());
        let mut failures = Vec::new();

        for definition in &self.holidays {
            match definition.resolve(year) {
                Ok(Some(resolved)) => holidays.push(resolved),
                Ok(None) => {}
                Err(error) => failures.push(EntryError {
                    name: definition.name().to_string(),
                    error,
                }),
            }
        }

        debug!(
            "{} {}: {} resolved, {} failed",
            self.name,
            year,
            holidays.len(),
            failures.len()
        );

        if !failures.is_empty() {
            match mode {
                ErrorMode::Atomic => return Err(HolidayError::Aggregate(failures)),
                ErrorMode::ContinueOnError => {
                    for failure in &failures {
                        warn!("{} {}: skipping {}", self.name, year, failure);
                    }
                }
            }
        }

        Ok(Resolution {
            year,
            holidays,
            failures,
        })
    }

    /// Holidays whose nominal or observed date is `date`.
    ///
    /// The years either side of `date` are resolved too, so an observance
    /// pushed across New Year (e.g. Jan 1 on a Saturday observed Dec 31) is
    /// found.
    ///
    /// # Errors
    /// Returns `HolidayError::Range` for a date outside the supported years.
    /// In `Atomic` mode, also returns `HolidayError::Aggregate` if any
    /// holiday fails in any of the years examined.
    pub fn holidays_on(&self, date: NaiveDate, mode: ErrorMode) -> Result<Vec<DayMatch>> {
        let year = date.year();
        check_year(year)?;

        let first = (year - 1).max(MIN_YEAR);
        let last = (year + 1).min(MAX_YEAR);

        let mut matches = Vec::new();
        for y in first..=last {
            for holiday in self.resolve_all_with(y, mode)?.holidays {
                let actual = holiday.unadjusted == date;
                let observed = holiday.observed == date;
                if actual || observed {
                    matches.push(DayMatch {
                        holiday,
                        actual,
                        observed,
                    });
                }
            }
        }
        Ok(matches)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a HolidayDefinition;
    type IntoIter = std::slice::Iter<'a, HolidayDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Incremental catalog construction. Each step validates immediately.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    name: String,
    holidays: Vec<HolidayDefinition>,
}

impl CatalogBuilder {
    /// Append a new definition. See [`HolidayDefinition::define`].
    pub fn define(
        self,
        name: impl Into<String>,
        category: Category,
        rule: Rule,
        substitutions: SubstitutionSet,
    ) -> Result<Self> {
        self.push(HolidayDefinition::define(name, category, rule, substitutions)?)
    }

    /// Append a clone of `prototype`. See [`HolidayDefinition::clone_with`].
    pub fn clone_prototype(
        self,
        prototype: &HolidayDefinition,
        name: impl Into<String>,
        category: Category,
        substitutions: SubstitutionSet,
    ) -> Result<Self> {
        self.push(prototype.clone_with(name, category, substitutions)?)
    }

    /// # Errors
    /// Returns `HolidayError::DuplicateName` if the name is already taken.
    pub fn push(mut self, definition: HolidayDefinition) -> Result<Self> {
        if self.holidays.iter().any(|h| h.name() == definition.name()) {
            return Err(HolidayError::DuplicateName(definition.name().to_string()));
        }
        self.holidays.push(definition);
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        Catalog {
            name: self.name,
            holidays: self.holidays,
        }
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    name: String,
    holidays: Vec<RawDefinition>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = HolidayError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        let holidays = raw
            .holidays
            .into_iter()
            .map(HolidayDefinition::try_from)
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(raw.name, holidays)
    }
}
