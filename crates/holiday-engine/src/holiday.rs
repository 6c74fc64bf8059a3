//! Holiday definitions -- a named rule plus its observance policy.
//!
//! Definitions are immutable values. Deriving a jurisdiction's holiday from
//! a shared prototype goes through [`HolidayDefinition::clone_with`], which
//! copies the prototype's rule into a new, independent definition.

use std::fmt;

use chrono::NaiveDate;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{HolidayError, Result};
use crate::observance::{Substitution, SubstitutionSet};
use crate::rule::Rule;

/// How a holiday is observed. Informational only; never affects dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Statutory public holiday.
    #[default]
    Public,
    /// Banks closed.
    Bank,
    /// Commemorated, but not a day off.
    Observance,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Public => "public",
            Category::Bank => "bank",
            Category::Observance => "observance",
        };
        f.write_str(label)
    }
}

/// A named holiday: date rule, category, substitutions and activity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub struct HolidayDefinition {
    name: String,
    category: Category,
    rule: Rule,
    #[serde(skip_serializing_if = "SubstitutionSet::is_empty")]
    substitutions: SubstitutionSet,
    /// Name of the definition this one was cloned from.
    #[serde(skip_serializing_if = "Option::is_none")]
    prototype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_year: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    except_years: Vec<i32>,
}

impl HolidayDefinition {
    /// Build a definition from scratch.
    ///
    /// # Errors
    /// Returns `HolidayError::InvalidRule` if the rule is malformed or the
    /// name is empty.
    pub fn define(
        name: impl Into<String>,
        category: Category,
        rule: Rule,
        substitutions: SubstitutionSet,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        rule.validate()?;
        Ok(Self::from_parts(name, category, rule, substitutions))
    }

    /// Definition for a literal known to be well formed.
    pub(crate) fn from_parts(
        name: impl Into<String>,
        category: Category,
        rule: Rule,
        substitutions: SubstitutionSet,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            rule,
            substitutions,
            prototype: None,
            start_year: None,
            end_year: None,
            except_years: Vec::new(),
        }
    }

    /// New definition sharing this one's rule and activity window, with a
    /// new name, category and substitutions.
    ///
    /// The result is independent: nothing done to it affects `self`.
    ///
    /// # Errors
    /// Returns `HolidayError::InvalidRule` if `name` is empty.
    pub fn clone_with(
        &self,
        name: impl Into<String>,
        category: Category,
        substitutions: SubstitutionSet,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            category,
            rule: self.rule.clone(),
            substitutions,
            prototype: Some(self.name.clone()),
            start_year: self.start_year,
            end_year: self.end_year,
            except_years: self.except_years.clone(),
        })
    }

    /// Restrict the holiday to `start..=end` (either bound optional).
    pub fn with_years(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.start_year = start;
        self.end_year = end;
        self
    }

    /// Years in which the holiday is not held at all.
    pub fn except_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.except_years = years.into_iter().collect();
        self.except_years.sort_unstable();
        self.except_years.dedup();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn substitutions(&self) -> &SubstitutionSet {
        &self.substitutions
    }

    pub fn prototype(&self) -> Option<&str> {
        self.prototype.as_deref()
    }

    pub fn start_year(&self) -> Option<i32> {
        self.start_year
    }

    pub fn end_year(&self) -> Option<i32> {
        self.end_year
    }

    pub fn excepted_years(&self) -> &[i32] {
        &self.except_years
    }

    /// Whether the holiday is held at all in `year`.
    pub fn is_active(&self, year: i32) -> bool {
        self.start_year.is_none_or(|start| year >= start)
            && self.end_year.is_none_or(|end| year <= end)
            && self.except_years.binary_search(&year).is_err()
    }

    /// Nominal and observed dates for `year`, or `None` if the holiday is
    /// not held that year.
    ///
    /// # Errors
    /// Propagates evaluation and substitution errors for this holiday.
    pub fn resolve(&self, year: i32) -> Result<Option<ResolvedHoliday>> {
        if !self.is_active(year) {
            trace!("{}: not held in {}", self.name, year);
            return Ok(None);
        }
        let unadjusted = self.rule.evaluate(year)?;
        let observed = self.substitutions.resolve(unadjusted)?;
        trace!("{}: {} observed {}", self.name, unadjusted, observed);
        Ok(Some(ResolvedHoliday {
            name: self.name.clone(),
            category: self.category,
            unadjusted,
            observed,
        }))
    }
}

/// A holiday pinned to concrete dates for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHoliday {
    pub name: String,
    pub category: Category,
    /// Date the rule yields before substitution.
    pub unadjusted: NaiveDate,
    /// Date the holiday is actually observed.
    pub observed: NaiveDate,
}

impl ResolvedHoliday {
    pub fn is_substituted(&self) -> bool {
        self.unadjusted != self.observed
    }
}

/// Unvalidated JSON form of a [`HolidayDefinition`].
#[derive(Deserialize)]
pub(crate) struct RawDefinition {
    name: String,
    #[serde(default)]
    category: Category,
    rule: Rule,
    #[serde(default)]
    substitutions: Vec<Substitution>,
    #[serde(default)]
    prototype: Option<String>,
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    end_year: Option<i32>,
    #[serde(default)]
    except_years: Vec<i32>,
}

impl TryFrom<RawDefinition> for HolidayDefinition {
    type Error = HolidayError;

    fn try_from(raw: RawDefinition) -> Result<Self> {
        let substitutions = SubstitutionSet::new(raw.substitutions)?;
        let mut definition = Self::define(raw.name, raw.category, raw.rule, substitutions)?
            .with_years(raw.start_year, raw.end_year)
            .except_years(raw.except_years);
        definition.prototype = raw.prototype;
        Ok(definition)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(HolidayError::InvalidRule("holiday name must not be empty".to_string()));
    }
    Ok(())
}
