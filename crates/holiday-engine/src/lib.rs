//! # holiday-engine
//!
//! Deterministic holiday rule evaluation with weekend-observance resolution.
//!
//! A holiday is declared once as data -- a name, a category, a date rule and
//! a substitution policy -- and resolved to concrete dates for any year in
//! `1..=9999`. Resolution is a pure function of the definition and the year:
//! no clocks, no I/O, no shared mutable state.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use holiday_engine::{Catalog, Category, Rule, SubstitutionSet};
//!
//! let catalog = Catalog::builder("Example")
//!     .define(
//!         "Labour Day",
//!         Category::Public,
//!         Rule::nth_weekday(9, Weekday::Mon, 1),
//!         SubstitutionSet::empty(),
//!     )
//!     .unwrap()
//!     .build();
//!
//! let holidays = catalog.resolve_all(2025).unwrap();
//! assert_eq!(holidays[0].observed, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calendar`]: Gregorian arithmetic, supported year range, Easter computus
//! - [`rule`]: date rules and their evaluation to a nominal date
//! - [`observance`]: weekend substitution from nominal to observed date
//! - [`holiday`]: holiday definitions and clone-with-override
//! - [`catalog`]: ordered catalogs and bulk resolution for a year
//! - [`prototypes`]: shared Anglo-American holidays to clone from
//! - [`error`]: Error types

pub mod calendar;
pub mod catalog;
pub mod error;
pub mod holiday;
pub mod observance;
pub mod prototypes;
pub mod rule;

pub use calendar::{MAX_YEAR, MIN_YEAR};
pub use catalog::{Catalog, CatalogBuilder, DayMatch, ErrorMode, Resolution};
pub use error::{EntryError, HolidayError};
pub use holiday::{Category, HolidayDefinition, ResolvedHoliday};
pub use observance::{resolve, Substitution, SubstitutionSet};
pub use rule::{evaluate, Anchor, ComputedAnchor, Direction, Rule, WeekdayRule};
