//! Holidays shared across Anglo-American jurisdictions.
//!
//! These carry no substitutions; a jurisdiction clones them with its own
//! name, category and weekend policy:
//!
//! ```rust
//! use holiday_engine::prototypes::CHRISTMAS_DAY;
//! use holiday_engine::{Category, SubstitutionSet};
//!
//! let christmas = CHRISTMAS_DAY
//!     .clone_with("Christmas Day", Category::Bank, SubstitutionSet::weekend_to_nearest_weekday())
//!     .unwrap();
//! assert_eq!(christmas.prototype(), Some("Christmas Day"));
//! ```

use std::sync::LazyLock;

use crate::holiday::{Category, HolidayDefinition};
use crate::observance::SubstitutionSet;
use crate::rule::Rule;

fn prototype(name: &str, rule: Rule) -> HolidayDefinition {
    HolidayDefinition::from_parts(name, Category::Public, rule, SubstitutionSet::empty())
}

/// 1 January.
pub static NEW_YEAR: LazyLock<HolidayDefinition> =
    LazyLock::new(|| prototype("New Year's Day", Rule::fixed(1, 1)));

/// Two days before Easter.
pub static GOOD_FRIDAY: LazyLock<HolidayDefinition> =
    LazyLock::new(|| prototype("Good Friday", Rule::easter_offset(-2)));

pub static EASTER_SUNDAY: LazyLock<HolidayDefinition> =
    LazyLock::new(|| prototype("Easter Sunday", Rule::easter_offset(0)));

/// The day after Easter.
pub static EASTER_MONDAY: LazyLock<HolidayDefinition> =
    LazyLock::new(|| prototype("Easter Monday", Rule::easter_offset(1)));

/// 11 November.
pub static ARMISTICE_DAY: LazyLock<HolidayDefinition> =
    LazyLock::new(|| prototype("Armistice Day", Rule::fixed(11, 11)));

/// 25 December.
pub static CHRISTMAS_DAY: LazyLock<HolidayDefinition> =
    LazyLock::new(|| prototype("Christmas Day", Rule::fixed(12, 25)));

/// 26 December.
pub static BOXING_DAY: LazyLock<HolidayDefinition> =
    LazyLock::new(|| prototype("Boxing Day", Rule::fixed(12, 26)));

/// Every prototype, in calendar order.
pub fn all() -> [&'static HolidayDefinition; 7] {
    [
        &*NEW_YEAR,
        &*GOOD_FRIDAY,
        &*EASTER_SUNDAY,
        &*EASTER_MONDAY,
        &*ARMISTICE_DAY,
        &*CHRISTMAS_DAY,
        &*BOXING_DAY,
    ]
}
