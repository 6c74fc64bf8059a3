//! Error types for holiday-engine operations.

use chrono::Weekday;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    /// A fixed month/day that does not exist in the requested year
    /// (e.g. Feb 29 on a common year, Feb 30 always).
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The month has fewer than `|n|` occurrences of the weekday that year.
    #[error("No occurrence {n} of {weekday} in {year:04}-{month:02}")]
    MissingOccurrence {
        year: i32,
        month: u32,
        weekday: Weekday,
        n: i8,
    },

    /// A malformed rule, rejected when the definition is built.
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// Year outside `MIN_YEAR..=MAX_YEAR`, or a shift that leaves it.
    #[error("Year {0} is outside the supported range")]
    Range(i32),

    /// Two substitutions in one set share a trigger weekday.
    #[error("Duplicate substitution trigger: {0}")]
    DuplicateRule(Weekday),

    /// Two definitions in one catalog share a name.
    #[error("Duplicate holiday name: {0}")]
    DuplicateName(String),

    /// Batch resolution failure, one entry per failing holiday.
    #[error("{} holiday(s) failed to resolve: {}", .0.len(), describe(.0))]
    Aggregate(Vec<EntryError>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A resolution failure attributed to a single named holiday.
#[derive(Error, Debug)]
#[error("{name}: {error}")]
pub struct EntryError {
    pub name: String,
    #[source]
    pub error: HolidayError,
}

fn describe(entries: &[EntryError]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, HolidayError>;
