//! # Calendar Dates
//!
//! Hand-rolled `YYYY-MM-DD` grammar with an optional calendar validation pass.
//!
//! ## Two-Phase Parse
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  " 2022-01-01 "                                                         │
//! │       │                                                                 │
//! │       ▼  blank?                 ──► EmptyInput                          │
//! │       ▼  strip spaces, syntax   ──► InvalidSyntax { reason }           │
//! │       ▼  u16 / u8 conversion    ──► ParsingFailure { causes }          │
//! │       ▼                                                                 │
//! │  Date { 2022, 1, 1 }   (structurally parsed)                           │
//! │       │                                                                 │
//! │       ▼  validate = true?                                               │
//! │  Date::validate()               ──► InvalidDate { date, reason }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Leap Years
//! Any year divisible by 4 gets a 29-day February. Century years such as
//! 1900 are therefore accepted on the 29th.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{
    is_numeric, parse_component, strip_spaces, Component, DateError, DateRange, DateSyntax,
    ErrorList,
};

/// Characters in a `YYYY-MM-DD` string.
const DATE_LENGTH: usize = 10;

const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in `month` of `year`, or 0 when the month is out of range.
///
/// ## Example
/// ```rust
/// use receipt_core::date::days_in_month;
///
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2024, 13), 0);
/// ```
pub fn days_in_month(year: u16, month: u8) -> u8 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    if month == 2 && year % 4 == 0 {
        return 29;
    }
    DAYS_PER_MONTH[usize::from(month - 1)]
}

// =============================================================================
// Date
// =============================================================================

/// A naive calendar date. No timezone, no bound on the year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a date without validating it.
    #[inline]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Date { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// Spaces anywhere in the input are ignored. With `validate` set, the
    /// calendar check runs after a successful structural parse.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::date::Date;
    /// use receipt_core::ErrorKind;
    ///
    /// let date = Date::parse("2004-02-29", true).unwrap();
    /// assert_eq!(date, Date::new(2004, 2, 29));
    ///
    /// let err = Date::parse("1999-12-92", true).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidValue);
    /// ```
    pub fn parse(raw: &str, validate: bool) -> Result<Date, DateError> {
        if raw.trim_matches(' ').is_empty() {
            return Err(DateError::EmptyInput);
        }

        let stripped = strip_spaces(raw);
        let [year, month, day] = split_components(raw, &stripped)?;

        let mut causes = ErrorList::new();
        let date = Date {
            year: parse_component(Component::Year, year, &mut causes),
            month: parse_component(Component::Month, month, &mut causes),
            day: parse_component(Component::Day, day, &mut causes),
        };
        if !causes.is_empty() {
            return Err(DateError::ParsingFailure {
                input: raw.to_string(),
                causes,
            });
        }

        if validate {
            date.validate()?;
        }
        Ok(date)
    }

    /// Checks the month and day bounds. The year is unbounded.
    pub fn validate(&self) -> Result<(), DateError> {
        if !(1..=12).contains(&self.month) {
            return Err(DateError::InvalidDate {
                date: *self,
                reason: DateRange::Month,
            });
        }

        let max = days_in_month(self.year, self.month);
        if self.day < 1 || self.day > max {
            return Err(DateError::InvalidDate {
                date: *self,
                reason: DateRange::Day { max },
            });
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// English name of the month, if the month is in range.
    pub fn month_name(&self) -> Option<&'static str> {
        match self.month {
            1..=12 => Some(MONTH_NAMES[usize::from(self.month - 1)]),
            _ => None,
        }
    }

    /// Converts to a chrono date.
    ///
    /// Returns `None` for values chrono rejects, including century years the
    /// divisible-by-4 rule accepts (1900-02-29).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s, true)
    }
}

/// Checks `YYYY-MM-DD` structure and returns the three digit runs.
fn split_components<'a>(raw: &str, stripped: &'a str) -> Result<[&'a str; 3], DateError> {
    let syntax_error = |reason| DateError::InvalidSyntax {
        input: raw.to_string(),
        reason,
    };

    let length = stripped.chars().count();
    if length != DATE_LENGTH {
        return Err(syntax_error(DateSyntax::Length(length)));
    }

    let dashes = stripped.matches('-').count();
    if dashes != 2 {
        return Err(syntax_error(DateSyntax::DashCount(dashes)));
    }

    let mut parts = stripped.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();

    let expected = [
        (Component::Year, year, 4),
        (Component::Month, month, 2),
        (Component::Day, day, 2),
    ];
    for (component, value, _) in expected {
        if !is_numeric(value) {
            return Err(syntax_error(DateSyntax::NonNumeric(component)));
        }
    }
    for (component, value, digits) in expected {
        if value.len() != digits {
            return Err(syntax_error(DateSyntax::DigitCount {
                component,
                expected: digits,
                found: value.len(),
            }));
        }
    }

    Ok([year, month, day])
}

// =============================================================================
// Unit Tests
// =============================================================================
