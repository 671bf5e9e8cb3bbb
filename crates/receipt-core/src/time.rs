//! # Clock Times
//!
//! Hand-rolled `H:MM` / `HH:MM` grammar for a naive 24-hour clock.
//!
//! ## Accepted Shapes
//! ```text
//! "5:51"   ✅ one-digit hour
//! "13:01"  ✅
//! "13:1"   ❌ minute needs two digits        (InvalidSyntax)
//! "12:5a"  ❌ trailing non-digit              (InvalidSyntax)
//! "24:00"  ❌ parses, fails the clock check   (InvalidValue)
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{
    is_numeric, parse_component, strip_spaces, Component, ErrorList, TimeError, TimeRange,
    TimeSyntax,
};

/// Longest accepted input after removing spaces (`HH:MM`).
const MAX_TIME_LENGTH: usize = 5;

/// A naive 24-hour clock time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// Creates a time without validating it.
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Time { hour, minute }
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Parses an `H:MM` or `HH:MM` string.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::time::Time;
    ///
    /// assert_eq!(Time::parse("5:51", true), Ok(Time::new(5, 51)));
    /// assert!(Time::parse("13:1", true).is_err());
    /// ```
    pub fn parse(raw: &str, validate: bool) -> Result<Time, TimeError> {
        if raw.trim_matches(' ').is_empty() {
            return Err(TimeError::EmptyInput);
        }

        let stripped = strip_spaces(raw);
        let (hour, minute) = split_components(raw, &stripped)?;

        let mut causes = ErrorList::new();
        let time = Time {
            hour: parse_component(Component::Hour, hour, &mut causes),
            minute: parse_component(Component::Minute, minute, &mut causes),
        };
        if !causes.is_empty() {
            return Err(TimeError::ParsingFailure {
                input: raw.to_string(),
                causes,
            });
        }

        if validate {
            time.validate()?;
        }
        Ok(time)
    }

    /// Checks `hour <= 23` and `minute <= 59`.
    pub fn validate(&self) -> Result<(), TimeError> {
        let reason = match (self.hour < 24, self.minute < 60) {
            (true, true) => return Ok(()),
            (false, true) => TimeRange::Hour,
            (true, false) => TimeRange::Minute,
            (false, false) => TimeRange::HourAndMinute,
        };
        Err(TimeError::InvalidTime {
            time: *self,
            reason,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::parse(s, true)
    }
}

fn split_components<'a>(raw: &str, stripped: &'a str) -> Result<(&'a str, &'a str), TimeError> {
    let syntax_error = |reason| TimeError::InvalidSyntax {
        input: raw.to_string(),
        reason,
    };

    let length = stripped.chars().count();
    if length > MAX_TIME_LENGTH {
        return Err(syntax_error(TimeSyntax::TooLong(length)));
    }

    let colons = stripped.matches(':').count();
    if colons != 1 {
        return Err(syntax_error(TimeSyntax::ColonCount(colons)));
    }

    let (hour, minute) = stripped.split_once(':').unwrap_or((stripped, ""));

    // Whole-component check: a digit prefix followed by junk is rejected.
    if !is_numeric(hour) {
        return Err(syntax_error(TimeSyntax::NonNumeric(Component::Hour)));
    }
    if !is_numeric(minute) {
        return Err(syntax_error(TimeSyntax::NonNumeric(Component::Minute)));
    }

    if hour.is_empty() || hour.len() > 2 {
        return Err(syntax_error(TimeSyntax::HourDigits(hour.len())));
    }
    if minute.len() != 2 {
        return Err(syntax_error(TimeSyntax::MinuteDigits(minute.len())));
    }

    Ok((hour, minute))
}

// =============================================================================
// Unit Tests
// =============================================================================
