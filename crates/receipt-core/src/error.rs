//! # Error Types
//!
//! Parse and validation errors for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ReceiptError (one per parse call)                                     │
//! │  ├── ParsingFailure  - one or more fields could not be interpreted     │
//! │  └── InvalidReceipt  - interpreted, but domain-invalid                 │
//! │         │                                                               │
//! │         └── ErrorList<ReceiptFieldError>                               │
//! │             ├── PurchaseDate(DateError)                                │
//! │             ├── PurchaseTime(TimeError)                                │
//! │             ├── Item { index, LineItemError }                          │
//! │             ├── Total { input, ParseFloatError }                       │
//! │             └── TotalMismatch { declared, computed }                   │
//! │                                                                         │
//! │  Every error classifies into one ErrorKind:                            │
//! │  EmptyInput · InvalidSyntax · ParsingFailure · InvalidValue            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Keep the offending input in the error for diagnostics
//! 3. Independent failures are collected, never first-error-wins

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::date::Date;
use crate::receipt::{Receipt, UnparsedReceipt};
use crate::time::Time;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification shared by every error in this crate.
///
/// Boundaries (e.g. the HTTP layer) switch on the kind instead of matching
/// each concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Nothing to parse after stripping spaces.
    EmptyInput,

    /// Structural/format violation (digit counts, separators).
    InvalidSyntax,

    /// Numeric conversion failed.
    ParsingFailure,

    /// Interpreted, but semantically out of range.
    InvalidValue,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EmptyInput => write!(f, "empty input"),
            ErrorKind::InvalidSyntax => write!(f, "invalid syntax"),
            ErrorKind::ParsingFailure => write!(f, "parsing failure"),
            ErrorKind::InvalidValue => write!(f, "invalid value"),
        }
    }
}

// =============================================================================
// Error List
// =============================================================================

/// Ordered container of independent failures.
///
/// ## Why Not `Vec<E>` Directly?
/// The list has to render as one message (`a; b; c`) inside a parent error's
/// `Display`, while still letting callers iterate every cause.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorList<E>(Vec<E>);

impl<E> ErrorList<E> {
    /// Creates an empty list.
    pub fn new() -> Self {
        ErrorList(Vec::new())
    }

    /// Appends a failure.
    pub fn push(&mut self, error: E) {
        self.0.push(error);
    }

    /// Appends the error of a failed result and returns its value, if any.
    pub fn collect<T>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<E> {
        self.0
    }
}

impl<E> Default for ErrorList<E> {
    fn default() -> Self {
        ErrorList::new()
    }
}

impl<E> FromIterator<E> for ErrorList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        ErrorList(iter.into_iter().collect())
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E> IntoIterator for ErrorList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<E: fmt::Display> fmt::Display for ErrorList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

// =============================================================================
// Numeric Components
// =============================================================================

/// A numeric field inside a date or time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Year => write!(f, "year"),
            Component::Month => write!(f, "month"),
            Component::Day => write!(f, "day"),
            Component::Hour => write!(f, "hour"),
            Component::Minute => write!(f, "minute"),
        }
    }
}

/// Integer conversion failure for one component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing {component} from \"{value}\": {source}")]
pub struct ComponentError {
    pub component: Component,
    pub value: String,
    pub source: ParseIntError,
}

/// Parses one component, recording a failure instead of returning early.
///
/// Failed components fall back to zero so sibling components still parse.
pub(crate) fn parse_component<T>(
    component: Component,
    value: &str,
    causes: &mut ErrorList<ComponentError>,
) -> T
where
    T: FromStr<Err = ParseIntError> + Default,
{
    causes
        .collect(value.parse::<T>().map_err(|source| ComponentError {
            component,
            value: value.to_string(),
            source,
        }))
        .unwrap_or_default()
}

/// Removes every ASCII space, wherever it appears.
pub(crate) fn strip_spaces(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ').collect()
}

/// True when every character is an ASCII digit (vacuously true when empty).
pub(crate) fn is_numeric(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Date Errors
// =============================================================================

/// Which `YYYY-MM-DD` syntax rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateSyntax {
    #[error("expected 10 characters, found {0}")]
    Length(usize),

    #[error("expected 2 dashes, found {0}")]
    DashCount(usize),

    #[error("{0} must contain only numeric characters")]
    NonNumeric(Component),

    #[error("expected {expected} digits for {component}, found {found}")]
    DigitCount {
        component: Component,
        expected: usize,
        found: usize,
    },
}

/// Which calendar bound a parsed date falls outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateRange {
    #[error("month must be between 1 and 12")]
    Month,

    #[error("day must be between 1 and {max} for the given month and year")]
    Day { max: u8 },
}

/// Date parsing and validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    /// The input was blank.
    #[error("cannot parse a date from an empty string")]
    EmptyInput,

    /// The input is not `YYYY-MM-DD`.
    ///
    /// ## When This Occurs
    /// - Wrong length after removing spaces (`"2005-02"`)
    /// - Wrong number of dashes (`"2004-12-20-"`)
    /// - Components in the wrong order (`"06-23-2007"`)
    #[error("invalid date syntax \"{input}\": {reason} (valid format is YYYY-MM-DD)")]
    InvalidSyntax { input: String, reason: DateSyntax },

    /// One or more components could not be converted to integers.
    #[error("failed to parse date \"{input}\": {causes}")]
    ParsingFailure {
        input: String,
        causes: ErrorList<ComponentError>,
    },

    /// Well-formed, but not a calendar date. The parsed value is kept.
    #[error("invalid date {date}: {reason}")]
    InvalidDate { date: Date, reason: DateRange },
}

impl DateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DateError::EmptyInput => ErrorKind::EmptyInput,
            DateError::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            DateError::ParsingFailure { .. } => ErrorKind::ParsingFailure,
            DateError::InvalidDate { .. } => ErrorKind::InvalidValue,
        }
    }
}

// =============================================================================
// Time Errors
// =============================================================================

/// Which `H:MM` / `HH:MM` syntax rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeSyntax {
    #[error("expected at most 5 characters, found {0}")]
    TooLong(usize),

    #[error("expected exactly 1 colon, found {0}")]
    ColonCount(usize),

    #[error("{0} must contain only numeric characters")]
    NonNumeric(Component),

    #[error("expected 1 or 2 digits for hour, found {0}")]
    HourDigits(usize),

    #[error("expected 2 digits for minute, found {0}")]
    MinuteDigits(usize),
}

/// Which clock bound a parsed time falls outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeRange {
    #[error("hour must be between 0 and 23")]
    Hour,

    #[error("minute must be between 0 and 59")]
    Minute,

    #[error("hour must be between 0 and 23 and minute between 0 and 59")]
    HourAndMinute,
}

/// Time parsing and validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("cannot parse a time from an empty string")]
    EmptyInput,

    #[error("invalid time syntax \"{input}\": {reason} (valid format is HH:MM)")]
    InvalidSyntax { input: String, reason: TimeSyntax },

    #[error("failed to parse time \"{input}\": {causes}")]
    ParsingFailure {
        input: String,
        causes: ErrorList<ComponentError>,
    },

    /// Well-formed, but not a 24-hour clock time. The parsed value is kept.
    #[error("invalid time {time}: {reason}")]
    InvalidTime { time: Time, reason: TimeRange },
}

impl TimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TimeError::EmptyInput => ErrorKind::EmptyInput,
            TimeError::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            TimeError::ParsingFailure { .. } => ErrorKind::ParsingFailure,
            TimeError::InvalidTime { .. } => ErrorKind::InvalidValue,
        }
    }
}

// =============================================================================
// Line Item Errors
// =============================================================================

/// Line item parsing errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineItemError {
    #[error("cannot parse the price of \"{description}\" from an empty string")]
    EmptyPrice { description: String },

    #[error("failed to parse price \"{price}\" of \"{description}\": {source}")]
    ParsingFailure {
        description: String,
        price: String,
        source: ParseFloatError,
    },
}

impl LineItemError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LineItemError::EmptyPrice { .. } => ErrorKind::EmptyInput,
            LineItemError::ParsingFailure { .. } => ErrorKind::ParsingFailure,
        }
    }
}

// =============================================================================
// Receipt Errors
// =============================================================================

/// One failing field of a receipt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReceiptFieldError {
    #[error("purchase date: {0}")]
    PurchaseDate(#[source] DateError),

    #[error("purchase time: {0}")]
    PurchaseTime(#[source] TimeError),

    /// `index` is the zero-based position in the submitted item list.
    #[error("item {index}: {source}")]
    Item { index: usize, source: LineItemError },

    #[error("total \"{input}\": {source}")]
    Total {
        input: String,
        source: ParseFloatError,
    },

    #[error("declared total {declared} does not match the sum of items {computed}")]
    TotalMismatch { declared: f64, computed: f64 },
}

impl ReceiptFieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReceiptFieldError::PurchaseDate(e) => e.kind(),
            ReceiptFieldError::PurchaseTime(e) => e.kind(),
            ReceiptFieldError::Item { source, .. } => source.kind(),
            ReceiptFieldError::Total { .. } => ErrorKind::ParsingFailure,
            ReceiptFieldError::TotalMismatch { .. } => ErrorKind::InvalidValue,
        }
    }
}

/// Receipt parsing and validation errors.
///
/// Both variants carry the best-effort [`Receipt`] so the caller can inspect
/// what was understood before deciding to reject it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReceiptError {
    /// One or more fields could not be interpreted.
    ///
    /// ## User Workflow
    /// ```text
    /// date ──► ok        ┐
    /// time ──► ok        │
    /// item 0 ► ok        ├──► ParsingFailure { causes: [item 1, total] }
    /// item 1 ► EmptyPrice│
    /// total ─► bad float ┘
    /// ```
    #[error("({id}) failed to parse receipt: {causes}")]
    ParsingFailure {
        id: String,
        input: Box<UnparsedReceipt>,
        receipt: Box<Receipt>,
        causes: ErrorList<ReceiptFieldError>,
    },

    /// Every field parsed, but the receipt is not consistent.
    #[error("({id}) invalid receipt: {causes}")]
    InvalidReceipt {
        id: String,
        receipt: Box<Receipt>,
        causes: ErrorList<ReceiptFieldError>,
    },
}

impl ReceiptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReceiptError::ParsingFailure { .. } => ErrorKind::ParsingFailure,
            ReceiptError::InvalidReceipt { .. } => ErrorKind::InvalidValue,
        }
    }

    /// The receipt id the failed parse was attempted for.
    pub fn id(&self) -> &str {
        match self {
            ReceiptError::ParsingFailure { id, .. } | ReceiptError::InvalidReceipt { id, .. } => {
                id
            }
        }
    }

    /// The individual field failures.
    pub fn causes(&self) -> &ErrorList<ReceiptFieldError> {
        match self {
            ReceiptError::ParsingFailure { causes, .. }
            | ReceiptError::InvalidReceipt { causes, .. } => causes,
        }
    }

    /// The best-effort receipt built before the failure was reported.
    pub fn receipt(&self) -> &Receipt {
        match self {
            ReceiptError::ParsingFailure { receipt, .. }
            | ReceiptError::InvalidReceipt { receipt, .. } => receipt,
        }
    }

    pub fn into_receipt(self) -> Receipt {
        match self {
            ReceiptError::ParsingFailure { receipt, .. }
            | ReceiptError::InvalidReceipt { receipt, .. } => *receipt,
        }
    }

    /// True when any cause is of the given kind.
    pub fn has_cause_kind(&self, kind: ErrorKind) -> bool {
        self.causes().iter().any(|cause| cause.kind() == kind)
    }
}

/// Convenience type alias for receipt parse results.
pub type ReceiptResult<T> = Result<T, ReceiptError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_list_display_joins_causes() {
        let list: ErrorList<DateError> = vec![DateError::EmptyInput, DateError::EmptyInput]
            .into_iter()
            .collect();
        assert_eq!(
            list.to_string(),
            "cannot parse a date from an empty string; cannot parse a date from an empty string"
        );
        assert_eq!(list.len(), 2);
        assert!(ErrorList::<DateError>::new().to_string().is_empty());
    }

    #[test]
    fn test_parse_component_keeps_going() {
        let mut causes = ErrorList::new();
        let year: u16 = parse_component(Component::Year, "2022", &mut causes);
        let month: u8 = parse_component(Component::Month, "x1", &mut causes);
        let day: u8 = parse_component(Component::Day, "300", &mut causes);

        assert_eq!(year, 2022);
        assert_eq!(month, 0);
        assert_eq!(day, 0);
        assert_eq!(causes.len(), 2);
        assert_eq!(causes.iter().next().map(|c| c.component), Some(Component::Month));
    }

    #[test]
    fn test_strip_spaces_and_numeric() {
        assert_eq!(strip_spaces(" 20 22-01-01 "), "2022-01-01");
        assert!(is_numeric("0123"));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("١٢"));
    }

    #[test]
    fn test_syntax_messages() {
        let err = DateError::InvalidSyntax {
            input: "2005-02".to_string(),
            reason: DateSyntax::Length(7),
        };
        assert_eq!(
            err.to_string(),
            "invalid date syntax \"2005-02\": expected 10 characters, found 7 (valid format is YYYY-MM-DD)"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
    }

    #[test]
    fn test_field_error_kind_follows_inner_error() {
        let cause = ReceiptFieldError::Item {
            index: 2,
            source: LineItemError::EmptyPrice {
                description: "Gatorade".to_string(),
            },
        };
        assert_eq!(cause.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            cause.to_string(),
            "item 2: cannot parse the price of \"Gatorade\" from an empty string"
        );

        let mismatch = ReceiptFieldError::TotalMismatch {
            declared: 10.0,
            computed: 8.87,
        };
        assert_eq!(mismatch.kind(), ErrorKind::InvalidValue);
    }
}
