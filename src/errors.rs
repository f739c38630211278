//! Error types.

use crate::{Field, Unit};

/// The category of an [`Error`].
///
/// Every error belongs to exactly one category and categories are never
/// conflated: an arithmetic overflow is never reported as a range error and
/// vice versa.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// A 64-bit arithmetic operation could not be represented.
    Overflow,
    /// A value violates a domain invariant such as a calendar rule or the
    /// bounds of a type.
    Range,
    /// A field or unit is not supported by the operation.
    Unsupported,
    /// A text could not be parsed.
    Parse,
    /// An argument does not meet the precondition of the operation.
    Precondition,
    /// A syntactically valid region id is not known to the rules provider.
    UnknownZone,
}

/// The error type of all fallible operations of this crate.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A 64-bit addition, subtraction, multiplication or narrowing overflowed.
    #[error("numeric overflow")]
    Overflow,
    /// A division by zero was attempted.
    #[error("division by zero")]
    DivisionByZero,
    /// A value is out of its valid range.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// The field is not supported by the value type.
    #[error("unsupported field: {0}")]
    UnsupportedField(Field),
    /// The unit is not supported by the operation.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(Unit),
    /// The text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An argument is invalid.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    /// The region id is well-formed but unknown to the rules provider.
    #[error("unknown time-zone region id")]
    UnknownZone,
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, ErrorKind};
    ///
    /// let err = Duration::MIN.negated().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Overflow);
    /// ```
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Overflow | Self::DivisionByZero => ErrorKind::Overflow,
            Self::Range(_) => ErrorKind::Range,
            Self::UnsupportedField(_) | Self::UnsupportedUnit(_) => ErrorKind::Unsupported,
            Self::Parse(_) => ErrorKind::Parse,
            Self::InvalidArgument(_) => ErrorKind::Precondition,
            Self::UnknownZone => ErrorKind::UnknownZone,
        }
    }
}

/// The error type returned when a value violates its valid range.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// The value of a field lies outside the range of the field.
    #[error("invalid value for {field} (valid values {}): {value}", .field.range())]
    InvalidField {
        /// The field.
        field: Field,
        /// The rejected value.
        value: i64,
    },
    /// The day of the month does not exist in this year and month.
    #[error("invalid date: day {day} does not exist in month {month} of year {year}")]
    InvalidDate {
        /// The year.
        year: i32,
        /// The month, between 1 and 12.
        month: u8,
        /// The day of the month.
        day: u8,
    },
    /// Day 366 was requested in a non-leap year.
    #[error("invalid date: day-of-year 366 in non-leap year {year}")]
    InvalidDayOfYear {
        /// The year.
        year: i32,
    },
    /// The instant lies outside `[Instant::MIN, Instant::MAX]`.
    #[error("instant exceeds minimum or maximum instant")]
    InstantOutOfRange,
    /// The offset is not within ±18:00.
    #[error("zone offset not in valid range -18:00 to +18:00")]
    InvalidOffset,
    /// The zone id is malformed.
    #[error("invalid zone id format")]
    InvalidZoneId,
}

/// The error type returned when an argument fails a precondition.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// A step must be non-zero.
    #[error("step must not be zero")]
    ZeroStep,
    /// The months and days of a step have opposite signs.
    #[error("period months and days are of opposite sign")]
    MixedSignStep,
    /// The step points away from the end bound.
    #[error("step points away from the end bound")]
    WrongDirection,
}

/// The error type returned when a text does not match an ISO-8601 grammar.
///
/// The index is the byte offset in the input at which the error was
/// detected.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("text could not be parsed at index {index}: {kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    index: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ParseErrorKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Returns the reason of the failure.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the byte offset at which parsing failed.
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// The reason of a [`ParseError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// The input ended before the value was complete.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A character does not match the grammar.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// The width of a fixed-width or minimum-width field is invalid.
    #[error("invalid field width")]
    InvalidFieldWidth,
    /// A mandatory field is absent.
    #[error("missing field")]
    MissingField,
    /// The value is followed by unparsed characters.
    #[error("unparsed trailing characters")]
    TrailingCharacters,
    /// A numeric component does not fit in 64 bits.
    #[error("numeric overflow")]
    Overflow,
    /// The parsed fields do not form a valid value.
    #[error("value out of range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_disjoint() {
        assert_eq!(Error::Overflow.kind(), ErrorKind::Overflow);
        assert_eq!(Error::DivisionByZero.kind(), ErrorKind::Overflow);
        assert_eq!(
            Error::Range(RangeError::InstantOutOfRange).kind(),
            ErrorKind::Range
        );
        assert_eq!(
            Error::UnsupportedUnit(Unit::Weeks).kind(),
            ErrorKind::Unsupported
        );
        assert_eq!(
            Error::UnsupportedField(Field::HourOfDay).kind(),
            ErrorKind::Unsupported
        );
        assert_eq!(
            Error::from(ParseError::new(ParseErrorKind::MissingField, 0)).kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            Error::from(ArgumentError::ZeroStep).kind(),
            ErrorKind::Precondition
        );
        assert_eq!(Error::UnknownZone.kind(), ErrorKind::UnknownZone);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn display() {
        use alloc::string::ToString;

        assert_eq!(
            Error::from(RangeError::InvalidField {
                field: Field::HourOfDay,
                value: 24
            })
            .to_string(),
            "invalid value for HourOfDay (valid values 0 - 23): 24"
        );
        assert_eq!(
            Error::from(RangeError::InvalidField {
                field: Field::DayOfMonth,
                value: 32
            })
            .to_string(),
            "invalid value for DayOfMonth (valid values 1 - 28/31): 32"
        );
        assert_eq!(
            Error::from(ParseError::new(ParseErrorKind::UnexpectedCharacter, 3)).to_string(),
            "text could not be parsed at index 3: unexpected character"
        );
        assert_eq!(
            Error::UnsupportedUnit(Unit::HalfDays).to_string(),
            "unsupported unit: HalfDays"
        );
    }
}
