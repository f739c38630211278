//! Fixed offsets from UTC.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::math::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::{Error, Field, Instant, RangeError, ZoneRules};

const MAX_SECONDS: i32 = 18 * SECONDS_PER_HOUR as i32;

/// A fixed offset from UTC, such as `+02:00`.
///
/// Offsets range from `-18:00` to `+18:00` with a precision of one second.
///
/// Offsets are ordered in descending order of their total seconds: for the
/// same local date-time, an offset that sorts first denotes an earlier
/// instant.
///
/// # Examples
///
/// ```
/// use iso_time::ZoneOffset;
///
/// let offset = ZoneOffset::of("-0830").unwrap();
/// assert_eq!(offset.total_seconds(), -30_600);
/// assert_eq!(offset.to_string(), "-08:30");
///
/// assert_eq!(ZoneOffset::of("+00:00").unwrap(), ZoneOffset::UTC);
/// assert_eq!(ZoneOffset::UTC.to_string(), "Z");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneOffset {
    total_seconds: i32,
}

impl ZoneOffset {
    /// The offset of UTC, `Z`.
    pub const UTC: Self = Self { total_seconds: 0 };

    /// The most negative offset, `-18:00`.
    pub const MIN: Self = Self {
        total_seconds: -MAX_SECONDS,
    };

    /// The most positive offset, `+18:00`.
    pub const MAX: Self = Self {
        total_seconds: MAX_SECONDS,
    };

    /// Parses an offset id.
    ///
    /// The accepted forms are `Z`, `±H`, `±HH`, `±HH:MM`, `±HHMM`,
    /// `±HH:MM:SS` and `±HHMMSS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{ErrorKind, ZoneOffset};
    ///
    /// assert_eq!(ZoneOffset::of("+5"), ZoneOffset::of_hours(5));
    /// assert_eq!(ZoneOffset::of("-01:02:03").unwrap().total_seconds(), -3_723);
    /// assert_eq!(ZoneOffset::of("+1:00").unwrap_err().kind(), ErrorKind::Range);
    /// assert!(ZoneOffset::of("+19").is_err());
    /// ```
    pub fn of(id: &str) -> Result<Self, Error> {
        let invalid = Error::Range(RangeError::InvalidOffset);
        let (sign, rest) = match id.as_bytes() {
            b"Z" => return Ok(Self::UTC),
            [b'+', rest @ ..] => (1, rest),
            [b'-', rest @ ..] => (-1, rest),
            _ => return Err(invalid),
        };
        let (hours, minutes, seconds) = match *rest {
            [h] => (digits(&[h])?, 0, 0),
            [h1, h2] => (digits(&[h1, h2])?, 0, 0),
            [h1, h2, m1, m2] | [h1, h2, b':', m1, m2] => {
                (digits(&[h1, h2])?, digits(&[m1, m2])?, 0)
            }
            [h1, h2, m1, m2, s1, s2] | [h1, h2, b':', m1, m2, b':', s1, s2] => (
                digits(&[h1, h2])?,
                digits(&[m1, m2])?,
                digits(&[s1, s2])?,
            ),
            _ => return Err(invalid),
        };

        Self::of_hours_minutes_seconds(sign * hours, sign * minutes, sign * seconds)
    }

    /// Creates an offset from a number of hours.
    pub const fn of_hours(hours: i32) -> Result<Self, Error> {
        Self::of_hours_minutes_seconds(hours, 0, 0)
    }

    /// Creates an offset from a number of hours and minutes, which must have
    /// the same sign.
    pub const fn of_hours_minutes(hours: i32, minutes: i32) -> Result<Self, Error> {
        Self::of_hours_minutes_seconds(hours, minutes, 0)
    }

    /// Creates an offset from a number of hours, minutes and seconds.
    ///
    /// Non-zero components must all have the same sign, minutes and seconds
    /// must lie within `±59` and the offset must not exceed `±18:00`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::ZoneOffset;
    ///
    /// assert!(ZoneOffset::of_hours_minutes_seconds(-1, -30, 0).is_ok());
    /// assert!(ZoneOffset::of_hours_minutes_seconds(-1, 30, 0).is_err());
    /// assert!(ZoneOffset::of_hours_minutes_seconds(0, 30, -1).is_err());
    /// assert!(ZoneOffset::of_hours_minutes_seconds(18, 0, 1).is_err());
    /// ```
    pub const fn of_hours_minutes_seconds(
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> Result<Self, Error> {
        let mixed_signs = if hours > 0 {
            minutes < 0 || seconds < 0
        } else if hours < 0 {
            minutes > 0 || seconds > 0
        } else {
            (minutes > 0 && seconds < 0) || (minutes < 0 && seconds > 0)
        };
        if hours < -18
            || hours > 18
            || mixed_signs
            || minutes < -59
            || minutes > 59
            || seconds < -59
            || seconds > 59
            || ((hours == 18 || hours == -18) && (minutes != 0 || seconds != 0))
        {
            return Err(Error::Range(RangeError::InvalidOffset));
        }

        Ok(Self {
            total_seconds: hours * SECONDS_PER_HOUR as i32
                + minutes * SECONDS_PER_MINUTE as i32
                + seconds,
        })
    }

    /// Creates an offset from a total number of seconds.
    pub const fn of_total_seconds(total_seconds: i32) -> Result<Self, Error> {
        if total_seconds < -MAX_SECONDS || total_seconds > MAX_SECONDS {
            return Err(Error::Range(RangeError::InvalidOffset));
        }

        Ok(Self { total_seconds })
    }

    /// Returns the total offset in seconds.
    pub const fn total_seconds(&self) -> i32 {
        self.total_seconds
    }

    /// Returns the value of [`Field::OffsetSeconds`].
    pub const fn get(&self, field: Field) -> Result<i64, Error> {
        match field {
            Field::OffsetSeconds => Ok(self.total_seconds as i64),
            _ => Err(Error::UnsupportedField(field)),
        }
    }
}

/// Parses an unsigned 1 or 2-digit number.
fn digits(bytes: &[u8]) -> Result<i32, Error> {
    bytes.iter().try_fold(0, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + (b - b'0') as i32)
        } else {
            Err(Error::Range(RangeError::InvalidOffset))
        }
    })
}

impl Ord for ZoneOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        other.total_seconds.cmp(&self.total_seconds)
    }
}

impl PartialOrd for ZoneOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ZoneRules for ZoneOffset {
    fn is_fixed_offset(&self) -> bool {
        true
    }

    fn offset_at(&self, _instant: Instant) -> ZoneOffset {
        *self
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_seconds == 0 {
            return fmt.write_str("Z");
        }
        let sign = if self.total_seconds < 0 { '-' } else { '+' };
        let abs = self.total_seconds.unsigned_abs();
        write!(fmt, "{}{:02}:{:02}", sign, abs / 3_600, abs / 60 % 60)?;
        if abs % 60 != 0 {
            write!(fmt, ":{:02}", abs % 60)?;
        }

        Ok(())
    }
}

impl FromStr for ZoneOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::of(s)
    }
}

#[cfg(feature = "serde")]
crate::impl_serde_via_str!(ZoneOffset, "an ISO-8601 offset id");
