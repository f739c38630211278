//! Units of time and date-time fields.
//!
//! Both sets are closed: each value type documents which members it supports
//! and reports the others with [`Error::UnsupportedUnit`] or
//! [`Error::UnsupportedField`].

use core::fmt;

use crate::math::{NANOS_PER_DAY, NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::{Duration, Error, RangeError};

/// Average length of a Gregorian year in seconds (365.2425 days).
const SECONDS_PER_YEAR: i64 = 31_556_952;

/// A standard unit of time.
///
/// Units up to and including [`Days`](Unit::Days) have an exact length for
/// the purpose of duration arithmetic. Longer units have an estimated length
/// based on the average Gregorian year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// One nanosecond.
    Nanos,
    /// One microsecond.
    Micros,
    /// One millisecond.
    Millis,
    /// One second.
    Seconds,
    /// Sixty seconds.
    Minutes,
    /// Sixty minutes.
    Hours,
    /// Twelve hours.
    HalfDays,
    /// One standard day of 24 hours.
    Days,
    /// Seven days.
    Weeks,
    /// One twelfth of a year.
    Months,
    /// One year.
    Years,
    /// Ten years.
    Decades,
    /// One hundred years.
    Centuries,
    /// One thousand years.
    Millennia,
    /// One billion years.
    Eras,
    /// An artificial unit as long as [`Duration::MAX`].
    Forever,
}

impl Unit {
    /// Returns the length of the unit, estimated for units longer than a day.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Unit};
    ///
    /// assert_eq!(Unit::HalfDays.duration(), Duration::of_hours(12).unwrap());
    /// assert_eq!(Unit::Years.duration().seconds(), 31_556_952);
    /// ```
    pub const fn duration(self) -> Duration {
        let (secs, nanos) = match self {
            Self::Nanos => (0, 1),
            Self::Micros => (0, 1_000),
            Self::Millis => (0, 1_000_000),
            Self::Seconds => (1, 0),
            Self::Minutes => (60, 0),
            Self::Hours => (3_600, 0),
            Self::HalfDays => (43_200, 0),
            Self::Days => (SECONDS_PER_DAY, 0),
            Self::Weeks => (7 * SECONDS_PER_DAY, 0),
            Self::Months => (SECONDS_PER_YEAR / 12, 0),
            Self::Years => (SECONDS_PER_YEAR, 0),
            Self::Decades => (SECONDS_PER_YEAR * 10, 0),
            Self::Centuries => (SECONDS_PER_YEAR * 100, 0),
            Self::Millennia => (SECONDS_PER_YEAR * 1_000, 0),
            Self::Eras => (SECONDS_PER_YEAR * 1_000_000_000, 0),
            Self::Forever => (i64::MAX, 999_999_999),
        };

        Duration::new_unchecked(secs, nanos)
    }

    /// Returns `true` if the length of the unit is an estimate.
    ///
    /// This is the case of all date units, including `Days` which may be
    /// affected by daylight saving time in zoned contexts.
    pub const fn is_duration_estimated(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
                | Self::Eras
                | Self::Forever
        )
    }

    /// Returns `true` for the units that [`LocalDate`](crate::LocalDate)
    /// supports.
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
                | Self::Eras
        )
    }

    /// Returns `true` for the units that [`LocalTime`](crate::LocalTime)
    /// supports.
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::Nanos
                | Self::Micros
                | Self::Millis
                | Self::Seconds
                | Self::Minutes
                | Self::Hours
                | Self::HalfDays
        )
    }

    /// Returns the name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanos => "Nanos",
            Self::Micros => "Micros",
            Self::Millis => "Millis",
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::HalfDays => "HalfDays",
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
            Self::Decades => "Decades",
            Self::Centuries => "Centuries",
            Self::Millennia => "Millennia",
            Self::Eras => "Eras",
            Self::Forever => "Forever",
        }
    }

    /// Returns the length of the unit in nanoseconds if the unit can be used
    /// to truncate a time of day.
    ///
    /// The unit must not be longer than a day and must divide a day evenly.
    pub(crate) fn truncation_nanos(self) -> Result<i64, Error> {
        if self == Self::Nanos {
            return Ok(1);
        }
        let d = self.duration();
        if d.seconds() > SECONDS_PER_DAY {
            return Err(Error::UnsupportedUnit(self));
        }
        let nanos = d.seconds() * NANOS_PER_SECOND + d.nanos() as i64;
        if NANOS_PER_DAY % nanos != 0 {
            return Err(Error::UnsupportedUnit(self));
        }

        Ok(nanos)
    }

    /// Returns the exact length of a time-based unit in nanoseconds.
    pub(crate) const fn nanos(self) -> Option<i64> {
        match self {
            Self::Nanos => Some(1),
            Self::Micros => Some(1_000),
            Self::Millis => Some(1_000_000),
            Self::Seconds => Some(NANOS_PER_SECOND),
            Self::Minutes => Some(60 * NANOS_PER_SECOND),
            Self::Hours => Some(3_600 * NANOS_PER_SECOND),
            Self::HalfDays => Some(43_200 * NANOS_PER_SECOND),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

/// The range of valid values of a [`Field`].
///
/// The maximum may depend on the context: the day of the month ranges from 1
/// to between 28 and 31. A value is considered valid for the field if it lies
/// between [`min`](Self::min) and [`max`](Self::max); a stricter check is
/// then performed by the value type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueRange {
    min: i64,
    smallest_max: i64,
    max: i64,
}

impl ValueRange {
    const fn of(min: i64, max: i64) -> Self {
        Self {
            min,
            smallest_max: max,
            max,
        }
    }

    const fn of_variable(min: i64, smallest_max: i64, max: i64) -> Self {
        Self {
            min,
            smallest_max,
            max,
        }
    }

    /// Returns the minimum valid value.
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the smallest possible maximum value.
    pub const fn smallest_max(&self) -> i64 {
        self.smallest_max
    }

    /// Returns the largest possible maximum value.
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns `true` if the value lies within the outer bounds of the range.
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} - ", self.min)?;
        if self.smallest_max != self.max {
            write!(fmt, "{}/", self.smallest_max)?;
        }
        write!(fmt, "{}", self.max)
    }
}

/// A standard date-time field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// The nanosecond within the second, from 0 to 999,999,999.
    NanoOfSecond,
    /// The nanosecond within the day.
    NanoOfDay,
    /// The microsecond within the second, from 0 to 999,999.
    MicroOfSecond,
    /// The microsecond within the day.
    MicroOfDay,
    /// The millisecond within the second, from 0 to 999.
    MilliOfSecond,
    /// The millisecond within the day.
    MilliOfDay,
    /// The second within the minute, from 0 to 59.
    SecondOfMinute,
    /// The second within the day, from 0 to 86,399.
    SecondOfDay,
    /// The minute within the hour, from 0 to 59.
    MinuteOfHour,
    /// The minute within the day, from 0 to 1,439.
    MinuteOfDay,
    /// The hour within the AM or PM half of the day, from 0 to 11.
    HourOfAmPm,
    /// The clock hour within the AM or PM half of the day, from 1 to 12.
    ClockHourOfAmPm,
    /// The hour within the day, from 0 to 23.
    HourOfDay,
    /// The clock hour within the day, from 1 to 24.
    ClockHourOfDay,
    /// The half of the day, 0 for AM and 1 for PM.
    AmPmOfDay,
    /// The day of the week, from 1 (Monday) to 7 (Sunday).
    DayOfWeek,
    /// The day of the week within a week aligned to the first of the month.
    AlignedDayOfWeekInMonth,
    /// The day of the week within a week aligned to the first of the year.
    AlignedDayOfWeekInYear,
    /// The day of the month, from 1 to 31.
    DayOfMonth,
    /// The day of the year, from 1 to 366.
    DayOfYear,
    /// The number of days since 1970-01-01.
    EpochDay,
    /// The week within the month, counting from the first of the month.
    AlignedWeekOfMonth,
    /// The week within the year, counting from the first of the year.
    AlignedWeekOfYear,
    /// The month of the year, from 1 to 12.
    MonthOfYear,
    /// The number of months since year 0.
    ProlepticMonth,
    /// The year within the era.
    YearOfEra,
    /// The proleptic year.
    Year,
    /// The era, 0 before year 1 and 1 from year 1.
    Era,
    /// The number of seconds since 1970-01-01T00:00:00Z.
    InstantSeconds,
    /// The offset from UTC in seconds.
    OffsetSeconds,
}

impl Field {
    /// Returns the range of valid values for the field.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Field;
    ///
    /// let range = Field::DayOfMonth.range();
    /// assert_eq!((range.min(), range.smallest_max(), range.max()), (1, 28, 31));
    /// ```
    pub const fn range(self) -> ValueRange {
        match self {
            Self::NanoOfSecond => ValueRange::of(0, 999_999_999),
            Self::NanoOfDay => ValueRange::of(0, 86_400 * 1_000_000_000 - 1),
            Self::MicroOfSecond => ValueRange::of(0, 999_999),
            Self::MicroOfDay => ValueRange::of(0, 86_400 * 1_000_000 - 1),
            Self::MilliOfSecond => ValueRange::of(0, 999),
            Self::MilliOfDay => ValueRange::of(0, 86_400 * 1_000 - 1),
            Self::SecondOfMinute => ValueRange::of(0, 59),
            Self::SecondOfDay => ValueRange::of(0, 86_400 - 1),
            Self::MinuteOfHour => ValueRange::of(0, 59),
            Self::MinuteOfDay => ValueRange::of(0, 24 * 60 - 1),
            Self::HourOfAmPm => ValueRange::of(0, 11),
            Self::ClockHourOfAmPm => ValueRange::of(1, 12),
            Self::HourOfDay => ValueRange::of(0, 23),
            Self::ClockHourOfDay => ValueRange::of(1, 24),
            Self::AmPmOfDay => ValueRange::of(0, 1),
            Self::DayOfWeek => ValueRange::of(1, 7),
            Self::AlignedDayOfWeekInMonth => ValueRange::of(1, 7),
            Self::AlignedDayOfWeekInYear => ValueRange::of(1, 7),
            Self::DayOfMonth => ValueRange::of_variable(1, 28, 31),
            Self::DayOfYear => ValueRange::of_variable(1, 365, 366),
            Self::EpochDay => ValueRange::of(-365_243_219_162, 365_241_780_471),
            Self::AlignedWeekOfMonth => ValueRange::of_variable(1, 4, 5),
            Self::AlignedWeekOfYear => ValueRange::of(1, 53),
            Self::MonthOfYear => ValueRange::of(1, 12),
            Self::ProlepticMonth => {
                ValueRange::of(-999_999_999 * 12, 999_999_999 * 12 + 11)
            }
            Self::YearOfEra => ValueRange::of_variable(1, 999_999_999, 1_000_000_000),
            Self::Year => ValueRange::of(-999_999_999, 999_999_999),
            Self::Era => ValueRange::of(0, 1),
            Self::InstantSeconds => ValueRange::of(i64::MIN, i64::MAX),
            Self::OffsetSeconds => ValueRange::of(-18 * 3_600, 18 * 3_600),
        }
    }

    /// Checks that the value lies within the outer range of the field.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, Field, RangeError};
    ///
    /// assert_eq!(Field::HourOfDay.check_valid_value(23), Ok(23));
    /// assert_eq!(
    ///     Field::HourOfDay.check_valid_value(24),
    ///     Err(Error::Range(RangeError::InvalidField { field: Field::HourOfDay, value: 24 }))
    /// );
    /// ```
    pub fn check_valid_value(self, value: i64) -> Result<i64, Error> {
        if self.range().contains(value) {
            Ok(value)
        } else {
            Err(RangeError::InvalidField { field: self, value }.into())
        }
    }

    /// Returns `true` if the field is a component of a date.
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::EpochDay
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
                | Self::MonthOfYear
                | Self::ProlepticMonth
                | Self::YearOfEra
                | Self::Year
                | Self::Era
        )
    }

    /// Returns `true` if the field is a component of a time of day.
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::NanoOfSecond
                | Self::NanoOfDay
                | Self::MicroOfSecond
                | Self::MicroOfDay
                | Self::MilliOfSecond
                | Self::MilliOfDay
                | Self::SecondOfMinute
                | Self::SecondOfDay
                | Self::MinuteOfHour
                | Self::MinuteOfDay
                | Self::HourOfAmPm
                | Self::ClockHourOfAmPm
                | Self::HourOfDay
                | Self::ClockHourOfDay
                | Self::AmPmOfDay
        )
    }

    /// Returns the name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NanoOfSecond => "NanoOfSecond",
            Self::NanoOfDay => "NanoOfDay",
            Self::MicroOfSecond => "MicroOfSecond",
            Self::MicroOfDay => "MicroOfDay",
            Self::MilliOfSecond => "MilliOfSecond",
            Self::MilliOfDay => "MilliOfDay",
            Self::SecondOfMinute => "SecondOfMinute",
            Self::SecondOfDay => "SecondOfDay",
            Self::MinuteOfHour => "MinuteOfHour",
            Self::MinuteOfDay => "MinuteOfDay",
            Self::HourOfAmPm => "HourOfAmPm",
            Self::ClockHourOfAmPm => "ClockHourOfAmPm",
            Self::HourOfDay => "HourOfDay",
            Self::ClockHourOfDay => "ClockHourOfDay",
            Self::AmPmOfDay => "AmPmOfDay",
            Self::DayOfWeek => "DayOfWeek",
            Self::AlignedDayOfWeekInMonth => "AlignedDayOfWeekInMonth",
            Self::AlignedDayOfWeekInYear => "AlignedDayOfWeekInYear",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::EpochDay => "EpochDay",
            Self::AlignedWeekOfMonth => "AlignedWeekOfMonth",
            Self::AlignedWeekOfYear => "AlignedWeekOfYear",
            Self::MonthOfYear => "MonthOfYear",
            Self::ProlepticMonth => "ProlepticMonth",
            Self::YearOfEra => "YearOfEra",
            Self::Year => "Year",
            Self::Era => "Era",
            Self::InstantSeconds => "InstantSeconds",
            Self::OffsetSeconds => "OffsetSeconds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}
