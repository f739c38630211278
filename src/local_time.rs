//! Times of day without a date or offset.

use crate::math::{
    floor_mod, HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR, NANOS_PER_DAY, NANOS_PER_HOUR,
    NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_MINUTE, NANOS_PER_SECOND, SECONDS_PER_DAY,
    SECONDS_PER_MINUTE,
};
use crate::{Clock, Duration, Error, Field, Instant, LocalDate, Unit, ZoneOffset};

const MICROS_PER_DAY: i64 = NANOS_PER_DAY / NANOS_PER_MICRO;
const MILLIS_PER_DAY: i64 = NANOS_PER_DAY / NANOS_PER_MILLI;

/// A time of day with nanosecond precision, such as `10:15:30`.
///
/// The time is stored as a number of nanoseconds since midnight. Arithmetic
/// wraps around midnight and never fails: adding one nanosecond to
/// [`MAX`](LocalTime::MAX) yields [`MIDNIGHT`](LocalTime::MIDNIGHT).
///
/// # Examples
///
/// ```
/// use iso_time::LocalTime;
///
/// let t = LocalTime::of(23, 59, 59, 999_999_999).unwrap();
/// assert_eq!(t.plus_nanos(1), LocalTime::MIDNIGHT);
/// assert_eq!(t.plus_hours(i64::MAX).hour(), 6);
///
/// let t: LocalTime = "10:15".parse().unwrap();
/// assert_eq!(t.minus_minutes(30).to_string(), "09:45");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    /// Always within `[0, NANOS_PER_DAY)`.
    nano_of_day: i64,
}

impl LocalTime {
    /// Midnight at the start of the day, `00:00`.
    pub const MIDNIGHT: Self = Self { nano_of_day: 0 };

    /// Noon, `12:00`.
    pub const NOON: Self = Self {
        nano_of_day: 12 * NANOS_PER_HOUR,
    };

    /// The earliest time of day, `00:00`.
    pub const MIN: Self = Self::MIDNIGHT;

    /// The latest time of day, `23:59:59.999999999`.
    pub const MAX: Self = Self {
        nano_of_day: NANOS_PER_DAY - 1,
    };

    /// Creates a time from an hour, minute, second and nanosecond.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, Field, LocalTime, RangeError};
    ///
    /// let t = LocalTime::of(12, 30, 40, 987_654_321).unwrap();
    /// assert_eq!((t.hour(), t.minute(), t.second(), t.nano()), (12, 30, 40, 987_654_321));
    ///
    /// assert_eq!(
    ///     LocalTime::of(24, 0, 0, 0),
    ///     Err(Error::Range(RangeError::InvalidField { field: Field::HourOfDay, value: 24 }))
    /// );
    /// ```
    pub fn of(hour: u8, minute: u8, second: u8, nano: u32) -> Result<Self, Error> {
        Field::HourOfDay.check_valid_value(hour as i64)?;
        Field::MinuteOfHour.check_valid_value(minute as i64)?;
        Field::SecondOfMinute.check_valid_value(second as i64)?;
        Field::NanoOfSecond.check_valid_value(nano as i64)?;

        Ok(Self::create(hour, minute, second, nano))
    }

    /// Creates a time from an hour and a minute.
    pub fn of_hm(hour: u8, minute: u8) -> Result<Self, Error> {
        Self::of(hour, minute, 0, 0)
    }

    /// Creates a time from an hour, a minute and a second.
    pub fn of_hms(hour: u8, minute: u8, second: u8) -> Result<Self, Error> {
        Self::of(hour, minute, second, 0)
    }

    /// Creates a time from a second of the day, from 0 to 86399.
    pub fn of_second_of_day(second_of_day: i64) -> Result<Self, Error> {
        Field::SecondOfDay.check_valid_value(second_of_day)?;

        Ok(Self {
            nano_of_day: second_of_day * NANOS_PER_SECOND,
        })
    }

    /// Creates a time from a nanosecond of the day.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::LocalTime;
    ///
    /// let t = LocalTime::of_nano_of_day(3_600_000_000_001).unwrap();
    /// assert_eq!(t, LocalTime::of(1, 0, 0, 1).unwrap());
    /// assert!(LocalTime::of_nano_of_day(86_400_000_000_000).is_err());
    /// ```
    pub fn of_nano_of_day(nano_of_day: i64) -> Result<Self, Error> {
        Field::NanoOfDay.check_valid_value(nano_of_day)?;

        Ok(Self { nano_of_day })
    }

    /// Returns the time of day of an instant at the specified offset.
    pub const fn of_instant(instant: Instant, offset: ZoneOffset) -> Self {
        // Both terms are bounded well within `i64`.
        let local_second = instant.epoch_second() + offset.total_seconds() as i64;
        let second_of_day = floor_mod(local_second, SECONDS_PER_DAY);

        Self {
            nano_of_day: second_of_day * NANOS_PER_SECOND + instant.nano() as i64,
        }
    }

    /// Returns the current time from a clock at the specified offset.
    pub fn now_with(clock: &impl Clock, offset: ZoneOffset) -> Self {
        Self::of_instant(clock.instant(), offset)
    }

    /// Builds a time from components that are known to be valid.
    const fn create(hour: u8, minute: u8, second: u8, nano: u32) -> Self {
        Self {
            nano_of_day: hour as i64 * NANOS_PER_HOUR
                + minute as i64 * NANOS_PER_MINUTE
                + second as i64 * NANOS_PER_SECOND
                + nano as i64,
        }
    }

    /// Returns the hour of the day, from 0 to 23.
    pub const fn hour(&self) -> u8 {
        (self.nano_of_day / NANOS_PER_HOUR) as u8
    }

    /// Returns the minute of the hour, from 0 to 59.
    pub const fn minute(&self) -> u8 {
        (self.nano_of_day / NANOS_PER_MINUTE % MINUTES_PER_HOUR) as u8
    }

    /// Returns the second of the minute, from 0 to 59.
    pub const fn second(&self) -> u8 {
        (self.nano_of_day / NANOS_PER_SECOND % SECONDS_PER_MINUTE) as u8
    }

    /// Returns the nanosecond of the second, from 0 to 999,999,999.
    pub const fn nano(&self) -> u32 {
        (self.nano_of_day % NANOS_PER_SECOND) as u32
    }

    /// Returns the second of the day, from 0 to 86399.
    pub const fn to_second_of_day(&self) -> i32 {
        (self.nano_of_day / NANOS_PER_SECOND) as i32
    }

    /// Returns the nanosecond of the day.
    pub const fn to_nano_of_day(&self) -> i64 {
        self.nano_of_day
    }

    /// Returns the number of seconds since the epoch of this time on the
    /// specified date and offset.
    pub const fn to_epoch_second(&self, date: LocalDate, offset: ZoneOffset) -> i64 {
        date.to_epoch_day() * SECONDS_PER_DAY + self.to_second_of_day() as i64
            - offset.total_seconds() as i64
    }

    /// Returns the value of a time field.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Field, LocalTime};
    ///
    /// let t = LocalTime::of_hm(0, 15).unwrap();
    /// assert_eq!(t.get(Field::ClockHourOfDay), Ok(24));
    /// assert_eq!(t.get(Field::ClockHourOfAmPm), Ok(12));
    /// assert_eq!(t.get(Field::MinuteOfDay), Ok(15));
    /// ```
    pub const fn get(&self, field: Field) -> Result<i64, Error> {
        let hour = self.hour() as i64;
        let value = match field {
            Field::NanoOfSecond => self.nano() as i64,
            Field::NanoOfDay => self.nano_of_day,
            Field::MicroOfSecond => self.nano() as i64 / NANOS_PER_MICRO,
            Field::MicroOfDay => self.nano_of_day / NANOS_PER_MICRO,
            Field::MilliOfSecond => self.nano() as i64 / NANOS_PER_MILLI,
            Field::MilliOfDay => self.nano_of_day / NANOS_PER_MILLI,
            Field::SecondOfMinute => self.second() as i64,
            Field::SecondOfDay => self.to_second_of_day() as i64,
            Field::MinuteOfHour => self.minute() as i64,
            Field::MinuteOfDay => hour * MINUTES_PER_HOUR + self.minute() as i64,
            Field::HourOfAmPm => hour % 12,
            Field::ClockHourOfAmPm => {
                if hour % 12 == 0 {
                    12
                } else {
                    hour % 12
                }
            }
            Field::HourOfDay => hour,
            Field::ClockHourOfDay => {
                if hour == 0 {
                    24
                } else {
                    hour
                }
            }
            Field::AmPmOfDay => hour / 12,
            _ => return Err(Error::UnsupportedField(field)),
        };

        Ok(value)
    }

    /// Returns a copy with a time field set to a new value.
    ///
    /// The value is validated against the range of the field and the other
    /// components of the time are kept where they are not implied by the
    /// field.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Field, LocalTime};
    ///
    /// let t = LocalTime::of_hms(14, 30, 12).unwrap();
    /// assert_eq!(t.with(Field::AmPmOfDay, 0), LocalTime::of_hms(2, 30, 12));
    /// assert_eq!(t.with(Field::MilliOfSecond, 250), LocalTime::of(14, 30, 12, 250_000_000));
    /// assert!(t.with(Field::MinuteOfHour, 60).is_err());
    /// ```
    pub fn with(self, field: Field, value: i64) -> Result<Self, Error> {
        if !field.is_time_based() {
            return Err(Error::UnsupportedField(field));
        }
        let value = field.check_valid_value(value)?;
        let hour = self.hour() as i64;

        match field {
            Field::NanoOfSecond => self.with_nano(value as u32),
            Field::NanoOfDay => Self::of_nano_of_day(value),
            Field::MicroOfSecond => self.with_nano((value * NANOS_PER_MICRO) as u32),
            Field::MicroOfDay => Self::of_nano_of_day(value * NANOS_PER_MICRO),
            Field::MilliOfSecond => self.with_nano((value * NANOS_PER_MILLI) as u32),
            Field::MilliOfDay => Self::of_nano_of_day(value * NANOS_PER_MILLI),
            Field::SecondOfMinute => self.with_second(value as u8),
            Field::SecondOfDay => Ok(self.plus_seconds(value - self.to_second_of_day() as i64)),
            Field::MinuteOfHour => self.with_minute(value as u8),
            Field::MinuteOfDay => {
                Ok(self.plus_minutes(value - (hour * MINUTES_PER_HOUR + self.minute() as i64)))
            }
            Field::HourOfAmPm => Ok(self.plus_hours(value - hour % 12)),
            Field::ClockHourOfAmPm => {
                let value = if value == 12 { 0 } else { value };
                Ok(self.plus_hours(value - hour % 12))
            }
            Field::HourOfDay => self.with_hour(value as u8),
            Field::ClockHourOfDay => self.with_hour(if value == 24 { 0 } else { value as u8 }),
            Field::AmPmOfDay => Ok(self.plus_hours((value - hour / 12) * 12)),
            _ => Err(Error::UnsupportedField(field)),
        }
    }

    /// Returns a copy with a different hour of the day.
    pub fn with_hour(self, hour: u8) -> Result<Self, Error> {
        Field::HourOfDay.check_valid_value(hour as i64)?;

        Ok(Self::create(hour, self.minute(), self.second(), self.nano()))
    }

    /// Returns a copy with a different minute of the hour.
    pub fn with_minute(self, minute: u8) -> Result<Self, Error> {
        Field::MinuteOfHour.check_valid_value(minute as i64)?;

        Ok(Self::create(self.hour(), minute, self.second(), self.nano()))
    }

    /// Returns a copy with a different second of the minute.
    pub fn with_second(self, second: u8) -> Result<Self, Error> {
        Field::SecondOfMinute.check_valid_value(second as i64)?;

        Ok(Self::create(self.hour(), self.minute(), second, self.nano()))
    }

    /// Returns a copy with a different nanosecond of the second.
    pub fn with_nano(self, nano: u32) -> Result<Self, Error> {
        Field::NanoOfSecond.check_valid_value(nano as i64)?;

        Ok(Self::create(self.hour(), self.minute(), self.second(), nano))
    }

    /// Truncates the time to a multiple of the unit.
    ///
    /// The unit must have an exact length that divides a standard day evenly.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, LocalTime, Unit};
    ///
    /// let t = LocalTime::of(10, 47, 31, 123_456_789).unwrap();
    /// assert_eq!(t.truncated_to(Unit::Minutes), LocalTime::of_hm(10, 47));
    /// assert_eq!(t.truncated_to(Unit::Days), Ok(LocalTime::MIDNIGHT));
    /// assert_eq!(t.truncated_to(Unit::Weeks), Err(Error::UnsupportedUnit(Unit::Weeks)));
    /// ```
    pub fn truncated_to(self, unit: Unit) -> Result<Self, Error> {
        let dur = unit.truncation_nanos()?;

        Ok(Self {
            nano_of_day: self.nano_of_day / dur * dur,
        })
    }

    /// Adds a duration, wrapping around midnight.
    pub const fn plus(self, duration: Duration) -> Self {
        self.plus_seconds(duration.seconds())
            .plus_nanos(duration.nanos() as i64)
    }

    /// Subtracts a duration, wrapping around midnight.
    pub const fn minus(self, duration: Duration) -> Self {
        self.minus_seconds(duration.seconds())
            .minus_nanos(duration.nanos() as i64)
    }

    /// Adds an amount of a time unit, wrapping around midnight.
    ///
    /// Returns an error if the unit is not time-based.
    pub const fn plus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        let time = match unit {
            Unit::Nanos => self.plus_nanos(amount),
            Unit::Micros => self.plus_nanos((amount % MICROS_PER_DAY) * NANOS_PER_MICRO),
            Unit::Millis => self.plus_nanos((amount % MILLIS_PER_DAY) * NANOS_PER_MILLI),
            Unit::Seconds => self.plus_seconds(amount),
            Unit::Minutes => self.plus_minutes(amount),
            Unit::Hours => self.plus_hours(amount),
            Unit::HalfDays => self.plus_hours((amount % 2) * 12),
            _ => return Err(Error::UnsupportedUnit(unit)),
        };

        Ok(time)
    }

    /// Subtracts an amount of a time unit, wrapping around midnight.
    pub const fn minus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        // Amounts are first reduced modulo a day so the negation is safe.
        let amount = match unit {
            Unit::Nanos => amount % NANOS_PER_DAY,
            Unit::Micros => amount % MICROS_PER_DAY,
            Unit::Millis => amount % MILLIS_PER_DAY,
            Unit::Seconds => amount % SECONDS_PER_DAY,
            Unit::Minutes => amount % MINUTES_PER_DAY,
            Unit::Hours => amount % HOURS_PER_DAY,
            Unit::HalfDays => amount % 2,
            _ => return Err(Error::UnsupportedUnit(unit)),
        };

        self.plus_unit(-amount, unit)
    }

    const fn wrapping_add(self, nanos: i64) -> Self {
        Self {
            nano_of_day: floor_mod(self.nano_of_day + nanos, NANOS_PER_DAY),
        }
    }

    /// Adds a number of hours, wrapping around midnight.
    pub const fn plus_hours(self, hours: i64) -> Self {
        self.wrapping_add((hours % HOURS_PER_DAY) * NANOS_PER_HOUR)
    }

    /// Adds a number of minutes, wrapping around midnight.
    pub const fn plus_minutes(self, minutes: i64) -> Self {
        self.wrapping_add((minutes % MINUTES_PER_DAY) * NANOS_PER_MINUTE)
    }

    /// Adds a number of seconds, wrapping around midnight.
    pub const fn plus_seconds(self, seconds: i64) -> Self {
        self.wrapping_add((seconds % SECONDS_PER_DAY) * NANOS_PER_SECOND)
    }

    /// Adds a number of nanoseconds, wrapping around midnight.
    pub const fn plus_nanos(self, nanos: i64) -> Self {
        self.wrapping_add(nanos % NANOS_PER_DAY)
    }

    /// Subtracts a number of hours, wrapping around midnight.
    pub const fn minus_hours(self, hours: i64) -> Self {
        self.plus_hours(-(hours % HOURS_PER_DAY))
    }

    /// Subtracts a number of minutes, wrapping around midnight.
    pub const fn minus_minutes(self, minutes: i64) -> Self {
        self.plus_minutes(-(minutes % MINUTES_PER_DAY))
    }

    /// Subtracts a number of seconds, wrapping around midnight.
    pub const fn minus_seconds(self, seconds: i64) -> Self {
        self.plus_seconds(-(seconds % SECONDS_PER_DAY))
    }

    /// Subtracts a number of nanoseconds, wrapping around midnight.
    pub const fn minus_nanos(self, nanos: i64) -> Self {
        self.plus_nanos(-(nanos % NANOS_PER_DAY))
    }

    /// Returns the number of whole units from this time until another time.
    ///
    /// The result is truncated towards zero and is negative if `end` is
    /// earlier in the day.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{LocalTime, Unit};
    ///
    /// let start = LocalTime::of_hm(10, 30).unwrap();
    /// let end = LocalTime::of_hms(9, 29, 30).unwrap();
    /// assert_eq!(start.until(end, Unit::Hours), Ok(-1));
    /// assert_eq!(start.until(end, Unit::HalfDays), Ok(0));
    /// ```
    pub const fn until(&self, end: LocalTime, unit: Unit) -> Result<i64, Error> {
        match unit.nanos() {
            Some(nanos) => Ok((end.nano_of_day - self.nano_of_day) / nanos),
            None => Err(Error::UnsupportedUnit(unit)),
        }
    }

    /// Returns the duration from this time until another time.
    pub const fn duration_until(&self, end: LocalTime) -> Duration {
        Duration::of_nanos(end.nano_of_day - self.nano_of_day)
    }

    /// Creates a time from a `chrono::NaiveTime`.
    ///
    /// A leap second is folded into the last nanosecond of the preceding
    /// second.
    #[cfg(feature = "chrono")]
    pub fn from_chrono_naive_time(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;

        let nano = time.nanosecond().min(999_999_999);

        Self {
            nano_of_day: time.num_seconds_from_midnight() as i64 * NANOS_PER_SECOND + nano as i64,
        }
    }

    /// Returns a `chrono::NaiveTime` equal to this time.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::LocalTime;
    ///
    /// let t = LocalTime::of(16, 45, 0, 7).unwrap();
    /// assert_eq!(t.to_chrono_naive_time().to_string(), "16:45:00.000000007");
    /// ```
    #[cfg(feature = "chrono")]
    pub fn to_chrono_naive_time(&self) -> chrono::NaiveTime {
        chrono::NaiveTime::from_num_seconds_from_midnight_opt(
            self.to_second_of_day() as u32,
            self.nano(),
        )
        .unwrap_or(chrono::NaiveTime::MIN)
    }
}
