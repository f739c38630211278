//! Signed time-based amounts.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::math::{
    self, floor_div_mod, MILLIS_PER_SECOND, NANOS_PER_MILLI, NANOS_PER_SECOND,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::{Error, Field, Instant, Unit};

/// A signed amount of time with nanosecond precision, such as `34.5 seconds`
/// or `-2 hours`.
///
/// A duration is stored as a signed number of seconds and a positive number of
/// nanoseconds. The nanoseconds always point towards the future, so that
/// `-0.3s` is represented as `-1s + 700_000_000ns`.
///
/// Unlike [`core::time::Duration`], a `Duration` may be negative. All
/// arithmetic is checked: operations that cannot represent their result fail
/// with [`Error::Overflow`].
///
/// # Examples
///
/// ```
/// use iso_time::Duration;
///
/// let d = Duration::parse("PT-2H-5M8S").unwrap();
/// assert_eq!(d.seconds(), -7492);
/// assert_eq!(d.nanos(), 0);
///
/// let d = Duration::of_seconds_adjusted(0, -300_000_000).unwrap();
/// assert_eq!((d.seconds(), d.nanos()), (-1, 700_000_000));
/// assert_eq!(d.to_string(), "PT-0.3S");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    /// The number of whole seconds, rounded towards `-∞`.
    ///
    /// Note that the automatic derivation of `PartialOrd` relies on
    /// lexicographical comparison so the `secs` field must appear before
    /// `nanos` in declaration order to be given higher priority.
    secs: i64,
    /// The sub-second number of nanoseconds in the future of `secs`.
    nanos: u32,
}

impl Duration {
    /// A duration of zero length.
    pub const ZERO: Self = Self { secs: 0, nanos: 0 };

    /// The most negative duration.
    pub const MIN: Self = Self {
        secs: i64::MIN,
        nanos: 0,
    };

    /// The most positive duration.
    pub const MAX: Self = Self {
        secs: i64::MAX,
        nanos: 999_999_999,
    };

    pub(crate) const fn new_unchecked(secs: i64, nanos: u32) -> Self {
        Self { secs, nanos }
    }

    /// Creates a duration from a number of seconds.
    pub const fn of_seconds(seconds: i64) -> Self {
        Self::new_unchecked(seconds, 0)
    }

    /// Creates a duration from a number of seconds and an adjustment in
    /// nanoseconds.
    ///
    /// The adjustment may have any magnitude and sign; it is folded into the
    /// seconds so that the nanoseconds end up within `[0, 999_999_999]`.
    ///
    /// Returns an error if the seconds overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Error};
    ///
    /// let d = Duration::of_seconds_adjusted(3, -2_000_000_001).unwrap();
    /// assert_eq!((d.seconds(), d.nanos()), (0, 999_999_999));
    ///
    /// assert_eq!(
    ///     Duration::of_seconds_adjusted(i64::MAX, 1_000_000_000),
    ///     Err(Error::Overflow)
    /// );
    /// ```
    pub const fn of_seconds_adjusted(seconds: i64, nano_adjustment: i64) -> Result<Self, Error> {
        let (carry, nanos) = floor_div_mod(nano_adjustment, NANOS_PER_SECOND);
        match math::add(seconds, carry) {
            Ok(secs) => Ok(Self::new_unchecked(secs, nanos as u32)),
            Err(e) => Err(e),
        }
    }

    /// Creates a duration from a number of standard 24-hour days.
    pub const fn of_days(days: i64) -> Result<Self, Error> {
        match math::mul(days, SECONDS_PER_DAY) {
            Ok(secs) => Ok(Self::of_seconds(secs)),
            Err(e) => Err(e),
        }
    }

    /// Creates a duration from a number of hours.
    pub const fn of_hours(hours: i64) -> Result<Self, Error> {
        match math::mul(hours, SECONDS_PER_HOUR) {
            Ok(secs) => Ok(Self::of_seconds(secs)),
            Err(e) => Err(e),
        }
    }

    /// Creates a duration from a number of minutes.
    pub const fn of_minutes(minutes: i64) -> Result<Self, Error> {
        match math::mul(minutes, SECONDS_PER_MINUTE) {
            Ok(secs) => Ok(Self::of_seconds(secs)),
            Err(e) => Err(e),
        }
    }

    /// Creates a duration from a number of milliseconds.
    pub const fn of_millis(millis: i64) -> Self {
        let (secs, millis) = floor_div_mod(millis, MILLIS_PER_SECOND);
        Self::new_unchecked(secs, (millis * NANOS_PER_MILLI) as u32)
    }

    /// Creates a duration from a number of microseconds.
    pub const fn of_micros(micros: i64) -> Self {
        let (secs, micros) = floor_div_mod(micros, 1_000_000);
        Self::new_unchecked(secs, (micros * 1_000) as u32)
    }

    /// Creates a duration from a number of nanoseconds.
    pub const fn of_nanos(nanos: i64) -> Self {
        let (secs, nanos) = floor_div_mod(nanos, NANOS_PER_SECOND);
        Self::new_unchecked(secs, nanos as u32)
    }

    /// Creates a duration from an amount of the specified unit.
    ///
    /// Only units with an exact length, plus [`Unit::Days`] which is treated
    /// as 24 hours, are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Error, Unit};
    ///
    /// assert_eq!(Duration::of(3, Unit::HalfDays), Ok(Duration::of_seconds(129_600)));
    /// assert_eq!(Duration::of(1, Unit::Weeks), Err(Error::UnsupportedUnit(Unit::Weeks)));
    /// ```
    pub fn of(amount: i64, unit: Unit) -> Result<Self, Error> {
        Self::ZERO.plus_unit(amount, unit)
    }

    /// Returns the duration elapsed between two instants.
    ///
    /// The result is negative if `end` is before `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Instant};
    ///
    /// let start = Instant::of_epoch_second_adjusted(10, 900_000_000).unwrap();
    /// let end = Instant::of_epoch_second(12).unwrap();
    /// assert_eq!(Duration::between(start, end), Duration::of_millis(1_100));
    /// assert_eq!(Duration::between(end, start), Duration::of_millis(-1_100));
    /// ```
    pub const fn between(start: Instant, end: Instant) -> Self {
        // Instants span less than 2^56 seconds so neither subtraction can
        // overflow.
        let secs = end.epoch_second() - start.epoch_second();
        let nanos = end.nano() as i64 - start.nano() as i64;
        let (carry, nanos) = floor_div_mod(nanos, NANOS_PER_SECOND);

        Self::new_unchecked(secs + carry, nanos as u32)
    }

    /// Returns the number of whole seconds, rounded towards `-∞`.
    pub const fn seconds(&self) -> i64 {
        self.secs
    }

    /// Returns the sub-second nanoseconds, which always point towards the
    /// future.
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Returns the value of the specified unit.
    ///
    /// Only [`Unit::Seconds`] and [`Unit::Nanos`] are supported.
    pub const fn get(&self, unit: Unit) -> Result<i64, Error> {
        match unit {
            Unit::Seconds => Ok(self.secs),
            Unit::Nanos => Ok(self.nanos as i64),
            _ => Err(Error::UnsupportedUnit(unit)),
        }
    }

    /// Returns `true` if the duration has zero length.
    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    /// Returns `true` if the duration is strictly negative.
    pub const fn is_negative(&self) -> bool {
        self.secs < 0
    }

    /// Returns `true` if the duration is strictly positive.
    pub const fn is_positive(&self) -> bool {
        self.secs >= 0 && !self.is_zero()
    }

    /// Returns a copy with the specified number of seconds, keeping the
    /// nanoseconds.
    pub const fn with_seconds(self, seconds: i64) -> Self {
        Self::new_unchecked(seconds, self.nanos)
    }

    /// Returns a copy with the specified nanoseconds, keeping the seconds.
    ///
    /// Returns an error if the value is not within `[0, 999_999_999]`.
    pub fn with_nanos(self, nano_of_second: u32) -> Result<Self, Error> {
        Field::NanoOfSecond.check_valid_value(nano_of_second as i64)?;

        Ok(Self::new_unchecked(self.secs, nano_of_second))
    }

    /// Adds a duration, checking for overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Error};
    ///
    /// let a = Duration::of_millis(-1_500);
    /// let b = Duration::of_millis(2_700);
    /// assert_eq!(a.plus(b), Ok(Duration::of_millis(1_200)));
    /// assert_eq!(Duration::MAX.plus(Duration::of_nanos(1)), Err(Error::Overflow));
    /// ```
    pub fn plus(self, other: Self) -> Result<Self, Error> {
        self.plus_parts(other.secs, other.nanos as i64)
    }

    /// Subtracts a duration, checking for overflow.
    pub fn minus(self, other: Self) -> Result<Self, Error> {
        if other.secs == i64::MIN {
            return self
                .plus_parts(i64::MAX, -(other.nanos as i64))?
                .plus_parts(1, 0);
        }

        self.plus_parts(-other.secs, -(other.nanos as i64))
    }

    /// Adds a duration, saturating at [`MIN`](Self::MIN) or
    /// [`MAX`](Self::MAX) instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Duration;
    ///
    /// let d = Duration::MAX.minus_seconds(1).unwrap();
    /// assert_eq!(d.plus_saturating(Duration::of_seconds(2)), Duration::MAX);
    /// assert_eq!(Duration::MIN.plus_saturating(Duration::of_nanos(-1)), Duration::MIN);
    /// ```
    pub fn plus_saturating(self, other: Self) -> Self {
        match self.plus(other) {
            Ok(d) => d,
            Err(_) if other.is_negative() => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    /// Adds an amount of the specified unit.
    ///
    /// Units longer than [`Unit::Days`] have an estimated length and are
    /// rejected.
    pub fn plus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        match unit {
            Unit::Days => self.plus_parts(math::mul(amount, SECONDS_PER_DAY)?, 0),
            _ if unit.is_duration_estimated() => Err(Error::UnsupportedUnit(unit)),
            _ if amount == 0 => Ok(self),
            Unit::Nanos => self.plus_nanos(amount),
            Unit::Micros => self
                .plus_seconds((amount / 1_000_000_000) * 1_000)?
                .plus_nanos((amount % 1_000_000_000) * 1_000),
            Unit::Millis => self.plus_millis(amount),
            Unit::Seconds => self.plus_seconds(amount),
            _ => self.plus_seconds(math::mul(unit.duration().secs, amount)?),
        }
    }

    /// Subtracts an amount of the specified unit.
    pub fn minus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        math::minus_with(self, amount, |d, a| d.plus_unit(a, unit))
    }

    /// Adds a number of standard 24-hour days.
    pub fn plus_days(self, days: i64) -> Result<Self, Error> {
        self.plus_parts(math::mul(days, SECONDS_PER_DAY)?, 0)
    }

    /// Adds a number of hours.
    pub fn plus_hours(self, hours: i64) -> Result<Self, Error> {
        self.plus_parts(math::mul(hours, SECONDS_PER_HOUR)?, 0)
    }

    /// Adds a number of minutes.
    pub fn plus_minutes(self, minutes: i64) -> Result<Self, Error> {
        self.plus_parts(math::mul(minutes, SECONDS_PER_MINUTE)?, 0)
    }

    /// Adds a number of seconds.
    pub fn plus_seconds(self, seconds: i64) -> Result<Self, Error> {
        self.plus_parts(seconds, 0)
    }

    /// Adds a number of milliseconds.
    pub fn plus_millis(self, millis: i64) -> Result<Self, Error> {
        self.plus_parts(
            millis / MILLIS_PER_SECOND,
            (millis % MILLIS_PER_SECOND) * NANOS_PER_MILLI,
        )
    }

    /// Adds a number of nanoseconds.
    pub fn plus_nanos(self, nanos: i64) -> Result<Self, Error> {
        self.plus_parts(0, nanos)
    }

    /// Subtracts a number of standard 24-hour days.
    pub fn minus_days(self, days: i64) -> Result<Self, Error> {
        math::minus_with(self, days, Self::plus_days)
    }

    /// Subtracts a number of hours.
    pub fn minus_hours(self, hours: i64) -> Result<Self, Error> {
        math::minus_with(self, hours, Self::plus_hours)
    }

    /// Subtracts a number of minutes.
    pub fn minus_minutes(self, minutes: i64) -> Result<Self, Error> {
        math::minus_with(self, minutes, Self::plus_minutes)
    }

    /// Subtracts a number of seconds.
    pub fn minus_seconds(self, seconds: i64) -> Result<Self, Error> {
        math::minus_with(self, seconds, Self::plus_seconds)
    }

    /// Subtracts a number of milliseconds.
    pub fn minus_millis(self, millis: i64) -> Result<Self, Error> {
        math::minus_with(self, millis, Self::plus_millis)
    }

    /// Subtracts a number of nanoseconds.
    pub fn minus_nanos(self, nanos: i64) -> Result<Self, Error> {
        math::minus_with(self, nanos, Self::plus_nanos)
    }

    fn plus_parts(self, seconds_to_add: i64, nanos_to_add: i64) -> Result<Self, Error> {
        if (seconds_to_add | nanos_to_add) == 0 {
            return Ok(self);
        }
        let secs = math::add(self.secs, seconds_to_add)?;
        let secs = math::add(secs, nanos_to_add / NANOS_PER_SECOND)?;
        let nanos_to_add = nanos_to_add % NANOS_PER_SECOND;

        // Cannot overflow: both terms are below 1e9 in magnitude.
        Self::of_seconds_adjusted(secs, self.nanos as i64 + nanos_to_add)
    }

    /// Multiplies the duration by a scalar, checking for overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Error};
    ///
    /// let d = Duration::of_millis(-1_500);
    /// assert_eq!(d.multiplied_by(3), Ok(Duration::of_millis(-4_500)));
    /// assert_eq!(Duration::MAX.multiplied_by(2), Err(Error::Overflow));
    /// ```
    pub fn multiplied_by(self, multiplicand: i64) -> Result<Self, Error> {
        match multiplicand {
            0 => Ok(Self::ZERO),
            1 => Ok(self),
            _ => self
                .to_wide_nanos()
                .checked_mul(multiplicand as i128)
                .ok_or(Error::Overflow)
                .and_then(Self::from_wide_nanos),
        }
    }

    /// Divides the duration by a scalar.
    ///
    /// The result is truncated towards zero to the nearest nanosecond.
    ///
    /// Returns [`Error::DivisionByZero`] if the divisor is zero and
    /// [`Error::Overflow`] for `MIN / -1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Duration;
    ///
    /// assert_eq!(Duration::of_nanos(7).divided_by(-3), Ok(Duration::of_nanos(-2)));
    /// assert_eq!(Duration::of_seconds(-1).divided_by(3), Ok(Duration::of_nanos(-333_333_333)));
    /// ```
    pub fn divided_by(self, divisor: i64) -> Result<Self, Error> {
        match divisor {
            0 => Err(Error::DivisionByZero),
            1 => Ok(self),
            _ => Self::from_wide_nanos(self.to_wide_nanos() / divisor as i128),
        }
    }

    /// Returns the number of whole times a duration fits within this
    /// duration.
    ///
    /// The ratio is truncated towards zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Error};
    ///
    /// let seven = Duration::of_nanos(7);
    /// assert_eq!(seven.divided_by_duration(Duration::of_nanos(-3)), Ok(-2));
    /// assert_eq!(seven.divided_by_duration(Duration::ZERO), Err(Error::DivisionByZero));
    /// ```
    pub fn divided_by_duration(self, divisor: Self) -> Result<i64, Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        math::narrow(self.to_wide_nanos() / divisor.to_wide_nanos())
    }

    /// Returns the opposite duration.
    ///
    /// Returns an error for [`MIN`](Self::MIN).
    pub fn negated(self) -> Result<Self, Error> {
        self.multiplied_by(-1)
    }

    /// Returns the absolute value of the duration.
    ///
    /// Returns an error for [`MIN`](Self::MIN).
    pub fn abs(self) -> Result<Self, Error> {
        if self.is_negative() {
            self.negated()
        } else {
            Ok(self)
        }
    }

    /// Truncates the duration to a multiple of the unit.
    ///
    /// The unit must have an exact length that divides a standard day evenly.
    /// Truncation operates towards zero on the part of the duration that is
    /// less than a day: `-0.876543211s` truncated to seconds is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Error, Unit};
    ///
    /// let d = Duration::of_seconds_adjusted(-1, 123_456_789).unwrap();
    /// assert_eq!(d.truncated_to(Unit::Seconds), Ok(Duration::ZERO));
    ///
    /// let d = Duration::of_seconds_adjusted(3_725, 123_456_789).unwrap();
    /// assert_eq!(d.truncated_to(Unit::Minutes), Ok(Duration::of_seconds(3_720)));
    /// assert_eq!(d.truncated_to(Unit::Weeks), Err(Error::UnsupportedUnit(Unit::Weeks)));
    /// ```
    pub fn truncated_to(self, unit: Unit) -> Result<Self, Error> {
        if unit == Unit::Seconds && (self.secs >= 0 || self.nanos == 0) {
            return Ok(Self::new_unchecked(self.secs, 0));
        }
        let dur = unit.truncation_nanos()?;
        if dur == 1 {
            return Ok(self);
        }
        let nod = (self.secs % SECONDS_PER_DAY) * NANOS_PER_SECOND + self.nanos as i64;
        let result = (nod / dur) * dur;

        self.plus_nanos(result - nod)
    }

    /// Returns the total number of standard days, truncated towards zero.
    pub const fn to_days(&self) -> i64 {
        self.secs / SECONDS_PER_DAY
    }

    /// Returns the total number of hours, truncated towards zero.
    pub const fn to_hours(&self) -> i64 {
        self.secs / SECONDS_PER_HOUR
    }

    /// Returns the total number of minutes, truncated towards zero.
    pub const fn to_minutes(&self) -> i64 {
        self.secs / SECONDS_PER_MINUTE
    }

    /// Returns the total number of whole seconds, rounded towards `-∞`.
    pub const fn to_seconds(&self) -> i64 {
        self.secs
    }

    /// Returns the total number of milliseconds, truncated towards zero.
    ///
    /// Returns an error if the result overflows.
    pub fn to_millis(&self) -> Result<i64, Error> {
        let (secs, nanos) = self.toward_zero();
        let millis = math::mul(secs, MILLIS_PER_SECOND)?;

        math::add(millis, nanos / NANOS_PER_MILLI)
    }

    /// Returns the total number of nanoseconds.
    ///
    /// Returns an error if the result overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Error};
    ///
    /// assert_eq!(Duration::of_millis(-1).to_nanos(), Ok(-1_000_000));
    /// assert_eq!(Duration::MAX.to_nanos(), Err(Error::Overflow));
    /// ```
    pub fn to_nanos(&self) -> Result<i64, Error> {
        let (secs, nanos) = self.toward_zero();
        let total = math::mul(secs, NANOS_PER_SECOND)?;

        math::add(total, nanos)
    }

    /// Returns the days part, equal to [`to_days`](Self::to_days).
    pub const fn to_days_part(&self) -> i64 {
        self.to_days()
    }

    /// Returns the hours part within a day.
    pub const fn to_hours_part(&self) -> i32 {
        (self.to_hours() % 24) as i32
    }

    /// Returns the minutes part within an hour.
    pub const fn to_minutes_part(&self) -> i32 {
        (self.to_minutes() % 60) as i32
    }

    /// Returns the seconds part within a minute.
    pub const fn to_seconds_part(&self) -> i32 {
        (self.secs % SECONDS_PER_MINUTE) as i32
    }

    /// Returns the milliseconds part within a second.
    pub const fn to_millis_part(&self) -> i32 {
        (self.nanos / 1_000_000) as i32
    }

    /// Returns the nanoseconds part within a second.
    pub const fn to_nanos_part(&self) -> i32 {
        self.nanos as i32
    }

    /// Returns the seconds and signed nanoseconds with the same sign, so that
    /// truncation of the nanoseconds happens towards zero.
    const fn toward_zero(&self) -> (i64, i64) {
        if self.secs < 0 {
            (self.secs + 1, self.nanos as i64 - NANOS_PER_SECOND)
        } else {
            (self.secs, self.nanos as i64)
        }
    }

    const fn to_wide_nanos(self) -> i128 {
        self.secs as i128 * NANOS_PER_SECOND as i128 + self.nanos as i128
    }

    fn from_wide_nanos(nanos: i128) -> Result<Self, Error> {
        let secs = nanos.div_euclid(NANOS_PER_SECOND as i128);
        let nanos = nanos.rem_euclid(NANOS_PER_SECOND as i128) as u32;

        Ok(Self::new_unchecked(math::narrow(secs)?, nanos))
    }

    /// Creates a duration from a `chrono::TimeDelta`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Duration;
    ///
    /// let delta = chrono::TimeDelta::milliseconds(-1_500);
    /// assert_eq!(Duration::from_chrono_time_delta(delta), Duration::of_millis(-1_500));
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_chrono_time_delta(delta: chrono::TimeDelta) -> Self {
        // The sub-second part has the sign of the whole delta.
        let (carry, nanos) = floor_div_mod(delta.subsec_nanos() as i64, NANOS_PER_SECOND);

        Self::new_unchecked(delta.num_seconds() + carry, nanos as u32)
    }

    /// Returns a `chrono::TimeDelta` equal to the duration.
    ///
    /// Returns an error if the duration exceeds the range of `TimeDelta`.
    #[cfg(feature = "chrono")]
    pub fn to_chrono_time_delta(&self) -> Result<chrono::TimeDelta, Error> {
        chrono::TimeDelta::new(self.secs, self.nanos).ok_or(Error::Overflow)
    }
}

impl TryFrom<core::time::Duration> for Duration {
    type Error = Error;

    /// Converts an unsigned standard library duration.
    ///
    /// Fails with [`Error::Overflow`] if the number of seconds exceeds
    /// `i64::MAX`.
    fn try_from(d: core::time::Duration) -> Result<Self, Error> {
        let secs = i64::try_from(d.as_secs()).map_err(|_| Error::Overflow)?;

        Ok(Self::new_unchecked(secs, d.subsec_nanos()))
    }
}

impl TryFrom<Duration> for core::time::Duration {
    type Error = Error;

    /// Converts to an unsigned standard library duration.
    ///
    /// Fails with [`Error::Overflow`] if the duration is negative.
    fn try_from(d: Duration) -> Result<Self, Error> {
        let secs = u64::try_from(d.secs).map_err(|_| Error::Overflow)?;

        Ok(core::time::Duration::new(secs, d.nanos))
    }
}

impl Add for Duration {
    type Output = Self;

    /// Adds two durations.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting duration cannot be represented.
    /// See [`Duration::plus`] for a panic-free version.
    fn add(self, other: Self) -> Self {
        self.plus(other).expect("overflow when adding durations")
    }
}

impl Sub for Duration {
    type Output = Self;

    /// Subtracts two durations.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting duration cannot be represented.
    /// See [`Duration::minus`] for a panic-free version.
    fn sub(self, other: Self) -> Self {
        self.minus(other)
            .expect("overflow when subtracting durations")
    }
}

impl Neg for Duration {
    type Output = Self;

    /// Negates a duration.
    ///
    /// # Panics
    ///
    /// This function panics for [`Duration::MIN`]. See [`Duration::negated`]
    /// for a panic-free version.
    fn neg(self) -> Self {
        self.negated().expect("overflow when negating duration")
    }
}

impl AddAssign for Duration {
    /// Increments the duration.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting duration cannot be represented.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Duration {
    /// Decrements the duration.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting duration cannot be represented.
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
