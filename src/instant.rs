//! Points on the UTC time line.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::math::{
    self, floor_div, floor_div_mod, MILLIS_PER_SECOND, NANOS_PER_MICRO, NANOS_PER_MILLI,
    NANOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::{Clock, Duration, Error, Field, LocalDate, LocalTime, RangeError, Unit, ZoneOffset};

/// An instantaneous point on the time line with nanosecond precision.
///
/// An `Instant` is represented as a 64-bit signed number of seconds and a
/// positive number of nanoseconds, relative to the epoch
/// `1970-01-01T00:00:00Z`. The seconds are restricted to the range
/// [`MIN_SECOND`](Instant::MIN_SECOND) to [`MAX_SECOND`](Instant::MAX_SECOND),
/// which spans the years `-1000000000` to `1000000000`.
///
/// Arithmetic distinguishes two failure modes: an intermediate 64-bit
/// overflow is reported as [`Error::Overflow`] while a representable result
/// outside the valid range is reported as [`RangeError::InstantOutOfRange`].
///
/// # Examples
///
/// ```
/// use iso_time::{Duration, Instant};
///
/// let t = Instant::parse("2001-09-15T05:05:00.005Z").unwrap();
/// assert_eq!(t.epoch_second(), 1_000_530_300);
/// assert_eq!(t.nano(), 5_000_000);
///
/// let later = t.plus(Duration::of_millis(995)).unwrap();
/// assert_eq!(later.to_string(), "2001-09-15T05:05:01Z");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    /// The number of whole seconds since the epoch, rounded towards `-∞`.
    ///
    /// Note that the automatic derivation of `PartialOrd` relies on
    /// lexicographical comparison so the `secs` field must appear before
    /// `nanos` in declaration order to be given higher priority.
    secs: i64,
    /// The sub-second number of nanoseconds in the future of `secs`.
    nanos: u32,
}

impl Instant {
    /// The smallest supported epoch second, at `-1000000000-01-01T00:00Z`.
    pub const MIN_SECOND: i64 = -31_557_014_167_219_200;

    /// The largest supported epoch second, at
    /// `1000000000-12-31T23:59:59Z`.
    pub const MAX_SECOND: i64 = 31_556_889_864_403_199;

    /// The epoch `1970-01-01T00:00:00Z`.
    pub const EPOCH: Self = Self { secs: 0, nanos: 0 };

    /// The earliest supported instant, `-1000000000-01-01T00:00:00Z`.
    pub const MIN: Self = Self {
        secs: Self::MIN_SECOND,
        nanos: 0,
    };

    /// The latest supported instant,
    /// `1000000000-12-31T23:59:59.999999999Z`.
    pub const MAX: Self = Self {
        secs: Self::MAX_SECOND,
        nanos: 999_999_999,
    };

    const fn create(secs: i64, nanos: u32) -> Result<Self, Error> {
        if secs < Self::MIN_SECOND || secs > Self::MAX_SECOND {
            return Err(Error::Range(RangeError::InstantOutOfRange));
        }

        Ok(Self { secs, nanos })
    }

    /// Creates an instant from a number of seconds since the epoch.
    ///
    /// Returns an error if the instant is outside the supported range.
    pub const fn of_epoch_second(epoch_second: i64) -> Result<Self, Error> {
        Self::create(epoch_second, 0)
    }

    /// Creates an instant from a number of seconds since the epoch and an
    /// adjustment in nanoseconds.
    ///
    /// The adjustment may have any magnitude and sign. Returns
    /// [`Error::Overflow`] if folding the adjustment into the seconds
    /// overflows and [`RangeError::InstantOutOfRange`] if the instant is
    /// outside the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, ErrorKind, Instant};
    ///
    /// let t = Instant::of_epoch_second_adjusted(3, -1).unwrap();
    /// assert_eq!((t.epoch_second(), t.nano()), (2, 999_999_999));
    ///
    /// let err = Instant::of_epoch_second_adjusted(i64::MAX, i64::MAX).unwrap_err();
    /// assert_eq!(err, Error::Overflow);
    ///
    /// let err = Instant::of_epoch_second_adjusted(Instant::MAX_SECOND, 1_000_000_000).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Range);
    /// ```
    pub const fn of_epoch_second_adjusted(
        epoch_second: i64,
        nano_adjustment: i64,
    ) -> Result<Self, Error> {
        let (carry, nanos) = floor_div_mod(nano_adjustment, NANOS_PER_SECOND);
        match math::add(epoch_second, carry) {
            Ok(secs) => Self::create(secs, nanos as u32),
            Err(e) => Err(e),
        }
    }

    /// Creates an instant from a number of milliseconds since the epoch.
    ///
    /// Every `i64` millisecond count lies within the supported range.
    pub const fn of_epoch_milli(epoch_milli: i64) -> Self {
        let (secs, millis) = floor_div_mod(epoch_milli, MILLIS_PER_SECOND);

        Self {
            secs,
            nanos: (millis * NANOS_PER_MILLI) as u32,
        }
    }

    /// Creates an instant from a local date and time at the specified offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Instant, LocalDate, LocalTime, ZoneOffset};
    ///
    /// let date = LocalDate::of(2008, 6, 30).unwrap();
    /// let time = LocalTime::of_hm(11, 30).unwrap();
    /// let offset = ZoneOffset::of_hours(2).unwrap();
    /// let t = Instant::of_date_time(date, time, offset);
    /// assert_eq!(t.to_string(), "2008-06-30T09:30:00Z");
    /// ```
    pub fn of_date_time(date: LocalDate, time: LocalTime, offset: ZoneOffset) -> Self {
        // Local dates are narrower than instants by more than the largest
        // offset so the result is always in range.
        let secs = date.to_epoch_day() * SECONDS_PER_DAY + time.to_second_of_day() as i64
            - offset.total_seconds() as i64;

        Self {
            secs,
            nanos: time.nano(),
        }
    }

    /// Returns the current instant from the system clock.
    ///
    /// The system clock is not monotonic; see
    /// [`MonotonicClock`](crate::MonotonicClock) for a clock that never goes
    /// backwards.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        crate::SystemClock.instant()
    }

    /// Returns the current instant from the provided clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{FixedClock, Instant};
    ///
    /// let t = Instant::of_epoch_second(1_234_567_890).unwrap();
    /// assert_eq!(Instant::now_with(&FixedClock::new(t)), t);
    /// ```
    pub fn now_with(clock: &impl Clock) -> Self {
        clock.instant()
    }

    /// Returns the number of whole seconds since the epoch.
    ///
    /// Seconds are always rounded towards `-∞`.
    pub const fn epoch_second(&self) -> i64 {
        self.secs
    }

    /// Returns the nanoseconds within the second.
    ///
    /// Note that nanoseconds always point towards the future even if the date
    /// is in the past of the [`EPOCH`](Instant::EPOCH).
    pub const fn nano(&self) -> u32 {
        self.nanos
    }

    /// Returns the value of a field.
    ///
    /// Only [`Field::NanoOfSecond`], [`Field::MicroOfSecond`],
    /// [`Field::MilliOfSecond`] and [`Field::InstantSeconds`] are supported.
    pub const fn get(&self, field: Field) -> Result<i64, Error> {
        match field {
            Field::NanoOfSecond => Ok(self.nanos as i64),
            Field::MicroOfSecond => Ok(self.nanos as i64 / NANOS_PER_MICRO),
            Field::MilliOfSecond => Ok(self.nanos as i64 / NANOS_PER_MILLI),
            Field::InstantSeconds => Ok(self.secs),
            _ => Err(Error::UnsupportedField(field)),
        }
    }

    /// Returns a copy with the specified field set to a new value.
    ///
    /// Setting [`Field::MilliOfSecond`] or [`Field::MicroOfSecond`] clears the
    /// finer sub-second digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Field, Instant};
    ///
    /// let t = Instant::of_epoch_second_adjusted(5, 123_456_789).unwrap();
    /// let t = t.with(Field::MilliOfSecond, 7).unwrap();
    /// assert_eq!(t.nano(), 7_000_000);
    /// ```
    pub fn with(self, field: Field, value: i64) -> Result<Self, Error> {
        let value = match field {
            Field::NanoOfSecond | Field::MicroOfSecond | Field::MilliOfSecond => {
                field.check_valid_value(value)?
            }
            Field::InstantSeconds => return Self::create(value, self.nanos),
            _ => return Err(Error::UnsupportedField(field)),
        };
        let nanos = match field {
            Field::MilliOfSecond => value * NANOS_PER_MILLI,
            Field::MicroOfSecond => value * NANOS_PER_MICRO,
            _ => value,
        };

        Ok(Self {
            secs: self.secs,
            nanos: nanos as u32,
        })
    }

    /// Truncates the instant to a multiple of the unit within its UTC day.
    ///
    /// The unit must divide a standard day evenly. Truncation always moves
    /// towards the past.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Instant, Unit};
    ///
    /// let t = Instant::of_epoch_second_adjusted(-1, 500).unwrap();
    /// assert_eq!(t.truncated_to(Unit::Seconds), Instant::of_epoch_second(-1));
    /// assert_eq!(t.truncated_to(Unit::Days), Instant::of_epoch_second(-86_400));
    /// ```
    pub fn truncated_to(self, unit: Unit) -> Result<Self, Error> {
        let dur = unit.truncation_nanos()?;
        if dur == 1 {
            return Ok(self);
        }
        let nod = (self.secs % SECONDS_PER_DAY) * NANOS_PER_SECOND + self.nanos as i64;
        let result = floor_div(nod, dur) * dur;

        self.plus_nanos(result - nod)
    }

    /// Adds a duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, ErrorKind, Instant};
    ///
    /// let t = Instant::of_epoch_second(10).unwrap();
    /// assert_eq!(t.plus(Duration::of_nanos(-1)).unwrap().to_string(), "1970-01-01T00:00:09.999999999Z");
    ///
    /// let err = Instant::MAX.plus(Duration::of_nanos(1)).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Range);
    /// ```
    pub fn plus(self, duration: Duration) -> Result<Self, Error> {
        self.plus_parts(duration.seconds(), duration.nanos() as i64)
    }

    /// Subtracts a duration.
    pub fn minus(self, duration: Duration) -> Result<Self, Error> {
        let secs = duration.seconds();
        let nanos = duration.nanos() as i64;
        if secs == i64::MIN {
            return self.plus_parts(i64::MAX, -nanos)?.plus_parts(1, 0);
        }

        self.plus_parts(-secs, -nanos)
    }

    /// Adds a duration, clamping to [`MIN`](Instant::MIN) or
    /// [`MAX`](Instant::MAX) if the result is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, Instant};
    ///
    /// assert_eq!(Instant::EPOCH.plus_saturating(Duration::MAX), Instant::MAX);
    /// assert_eq!(Instant::EPOCH.plus_saturating(Duration::MIN), Instant::MIN);
    /// ```
    pub fn plus_saturating(self, duration: Duration) -> Self {
        match self.plus(duration) {
            Ok(t) => t,
            Err(_) if duration.is_negative() => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    /// Adds an amount of the specified unit.
    ///
    /// Units from [`Unit::Nanos`] to [`Unit::Days`] are supported, a day being
    /// exactly 86400 seconds.
    pub fn plus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        match unit {
            Unit::Nanos => self.plus_nanos(amount),
            Unit::Micros => self.plus_parts(amount / 1_000_000, (amount % 1_000_000) * 1_000),
            Unit::Millis => self.plus_millis(amount),
            Unit::Seconds => self.plus_seconds(amount),
            Unit::Minutes => self.plus_seconds(math::mul(amount, SECONDS_PER_MINUTE)?),
            Unit::Hours => self.plus_seconds(math::mul(amount, SECONDS_PER_HOUR)?),
            Unit::HalfDays => self.plus_seconds(math::mul(amount, SECONDS_PER_DAY / 2)?),
            Unit::Days => self.plus_seconds(math::mul(amount, SECONDS_PER_DAY)?),
            _ => Err(Error::UnsupportedUnit(unit)),
        }
    }

    /// Subtracts an amount of the specified unit.
    pub fn minus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        math::minus_with(self, amount, |t, a| t.plus_unit(a, unit))
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

        Self::of_epoch_second_adjusted(secs, self.nanos as i64 + nanos_to_add)
    }

    /// Returns the amount of time until another instant in the specified
    /// unit.
    ///
    /// The result is the number of whole units between the two instants,
    /// truncated towards zero, and is negative if `end` is before `self`.
    /// Units from [`Unit::Nanos`] to [`Unit::Days`] are supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, Instant, Unit};
    ///
    /// let start = Instant::of_epoch_second_adjusted(5, 650).unwrap();
    /// let end = Instant::of_epoch_second(6).unwrap();
    /// assert_eq!(start.until(end, Unit::Seconds), Ok(0));
    /// assert_eq!(start.until(end, Unit::Nanos), Ok(999_999_350));
    /// assert_eq!(end.until(start, Unit::Millis), Ok(-999));
    /// assert_eq!(
    ///     Instant::MIN.until(Instant::MAX, Unit::Nanos),
    ///     Err(Error::Overflow)
    /// );
    /// ```
    pub fn until(&self, end: Instant, unit: Unit) -> Result<i64, Error> {
        let unit_nanos = match unit {
            Unit::Days => SECONDS_PER_DAY * NANOS_PER_SECOND,
            _ => unit.nanos().ok_or(Error::UnsupportedUnit(unit))?,
        };
        let secs = end.secs as i128 - self.secs as i128;
        let nanos = end.nanos as i128 - self.nanos as i128;
        let total = secs * NANOS_PER_SECOND as i128 + nanos;

        math::narrow(total / unit_nanos as i128)
    }

    /// Returns the number of milliseconds since the epoch, rounded towards
    /// `-∞`.
    ///
    /// Returns an error if the result overflows.
    pub fn to_epoch_milli(&self) -> Result<i64, Error> {
        let total = self.secs as i128 * NANOS_PER_SECOND as i128 + self.nanos as i128;

        math::narrow(total.div_euclid(NANOS_PER_MILLI as i128))
    }

    /// Returns the local date and time at the specified offset.
    ///
    /// Returns an error if the local date is outside the range of
    /// [`LocalDate`], which is one year narrower than the instant range at
    /// both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Instant, ZoneOffset};
    ///
    /// let t = Instant::parse("2008-06-30T23:30:00Z").unwrap();
    /// let (date, time) = t.to_date_time(ZoneOffset::of_hours(1).unwrap()).unwrap();
    /// assert_eq!(date.to_string(), "2008-07-01");
    /// assert_eq!(time.to_string(), "00:30");
    /// ```
    pub fn to_date_time(&self, offset: ZoneOffset) -> Result<(LocalDate, LocalTime), Error> {
        let local_secs = self.secs + offset.total_seconds() as i64;
        let (epoch_day, secs_of_day) = floor_div_mod(local_secs, SECONDS_PER_DAY);
        let date = LocalDate::of_epoch_day(epoch_day)?;
        let time = LocalTime::of_nano_of_day(secs_of_day * NANOS_PER_SECOND + self.nanos as i64)?;

        Ok((date, time))
    }

    /// Creates an instant from a `SystemTime`.
    ///
    /// Returns an error if the system time is outside the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, SystemTime};
    /// use iso_time::Instant;
    ///
    /// let system_time = SystemTime::UNIX_EPOCH - Duration::new(1, 500_000_000);
    /// assert_eq!(
    ///     Instant::from_system_time(&system_time),
    ///     Instant::of_epoch_second_adjusted(-2, 500_000_000)
    /// );
    /// ```
    #[cfg(feature = "std")]
    pub fn from_system_time(system_time: &std::time::SystemTime) -> Result<Self, Error> {
        let out_of_range = |_| Error::Range(RangeError::InstantOutOfRange);

        match system_time.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(elapsed) => Self::EPOCH.plus(Duration::try_from(elapsed).map_err(out_of_range)?),
            Err(e) => Self::EPOCH.minus(Duration::try_from(e.duration()).map_err(out_of_range)?),
        }
    }

    /// Returns a `SystemTime` based on the instant.
    ///
    /// Returns an error if the instant cannot be represented by the platform.
    #[cfg(feature = "std")]
    pub fn to_system_time(&self) -> Result<std::time::SystemTime, Error> {
        let out_of_range = Error::Range(RangeError::InstantOutOfRange);
        let epoch = std::time::SystemTime::UNIX_EPOCH;

        if self.secs >= 0 {
            let elapsed = core::time::Duration::try_from(Duration::between(Self::EPOCH, *self))?;
            epoch.checked_add(elapsed).ok_or(out_of_range)
        } else {
            let elapsed = core::time::Duration::try_from(Duration::between(*self, Self::EPOCH))?;
            epoch.checked_sub(elapsed).ok_or(out_of_range)
        }
    }

    /// Creates an instant from a `chrono::DateTime`.
    ///
    /// A leap second, which `chrono` represents with a sub-second part beyond
    /// one second, is moved to the following second.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Instant;
    /// use chrono::DateTime;
    ///
    /// let date_time = DateTime::parse_from_rfc3339("2001-09-15T05:05:00.005+02:00").unwrap();
    /// assert_eq!(
    ///     Instant::from_chrono_date_time(&date_time),
    ///     Instant::of_epoch_second_adjusted(1_000_523_100, 5_000_000)
    /// );
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_chrono_date_time<Tz: chrono::TimeZone>(
        date_time: &chrono::DateTime<Tz>,
    ) -> Result<Self, Error> {
        let secs = date_time.timestamp();
        let subsec_nanos = date_time.timestamp_subsec_nanos();

        Self::of_epoch_second_adjusted(secs, subsec_nanos as i64)
    }

    /// Returns a `chrono::DateTime` based on the instant.
    ///
    /// Returns an error if the instant is outside the range of `chrono`.
    #[cfg(feature = "chrono")]
    pub fn to_chrono_date_time(&self) -> Result<chrono::DateTime<chrono::Utc>, Error> {
        chrono::DateTime::from_timestamp(self.secs, self.nanos)
            .ok_or(Error::Range(RangeError::InstantOutOfRange))
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    /// Adds a duration to an instant.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting instant is out of range. See
    /// [`Instant::plus`] for a panic-free version.
    fn add(self, other: Duration) -> Self {
        self.plus(other)
            .expect("overflow when adding duration to instant")
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    /// Subtracts a duration from an instant.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting instant is out of range. See
    /// [`Instant::minus`] for a panic-free version.
    fn sub(self, other: Duration) -> Self {
        self.minus(other)
            .expect("overflow when subtracting duration from instant")
    }
}

impl Sub for Instant {
    type Output = Duration;

    /// Returns the duration elapsed since an earlier instant, negative if the
    /// other instant is in the future.
    fn sub(self, earlier: Self) -> Duration {
        Duration::between(earlier, self)
    }
}

impl AddAssign<Duration> for Instant {
    /// Increments the instant by a duration.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting instant is out of range.
    fn add_assign(&mut self, other: Duration) {
        *self = *self + other;
    }
}

impl SubAssign<Duration> for Instant {
    /// Decrements the instant by a duration.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting instant is out of range.
    fn sub_assign(&mut self, other: Duration) {
        *self = *self - other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn t(secs: i64, nanos: i64) -> Instant {
        Instant::of_epoch_second_adjusted(secs, nanos).unwrap()
    }

    const OUT_OF_RANGE: Error = Error::Range(RangeError::InstantOutOfRange);

    #[test]
    fn equality() {
        let t0 = t(123, 123_456_789);
        let t1 = t(123, 123_456_789);
        let t2 = t(123, 123_456_790);
        let t3 = t(124, 123_456_789);

        assert_eq!(t0, t1);
        assert_ne!(t0, t2);
        assert_ne!(t0, t3);
    }

    #[test]
    fn ordering() {
        let t0 = t(0, 1);
        let t1 = t(1, 0);

        assert!(t1 > t0);
        assert!(t(-1, 999_999_999) < Instant::EPOCH);
        assert!(Instant::MIN < Instant::MAX);
    }

    #[test]
    fn bounds() {
        assert_eq!(Instant::of_epoch_second(Instant::MAX_SECOND), Ok(t(Instant::MAX_SECOND, 0)));
        assert_eq!(Instant::of_epoch_second(Instant::MAX_SECOND + 1), Err(OUT_OF_RANGE));
        assert_eq!(Instant::of_epoch_second(Instant::MIN_SECOND - 1), Err(OUT_OF_RANGE));
        assert_eq!(
            Instant::of_epoch_second_adjusted(Instant::MIN_SECOND, -1),
            Err(OUT_OF_RANGE)
        );
        assert_eq!(
            Instant::of_epoch_second_adjusted(i64::MAX, i64::MAX),
            Err(Error::Overflow)
        );
        assert_eq!(
            Instant::of_epoch_second_adjusted(i64::MIN, i64::MIN),
            Err(Error::Overflow)
        );
    }

    #[rstest]
    #[case(-1, -1, 999_000_000)]
    #[case(1_001, 1, 1_000_000)]
    #[case(-1_001, -2, 999_000_000)]
    #[case(i64::MAX, 9_223_372_036_854_775, 807_000_000)]
    #[case(i64::MIN, -9_223_372_036_854_776, 192_000_000)]
    fn of_epoch_milli(#[case] millis: i64, #[case] secs: i64, #[case] nanos: u32) {
        let i = Instant::of_epoch_milli(millis);
        assert_eq!((i.epoch_second(), i.nano()), (secs, nanos));
    }

    #[rstest]
    #[case(t(1, 1_000_000), 1_001)]
    #[case(t(1, 567), 1_000)]
    #[case(t(i64::MAX / 1_000, 0), (i64::MAX / 1_000) * 1_000)]
    #[case(t(i64::MIN / 1_000, 0), (i64::MIN / 1_000) * 1_000)]
    #[case(t(0, -1_000_000), -1)]
    #[case(t(0, 999_999), 0)]
    #[case(t(0, -1), -1)]
    fn to_epoch_milli(#[case] i: Instant, #[case] expected: i64) {
        assert_eq!(i.to_epoch_milli(), Ok(expected));
    }

    #[test]
    fn to_epoch_milli_overflow() {
        assert_eq!(t(i64::MAX / 1_000 + 1, 0).to_epoch_milli(), Err(Error::Overflow));
        assert_eq!(t(i64::MIN / 1_000 - 1, 0).to_epoch_milli(), Err(Error::Overflow));
        assert_eq!(t(i64::MAX / 1_000, 809_000_000).to_epoch_milli(), Err(Error::Overflow));
        assert_eq!(t(-9_223_372_036_854_776, 1).to_epoch_milli(), Err(Error::Overflow));
    }

    #[test]
    fn plus_and_minus_smoke() {
        let i = t(5, 650_000_000);
        assert_eq!(i.plus(Duration::of_millis(400)), Ok(t(6, 50_000_000)));
        assert_eq!(i.minus(Duration::of_millis(700)), Ok(t(4, 950_000_000)));
        assert_eq!(i.plus_seconds(-6), Ok(t(-1, 650_000_000)));
        assert_eq!(i.plus_millis(-651), Ok(t(4, 999_000_000)));
        assert_eq!(i.plus_nanos(350_000_000), Ok(t(6, 0)));
        assert_eq!(i.minus_nanos(i64::MIN), Ok(t(9_223_372_042, 504_775_808)));
        assert_eq!(i + Duration::of_seconds(1), t(6, 650_000_000));
        assert_eq!(i - t(3, 0), Duration::of_millis(2_650));
    }

    #[test]
    fn plus_range_errors() {
        assert_eq!(Instant::MAX.plus_nanos(1), Err(OUT_OF_RANGE));
        assert_eq!(t(Instant::MAX_SECOND, 999_999_999).plus_nanos(1), Err(OUT_OF_RANGE));
        assert_eq!(Instant::MIN.minus_nanos(1), Err(OUT_OF_RANGE));
        assert_eq!(Instant::MIN.plus(Duration::of_seconds(-1)), Err(OUT_OF_RANGE));
        assert_eq!(Instant::MAX.minus(Duration::MIN), Err(Error::Overflow));
    }

    #[test]
    fn plus_overflow_errors() {
        assert_eq!(t(1, 0).plus_seconds(i64::MAX), Err(Error::Overflow));
        assert_eq!(t(-1, 0).plus_seconds(i64::MIN), Err(Error::Overflow));
        assert_eq!(t(1, 0).minus_seconds(i64::MIN + 1), Err(Error::Overflow));
        assert_eq!(t(-2, 0).minus_seconds(i64::MAX), Err(Error::Overflow));
        assert_eq!(Instant::EPOCH.plus(Duration::MAX), Err(OUT_OF_RANGE));
    }

    #[rstest]
    #[case(Instant::MIN, Duration::MIN, Instant::MIN)]
    #[case(Instant::MIN, Duration::ZERO, Instant::MIN)]
    #[case(Instant::EPOCH, Duration::of_seconds(-1), t(-1, 0))]
    #[case(Instant::MAX, Duration::of_nanos(1), Instant::MAX)]
    #[case(Instant::MAX, Duration::MAX, Instant::MAX)]
    #[case(Instant::MIN, Duration::MAX, Instant::MAX)]
    #[case(Instant::MAX, Duration::MIN, Instant::MIN)]
    fn plus_saturating(#[case] i: Instant, #[case] d: Duration, #[case] expected: Instant) {
        assert_eq!(i.plus_saturating(d), expected);
    }

    #[rstest]
    #[case(Unit::Nanos, 1, t(0, 1))]
    #[case(Unit::Micros, -1, t(-1, 999_999_000))]
    #[case(Unit::Micros, 1_000_001, t(1, 1_000))]
    #[case(Unit::Millis, 1, t(0, 1_000_000))]
    #[case(Unit::Seconds, 1, t(1, 0))]
    #[case(Unit::Minutes, 1, t(60, 0))]
    #[case(Unit::Hours, 1, t(3_600, 0))]
    #[case(Unit::HalfDays, 1, t(43_200, 0))]
    #[case(Unit::Days, -1, t(-86_400, 0))]
    fn plus_unit(#[case] unit: Unit, #[case] amount: i64, #[case] expected: Instant) {
        assert_eq!(Instant::EPOCH.plus_unit(amount, unit), Ok(expected));
        assert_eq!(expected.minus_unit(amount, unit), Ok(Instant::EPOCH));
    }

    #[test]
    fn plus_unit_unsupported() {
        assert_eq!(
            Instant::EPOCH.plus_unit(1, Unit::Weeks),
            Err(Error::UnsupportedUnit(Unit::Weeks))
        );
        assert_eq!(
            Instant::EPOCH.plus_unit(i64::MAX, Unit::Minutes),
            Err(Error::Overflow)
        );
    }

    #[rstest]
    #[case(5, 650, -1, 650, Unit::Seconds, -6)]
    #[case(5, 650, 4, 650, Unit::Seconds, -1)]
    #[case(5, 650, 6, 0, Unit::Seconds, 0)]
    #[case(5, 650, 7, 0, Unit::Seconds, 1)]
    #[case(5, 650, 3, 950, Unit::Seconds, -1)]
    #[case(5, 650, 4, 950, Unit::Seconds, 0)]
    #[case(5, 650, 4, 50, Unit::Seconds, -1)]
    #[case(5, 650_000_000, -1, 950_000_000, Unit::Nanos, -5_700_000_000)]
    #[case(5, 650_000_000, 6, 0, Unit::Nanos, 350_000_000)]
    #[case(5, 650_000_000, 5, 650_999_666, Unit::Millis, 0)]
    #[case(5, 999_777, 6, 0, Unit::Millis, 999)]
    #[case(5, 999_888, 6, 1_000_000, Unit::Millis, 1_000)]
    #[case(5, 650_000_000, 3, 0, Unit::Millis, -2_650)]
    #[case(5, 650_000_000, 5, 650_999_000, Unit::Micros, 999)]
    #[case(0, 999_000, 1, 0, Unit::Micros, 999_001)]
    #[case(0, 0, -60, 0, Unit::Minutes, -1)]
    #[case(0, 0, -1, 999_999_999, Unit::Minutes, 0)]
    #[case(0, 0, 59, 999_999_999, Unit::Minutes, 0)]
    #[case(0, 0, 3_601, 0, Unit::Hours, 1)]
    #[case(0, 0, 86_399, 999_999_999, Unit::Days, 0)]
    #[case(0, 0, -86_400, 0, Unit::Days, -1)]
    #[case(0, 0, 43_200, 0, Unit::HalfDays, 1)]
    fn until(
        #[case] secs1: i64,
        #[case] nanos1: i64,
        #[case] secs2: i64,
        #[case] nanos2: i64,
        #[case] unit: Unit,
        #[case] expected: i64,
    ) {
        let start = t(secs1, nanos1);
        let end = t(secs2, nanos2);
        assert_eq!(start.until(end, unit), Ok(expected));
        assert_eq!(end.until(start, unit), Ok(-expected));
    }

    #[test]
    fn until_errors() {
        assert_eq!(
            Instant::EPOCH.until(Instant::MAX, Unit::Weeks),
            Err(Error::UnsupportedUnit(Unit::Weeks))
        );
        assert_eq!(
            Instant::MIN.until(Instant::MAX, Unit::Nanos),
            Err(Error::Overflow)
        );
        assert!(Instant::MIN.until(Instant::MAX, Unit::Seconds).is_ok());
    }

    #[rstest]
    #[case(t(86_400 + 3_600 + 60 + 1, 123_456_789), Unit::Nanos, t(86_400 + 3_600 + 60 + 1, 123_456_789))]
    #[case(t(86_400 + 3_600 + 60 + 1, 123_456_789), Unit::Micros, t(86_400 + 3_600 + 60 + 1, 123_456_000))]
    #[case(t(86_400 + 3_600 + 60 + 1, 123_456_789), Unit::Minutes, t(86_400 + 3_600 + 60, 0))]
    #[case(t(86_400 + 3_600 + 60 + 1, 123_456_789), Unit::Days, t(86_400, 0))]
    #[case(t(-86_400 - 3_600 - 60 - 1, 123_456_789), Unit::Micros, t(-86_400 - 3_600 - 60 - 1, 123_456_000))]
    #[case(t(-86_400 - 3_600 - 60 - 1, 123_456_789), Unit::Seconds, t(-86_400 - 3_600 - 60 - 1, 0))]
    #[case(t(-86_400 - 3_600 - 60 - 1, 123_456_789), Unit::Minutes, t(-86_400 - 3_600 - 120, 0))]
    #[case(t(-86_400 - 3_600 - 60 - 1, 123_456_789), Unit::Hours, t(-86_400 - 7_200, 0))]
    #[case(t(-86_400 - 3_600 - 60 - 1, 123_456_789), Unit::HalfDays, t(-86_400 - 43_200, 0))]
    #[case(t(-86_400 - 3_600 - 60 - 1, 123_456_789), Unit::Days, t(-2 * 86_400, 0))]
    fn truncated_to(#[case] input: Instant, #[case] unit: Unit, #[case] expected: Instant) {
        assert_eq!(input.truncated_to(unit), Ok(expected));
    }

    #[test]
    fn truncated_to_errors() {
        assert_eq!(
            Instant::EPOCH.truncated_to(Unit::Weeks),
            Err(Error::UnsupportedUnit(Unit::Weeks))
        );
        assert_eq!(Instant::MIN.truncated_to(Unit::Days), Ok(Instant::MIN));
    }

    #[test]
    fn fields() {
        let i = t(12, 345_678_901);
        assert_eq!(i.get(Field::NanoOfSecond), Ok(345_678_901));
        assert_eq!(i.get(Field::MicroOfSecond), Ok(345_678));
        assert_eq!(i.get(Field::MilliOfSecond), Ok(345));
        assert_eq!(i.get(Field::InstantSeconds), Ok(12));
        assert_eq!(
            i.get(Field::HourOfDay),
            Err(Error::UnsupportedField(Field::HourOfDay))
        );

        assert_eq!(i.with(Field::NanoOfSecond, 1), Ok(t(12, 1)));
        assert_eq!(i.with(Field::MicroOfSecond, 1), Ok(t(12, 1_000)));
        assert_eq!(i.with(Field::InstantSeconds, -3), Ok(t(-3, 345_678_901)));
        assert_eq!(
            i.with(Field::InstantSeconds, Instant::MAX_SECOND + 1),
            Err(OUT_OF_RANGE)
        );
        assert_eq!(
            i.with(Field::MilliOfSecond, 1_000),
            Err(Error::Range(RangeError::InvalidField {
                field: Field::MilliOfSecond,
                value: 1_000
            }))
        );
        assert_eq!(
            i.with(Field::Year, 2000),
            Err(Error::UnsupportedField(Field::Year))
        );
    }

    #[test]
    fn date_time_conversions() {
        let utc = ZoneOffset::UTC;
        assert!(Instant::MIN.to_date_time(utc).is_err());
        assert!(Instant::MAX.to_date_time(utc).is_err());

        let max = Instant::of_date_time(LocalDate::MAX, LocalTime::MAX, utc);
        assert_eq!(max.to_date_time(utc), Ok((LocalDate::MAX, LocalTime::MAX)));
        let err = max.plus_nanos(1).unwrap().to_date_time(utc).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Range);

        let min = Instant::of_date_time(LocalDate::MIN, LocalTime::MIDNIGHT, utc);
        assert_eq!(min.to_date_time(utc), Ok((LocalDate::MIN, LocalTime::MIDNIGHT)));
        assert!(min.to_date_time(ZoneOffset::of_hours(-1).unwrap()).is_err());

        let offset = ZoneOffset::of_hours_minutes(-5, -30).unwrap();
        let i = t(-1, 5);
        let (date, time) = i.to_date_time(offset).unwrap();
        assert_eq!(date, LocalDate::of(1969, 12, 31).unwrap());
        assert_eq!(time, LocalTime::of(18, 29, 59, 5).unwrap());
        assert_eq!(Instant::of_date_time(date, time, offset), i);
    }

    #[cfg(feature = "std")]
    #[test]
    fn now_smoke() {
        let t0 = Instant::now();
        let t1 = Instant::now_with(&crate::SystemClock);
        assert!(t0.epoch_second() > 1_600_000_000);
        assert!(t1.until(t0, Unit::Seconds).unwrap().abs() <= 60);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_conversions() {
        use std::time::{Duration as StdDuration, SystemTime};

        let st = SystemTime::UNIX_EPOCH + StdDuration::new(1_000_530_300, 5_000_000);
        let i = t(1_000_530_300, 5_000_000);
        assert_eq!(Instant::from_system_time(&st), Ok(i));
        assert_eq!(i.to_system_time(), Ok(st));

        let st = SystemTime::UNIX_EPOCH - StdDuration::new(3, 1);
        let i = t(-4, 999_999_999);
        assert_eq!(Instant::from_system_time(&st), Ok(i));
        assert_eq!(i.to_system_time(), Ok(st));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_conversions() {
        let date_time = chrono::DateTime::parse_from_rfc3339("1969-12-31T23:59:59.5Z").unwrap();
        let i = Instant::from_chrono_date_time(&date_time).unwrap();
        assert_eq!(i, t(-1, 500_000_000));
        assert_eq!(i.to_chrono_date_time().unwrap(), date_time);
        assert!(Instant::MAX.to_chrono_date_time().is_err());
    }
}
