//! Calendar dates in the proleptic Gregorian calendar.

use core::fmt;
use core::iter::FusedIterator;

use crate::date_time;
use crate::math::{self, floor_mod, SECONDS_PER_DAY};
use crate::{
    ArgumentError, Clock, Error, Field, Instant, LocalTime, Period, RangeError, Unit, ZoneOffset,
};

/// A day of the week.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    /// Monday, day 1.
    Monday,
    /// Tuesday, day 2.
    Tuesday,
    /// Wednesday, day 3.
    Wednesday,
    /// Thursday, day 4.
    Thursday,
    /// Friday, day 5.
    Friday,
    /// Saturday, day 6.
    Saturday,
    /// Sunday, day 7.
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the ISO-8601 number of the day, from 1 (Monday) to 7
    /// (Sunday).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the day with the specified ISO-8601 number.
    pub fn of(number: u8) -> Result<Self, Error> {
        Field::DayOfWeek.check_valid_value(number as i64)?;

        Ok(Self::ALL[(number - 1) as usize])
    }

    /// Returns the day that is the specified number of days later.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Weekday;
    ///
    /// assert_eq!(Weekday::Saturday.plus(2), Weekday::Monday);
    /// assert_eq!(Weekday::Monday.plus(-1), Weekday::Sunday);
    /// ```
    pub const fn plus(self, days: i64) -> Self {
        Self::ALL[floor_mod(self as i64 + days % 7, 7) as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };

        fmt.write_str(name)
    }
}

/// A date without a time-zone, such as `2007-12-03`.
///
/// The date uses the proleptic Gregorian calendar, in which the Gregorian
/// leap-year rule is applied to all years including those before its
/// historical adoption. Year 0 is the year before year 1 and is a leap year.
///
/// Supported years range from `-999_999_999` to `999_999_999`. Every date in
/// that range has a unique [epoch day](LocalDate::to_epoch_day), the number
/// of days since `1970-01-01`.
///
/// # Examples
///
/// ```
/// use iso_time::{LocalDate, Unit};
///
/// let date = LocalDate::of(2008, 2, 29).unwrap();
/// assert_eq!(date.plus_years(1).unwrap(), LocalDate::of(2009, 2, 28).unwrap());
///
/// let end = LocalDate::parse("2008-12-25").unwrap();
/// assert_eq!(date.until(end, Unit::Months), Ok(9));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalDate {
    // Field order matters for the derived `Ord`.
    year: i32,
    month: u8,
    day: u8,
}

impl LocalDate {
    /// The earliest supported date, `-999999999-01-01`.
    pub const MIN: Self = Self {
        year: -999_999_999,
        month: 1,
        day: 1,
    };

    /// The latest supported date, `+999999999-12-31`.
    pub const MAX: Self = Self {
        year: 999_999_999,
        month: 12,
        day: 31,
    };

    /// The epoch date, `1970-01-01`.
    pub const EPOCH: Self = Self {
        year: 1970,
        month: 1,
        day: 1,
    };

    /// Creates a date from a year, month and day of the month.
    ///
    /// Each field is first checked against its outer range and the day is
    /// then checked against the length of the month.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, LocalDate, RangeError};
    ///
    /// assert!(LocalDate::of(2008, 2, 29).is_ok());
    /// assert_eq!(
    ///     LocalDate::of(2007, 2, 29),
    ///     Err(Error::Range(RangeError::InvalidDate { year: 2007, month: 2, day: 29 }))
    /// );
    /// ```
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        Field::Year.check_valid_value(year as i64)?;
        Field::MonthOfYear.check_valid_value(month as i64)?;
        Field::DayOfMonth.check_valid_value(day as i64)?;

        if day > date_time::days_in_month(year as i64, month) {
            return Err(RangeError::InvalidDate { year, month, day }.into());
        }

        Ok(Self { year, month, day })
    }

    /// Creates a date from a year and a 1-based day of the year.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::LocalDate;
    ///
    /// assert_eq!(LocalDate::of_year_day(2008, 60), LocalDate::of(2008, 2, 29));
    /// assert!(LocalDate::of_year_day(2007, 366).is_err());
    /// ```
    pub fn of_year_day(year: i32, day_of_year: u16) -> Result<Self, Error> {
        Field::Year.check_valid_value(year as i64)?;
        Field::DayOfYear.check_valid_value(day_of_year as i64)?;

        if day_of_year > date_time::days_in_year(year as i64) {
            return Err(RangeError::InvalidDayOfYear { year }.into());
        }
        let (month, day) = date_time::month_and_day_of_month(year as i64, day_of_year as i32 - 1);

        Ok(Self { year, month, day })
    }

    /// Creates a date from a number of days since `1970-01-01`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::LocalDate;
    ///
    /// assert_eq!(LocalDate::of_epoch_day(-1), LocalDate::of(1969, 12, 31));
    /// assert_eq!(LocalDate::of_epoch_day(LocalDate::MAX.to_epoch_day()), Ok(LocalDate::MAX));
    /// assert!(LocalDate::of_epoch_day(LocalDate::MAX.to_epoch_day() + 1).is_err());
    /// ```
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, Error> {
        Field::EpochDay.check_valid_value(epoch_day)?;
        let (year, month, day) = date_time::from_epoch_day(epoch_day);

        Ok(Self {
            year: year as i32,
            month,
            day,
        })
    }

    /// Returns the date of an instant at the specified offset.
    pub fn of_instant(instant: Instant, offset: ZoneOffset) -> Result<Self, Error> {
        instant.to_date_time(offset).map(|(date, _)| date)
    }

    /// Returns the current date from a clock at the specified offset.
    pub fn now_with(clock: &impl Clock, offset: ZoneOffset) -> Result<Self, Error> {
        Self::of_instant(clock.instant(), offset)
    }

    /// Builds a date, clamping the day to the last day of the month.
    ///
    /// The year must be valid.
    fn resolve_previous_valid(year: i32, month: u8, day: u8) -> Self {
        let day = day.min(date_time::days_in_month(year as i64, month));

        Self { year, month, day }
    }

    /// Returns the year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month, from 1 to 12.
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month, from 1 to 31.
    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Returns the day of the year, from 1 to 366.
    pub const fn day_of_year(&self) -> u16 {
        date_time::day_of_year(self.year as i64, self.month, self.day) as u16 + 1
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{LocalDate, Weekday};
    ///
    /// assert_eq!(LocalDate::EPOCH.day_of_week(), Weekday::Thursday);
    /// ```
    pub const fn day_of_week(&self) -> Weekday {
        Weekday::Thursday.plus(self.to_epoch_day())
    }

    /// Returns `true` if the year is a leap year.
    pub const fn is_leap_year(&self) -> bool {
        date_time::is_leap(self.year as i64)
    }

    /// Returns the number of days in the month.
    pub const fn length_of_month(&self) -> u8 {
        date_time::days_in_month(self.year as i64, self.month)
    }

    /// Returns the number of days in the year.
    pub const fn length_of_year(&self) -> u16 {
        date_time::days_in_year(self.year as i64)
    }

    /// Returns the number of days since `1970-01-01`.
    pub const fn to_epoch_day(&self) -> i64 {
        date_time::to_epoch_day(self.year as i64, self.month, self.day)
    }

    /// Returns the number of months since year 0.
    pub const fn proleptic_month(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    /// Returns the number of seconds since the epoch of this date at the
    /// specified time and offset.
    pub fn to_epoch_second(&self, time: LocalTime, offset: ZoneOffset) -> i64 {
        self.to_epoch_day() * SECONDS_PER_DAY + time.to_second_of_day() as i64
            - offset.total_seconds() as i64
    }

    /// Returns the value of a date field.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, Field, LocalDate};
    ///
    /// let date = LocalDate::of(-1, 3, 9).unwrap();
    /// assert_eq!(date.get(Field::YearOfEra), Ok(2));
    /// assert_eq!(date.get(Field::Era), Ok(0));
    /// assert_eq!(date.get(Field::AlignedWeekOfMonth), Ok(2));
    /// assert_eq!(date.get(Field::HourOfDay), Err(Error::UnsupportedField(Field::HourOfDay)));
    /// ```
    pub const fn get(&self, field: Field) -> Result<i64, Error> {
        let day = self.day as i64;
        let value = match field {
            Field::DayOfWeek => self.day_of_week().number() as i64,
            Field::AlignedDayOfWeekInMonth => (day - 1) % 7 + 1,
            Field::AlignedDayOfWeekInYear => (self.day_of_year() as i64 - 1) % 7 + 1,
            Field::DayOfMonth => day,
            Field::DayOfYear => self.day_of_year() as i64,
            Field::EpochDay => self.to_epoch_day(),
            Field::AlignedWeekOfMonth => (day - 1) / 7 + 1,
            Field::AlignedWeekOfYear => (self.day_of_year() as i64 - 1) / 7 + 1,
            Field::MonthOfYear => self.month as i64,
            Field::ProlepticMonth => self.proleptic_month(),
            Field::YearOfEra => {
                if self.year >= 1 {
                    self.year as i64
                } else {
                    1 - self.year as i64
                }
            }
            Field::Year => self.year as i64,
            Field::Era => (self.year >= 1) as i64,
            _ => return Err(Error::UnsupportedField(field)),
        };

        Ok(value)
    }

    /// Returns a copy with a date field set to a new value.
    ///
    /// Fields are adjusted as follows:
    ///
    /// - day-of-week and aligned fields move the date within its week, month
    ///   or year,
    /// - the month, year, year-of-era and era keep the day of the month,
    ///   clamped to the length of the new month,
    /// - the day of the month and day of the year must exist in the month or
    ///   year.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Field, LocalDate};
    ///
    /// let date = LocalDate::of(2007, 7, 15).unwrap();
    /// assert_eq!(date.with(Field::DayOfWeek, 1), LocalDate::of(2007, 7, 9));
    /// assert_eq!(date.with(Field::Era, 0), LocalDate::of(-2006, 7, 15));
    /// ```
    pub fn with(self, field: Field, value: i64) -> Result<Self, Error> {
        if !field.is_date_based() {
            return Err(Error::UnsupportedField(field));
        }
        let value = field.check_valid_value(value)?;
        let current = self.get(field)?;

        match field {
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
                self.plus_days(value - current)
            }
            Field::AlignedWeekOfMonth | Field::AlignedWeekOfYear => {
                self.plus_weeks(value - current)
            }
            Field::DayOfMonth => self.with_day_of_month(value as u8),
            Field::DayOfYear => self.with_day_of_year(value as u16),
            Field::EpochDay => Self::of_epoch_day(value),
            Field::MonthOfYear => self.with_month(value as u8),
            Field::ProlepticMonth => self.plus_months(value - current),
            Field::YearOfEra => {
                let year = if self.year >= 1 { value } else { 1 - value };
                self.with_year(math::to_i32(year)?)
            }
            Field::Year => self.with_year(value as i32),
            Field::Era if value == current => Ok(self),
            Field::Era => self.with_year(1 - self.year),
            _ => Err(Error::UnsupportedField(field)),
        }
    }

    /// Returns a copy with a different year, clamping the day of the month.
    pub fn with_year(self, year: i32) -> Result<Self, Error> {
        if year == self.year {
            return Ok(self);
        }
        Field::Year.check_valid_value(year as i64)?;

        Ok(Self::resolve_previous_valid(year, self.month, self.day))
    }

    /// Returns a copy with a different month, clamping the day of the month.
    pub fn with_month(self, month: u8) -> Result<Self, Error> {
        if month == self.month {
            return Ok(self);
        }
        Field::MonthOfYear.check_valid_value(month as i64)?;

        Ok(Self::resolve_previous_valid(self.year, month, self.day))
    }

    /// Returns a copy with a different day of the month.
    pub fn with_day_of_month(self, day: u8) -> Result<Self, Error> {
        if day == self.day {
            return Ok(self);
        }

        Self::of(self.year, self.month, day)
    }

    /// Returns a copy with a different day of the year.
    pub fn with_day_of_year(self, day_of_year: u16) -> Result<Self, Error> {
        if day_of_year == self.day_of_year() {
            return Ok(self);
        }

        Self::of_year_day(self.year, day_of_year)
    }

    /// Adds a period, first its total months and then its days.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{LocalDate, Period};
    ///
    /// let date = LocalDate::of(2008, 1, 31).unwrap();
    /// let period = Period::of(0, 1, 1);
    /// assert_eq!(date.plus(period), LocalDate::of(2008, 3, 1));
    /// ```
    pub fn plus(self, period: Period) -> Result<Self, Error> {
        self.plus_months(period.to_total_months())?
            .plus_days(period.days() as i64)
    }

    /// Subtracts a period, first its total months and then its days.
    pub fn minus(self, period: Period) -> Result<Self, Error> {
        self.minus_months(period.to_total_months())?
            .minus_days(period.days() as i64)
    }

    /// Adds an amount of a date unit.
    pub fn plus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        match unit {
            Unit::Days => self.plus_days(amount),
            Unit::Weeks => self.plus_weeks(amount),
            Unit::Months => self.plus_months(amount),
            Unit::Years => self.plus_years(amount),
            Unit::Decades => self.plus_years(math::mul(amount, 10)?),
            Unit::Centuries => self.plus_years(math::mul(amount, 100)?),
            Unit::Millennia => self.plus_years(math::mul(amount, 1_000)?),
            Unit::Eras => {
                let era = math::add(self.get(Field::Era)?, amount)?;
                self.with(Field::Era, era)
            }
            _ => Err(Error::UnsupportedUnit(unit)),
        }
    }

    /// Subtracts an amount of a date unit.
    pub fn minus_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        math::minus_with(self, amount, |d, a| d.plus_unit(a, unit))
    }

    /// Adds a number of years, clamping the day of the month.
    ///
    /// Returns a range error if the resulting year is out of range, even if
    /// the amount exceeds the 64-bit range of years.
    pub fn plus_years(self, years: i64) -> Result<Self, Error> {
        if years == 0 {
            return Ok(self);
        }
        let year = check_year(self.year as i128 + years as i128)?;

        Ok(Self::resolve_previous_valid(year, self.month, self.day))
    }

    /// Adds a number of months, clamping the day of the month.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{ErrorKind, LocalDate};
    ///
    /// let date = LocalDate::of(2007, 3, 31).unwrap();
    /// assert_eq!(date.plus_months(-1), LocalDate::of(2007, 2, 28));
    ///
    /// let err = LocalDate::MAX.plus_months(1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Range);
    /// ```
    pub fn plus_months(self, months: i64) -> Result<Self, Error> {
        if months == 0 {
            return Ok(self);
        }
        let month_count = self.proleptic_month() as i128 + months as i128;
        let year = check_year(month_count.div_euclid(12))?;
        let month = month_count.rem_euclid(12) as u8 + 1;

        Ok(Self::resolve_previous_valid(year, month, self.day))
    }

    /// Adds a number of weeks.
    pub fn plus_weeks(self, weeks: i64) -> Result<Self, Error> {
        self.plus_days(math::mul(weeks, 7)?)
    }

    /// Adds a number of days.
    ///
    /// Returns [`Error::Overflow`] if the epoch day overflows and a range
    /// error if the date is out of range.
    pub fn plus_days(self, days: i64) -> Result<Self, Error> {
        if days == 0 {
            return Ok(self);
        }

        Self::of_epoch_day(math::add(self.to_epoch_day(), days)?)
    }

    /// Subtracts a number of years.
    pub fn minus_years(self, years: i64) -> Result<Self, Error> {
        math::minus_with(self, years, Self::plus_years)
    }

    /// Subtracts a number of months.
    pub fn minus_months(self, months: i64) -> Result<Self, Error> {
        math::minus_with(self, months, Self::plus_months)
    }

    /// Subtracts a number of weeks.
    pub fn minus_weeks(self, weeks: i64) -> Result<Self, Error> {
        math::minus_with(self, weeks, Self::plus_weeks)
    }

    /// Subtracts a number of days.
    pub fn minus_days(self, days: i64) -> Result<Self, Error> {
        math::minus_with(self, days, Self::plus_days)
    }

    /// Returns the number of whole units from this date until another date.
    ///
    /// Month-based units count whole months: from `01-15` to `02-14` is zero
    /// months. The result is negative if `end` is earlier.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{LocalDate, Unit};
    ///
    /// let start = LocalDate::of(2000, 1, 15).unwrap();
    /// assert_eq!(start.until(LocalDate::of(2000, 2, 14).unwrap(), Unit::Months), Ok(0));
    /// assert_eq!(start.until(LocalDate::of(2000, 2, 15).unwrap(), Unit::Months), Ok(1));
    /// assert_eq!(start.until(LocalDate::of(1999, 12, 16).unwrap(), Unit::Months), Ok(0));
    /// ```
    pub fn until(&self, end: LocalDate, unit: Unit) -> Result<i64, Error> {
        let amount = match unit {
            Unit::Days => self.days_until(end),
            Unit::Weeks => self.days_until(end) / 7,
            Unit::Months => self.months_until(end),
            Unit::Years => self.months_until(end) / 12,
            Unit::Decades => self.months_until(end) / 120,
            Unit::Centuries => self.months_until(end) / 1_200,
            Unit::Millennia => self.months_until(end) / 12_000,
            Unit::Eras => end.get(Field::Era)? - self.get(Field::Era)?,
            _ => return Err(Error::UnsupportedUnit(unit)),
        };

        Ok(amount)
    }

    const fn days_until(&self, end: LocalDate) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    const fn months_until(&self, end: LocalDate) -> i64 {
        let packed1 = self.proleptic_month() * 32 + self.day as i64;
        let packed2 = end.proleptic_month() * 32 + end.day as i64;

        (packed2 - packed1) / 32
    }

    /// Returns the period between this date and another date.
    ///
    /// The months and days of the period always have the same sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{LocalDate, Period};
    ///
    /// let start = LocalDate::of(2010, 1, 15).unwrap();
    /// assert_eq!(start.until_period(LocalDate::of(2011, 3, 18).unwrap()), Period::of(1, 2, 3));
    /// assert_eq!(start.until_period(LocalDate::of(2010, 2, 14).unwrap()), Period::of(0, 0, 30));
    /// assert_eq!(start.until_period(LocalDate::of(2009, 12, 16).unwrap()), Period::of(0, 0, -30));
    /// ```
    pub fn until_period(&self, end: LocalDate) -> Period {
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let mut days = end.day as i32 - self.day as i32;

        if total_months > 0 && days < 0 {
            total_months -= 1;
            // Stays between the two dates so the year is valid.
            let month_count = self.proleptic_month() + total_months;
            let calc_date = Self::resolve_previous_valid(
                month_count.div_euclid(12) as i32,
                month_count.rem_euclid(12) as u8 + 1,
                self.day,
            );
            days = (end.to_epoch_day() - calc_date.to_epoch_day()) as i32;
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= end.length_of_month() as i32;
        }

        // At most about 2.4e10 months, so years fit in an `i32`.
        Period::of((total_months / 12) as i32, (total_months % 12) as i32, days)
    }

    /// Returns the sequence of dates from this date (inclusive) to `end`
    /// (exclusive) in steps of one day.
    ///
    /// Returns an error if `end` is before this date.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::LocalDate;
    ///
    /// let start = LocalDate::of(2019, 12, 30).unwrap();
    /// let end = LocalDate::of(2020, 1, 2).unwrap();
    /// let dates: Vec<_> = start.dates_until(end).unwrap().map(|d| d.to_string()).collect();
    /// assert_eq!(dates, ["2019-12-30", "2019-12-31", "2020-01-01"]);
    /// ```
    pub fn dates_until(self, end: LocalDate) -> Result<DatesUntil, Error> {
        let count = end.to_epoch_day() - self.to_epoch_day();
        if count < 0 {
            return Err(ArgumentError::WrongDirection.into());
        }

        Ok(DatesUntil::new(self, 0, 1, count))
    }

    /// Returns the sequence of dates from this date (inclusive) to `end`
    /// (exclusive) with the specified step.
    ///
    /// The `n`-th date is computed as this date plus `n` times the months of
    /// the step and then `n` times its days, so that stepping by one month
    /// from a 31st keeps the 31st whenever the month allows it.
    ///
    /// Returns an error if the step is zero, if its months and days have
    /// opposite signs or if it points away from `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{LocalDate, Period};
    ///
    /// let start = LocalDate::of(2019, 1, 31).unwrap();
    /// let end = LocalDate::of(2019, 5, 1).unwrap();
    /// let dates: Vec<_> = start
    ///     .dates_until_by(end, Period::of_months(1))
    ///     .unwrap()
    ///     .map(|d| d.to_string())
    ///     .collect();
    /// assert_eq!(dates, ["2019-01-31", "2019-02-28", "2019-03-31", "2019-04-30"]);
    /// ```
    pub fn dates_until_by(self, end: LocalDate, step: Period) -> Result<DatesUntil, Error> {
        let months = step.to_total_months();
        let days = step.days() as i64;
        if (months < 0 && days > 0) || (months > 0 && days < 0) {
            return Err(ArgumentError::MixedSignStep.into());
        }
        if months == 0 && days == 0 {
            return Err(ArgumentError::ZeroStep.into());
        }
        let end_day = end.to_epoch_day();
        let until = end_day - self.to_epoch_day();
        if until == 0 {
            return Ok(DatesUntil::new(self, months, days, 0));
        }
        let sign: i64 = if months > 0 || days > 0 { 1 } else { -1 };
        if (sign < 0) ^ (until < 0) {
            return Err(ArgumentError::WrongDirection.into());
        }
        if months == 0 {
            let steps = (until - sign) / days;
            return Ok(DatesUntil::new(self, 0, days, steps + 1));
        }

        // 48699/1600 is the average number of days per month; the estimate
        // overshoots by at most two steps.
        let mut steps = math::mul_div(until, 1_600, months * 48_699 + days * 1_600)? + 1;
        for _ in 0..2 {
            if !self.reaches(months * steps, days * steps, end_day, sign) {
                break;
            }
            steps -= 1;
        }

        Ok(DatesUntil::new(self, months, days, steps + 1))
    }

    /// Returns `true` if this date shifted by the months and days reaches or
    /// passes the end epoch day in the direction of `sign`.
    fn reaches(self, months: i64, days: i64, end_day: i64, sign: i64) -> bool {
        match self.plus_months(months) {
            Ok(date) => (date.to_epoch_day() + days) * sign >= end_day * sign,
            Err(_) => true,
        }
    }

    /// Creates a date from a `chrono::NaiveDate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::LocalDate;
    ///
    /// let date = chrono::NaiveDate::from_ymd_opt(-44, 3, 15).unwrap();
    /// assert_eq!(LocalDate::from_chrono_naive_date(date), LocalDate::of(-44, 3, 15).unwrap());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_chrono_naive_date(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;

        // The range of `chrono` is much narrower.
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    /// Returns a `chrono::NaiveDate` equal to this date.
    ///
    /// Returns an error if the year is outside the range of `chrono`.
    #[cfg(feature = "chrono")]
    pub fn to_chrono_naive_date(&self) -> Result<chrono::NaiveDate, Error> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32).ok_or(
            Error::Range(RangeError::InvalidField {
                field: Field::Year,
                value: self.year as i64,
            }),
        )
    }
}

/// Checks that a year computed in wide arithmetic is within range.
fn check_year(year: i128) -> Result<i32, Error> {
    let range = Field::Year.range();
    if year < range.min() as i128 || year > range.max() as i128 {
        let value = year.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        return Err(RangeError::InvalidField {
            field: Field::Year,
            value,
        }
        .into());
    }

    Ok(year as i32)
}

/// An iterator over a sequence of dates separated by a fixed step.
///
/// This `struct` is created by [`LocalDate::dates_until`] and
/// [`LocalDate::dates_until_by`]. It can be cloned to restart the sequence
/// and traversed from both ends.
#[derive(Clone, Debug)]
pub struct DatesUntil {
    start: LocalDate,
    months: i64,
    days: i64,
    front: i64,
    back: i64,
}

impl DatesUntil {
    fn new(start: LocalDate, months: i64, days: i64, count: i64) -> Self {
        Self {
            start,
            months,
            days,
            front: 0,
            back: count,
        }
    }

    fn nth_date(&self, n: i64) -> Option<LocalDate> {
        self.start
            .plus_months(self.months * n)
            .and_then(|date| date.plus_days(self.days * n))
            .ok()
    }
}

impl Iterator for DatesUntil {
    type Item = LocalDate;

    fn next(&mut self) -> Option<LocalDate> {
        if self.front >= self.back {
            return None;
        }
        let date = self.nth_date(self.front);
        self.front += 1;

        date
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;

        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<LocalDate> {
        let remaining = (self.back - self.front) as usize;
        if n >= remaining {
            self.front = self.back;
            return None;
        }
        self.front += n as i64;

        self.next()
    }
}

impl DoubleEndedIterator for DatesUntil {
    fn next_back(&mut self) -> Option<LocalDate> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;

        self.nth_date(self.back)
    }
}

impl ExactSizeIterator for DatesUntil {}

impl FusedIterator for DatesUntil {}
