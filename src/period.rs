//! Date-based amounts of years, months and days.

use core::ops::{Add, Neg, Sub};

use crate::math;
use crate::{Error, LocalDate, Unit};

/// A date-based amount of time such as `2 years, 3 months and 4 days`.
///
/// The three components are independent and may have different signs. They
/// are only combined when the period is added to a [`LocalDate`]: first the
/// total number of months and then the days.
///
/// # Examples
///
/// ```
/// use iso_time::{LocalDate, Period};
///
/// let p: Period = "P1Y2M3D".parse().unwrap();
/// assert_eq!(p, Period::of(1, 2, 3));
/// assert_eq!(p.to_total_months(), 14);
///
/// let start = LocalDate::of(2020, 1, 31).unwrap();
/// assert_eq!(start.plus(p).unwrap().to_string(), "2021-04-03");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// A period of zero length.
    pub const ZERO: Self = Self::of(0, 0, 0);

    /// Creates a period from a number of years, months and days.
    pub const fn of(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Creates a period from a number of years.
    pub const fn of_years(years: i32) -> Self {
        Self::of(years, 0, 0)
    }

    /// Creates a period from a number of months.
    pub const fn of_months(months: i32) -> Self {
        Self::of(0, months, 0)
    }

    /// Creates a period from a number of weeks, converted to days.
    ///
    /// # Panics
    ///
    /// Panics if the number of days overflows an `i32`. See
    /// [`of_weeks_checked`](Self::of_weeks_checked) for a fallible version.
    pub const fn of_weeks(weeks: i32) -> Self {
        Self::of(0, 0, weeks * 7)
    }

    /// Creates a period from a number of weeks, converted to days.
    ///
    /// Returns an error if the number of days overflows.
    pub const fn of_weeks_checked(weeks: i32) -> Result<Self, Error> {
        match weeks.checked_mul(7) {
            Some(days) => Ok(Self::of(0, 0, days)),
            None => Err(Error::Overflow),
        }
    }

    /// Creates a period from a number of days.
    pub const fn of_days(days: i32) -> Self {
        Self::of(0, 0, days)
    }

    /// Returns the period between two dates.
    ///
    /// This is equivalent to [`LocalDate::until_period`].
    pub fn between(start: LocalDate, end: LocalDate) -> Self {
        start.until_period(end)
    }

    /// Returns the number of years.
    pub const fn years(&self) -> i32 {
        self.years
    }

    /// Returns the number of months.
    pub const fn months(&self) -> i32 {
        self.months
    }

    /// Returns the number of days.
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Returns the amount of one of the `Years`, `Months` or `Days` units.
    pub const fn get(&self, unit: Unit) -> Result<i64, Error> {
        match unit {
            Unit::Years => Ok(self.years as i64),
            Unit::Months => Ok(self.months as i64),
            Unit::Days => Ok(self.days as i64),
            _ => Err(Error::UnsupportedUnit(unit)),
        }
    }

    /// Returns `true` if all components are zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns `true` if any component is negative.
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Returns the total number of months, `years * 12 + months`.
    pub const fn to_total_months(&self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }

    /// Returns a copy with a different number of years.
    pub const fn with_years(self, years: i32) -> Self {
        Self { years, ..self }
    }

    /// Returns a copy with a different number of months.
    pub const fn with_months(self, months: i32) -> Self {
        Self { months, ..self }
    }

    /// Returns a copy with a different number of days.
    pub const fn with_days(self, days: i32) -> Self {
        Self { days, ..self }
    }

    /// Returns a copy with the months folded into years so that the months
    /// lie within `-11..=11` and share the sign of the years.
    ///
    /// Days are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Period;
    ///
    /// assert_eq!(Period::of(1, 15, 40).normalized(), Ok(Period::of(2, 3, 40)));
    /// assert_eq!(Period::of(1, -15, 0).normalized(), Ok(Period::of(0, -3, 0)));
    /// ```
    pub fn normalized(self) -> Result<Self, Error> {
        let total = self.to_total_months();
        let years = math::to_i32(total / 12)?;

        Ok(Self::of(years, (total % 12) as i32, self.days))
    }

    /// Adds two periods component by component.
    pub fn plus(self, other: Period) -> Result<Self, Error> {
        Ok(Self::of(
            add_i32(self.years, other.years)?,
            add_i32(self.months, other.months)?,
            add_i32(self.days, other.days)?,
        ))
    }

    /// Subtracts a period component by component.
    pub fn minus(self, other: Period) -> Result<Self, Error> {
        Ok(Self::of(
            sub_i32(self.years, other.years)?,
            sub_i32(self.months, other.months)?,
            sub_i32(self.days, other.days)?,
        ))
    }

    /// Adds a number of years.
    pub fn plus_years(self, years: i64) -> Result<Self, Error> {
        Ok(self.with_years(math::to_i32(math::add(self.years as i64, years)?)?))
    }

    /// Adds a number of months.
    pub fn plus_months(self, months: i64) -> Result<Self, Error> {
        Ok(self.with_months(math::to_i32(math::add(self.months as i64, months)?)?))
    }

    /// Adds a number of days.
    pub fn plus_days(self, days: i64) -> Result<Self, Error> {
        Ok(self.with_days(math::to_i32(math::add(self.days as i64, days)?)?))
    }

    /// Multiplies each component by a scalar.
    pub fn multiplied_by(self, scalar: i32) -> Result<Self, Error> {
        if scalar == 1 {
            return Ok(self);
        }

        Ok(Self::of(
            mul_i32(self.years, scalar)?,
            mul_i32(self.months, scalar)?,
            mul_i32(self.days, scalar)?,
        ))
    }

    /// Negates each component.
    ///
    /// Returns an error if a component is `i32::MIN`.
    pub fn negated(self) -> Result<Self, Error> {
        self.multiplied_by(-1)
    }
}

fn add_i32(a: i32, b: i32) -> Result<i32, Error> {
    a.checked_add(b).ok_or(Error::Overflow)
}

fn sub_i32(a: i32, b: i32) -> Result<i32, Error> {
    a.checked_sub(b).ok_or(Error::Overflow)
}

fn mul_i32(a: i32, b: i32) -> Result<i32, Error> {
    a.checked_mul(b).ok_or(Error::Overflow)
}

impl Add for Period {
    type Output = Self;

    /// Adds two periods.
    ///
    /// # Panics
    ///
    /// This function panics if a component overflows. See
    /// [`Period::plus`] for a fallible version.
    fn add(self, other: Self) -> Self {
        self.plus(other).expect("overflow when adding periods")
    }
}

impl Sub for Period {
    type Output = Self;

    /// Subtracts a period.
    ///
    /// # Panics
    ///
    /// This function panics if a component overflows. See
    /// [`Period::minus`] for a fallible version.
    fn sub(self, other: Self) -> Self {
        self.minus(other).expect("overflow when subtracting periods")
    }
}

impl Neg for Period {
    type Output = Self;

    /// Negates a period.
    ///
    /// # Panics
    ///
    /// This function panics if a component is `i32::MIN`. See
    /// [`Period::negated`] for a fallible version.
    fn neg(self) -> Self {
        self.negated().expect("overflow when negating period")
    }
}
