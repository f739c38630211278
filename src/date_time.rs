//! Proleptic Gregorian calendar computations.
//!
//! Years follow the ISO 8601 numbering where year 0 is 1 BC. Days are counted
//! either from 0000-01-01 or from the 1970-01-01 epoch.

use core::fmt;

use crate::math::{floor_div, floor_div_mod};

/// Lengths of the months of a common year.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days of a common year elapsed before the first day of each month.
const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Number of days in a 400-year cycle.
pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;

/// Number of days from 0000-01-01 to 1970-01-01.
pub(crate) const DAYS_0000_TO_1970: i64 = 719_528;

/// Leap year rule, valid for negative years too.
pub(crate) const fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of a month, which must lie within `1..=12`.
pub(crate) const fn days_in_month(year: i64, month: u8) -> u8 {
    if month == 2 && is_leap(year) {
        29
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

pub(crate) const fn days_in_year(year: i64) -> u16 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

/// Days elapsed since the first day of the year before the first day of the
/// month at `index` (0 for January).
const fn days_before_month(leap: bool, index: usize) -> i32 {
    DAYS_BEFORE_MONTH[index] + (leap && index >= 2) as i32
}

/// Returns the 0-based day of the year of a valid date.
pub(crate) const fn day_of_year(year: i64, month: u8, day: u8) -> i32 {
    days_before_month(is_leap(year), (month - 1) as usize) + day as i32 - 1
}

/// Returns the month and the day of the month for a 0-based day of the year.
pub(crate) fn month_and_day_of_month(year: i64, day_of_year: i32) -> (u8, u8) {
    let leap = is_leap(year);
    let mut index = 11;
    while days_before_month(leap, index) > day_of_year {
        index -= 1;
    }

    (
        index as u8 + 1,
        (day_of_year - days_before_month(leap, index)) as u8 + 1,
    )
}

/// Days from 0000-01-01 to the first day of `year`, negative for negative
/// years.
///
/// Leap years in `[0, year)` are counted as multiples of 4, 100 and 400 using
/// floor division, which also holds for negative years. The result does not
/// overflow for years within `±2^54`.
pub(crate) const fn days_from_year_0(year: i64) -> i64 {
    365 * year + floor_div(year + 3, 4) - floor_div(year + 99, 100) + floor_div(year + 399, 400)
}

/// Returns the year and the 0-based day of the year for a day count relative
/// to 0000-01-01.
pub(crate) fn year_and_day_of_year(days: i64) -> (i64, i32) {
    let (cycles, day_of_cycle) = floor_div_mod(days, DAYS_PER_CYCLE);

    // The mean year length gives an estimate which is at most one year off.
    let mut year = day_of_cycle * 400 / DAYS_PER_CYCLE;
    while days_from_year_0(year + 1) <= day_of_cycle {
        year += 1;
    }
    while days_from_year_0(year) > day_of_cycle {
        year -= 1;
    }

    (
        cycles * 400 + year,
        (day_of_cycle - days_from_year_0(year)) as i32,
    )
}

/// Converts a valid date to a day count relative to 1970-01-01.
pub(crate) const fn to_epoch_day(year: i64, month: u8, day: u8) -> i64 {
    days_from_year_0(year) + day_of_year(year, month, day) as i64 - DAYS_0000_TO_1970
}

/// Converts a day count relative to 1970-01-01 to a year, month and day.
pub(crate) fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let (year, day_of_year) = year_and_day_of_year(epoch_day + DAYS_0000_TO_1970);
    let (month, day) = month_and_day_of_month(year, day_of_year);

    (year, month, day)
}

/// Writes an ISO 8601 year.
///
/// Years within `±9999` are written with at least 4 digits and a sign only if
/// negative; other years are written with a mandatory sign.
pub(crate) fn fmt_year(fmt: &mut fmt::Formatter<'_>, year: i64) -> fmt::Result {
    if year > 9999 {
        write!(fmt, "+{}", year)
    } else if year < 0 {
        write!(fmt, "-{:04}", year.unsigned_abs())
    } else {
        write!(fmt, "{:04}", year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1999, false)]
    #[case(2000, true)]
    #[case(2001, false)]
    #[case(2004, true)]
    #[case(1600, true)]
    #[case(1700, false)]
    #[case(1800, false)]
    #[case(1900, false)]
    #[case(0, true)]
    #[case(-4, true)]
    #[case(-100, false)]
    #[case(-400, true)]
    fn leap_years(#[case] year: i64, #[case] leap: bool) {
        assert_eq!(is_leap(year), leap);
        assert_eq!(is_leap(year), year % 4 == 0 && (year % 100 != 0 || year % 400 == 0));
    }

    #[rstest]
    #[case(1970, 1, 1, 0)]
    #[case(1970, 1, 2, 1)]
    #[case(1969, 12, 31, -1)]
    #[case(2000, 3, 1, 11_017)]
    #[case(0, 1, 1, -719_528)]
    #[case(-1, 12, 31, -719_529)]
    #[case(999_999_999, 12, 31, 365_241_780_471)]
    #[case(-999_999_999, 1, 1, -365_243_219_162)]
    fn epoch_day(#[case] year: i64, #[case] month: u8, #[case] day: u8, #[case] expected: i64) {
        assert_eq!(to_epoch_day(year, month, day), expected);
        assert_eq!(from_epoch_day(expected), (year, month, day));
    }

    #[test]
    fn epoch_day_bijection_around_cycle_boundaries() {
        for start in [-DAYS_PER_CYCLE * 3, -800, -2, 0, 365, DAYS_PER_CYCLE * 5] {
            let mut expected = from_epoch_day(start - 1);
            for epoch_day in start..start + 2_000 {
                let (y, m, d) = from_epoch_day(epoch_day);
                assert_eq!(to_epoch_day(y, m, d), epoch_day);

                // Consecutive days are consecutive dates.
                let (py, pm, pd) = expected;
                if d == 1 {
                    assert_eq!(pd, days_in_month(py, pm));
                    if m == 1 {
                        assert_eq!((py + 1, pm), (y, 12));
                    } else {
                        assert_eq!((py, pm + 1), (y, m));
                    }
                } else {
                    assert_eq!((py, pm, pd + 1), (y, m, d));
                }
                expected = (y, m, d);
            }
        }
    }

    #[test]
    fn month_lookup() {
        assert_eq!(month_and_day_of_month(2001, 0), (1, 1));
        assert_eq!(month_and_day_of_month(2001, 58), (2, 28));
        assert_eq!(month_and_day_of_month(2001, 59), (3, 1));
        assert_eq!(month_and_day_of_month(2004, 59), (2, 29));
        assert_eq!(month_and_day_of_month(2004, 365), (12, 31));
        assert_eq!(days_in_year(2004), 366);
        assert_eq!(days_in_year(1900), 365);
    }
}
