//! Checked 64-bit arithmetic and floor division.
//!
//! All temporal types funnel their raw integer arithmetic through these
//! helpers so that overflow is always reported as [`Error::Overflow`] rather
//! than wrapping or panicking.

use crate::Error;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;
pub(crate) const MINUTES_PER_DAY: i64 = 1_440;
pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const NANOS_PER_MINUTE: i64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE;
pub(crate) const NANOS_PER_HOUR: i64 = NANOS_PER_SECOND * SECONDS_PER_HOUR;
pub(crate) const NANOS_PER_DAY: i64 = NANOS_PER_SECOND * SECONDS_PER_DAY;

/// Adds two integers, failing on overflow.
#[inline]
pub(crate) const fn add(a: i64, b: i64) -> Result<i64, Error> {
    match a.checked_add(b) {
        Some(v) => Ok(v),
        None => Err(Error::Overflow),
    }
}

/// Subtracts two integers, failing on overflow.
#[inline]
pub(crate) const fn sub(a: i64, b: i64) -> Result<i64, Error> {
    match a.checked_sub(b) {
        Some(v) => Ok(v),
        None => Err(Error::Overflow),
    }
}

/// Multiplies two integers, failing on overflow.
#[inline]
pub(crate) const fn mul(a: i64, b: i64) -> Result<i64, Error> {
    match a.checked_mul(b) {
        Some(v) => Ok(v),
        None => Err(Error::Overflow),
    }
}

/// Negates an integer, failing for `i64::MIN`.
#[inline]
pub(crate) const fn neg(a: i64) -> Result<i64, Error> {
    match a.checked_neg() {
        Some(v) => Ok(v),
        None => Err(Error::Overflow),
    }
}

/// Narrows an integer to `i32`, failing if it does not fit.
#[inline]
pub(crate) fn to_i32(a: i64) -> Result<i32, Error> {
    i32::try_from(a).map_err(|_| Error::Overflow)
}

/// Narrows a wide integer to `i64`, failing if it does not fit.
#[inline]
pub(crate) fn narrow(a: i128) -> Result<i64, Error> {
    i64::try_from(a).map_err(|_| Error::Overflow)
}

/// Returns the quotient and remainder of a division rounded towards `-∞`.
///
/// The remainder always has the sign of the divisor, so for a positive
/// divisor it lies in `[0, b)`.
///
/// The divisor must be non-zero and the pair `(i64::MIN, -1)` is not
/// supported; both are excluded by all call sites which only divide by
/// positive constants.
#[inline]
pub(crate) const fn floor_div_mod(a: i64, b: i64) -> (i64, i64) {
    let q = a / b;
    let r = a % b;
    if r != 0 && ((r ^ b) < 0) {
        (q - 1, r + b)
    } else {
        (q, r)
    }
}

/// Returns the quotient of a division rounded towards `-∞`.
#[inline]
pub(crate) const fn floor_div(a: i64, b: i64) -> i64 {
    floor_div_mod(a, b).0
}

/// Returns the remainder of a division rounded towards `-∞`.
#[inline]
pub(crate) const fn floor_mod(a: i64, b: i64) -> i64 {
    floor_div_mod(a, b).1
}

/// Subtracts an amount by adding its negation with the provided `plus`
/// operation.
///
/// `i64::MIN` has no negation, so it is subtracted in two steps as
/// `i64::MAX + 1`.
pub(crate) fn minus_with<T>(
    value: T,
    amount: i64,
    plus: impl Fn(T, i64) -> Result<T, Error>,
) -> Result<T, Error> {
    if amount == i64::MIN {
        plus(plus(value, i64::MAX)?, 1)
    } else {
        plus(value, -amount)
    }
}

/// Computes `a * b / d` without intermediate overflow, truncating towards
/// zero.
///
/// Fails with [`Error::DivisionByZero`] if `d` is zero and with
/// [`Error::Overflow`] if the quotient does not fit in 64 bits.
pub(crate) fn mul_div(a: i64, b: i64, d: i64) -> Result<i64, Error> {
    if d == 0 {
        return Err(Error::DivisionByZero);
    }
    // The product of two 64-bit values always fits in 128 bits; only
    // `i64::MIN * i64::MIN / -1` could overflow the division itself.
    let product = (a as i128) * (b as i128);
    product
        .checked_div(d as i128)
        .ok_or(Error::Overflow)
        .and_then(narrow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(7, 3, 2, 1)]
    #[case(-7, 3, -3, 2)]
    #[case(7, -3, -3, -2)]
    #[case(-7, -3, 2, -1)]
    #[case(-6, 3, -2, 0)]
    #[case(0, 5, 0, 0)]
    #[case(i64::MIN, NANOS_PER_SECOND, -9_223_372_037, 145_224_192)]
    #[case(i64::MAX, NANOS_PER_SECOND, 9_223_372_036, 854_775_807)]
    fn floor_division(#[case] a: i64, #[case] b: i64, #[case] q: i64, #[case] r: i64) {
        assert_eq!(floor_div_mod(a, b), (q, r));
        assert_eq!(floor_div(a, b), q);
        assert_eq!(floor_mod(a, b), r);
    }

    #[test]
    fn checked_ops() {
        assert_eq!(add(i64::MAX, 0), Ok(i64::MAX));
        assert_eq!(add(i64::MAX, 1), Err(Error::Overflow));
        assert_eq!(sub(i64::MIN, 1), Err(Error::Overflow));
        assert_eq!(mul(i64::MAX / 2, 2), Ok(i64::MAX - 1));
        assert_eq!(mul(i64::MAX / 2 + 1, 2), Err(Error::Overflow));
        assert_eq!(neg(i64::MIN), Err(Error::Overflow));
        assert_eq!(neg(i64::MAX), Ok(-i64::MAX));
        assert_eq!(to_i32(i32::MAX as i64 + 1), Err(Error::Overflow));
        assert_eq!(to_i32(i32::MIN as i64), Ok(i32::MIN));
    }

    #[test]
    fn wide_mul_div() {
        assert_eq!(mul_div(i64::MAX, 1_000, 1_000), Ok(i64::MAX));
        assert_eq!(mul_div(i64::MAX, 3, 2), Err(Error::Overflow));
        assert_eq!(mul_div(7, 1, -3), Ok(-2));
        assert_eq!(mul_div(-7, 1, 3), Ok(-2));
        assert_eq!(mul_div(1, 1, 0), Err(Error::DivisionByZero));
        assert_eq!(mul_div(i64::MIN, 1, -1), Err(Error::Overflow));
    }
}
