//! ISO-8601 text formats.
//!
//! Every value type is formatted through [`Display`](fmt::Display) and parsed
//! through [`FromStr`] or its inherent `parse` method. Parsers accept the
//! output of the corresponding formatter, ASCII letters in either case and
//! both `.` and `,` as fractional-second separators.

use core::fmt;
use core::str::FromStr;

use crate::date_time::{days_in_month, fmt_year, from_epoch_day, to_epoch_day};
use crate::math::{
    floor_div_mod, NANOS_PER_MICRO, NANOS_PER_MILLI, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::{
    Duration, Error, Instant, LocalDate, LocalTime, ParseError, ParseErrorKind, Period,
    ZoneOffset,
};

/// A number of fixed width and the byte offset at which it starts.
#[derive(Copy, Clone)]
struct Number {
    value: u32,
    index: usize,
}

impl Number {
    fn check(self, min: u32, max: u32) -> Result<u32, ParseError> {
        if (min..=max).contains(&self.value) {
            Ok(self.value)
        } else {
            Err(ParseError::new(ParseErrorKind::OutOfRange, self.index))
        }
    }
}

/// A signed component of a duration or period, such as `-12` in `PT-12H`.
#[derive(Copy, Clone)]
struct Component {
    value: i64,
    negative: bool,
    index: usize,
}

/// A byte cursor over ASCII text.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos)
    }

    /// Returns the error for the byte under the cursor.
    fn unexpected(&self) -> ParseError {
        match self.peek() {
            None => self.error(ParseErrorKind::UnexpectedEnd),
            Some(_) => self.error(ParseErrorKind::UnexpectedCharacter),
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            return true;
        }

        false
    }

    fn eat_letter(&mut self, letter: u8) -> bool {
        match self.peek() {
            Some(b) if b.eq_ignore_ascii_case(&letter) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn eat_decimal_separator(&mut self) -> bool {
        self.eat(b'.') || self.eat(b',')
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_letter(&mut self, letter: u8) -> Result<(), ParseError> {
        if self.eat_letter(letter) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Consumes an optional sign and returns `true` if it is `-`.
    fn sign(&mut self) -> Option<bool> {
        if self.eat(b'-') {
            Some(true)
        } else if self.eat(b'+') {
            Some(false)
        } else {
            None
        }
    }

    fn digits(&mut self) -> &'a [u8] {
        let bytes = self.bytes;
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }

        &bytes[start..self.pos]
    }

    /// Parses exactly `width` digits.
    fn fixed(&mut self, width: usize) -> Result<Number, ParseError> {
        let index = self.pos;
        let digits = self.digits();
        if digits.is_empty() {
            return Err(self.unexpected());
        }
        if digits.len() != width {
            return Err(ParseError::new(ParseErrorKind::InvalidFieldWidth, index));
        }

        Ok(Number {
            value: fold_digits(digits) as u32,
            index,
        })
    }

    /// Parses up to 9 fractional digits as a number of nanoseconds.
    fn fraction(&mut self, min_digits: usize) -> Result<u32, ParseError> {
        let index = self.pos;
        let digits = self.digits();
        if digits.len() < min_digits {
            return Err(self.unexpected());
        }
        if digits.len() > 9 {
            return Err(ParseError::new(ParseErrorKind::InvalidFieldWidth, index));
        }

        Ok(fold_digits(digits) as u32 * 10u32.pow(9 - digits.len() as u32))
    }

    /// Parses a year of 4 to 10 digits.
    ///
    /// A sign is mandatory beyond 4 digits and `+` is rejected for 4 digits.
    fn year(&mut self) -> Result<i64, ParseError> {
        let index = self.pos;
        let sign = self.sign();
        let digits_index = self.pos;
        let digits = self.digits();
        if digits.is_empty() {
            return Err(self.unexpected());
        }
        let len = digits.len();
        if !(4..=10).contains(&len) || (sign.is_none() && len > 4) {
            return Err(ParseError::new(ParseErrorKind::InvalidFieldWidth, digits_index));
        }
        if sign == Some(false) && len == 4 {
            return Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, index));
        }

        let year = fold_digits(digits);
        match sign {
            Some(true) if year == 0 => Err(ParseError::new(ParseErrorKind::OutOfRange, index)),
            Some(true) => Ok(-year),
            _ => Ok(year),
        }
    }

    /// Parses `[+-]?[0-9]+`, or leaves the cursor untouched if there is no
    /// digit.
    fn signed_number(&mut self) -> Result<Option<Component>, ParseError> {
        let start = self.pos;
        let negative = self.sign() == Some(true);
        let index = self.pos;
        let digits = self.digits();
        if digits.is_empty() {
            self.pos = start;
            return Ok(None);
        }

        let mut value: i64 = 0;
        for &d in digits {
            let d = (d - b'0') as i64;
            value = value
                .checked_mul(10)
                .and_then(|v| {
                    if negative {
                        v.checked_sub(d)
                    } else {
                        v.checked_add(d)
                    }
                })
                .ok_or(ParseError::new(ParseErrorKind::Overflow, index))?;
        }

        Ok(Some(Component {
            value,
            negative,
            index: start,
        }))
    }

    /// Parses a signed number followed by the `unit` letter, or leaves the
    /// cursor untouched if the input does not match.
    fn component(&mut self, unit: u8) -> Result<Option<Component>, ParseError> {
        let start = self.pos;
        let Some(component) = self.signed_number()? else {
            return Ok(None);
        };
        if self.eat_letter(unit) {
            return Ok(Some(component));
        }
        self.pos = start;

        Ok(None)
    }

    /// Parses the seconds of a duration with an optional fraction, or leaves
    /// the cursor untouched if the input does not match.
    fn seconds_component(&mut self) -> Result<Option<(Component, u32)>, ParseError> {
        let start = self.pos;
        let Some(component) = self.signed_number()? else {
            return Ok(None);
        };
        let nanos = if self.eat_decimal_separator() {
            self.fraction(0)?
        } else {
            0
        };
        if self.eat_letter(b'S') {
            return Ok(Some((component, nanos)));
        }
        self.pos = start;

        Ok(None)
    }

    fn finish(&self) -> Result<(), ParseError> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::TrailingCharacters))
        }
    }
}

fn fold_digits(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0, |acc, &d| acc * 10 + (d - b'0') as i64)
}

/// Parses `year-MM-DD` and checks the month and day.
fn date(cursor: &mut Cursor<'_>) -> Result<(i64, u8, u8), ParseError> {
    let year = cursor.year()?;
    cursor.expect(b'-')?;
    let month = cursor.fixed(2)?;
    cursor.expect(b'-')?;
    let day = cursor.fixed(2)?;

    let month = month.check(1, 12)? as u8;
    let day = day.check(1, days_in_month(year, month) as u32)? as u8;

    Ok((year, month, day))
}

/// Parses `HH:MM[:SS[.f]]` without checking the ranges of the fields.
fn time(
    cursor: &mut Cursor<'_>,
    seconds_required: bool,
) -> Result<(Number, Number, Number, u32), ParseError> {
    let hour = cursor.fixed(2)?;
    cursor.expect(b':')?;
    let minute = cursor.fixed(2)?;
    if !seconds_required && cursor.peek() != Some(b':') {
        let second = Number {
            value: 0,
            index: cursor.pos,
        };
        return Ok((hour, minute, second, 0));
    }
    cursor.expect(b':')?;
    let second = cursor.fixed(2)?;
    let nano = if cursor.eat_decimal_separator() {
        cursor.fraction(1)?
    } else {
        0
    };

    Ok((hour, minute, second, nano))
}

/// Parses `Z` or `±HH:MM[:SS]` into a number of seconds.
fn offset(cursor: &mut Cursor<'_>) -> Result<i32, ParseError> {
    if cursor.eat_letter(b'Z') {
        return Ok(0);
    }
    let index = cursor.pos;
    let Some(negative) = cursor.sign() else {
        return Err(cursor.unexpected());
    };
    let hours = cursor.fixed(2)?.value as i32;
    cursor.expect(b':')?;
    let minutes = cursor.fixed(2)?.value as i32;
    let seconds = if cursor.eat(b':') {
        cursor.fixed(2)?.value as i32
    } else {
        0
    };
    let sign = if negative { -1 } else { 1 };

    ZoneOffset::of_hours_minutes_seconds(sign * hours, sign * minutes, sign * seconds)
        .map(|offset| offset.total_seconds())
        .map_err(|_| ParseError::new(ParseErrorKind::OutOfRange, index))
}

/// Writes a fraction of second with 3, 6 or 9 digits, or nothing if zero.
fn fmt_fraction(fmt: &mut fmt::Formatter<'_>, nano: u32) -> fmt::Result {
    let nano = nano as i64;
    if nano == 0 {
        Ok(())
    } else if nano % NANOS_PER_MILLI == 0 {
        write!(fmt, ".{:03}", nano / NANOS_PER_MILLI)
    } else if nano % NANOS_PER_MICRO == 0 {
        write!(fmt, ".{:06}", nano / NANOS_PER_MICRO)
    } else {
        write!(fmt, ".{:09}", nano)
    }
}

fn parse_duration(text: &str) -> Result<Duration, ParseError> {
    let mut cursor = Cursor::new(text);
    let negate = cursor.sign() == Some(true);
    cursor.expect_letter(b'P')?;

    let mut seconds: i128 = 0;
    let mut nanos: i64 = 0;
    let mut accumulate = |component: Component, scale: i64| -> Result<(), ParseError> {
        let value = component
            .value
            .checked_mul(scale)
            .ok_or(ParseError::new(ParseErrorKind::Overflow, component.index))?;
        seconds += value as i128;
        Ok(())
    };

    let mut found = false;
    if let Some(days) = cursor.component(b'D')? {
        accumulate(days, SECONDS_PER_DAY)?;
        found = true;
    }
    if cursor.eat_letter(b'T') {
        let mut found_time = false;
        for (unit, scale) in [(b'H', SECONDS_PER_HOUR), (b'M', SECONDS_PER_MINUTE)] {
            if let Some(component) = cursor.component(unit)? {
                accumulate(component, scale)?;
                found_time = true;
            }
        }
        if let Some((component, fraction)) = cursor.seconds_component()? {
            accumulate(component, 1)?;
            nanos = if component.negative {
                -(fraction as i64)
            } else {
                fraction as i64
            };
            found_time = true;
        }
        if !found_time {
            return Err(cursor.error(ParseErrorKind::MissingField));
        }
        found = true;
    }
    if !found {
        return Err(cursor.error(ParseErrorKind::MissingField));
    }
    cursor.finish()?;

    let overflow = ParseError::new(ParseErrorKind::Overflow, 0);
    let seconds = i64::try_from(seconds).map_err(|_| overflow)?;
    let duration = Duration::of_seconds_adjusted(seconds, nanos).map_err(|_| overflow)?;
    if negate {
        duration.negated().map_err(|_| overflow)
    } else {
        Ok(duration)
    }
}

fn parse_period(text: &str) -> Result<Period, ParseError> {
    let mut cursor = Cursor::new(text);
    let negate = cursor.sign() == Some(true);
    cursor.expect_letter(b'P')?;

    let mut amounts = [0i32; 4];
    let mut found = false;
    for (amount, unit) in amounts.iter_mut().zip([b'Y', b'M', b'W', b'D']) {
        if let Some(component) = cursor.component(unit)? {
            *amount = i32::try_from(component.value)
                .map_err(|_| ParseError::new(ParseErrorKind::Overflow, component.index))?;
            found = true;
        }
    }
    if !found {
        return Err(cursor.error(ParseErrorKind::MissingField));
    }
    cursor.finish()?;

    let overflow = ParseError::new(ParseErrorKind::Overflow, 0);
    let [years, months, weeks, days] = amounts;
    let days = weeks
        .checked_mul(7)
        .and_then(|weeks| days.checked_add(weeks))
        .ok_or(overflow)?;
    let period = Period::of(years, months, days);
    if negate {
        period.negated().map_err(|_| overflow)
    } else {
        Ok(period)
    }
}

fn parse_instant(text: &str) -> Result<Instant, ParseError> {
    let mut cursor = Cursor::new(text);
    let (year, month, day) = date(&mut cursor)?;
    cursor.expect_letter(b'T')?;
    let (hour, minute, second, nano) = time(&mut cursor, true)?;
    let offset = offset(&mut cursor)?;
    cursor.finish()?;

    let minute = minute.check(0, 59)?;
    // 24:00 denotes the end of the day.
    let (hour, extra_day) = if hour.value == 24 && minute == 0 && second.value == 0 && nano == 0 {
        (0, 1)
    } else {
        (hour.check(0, 23)?, 0)
    };
    // A leap second is folded into the preceding second.
    let second = if hour == 23 && minute == 59 && second.value == 60 {
        59
    } else {
        second.check(0, 59)?
    };

    let epoch_day = to_epoch_day(year, month, day) + extra_day;
    let epoch_second = epoch_day * SECONDS_PER_DAY
        + hour as i64 * SECONDS_PER_HOUR
        + minute as i64 * SECONDS_PER_MINUTE
        + second as i64
        - offset as i64;

    Instant::of_epoch_second_adjusted(epoch_second, nano as i64)
        .map_err(|_| ParseError::new(ParseErrorKind::OutOfRange, 0))
}

fn parse_local_date(text: &str) -> Result<LocalDate, ParseError> {
    let mut cursor = Cursor::new(text);
    let (year, month, day) = date(&mut cursor)?;
    cursor.finish()?;

    i32::try_from(year)
        .ok()
        .and_then(|year| LocalDate::of(year, month, day).ok())
        .ok_or(ParseError::new(ParseErrorKind::OutOfRange, 0))
}

fn parse_local_time(text: &str) -> Result<LocalTime, ParseError> {
    let mut cursor = Cursor::new(text);
    let (hour, minute, second, nano) = time(&mut cursor, false)?;
    cursor.finish()?;

    let hour = hour.check(0, 23)?;
    let minute = minute.check(0, 59)?;
    let second = second.check(0, 59)?;

    LocalTime::of(hour as u8, minute as u8, second as u8, nano)
        .map_err(|_| ParseError::new(ParseErrorKind::OutOfRange, 0))
}

impl Duration {
    /// Parses an ISO-8601 duration such as `PT8H6M12.345S` or `P2DT3H`.
    ///
    /// The grammar is `[+-]P[nD][T[nH][nM][n[.f]S]]`. Each component may
    /// carry its own sign and a leading sign negates the whole duration. Days
    /// are exactly 24 hours long. The fraction has at most 9 digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Duration, ErrorKind};
    ///
    /// assert_eq!(Duration::parse("PT20.345S"), Ok(Duration::of_millis(20_345)));
    /// assert_eq!(Duration::parse("-P1DT-1H").unwrap().seconds(), -82_800);
    /// assert_eq!(Duration::parse("pt-0,5s").unwrap().to_string(), "PT-0.5S");
    ///
    /// assert_eq!(Duration::parse("P1Y").unwrap_err().kind(), ErrorKind::Parse);
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        Ok(parse_duration(text)?)
    }
}

impl fmt::Display for Duration {
    /// Formats the duration as `PT[nH][nM][n.fS]`.
    ///
    /// Days are never used. Components are omitted when zero, except for a
    /// zero duration which is written as `PT0S`.
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return fmt.write_str("PT0S");
        }
        let seconds = self.seconds();
        let nanos = self.nanos();
        // A negative duration with a fraction is written with the fraction
        // on the side of zero.
        let fractional_negative = seconds < 0 && nanos > 0;
        let total = if fractional_negative { seconds + 1 } else { seconds };
        let hours = total / SECONDS_PER_HOUR;
        let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let secs = total % SECONDS_PER_MINUTE;

        fmt.write_str("PT")?;
        if hours != 0 {
            write!(fmt, "{}H", hours)?;
        }
        if minutes != 0 {
            write!(fmt, "{}M", minutes)?;
        }
        if secs == 0 && nanos == 0 && (hours != 0 || minutes != 0) {
            return Ok(());
        }
        if fractional_negative && secs == 0 {
            fmt.write_str("-0")?;
        } else {
            write!(fmt, "{}", secs)?;
        }
        if nanos > 0 {
            let mut fraction = if seconds < 0 {
                1_000_000_000 - nanos
            } else {
                nanos
            };
            let mut width = 9;
            while fraction % 10 == 0 {
                fraction /= 10;
                width -= 1;
            }
            write!(fmt, ".{:0width$}", fraction, width = width)?;
        }

        fmt.write_str("S")
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

impl Instant {
    /// Parses an instant such as `2007-12-03T10:15:30.00Z`.
    ///
    /// The offset may be `Z` or `±HH:MM[:SS]`. The end of day `24:00:00` and
    /// the leap second `23:59:60` are accepted, the latter being read as
    /// `23:59:59`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Instant;
    ///
    /// let t = Instant::parse("2008-06-30T11:30:00+02:00").unwrap();
    /// assert_eq!(t.to_string(), "2008-06-30T09:30:00Z");
    ///
    /// let leap = Instant::parse("2016-12-31T23:59:60Z").unwrap();
    /// assert_eq!(leap.to_string(), "2016-12-31T23:59:59Z");
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        Ok(parse_instant(text)?)
    }
}

impl fmt::Display for Instant {
    /// Formats the instant in UTC as `yyyy-MM-ddTHH:mm:ss[.f]Z` with 0, 3, 6
    /// or 9 fractional digits.
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (epoch_day, second_of_day) = floor_div_mod(self.epoch_second(), SECONDS_PER_DAY);
        let (year, month, day) = from_epoch_day(epoch_day);

        fmt_year(fmt, year)?;
        write!(
            fmt,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            month,
            day,
            second_of_day / SECONDS_PER_HOUR,
            second_of_day / SECONDS_PER_MINUTE % 60,
            second_of_day % 60
        )?;
        fmt_fraction(fmt, self.nano())?;

        fmt.write_str("Z")
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

impl LocalDate {
    /// Parses a date such as `2007-12-03`.
    ///
    /// Years beyond 4 digits require a sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{ErrorKind, LocalDate};
    ///
    /// assert_eq!(LocalDate::parse("+12345-01-01").unwrap().year(), 12_345);
    /// assert_eq!(LocalDate::parse("2007-02-29").unwrap_err().kind(), ErrorKind::Parse);
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        Ok(parse_local_date(text)?)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_year(fmt, self.year() as i64)?;

        write!(fmt, "-{:02}-{:02}", self.month(), self.day_of_month())
    }
}

impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

impl LocalTime {
    /// Parses a time such as `10:15` or `10:15:30.5`.
    pub fn parse(text: &str) -> Result<Self, Error> {
        Ok(parse_local_time(text)?)
    }
}

impl fmt::Display for LocalTime {
    /// Formats the time as `HH:mm[:ss[.f]]`.
    ///
    /// Seconds are omitted when they and the fraction are zero.
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:02}:{:02}", self.hour(), self.minute())?;
        if self.second() > 0 || self.nano() > 0 {
            write!(fmt, ":{:02}", self.second())?;
            fmt_fraction(fmt, self.nano())?;
        }

        Ok(())
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

impl Period {
    /// Parses a period such as `P1Y2M3D` or `P-2W`.
    ///
    /// Each component may carry its own sign and a leading sign negates the
    /// whole period. Weeks are converted to days.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::Period;
    ///
    /// assert_eq!(Period::parse("P2W3D"), Ok(Period::of_days(17)));
    /// assert_eq!(Period::parse("-P1Y-2M"), Ok(Period::of(-1, 2, 0)));
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        Ok(parse_period(text)?)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return fmt.write_str("P0D");
        }
        fmt.write_str("P")?;
        if self.years() != 0 {
            write!(fmt, "{}Y", self.years())?;
        }
        if self.months() != 0 {
            write!(fmt, "{}M", self.months())?;
        }
        if self.days() != 0 {
            write!(fmt, "{}D", self.days())?;
        }

        Ok(())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
crate::impl_serde_via_str!(Duration, "an ISO-8601 duration");
#[cfg(feature = "serde")]
crate::impl_serde_via_str!(Instant, "an ISO-8601 instant");
#[cfg(feature = "serde")]
crate::impl_serde_via_str!(LocalDate, "an ISO-8601 date");
#[cfg(feature = "serde")]
crate::impl_serde_via_str!(LocalTime, "an ISO-8601 time");
#[cfg(feature = "serde")]
crate::impl_serde_via_str!(Period, "an ISO-8601 period");

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn duration(seconds: i64, nanos: i64) -> Duration {
        Duration::of_seconds_adjusted(seconds, nanos).unwrap()
    }

    fn parse_error(kind: ParseErrorKind, index: usize) -> Error {
        Error::Parse(ParseError::new(kind, index))
    }

    #[rstest]
    #[case("PT0S", 0, 0)]
    #[case("PT12S", 12, 0)]
    #[case("PT+12S", 12, 0)]
    #[case("PT-12S", -12, 0)]
    #[case("PT9223372036854775807S", i64::MAX, 0)]
    #[case("PT-9223372036854775808S", i64::MIN, 0)]
    #[case("PT0.1S", 0, 100_000_000)]
    #[case("PT1.123456789S", 1, 123_456_789)]
    #[case("PT-0.1S", -1, 900_000_000)]
    #[case("PT-1.12S", -2, 880_000_000)]
    #[case("PT12M-0.35S", 719, 650_000_000)]
    #[case("P12DT1.35S", 1_036_801, 350_000_000)]
    #[case("PT001S", 1, 0)]
    #[case("PT1.S", 1, 0)]
    #[case("P0D", 0, 0)]
    #[case("P1DT0H0M0S", 86_400, 0)]
    #[case("P-3DT2H1M1S", -259_200 + 7_261, 0)]
    #[case("PT-2H-5M8S", -7_492, 0)]
    #[case("P0DT-3M", -180, 0)]
    fn parse_duration_valid(#[case] text: &str, #[case] seconds: i64, #[case] nanos: i64) {
        let expected = duration(seconds, nanos);
        assert_eq!(Duration::parse(text), Ok(expected));
        assert_eq!(Duration::parse(&text.replace('.', ",")), Ok(expected));
        assert_eq!(Duration::parse(&text.to_lowercase()), Ok(expected));
        assert_eq!(Duration::parse(&format!("+{}", text)), Ok(expected));
        assert_eq!(Duration::parse(&format!("-{}", text)), expected.negated().map_err(|_| parse_error(ParseErrorKind::Overflow, 0)));
    }

    #[rstest]
    #[case("", parse_error(ParseErrorKind::UnexpectedEnd, 0))]
    #[case(" PT0S", parse_error(ParseErrorKind::UnexpectedCharacter, 0))]
    #[case("PT0S ", parse_error(ParseErrorKind::TrailingCharacters, 4))]
    #[case("AT0S", parse_error(ParseErrorKind::UnexpectedCharacter, 0))]
    #[case("PTS", parse_error(ParseErrorKind::MissingField, 2))]
    #[case("PT0A", parse_error(ParseErrorKind::MissingField, 2))]
    #[case("P1Y", parse_error(ParseErrorKind::MissingField, 1))]
    #[case("P3W", parse_error(ParseErrorKind::MissingField, 1))]
    #[case("P2YT30S", parse_error(ParseErrorKind::MissingField, 1))]
    #[case("P1DT", parse_error(ParseErrorKind::MissingField, 4))]
    #[case("PT-.S", parse_error(ParseErrorKind::MissingField, 2))]
    #[case("PT1ABC2S", parse_error(ParseErrorKind::MissingField, 2))]
    #[case("PT2H1ABC2S", parse_error(ParseErrorKind::TrailingCharacters, 4))]
    #[case("PT2.-3", parse_error(ParseErrorKind::MissingField, 2))]
    #[case("PT0.1234567891S", parse_error(ParseErrorKind::InvalidFieldWidth, 4))]
    #[case("PT123456789123456789123456789S", parse_error(ParseErrorKind::Overflow, 2))]
    #[case("PT92233720368547758071S", parse_error(ParseErrorKind::Overflow, 2))]
    #[case("PT-9223372036854775808.1S", parse_error(ParseErrorKind::Overflow, 0))]
    #[case("P106751991167301D", parse_error(ParseErrorKind::Overflow, 1))]
    #[case("PT9223372036854775807S1S", parse_error(ParseErrorKind::TrailingCharacters, 22))]
    fn parse_duration_invalid(#[case] text: &str, #[case] error: Error) {
        assert_eq!(Duration::parse(text), Err(error));
    }

    #[test]
    fn parse_duration_sum_overflow() {
        assert_eq!(
            Duration::parse("PT2562047788015215H30M8S"),
            Err(parse_error(ParseErrorKind::Overflow, 0))
        );
        assert_eq!(
            Duration::parse("-PT-9223372036854775808S"),
            Err(parse_error(ParseErrorKind::Overflow, 0))
        );
    }

    #[rstest]
    #[case(0, 0, "PT0S")]
    #[case(0, 1, "PT0.000000001S")]
    #[case(0, 100_000_000, "PT0.1S")]
    #[case(0, 123_450_000, "PT0.12345S")]
    #[case(59, 0, "PT59S")]
    #[case(60, 0, "PT1M")]
    #[case(61, 0, "PT1M1S")]
    #[case(3_661, 0, "PT1H1M1S")]
    #[case(86_400, 0, "PT24H")]
    #[case(-1, 0, "PT-1S")]
    #[case(-1, 1_000, "PT-0.999999S")]
    #[case(-1, 900_000_000, "PT-0.1S")]
    #[case(-60, 100_000_000, "PT-59.9S")]
    #[case(-59, -900_000_000, "PT-59.9S")]
    #[case(-60, -100_000_000, "PT-1M-0.1S")]
    #[case(i64::MAX, 0, "PT2562047788015215H30M7S")]
    #[case(i64::MIN, 0, "PT-2562047788015215H-30M-8S")]
    fn format_duration(#[case] seconds: i64, #[case] nanos: i64, #[case] text: &str) {
        let d = duration(seconds, nanos);
        assert_eq!(d.to_string(), text);
        assert_eq!(text.parse::<Duration>(), Ok(d));
    }

    #[test]
    fn duration_round_trip_at_bounds() {
        for d in [Duration::MIN, Duration::MAX, Duration::ZERO, Duration::of_nanos(-1)] {
            assert_eq!(Duration::parse(&d.to_string()), Ok(d));
        }
    }

    #[rstest]
    #[case(0, 0, "1970-01-01T00:00:00Z")]
    #[case(0, 560_000_000, "1970-01-01T00:00:00.560Z")]
    #[case(0, 560_000, "1970-01-01T00:00:00.000560Z")]
    #[case(0, 560, "1970-01-01T00:00:00.000000560Z")]
    #[case(0, 567, "1970-01-01T00:00:00.000000567Z")]
    #[case(-1, 0, "1969-12-31T23:59:59Z")]
    #[case(1_214_818_200, 0, "2008-06-30T09:30:00Z")]
    #[case(253_402_300_799, 0, "9999-12-31T23:59:59Z")]
    #[case(253_402_300_800, 0, "+10000-01-01T00:00:00Z")]
    #[case(-62_167_219_200, 0, "0000-01-01T00:00:00Z")]
    #[case(-62_167_219_201, 0, "-0001-12-31T23:59:59Z")]
    #[case(Instant::MIN_SECOND, 0, "-1000000000-01-01T00:00:00Z")]
    #[case(Instant::MAX_SECOND, 999_999_999, "+1000000000-12-31T23:59:59.999999999Z")]
    fn format_instant(#[case] seconds: i64, #[case] nanos: i64, #[case] text: &str) {
        let t = Instant::of_epoch_second_adjusted(seconds, nanos).unwrap();
        assert_eq!(t.to_string(), text);
        assert_eq!(text.parse::<Instant>(), Ok(t));
    }

    #[rstest]
    #[case("2008-06-30t09:30:00z", "2008-06-30T09:30:00Z")]
    #[case("2008-06-30T09:30:00.5Z", "2008-06-30T09:30:00.500Z")]
    #[case("2008-06-30T09:30:00,123456Z", "2008-06-30T09:30:00.123456Z")]
    #[case("2008-06-30T11:30:00+02:00", "2008-06-30T09:30:00Z")]
    #[case("2008-06-30T09:00:00-00:30:15", "2008-06-30T09:30:15Z")]
    #[case("2016-12-31T23:59:60Z", "2016-12-31T23:59:59Z")]
    #[case("2016-12-31T23:59:60.25Z", "2016-12-31T23:59:59.250Z")]
    #[case("2016-12-31T24:00:00Z", "2017-01-01T00:00:00Z")]
    fn parse_instant_lenient(#[case] text: &str, #[case] canonical: &str) {
        assert_eq!(Instant::parse(text).map(|t| t.to_string()).as_deref(), Ok(canonical));
    }

    #[rstest]
    #[case("2008-06-30T09:30:00", parse_error(ParseErrorKind::UnexpectedEnd, 19))]
    #[case("2008-06-30T09:30Z", parse_error(ParseErrorKind::UnexpectedCharacter, 16))]
    #[case("2008-06-30 09:30:00Z", parse_error(ParseErrorKind::UnexpectedCharacter, 10))]
    #[case("2008-02-30T00:00:00Z", parse_error(ParseErrorKind::OutOfRange, 8))]
    #[case("2008-13-01T00:00:00Z", parse_error(ParseErrorKind::OutOfRange, 5))]
    #[case("2008-06-30T12:59:60Z", parse_error(ParseErrorKind::OutOfRange, 17))]
    #[case("2008-06-30T24:00:01Z", parse_error(ParseErrorKind::OutOfRange, 11))]
    #[case("2008-06-30T09:60:00Z", parse_error(ParseErrorKind::OutOfRange, 14))]
    #[case("2008-06-30T09:30:00+19:00", parse_error(ParseErrorKind::OutOfRange, 19))]
    #[case("2008-06-30T09:30:00.Z", parse_error(ParseErrorKind::UnexpectedCharacter, 20))]
    #[case("2008-06-30T09:30:00Zx", parse_error(ParseErrorKind::TrailingCharacters, 20))]
    #[case("+2008-06-30T09:30:00Z", parse_error(ParseErrorKind::UnexpectedCharacter, 0))]
    #[case("12008-06-30T09:30:00Z", parse_error(ParseErrorKind::InvalidFieldWidth, 0))]
    #[case("-0000-06-30T09:30:00Z", parse_error(ParseErrorKind::OutOfRange, 0))]
    #[case("+1000000001-01-01T00:00:00Z", parse_error(ParseErrorKind::OutOfRange, 0))]
    fn parse_instant_invalid(#[case] text: &str, #[case] error: Error) {
        assert_eq!(Instant::parse(text), Err(error));
    }

    #[rstest]
    #[case(2008, 7, 1, "2008-07-01")]
    #[case(0, 1, 1, "0000-01-01")]
    #[case(-1, 12, 31, "-0001-12-31")]
    #[case(-12_345, 2, 3, "-12345-02-03")]
    #[case(10_000, 1, 1, "+10000-01-01")]
    fn format_local_date(#[case] year: i32, #[case] month: u8, #[case] day: u8, #[case] text: &str) {
        let date = LocalDate::of(year, month, day).unwrap();
        assert_eq!(date.to_string(), text);
        assert_eq!(text.parse::<LocalDate>(), Ok(date));
    }

    #[test]
    fn local_date_round_trip_at_bounds() {
        for date in [LocalDate::MIN, LocalDate::MAX, LocalDate::EPOCH] {
            assert_eq!(LocalDate::parse(&date.to_string()), Ok(date));
        }
        assert_eq!(LocalDate::MIN.to_string(), "-999999999-01-01");
        assert_eq!(LocalDate::MAX.to_string(), "+999999999-12-31");
    }

    #[rstest]
    #[case("2008-7-01", parse_error(ParseErrorKind::InvalidFieldWidth, 5))]
    #[case("2008-07-1", parse_error(ParseErrorKind::InvalidFieldWidth, 8))]
    #[case("208-07-01", parse_error(ParseErrorKind::InvalidFieldWidth, 0))]
    #[case("2008-07", parse_error(ParseErrorKind::UnexpectedEnd, 7))]
    #[case("2008/07/01", parse_error(ParseErrorKind::UnexpectedCharacter, 4))]
    #[case("2007-02-29", parse_error(ParseErrorKind::OutOfRange, 8))]
    #[case("2008-07-01T", parse_error(ParseErrorKind::TrailingCharacters, 10))]
    #[case("+1000000000-01-01", parse_error(ParseErrorKind::OutOfRange, 0))]
    #[case("+10000000000-01-01", parse_error(ParseErrorKind::InvalidFieldWidth, 1))]
    fn parse_local_date_invalid(#[case] text: &str, #[case] error: Error) {
        assert_eq!(LocalDate::parse(text), Err(error));
    }

    #[rstest]
    #[case(0, 30, 0, 0, "00:30")]
    #[case(12, 30, 40, 0, "12:30:40")]
    #[case(12, 30, 0, 500_000_000, "12:30:00.500")]
    #[case(1, 2, 3, 4_000, "01:02:03.000004")]
    #[case(23, 59, 59, 999_999_999, "23:59:59.999999999")]
    fn format_local_time(
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] second: u8,
        #[case] nano: u32,
        #[case] text: &str,
    ) {
        let time = LocalTime::of(hour, minute, second, nano).unwrap();
        assert_eq!(time.to_string(), text);
        assert_eq!(text.parse::<LocalTime>(), Ok(time));
    }

    #[rstest]
    #[case("12:30:00", "12:30")]
    #[case("12:30:00.000", "12:30")]
    #[case("12:30:00,1", "12:30:00.100")]
    #[case("12:30:00.1234", "12:30:00.123400")]
    fn parse_local_time_lenient(#[case] text: &str, #[case] canonical: &str) {
        assert_eq!(LocalTime::parse(text).map(|t| t.to_string()).as_deref(), Ok(canonical));
    }

    #[rstest]
    #[case("24:00", parse_error(ParseErrorKind::OutOfRange, 0))]
    #[case("12:60", parse_error(ParseErrorKind::OutOfRange, 3))]
    #[case("12:30:60", parse_error(ParseErrorKind::OutOfRange, 6))]
    #[case("12:3", parse_error(ParseErrorKind::InvalidFieldWidth, 3))]
    #[case("12:30:", parse_error(ParseErrorKind::UnexpectedEnd, 6))]
    #[case("12:30:40.", parse_error(ParseErrorKind::UnexpectedEnd, 9))]
    #[case("12:30:40.1234567890", parse_error(ParseErrorKind::InvalidFieldWidth, 9))]
    #[case("12", parse_error(ParseErrorKind::UnexpectedEnd, 2))]
    fn parse_local_time_invalid(#[case] text: &str, #[case] error: Error) {
        assert_eq!(LocalTime::parse(text), Err(error));
    }

    #[rstest]
    #[case(Period::ZERO, "P0D")]
    #[case(Period::of(1, 2, 3), "P1Y2M3D")]
    #[case(Period::of(0, -14, 0), "P-14M")]
    #[case(Period::of(-1, 0, 5), "P-1Y5D")]
    fn format_period(#[case] period: Period, #[case] text: &str) {
        assert_eq!(period.to_string(), text);
        assert_eq!(text.parse::<Period>(), Ok(period));
    }

    #[rstest]
    #[case("p1y", Period::of_years(1))]
    #[case("P1W", Period::of_days(7))]
    #[case("P1Y2M3W4D", Period::of(1, 2, 25))]
    #[case("-P1Y2M", Period::of(-1, -2, 0))]
    #[case("+P-1D", Period::of_days(-1))]
    fn parse_period_valid(#[case] text: &str, #[case] expected: Period) {
        assert_eq!(Period::parse(text), Ok(expected));
    }

    #[rstest]
    #[case("P", parse_error(ParseErrorKind::MissingField, 1))]
    #[case("PT1S", parse_error(ParseErrorKind::MissingField, 1))]
    #[case("P1D2Y", parse_error(ParseErrorKind::TrailingCharacters, 3))]
    #[case("P2147483648Y", parse_error(ParseErrorKind::Overflow, 1))]
    #[case("P306783379W", parse_error(ParseErrorKind::Overflow, 0))]
    #[case("-P-2147483648D", parse_error(ParseErrorKind::Overflow, 0))]
    fn parse_period_invalid(#[case] text: &str, #[case] error: Error) {
        assert_eq!(Period::parse(text), Err(error));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_text() {
        let t = Instant::parse("2008-06-30T09:30:00.5Z").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2008-06-30T09:30:00.500Z\"");
        assert_eq!(serde_json::from_str::<Instant>(&json).unwrap(), t);

        let d: Duration = serde_json::from_str("\"PT1.5S\"").unwrap();
        assert_eq!(d, Duration::of_millis(1_500));
        assert_eq!(serde_json::to_string(&Period::of_days(3)).unwrap(), "\"P3D\"");
        assert!(serde_json::from_str::<LocalDate>("\"2007-02-29\"").is_err());
        assert_eq!(
            serde_json::from_str::<LocalTime>("\"10:15\"").unwrap(),
            LocalTime::of_hm(10, 15).unwrap()
        );
    }
}
