//! Immutable ISO-8601 durations, instants, dates and times with exact
//! overflow detection.
//!
//! # Overview
//!
//! This crate provides the value types of the ISO-8601 calendar system:
//!
//! - [`Duration`], a signed amount of time with nanosecond precision,
//! - [`Instant`], a point on the UTC time-line with nanosecond precision,
//! - [`LocalDate`], a date in the proleptic Gregorian calendar without time
//!   zone,
//! - [`LocalTime`], a time of day without date nor time zone,
//! - [`Period`], a date-based amount of years, months and days,
//! - [`ZoneOffset`] and [`ZoneId`], the syntax of fixed offsets and time-zone
//!   identifiers.
//!
//! All values are immutable and `Copy` (except `ZoneId`, which owns its
//! region id) so they can be freely shared between threads.
//!
//! Every arithmetic operation is checked. Failures are reported through a
//! single [`Error`] type whose [`kind`](Error::kind) distinguishes a numeric
//! overflow, a value outside the documented range of a type, an unsupported
//! unit or field and a parse failure. The `Add`/`Sub`/`Neg` operators are
//! provided for convenience and panic where the corresponding checked method
//! would return an error.
//!
//! Time is measured in the UTC time-scale where every day lasts exactly
//! 86400 seconds: leap seconds are never accounted for, and a leap second
//! read from text is folded into the preceding second.
//!
//!
//! # Text formats
//!
//! All value types implement `Display` and `FromStr` with the ISO-8601
//! formats, such as `PT8H6M12.345S` for a duration,
//! `2007-12-03T10:15:30.500Z` for an instant, `2007-12-03` for a date,
//! `10:15:30` for a time and `P1Y2M3D` for a period. Formatting is canonical
//! and parsing accepts anything the formatter produces.
//!
//!
//! # Features flags
//!
//! ### Support for `no-std`
//!
//! By default, this crate enables the `std` feature to access the operating
//! system clock and allow conversion to/from `time::SystemTime`, but
//! specifying `default-features = false` makes it `no-std`-compatible. The
//! `alloc` feature, implied by `std`, is required for [`ZoneId`].
//!
//! ### Support for time-related crates
//!
//! Conversion methods to and from the date and time types of the [chrono]
//! crate are available with the `chrono` feature.
//!
//! ### Serialization
//!
//! All value types can be (de)serialized with `serde` as their ISO-8601 text
//! by activating the `serde` feature. Units, fields and error types are
//! serialized with derived implementations.
//!
//! ### Logging on embedded targets
//!
//! The `defmt` feature implements `defmt::Format` for all `Copy` types,
//! including the error types.
//!
//! [chrono]: https://crates.io/crates/chrono
//!
//!
//! # Examples
#![cfg_attr(
    feature = "std",
    doc = r##"
```
use iso_time::{Duration, Instant, LocalDate, Period, Unit, ZoneOffset};

// Date arithmetic clamps the day of the month.
let date = LocalDate::of(2008, 2, 29).unwrap();
assert_eq!(date.plus_years(1).unwrap().to_string(), "2009-02-28");

// Whole months elapsed between two dates.
let end: LocalDate = "2009-05-15".parse().unwrap();
assert_eq!(date.until(end, Unit::Months), Ok(14));
assert_eq!(date.until_period(end), Period::of(1, 2, 16));

// Instants and durations.
let t0: Instant = "2008-06-30T09:30:00Z".parse().unwrap();
let t1 = t0.plus(Duration::parse("PT1H0.5S").unwrap()).unwrap();
assert_eq!(t1.to_string(), "2008-06-30T10:30:00.500Z");

// Local date and time at an offset.
let offset = ZoneOffset::of("+02:00").unwrap();
let (date, time) = t1.to_date_time(offset).unwrap();
assert_eq!(format!("{}T{}", date, time), "2008-06-30T12:30:00.500");

// Current time from the system clock.
let now = Instant::now();
println!("{} elapsed since {}", Duration::between(t0, now), t0);
```"##
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Implements `Serialize` and `Deserialize` through `Display` and `FromStr`.
#[cfg(feature = "serde")]
macro_rules! impl_serde_via_str {
    ($ty:ty, $expecting:literal) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct Visitor;

                impl serde::de::Visitor<'_> for Visitor {
                    type Value = $ty;

                    fn expecting(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        fmt.write_str($expecting)
                    }

                    fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<$ty, E> {
                        text.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    };
}
#[cfg(feature = "serde")]
pub(crate) use impl_serde_via_str;

mod clock;
mod date_time;
mod duration;
mod errors;
mod instant;
mod iso;
mod local_date;
mod local_time;
mod math;
mod offset;
mod period;
mod units;
mod zone;

pub use clock::{Clock, FixedClock, OffsetClock};
#[cfg(feature = "std")]
pub use clock::{MonotonicClock, SystemClock};
pub use duration::Duration;
pub use errors::{ArgumentError, Error, ErrorKind, ParseError, ParseErrorKind, RangeError};
pub use instant::Instant;
pub use local_date::{DatesUntil, LocalDate, Weekday};
pub use local_time::LocalTime;
pub use offset::ZoneOffset;
pub use period::Period;
pub use units::{Field, Unit, ValueRange};
#[cfg(feature = "alloc")]
pub use zone::ZoneId;
pub use zone::{ResolvedRules, ZonePrefix, ZoneRules, ZoneRulesProvider, SHORT_IDS};
