//! Time-zone identifiers and the seam to external zone rules.
//!
//! This module only handles the syntax of zone ids. Region ids such as
//! `Europe/Paris` are resolved to rules by a [`ZoneRulesProvider`] supplied
//! by the caller, typically backed by the IANA time-zone database.

use core::fmt;

use crate::{Instant, ZoneOffset};

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

#[cfg(feature = "alloc")]
use crate::{Error, RangeError};

/// The rules that determine the offset of a zone at any instant.
pub trait ZoneRules {
    /// Returns `true` if the offset never changes.
    fn is_fixed_offset(&self) -> bool;

    /// Returns the offset in effect at the specified instant.
    fn offset_at(&self, instant: Instant) -> ZoneOffset;
}

impl<R: ZoneRules + ?Sized> ZoneRules for &R {
    fn is_fixed_offset(&self) -> bool {
        (**self).is_fixed_offset()
    }

    fn offset_at(&self, instant: Instant) -> ZoneOffset {
        (**self).offset_at(instant)
    }
}

/// A source of zone rules for region ids.
///
/// # Examples
///
/// ```
/// use iso_time::{Instant, ZoneId, ZoneOffset, ZoneRulesProvider};
///
/// struct Fixed;
///
/// impl ZoneRulesProvider for Fixed {
///     type Rules = ZoneOffset;
///
///     fn rules_for(&self, region: &str) -> Option<ZoneOffset> {
///         match region {
///             "Asia/Tokyo" => ZoneOffset::of_hours(9).ok(),
///             _ => None,
///         }
///     }
/// }
///
/// let tokyo = ZoneId::of("Asia/Tokyo").unwrap();
/// let offset = tokyo.offset_at(Instant::EPOCH, &Fixed).unwrap();
/// assert_eq!(offset.to_string(), "+09:00");
///
/// let paris = ZoneId::of("Europe/Paris").unwrap();
/// assert!(paris.offset_at(Instant::EPOCH, &Fixed).is_err());
/// ```
pub trait ZoneRulesProvider {
    /// The rules returned by this provider.
    type Rules: ZoneRules;

    /// Returns the rules of a region, or `None` if the region is unknown.
    fn rules_for(&self, region: &str) -> Option<Self::Rules>;
}

/// Zone rules that are either a fixed offset or provided for a region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedRules<R> {
    /// The rules of a fixed-offset zone.
    Fixed(ZoneOffset),
    /// The rules of a region.
    Region(R),
}

impl<R: ZoneRules> ZoneRules for ResolvedRules<R> {
    fn is_fixed_offset(&self) -> bool {
        match self {
            Self::Fixed(_) => true,
            Self::Region(rules) => rules.is_fixed_offset(),
        }
    }

    fn offset_at(&self, instant: Instant) -> ZoneOffset {
        match self {
            Self::Fixed(offset) => *offset,
            Self::Region(rules) => rules.offset_at(instant),
        }
    }
}

/// The prefix of an offset-based zone id such as `UTC+01:00`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ZonePrefix {
    /// `UTC`.
    Utc,
    /// `GMT`.
    Gmt,
    /// `UT`.
    Ut,
}

impl ZonePrefix {
    /// Returns the prefix text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utc => "UTC",
            Self::Gmt => "GMT",
            Self::Ut => "UT",
        }
    }
}

impl fmt::Display for ZonePrefix {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// Legacy three-letter zone ids and their replacements, sorted by id.
///
/// These ids are ambiguous and not accepted by [`ZoneId::of`]; use
/// [`ZoneId::of_with_aliases`] to resolve them.
pub const SHORT_IDS: [(&str, &str); 28] = [
    ("ACT", "Australia/Darwin"),
    ("AET", "Australia/Sydney"),
    ("AGT", "America/Argentina/Buenos_Aires"),
    ("ART", "Africa/Cairo"),
    ("AST", "America/Anchorage"),
    ("BET", "America/Sao_Paulo"),
    ("BST", "Asia/Dhaka"),
    ("CAT", "Africa/Harare"),
    ("CNT", "America/St_Johns"),
    ("CST", "America/Chicago"),
    ("CTT", "Asia/Shanghai"),
    ("EAT", "Africa/Addis_Ababa"),
    ("ECT", "Europe/Paris"),
    ("EST", "-05:00"),
    ("HST", "-10:00"),
    ("IET", "America/Indiana/Indianapolis"),
    ("IST", "Asia/Kolkata"),
    ("JST", "Asia/Tokyo"),
    ("MIT", "Pacific/Apia"),
    ("MST", "-07:00"),
    ("NET", "Asia/Yerevan"),
    ("NST", "Pacific/Auckland"),
    ("PLT", "Asia/Karachi"),
    ("PNT", "America/Phoenix"),
    ("PRT", "America/Puerto_Rico"),
    ("PST", "America/Los_Angeles"),
    ("SST", "Pacific/Guadalcanal"),
    ("VST", "Asia/Ho_Chi_Minh"),
];

/// Returns the replacement of a legacy short id.
#[cfg(feature = "alloc")]
fn short_id_target(id: &str) -> Option<&'static str> {
    SHORT_IDS
        .binary_search_by(|(short, _)| (*short).cmp(id))
        .ok()
        .map(|idx| SHORT_IDS[idx].1)
}

/// Returns `true` if the id matches `[A-Za-z][A-Za-z0-9~/._+-]+`.
#[cfg(feature = "alloc")]
fn is_valid_region_id(id: &str) -> bool {
    let bytes = id.as_bytes();

    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1..]
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b"~/._+-".contains(&b))
}

/// A time-zone identifier.
///
/// A zone id is either a fixed offset (`+02:00`), a fixed offset behind a
/// `UTC`, `GMT` or `UT` prefix (`UTC+02:00`) or a region id
/// (`Europe/Paris`). Region ids are only checked for syntax; their rules
/// come from a [`ZoneRulesProvider`].
///
/// # Examples
///
/// ```
/// use iso_time::{ZoneId, ZoneOffset};
///
/// let zone = ZoneId::of("GMT-2").unwrap();
/// assert_eq!(zone.to_string(), "GMT-02:00");
/// assert_eq!(zone.normalized(), ZoneId::Offset(ZoneOffset::of_hours(-2).unwrap()));
///
/// assert_eq!(ZoneId::of("UTC").unwrap().to_string(), "UTC");
/// assert_eq!(ZoneId::of_with_aliases("EST").unwrap().to_string(), "-05:00");
/// assert_eq!(ZoneId::of("America/New_York").unwrap().to_string(), "America/New_York");
/// ```
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZoneId {
    /// A fixed offset.
    Offset(ZoneOffset),
    /// A fixed offset behind a prefix, written as the bare prefix for a
    /// zero offset.
    Prefixed {
        /// The prefix.
        prefix: ZonePrefix,
        /// The offset.
        offset: ZoneOffset,
    },
    /// A region id.
    Region(String),
}

#[cfg(feature = "alloc")]
impl ZoneId {
    /// Parses a zone id.
    ///
    /// Ids that start with a sign, or that are one character long, are
    /// parsed as offsets. Ids that start with `UTC`, `GMT` or `UT` followed by
    /// a sign are parsed as prefixed offsets. Everything else must be a
    /// syntactically valid region id.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_time::{Error, RangeError, ZoneId};
    ///
    /// assert!(ZoneId::of("Z").is_ok());
    /// assert!(ZoneId::of("UT+01:30").is_ok());
    /// assert!(ZoneId::of("Etc/GMT+5").is_ok());
    /// assert_eq!(ZoneId::of("UTC+25"), Err(Error::Range(RangeError::InvalidZoneId)));
    /// assert_eq!(ZoneId::of("#Paris"), Err(Error::Range(RangeError::InvalidZoneId)));
    /// ```
    pub fn of(id: &str) -> Result<Self, Error> {
        if id.len() <= 1 || id.starts_with('+') || id.starts_with('-') {
            return ZoneOffset::of(id).map(Self::Offset);
        }
        for prefix in [ZonePrefix::Utc, ZonePrefix::Gmt, ZonePrefix::Ut] {
            if let Some(rest) = id.strip_prefix(prefix.as_str()) {
                return Self::of_prefixed(id, prefix, rest);
            }
        }

        Self::of_region(id)
    }

    /// Parses a zone id after replacing a legacy short id from
    /// [`SHORT_IDS`].
    pub fn of_with_aliases(id: &str) -> Result<Self, Error> {
        Self::of(short_id_target(id).unwrap_or(id))
    }

    /// Parses a zone id and checks that a region id is known to the
    /// provider.
    ///
    /// Returns [`Error::UnknownZone`] for an unknown region.
    pub fn of_checked<P: ZoneRulesProvider>(id: &str, provider: &P) -> Result<Self, Error> {
        let zone = Self::of(id)?;
        zone.rules(provider)?;

        Ok(zone)
    }

    fn of_prefixed(id: &str, prefix: ZonePrefix, rest: &str) -> Result<Self, Error> {
        if rest.is_empty() {
            return Ok(Self::Prefixed {
                prefix,
                offset: ZoneOffset::UTC,
            });
        }
        if !rest.starts_with('+') && !rest.starts_with('-') {
            return Self::of_region(id);
        }
        let offset =
            ZoneOffset::of(rest).map_err(|_| Error::Range(RangeError::InvalidZoneId))?;

        Ok(Self::Prefixed { prefix, offset })
    }

    fn of_region(id: &str) -> Result<Self, Error> {
        if !is_valid_region_id(id) {
            return Err(RangeError::InvalidZoneId.into());
        }

        Ok(Self::Region(id.into()))
    }

    /// Returns the canonical text of the id.
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Returns the offset of a fixed-offset zone id, whether prefixed or not.
    pub const fn offset(&self) -> Option<ZoneOffset> {
        match self {
            Self::Offset(offset) | Self::Prefixed { offset, .. } => Some(*offset),
            Self::Region(_) => None,
        }
    }

    /// Returns a bare offset for fixed-offset zone ids and a copy of the id
    /// otherwise.
    pub fn normalized(&self) -> Self {
        match self.offset() {
            Some(offset) => Self::Offset(offset),
            None => self.clone(),
        }
    }

    /// Returns a bare offset if the zone rules are fixed and a copy of the id
    /// otherwise.
    ///
    /// Unknown regions are returned unchanged.
    pub fn normalized_with<P: ZoneRulesProvider>(&self, provider: &P) -> Self {
        match self.rules(provider) {
            Ok(rules) if rules.is_fixed_offset() => Self::Offset(rules.offset_at(Instant::EPOCH)),
            _ => self.clone(),
        }
    }

    /// Returns the rules of the zone.
    ///
    /// Fixed-offset zones do not consult the provider.
    pub fn rules<P: ZoneRulesProvider>(
        &self,
        provider: &P,
    ) -> Result<ResolvedRules<P::Rules>, Error> {
        match self {
            Self::Offset(offset) | Self::Prefixed { offset, .. } => {
                Ok(ResolvedRules::Fixed(*offset))
            }
            Self::Region(region) => provider
                .rules_for(region)
                .map(ResolvedRules::Region)
                .ok_or(Error::UnknownZone),
        }
    }

    /// Returns the offset of the zone at the specified instant.
    pub fn offset_at<P: ZoneRulesProvider>(
        &self,
        instant: Instant,
        provider: &P,
    ) -> Result<ZoneOffset, Error> {
        self.rules(provider).map(|rules| rules.offset_at(instant))
    }
}

#[cfg(feature = "alloc")]
impl From<ZoneOffset> for ZoneId {
    fn from(offset: ZoneOffset) -> Self {
        Self::Offset(offset)
    }
}

#[cfg(feature = "alloc")]
impl fmt::Display for ZoneId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(offset) => fmt::Display::fmt(offset, fmt),
            Self::Prefixed { prefix, offset } if *offset == ZoneOffset::UTC => {
                fmt.write_str(prefix.as_str())
            }
            Self::Prefixed { prefix, offset } => write!(fmt, "{}{}", prefix, offset),
            Self::Region(region) => fmt.write_str(region),
        }
    }
}

#[cfg(feature = "alloc")]
impl core::str::FromStr for ZoneId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::of(s)
    }
}

#[cfg(all(feature = "alloc", feature = "serde"))]
crate::impl_serde_via_str!(ZoneId, "a zone id");

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use rstest::rstest;

    struct TestProvider;

    #[derive(Debug, PartialEq)]
    struct Dst;

    impl ZoneRules for Dst {
        fn is_fixed_offset(&self) -> bool {
            false
        }

        fn offset_at(&self, instant: Instant) -> ZoneOffset {
            let hours = if instant.epoch_second() < 0 { 1 } else { 2 };
            ZoneOffset::of_hours(hours).unwrap()
        }
    }

    impl ZoneRulesProvider for TestProvider {
        type Rules = ResolvedRules<Dst>;

        fn rules_for(&self, region: &str) -> Option<Self::Rules> {
            match region {
                "Europe/Paris" => Some(ResolvedRules::Region(Dst)),
                "Etc/GMT-3" => Some(ResolvedRules::Fixed(ZoneOffset::of_hours(3).unwrap())),
                _ => None,
            }
        }
    }

    fn offset(hours: i32, minutes: i32) -> ZoneOffset {
        ZoneOffset::of_hours_minutes(hours, minutes).unwrap()
    }

    #[rstest]
    #[case("Z", ZoneId::Offset(ZoneOffset::UTC), "Z")]
    #[case("+01", ZoneId::Offset(offset(1, 0)), "+01:00")]
    #[case("-0130", ZoneId::Offset(offset(-1, -30)), "-01:30")]
    #[case("UTC", ZoneId::Prefixed { prefix: ZonePrefix::Utc, offset: ZoneOffset::UTC }, "UTC")]
    #[case("GMT", ZoneId::Prefixed { prefix: ZonePrefix::Gmt, offset: ZoneOffset::UTC }, "GMT")]
    #[case("UT", ZoneId::Prefixed { prefix: ZonePrefix::Ut, offset: ZoneOffset::UTC }, "UT")]
    #[case("UTC+0", ZoneId::Prefixed { prefix: ZonePrefix::Utc, offset: ZoneOffset::UTC }, "UTC")]
    #[case("GMT+01:30", ZoneId::Prefixed { prefix: ZonePrefix::Gmt, offset: offset(1, 30) }, "GMT+01:30")]
    #[case("UT-5", ZoneId::Prefixed { prefix: ZonePrefix::Ut, offset: offset(-5, 0) }, "UT-05:00")]
    #[case("UTC0", ZoneId::Region("UTC0".into()), "UTC0")]
    #[case("GMT0", ZoneId::Region("GMT0".into()), "GMT0")]
    #[case("UCT", ZoneId::Region("UCT".into()), "UCT")]
    #[case("Europe/Paris", ZoneId::Region("Europe/Paris".into()), "Europe/Paris")]
    #[case("America/Argentina/Buenos_Aires", ZoneId::Region("America/Argentina/Buenos_Aires".into()), "America/Argentina/Buenos_Aires")]
    #[case("Etc/GMT+10", ZoneId::Region("Etc/GMT+10".into()), "Etc/GMT+10")]
    #[case("EST", ZoneId::Region("EST".into()), "EST")]
    fn parse_valid(#[case] id: &str, #[case] expected: ZoneId, #[case] canonical: &str) {
        let zone = ZoneId::of(id).unwrap();
        assert_eq!(zone, expected);
        assert_eq!(zone.id(), canonical);
        assert_eq!(ZoneId::of(canonical), Ok(zone));
    }

    #[rstest]
    #[case("", Error::Range(RangeError::InvalidOffset))]
    #[case("A", Error::Range(RangeError::InvalidOffset))]
    #[case("+19:00", Error::Range(RangeError::InvalidOffset))]
    #[case("UTC+19", Error::Range(RangeError::InvalidZoneId))]
    #[case("GMT-1:00", Error::Range(RangeError::InvalidZoneId))]
    #[case("0Europe", Error::Range(RangeError::InvalidZoneId))]
    #[case("Europe/Pa ris", Error::Range(RangeError::InvalidZoneId))]
    #[case("Europe/Paris!", Error::Range(RangeError::InvalidZoneId))]
    fn parse_invalid(#[case] id: &str, #[case] error: Error) {
        assert_eq!(ZoneId::of(id), Err(error));
    }

    #[test]
    fn short_ids() {
        assert!(SHORT_IDS.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(
            ZoneId::of_with_aliases("EST"),
            Ok(ZoneId::Offset(offset(-5, 0)))
        );
        assert_eq!(
            ZoneId::of_with_aliases("HST"),
            Ok(ZoneId::Offset(offset(-10, 0)))
        );
        assert_eq!(
            ZoneId::of_with_aliases("VST"),
            Ok(ZoneId::Region("Asia/Ho_Chi_Minh".into()))
        );
        assert_eq!(
            ZoneId::of_with_aliases("Europe/London"),
            Ok(ZoneId::Region("Europe/London".into()))
        );
    }

    #[test]
    fn normalization() {
        let prefixed = ZoneId::of("UTC+02:00").unwrap();
        assert_eq!(prefixed.normalized(), ZoneId::Offset(offset(2, 0)));
        assert_eq!(prefixed.offset(), Some(offset(2, 0)));

        let fixed_region = ZoneId::of("Etc/GMT-3").unwrap();
        assert_eq!(fixed_region.normalized(), fixed_region);
        assert_eq!(
            fixed_region.normalized_with(&TestProvider),
            ZoneId::Offset(offset(3, 0))
        );

        let paris = ZoneId::of("Europe/Paris").unwrap();
        assert_eq!(paris.normalized_with(&TestProvider), paris);
        let unknown = ZoneId::of("Mars/Olympus").unwrap();
        assert_eq!(unknown.normalized_with(&TestProvider), unknown);
    }

    #[test]
    fn rules_lookup() {
        let paris = ZoneId::of_checked("Europe/Paris", &TestProvider).unwrap();
        let before = Instant::of_epoch_second(-1).unwrap();
        assert_eq!(paris.offset_at(before, &TestProvider), Ok(offset(1, 0)));
        assert_eq!(paris.offset_at(Instant::EPOCH, &TestProvider), Ok(offset(2, 0)));
        assert!(!paris.rules(&TestProvider).unwrap().is_fixed_offset());

        assert_eq!(
            ZoneId::of_checked("Mars/Olympus", &TestProvider),
            Err(Error::UnknownZone)
        );
        assert_eq!(
            ZoneId::of_checked("+03:00", &TestProvider),
            Ok(ZoneId::Offset(offset(3, 0)))
        );
        assert_eq!(
            ZoneId::of("GMT").unwrap().rules(&TestProvider),
            Ok(ResolvedRules::Fixed(ZoneOffset::UTC))
        );
    }
}
