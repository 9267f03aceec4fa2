use jiff::{Timestamp, Zoned};

use crate::{codec::DateRangeFields, Codec, Error};

/// A pair of instants in time, each with an attached time zone.
///
/// This is the internal representation of a range. It carries no opinion on
/// how it is serialized. When the `serde` crate feature is enabled, it is
/// (de)serialized as a `start` and `end` pair of RFC 9557 timestamps using
/// Jiff's own `Zoned` support.
///
/// No ordering between `start` and `end` is enforced. A range whose end
/// comes before its start is structurally valid. Use
/// [`InstantRange::is_inverted`] to detect it.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use jiff_daterange::InstantRange;
///
/// let start = date(2024, 3, 1).at(9, 0, 0, 0).in_tz("Europe/Paris")?;
/// let end = date(2024, 3, 1).at(17, 30, 0, 0).in_tz("Europe/Paris")?;
/// let range = InstantRange::new(start, end);
///
/// let lunch = date(2024, 3, 1).at(12, 0, 0, 0).in_tz("Europe/Paris")?;
/// assert!(range.contains(lunch.timestamp()));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct InstantRange {
    start: Zoned,
    end: Zoned,
}

impl InstantRange {
    /// Create a new range from the instants given.
    pub fn new(start: Zoned, end: Zoned) -> InstantRange {
        InstantRange { start, end }
    }

    /// Returns the first instant in this range.
    pub fn start(&self) -> &Zoned {
        &self.start
    }

    /// Returns the last instant in this range.
    ///
    /// The end is inclusive. For ranges produced by decoding a
    /// [`DateRange`], this is the last nanosecond of the end date.
    pub fn end(&self) -> &Zoned {
        &self.end
    }

    /// Consumes this range and returns its start and end.
    pub fn into_parts(self) -> (Zoned, Zoned) {
        (self.start, self.end)
    }

    /// Returns true when the end of this range comes before its start.
    pub fn is_inverted(&self) -> bool {
        self.end.timestamp() < self.start.timestamp()
    }

    /// Returns true when the timestamp given is within this range, with
    /// both ends included.
    ///
    /// An inverted range contains nothing.
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start.timestamp() <= timestamp && timestamp <= self.end.timestamp()
    }
}

/// A range of instants that serializes as a pair of calendar dates and a
/// time zone.
///
/// A `DateRange` has the same representation as an [`InstantRange`] and
/// dereferences to one. Converting between the two is free. The only
/// difference is in how a `DateRange` is encoded and decoded. Namely, by
/// way of [`DateRangeFields`] using the default [`Codec`]:
///
/// ```text
/// {"start": "YYYY-MM-DD", "end": "YYYY-MM-DD", "timezone": "<zone name>"}
/// ```
///
/// When decoded, `start` is the first instant of the start date and `end` is
/// the last nanosecond of the end date, both in the named time zone.
///
/// # Example
///
/// ```
/// use jiff_daterange::{DateRange, DateRangeFields};
///
/// let fields = DateRangeFields::new("2024-01-01", "2024-01-31", "UTC");
/// let range: DateRange = fields.to_date_range()?;
/// assert_eq!(range.start().to_string(), "2024-01-01T00:00:00+00:00[UTC]");
/// assert_eq!(
///     range.end().to_string(),
///     "2024-01-31T23:59:59.999999999+00:00[UTC]",
/// );
/// assert_eq!(range.to_fields()?, fields);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateRange(InstantRange);

impl DateRange {
    /// Create a new date range directly from the instants given.
    ///
    /// This bypasses decoding, so the instants need not sit on day
    /// boundaries and need not share a time zone. Encoding such a range may
    /// fail or lose precision.
    pub fn new(start: Zoned, end: Zoned) -> DateRange {
        DateRange(InstantRange::new(start, end))
    }

    /// Encode this range with the default [`Codec`].
    ///
    /// This fails when the zone labels of the start and end differ.
    pub fn to_fields(&self) -> Result<DateRangeFields, Error> {
        Codec::new().encode(self)
    }

    /// Returns a copy of this range as an [`InstantRange`].
    pub fn to_instant_range(&self) -> InstantRange {
        self.0.clone()
    }

    /// Returns a borrow of this range as an [`InstantRange`].
    pub fn as_instant_range(&self) -> &InstantRange {
        &self.0
    }

    /// Converts this range to an [`InstantRange`].
    pub fn into_instant_range(self) -> InstantRange {
        self.0
    }
}

impl From<InstantRange> for DateRange {
    fn from(x: InstantRange) -> DateRange {
        DateRange(x)
    }
}

impl From<DateRange> for InstantRange {
    fn from(x: DateRange) -> InstantRange {
        x.0
    }
}

impl core::ops::Deref for DateRange {
    type Target = InstantRange;

    fn deref(&self) -> &InstantRange {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateRange {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde::{ser, Serialize};

        self.to_fields().map_err(ser::Error::custom)?.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateRange {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateRange, D::Error> {
        use serde::{de, Deserialize};

        DateRangeFields::deserialize(deserializer)?
            .to_date_range()
            .map_err(de::Error::custom)
    }
}
