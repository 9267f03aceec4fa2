use jiff::{civil::Date, tz::TimeZone, ToSpan, Zoned};

use crate::{
    error::{
        codec::{Error as E, Field},
        Error, ErrorContext,
    },
    fmt::YMD,
    range::DateRange,
};

/// The time zone used when a serialized date range has an empty time zone.
pub const DEFAULT_TIME_ZONE: &str = "Etc/UTC";

/// The serialized form of a [`DateRange`].
///
/// This is the shape used on the wire:
///
/// ```text
/// {"start": "YYYY-MM-DD", "end": "YYYY-MM-DD", "timezone": "<zone name>"}
/// ```
///
/// When the `serde` crate feature is enabled, a missing or `null`
/// `timezone` deserializes to an empty string, which decodes using the
/// codec's default time zone.
///
/// Values of this type are usually transient. They are produced by
/// [`Codec::encode`] and consumed by [`Codec::decode`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DateRangeFields {
    /// The first calendar date in the range, as `YYYY-MM-DD`.
    pub start: String,
    /// The last calendar date in the range, as `YYYY-MM-DD`.
    pub end: String,
    /// The time zone of the range. When empty, decoding uses the default
    /// time zone.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_time_zone")
    )]
    pub timezone: String,
}

impl DateRangeFields {
    /// Create a new set of fields.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        timezone: impl Into<String>,
    ) -> DateRangeFields {
        DateRangeFields {
            start: start.into(),
            end: end.into(),
            timezone: timezone.into(),
        }
    }

    /// Decode these fields into a [`DateRange`] with the default [`Codec`].
    pub fn to_date_range(&self) -> Result<DateRange, Error> {
        Codec::new().decode(self)
    }
}

#[cfg(feature = "serde")]
fn deserialize_time_zone<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    use serde::Deserialize;

    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// How the zone label of an instant is computed when encoding.
///
/// The label of the start of a range becomes the serialized time zone, and
/// the labels of the start and end must agree for encoding to succeed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ZoneLabel {
    /// Use the abbreviation of the offset in effect at the instant, e.g.,
    /// `EST`, `EDT` or `UTC`.
    ///
    /// With this setting, a range in `America/New_York` that starts in
    /// winter and ends in summer cannot be encoded, since its start and end
    /// have different abbreviations.
    #[default]
    Abbreviation,
    /// Use the IANA time zone identifier attached to the instant, e.g.,
    /// `America/New_York`.
    ///
    /// When the attached time zone has no IANA identifier (for example, a
    /// fixed offset), the abbreviation is used instead.
    IanaName,
}

/// Encodes and decodes date ranges.
///
/// Decoding turns a start date, an end date and a time zone name into a
/// [`DateRange`] whose start is the first instant of the start date and
/// whose end is the last nanosecond of the end date, both in the named time
/// zone. Encoding goes the other way, and refuses to encode a range whose
/// start and end have different zone labels.
///
/// A codec has no mutable state. It is cheap to copy and can be used from
/// many threads at once.
///
/// # Example
///
/// ```
/// use jiff_daterange::{Codec, ZoneLabel};
///
/// let codec = Codec::new().zone_label(ZoneLabel::IanaName);
/// let range =
///     codec.decode_parts("2024-03-01", "2024-03-31", "America/New_York")?;
///
/// // March 10 is 23 hours long in New York, so the range is an hour short
/// // of 31 whole days.
/// let seconds = range.end().timestamp().as_second()
///     - range.start().timestamp().as_second()
///     + 1;
/// assert_eq!(seconds / 3600, 31 * 24 - 1);
///
/// let fields = codec.encode(&range)?;
/// assert_eq!(fields.start, "2024-03-01");
/// assert_eq!(fields.end, "2024-03-31");
/// assert_eq!(fields.timezone, "America/New_York");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Codec {
    default_time_zone: &'static str,
    zone_label: ZoneLabel,
}

impl Codec {
    /// Create a new codec with the default configuration.
    ///
    /// The default time zone is [`DEFAULT_TIME_ZONE`] and zone labels are
    /// abbreviations.
    pub const fn new() -> Codec {
        Codec {
            default_time_zone: DEFAULT_TIME_ZONE,
            zone_label: ZoneLabel::Abbreviation,
        }
    }

    /// Set the time zone used when decoding a range with an empty time zone.
    ///
    /// The name is not checked until it is needed by a decode.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_daterange::Codec;
    ///
    /// let codec = Codec::new().default_time_zone("Asia/Tokyo");
    /// let range = codec.decode_parts("2024-01-01", "2024-01-01", "")?;
    /// assert_eq!(range.start().time_zone().iana_name(), Some("Asia/Tokyo"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub const fn default_time_zone(self, name: &'static str) -> Codec {
        Codec { default_time_zone: name, ..self }
    }

    /// Set how zone labels are computed when encoding.
    ///
    /// The default is [`ZoneLabel::Abbreviation`].
    pub const fn zone_label(self, kind: ZoneLabel) -> Codec {
        Codec { zone_label: kind, ..self }
    }

    /// Encode a date range into its serialized fields.
    ///
    /// The start and end are each written as the calendar date they fall on
    /// in their own time zone. The serialized time zone is the zone label of
    /// the start.
    ///
    /// # Errors
    ///
    /// This returns an error when the zone labels of the start and end are
    /// different, or when either date has a year that cannot be written with
    /// four digits.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_daterange::{Codec, DateRange};
    ///
    /// let start = date(2024, 1, 1).in_tz("America/New_York")?;
    /// let end = date(2024, 1, 31).in_tz("America/New_York")?;
    /// let fields = Codec::new().encode(&DateRange::new(start, end))?;
    /// assert_eq!(fields.timezone, "EST");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn encode(&self, range: &DateRange) -> Result<DateRangeFields, Error> {
        let start_label = self.label(range.start());
        let end_label = self.label(range.end());
        if start_label != end_label {
            debug!(
                "refusing to encode date range with start in `{start_label}` \
                 and end in `{end_label}`",
            );
            return Err(Error::from(E::MismatchedTimeZone {
                start: start_label.into(),
                end: end_label.into(),
            }));
        }
        let start = YMD
            .print(range.start().date())
            .context(E::FormatDate { field: Field::Start })?;
        let end = YMD
            .print(range.end().date())
            .context(E::FormatDate { field: Field::End })?;
        Ok(DateRangeFields { start, end, timezone: start_label })
    }

    /// Decode serialized fields into a date range.
    ///
    /// This is equivalent to calling [`Codec::decode_parts`] with each of
    /// the fields.
    pub fn decode(&self, fields: &DateRangeFields) -> Result<DateRange, Error> {
        self.decode_parts(&fields.start, &fields.end, &fields.timezone)
    }

    /// Decode a start date, an end date and a time zone name into a date
    /// range.
    ///
    /// An empty time zone name is replaced by this codec's default time
    /// zone. The start of the range is midnight at the start of `start`, and
    /// the end of the range is the last nanosecond of `end`. The end is
    /// computed by advancing `end` by one calendar day and then subtracting
    /// one nanosecond from the start of that day, so days made shorter or
    /// longer by a daylight saving time transition are handled correctly.
    ///
    /// When midnight doesn't exist on a date in the time zone (because of a
    /// gap at midnight), the first instant after the gap is used.
    ///
    /// No check is made that `start` comes before `end`.
    ///
    /// # Errors
    ///
    /// This returns an error when the time zone cannot be found, when either
    /// date isn't a valid `YYYY-MM-DD` date, or when the last nanosecond of
    /// `end` cannot be represented.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_daterange::Codec;
    ///
    /// let range = Codec::new().decode_parts("2024-02-01", "2024-02-29", "")?;
    /// assert_eq!(range.start().datetime(), date(2024, 2, 1).at(0, 0, 0, 0));
    /// assert_eq!(
    ///     range.end().datetime(),
    ///     date(2024, 2, 29).at(23, 59, 59, 999_999_999),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn decode_parts(
        &self,
        start: &str,
        end: &str,
        timezone: &str,
    ) -> Result<DateRange, Error> {
        let tz = self.resolve_time_zone(timezone)?;
        let start = parse_midnight(start, &tz, Field::Start)?;
        let end = parse_midnight(end, &tz, Field::End)?;
        let end = end_of_day(&end)?;
        trace!("decoded date range from {start} to {end}");
        Ok(DateRange::new(start, end))
    }

    fn resolve_time_zone(&self, name: &str) -> Result<TimeZone, Error> {
        let name = if name.is_empty() { self.default_time_zone } else { name };
        let tz = TimeZone::get(name)
            .with_context(|| E::UnknownTimeZone { name: name.into() })?;
        trace!("resolved time zone `{name}` for date range");
        Ok(tz)
    }

    fn label(&self, zdt: &Zoned) -> String {
        let tz = zdt.time_zone();
        if self.zone_label == ZoneLabel::IanaName {
            if let Some(name) = tz.iana_name() {
                return name.to_string();
            }
        }
        tz.to_offset_info(zdt.timestamp()).abbreviation().to_string()
    }
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new()
    }
}

/// Parses a `YYYY-MM-DD` date and returns the first instant of that date
/// in the time zone given.
fn parse_midnight(
    input: &str,
    tz: &TimeZone,
    field: Field,
) -> Result<Zoned, Error> {
    let date: Date =
        YMD.parse(input).with_context(|| E::MalformedDate { field })?;
    date.to_zoned(tz.clone())
        .with_context(|| E::MidnightNotRepresentable { field })
}

/// Returns the last nanosecond of the calendar day that `zdt` is on.
///
/// The day is advanced in civil time and the result is one nanosecond before
/// the first instant of the following day. This is correct for days that
/// aren't 24 hours long, and also when the day didn't begin at midnight
/// because of a gap.
fn end_of_day(zdt: &Zoned) -> Result<Zoned, Error> {
    let date = zdt.date();
    date.tomorrow()
        .and_then(|tomorrow| tomorrow.to_zoned(zdt.time_zone().clone()))
        .and_then(|next| next.checked_sub(1.nanosecond()))
        .with_context(|| E::EndOfDayOverflow { date })
}
