use jiff::{civil::date, tz::TimeZone, ToSpan};
use jiff_daterange::{Codec, DateRange, DateRangeFields, ZoneLabel};

use crate::Result;

#[test]
fn round_trip_utc() -> Result {
    let fields = DateRangeFields::new("2023-01-01", "2023-03-31", "UTC");
    let range = fields.to_date_range()?;
    assert_eq!(range.to_fields()?, fields);

    Ok(())
}

#[test]
fn round_trip_iana_name() -> Result {
    let codec = Codec::new().zone_label(ZoneLabel::IanaName);
    for tz in ["America/New_York", "Europe/London", "Australia/Lord_Howe"] {
        let fields = DateRangeFields::new("2024-01-15", "2024-12-15", tz);
        let range = codec.decode(&fields)?;
        assert_eq!(codec.encode(&range)?, fields);
    }

    Ok(())
}

#[test]
fn empty_time_zone_is_filled_in() -> Result {
    let fields = DateRangeFields::new("2023-01-01", "2023-01-02", "");
    let range = fields.to_date_range()?;
    let encoded = range.to_fields()?;
    assert_eq!(encoded.start, "2023-01-01");
    assert_eq!(encoded.end, "2023-01-02");
    assert_eq!(encoded.timezone, "UTC");

    Ok(())
}

#[test]
fn mismatched_time_zones() {
    let start = date(2024, 1, 1).in_tz("America/New_York").unwrap();
    let end = date(2024, 1, 31).in_tz("Asia/Tokyo").unwrap();
    let range = DateRange::new(start, end);

    let err = range.to_fields().unwrap_err();
    assert!(err.is_mismatched_time_zone());
    insta::assert_snapshot!(
        err,
        @"range dates have different time zones: start is in `EST` but end is in `JST`",
    );

    let err = Codec::new()
        .zone_label(ZoneLabel::IanaName)
        .encode(&range)
        .unwrap_err();
    assert!(err.is_mismatched_time_zone());
    insta::assert_snapshot!(
        err,
        @"range dates have different time zones: start is in `America/New_York` but end is in `Asia/Tokyo`",
    );
}

/// A range that crosses a daylight saving time transition decodes fine, but
/// its abbreviations differ, so it can only be encoded with IANA names.
#[test]
fn dst_crossing_range() -> Result {
    let fields =
        DateRangeFields::new("2024-10-01", "2024-11-30", "America/New_York");
    let range = fields.to_date_range()?;
    assert_eq!(range.start().offset(), jiff::tz::offset(-4));
    assert_eq!(range.end().offset(), jiff::tz::offset(-5));

    let err = range.to_fields().unwrap_err();
    assert!(err.is_mismatched_time_zone());

    let codec = Codec::new().zone_label(ZoneLabel::IanaName);
    assert_eq!(codec.encode(&range)?, fields);

    Ok(())
}

#[test]
fn dates_are_taken_in_each_instants_zone() -> Result {
    // The same two instants, viewed from two different time zones, fall on
    // different calendar dates.
    let start = date(2024, 5, 1).at(20, 0, 0, 0).in_tz("America/Denver")?;
    let end = date(2024, 5, 3).at(20, 0, 0, 0).in_tz("America/Denver")?;
    let range = DateRange::new(start.clone(), end.clone());
    let fields = range.to_fields()?;
    assert_eq!(
        fields,
        DateRangeFields::new("2024-05-01", "2024-05-03", "MDT")
    );

    let range = DateRange::new(start.in_tz("UTC")?, end.in_tz("UTC")?);
    let fields = range.to_fields()?;
    assert_eq!(
        fields,
        DateRangeFields::new("2024-05-02", "2024-05-04", "UTC")
    );

    Ok(())
}

#[test]
fn time_of_day_is_dropped() -> Result {
    let tz = TimeZone::get("Europe/Rome")?;
    let start = date(2024, 2, 10).at(13, 45, 0, 0).to_zoned(tz.clone())?;
    let end = start.checked_add(3.days().hours(5))?;
    let fields = DateRange::new(start, end).to_fields()?;
    assert_eq!(
        fields,
        DateRangeFields::new("2024-02-10", "2024-02-13", "CET")
    );

    Ok(())
}

#[test]
fn year_out_of_range() {
    let start = date(-5, 6, 1).in_tz("UTC").unwrap();
    let end = date(2024, 6, 1).in_tz("UTC").unwrap();
    let err = DateRange::new(start, end).to_fields().unwrap_err();
    assert!(err.is_out_of_range());
    assert!(!err.is_mismatched_time_zone());
}
