use jiff::{civil::date, tz::offset, SignedDuration, Timestamp, ToSpan};
use jiff_daterange::{Codec, DateRangeFields};

use crate::Result;

#[test]
fn default_time_zone_is_utc() -> Result {
    let _ = env_logger::try_init();

    let range =
        DateRangeFields::new("2023-01-01", "2023-01-01", "").to_date_range()?;
    let start: Timestamp = "2023-01-01T00:00:00Z".parse().unwrap();
    let end: Timestamp = "2023-01-01T23:59:59.999999999Z".parse().unwrap();
    assert_eq!(range.start().timestamp(), start);
    assert_eq!(range.end().timestamp(), end);
    assert_eq!(range.start().offset(), offset(0));
    assert_eq!(range.end().offset(), offset(0));

    Ok(())
}

#[test]
fn named_time_zone() -> Result {
    let range = Codec::new().decode_parts(
        "2024-06-01",
        "2024-06-30",
        "Europe/Paris",
    )?;
    let start: Timestamp = "2024-05-31T22:00:00Z".parse().unwrap();
    let end: Timestamp = "2024-06-30T21:59:59.999999999Z".parse().unwrap();
    assert_eq!(range.start().timestamp(), start);
    assert_eq!(range.end().timestamp(), end);
    assert_eq!(range.start().time_zone().iana_name(), Some("Europe/Paris"));
    assert_eq!(range.end().time_zone().iana_name(), Some("Europe/Paris"));

    Ok(())
}

#[test]
fn unknown_time_zone() {
    let err = DateRangeFields::new("2023-01-01", "2023-01-02", "Not/AZone")
        .to_date_range()
        .unwrap_err();
    assert!(err.is_unknown_time_zone());
    assert!(!err.is_malformed_date());
    assert!(
        err.to_string().starts_with("failed to find time zone `Not/AZone`"),
        "unexpected message: {err}",
    );
}

#[test]
fn malformed_dates() {
    let codec = Codec::new();
    let bad = [
        "2023-13-01",
        "2023-00-10",
        "2023-02-29",
        "2023-04-31",
        "2023-1-01",
        "23-01-01",
        "2023/01/01",
        "20230101",
        "2023-01-01T00:00:00Z",
        " 2023-01-01",
        "2023-01-01 ",
        "+2023-01-01",
        "-0001-01-01",
        "",
    ];
    for input in bad {
        let err = codec.decode_parts(input, "2023-12-31", "").unwrap_err();
        assert!(err.is_malformed_date(), "start {input:?}: {err}");
        assert!(
            err.to_string().starts_with("failed to parse start date: "),
            "start {input:?}: {err}",
        );

        let err = codec.decode_parts("2023-01-01", input, "").unwrap_err();
        assert!(err.is_malformed_date(), "end {input:?}: {err}");
        assert!(
            err.to_string().starts_with("failed to parse end date: "),
            "end {input:?}: {err}",
        );
    }
}

#[test]
fn end_date_boundaries() -> Result {
    let codec = Codec::new();
    let cases = [
        ("2024-02-29", date(2024, 3, 1)),
        ("2023-02-28", date(2023, 3, 1)),
        ("2023-04-30", date(2023, 5, 1)),
        ("2023-12-31", date(2024, 1, 1)),
        ("0000-12-31", date(1, 1, 1)),
        ("9999-12-30", date(9999, 12, 31)),
    ];
    for (input, next) in cases {
        let range =
            codec.decode_parts("2000-01-01", input, "Australia/Sydney")?;
        let midnight = next.in_tz("Australia/Sydney").unwrap();
        assert_eq!(
            range.end().checked_add(1.nanosecond()).unwrap(),
            midnight,
            "end date {input}",
        );
    }

    Ok(())
}

#[test]
fn end_date_out_of_range() {
    let err = Codec::new()
        .decode_parts("2000-01-01", "9999-12-31", "")
        .unwrap_err();
    assert!(err.is_out_of_range());
}

/// The spring forward transition in New York happens on 2024-03-10. That day
/// is only 23 hours long, so the end of the range must not be computed as a
/// fixed number of 24 hour days from its start.
#[test]
fn spring_forward() -> Result {
    let range = Codec::new().decode_parts(
        "2024-03-09",
        "2024-03-10",
        "America/New_York",
    )?;
    assert_eq!(range.start().datetime(), date(2024, 3, 9).at(0, 0, 0, 0));
    assert_eq!(range.start().offset(), offset(-5));
    assert_eq!(
        range.end().datetime(),
        date(2024, 3, 10).at(23, 59, 59, 999_999_999),
    );
    assert_eq!(range.end().offset(), offset(-4));

    let length = range.end().duration_since(range.start());
    let want = SignedDuration::from_hours(47) - SignedDuration::from_nanos(1);
    assert_eq!(length, want);

    Ok(())
}

/// And the fall back transition is on 2024-11-03, which is 25 hours long.
#[test]
fn fall_back() -> Result {
    let range = Codec::new().decode_parts(
        "2024-11-03",
        "2024-11-03",
        "America/New_York",
    )?;
    assert_eq!(range.start().offset(), offset(-4));
    assert_eq!(
        range.end().datetime(),
        date(2024, 11, 3).at(23, 59, 59, 999_999_999),
    );
    assert_eq!(range.end().offset(), offset(-5));

    let length = range.end().duration_since(range.start());
    let want = SignedDuration::from_hours(25) - SignedDuration::from_nanos(1);
    assert_eq!(length, want);

    Ok(())
}

#[test]
fn inverted_range_is_not_rejected() -> Result {
    let range = Codec::new().decode_parts("2024-02-01", "2024-01-01", "")?;
    assert!(range.is_inverted());
    assert_eq!(range.start().date(), date(2024, 2, 1));
    assert_eq!(range.end().date(), date(2024, 1, 1));

    Ok(())
}

#[test]
fn single_day_contains_whole_day() -> Result {
    let range = Codec::new().decode_parts("2024-07-04", "2024-07-04", "UTC")?;
    let noon = date(2024, 7, 4).at(12, 0, 0, 0).in_tz("UTC").unwrap();
    let next = date(2024, 7, 5).in_tz("UTC").unwrap();
    assert!(range.contains(range.start().timestamp()));
    assert!(range.contains(noon.timestamp()));
    assert!(range.contains(range.end().timestamp()));
    assert!(!range.contains(next.timestamp()));

    Ok(())
}

#[test]
fn concurrent_decodes() {
    let codec = Codec::new();
    let handles: Vec<_> = ["UTC", "Asia/Tokyo", "America/Chicago", ""]
        .into_iter()
        .map(|tz| {
            std::thread::spawn(move || {
                codec.decode_parts("2024-01-01", "2024-12-31", tz).unwrap()
            })
        })
        .collect();
    for handle in handles {
        let range = handle.join().unwrap();
        assert_eq!(range.start().date(), date(2024, 1, 1));
        assert_eq!(range.end().date(), date(2024, 12, 31));
    }
}
