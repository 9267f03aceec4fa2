/*!
This crate provides inclusive calendar date ranges for [Jiff](jiff).

A [`DateRange`] is a pair of instants in time, represented by
[`jiff::Zoned`] values. It is written and read as two calendar dates and a
time zone name:

```text
{"start": "2024-01-01", "end": "2024-01-31", "timezone": "America/New_York"}
```

When read, the start of the range is the first instant of the start date and
the end of the range is the *last* nanosecond of the end date, both in the
named time zone. That is, the range includes all of its end date. This is
computed with calendar arithmetic, so days that are 23 or 25 hours long
because of daylight saving time are handled correctly.

# Organization

* [`Codec`] encodes and decodes date ranges. It can be configured with a
default time zone (used when the serialized time zone is empty) and with how
the time zone of an instant is labeled when written. See [`ZoneLabel`].
* [`DateRangeFields`] is the serialized form of a date range.
* [`DateRange`] is the date range itself. It dereferences to an
[`InstantRange`], which is the same pair of instants without any opinion on
how it ought to be serialized. Converting between the two is free.
* [`fmt::DateFormat`] describes the strict `YYYY-MM-DD` format used for
dates.
* [`Error`] is the error type used by every fallible operation in this crate.

# Example

This shows how to use a `DateRange` inside a wire type with Serde:

```
use jiff::civil::date;
use jiff_daterange::DateRange;

#[derive(serde::Deserialize, serde::Serialize)]
struct Report {
    name: String,
    period: DateRange,
}

let json = r#"{
    "name": "january",
    "period": {"start": "2024-01-01", "end": "2024-01-31", "timezone": "UTC"}
}"#;
let report: Report = serde_json::from_str(json)?;
assert_eq!(report.period.start().date(), date(2024, 1, 1));
assert_eq!(
    report.period.end().datetime(),
    date(2024, 1, 31).at(23, 59, 59, 999_999_999),
);
assert_eq!(
    serde_json::to_string(&report)?,
    r#"{"name":"january","period":{"start":"2024-01-01","end":"2024-01-31","timezone":"UTC"}}"#,
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Time zone labels

By default, the time zone written when encoding a range is the abbreviation
in effect at the start of the range, such as `EST`. If the abbreviation at the
end of the range is different (such as `EDT`), then encoding fails instead of
silently dropping that information. Use [`ZoneLabel::IanaName`] to write the
IANA time zone identifier instead, which always round trips:

```
use jiff_daterange::{Codec, ZoneLabel};

let codec = Codec::new();
let range = codec.decode_parts("2024-03-01", "2024-03-31", "America/New_York")?;
assert!(codec.encode(&range).unwrap_err().is_mismatched_time_zone());

let codec = codec.zone_label(ZoneLabel::IanaName);
assert_eq!(codec.encode(&range)?.timezone, "America/New_York");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **serde** (enabled by default) - Provides `Serialize` and `Deserialize`
implementations for [`DateRange`], [`DateRangeFields`] and [`InstantRange`].
* **logging** - Emits log messages via the [`log`](https://docs.rs/log)
crate. Decoding logs the resolved time zone and computed instants at the
`TRACE` level, and failed encodes at the `DEBUG` level.
*/

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]

pub use crate::{
    codec::{Codec, DateRangeFields, ZoneLabel, DEFAULT_TIME_ZONE},
    error::Error,
    range::{DateRange, InstantRange},
};

#[macro_use]
mod logging;

mod codec;
mod error;
pub mod fmt;
mod range;
mod util;
