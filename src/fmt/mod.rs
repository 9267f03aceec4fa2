/*!
Parsing and printing of calendar dates in the `YYYY-MM-DD` format.

This module exposes [`DateFormat`], a structured description of the date
format used on the wire by [`DateRange`](crate::DateRange). The format has
exactly one shape: a four digit year, a two digit month and a two digit day,
each zero padded and separated by `-`. Unlike a general purpose date parser,
no other shapes are accepted. There is no leading sign, no "basic" format
without separators and no trailing time.

# Example

```
use jiff::civil::date;
use jiff_daterange::fmt::YMD;

let d = YMD.parse("2024-02-29")?;
assert_eq!(d, date(2024, 2, 29));
assert_eq!(YMD.print(d)?, "2024-02-29");

assert!(YMD.parse("2024-2-29").is_err());
assert!(YMD.parse("20240229").is_err());
assert!(YMD.parse("2023-02-29").is_err());

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use jiff::civil::Date;

use crate::{
    error::{fmt::Error as E, Error, ErrorContext},
    util::parse,
};

/// The date format used by this crate.
pub const YMD: DateFormat = DateFormat::new();

/// A structured description of a `YYYY-MM-DD` date format.
///
/// The description records the width of each component and the separator
/// between them. Parsing requires every component to have exactly its width
/// in ASCII digits.
///
/// Callers will usually want to use the [`YMD`] constant.
#[derive(Clone, Copy, Debug)]
pub struct DateFormat {
    year_digits: u8,
    month_digits: u8,
    day_digits: u8,
    separator: u8,
}

impl DateFormat {
    /// Create a new description of the `YYYY-MM-DD` format.
    pub const fn new() -> DateFormat {
        DateFormat {
            year_digits: 4,
            month_digits: 2,
            day_digits: 2,
            separator: b'-',
        }
    }

    /// Parse a civil date from the given input.
    ///
    /// The entire input must match the format. An error is returned if a
    /// component has the wrong number of digits, if a separator is missing
    /// or if the date doesn't exist in the Gregorian calendar (such as
    /// `2023-02-29`).
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_daterange::fmt::DateFormat;
    ///
    /// let format = DateFormat::new();
    /// assert_eq!(format.parse("0000-01-01")?, date(0, 1, 1));
    /// assert!(format.parse("2024-04-31").is_err());
    /// assert!(format.parse(" 2024-04-30").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse<I: AsRef<[u8]>>(&self, input: I) -> Result<Date, Error> {
        let input = input.as_ref();
        let Parsed { value: date, input } = self.parse_date(input)?;
        if !input.is_empty() {
            return Err(Error::from(E::TrailingInput { len: input.len() }));
        }
        Ok(date)
    }

    /// Print a civil date in this format.
    ///
    /// This returns an error when the year of the date given cannot be
    /// written with four digits. That is, when it is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_daterange::fmt::YMD;
    ///
    /// assert_eq!(YMD.print(date(2024, 7, 4))?, "2024-07-04");
    /// assert_eq!(YMD.print(date(33, 1, 1))?, "0033-01-01");
    /// assert!(YMD.print(date(-1, 1, 1)).unwrap_err().is_out_of_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn print(&self, date: Date) -> Result<String, Error> {
        let year = date.year();
        if !(0..=9999).contains(&year) {
            return Err(Error::from(E::YearNotFourDigits { year }));
        }
        let sep = char::from(self.separator);
        Ok(format!(
            "{year:0yw$}{sep}{month:0mw$}{sep}{day:0dw$}",
            month = date.month(),
            day = date.day(),
            yw = usize::from(self.year_digits),
            mw = usize::from(self.month_digits),
            dw = usize::from(self.day_digits),
        ))
    }

    // Date :::
    //   Year Separator Month Separator Day
    fn parse_date<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Date>, Error> {
        let Parsed { value: year, input } =
            self.parse_component(input, Component::Year)?;
        let Parsed { input, .. } = self.parse_separator(input)?;
        let Parsed { value: month, input } =
            self.parse_component(input, Component::Month)?;
        let Parsed { input, .. } = self.parse_separator(input)?;
        let Parsed { value: day, input } =
            self.parse_component(input, Component::Day)?;

        // OK because a year has at most four digits and months and days have
        // at most two.
        let (year, month, day) = (year as i16, month as i8, day as i8);
        if !(1..=12).contains(&month) {
            return Err(Error::from(E::InvalidMonth { month }));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::from(E::InvalidDay { day }));
        }
        let date = Date::new(year, month, day).context(E::InvalidDate)?;
        Ok(Parsed { value: date, input })
    }

    // Year ::: DecimalDigit{4}
    // Month ::: DecimalDigit{2}
    // Day ::: DecimalDigit{2}
    fn parse_component<'i>(
        &self,
        input: &'i [u8],
        component: Component,
    ) -> Result<Parsed<'i, i64>, Error> {
        let digits = match component {
            Component::Year => self.year_digits,
            Component::Month => self.month_digits,
            Component::Day => self.day_digits,
        };
        let (field, input) = parse::split(input, usize::from(digits))
            .ok_or(E::ExpectedDigits { component, digits })?;
        let value = parse::digits(field)
            .map_err(|byte| E::InvalidDigit { component, byte })?;
        Ok(Parsed { value, input })
    }

    fn parse_separator<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ()>, Error> {
        let expected = self.separator;
        let Some((&found, rest)) = input.split_first() else {
            return Err(Error::from(E::ExpectedSeparatorFoundEndOfInput {
                expected,
            }));
        };
        if found != expected {
            return Err(Error::from(E::ExpectedSeparator { expected, found }));
        }
        Ok(Parsed { value: (), input: rest })
    }
}

impl Default for DateFormat {
    fn default() -> DateFormat {
        DateFormat::new()
    }
}

/// A component of a civil date, used for error messages.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Component {
    Year,
    Month,
    Day,
}

impl Component {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Component::Year => "year",
            Component::Month => "month",
            Component::Day => "day",
        }
    }
}

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the offset at which the value
/// ended in the input given. This makes it possible to parse, e.g., a year
/// and then the separator that follows it.
struct Parsed<'i, V> {
    value: V,
    input: &'i [u8],
}
