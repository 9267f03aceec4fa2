use crate::{error, fmt::Component, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ExpectedDigits { component: Component, digits: u8 },
    ExpectedSeparator { expected: u8, found: u8 },
    ExpectedSeparatorFoundEndOfInput { expected: u8 },
    InvalidDate,
    InvalidDay { day: i8 },
    InvalidDigit { component: Component, byte: u8 },
    InvalidMonth { month: i8 },
    TrailingInput { len: usize },
    YearNotFourDigits { year: i16 },
}

impl Error {
    /// Returns true if this error occurred while parsing (as opposed to
    /// printing) a date.
    pub(crate) fn is_parse(&self) -> bool {
        !matches!(*self, Error::YearNotFourDigits { .. })
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ExpectedDigits { component, digits } => write!(
                f,
                "expected {digits} digit {component}, \
                 but found end of input",
                component = component.name(),
            ),
            ExpectedSeparator { expected, found } => write!(
                f,
                "expected `{expected}` separator, but found `{found}`",
                expected = escape::Byte(expected),
                found = escape::Byte(found),
            ),
            ExpectedSeparatorFoundEndOfInput { expected } => write!(
                f,
                "expected `{expected}` separator, but found end of input",
                expected = escape::Byte(expected),
            ),
            InvalidDate => f.write_str("parsed date is not a valid date"),
            InvalidDay { day } => write!(
                f,
                "parsed day {day} is not in the required range of 1..=31",
            ),
            InvalidDigit { component, byte } => write!(
                f,
                "expected ASCII digit in {component}, but found `{byte}`",
                component = component.name(),
                byte = escape::Byte(byte),
            ),
            InvalidMonth { month } => write!(
                f,
                "parsed month {month} is not in the required range of 1..=12",
            ),
            TrailingInput { len } => write!(
                f,
                "parsed a complete date, but found {len} unparsed \
                 trailing byte(s)",
            ),
            YearNotFourDigits { year } => write!(
                f,
                "year {year} cannot be written as four digits, \
                 years must be in the range 0..=9999",
            ),
        }
    }
}
