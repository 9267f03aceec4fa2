use jiff::civil::Date;

use crate::error;

/// Which side of a date range a value belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Field {
    Start,
    End,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::End => "end",
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Error {
    EndOfDayOverflow { date: Date },
    FormatDate { field: Field },
    MalformedDate { field: Field },
    MidnightNotRepresentable { field: Field },
    MismatchedTimeZone { start: Box<str>, end: Box<str> },
    UnknownTimeZone { name: Box<str> },
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
        error::ErrorKind::Codec(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            EndOfDayOverflow { date } => write!(
                f,
                "failed to find the last nanosecond of {date}, \
                 the following day is out of range",
            ),
            FormatDate { field } => write!(
                f,
                "failed to format {field} of date range",
                field = field.name(),
            ),
            MalformedDate { field } => write!(
                f,
                "failed to parse {field} date",
                field = field.name(),
            ),
            MidnightNotRepresentable { field } => write!(
                f,
                "failed to find the first instant of {field} date \
                 in the resolved time zone",
                field = field.name(),
            ),
            MismatchedTimeZone { ref start, ref end } => write!(
                f,
                "range dates have different time zones: \
                 start is in `{start}` but end is in `{end}`",
            ),
            UnknownTimeZone { ref name } => {
                write!(f, "failed to find time zone `{name}`")
            }
        }
    }
}
