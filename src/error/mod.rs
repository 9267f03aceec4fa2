use std::sync::Arc;

pub(crate) mod codec;
pub(crate) mod fmt;

/// An error that can occur in this crate.
///
/// There are a few different kinds of error:
///
/// * A date range whose start and end carry different zone labels cannot be
/// encoded. See [`Error::is_mismatched_time_zone`].
/// * A time zone name that the time zone database doesn't know about cannot
/// be decoded. See [`Error::is_unknown_time_zone`].
/// * A date that isn't written as `YYYY-MM-DD`, or that names a day that
/// doesn't exist, cannot be decoded. See [`Error::is_malformed_date`].
/// * A date outside of the supported range cannot be encoded or decoded.
/// See [`Error::is_out_of_range`].
///
/// Errors from Jiff itself (for example, a failed time zone lookup) are kept
/// as the cause of the error returned by this crate. They are part of this
/// error's `Display` output and are available via
/// [`std::error::Error::source`].
///
/// # Design
///
/// Just like Jiff, this crate uses one opaque error type for all of its
/// operations. The error is cheap to clone and is the size of one pointer.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error occurred because the start and end of a
    /// date range have different zone labels.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_daterange::DateRange;
    ///
    /// let start = date(2024, 1, 1).in_tz("America/New_York")?;
    /// let end = date(2024, 1, 31).in_tz("Europe/Paris")?;
    /// let range = DateRange::new(start, end);
    /// assert!(range.to_fields().unwrap_err().is_mismatched_time_zone());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_mismatched_time_zone(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                err.kind(),
                ErrorKind::Codec(codec::Error::MismatchedTimeZone { .. })
            )
        })
    }

    /// Returns true when this error occurred because a time zone name could
    /// not be found in the time zone database.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_daterange::Codec;
    ///
    /// let err = Codec::new()
    ///     .decode_parts("2024-01-01", "2024-01-31", "Not/AZone")
    ///     .unwrap_err();
    /// assert!(err.is_unknown_time_zone());
    /// ```
    pub fn is_unknown_time_zone(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                err.kind(),
                ErrorKind::Codec(codec::Error::UnknownTimeZone { .. })
            )
        })
    }

    /// Returns true when this error occurred because a date was not written
    /// as `YYYY-MM-DD` or named a day that doesn't exist.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_daterange::Codec;
    ///
    /// let codec = Codec::new();
    /// let err = codec.decode_parts("2023-13-01", "2024-01-31", "").unwrap_err();
    /// assert!(err.is_malformed_date());
    /// let err = codec.decode_parts("2023-02-29", "2024-01-31", "").unwrap_err();
    /// assert!(err.is_malformed_date());
    /// ```
    pub fn is_malformed_date(&self) -> bool {
        self.chain().any(|err| match *err.kind() {
            ErrorKind::Codec(codec::Error::MalformedDate { .. }) => true,
            ErrorKind::Fmt(ref err) => err.is_parse(),
            _ => false,
        })
    }

    /// Returns true when this error occurred because a date could not be
    /// represented. For example, the year `-0001` cannot be written with four
    /// digits, and the last nanosecond of `9999-12-31` is beyond the range of
    /// instants supported by Jiff.
    pub fn is_out_of_range(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                err.kind(),
                ErrorKind::Codec(
                    codec::Error::EndOfDayOverflow { .. }
                        | codec::Error::MidnightNotRepresentable { .. }
                ) | ErrorKind::Fmt(fmt::Error::YearNotFourDigits { .. })
            )
        })
    }

    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // OK because every consequent is built from a fresh `ErrorKind`, so
        // the `Arc` has exactly one reference and no cause.
        let inner = Arc::get_mut(&mut err.inner)
            .expect("consequent error must not be shared");
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns a chain of error values, starting with this one and ending
    /// with the root cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let cause = self.inner.cause.as_ref()?;
        // A Jiff error is always a leaf in our chain, so hand out the
        // original value instead of our wrapper around it.
        match *cause.kind() {
            ErrorKind::Jiff(ref err) => Some(err),
            _ => Some(cause),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
pub(crate) enum ErrorKind {
    Codec(self::codec::Error),
    Fmt(self::fmt::Error),
    Jiff(jiff::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Codec(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Jiff(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        ErrorKind::Jiff(err).into()
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls for every internal error type.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for jiff::Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self.into()
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// without calling `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// Note that if an `Error` is given for `consequent`, then this panics if
    /// it has a cause. (Because the cause would otherwise be dropped. An error
    /// causal chain is just a linked list, not a tree.)
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// The closure avoids paying the cost of contextual error creation (which
    /// may allocate) in the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: IntoError,
{
    #[inline(always)]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    #[inline(always)]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
