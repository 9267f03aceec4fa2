/// Splits the given input into two slices at the given position.
///
/// If the position is greater than the length of the slice given, then this
/// returns `None`.
#[inline(always)]
pub(crate) fn split(input: &[u8], at: usize) -> Option<(&[u8], &[u8])> {
    if at > input.len() {
        None
    } else {
        Some(input.split_at(at))
    }
}

/// Parses a non-negative integer from a slice of ASCII digits.
///
/// On failure, the first byte that isn't an ASCII digit is returned. Callers
/// must ensure the slice is short enough that its value fits in an `i64`.
#[inline(always)]
pub(crate) fn digits(bytes: &[u8]) -> Result<i64, u8> {
    let mut n: i64 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(byte);
        }
        n = n * 10 + i64::from(byte - b'0');
    }
    Ok(n)
}
