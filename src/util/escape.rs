/*!
Provides convenience routines for escaping raw bytes in error messages.
*/

/// Provides a convenient `Display` implementation for a `u8`.
///
/// The byte is treated as ASCII. Printable ASCII is written as is, and
/// everything else is written as an escape sequence with uppercase hex
/// digits, e.g., `\xFF`.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.0 {
            b' ' => f.write_str(" "),
            b'\t' => f.write_str(r"\t"),
            b'\n' => f.write_str(r"\n"),
            b'\r' => f.write_str(r"\r"),
            b'\\' => f.write_str(r"\\"),
            b if b.is_ascii_graphic() => write!(f, "{}", char::from(b)),
            b => write!(f, r"\x{b:02X}"),
        }
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
