use std::fmt;
use std::ops::Index;


/// Number of bytes rendered on each line of a [`HexDump`].
pub const BYTES_PER_LINE: usize = 16;

/// Number of two-byte slots on each line of a [`HexDump`].
const SLOTS_PER_LINE: usize = BYTES_PER_LINE / 2;


fn write_escaped(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "b\"")?;
    for &b in bytes {
        match b {
            0x00 => write!(f, "\\0")?,
            0x09 => write!(f, "\\t")?,
            0x0A => write!(f, "\\n")?,
            0x0D => write!(f, "\\r")?,
            0x22 => write!(f, "\\\"")?,
            // no need to escape 0x27
            0x5C => write!(f, "\\\\")?,
            0x20..=0x7E => write!(f, "{}", char::from(b))?,
            other => write!(f, "\\x{:02X}", other)?,
        }
    }
    write!(f, "\"")
}

fn gutter_char(b: u8) -> char {
    if (0x20..=0x7E).contains(&b) {
        char::from(b)
    } else {
        '.'
    }
}


/// A borrowed byte slice that displays as an escaped byte string literal, e.g. `b"CD001\x01"`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DisplayBytesSlice<'a>(&'a [u8]);
impl<'a> Default for DisplayBytesSlice<'a> {
    fn default() -> Self {
        Self(&[])
    }
}
impl<'a> fmt::Debug for DisplayBytesSlice<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayBytesSlice({})", self)
    }
}
impl<'a> fmt::Display for DisplayBytesSlice<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, self.0)
    }
}
impl<'a> From<DisplayBytesSlice<'a>> for &'a [u8] {
    fn from(value: DisplayBytesSlice<'a>) -> Self {
        value.0
    }
}
impl<'a> From<&'a [u8]> for DisplayBytesSlice<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self(value)
    }
}
impl<'a> AsRef<[u8]> for DisplayBytesSlice<'a> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}
impl<'a> Index<usize> for DisplayBytesSlice<'a> {
    type Output = u8;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
#[cfg(feature = "serde")]
impl<'a> serde::Serialize for DisplayBytesSlice<'a> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}


/// An `xxd`-style rendering of a byte slice.
///
/// Each line covers [`BYTES_PER_LINE`] bytes and consists of:
///
/// * `indent` spaces,
/// * eight five-character slots, each holding two bytes as four lowercase hex digits followed by a
///   space (a lone trailing byte is two hex digits followed by three spaces, a slot past the end of
///   the data is blank),
/// * a single space,
/// * the ASCII gutter, showing printable bytes (0x20 to 0x7E) as-is and everything else as `.`,
/// * a newline.
///
/// An empty slice renders as nothing at all.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
    indent: usize,
}
impl<'a> HexDump<'a> {
    pub fn new(bytes: &'a [u8], indent: usize) -> Self {
        Self {
            bytes,
            indent,
        }
    }
}
impl<'a> fmt::Display for HexDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.bytes.chunks(BYTES_PER_LINE) {
            write!(f, "{:indent$}", "", indent = self.indent)?;

            let mut slots = line.chunks(2);
            for _ in 0..SLOTS_PER_LINE {
                match slots.next() {
                    Some(&[hi, lo]) => write!(f, "{:02x}{:02x} ", hi, lo)?,
                    Some(&[lone]) => write!(f, "{:02x}   ", lone)?,
                    _ => write!(f, "     ")?,
                }
            }

            write!(f, " ")?;
            for &b in line {
                write!(f, "{}", gutter_char(b))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
