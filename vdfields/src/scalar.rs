//! Decoding of single-value fields.
//!
//! The numeric encodings follow ECMA-119 § 7; the timestamp follows § 9.1.5.


use std::fmt;


/// How the bytes of a field are to be interpreted.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum EncodingKind {
    /// Opaque bytes without a parsed value; only shown as a hex dump.
    Opaque,

    /// 8-bit unsigned number (§ 7.1.1).
    U8,

    /// 16-bit unsigned number, little-endian.
    ///
    /// Also used for the both-byte-order 16-bit fields (§ 7.2.3), of which only the little-endian
    /// half is decoded.
    U16Le,

    /// 32-bit unsigned number, little-endian (§ 7.3.1).
    U32Le,

    /// 32-bit unsigned number, big-endian (§ 7.3.2).
    U32Be,

    /// 32-bit unsigned number, recorded once little-endian and once big-endian (§ 7.3.3).
    ///
    /// Only the little-endian half is decoded; the big-endian half only shows up in the hex dump.
    U32BothEndian,

    /// Seven-byte binary timestamp of a directory record (§ 9.1.5).
    Timestamp7,

    /// The bytes form a nested directory record which is expanded field by field.
    DirectoryRecord,
}
impl EncodingKind {
    /// Interprets `bytes` according to this encoding.
    ///
    /// Returns `None` for encodings without a scalar value, for unset timestamps and for slices
    /// too short to hold the encoded value.
    pub fn decode(self, bytes: &[u8]) -> Option<ParsedValue> {
        match self {
            Self::Opaque | Self::DirectoryRecord => None,
            Self::U8 => {
                let b = *bytes.first()?;
                Some(ParsedValue::Unsigned(b.into()))
            },
            Self::U16Le => {
                let buf: [u8; 2] = bytes.get(0..2)?.try_into().ok()?;
                Some(ParsedValue::Unsigned(u16::from_le_bytes(buf).into()))
            },
            Self::U32Le | Self::U32BothEndian => {
                let buf: [u8; 4] = bytes.get(0..4)?.try_into().ok()?;
                Some(ParsedValue::Unsigned(u32::from_le_bytes(buf)))
            },
            Self::U32Be => {
                let buf: [u8; 4] = bytes.get(0..4)?.try_into().ok()?;
                Some(ParsedValue::Unsigned(u32::from_be_bytes(buf)))
            },
            Self::Timestamp7 => {
                let buf: [u8; 7] = bytes.get(0..7)?.try_into().ok()?;
                BinaryTimestamp::from_bytes(buf)
                    .map(ParsedValue::Timestamp)
            },
        }
    }
}


/// A binary representation of a timestamp.
///
/// A year byte of zero marks the timestamp as unset.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BinaryTimestamp {
    /// The year since the year 1900.
    ///
    /// For example, a value of 90 designates the year 1990.
    pub year_since_1900: u8,

    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,

    /// Offset from GMT in units of 15min, from -48 to 52.
    pub gmt_offset_15min: i8,
}
impl BinaryTimestamp {
    /// Returns `None` if the timestamp is unset.
    pub fn from_bytes(bytes: [u8; 7]) -> Option<Self> {
        if bytes[0] == 0 {
            return None;
        }
        Some(Self {
            year_since_1900: bytes[0],
            month: bytes[1],
            day: bytes[2],
            hour: bytes[3],
            minute: bytes[4],
            second: bytes[5],
            gmt_offset_15min: i8::from_ne_bytes([bytes[6]]),
        })
    }

    pub fn year(&self) -> u32 {
        1900 + u32::from(self.year_since_1900)
    }

    /// The GMT offset in whole hours, truncated toward zero.
    pub fn gmt_offset_hours(&self) -> i8 {
        self.gmt_offset_15min / 4
    }
}
impl fmt::Display for BinaryTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {:02}:{:02}:{:02} GMT{:+03}",
            self.year(), self.month, self.day,
            self.hour, self.minute, self.second,
            self.gmt_offset_hours(),
        )
    }
}


/// The interpreted value of a single field.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ParsedValue {
    Unsigned(u32),
    Timestamp(BinaryTimestamp),
}
impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(value) => write!(f, "{}", value),
            Self::Timestamp(ts) => write!(f, "{}", ts),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{EncodingKind, ParsedValue};

    fn decoded(kind: EncodingKind, bytes: &[u8]) -> Option<String> {
        kind.decode(bytes).map(|v| v.to_string())
    }

    #[test]
    fn test_opaque_has_no_value() {
        assert_eq!(EncodingKind::Opaque.decode(b"CD001"), None);
        assert_eq!(EncodingKind::DirectoryRecord.decode(&[34; 34]), None);
    }

    #[test]
    fn test_u8() {
        assert_eq!(EncodingKind::U8.decode(&[0xFF, 0x01]), Some(ParsedValue::Unsigned(255)));
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(EncodingKind::U16Le.decode(&[0x34, 0x12]), Some(ParsedValue::Unsigned(0x1234)));
        // both-byte-order field: the big-endian half is ignored
        assert_eq!(EncodingKind::U16Le.decode(&[0x00, 0x08, 0x08, 0x00]), Some(ParsedValue::Unsigned(2048)));
    }

    #[test]
    fn test_u32_variants() {
        let both = [0x78, 0x56, 0x34, 0x12, 0x12, 0x34, 0x56, 0x78];
        assert_eq!(EncodingKind::U32Le.decode(&both[0..4]), Some(ParsedValue::Unsigned(0x1234_5678)));
        assert_eq!(EncodingKind::U32BothEndian.decode(&both), Some(ParsedValue::Unsigned(0x1234_5678)));
        assert_eq!(EncodingKind::U32Be.decode(&both[4..8]), Some(ParsedValue::Unsigned(0x1234_5678)));
        assert_eq!(EncodingKind::U32Be.decode(&[0x00, 0x00, 0x00, 0x13]), Some(ParsedValue::Unsigned(19)));
    }

    #[test]
    fn test_u32_high_bit() {
        assert_eq!(decoded(EncodingKind::U32Le, &[0xFF, 0xFF, 0xFF, 0xFF]).as_deref(), Some("4294967295"));
    }

    #[test]
    fn test_short_slice_has_no_value() {
        assert_eq!(EncodingKind::U8.decode(&[]), None);
        assert_eq!(EncodingKind::U16Le.decode(&[0x01]), None);
        assert_eq!(EncodingKind::U32Be.decode(&[0x01, 0x02, 0x03]), None);
        assert_eq!(EncodingKind::Timestamp7.decode(&[124, 1, 1]), None);
    }

    #[test]
    fn test_timestamp_unset() {
        assert_eq!(EncodingKind::Timestamp7.decode(&[0, 1, 1, 0, 0, 0, 4]), None);
        assert_eq!(EncodingKind::Timestamp7.decode(&[0; 7]), None);
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(
            decoded(EncodingKind::Timestamp7, &[124, 1, 1, 0, 0, 0, 4]).as_deref(),
            Some("2024-01-01 00:00:00 GMT+01"),
        );
        assert_eq!(
            decoded(EncodingKind::Timestamp7, &[99, 12, 31, 23, 59, 58, 0]).as_deref(),
            Some("1999-12-31 23:59:58 GMT+00"),
        );
    }

    #[test]
    fn test_timestamp_negative_offset() {
        // -20 quarter hours = -5h
        assert_eq!(
            decoded(EncodingKind::Timestamp7, &[90, 7, 4, 12, 30, 0, 0xEC]).as_deref(),
            Some("1990-07-04 12:30:00 GMT-05"),
        );
        // -2 quarter hours truncates toward zero
        assert_eq!(
            decoded(EncodingKind::Timestamp7, &[90, 7, 4, 12, 30, 0, 0xFE]).as_deref(),
            Some("1990-07-04 12:30:00 GMT+00"),
        );
    }
}
