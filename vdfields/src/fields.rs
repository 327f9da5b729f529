//! Field layouts of volume descriptors and directory records.
//!
//! Each table lists the fields of a structure in the order in which they are printed, which is
//! also the order in which they are recorded.


use std::sync::LazyLock;

use crate::scalar::EncodingKind;


/// The number of bytes per logical sector, and therefore per volume descriptor.
pub const SECTOR_SIZE: usize = 2048;

/// The number of bytes of a directory record embedded in a volume descriptor.
///
/// This is the size of the root directory record, whose file identifier is a single byte.
pub const DIRECTORY_RECORD_SIZE: usize = 34;


/// A single field within a structure.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    pub name: &'static str,

    /// Byte offset of the field from the start of the containing structure.
    pub offset: usize,

    /// Number of bytes occupied by the field.
    pub length: usize,

    pub encoding: EncodingKind,
}
impl FieldDescriptor {
    pub const fn new(name: &'static str, offset: usize, length: usize, encoding: EncodingKind) -> Self {
        Self {
            name,
            offset,
            length,
            encoding,
        }
    }

    /// The offset one past the last byte of the field.
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// The bytes of this field within `buf`.
    ///
    /// Cut short (possibly to nothing) if `buf` ends before the field does.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        let start = self.offset.min(buf.len());
        let end = self.end().min(buf.len());
        &buf[start..end]
    }
}

const fn field(name: &'static str, offset: usize, length: usize, encoding: EncodingKind) -> FieldDescriptor {
    FieldDescriptor::new(name, offset, length, encoding)
}


/// Index of the field that holds the volume flags in a supplementary volume descriptor.
const SUPPLEMENTARY_FLAGS_INDEX: usize = 3;

/// Index of the field that holds the escape sequences in a supplementary volume descriptor.
const SUPPLEMENTARY_ESCAPE_INDEX: usize = 8;


/// Primary volume descriptor (ECMA-119 § 8.4).
pub static PRIMARY_VOLUME_DESCRIPTOR: [FieldDescriptor; 33] = {
    use EncodingKind::*;
    [
        field("code",                    0,     1,    U8),
        field("id",                      1,     5,    Opaque),
        field("version",                 6,     1,    U8),
        field("unused1",                 7,     1,    Opaque),
        field("system_id",               8,     32,   Opaque),
        field("volume_id",               40,    32,   Opaque),
        field("unused2",                 72,    8,    Opaque),
        field("volume_space_size",       80,    8,    U32BothEndian),
        field("unused3",                 88,    32,   Opaque),
        field("volume_set_size",         120,   4,    U16Le),
        field("volume_sequence_number",  124,   4,    U16Le),
        field("logical_block_size",      128,   4,    U16Le),
        field("path_table_size",         132,   8,    U32BothEndian),
        field("type_l_path_table",       140,   4,    U32Le),
        field("opt_type_l_path_table",   144,   4,    U32Le),
        field("type_m_path_table",       148,   4,    U32Be),
        field("opt_type_m_path_table",   152,   4,    U32Be),
        field("root_directory_record",   156,   34,   DirectoryRecord),
        field("volume_set_id",           190,   128,  Opaque),
        field("publisher_id",            318,   128,  Opaque),
        field("preparer_id",             446,   128,  Opaque),
        field("application_id",          574,   128,  Opaque),
        field("copyright_file_id",       702,   37,   Opaque),
        field("abstract_file_id",        739,   37,   Opaque),
        field("bibliographic_file_id",   776,   37,   Opaque),
        field("creation_date",           813,   17,   Opaque),
        field("modification_date",       830,   17,   Opaque),
        field("expiration_date",         847,   17,   Opaque),
        field("effective_date",          864,   17,   Opaque),
        field("file_structure_version",  881,   1,    U8),
        field("unused4",                 882,   1,    Opaque),
        field("application_data",        883,   512,  Opaque),
        field("unused5",                 1395,  653,  Opaque),
    ]
};

/// Directory record (ECMA-119 § 9.1).
///
/// The file identifier (`name`) is actually `name_len` bytes long; it is modeled as a single byte,
/// which is exact for the root directory record.
pub static DIRECTORY_RECORD: [FieldDescriptor; 11] = {
    use EncodingKind::*;
    [
        field("length",                  0,   1,  U8),
        field("ext_attr_length",         1,   1,  U8),
        field("extent",                  2,   8,  U32BothEndian),
        field("size",                    10,  8,  U32BothEndian),
        field("date",                    18,  7,  Timestamp7),
        field("flags",                   25,  1,  U8),
        field("file_unit_size",          26,  1,  U8),
        field("interleave",              27,  1,  U8),
        field("volume_sequence_number",  28,  4,  U16Le),
        field("name_len",                32,  1,  U8),
        field("name",                    33,  1,  Opaque),
    ]
};

/// Supplementary volume descriptor (ECMA-119 § 8.5).
pub static SUPPLEMENTARY_VOLUME_DESCRIPTOR: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(
    || derive_supplementary(&PRIMARY_VOLUME_DESCRIPTOR)
);


/// Derives the supplementary volume descriptor layout from the primary one.
///
/// Both share the same layout except that the supplementary descriptor stores volume flags in the
/// primary's `unused1` byte and escape sequences in its `unused3` bytes.
pub fn derive_supplementary(primary: &[FieldDescriptor]) -> Vec<FieldDescriptor> {
    let mut supplementary = primary.to_vec();
    if let Some(flags) = supplementary.get_mut(SUPPLEMENTARY_FLAGS_INDEX) {
        flags.name = "flags";
        flags.encoding = EncodingKind::U8;
    }
    if let Some(escape) = supplementary.get_mut(SUPPLEMENTARY_ESCAPE_INDEX) {
        escape.name = "escape";
    }
    supplementary
}
