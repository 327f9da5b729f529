//! Table-driven dumping of structures.


use std::io::{self, Write};

use display_bytes::HexDump;
use tracing::debug;

use crate::color::{Color, Palette};
use crate::fields::{DIRECTORY_RECORD, FieldDescriptor};
use crate::scalar::EncodingKind;


/// Additional indentation of the fields of a nested structure.
const NESTED_INDENT: usize = 2;


/// Dumps each field of `table` as found in `buf`.
///
/// Every field yields a header line:
///
/// ```plain
/// -- name offset length (parsed value)
/// ```
///
/// where the parenthesized value is only present if the field's encoding yields one. A nested
/// directory record is then dumped field by field with additional indentation; any other field is
/// followed by a hex dump of its bytes.
///
/// Dumping stops early at a field with an empty name.
pub fn walk_fields<W: Write>(
    out: &mut W,
    buf: &[u8],
    table: &[FieldDescriptor],
    indent: usize,
    palette: &Palette,
) -> Result<(), io::Error> {
    for field in table {
        if field.name.is_empty() {
            break;
        }

        let data = field.slice(buf);
        write_header(out, field, data, indent, palette)?;

        if field.encoding == EncodingKind::DirectoryRecord {
            debug!("expanding {} at indent {}", field.name, indent + NESTED_INDENT);
            walk_fields(out, data, &DIRECTORY_RECORD, indent + NESTED_INDENT, palette)?;
        } else {
            write!(out, "{}", HexDump::new(data, indent))?;
        }
    }
    Ok(())
}

fn write_header<W: Write>(
    out: &mut W,
    field: &FieldDescriptor,
    data: &[u8],
    indent: usize,
    palette: &Palette,
) -> Result<(), io::Error> {
    write!(
        out,
        "{:indent$}-- {}{}{} {} {}",
        "",
        palette.color(Color::Blue), field.name, palette.reset(),
        field.offset, field.length,
        indent = indent,
    )?;
    if let Some(value) = field.encoding.decode(data) {
        write!(out, " ({}{}{})", palette.color(Color::Green), value, palette.reset())?;
    }
    writeln!(out)
}
