pub mod color;
mod error;
pub mod fields;
mod read_ext;
pub mod registry;
pub mod scalar;
pub mod sector;
pub mod walker;


use std::io::Write;

use tracing::debug;

pub use crate::color::Palette;
pub use crate::error::DumpError;
pub use crate::sector::{read_sector, Sector};


/// Dumps the volume descriptor in `sector` to `out`.
///
/// The signature and the descriptor type are checked before anything is written, so nothing is
/// output if the sector cannot be dumped.
pub fn dump_sector<W: Write>(
    out: &mut W,
    sector: &Sector,
    palette: &Palette,
) -> Result<(), DumpError> {
    crate::sector::check_signature(sector)?;
    let table = crate::registry::resolve(sector[0])?;
    debug!("dumping {} fields", table.len());
    crate::walker::walk_fields(out, sector, table, 0, palette)?;
    Ok(())
}
