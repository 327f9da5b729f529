//! Volume descriptor types and the field tables used to dump them.


use from_to_repr::from_to_other;
use tracing::debug;

use crate::error::DumpError;
use crate::fields::{FieldDescriptor, PRIMARY_VOLUME_DESCRIPTOR, SUPPLEMENTARY_VOLUME_DESCRIPTOR};


/// The type of an ISO9660 volume descriptor, as stored in its first byte.
#[derive(Clone, Copy, Debug)]
#[from_to_other(base_type = u8, derive_compare = "as_int")]
pub enum DescriptorType {
    BootRecord = 0x00,
    PrimaryVolumeDescriptor = 0x01,
    SupplementaryVolumeDescriptor = 0x02,
    VolumePartitionDescriptor = 0x03,
    SetTerminator = 0xFF,
    Other(u8),
}
impl DescriptorType {
    /// The name of this type and, if descriptors of this type can be dumped, their layout.
    ///
    /// Returns `None` if this is not a known type.
    pub fn name_and_table(self) -> Option<(&'static str, Option<&'static [FieldDescriptor]>)> {
        let name_and_table: (&'static str, Option<&'static [FieldDescriptor]>) = match self {
            Self::BootRecord => ("Boot Record", None),
            Self::PrimaryVolumeDescriptor => ("Primary Volume Descriptor", Some(PRIMARY_VOLUME_DESCRIPTOR.as_slice())),
            Self::SupplementaryVolumeDescriptor => ("Supplementary Volume Descriptor", Some(SUPPLEMENTARY_VOLUME_DESCRIPTOR.as_slice())),
            Self::VolumePartitionDescriptor => ("Volume Partition Descriptor", None),
            Self::SetTerminator => ("Volume Descriptor Set Terminator", None),
            Self::Other(_) => return None,
        };
        Some(name_and_table)
    }
}


/// What is known about a volume descriptor type.
#[derive(Clone, Copy, Debug)]
pub struct DescriptorTypeEntry {
    pub name: &'static str,
    pub code: u8,

    /// Whether descriptors of this type can be dumped.
    pub supported: bool,

    /// The layout of descriptors of this type; `Some` exactly if `supported`.
    pub table: Option<&'static [FieldDescriptor]>,
}


/// Looks up the registry entry for a type code.
pub fn entry(code: u8) -> Option<DescriptorTypeEntry> {
    let (name, table) = DescriptorType::from_base_type(code).name_and_table()?;
    Some(DescriptorTypeEntry {
        name,
        code,
        supported: table.is_some(),
        table,
    })
}

/// Returns the field table for descriptors of the given type code.
pub fn resolve(code: u8) -> Result<&'static [FieldDescriptor], DumpError> {
    let entry = entry(code)
        .ok_or(DumpError::InvalidCode(code))?;
    debug!("descriptor type {} is {:?}", code, entry.name);
    match entry.table {
        Some(table) if entry.supported => Ok(table),
        _ => Err(DumpError::UnsupportedType(entry.name)),
    }
}
