//! Reading and recognizing a volume descriptor sector.


use std::io::Read;

use display_bytes::DisplayBytesSlice;
use tracing::debug;

use crate::error::DumpError;
use crate::fields::SECTOR_SIZE;
use crate::read_ext::ReadExt;


/// The byte offset within a volume descriptor of the standard identifier.
///
/// See ISO9660 § 8.1.2.
const STANDARD_IDENTIFIER_OFFSET: usize = 1;

/// The standard identifier followed by the volume descriptor version.
///
/// See ISO9660 § 8.1.2 and § 8.1.3.
const STANDARD_IDENTIFIER_AND_VERSION: [u8; 6] = *b"CD001\x01";


/// A single logical sector holding one volume descriptor.
pub type Sector = [u8; SECTOR_SIZE];


/// Reads one sector from `reader`.
///
/// Any data beyond the first sector is left unread.
pub fn read_sector<R: Read>(reader: &mut R) -> Result<Box<Sector>, DumpError> {
    let mut sector = Box::new([0u8; SECTOR_SIZE]);
    let available = reader.read_exact_or_eof(sector.as_mut_slice())?;
    if available < SECTOR_SIZE {
        return Err(DumpError::TruncatedInput {
            expected: SECTOR_SIZE,
            available,
        });
    }
    Ok(sector)
}

/// Checks that `sector` carries the ISO9660 standard identifier and version 1.
pub fn check_signature(sector: &[u8]) -> Result<(), DumpError> {
    let signature_range = STANDARD_IDENTIFIER_OFFSET..STANDARD_IDENTIFIER_OFFSET+STANDARD_IDENTIFIER_AND_VERSION.len();
    let signature = sector.get(signature_range)
        .ok_or(DumpError::NotAVolumeDescriptor)?;
    if signature != &STANDARD_IDENTIFIER_AND_VERSION[..] {
        debug!("unexpected volume descriptor signature {}", DisplayBytesSlice::from(signature));
        return Err(DumpError::NotAVolumeDescriptor);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::{check_signature, read_sector};
    use crate::error::DumpError;
    use crate::fields::SECTOR_SIZE;
    use std::io::{self, Cursor, Read};
    use tracing_test::traced_test;

    #[test]
    fn test_read_full_sector() {
        let mut data = vec![0x55u8; SECTOR_SIZE + 10];
        data[SECTOR_SIZE - 1] = 0xAA;
        let sector = read_sector(&mut Cursor::new(&data)).unwrap();
        assert_eq!(sector[0], 0x55);
        assert_eq!(sector[SECTOR_SIZE - 1], 0xAA);
    }

    #[test]
    fn test_read_truncated() {
        let data = vec![0u8; 100];
        match read_sector(&mut Cursor::new(&data)) {
            Err(DumpError::TruncatedInput { expected, available }) => {
                assert_eq!(expected, SECTOR_SIZE);
                assert_eq!(available, 100);
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::ErrorKind::PermissionDenied.into())
            }
        }
        let err = read_sector(&mut Broken).unwrap_err();
        assert!(matches!(err, DumpError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }

    #[test]
    fn test_signature_accepted() {
        check_signature(b"\x01CD001\x01\x00").unwrap();
        check_signature(b"\xFFCD001\x01").unwrap();
    }

    #[test]
    #[traced_test]
    fn test_signature_rejected() {
        assert!(matches!(check_signature(b"\x01CD002\x01"), Err(DumpError::NotAVolumeDescriptor)));
        assert!(matches!(check_signature(b"\x01CD001\x02"), Err(DumpError::NotAVolumeDescriptor)));
        assert!(matches!(check_signature(b"\x01CDROM\x01"), Err(DumpError::NotAVolumeDescriptor)));
        assert!(logs_contain("unexpected volume descriptor signature"));
    }

    #[test]
    fn test_signature_too_short() {
        assert!(matches!(check_signature(b"\x01CD0"), Err(DumpError::NotAVolumeDescriptor)));
    }
}
