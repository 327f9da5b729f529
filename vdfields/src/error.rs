use std::fmt;


#[derive(Debug)]
pub enum DumpError {
    Io(std::io::Error),
    TruncatedInput { expected: usize, available: usize },
    NotAVolumeDescriptor,
    InvalidCode(u8),
    UnsupportedType(&'static str),
}
impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e)
                => write!(f, "IO error: {}", e),
            Self::TruncatedInput { expected, available }
                => write!(f, "Bytes expected: {}, available: {}", expected, available),
            Self::NotAVolumeDescriptor
                => write!(f, "It does not look like some iso9660 volume descriptor"),
            Self::InvalidCode(code)
                => write!(f, "Invalid VD code: {}", code),
            Self::UnsupportedType(name)
                => write!(f, "This tool does not support VD of type '{}'", name),
        }
    }
}
impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::TruncatedInput { .. } => None,
            Self::NotAVolumeDescriptor => None,
            Self::InvalidCode(_) => None,
            Self::UnsupportedType(_) => None,
        }
    }
}
impl From<std::io::Error> for DumpError {
    fn from(value: std::io::Error) -> Self { Self::Io(value) }
}
