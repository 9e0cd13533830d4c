use std::fmt;

#[derive(Debug, PartialEq)]
pub enum LnkError {
    /// Input is well formed enough to classify but is not shell link data
    NotLnkData,
    /// Input is too short to even classify
    BadHeader,
    /// Structural nom failure while decoding a section
    Parse,
    /// An offset or size field points outside its governing structure
    BoundsViolation {
        structure: &'static str,
        offset: u32,
        size: u32,
    },
    /// A size or count field is impossible for its structure
    MalformedStructure { structure: &'static str },
    /// LinkInfo carries the Unicode offset quartet, which is not decoded
    UnsupportedUnicodeLinkInfo { header_size: u32 },
    /// Extra-data block size can never advance the chain
    MalformedExtraChain { size: u32 },
    ReadFile,
    ReadDirectory,
}

impl std::error::Error for LnkError {}

impl fmt::Display for LnkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LnkError::NotLnkData => write!(f, "Not shortcut data"),
            LnkError::BadHeader => write!(f, "Data too small for a shortcut header"),
            LnkError::Parse => write!(f, "Could not parse shortcut data"),
            LnkError::BoundsViolation {
                structure,
                offset,
                size,
            } => write!(
                f,
                "Offset {offset} in {structure} points outside its declared size {size}"
            ),
            LnkError::MalformedStructure { structure } => {
                write!(f, "Malformed {structure} structure")
            }
            LnkError::UnsupportedUnicodeLinkInfo { header_size } => write!(
                f,
                "LinkInfo with Unicode offsets (header size {header_size}) is not supported"
            ),
            LnkError::MalformedExtraChain { size } => {
                write!(f, "Extra data block size {size} cannot advance the chain")
            }
            LnkError::ReadFile => write!(f, "Could not read shortcut file"),
            LnkError::ReadDirectory => write!(f, "Could not read directory"),
        }
    }
}

impl<'a> From<nom::Err<nom::error::Error<&'a [u8]>>> for LnkError {
    fn from(_err: nom::Err<nom::error::Error<&'a [u8]>>) -> Self {
        LnkError::Parse
    }
}
