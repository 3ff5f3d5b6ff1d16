use std::io;

/// An error that occurs when decoding a class file.
///
/// Decoding stops at the first error; no partially decoded class is ever returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The byte source ended before a fixed-width or length-prefixed read could be satisfied.
    #[error("Unexpected end of input")]
    UnexpectedEof,
    /// The first four bytes are not `0xCAFEBABE`.
    #[error("Invalid magic number {0:#010x}, the input is not a class file")]
    InvalidMagic(u32),
    /// A constant pool entry starts with a tag that is not recognized.
    #[error("Unsupported constant pool tag {tag}")]
    UnsupportedConstantTag {
        /// The tag byte that was read.
        tag: u8,
    },
    /// The name index of an attribute does not point to a `CONSTANT_Utf8` entry.
    #[error("Attribute name index #{0} does not point to a CONSTANT_Utf8 entry")]
    InvalidAttributeNameIndex(u16),
    /// The underlying byte source failed.
    #[error("Failed to read from the byte source: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(err)
        }
    }
}
