use std::io::Read;

use super::{DecodeError, reader_utils::ValueReaderExt};

pub(super) const JAVA_CLASS_MAGIC: u32 = 0xCAFE_BABE;

/// The fixed-size header of a class file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Header {
    pub minor_version: u16,
    pub major_version: u16,
}

impl Header {
    /// Checks the magic number and reads the version pair.
    /// The minor version precedes the major version in the file.
    pub(super) fn from_reader<R: Read + ?Sized>(reader: &mut R) -> Result<Self, DecodeError> {
        let magic: u32 = reader.read_value()?;
        if magic != JAVA_CLASS_MAGIC {
            return Err(DecodeError::InvalidMagic(magic));
        }
        let minor_version = reader.read_value()?;
        let major_version = reader.read_value()?;
        Ok(Self {
            minor_version,
            major_version,
        })
    }
}
