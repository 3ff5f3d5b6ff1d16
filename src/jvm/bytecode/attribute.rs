use std::io::Read;

use tracing::trace;

use super::{
    DecodeError,
    reader_utils::{ValueReaderExt, read_byte_chunk},
};
use crate::jvm::{Attribute, ConstantPool};

impl Attribute {
    fn from_reader<R>(reader: &mut R, constant_pool: &ConstantPool) -> Result<Self, DecodeError>
    where
        R: Read + ?Sized,
    {
        let name_index = reader.read_value()?;
        let attribute_length: u32 = reader.read_value()?;
        let name = constant_pool
            .get_utf8(name_index)
            .map_err(|_| DecodeError::InvalidAttributeNameIndex(name_index))?
            .to_string_lossy()
            .into_owned();
        // The payload is consumed even if nothing interprets it, so that the next record
        // starts at the right offset.
        let info = read_byte_chunk(reader, u64::from(attribute_length))?;
        trace!(name = %name, length = attribute_length, "attribute read");
        Ok(Self {
            name_index,
            name,
            info,
        })
    }
}

/// Reads `attributes_count` followed by that many attributes.
pub(super) fn read_attributes<R>(
    reader: &mut R,
    constant_pool: &ConstantPool,
) -> Result<Vec<Attribute>, DecodeError>
where
    R: Read + ?Sized,
{
    let attributes_count: u16 = reader.read_value()?;
    (0..attributes_count)
        .map(|_| Attribute::from_reader(reader, constant_pool))
        .collect()
}
