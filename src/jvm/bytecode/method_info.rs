use std::io::Read;

use super::{DecodeError, attribute::read_attributes, reader_utils::ValueReaderExt};
use crate::jvm::{ConstantPool, Method};

impl Method {
    pub(super) fn from_reader<R>(
        reader: &mut R,
        constant_pool: &ConstantPool,
    ) -> Result<Self, DecodeError>
    where
        R: Read + ?Sized,
    {
        let access_flags = reader.read_value()?;
        let name_index = reader.read_value()?;
        let descriptor_index = reader.read_value()?;
        let attributes = read_attributes(reader, constant_pool)?;
        Ok(Self {
            access_flags,
            name_index,
            descriptor_index,
            attributes,
        })
    }
}
