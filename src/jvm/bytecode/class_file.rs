use std::io::Read;

use itertools::Itertools;
use tracing::debug;

use super::{
    DecodeError, attribute::read_attributes, header::Header, reader_utils::ValueReaderExt,
};
use crate::jvm::{ClassFile, ConstantPool, Field, Method};

impl ClassFile {
    /// Decodes a class file from the given reader.
    ///
    /// The reader is consumed front-to-back and never seeked. Bytes after the class-level
    /// attributes are left unread.
    /// # Errors
    /// Returns the first [`DecodeError`] encountered; nothing is returned for a partially
    /// decoded class.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn from_reader<R>(reader: &mut R) -> Result<Self, DecodeError>
    where
        R: Read + ?Sized,
    {
        let Header {
            minor_version,
            major_version,
        } = Header::from_reader(reader)?;
        debug!(major_version, minor_version, "header decoded");
        let constant_pool = ConstantPool::from_reader(reader)?;
        debug!(slots = constant_pool.slot_count(), "constant pool decoded");
        let access_flags = reader.read_value()?;
        let this_class = reader.read_value()?;
        let super_class = reader.read_value()?;
        let interfaces_count: u16 = reader.read_value()?;
        let interfaces: Vec<u16> = (0..interfaces_count)
            .map(|_| reader.read_value())
            .try_collect()?;
        let fields_count: u16 = reader.read_value()?;
        let fields: Vec<_> = (0..fields_count)
            .map(|_| Field::from_reader(reader, &constant_pool))
            .try_collect()?;
        let methods_count: u16 = reader.read_value()?;
        let methods: Vec<_> = (0..methods_count)
            .map(|_| Method::from_reader(reader, &constant_pool))
            .try_collect()?;
        let attributes = read_attributes(reader, &constant_pool)?;
        debug!(
            fields = fields.len(),
            methods = methods.len(),
            attributes = attributes.len(),
            "class file decoded"
        );

        Ok(Self {
            minor_version,
            major_version,
            constant_pool,
            access_flags,
            this_class,
            super_class,
            interfaces,
            fields,
            methods,
            attributes,
        })
    }

    /// Decodes a class file from the given bytes.
    /// # Errors
    /// See [`ClassFile::from_reader`].
    pub fn parse(mut bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_reader(&mut bytes)
    }
}
