use std::io::Read;

use super::{DecodeError, attribute::read_attributes, reader_utils::ValueReaderExt};
use crate::jvm::{ConstantPool, Field};

impl Field {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::decode_pool;

    #[test]
    fn field_info_with_attribute() {
        // #1 Utf8 "ConstantValue"
        let pool = decode_pool(&[
            0x00, 0x02, 0x01, 0x00, 0x0D, b'C', b'o', b'n', b's', b't', b'a', b'n', b't', b'V',
            b'a', b'l', b'u', b'e',
        ]);
        let bytes = [
            0x00, 0x1A, 0x00, 0x05, 0x00, 0x06, // flags, name, descriptor
            0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x07, // ConstantValue #7
        ];
        let mut reader = bytes.as_slice();
        let field = Field::from_reader(&mut reader, &pool).unwrap();
        assert!(reader.is_empty());
        assert_eq!(field.access_flags, 0x001A);
        assert_eq!(field.name_index, 5);
        assert_eq!(field.descriptor_index, 6);
        assert_eq!(
            field.find_attribute("ConstantValue").map(|it| it.info.as_slice()),
            Some([0x00, 0x07].as_slice())
        );
    }

    #[test]
    fn missing_attribute_count_is_eof() {
        let pool = decode_pool(&[0x00, 0x01]);
        let bytes = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00];
        let err = Field::from_reader(&mut bytes.as_slice(), &pool).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof));
    }
}
