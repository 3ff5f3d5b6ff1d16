use std::io::Read;

use tracing::trace;

use super::{
    DecodeError,
    reader_utils::{ValueReaderExt, read_byte_chunk},
};
use crate::jvm::constant_pool::{Constant, ConstantPool, JavaString, Slot};

impl ConstantPool {
    /// Reads `constant_pool_count` followed by the entries of the pool.
    ///
    /// The pool is indexed from `1` to `constant_pool_count - 1`, so the loop runs on slots
    /// consumed rather than entries produced: a wide entry fills its own slot and the
    /// placeholder after it.
    pub(crate) fn from_reader<R>(reader: &mut R) -> Result<Self, DecodeError>
    where
        R: Read + ?Sized,
    {
        let constant_pool_count: u16 = reader.read_value()?;
        let count = usize::from(constant_pool_count).max(1);
        let mut slots = Vec::with_capacity(count);
        slots.push(Slot::Padding);
        while slots.len() < count {
            let entry = Constant::from_reader(reader)?;
            trace!(index = slots.len(), kind = entry.constant_kind(), "constant decoded");
            if entry.is_wide() {
                slots.push(Slot::Entry(entry));
                trace!(index = slots.len(), "placeholder slot reserved");
                slots.push(Slot::Padding);
            } else {
                slots.push(Slot::Entry(entry));
            }
        }
        Ok(Self { slots })
    }
}

impl Constant {
    fn from_reader<R>(reader: &mut R) -> Result<Self, DecodeError>
    where
        R: Read + ?Sized,
    {
        let tag: u8 = reader.read_value()?;
        let entry = match tag {
            1 => {
                let length: u16 = reader.read_value()?;
                let bytes = read_byte_chunk(reader, u64::from(length))?;
                Self::Utf8(JavaString::from_bytes(bytes))
            }
            3 => Self::Integer(reader.read_value()?),
            4 => Self::Float(reader.read_value()?),
            5 => Self::Long {
                high_bytes: reader.read_value()?,
                low_bytes: reader.read_value()?,
            },
            6 => Self::Double {
                high_bytes: reader.read_value()?,
                low_bytes: reader.read_value()?,
            },
            7 => Self::Class {
                name_index: reader.read_value()?,
            },
            8 => Self::String {
                string_index: reader.read_value()?,
            },
            9 => Self::FieldRef {
                class_index: reader.read_value()?,
                name_and_type_index: reader.read_value()?,
            },
            10 => Self::MethodRef {
                class_index: reader.read_value()?,
                name_and_type_index: reader.read_value()?,
            },
            11 => Self::InterfaceMethodRef {
                class_index: reader.read_value()?,
                name_and_type_index: reader.read_value()?,
            },
            12 => Self::NameAndType {
                name_index: reader.read_value()?,
                descriptor_index: reader.read_value()?,
            },
            15 => Self::MethodHandle {
                reference_kind: reader.read_value()?,
                reference_index: reader.read_value()?,
            },
            16 => Self::MethodType {
                descriptor_index: reader.read_value()?,
            },
            17 => Self::Dynamic {
                bootstrap_method_attr_index: reader.read_value()?,
                name_and_type_index: reader.read_value()?,
            },
            18 => Self::InvokeDynamic {
                bootstrap_method_attr_index: reader.read_value()?,
                name_and_type_index: reader.read_value()?,
            },
            19 => Self::Module {
                name_index: reader.read_value()?,
            },
            20 => Self::Package {
                name_index: reader.read_value()?,
            },
            tag => return Err(DecodeError::UnsupportedConstantTag { tag }),
        };
        Ok(entry)
    }
}
