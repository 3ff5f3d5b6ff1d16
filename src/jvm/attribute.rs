//! Attributes of classes, fields, and methods.

use super::{ConstantPool, DecodeError};
use crate::macros::see_jvm_spec;

/// An attribute of a class, a field, or a method.
///
/// The payload is kept as the raw bytes found in the class file. Attributes with a known
/// layout can be decoded on demand by name.
#[doc = see_jvm_spec!(4, 7)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The index in the constant pool of the attribute name.
    pub name_index: u16,
    /// The name of the attribute, resolved from the constant pool.
    pub name: String,
    /// The payload of the attribute.
    pub info: Vec<u8>,
}

impl Attribute {
    /// Gets the length of the payload in bytes.
    #[must_use]
    pub fn length(&self) -> usize {
        self.info.len()
    }

    /// Decodes the payload as `T` if the attribute is named [`T::NAME`](NamedAttribute::NAME).
    ///
    /// Returns `None` if the attribute has another name.
    #[instability::unstable(feature = "attribute-decoding")]
    pub fn decode_as<T>(&self, constant_pool: &ConstantPool) -> Option<Result<T, DecodeError>>
    where
        T: NamedAttribute,
    {
        (self.name == T::NAME).then(|| T::decode(&self.info, constant_pool))
    }
}

/// An attribute whose payload has a known layout.
#[instability::unstable(feature = "attribute-decoding")]
pub trait NamedAttribute: Sized {
    /// The name of the attribute, as stored in the constant pool.
    const NAME: &'static str;

    /// Decodes the payload of the attribute.
    /// # Errors
    /// Returns an error if the payload does not match the layout of the attribute.
    fn decode(info: &[u8], constant_pool: &ConstantPool) -> Result<Self, DecodeError>;
}

/// Finds the first attribute with the given name.
pub(crate) fn find_by_name<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|it| it.name == name)
}
