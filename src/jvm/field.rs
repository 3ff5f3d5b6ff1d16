//! Fields of a class.

use std::borrow::Cow;

use bitflags::bitflags;

use super::{
    Attribute,
    attribute::find_by_name,
    constant_pool::{self, ConstantPool},
};
use crate::macros::see_jvm_spec;

/// A field declared in a class.
#[doc = see_jvm_spec!(4, 5)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The raw access flags.
    pub access_flags: u16,
    /// The index in the constant pool of the field name.
    pub name_index: u16,
    /// The index in the constant pool of the field descriptor.
    pub descriptor_index: u16,
    /// The attributes of the field.
    pub attributes: Vec<Attribute>,
}

impl Field {
    /// Interprets the raw access flags. Bits without a defined meaning are kept.
    #[must_use]
    pub const fn flags(&self) -> FieldAccessFlags {
        FieldAccessFlags::from_bits_retain(self.access_flags)
    }

    /// Resolves the name of the field.
    /// # Errors
    /// See [`ConstantPool::get_str`].
    pub fn name<'cp>(
        &self,
        constant_pool: &'cp ConstantPool,
    ) -> Result<Cow<'cp, str>, constant_pool::Error> {
        constant_pool.get_str(self.name_index)
    }

    /// Resolves the descriptor of the field.
    /// # Errors
    /// See [`ConstantPool::get_str`].
    pub fn descriptor<'cp>(
        &self,
        constant_pool: &'cp ConstantPool,
    ) -> Result<Cow<'cp, str>, constant_pool::Error> {
        constant_pool.get_str(self.descriptor_index)
    }

    /// Finds the first attribute of the field with the given name.
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        find_by_name(&self.attributes, name)
    }
}

bitflags! {
    /// The access flags of a [`Field`].
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct FieldAccessFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `private`; accessible only within the defining class and other classes belonging to the same nest.
        const PRIVATE = 0x0002;
        /// Declared `protected`; may be accessed within subclasses.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`; never directly assigned to after object construction.
        const FINAL = 0x0010;
        /// Declared `volatile`; cannot be cached.
        const VOLATILE = 0x0040;
        /// Declared `transient`; not written or read by a persistent object manager.
        const TRANSIENT = 0x0080;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
        /// Declared as an element of an `enum` class.
        const ENUM = 0x4000;
    }
}
