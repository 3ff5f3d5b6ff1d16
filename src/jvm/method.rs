//! Methods of a class.

use std::borrow::Cow;

use bitflags::bitflags;

use super::{
    Attribute,
    attribute::find_by_name,
    constant_pool::{self, ConstantPool},
};
use crate::macros::see_jvm_spec;

/// A method declared in a class.
#[doc = see_jvm_spec!(4, 6)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// The raw access flags.
    pub access_flags: u16,
    /// The index in the constant pool of the method name.
    pub name_index: u16,
    /// The index in the constant pool of the method descriptor.
    pub descriptor_index: u16,
    /// The attributes of the method, including its `Code` if it has a body.
    pub attributes: Vec<Attribute>,
}

impl Method {
    /// The name of instance initialization methods.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";
    /// The name of class initialization methods.
    pub const CLASS_INITIALIZER_NAME: &'static str = "<clinit>";

    /// Interprets the raw access flags. Bits without a defined meaning are kept.
    #[must_use]
    pub const fn flags(&self) -> MethodAccessFlags {
        MethodAccessFlags::from_bits_retain(self.access_flags)
    }

    /// Resolves the name of the method.
    /// # Errors
    /// See [`ConstantPool::get_str`].
    pub fn name<'cp>(
        &self,
        constant_pool: &'cp ConstantPool,
    ) -> Result<Cow<'cp, str>, constant_pool::Error> {
        constant_pool.get_str(self.name_index)
    }

    /// Resolves the descriptor of the method.
    /// # Errors
    /// See [`ConstantPool::get_str`].
    pub fn descriptor<'cp>(
        &self,
        constant_pool: &'cp ConstantPool,
    ) -> Result<Cow<'cp, str>, constant_pool::Error> {
        constant_pool.get_str(self.descriptor_index)
    }

    /// Finds the first attribute of the method with the given name.
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        find_by_name(&self.attributes, name)
    }
}

bitflags! {
    /// The access flags of a [`Method`].
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct MethodAccessFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `private`; accessible only within the defining class and other classes belonging to the same nest.
        const PRIVATE = 0x0002;
        /// Declared `protected`; may be accessed within subclasses.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`; must not be overridden.
        const FINAL = 0x0010;
        /// Declared `synchronized`; invocation is wrapped by a monitor use.
        const SYNCHRONIZED = 0x0020;
        /// A bridge method, generated by the compiler.
        const BRIDGE = 0x0040;
        /// Declared with variable number of arguments.
        const VARARGS = 0x0080;
        /// Declared `native`; implemented in a language other than Java.
        const NATIVE = 0x0100;
        /// Declared `abstract`; no implementation is provided.
        const ABSTRACT = 0x0400;
        /// In a class file whose major version number is at least 46 and at most 60; Declared `strictfp`.
        const STRICT = 0x0800;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
    }
}
