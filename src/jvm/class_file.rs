//! The decoded class file.

use std::borrow::Cow;

use bitflags::bitflags;

use super::{
    Attribute, Field, Method,
    attribute::find_by_name,
    constant_pool::{self, ConstantPool},
};
use crate::macros::see_jvm_spec;

/// A decoded class file.
///
/// References into the [`ConstantPool`] are kept as the raw indices found in the class file.
/// They are checked only when they are resolved.
#[doc = see_jvm_spec!(4, 1)]
#[derive(Debug, Clone, PartialEq)]
pub struct ClassFile {
    /// The minor version of the class file.
    pub minor_version: u16,
    /// The major version of the class file.
    pub major_version: u16,
    /// The constant pool.
    pub constant_pool: ConstantPool,
    /// The raw access flags.
    pub access_flags: u16,
    /// The index in the constant pool of this class.
    pub this_class: u16,
    /// The index in the constant pool of the super class, or `0` if there is none.
    pub super_class: u16,
    /// The indices in the constant pool of the direct super interfaces.
    pub interfaces: Vec<u16>,
    /// The fields declared in the class.
    pub fields: Vec<Field>,
    /// The methods declared in the class.
    pub methods: Vec<Method>,
    /// The attributes of the class.
    pub attributes: Vec<Attribute>,
}

impl ClassFile {
    /// Gets the version of the class file.
    #[must_use]
    pub const fn version(&self) -> Version {
        Version {
            major: self.major_version,
            minor: self.minor_version,
        }
    }

    /// Interprets the raw access flags. Bits without a defined meaning are kept.
    #[must_use]
    pub const fn flags(&self) -> ClassAccessFlags {
        ClassAccessFlags::from_bits_retain(self.access_flags)
    }

    /// Resolves the binary name of this class.
    /// # Errors
    /// See [`ConstantPool::get_class_name`].
    pub fn this_class_name(&self) -> Result<Cow<'_, str>, constant_pool::Error> {
        self.constant_pool.get_class_name(self.this_class)
    }

    /// Resolves the binary name of the super class.
    /// Returns `None` if the class has no super class, i.e., `super_class` is `0`.
    /// # Errors
    /// See [`ConstantPool::get_class_name`].
    pub fn super_class_name(&self) -> Result<Option<Cow<'_, str>>, constant_pool::Error> {
        match self.super_class {
            0 => Ok(None),
            index => self.constant_pool.get_class_name(index).map(Some),
        }
    }

    /// Resolves the binary names of the direct super interfaces, in declaration order.
    /// # Errors
    /// See [`ConstantPool::get_class_name`].
    pub fn interface_names(&self) -> Result<Vec<Cow<'_, str>>, constant_pool::Error> {
        self.interfaces
            .iter()
            .map(|&index| self.constant_pool.get_class_name(index))
            .collect()
    }

    /// Finds the first field with the given name.
    /// Fields whose name cannot be resolved are skipped.
    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|it| it.name(&self.constant_pool).is_ok_and(|it| it == name))
    }

    /// Finds the first method with the given name and descriptor.
    /// Methods whose name or descriptor cannot be resolved are skipped.
    #[must_use]
    pub fn find_method(&self, name: &str, descriptor: &str) -> Option<&Method> {
        self.methods.iter().find(|it| {
            it.name(&self.constant_pool).is_ok_and(|it| it == name)
                && it
                    .descriptor(&self.constant_pool)
                    .is_ok_and(|it| it == descriptor)
        })
    }

    /// Finds the first attribute of the class with the given name.
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        find_by_name(&self.attributes, name)
    }
}

/// The version of a class file.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Hash, Copy, Clone, derive_more::Display)]
#[display("{major}.{minor}")]
pub struct Version {
    /// The major version.
    pub major: u16,
    /// The minor version.
    pub minor: u16,
}

impl Version {
    /// The major version of class files produced by JDK 1.1.
    pub const JDK_1_1_MAJOR: u16 = 45;

    /// Returns `true` if this class file is compiled with `--enable-preview`.
    #[must_use]
    pub const fn is_preview_enabled(&self) -> bool {
        self.major >= 56 && self.minor == 0xFFFF
    }

    /// Gets the Java SE release that introduced this major version, e.g., `8` for major
    /// version `52`. Releases before Java 5 are numbered by their `1.x` minor part.
    /// Returns `None` for major versions older than JDK 1.1.
    #[must_use]
    pub const fn java_release(&self) -> Option<u16> {
        if self.major < Self::JDK_1_1_MAJOR {
            None
        } else {
            Some(self.major - Self::JDK_1_1_MAJOR + 1)
        }
    }
}

bitflags! {
    /// The access flags of a class.
    #[doc = see_jvm_spec!(4, 1)]
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct ClassAccessFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `final`; no subclasses allowed.
        const FINAL = 0x0010;
        /// Treat superclass methods specially when invoked by the invokespecial instruction.
        const SUPER = 0x0020;
        /// Is an interface, not a class.
        const INTERFACE = 0x0200;
        /// Declared `abstract`; must not be instantiated.
        const ABSTRACT = 0x0400;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
        /// Declared as an annotation interface.
        const ANNOTATION = 0x2000;
        /// Declared as an enum class.
        const ENUM = 0x4000;
        /// Is a module, not a class or interface.
        const MODULE = 0x8000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_display() {
        let version = Version {
            major: 65,
            minor: 0,
        };
        assert_eq!(version.to_string(), "65.0");
        assert_eq!(version.java_release(), Some(21));
        assert!(!version.is_preview_enabled());
    }

    #[test]
    fn preview_version() {
        let version = Version {
            major: 61,
            minor: 0xFFFF,
        };
        assert!(version.is_preview_enabled());
        assert_eq!(version.java_release(), Some(17));
    }

    #[test]
    fn legacy_versions() {
        let jdk_1_1 = Version {
            major: 45,
            minor: 3,
        };
        assert_eq!(jdk_1_1.java_release(), Some(1));
        assert!(!jdk_1_1.is_preview_enabled());
        let too_old = Version {
            major: 44,
            minor: 0,
        };
        assert_eq!(too_old.java_release(), None);
        assert!(too_old < jdk_1_1);
    }
}
