//! The constant pool of a class file.

use std::{borrow::Cow, fmt};

use crate::macros::see_jvm_spec;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Slot {
    Entry(Constant),
    Padding,
}

/// A JVM constant pool.
///
/// The pool is indexed from `1` to `constant_pool_count - 1`. Index `0` is never valid, and
/// the slot right after a [`Constant::Long`] or a [`Constant::Double`] is an unusable
/// placeholder. Looking up either of them yields nothing.
#[doc = see_jvm_spec!(4, 4)]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantPool {
    pub(super) slots: Vec<Slot>,
}

impl ConstantPool {
    /// Gets the entry at the given index, or `None` if the index is out of range or points to
    /// a placeholder slot.
    #[must_use]
    pub fn get(&self, index: u16) -> Option<&Constant> {
        match self.slots.get(usize::from(index)) {
            Some(Slot::Entry(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Gets the entry at the given index.
    /// # Errors
    /// - [`Error::BadIndex`] if `index` does not point to a valid entry.
    pub fn get_entry(&self, index: u16) -> Result<&Constant, Error> {
        self.get(index).ok_or(Error::BadIndex(index))
    }

    /// Gets the raw content of the [`Constant::Utf8`] entry at the given index.
    /// # Errors
    /// - [`Error::BadIndex`] if `index` does not point to a valid entry.
    /// - [`Error::MismatchedEntry`] if the entry is not a [`Constant::Utf8`].
    pub fn get_utf8(&self, index: u16) -> Result<&JavaString, Error> {
        match self.get_entry(index)? {
            Constant::Utf8(string) => Ok(string),
            it => Err(Error::mismatched(index, "CONSTANT_Utf8", it)),
        }
    }

    /// Gets the decoded text of the [`Constant::Utf8`] entry at the given index.
    /// # Errors
    /// - See [`ConstantPool::get_utf8`].
    /// - [`Error::MalformedUtf8`] if the entry is not valid modified UTF-8.
    pub fn get_str(&self, index: u16) -> Result<Cow<'_, str>, Error> {
        self.get_utf8(index)?
            .to_str()
            .ok_or(Error::MalformedUtf8(index))
    }

    /// Gets the binary name of the [`Constant::Class`] entry at the given index.
    /// # Errors
    /// - [`Error::MismatchedEntry`] if the entry is not a [`Constant::Class`], or if its name
    ///   is not a [`Constant::Utf8`].
    /// - See [`ConstantPool::get_str`].
    pub fn get_class_name(&self, index: u16) -> Result<Cow<'_, str>, Error> {
        match self.get_entry(index)? {
            &Constant::Class { name_index } => self.get_str(name_index),
            it => Err(Error::mismatched(index, "CONSTANT_Class", it)),
        }
    }

    /// Gets the name and the descriptor of the [`Constant::NameAndType`] entry at the given
    /// index.
    /// # Errors
    /// - [`Error::MismatchedEntry`] if the entry is not a [`Constant::NameAndType`].
    /// - See [`ConstantPool::get_str`].
    pub fn get_name_and_type(&self, index: u16) -> Result<(Cow<'_, str>, Cow<'_, str>), Error> {
        match self.get_entry(index)? {
            &Constant::NameAndType {
                name_index,
                descriptor_index,
            } => Ok((self.get_str(name_index)?, self.get_str(descriptor_index)?)),
            it => Err(Error::mismatched(index, "CONSTANT_NameAndType", it)),
        }
    }

    /// Iterates over the live entries together with their indices, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Constant)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Entry(entry) => u16::try_from(idx).ok().map(|idx| (idx, entry)),
                Slot::Padding => None,
            })
    }

    /// Gets the number of slots in the pool, including slot `0` and the placeholders after
    /// wide entries. For a well-formed class file this equals `constant_pool_count`.
    /// Note that this is NOT the number of entries.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Gets the number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|it| matches!(it, Slot::Entry(_)))
            .count()
    }

    /// Checks whether the pool contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConstantPool {
    fn default() -> Self {
        Self {
            slots: vec![Slot::Padding],
        }
    }
}

/// An error when looking up an entry in the [`ConstantPool`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The index is `0`, out of range, or points to a placeholder slot.
    #[error("Bad constant pool index: {0}")]
    BadIndex(u16),
    /// The index points to an entry of an unexpected kind.
    #[error("Mismatched constant pool entry #{index}, expected {expected}, but found {found}")]
    MismatchedEntry {
        /// The index that was looked up.
        index: u16,
        /// The kind of entry that was expected.
        expected: &'static str,
        /// The kind of entry that was found.
        found: &'static str,
    },
    /// The [`Constant::Utf8`] entry is not valid modified UTF-8.
    #[error("Constant pool entry #{0} is not valid modified UTF-8")]
    MalformedUtf8(u16),
}

impl Error {
    fn mismatched(index: u16, expected: &'static str, found: &Constant) -> Self {
        Self::MismatchedEntry {
            index,
            expected,
            found: found.constant_kind(),
        }
    }
}

/// The content of a [`Constant::Utf8`] entry, kept as the raw modified UTF-8 bytes found in
/// the class file.
#[doc = see_jvm_spec!(4, 4, 7)]
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct JavaString {
    bytes: Vec<u8>,
}

impl JavaString {
    /// Creates a string from raw modified UTF-8 bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Gets the raw modified UTF-8 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decodes the bytes as modified UTF-8.
    /// Returns `None` if the bytes are not valid modified UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        cesu8::from_java_cesu8(&self.bytes).ok()
    }

    /// Decodes the bytes as modified UTF-8, falling back to a lossy UTF-8 conversion.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.to_str()
            .unwrap_or_else(|| String::from_utf8_lossy(&self.bytes))
    }
}

impl From<&str> for JavaString {
    fn from(value: &str) -> Self {
        Self::from_bytes(cesu8::to_java_cesu8(value).into_owned())
    }
}

impl fmt::Display for JavaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for JavaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Some(text) => write!(f, "{text:?}"),
            None => f.debug_tuple("JavaString").field(&self.bytes).finish(),
        }
    }
}

/// An entry in the [`ConstantPool`].
///
/// Cross references are kept as the raw indices found in the class file. They are not checked
/// when the pool is decoded.
#[derive(Debug, Clone, PartialEq)]
#[repr(u8)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Constant {
    /// A modified UTF-8 string.
    #[doc = see_jvm_spec!(4, 4, 7)]
    Utf8(JavaString) = 1,
    /// An `int` constant.
    #[doc = see_jvm_spec!(4, 4, 4)]
    Integer(i32) = 3,
    /// A `float` constant.
    #[doc = see_jvm_spec!(4, 4, 4)]
    Float(f32) = 4,
    /// A `long` constant. It takes up two slots in the constant pool.
    #[doc = see_jvm_spec!(4, 4, 5)]
    Long {
        /// The high 32 bits.
        high_bytes: u32,
        /// The low 32 bits.
        low_bytes: u32,
    } = 5,
    /// A `double` constant. It takes up two slots in the constant pool.
    #[doc = see_jvm_spec!(4, 4, 5)]
    Double {
        /// The high 32 bits of the IEEE 754 representation.
        high_bytes: u32,
        /// The low 32 bits of the IEEE 754 representation.
        low_bytes: u32,
    } = 6,
    /// A class or an interface.
    #[doc = see_jvm_spec!(4, 4, 1)]
    Class {
        /// The index in the constant pool of its binary name.
        /// The entry at that index must be a [`Constant::Utf8`].
        name_index: u16,
    } = 7,
    /// A `java.lang.String` constant.
    #[doc = see_jvm_spec!(4, 4, 3)]
    String {
        /// The index in the constant pool of its UTF-8 value.
        /// The entry at that index must be a [`Constant::Utf8`].
        string_index: u16,
    } = 8,
    /// A field reference.
    #[doc = see_jvm_spec!(4, 4, 2)]
    FieldRef {
        /// The index in the constant pool of the class containing the field.
        /// The entry at that index must be a [`Constant::Class`].
        class_index: u16,
        /// The index in the constant pool of the name and type of the field.
        /// The entry at that index must be a [`Constant::NameAndType`].
        name_and_type_index: u16,
    } = 9,
    /// A method reference.
    #[doc = see_jvm_spec!(4, 4, 2)]
    MethodRef {
        /// The index in the constant pool of the class containing the method.
        /// The entry at that index must be a [`Constant::Class`].
        class_index: u16,
        /// The index in the constant pool of the name and type of the method.
        /// The entry at that index must be a [`Constant::NameAndType`].
        name_and_type_index: u16,
    } = 10,
    /// An interface method reference.
    #[doc = see_jvm_spec!(4, 4, 2)]
    InterfaceMethodRef {
        /// The index in the constant pool of the interface containing the method.
        /// The entry at that index must be a [`Constant::Class`].
        class_index: u16,
        /// The index in the constant pool of the name and type of the method.
        /// The entry at that index must be a [`Constant::NameAndType`].
        name_and_type_index: u16,
    } = 11,
    /// A name and type.
    #[doc = see_jvm_spec!(4, 4, 6)]
    NameAndType {
        /// The index in the constant pool of the name.
        /// The entry at that index must be a [`Constant::Utf8`].
        name_index: u16,
        /// The index in the constant pool of the descriptor.
        /// The entry at that index must be a [`Constant::Utf8`].
        descriptor_index: u16,
    } = 12,
    /// A method handle.
    #[doc = see_jvm_spec!(4, 4, 8)]
    MethodHandle {
        /// The kind of the method handle, ranging from `1` to `9`.
        reference_kind: u8,
        /// The index in the constant pool of the referenced field or method.
        reference_index: u16,
    } = 15,
    /// A method type.
    #[doc = see_jvm_spec!(4, 4, 9)]
    MethodType {
        /// The index in the constant pool of the method descriptor.
        /// The entry at that index must be a [`Constant::Utf8`].
        descriptor_index: u16,
    } = 16,
    /// A dynamically computed constant.
    #[doc = see_jvm_spec!(4, 4, 10)]
    Dynamic {
        /// The index of the bootstrap method in the `BootstrapMethods` attribute.
        bootstrap_method_attr_index: u16,
        /// The index in the constant pool of the name and type of the constant.
        /// The entry at that index must be a [`Constant::NameAndType`].
        name_and_type_index: u16,
    } = 17,
    /// A call site of `invokedynamic`.
    #[doc = see_jvm_spec!(4, 4, 10)]
    InvokeDynamic {
        /// The index of the bootstrap method in the `BootstrapMethods` attribute.
        bootstrap_method_attr_index: u16,
        /// The index in the constant pool of the name and type of the call site.
        /// The entry at that index must be a [`Constant::NameAndType`].
        name_and_type_index: u16,
    } = 18,
    /// A module.
    #[doc = see_jvm_spec!(4, 4, 11)]
    Module {
        /// The index in the constant pool of the module name.
        /// The entry at that index must be a [`Constant::Utf8`].
        name_index: u16,
    } = 19,
    /// A package exported or opened by a module.
    #[doc = see_jvm_spec!(4, 4, 12)]
    Package {
        /// The index in the constant pool of the package name.
        /// The entry at that index must be a [`Constant::Utf8`].
        name_index: u16,
    } = 20,
}

impl Constant {
    /// Returns the tag of this entry as it appears in the class file.
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            Self::Utf8(_) => 1,
            Self::Integer(_) => 3,
            Self::Float(_) => 4,
            Self::Long { .. } => 5,
            Self::Double { .. } => 6,
            Self::Class { .. } => 7,
            Self::String { .. } => 8,
            Self::FieldRef { .. } => 9,
            Self::MethodRef { .. } => 10,
            Self::InterfaceMethodRef { .. } => 11,
            Self::NameAndType { .. } => 12,
            Self::MethodHandle { .. } => 15,
            Self::MethodType { .. } => 16,
            Self::Dynamic { .. } => 17,
            Self::InvokeDynamic { .. } => 18,
            Self::Module { .. } => 19,
            Self::Package { .. } => 20,
        }
    }

    /// Gets the kind of this entry.
    #[must_use]
    pub const fn constant_kind(&self) -> &'static str {
        match self {
            Self::Utf8(_) => "CONSTANT_Utf8",
            Self::Integer(_) => "CONSTANT_Integer",
            Self::Float(_) => "CONSTANT_Float",
            Self::Long { .. } => "CONSTANT_Long",
            Self::Double { .. } => "CONSTANT_Double",
            Self::Class { .. } => "CONSTANT_Class",
            Self::String { .. } => "CONSTANT_String",
            Self::FieldRef { .. } => "CONSTANT_Fieldref",
            Self::MethodRef { .. } => "CONSTANT_Methodref",
            Self::InterfaceMethodRef { .. } => "CONSTANT_InterfaceMethodref",
            Self::NameAndType { .. } => "CONSTANT_NameAndType",
            Self::MethodHandle { .. } => "CONSTANT_MethodHandle",
            Self::MethodType { .. } => "CONSTANT_MethodType",
            Self::Dynamic { .. } => "CONSTANT_Dynamic",
            Self::InvokeDynamic { .. } => "CONSTANT_InvokeDynamic",
            Self::Module { .. } => "CONSTANT_Module",
            Self::Package { .. } => "CONSTANT_Package",
        }
    }

    /// Checks whether this entry takes up two slots in the constant pool.
    #[must_use]
    pub const fn is_wide(&self) -> bool {
        matches!(self, Self::Long { .. } | Self::Double { .. })
    }

    /// Gets the value of a [`Constant::Long`].
    #[must_use]
    #[allow(
        clippy::cast_possible_wrap,
        reason = "The two halves are the two's complement representation of the value"
    )]
    pub const fn as_long(&self) -> Option<i64> {
        match *self {
            Self::Long {
                high_bytes,
                low_bytes,
            } => Some(join_halves(high_bytes, low_bytes) as i64),
            _ => None,
        }
    }

    /// Gets the value of a [`Constant::Double`].
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match *self {
            Self::Double {
                high_bytes,
                low_bytes,
            } => Some(f64::from_bits(join_halves(high_bytes, low_bytes))),
            _ => None,
        }
    }
}

const fn join_halves(high_bytes: u32, low_bytes: u32) -> u64 {
    ((high_bytes as u64) << 32) | low_bytes as u64
}
