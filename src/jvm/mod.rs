//! The decoded structure of a JVM class file.

pub mod attribute;
mod bytecode;
pub mod class_file;
pub mod constant_pool;
pub mod field;
pub mod method;

pub use attribute::Attribute;
#[cfg(feature = "unstable-attribute-decoding")]
pub use attribute::NamedAttribute;
pub use bytecode::DecodeError;
pub use class_file::ClassFile;
pub use constant_pool::{Constant, ConstantPool, JavaString};
pub use field::Field;
pub use method::Method;
