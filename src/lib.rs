#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! `demitasse` decodes the structure of JVM class files.
//!
//! A class file is read front-to-back from any [`std::io::Read`] source into a
//! [`ClassFile`](jvm::ClassFile): the version pair, the constant pool, the access flags,
//! the this/super class indices, the interfaces, the fields, the methods, and the
//! attributes. References into the constant pool are kept as the raw 1-based indices found
//! in the file and can be resolved lazily through [`ConstantPool`](jvm::ConstantPool).
//!
//! ```
//! use demitasse::jvm::ClassFile;
//!
//! let bytes = [
//!     0xCA, 0xFE, 0xBA, 0xBE, // magic
//!     0x00, 0x00, 0x00, 0x34, // minor, major
//!     0x00, 0x02, // constant pool count
//!     0x01, 0x00, 0x04, b'T', b'e', b's', b't', // #1 Utf8 "Test"
//!     0x00, 0x21, // access flags
//!     0x00, 0x01, 0x00, 0x00, // this class, super class
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // no interfaces, fields, methods, attributes
//! ];
//! let class_file = ClassFile::parse(&bytes)?;
//! assert_eq!(class_file.major_version, 52);
//! assert_eq!(class_file.constant_pool.get_str(1)?, "Test");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
#![doc = document_features::document_features!()]

pub mod jvm;
pub(crate) mod macros;

/// Test utilities
#[cfg(test)]
pub mod tests;
