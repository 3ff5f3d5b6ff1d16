//! The decoding logic for the JVM class file format.
mod attribute;
mod class_file;
mod constant_pool;
mod errors;
mod field_info;
mod header;
mod method_info;
mod reader_utils;

pub use errors::DecodeError;
