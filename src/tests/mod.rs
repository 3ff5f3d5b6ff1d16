//! A byte-level class file encoder used to build test inputs.

use proptest::prelude::*;

use crate::jvm::{Constant, ConstantPool};

/// Encodes a constant pool entry, starting with its tag.
pub(crate) fn constant_bytes(entry: &Constant) -> Vec<u8> {
    let mut bytes = vec![entry.tag()];
    match entry {
        Constant::Utf8(string) => {
            let length = u16::try_from(string.as_bytes().len()).unwrap();
            bytes.extend(length.to_be_bytes());
            bytes.extend(string.as_bytes());
        }
        Constant::Integer(value) => bytes.extend(value.to_be_bytes()),
        Constant::Float(value) => bytes.extend(value.to_bits().to_be_bytes()),
        &Constant::Long {
            high_bytes,
            low_bytes,
        }
        | &Constant::Double {
            high_bytes,
            low_bytes,
        } => {
            bytes.extend(high_bytes.to_be_bytes());
            bytes.extend(low_bytes.to_be_bytes());
        }
        &Constant::Class { name_index: index }
        | &Constant::String {
            string_index: index,
        }
        | &Constant::MethodType {
            descriptor_index: index,
        }
        | &Constant::Module { name_index: index }
        | &Constant::Package { name_index: index } => bytes.extend(index.to_be_bytes()),
        &Constant::FieldRef {
            class_index: first,
            name_and_type_index: second,
        }
        | &Constant::MethodRef {
            class_index: first,
            name_and_type_index: second,
        }
        | &Constant::InterfaceMethodRef {
            class_index: first,
            name_and_type_index: second,
        }
        | &Constant::NameAndType {
            name_index: first,
            descriptor_index: second,
        }
        | &Constant::Dynamic {
            bootstrap_method_attr_index: first,
            name_and_type_index: second,
        }
        | &Constant::InvokeDynamic {
            bootstrap_method_attr_index: first,
            name_and_type_index: second,
        } => {
            bytes.extend(first.to_be_bytes());
            bytes.extend(second.to_be_bytes());
        }
        &Constant::MethodHandle {
            reference_kind,
            reference_index,
        } => {
            bytes.push(reference_kind);
            bytes.extend(reference_index.to_be_bytes());
        }
    }
    bytes
}

/// Decodes a constant pool, starting with `constant_pool_count`, that must consume all the
/// given bytes.
pub(crate) fn decode_pool(bytes: &[u8]) -> ConstantPool {
    let mut reader = bytes;
    let pool = ConstantPool::from_reader(&mut reader).unwrap();
    assert!(reader.is_empty(), "{} bytes left after the pool", reader.len());
    pool
}

/// A `field_info` or `method_info` record.
#[derive(Debug, Clone)]
pub(crate) struct MemberBytes {
    pub access_flags: u16,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes: Vec<(u16, Vec<u8>)>,
}

/// Builds the bytes of a class file.
#[derive(Debug, Clone)]
pub(crate) struct ClassBytes {
    magic: u32,
    minor_version: u16,
    major_version: u16,
    constants: Vec<Constant>,
    access_flags: u16,
    this_class: u16,
    super_class: u16,
    interfaces: Vec<u16>,
    fields: Vec<MemberBytes>,
    methods: Vec<MemberBytes>,
    attributes: Vec<(u16, Vec<u8>)>,
}

impl ClassBytes {
    pub(crate) fn new(major_version: u16) -> Self {
        Self {
            magic: 0xCAFE_BABE,
            minor_version: 0,
            major_version,
            constants: Vec::new(),
            access_flags: 0,
            this_class: 0,
            super_class: 0,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub(crate) fn magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    pub(crate) fn minor_version(mut self, minor_version: u16) -> Self {
        self.minor_version = minor_version;
        self
    }

    pub(crate) fn constant(mut self, entry: Constant) -> Self {
        self.constants.push(entry);
        self
    }

    pub(crate) fn access_flags(mut self, access_flags: u16) -> Self {
        self.access_flags = access_flags;
        self
    }

    pub(crate) fn this_class(mut self, this_class: u16) -> Self {
        self.this_class = this_class;
        self
    }

    pub(crate) fn super_class(mut self, super_class: u16) -> Self {
        self.super_class = super_class;
        self
    }

    pub(crate) fn interfaces(mut self, interfaces: impl IntoIterator<Item = u16>) -> Self {
        self.interfaces.extend(interfaces);
        self
    }

    pub(crate) fn field(mut self, field: MemberBytes) -> Self {
        self.fields.push(field);
        self
    }

    pub(crate) fn method(mut self, method: MemberBytes) -> Self {
        self.methods.push(method);
        self
    }

    pub(crate) fn attribute(mut self, name_index: u16, info: Vec<u8>) -> Self {
        self.attributes.push((name_index, info));
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.magic.to_be_bytes());
        bytes.extend(self.minor_version.to_be_bytes());
        bytes.extend(self.major_version.to_be_bytes());
        let slots: usize = self
            .constants
            .iter()
            .map(|it| if it.is_wide() { 2 } else { 1 })
            .sum();
        push_length(&mut bytes, slots + 1);
        for entry in &self.constants {
            bytes.extend(constant_bytes(entry));
        }
        bytes.extend(self.access_flags.to_be_bytes());
        bytes.extend(self.this_class.to_be_bytes());
        bytes.extend(self.super_class.to_be_bytes());
        push_length(&mut bytes, self.interfaces.len());
        for interface in &self.interfaces {
            bytes.extend(interface.to_be_bytes());
        }
        for members in [&self.fields, &self.methods] {
            push_length(&mut bytes, members.len());
            for member in members {
                bytes.extend(member.access_flags.to_be_bytes());
                bytes.extend(member.name_index.to_be_bytes());
                bytes.extend(member.descriptor_index.to_be_bytes());
                push_attributes(&mut bytes, &member.attributes);
            }
        }
        push_attributes(&mut bytes, &self.attributes);
        bytes
    }
}

fn push_length(bytes: &mut Vec<u8>, length: usize) {
    bytes.extend(u16::try_from(length).unwrap().to_be_bytes());
}

fn push_attributes(bytes: &mut Vec<u8>, attributes: &[(u16, Vec<u8>)]) {
    push_length(bytes, attributes.len());
    for (name_index, info) in attributes {
        bytes.extend(name_index.to_be_bytes());
        bytes.extend(u32::try_from(info.len()).unwrap().to_be_bytes());
        bytes.extend(info);
    }
}

prop_compose! {
    fn arb_attributes()(
        payloads in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..3)
    ) -> Vec<(u16, Vec<u8>)> {
        // #1 is always a Utf8 entry in generated classes.
        payloads.into_iter().map(|info| (1, info)).collect()
    }
}

prop_compose! {
    fn arb_member()(
        access_flags in any::<u16>(),
        name_index in any::<u16>(),
        descriptor_index in any::<u16>(),
        attributes in arb_attributes(),
    ) -> MemberBytes {
        MemberBytes { access_flags, name_index, descriptor_index, attributes }
    }
}

prop_compose! {
    /// Generates the bytes of a well-formed class file whose attributes are all named by
    /// constant pool entry #1.
    pub(crate) fn arb_class_bytes()(
        major_version in 45u16..=68,
        minor_version in any::<u16>(),
        name in "[A-Za-z]{1,16}",
        constants in prop::collection::vec(any::<Constant>(), 0..16),
        access_flags in any::<u16>(),
        this_class in any::<u16>(),
        super_class in any::<u16>(),
        interfaces in prop::collection::vec(any::<u16>(), 0..4),
        fields in prop::collection::vec(arb_member(), 0..4),
        methods in prop::collection::vec(arb_member(), 0..4),
        attributes in arb_attributes(),
    ) -> Vec<u8> {
        let mut class = ClassBytes::new(major_version)
            .minor_version(minor_version)
            .constant(Constant::Utf8(name.as_str().into()))
            .access_flags(access_flags)
            .this_class(this_class)
            .super_class(super_class)
            .interfaces(interfaces);
        for entry in constants {
            class = class.constant(entry);
        }
        for field in fields {
            class = class.field(field);
        }
        for method in methods {
            class = class.method(method);
        }
        for (name_index, info) in attributes {
            class = class.attribute(name_index, info);
        }
        class.build()
    }
}
