//! Protobuf descriptors for generated message trees.
//!
//! The streaming write API takes a `DescriptorProto` rather than `.proto`
//! text. This crate lowers a [`ProtoDocument`] into `prost-types`
//! descriptors: nested messages become `nested_type` entries and
//! message-typed fields refer to them by fully-qualified name
//! (`.RawClasses.Schedule`). Generated files carry no package.

use bqproto_core::{FieldType, Label, ProtoDocument, ProtoField, ProtoMessage, WireType};
use prost::Message;
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    field_descriptor_proto::{Label as DescriptorLabel, Type},
};

/// Build a `FileDescriptorProto` named `file_name` holding the document's
/// top-level message.
pub fn document_to_file_descriptor(doc: &ProtoDocument, file_name: &str) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(file_name.to_string()),
        message_type: vec![message_to_descriptor(&doc.message)],
        syntax: Some(doc.syntax.to_string()),
        ..Default::default()
    }
}

/// Wrap [`document_to_file_descriptor`] in a single-file `FileDescriptorSet`.
pub fn document_to_file_descriptor_set(doc: &ProtoDocument, file_name: &str) -> FileDescriptorSet {
    FileDescriptorSet {
        file: vec![document_to_file_descriptor(doc, file_name)],
    }
}

/// Serialized `FileDescriptorSet` bytes.
pub fn encode_file_descriptor_set(doc: &ProtoDocument, file_name: &str) -> Vec<u8> {
    document_to_file_descriptor_set(doc, file_name).encode_to_vec()
}

/// Self-contained descriptor of a top-level message, as expected by a write
/// stream's `ProtoSchema`.
pub fn message_to_descriptor(message: &ProtoMessage) -> DescriptorProto {
    build_descriptor(message, "")
}

fn build_descriptor(message: &ProtoMessage, parent_scope: &str) -> DescriptorProto {
    let scope = format!("{parent_scope}.{}", message.name);
    DescriptorProto {
        name: Some(message.name.clone()),
        field: message
            .fields
            .iter()
            .map(|f| field_descriptor(f, &scope))
            .collect(),
        nested_type: message
            .nested_messages()
            .map(|nested| build_descriptor(nested, &scope))
            .collect(),
        ..Default::default()
    }
}

fn field_descriptor(field: &ProtoField, scope: &str) -> FieldDescriptorProto {
    let label = match field.label {
        Label::Singular => DescriptorLabel::Optional,
        Label::Repeated => DescriptorLabel::Repeated,
    };
    let (typ, type_name) = match &field.field_type {
        FieldType::Scalar(wire) => (wire_type(*wire), None),
        FieldType::Message(nested) => (Type::Message, Some(format!("{scope}.{}", nested.name))),
    };

    FieldDescriptorProto {
        name: Some(field.name.clone()),
        number: Some(field.number as i32),
        label: Some(label.into()),
        r#type: Some(typ.into()),
        type_name,
        ..Default::default()
    }
}

fn wire_type(wire: WireType) -> Type {
    match wire {
        WireType::String => Type::String,
        WireType::Bytes => Type::Bytes,
        WireType::Int64 => Type::Int64,
        WireType::Double => Type::Double,
        WireType::Bool => Type::Bool,
    }
}
