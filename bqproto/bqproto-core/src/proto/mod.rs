//! Protobuf message tree produced by translation.

mod format;
mod types;

pub use format::{format_proto_document, format_proto_message};
pub use types::{
    FieldType, Label, PROTO3_SYNTAX, ProtoDocument, ProtoField, ProtoMessage, WireType,
};
